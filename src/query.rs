//! The query mini-language: lexer, parser, AST, and matcher.
//!
//! Compilation pipeline: pattern string -> [`lexer`] token stream ->
//! [`parser`] AST -> reusable [`Pattern`]. Evaluation walks the AST against
//! a document tree in [`matcher`].

pub mod ast;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod tokens;

pub use ast::{Expr, Pattern};
pub use error::PatternSyntaxError;
pub use lexer::{tokenize, tokenize_with_spans, LexError};
pub use matcher::MatchResult;
pub use parser::compile;
pub use tokens::Token;
