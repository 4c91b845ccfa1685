//! Tokenization entry points for the query language.
//!
//! The actual tokenization is handled entirely by logos; these helpers
//! collect tokens and surface unrecognized input as a [`LexError`]. The
//! grammar's catch-all word rule covers nearly everything, so lex failures
//! are rare, but they are reported rather than silently skipped.

use crate::query::tokens::Token;
use logos::Logos;
use std::fmt;

/// Errors that can occur during tokenization.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// Input the lexer could not assign to any token.
    UnrecognizedInput { text: String, start: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedInput { text, start } => {
                write!(f, "Unrecognized input '{}' at offset {}", text, start)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize a pattern string, discarding source locations.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize a pattern string, keeping each token's byte range.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, logos::Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError::UnrecognizedInput {
                    text: lexer.slice().to_string(),
                    start: lexer.span().start,
                })
            }
        }
    }

    Ok(tokens)
}
