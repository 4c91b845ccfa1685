//! Error types for pattern compilation.
//!
//! All malformed input is rejected at compile time; evaluation of a
//! well-formed pattern never fails.

use crate::query::lexer::LexError;
use std::fmt;

/// Errors raised while compiling a pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSyntaxError {
    /// Tokenization failed.
    Lex(LexError),
    /// A token appeared where the grammar does not allow it: unbalanced or
    /// mismatched delimiters, a stray comma, an operator with a missing
    /// operand, and so on.
    UnexpectedToken { found: String, position: usize },
    /// The pattern ended while an expression was still incomplete, e.g.
    /// `A and` or `(A and B`.
    UnexpectedEnd,
    /// The pattern contained no clauses at all.
    EmptyPattern,
}

impl fmt::Display for PatternSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternSyntaxError::Lex(err) => write!(f, "{}", err),
            PatternSyntaxError::UnexpectedToken { found, position } => {
                write!(f, "Unexpected '{}' at token {} in pattern", found, position)
            }
            PatternSyntaxError::UnexpectedEnd => {
                write!(f, "Pattern ended unexpectedly (missing operand or delimiter)")
            }
            PatternSyntaxError::EmptyPattern => write!(f, "Pattern is empty"),
        }
    }
}

impl std::error::Error for PatternSyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternSyntaxError::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for PatternSyntaxError {
    fn from(err: LexError) -> Self {
        PatternSyntaxError::Lex(err)
    }
}
