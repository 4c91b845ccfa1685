//! Token definitions for the query language.
//!
//! Tokens are defined with the logos derive macro. The grammar is small:
//! words, the `and` / `or` keywords, `~`, commas, parentheses, and the two
//! bracket kinds. `[[` must lex as a single token rather than two `[`s, and
//! logos longest-match takes care of that, the same way `]]` beats `]`.

use logos::Logos;
use std::fmt;

/// All tokens of the query language.
///
/// Keywords are recognized case-insensitively, consistent with tag matching
/// being case-insensitive throughout the system. A word like `android` is a
/// single `Word` token, not the keyword `and` plus trailing text, because
/// the longer match wins.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("[[")]
    OpenExact,

    #[token("]]")]
    CloseExact,

    #[token("[")]
    OpenContains,

    #[token("]")]
    CloseContains,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    #[token("~")]
    Tilde,

    #[token("and", ignore(ascii_case))]
    And,

    #[token("or", ignore(ascii_case))]
    Or,

    /// Any run of characters outside the reserved set. Case is preserved;
    /// comparisons happen case-insensitively at match time.
    #[regex(r"[^\s,\[\]()~]+", |lex| lex.slice().to_owned())]
    Word(String),
}

impl Token {
    /// Check if this token opens a group pattern (`[` or `[[`).
    pub fn opens_bracket(&self) -> bool {
        matches!(self, Token::OpenContains | Token::OpenExact)
    }

    /// Check if this token is a boolean operator keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Token::And | Token::Or)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenExact => write!(f, "[["),
            Token::CloseExact => write!(f, "]]"),
            Token::OpenContains => write!(f, "["),
            Token::CloseContains => write!(f, "]"),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Tilde => write!(f, "~"),
            Token::And => write!(f, "and"),
            Token::Or => write!(f, "or"),
            Token::Word(name) => write!(f, "{}", name),
        }
    }
}
