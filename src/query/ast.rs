//! Abstract syntax tree for compiled query patterns.
//!
//! The AST is a closed sum type so the matcher can match exhaustively;
//! there is no "unknown node kind" path at runtime. Nodes are immutable and
//! created once per compiled pattern; a [`Pattern`] holds no evaluation
//! state and may be reused against any number of documents.

use serde::Serialize;
use std::fmt;

/// One node of a compiled query expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// Tag presence test, e.g. `agent`.
    Tag(String),
    /// Both sides must hold.
    And(Box<Expr>, Box<Expr>),
    /// Either side must hold.
    Or(Box<Expr>, Box<Expr>),
    /// The inner expression must not hold.
    Not(Box<Expr>),
    /// Parentheses from the source; re-associates only, no structural
    /// meaning.
    Paren(Box<Expr>),
    /// `[...]`: some explicit group's full subtree satisfies every item.
    ContainsGroup(Vec<Expr>),
    /// `[[...]]`: some explicit group's direct children satisfy the items
    /// exactly.
    ExactGroup(Vec<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Tag(name) => write!(f, "{}", name),
            Expr::And(left, right) => write!(f, "{} and {}", left, right),
            Expr::Or(left, right) => write!(f, "{} or {}", left, right),
            Expr::Not(inner) => write!(f, "~{}", inner),
            Expr::Paren(inner) => write!(f, "({})", inner),
            Expr::ContainsGroup(items) => write!(f, "[{}]", join_items(items)),
            Expr::ExactGroup(items) => write!(f, "[[{}]]", join_items(items)),
        }
    }
}

fn join_items(items: &[Expr]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A compiled query pattern: one or more top-level clauses, implicitly
/// ANDed.
///
/// Patterns are produced by [`compile`](crate::query::parser::compile) and
/// evaluated with [`Pattern::search`](crate::query::matcher) /
/// [`Pattern::is_match`](crate::query::matcher). They are `Send + Sync` and
/// safe to evaluate concurrently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    clauses: Vec<Expr>,
}

impl Pattern {
    pub(crate) fn new(clauses: Vec<Expr>) -> Self {
        Pattern { clauses }
    }

    /// The top-level clauses in source order.
    pub fn clauses(&self) -> &[Expr] {
        &self.clauses
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_items(&self.clauses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_pattern_text() {
        let expr = Expr::Or(
            Box::new(Expr::And(
                Box::new(Expr::Tag("a".to_string())),
                Box::new(Expr::Tag("b".to_string())),
            )),
            Box::new(Expr::Not(Box::new(Expr::Tag("c".to_string())))),
        );
        assert_eq!(expr.to_string(), "a and b or ~c");
    }

    #[test]
    fn test_display_renders_group_patterns() {
        let expr = Expr::ExactGroup(vec![
            Expr::Tag("a".to_string()),
            Expr::ContainsGroup(vec![Expr::Tag("b".to_string())]),
        ]);
        assert_eq!(expr.to_string(), "[[a, [b]]]");
    }
}
