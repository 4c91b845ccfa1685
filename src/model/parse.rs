//! Minimal annotation-string adapter.
//!
//! Builds a [`HedGroup`] tree from a plain annotation string: top-level
//! commas separate items, parentheses open explicit groups, whitespace
//! around items is insignificant. This is deliberately not a full HED
//! string parser: no placeholders, definitions, or schema awareness. It
//! exists so that tests and the command-line tool can construct documents
//! without an external parser.

use crate::model::node::{HedGroup, HedNode, HedTag};
use std::fmt;

/// Errors produced while building a document tree from an annotation string.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSyntaxError {
    /// A `)` with no matching `(`, or an unclosed `(`.
    UnbalancedParentheses,
    /// A leading, trailing, or doubled comma produced an empty item.
    EmptyItem,
    /// A group `()` with no content.
    EmptyGroup,
    /// A parenthesis in the middle of a tag, e.g. `A(B)` or `(A)B`.
    MisplacedParenthesis(String),
}

impl fmt::Display for DocumentSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSyntaxError::UnbalancedParentheses => {
                write!(f, "Unbalanced parentheses in annotation")
            }
            DocumentSyntaxError::EmptyItem => {
                write!(f, "Empty item in annotation (stray comma?)")
            }
            DocumentSyntaxError::EmptyGroup => write!(f, "Empty group in annotation"),
            DocumentSyntaxError::MisplacedParenthesis(item) => {
                write!(f, "Misplaced parenthesis in '{}'", item)
            }
        }
    }
}

impl std::error::Error for DocumentSyntaxError {}

/// Parse an annotation string into a document tree.
///
/// The returned root is a synthetic, non-explicit group holding the
/// top-level items; an empty or all-whitespace string yields an empty root.
pub fn parse_document(source: &str) -> Result<HedGroup, DocumentSyntaxError> {
    if source.trim().is_empty() {
        return Ok(HedGroup::root(Vec::new()));
    }
    let children = parse_items(source)?;
    Ok(HedGroup::root(children))
}

fn parse_items(source: &str) -> Result<Vec<HedNode>, DocumentSyntaxError> {
    let mut items = Vec::new();
    for raw in split_top_level(source)? {
        let item = raw.trim();
        if item.is_empty() {
            return Err(DocumentSyntaxError::EmptyItem);
        }
        items.push(parse_item(item)?);
    }
    Ok(items)
}

fn parse_item(item: &str) -> Result<HedNode, DocumentSyntaxError> {
    if let Some(inner) = strip_group_parens(item)? {
        if inner.trim().is_empty() {
            return Err(DocumentSyntaxError::EmptyGroup);
        }
        return Ok(HedNode::Group(HedGroup::explicit(parse_items(inner)?)));
    }
    if item.contains('(') || item.contains(')') {
        return Err(DocumentSyntaxError::MisplacedParenthesis(item.to_string()));
    }
    Ok(HedNode::Tag(HedTag::new(item)))
}

/// Split on commas that sit outside any parentheses.
fn split_top_level(source: &str) -> Result<Vec<&str>, DocumentSyntaxError> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in source.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(DocumentSyntaxError::UnbalancedParentheses)?;
            }
            ',' if depth == 0 => {
                items.push(&source[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(DocumentSyntaxError::UnbalancedParentheses);
    }
    items.push(&source[start..]);
    Ok(items)
}

/// If `item` is one parenthesized group, return its inner text.
///
/// The opening paren must close at the very end of the item, so `(A)(B)`
/// and `(A)B` are not treated as single groups.
fn strip_group_parens(item: &str) -> Result<Option<&str>, DocumentSyntaxError> {
    if !item.starts_with('(') {
        return Ok(None);
    }
    let mut depth = 0usize;
    for (i, c) in item.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(DocumentSyntaxError::UnbalancedParentheses)?;
                if depth == 0 {
                    if i == item.len() - 1 {
                        return Ok(Some(&item[1..i]));
                    }
                    return Err(DocumentSyntaxError::MisplacedParenthesis(item.to_string()));
                }
            }
            _ => {}
        }
    }
    Err(DocumentSyntaxError::UnbalancedParentheses)
}
