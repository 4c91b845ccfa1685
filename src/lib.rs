//! # hedsearch
//!
//! A structural query engine for HED (Hierarchical Event Descriptor)
//! annotation strings.
//!
//! An annotation document is an ordered tree of tags and parenthesized
//! groups, e.g. `Item, (Action/Communicate/Clear-throat)`. A query pattern
//! such as `(item or agent) and action` or `[[ a, b, [[c, d]] ]]` is
//! compiled once and can then be evaluated against any number of documents:
//!
//! - bare names test for tag presence anywhere in the document,
//! - `and` / `or` / `~` combine results, with `~` binding tightest and
//!   `and` binding tighter than `or`,
//! - `[...]` matches a group whose full subtree satisfies all listed items,
//! - `[[...]]` matches a group whose direct children satisfy the listed
//!   items exactly,
//! - top-level comma-separated clauses are implicitly ANDed.
//!
//! The compiled [`Pattern`] is immutable and side-effect free; it may be
//! evaluated concurrently from multiple threads. Evaluation allocates only
//! transient traversal state per call.

pub mod model;
pub mod query;

pub use model::{parse_document, DocumentSyntaxError, HedGroup, HedNode, HedTag};
pub use query::{compile, Expr, MatchResult, Pattern, PatternSyntaxError};
