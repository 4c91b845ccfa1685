//! Document tree model for HED annotations.
//!
//! Queries run against a read-only tree of [`HedTag`] leaves and
//! [`HedGroup`] internal nodes. The tree is normally built by an external
//! HED string parser after schema canonicalization; this module also ships
//! a minimal annotation-string adapter ([`parse_document`]) sufficient for
//! tests and command-line use.

pub mod node;
pub mod parse;

pub use node::{HedGroup, HedNode, HedTag};
pub use parse::{parse_document, DocumentSyntaxError};
