//! Tree node definitions: tags, groups, and traversal.
//!
//! Two node kinds exist: [`HedTag`] leaves and [`HedGroup`] internal nodes.
//! Group children are ordered in the source but order never affects
//! matching, so group equality is a multiset comparison.
//!
//! Traversal over descendants uses an explicit stack rather than recursion,
//! keeping stack usage bounded for deeply nested documents.

use serde::Serialize;
use std::fmt;

/// A leaf node carrying a case-insensitive tag name.
///
/// Canonical HED tags are slash-separated paths such as
/// `Action/Communicate/Clear-throat`. A query term matches a tag when it
/// equals the full tag or any single path component, ignoring case; this is
/// what lets the term `action` find a schema-expanded `Action/.../Sneeze`.
#[derive(Debug, Clone, Serialize)]
pub struct HedTag {
    name: String,
}

impl HedTag {
    pub fn new(name: impl Into<String>) -> Self {
        HedTag { name: name.into() }
    }

    /// The tag name exactly as it appeared in the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether a query term matches this tag.
    ///
    /// True when `term` equals the full tag name or any slash-separated
    /// component of it, ignoring ASCII case.
    pub fn matches_term(&self, term: &str) -> bool {
        self.name.eq_ignore_ascii_case(term)
            || self.name.split('/').any(|part| part.eq_ignore_ascii_case(term))
    }
}

impl PartialEq for HedTag {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for HedTag {}

impl fmt::Display for HedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A child of a group: either a tag leaf or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HedNode {
    Tag(HedTag),
    Group(HedGroup),
}

impl fmt::Display for HedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HedNode::Tag(tag) => write!(f, "{}", tag),
            HedNode::Group(group) => write!(f, "{}", group),
        }
    }
}

/// An internal node holding an ordered sequence of tags and sub-groups.
///
/// A group is explicit when it was written with surrounding parentheses in
/// the source. Only explicit groups are candidates for the structural
/// `[...]` / `[[...]]` query clauses; the synthetic root that represents a
/// bare top-level listing is never itself a candidate, though its
/// descendants are.
#[derive(Debug, Clone, Serialize)]
pub struct HedGroup {
    children: Vec<HedNode>,
    is_explicit: bool,
}

impl HedGroup {
    pub fn new(children: Vec<HedNode>, is_explicit: bool) -> Self {
        HedGroup {
            children,
            is_explicit,
        }
    }

    /// A group written with parentheses in the source.
    pub fn explicit(children: Vec<HedNode>) -> Self {
        HedGroup::new(children, true)
    }

    /// The synthetic root group representing a whole document.
    pub fn root(children: Vec<HedNode>) -> Self {
        HedGroup::new(children, false)
    }

    pub fn children(&self) -> &[HedNode] {
        &self.children
    }

    pub fn is_explicit(&self) -> bool {
        self.is_explicit
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct tag children only.
    pub fn direct_tags(&self) -> impl Iterator<Item = &HedTag> {
        self.children.iter().filter_map(|child| match child {
            HedNode::Tag(tag) => Some(tag),
            HedNode::Group(_) => None,
        })
    }

    /// Direct sub-group children only.
    pub fn direct_groups(&self) -> impl Iterator<Item = &HedGroup> {
        self.children.iter().filter_map(|child| match child {
            HedNode::Group(group) => Some(group),
            HedNode::Tag(_) => None,
        })
    }

    /// All tags in this group's subtree, at any depth.
    pub fn iter_tags(&self) -> Tags<'_> {
        Tags {
            stack: self.children.iter().collect(),
        }
    }

    /// This group and every descendant group, at any depth.
    pub fn iter_groups(&self) -> Groups<'_> {
        Groups { stack: vec![self] }
    }
}

impl PartialEq for HedGroup {
    /// Order-independent multiset comparison: reordering children never
    /// changes equality.
    fn eq(&self, other: &Self) -> bool {
        self.is_explicit == other.is_explicit
            && multiset_eq(&self.children, &other.children)
    }
}

fn multiset_eq(left: &[HedNode], right: &[HedNode]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut used = vec![false; right.len()];
    for node in left {
        let mut found = false;
        for (i, candidate) in right.iter().enumerate() {
            if !used[i] && node == candidate {
                used[i] = true;
                found = true;
                break;
            }
        }
        if !found {
            return false;
        }
    }
    true
}

impl fmt::Display for HedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self
            .children
            .iter()
            .map(|child| child.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if self.is_explicit {
            write!(f, "({})", inner)
        } else {
            write!(f, "{}", inner)
        }
    }
}

/// Depth-first iterator over every tag in a subtree.
pub struct Tags<'a> {
    stack: Vec<&'a HedNode>,
}

impl<'a> Iterator for Tags<'a> {
    type Item = &'a HedTag;

    fn next(&mut self) -> Option<&'a HedTag> {
        while let Some(node) = self.stack.pop() {
            match node {
                HedNode::Tag(tag) => return Some(tag),
                HedNode::Group(group) => self.stack.extend(group.children.iter()),
            }
        }
        None
    }
}

/// Depth-first iterator over a group and all of its descendant groups.
pub struct Groups<'a> {
    stack: Vec<&'a HedGroup>,
}

impl<'a> Iterator for Groups<'a> {
    type Item = &'a HedGroup;

    fn next(&mut self) -> Option<&'a HedGroup> {
        let group = self.stack.pop()?;
        for child in &group.children {
            if let HedNode::Group(sub) = child {
                self.stack.push(sub);
            }
        }
        Some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> HedNode {
        HedNode::Tag(HedTag::new(name))
    }

    #[test]
    fn test_tag_equality_ignores_case() {
        assert_eq!(HedTag::new("Item"), HedTag::new("ITEM"));
        assert_ne!(HedTag::new("Item"), HedTag::new("Agent"));
    }

    #[test]
    fn test_term_matching_on_path_components() {
        let full = HedTag::new("Action/Communicate/Clear-throat");
        assert!(full.matches_term("action"));
        assert!(full.matches_term("Clear-throat"));
        assert!(full.matches_term("action/communicate/clear-throat"));
        assert!(!full.matches_term("act"));
        assert!(!full.matches_term("communicate/clear-throat"));
    }

    #[test]
    fn test_group_equality_is_order_independent() {
        let ab = HedGroup::explicit(vec![tag("A"), tag("B")]);
        let ba = HedGroup::explicit(vec![tag("b"), tag("a")]);
        assert_eq!(ab, ba);

        let aa = HedGroup::explicit(vec![tag("A"), tag("A")]);
        assert_ne!(ab, aa);
    }

    #[test]
    fn test_group_equality_respects_multiplicity() {
        let once = HedGroup::explicit(vec![tag("A")]);
        let twice = HedGroup::explicit(vec![tag("A"), tag("A")]);
        assert_ne!(once, twice);
    }

    #[test]
    fn test_explicit_flag_distinguishes_groups() {
        let explicit = HedGroup::explicit(vec![tag("A")]);
        let synthetic = HedGroup::root(vec![tag("A")]);
        assert_ne!(explicit, synthetic);
    }

    #[test]
    fn test_iter_tags_reaches_all_depths() {
        let doc = HedGroup::root(vec![
            tag("A"),
            HedNode::Group(HedGroup::explicit(vec![
                tag("B"),
                HedNode::Group(HedGroup::explicit(vec![tag("C")])),
            ])),
        ]);
        let mut names: Vec<_> = doc.iter_tags().map(|t| t.name().to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_iter_groups_includes_self_and_descendants() {
        let inner = HedGroup::explicit(vec![tag("C")]);
        let outer = HedGroup::explicit(vec![tag("B"), HedNode::Group(inner)]);
        let doc = HedGroup::root(vec![tag("A"), HedNode::Group(outer)]);

        assert_eq!(doc.iter_groups().count(), 3);
        assert_eq!(doc.iter_groups().filter(|g| g.is_explicit()).count(), 2);
    }

    #[test]
    fn test_display_round_trips_structure() {
        let doc = HedGroup::root(vec![
            tag("A"),
            HedNode::Group(HedGroup::explicit(vec![tag("B"), tag("C")])),
        ]);
        assert_eq!(doc.to_string(), "A, (B, C)");
    }
}
