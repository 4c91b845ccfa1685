//! Pattern evaluation against a document tree.
//!
//! Evaluation is a pure function of (pattern, document). Candidate search
//! for the structural `[...]` / `[[...]]` clauses ranges over every
//! explicit group in the document via the explicit-stack iterators of the
//! model; the synthetic root is skipped as a candidate but its descendants
//! are reachable. All bookkeeping lives in a per-call context, so one
//! pattern can be evaluated concurrently from many threads.

use crate::model::HedGroup;
use crate::query::ast::{Expr, Pattern};
use serde::Serialize;

/// Outcome of evaluating a pattern against one document.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    /// Whether every top-level clause held.
    pub matched: bool,
    /// The explicit groups that satisfied structural clauses, in discovery
    /// order, deduplicated. Used by callers to report where a match
    /// occurred.
    pub matched_groups: Vec<&'a HedGroup>,
}

/// Per-call accumulator for satisfying groups.
#[derive(Default)]
struct SearchContext<'a> {
    groups: Vec<&'a HedGroup>,
}

impl<'a> SearchContext<'a> {
    fn record(&mut self, group: &'a HedGroup) {
        if !self.groups.iter().any(|seen| std::ptr::eq(*seen, group)) {
            self.groups.push(group);
        }
    }
}

impl Pattern {
    /// Evaluate this pattern against a document tree.
    ///
    /// Never fails: a document with no matching structure yields
    /// `matched == false` and an empty group list.
    pub fn search<'a>(&self, document: &'a HedGroup) -> MatchResult<'a> {
        let mut ctx = SearchContext::default();
        let mut matched = true;
        for clause in self.clauses() {
            // Every clause is evaluated, so diagnostics cover all of them.
            let clause_matched = eval(clause, document, &mut ctx);
            matched = matched && clause_matched;
        }
        MatchResult {
            matched,
            matched_groups: ctx.groups,
        }
    }

    /// Boolean-only evaluation.
    pub fn is_match(&self, document: &HedGroup) -> bool {
        self.search(document).matched
    }
}

fn eval<'a>(expr: &Expr, document: &'a HedGroup, ctx: &mut SearchContext<'a>) -> bool {
    match expr {
        Expr::Tag(term) => document.iter_tags().any(|tag| tag.matches_term(term)),
        Expr::And(left, right) => {
            let left_matched = eval(left, document, ctx);
            let right_matched = eval(right, document, ctx);
            left_matched && right_matched
        }
        Expr::Or(left, right) => {
            let left_matched = eval(left, document, ctx);
            let right_matched = eval(right, document, ctx);
            left_matched || right_matched
        }
        Expr::Not(inner) => !eval(inner, document, ctx),
        Expr::Paren(inner) => eval(inner, document, ctx),
        Expr::ContainsGroup(items) => {
            let mut any = false;
            for group in explicit_groups(document) {
                if satisfies_contains(group, items) {
                    ctx.record(group);
                    any = true;
                }
            }
            any
        }
        Expr::ExactGroup(items) => {
            let mut any = false;
            for group in explicit_groups(document) {
                if satisfies_exact(group, items) {
                    ctx.record(group);
                    any = true;
                }
            }
            any
        }
    }
}

fn explicit_groups(document: &HedGroup) -> impl Iterator<Item = &HedGroup> {
    document.iter_groups().filter(|group| group.is_explicit())
}

/// Contains-mode: every item must be satisfied somewhere in the candidate's
/// full subtree.
fn satisfies_contains(group: &HedGroup, items: &[Expr]) -> bool {
    items.iter().all(|item| contains_item(group, item))
}

fn contains_item(group: &HedGroup, item: &Expr) -> bool {
    match item {
        Expr::Tag(term) => group.iter_tags().any(|tag| tag.matches_term(term)),
        Expr::Not(inner) => !contains_item(group, inner),
        Expr::Paren(inner) => contains_item(group, inner),
        // A nested bracket may be satisfied by the candidate itself or any
        // descendant explicit group, not just direct children.
        Expr::ContainsGroup(nested) => explicit_groups(group)
            .any(|descendant| satisfies_contains(descendant, nested)),
        Expr::ExactGroup(nested) => {
            explicit_groups(group).any(|descendant| satisfies_exact(descendant, nested))
        }
        Expr::And(left, right) => contains_item(group, left) && contains_item(group, right),
        Expr::Or(left, right) => contains_item(group, left) || contains_item(group, right),
    }
}

/// Exact-mode: the candidate's direct children must satisfy the items
/// exactly.
///
/// Direct tag children and plain-word items must cover each other (a
/// set-equality test on direct tags; nested tags inside subgroups do not
/// count). Each nested bracket item must be satisfied by a direct subgroup
/// child, never a grandchild. A negated item must not appear among the
/// direct children; it does not loosen the exactness rule for the rest.
fn satisfies_exact(group: &HedGroup, items: &[Expr]) -> bool {
    let mut plain_terms: Vec<&str> = Vec::new();
    let mut negated_terms: Vec<&str> = Vec::new();
    let mut brackets: Vec<(&Expr, bool)> = Vec::new();

    for item in items {
        let (inner, negated) = strip_negation(item);
        match inner {
            Expr::Tag(term) => {
                if negated {
                    negated_terms.push(term);
                } else {
                    plain_terms.push(term);
                }
            }
            Expr::ContainsGroup(_) | Expr::ExactGroup(_) => brackets.push((inner, negated)),
            // `and`/`or` never reach bracket item lists through the
            // grammar; fall back to subtree semantics for completeness.
            other => {
                let holds = contains_item(group, other);
                if holds == negated {
                    return false;
                }
            }
        }
    }

    for tag in group.direct_tags() {
        if !plain_terms.iter().any(|term| tag.matches_term(term)) {
            return false;
        }
    }
    for term in &plain_terms {
        if !group.direct_tags().any(|tag| tag.matches_term(term)) {
            return false;
        }
    }
    for term in &negated_terms {
        if group.direct_tags().any(|tag| tag.matches_term(term)) {
            return false;
        }
    }

    for (bracket, negated) in brackets {
        let satisfied = group
            .direct_groups()
            .any(|sub| bracket_satisfied_by(sub, bracket));
        if satisfied == negated {
            return false;
        }
    }

    true
}

fn bracket_satisfied_by(group: &HedGroup, bracket: &Expr) -> bool {
    match bracket {
        Expr::ContainsGroup(items) => satisfies_contains(group, items),
        Expr::ExactGroup(items) => satisfies_exact(group, items),
        other => contains_item(group, other),
    }
}

/// Peel `~` and parens off a bracket item, tracking negation parity.
fn strip_negation(item: &Expr) -> (&Expr, bool) {
    let mut current = item;
    let mut negated = false;
    loop {
        match current {
            Expr::Not(inner) => {
                negated = !negated;
                current = inner;
            }
            Expr::Paren(inner) => current = inner,
            _ => return (current, negated),
        }
    }
}
