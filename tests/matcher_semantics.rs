//! End-to-end matcher semantics: the documented scenarios plus structural
//! edge cases, run through compile + parse_document + search.

use hedsearch::model::parse_document;
use hedsearch::query::compile;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

fn run(pattern: &str, annotation: &str) -> bool {
    let pattern = compile(pattern).unwrap();
    let document = parse_document(annotation).unwrap();
    pattern.is_match(&document)
}

#[rstest]
// Boolean search over canonical tags. The document carries its
// schema-expanded form, so the `action` term matches a path component.
#[case("(item or agent) and action", "Item, (Action/Communicate/Clear-throat)", true)]
#[case("(item or agent) and action", "Agent, Event", false)]
// Contains-groups need an explicit group covering all items.
#[case("[a, b]", "A, B", false)]
#[case("[a, b]", "(A, B)", true)]
#[case("[a, b]", "(A), (B)", false)]
#[case("[a, b]", "(A, (B))", true)]
// Exact-groups constrain direct children.
#[case("[[a, b]]", "(A, B)", true)]
#[case("[[a, b]]", "(B, A)", true)]
#[case("[[a, b]]", "(A, (B))", false)]
// An exact pattern may match a deeply nested group.
#[case("[[a, b, [[c, d]]]]", "(E, F, (A, B, (C, D)))", true)]
#[case("[[a, b, [[c, d]]]]", "(A, B, ((C, D)))", false)]
// Parenthesized boolean grouping.
#[case("a and (b or c)", "A, B", true)]
#[case("a and (b or c)", "B, C", false)]
fn documented_scenarios(#[case] pattern: &str, #[case] annotation: &str, #[case] expected: bool) {
    assert_eq!(
        run(pattern, annotation),
        expected,
        "pattern '{}' against '{}'",
        pattern,
        annotation
    );
}

#[rstest]
// Contains searches the whole subtree of one candidate group.
#[case("[a, b]", "X, (Y, (A, Z, (B)))", true)]
#[case("[a, b]", "(A, X), (B, Y)", false)]
// A nested contains item may be satisfied by the candidate itself.
#[case("[a, [b]]", "(A, (B))", true)]
#[case("[a, [a]]", "(A)", true)]
// Exact-set equality on direct tags: extras and shortfalls both fail.
#[case("[[a, b]]", "(A, B, C)", false)]
#[case("[[a]]", "(A, A)", true)]
// Nested exact items bind to direct subgroup children only.
#[case("[[b, [[a]] ]]", "(B, (A))", true)]
#[case("[[b, [[a]] ]]", "(B, ((A)))", false)]
// Negated items.
#[case("[a, ~b]", "(A, C)", true)]
#[case("[a, ~b]", "(A, (B))", false)]
#[case("[[a, ~b]]", "(A)", true)]
#[case("[[a, ~b]]", "(A, B)", false)]
// Independent top-level clauses may use different groups.
#[case("[[a]], [[b]]", "(A), (B)", true)]
#[case("[[a]], [[b]]", "(A)", false)]
#[case("[[ [[a]] ]], [[ [[d]] ]]", "((A)), ((D))", true)]
fn structural_edge_cases(#[case] pattern: &str, #[case] annotation: &str, #[case] expected: bool) {
    assert_eq!(
        run(pattern, annotation),
        expected,
        "pattern '{}' against '{}'",
        pattern,
        annotation
    );
}

#[test]
fn matched_groups_report_where_the_match_occurred() {
    let pattern = compile("[[a, b]]").unwrap();
    let document = parse_document("(X), (A, B), C").unwrap();
    let result = pattern.search(&document);

    assert!(result.matched);
    let rendered: Vec<String> = result
        .matched_groups
        .iter()
        .map(|group| group.to_string())
        .collect();
    assert_eq!(rendered, vec!["(A, B)".to_string()]);
}

#[test]
fn failed_search_reports_no_groups_for_failed_clauses() {
    let pattern = compile("[[z]]").unwrap();
    let document = parse_document("(A, B)").unwrap();
    let result = pattern.search(&document);

    assert!(!result.matched);
    assert!(result.matched_groups.is_empty());
}

#[test]
fn search_against_empty_document_is_false_not_an_error() {
    let pattern = compile("a, [b], [[c]]").unwrap();
    let document = parse_document("").unwrap();
    assert!(!pattern.is_match(&document));
}

#[test]
fn one_pattern_can_search_many_documents_concurrently() {
    let pattern = Arc::new(compile("[[a, b]]").unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let pattern = Arc::clone(&pattern);
            thread::spawn(move || {
                let annotation = if i % 2 == 0 { "(A, B)" } else { "(A, C)" };
                let document = parse_document(annotation).unwrap();
                (i, pattern.is_match(&document))
            })
        })
        .collect();

    for handle in handles {
        let (i, matched) = handle.join().unwrap();
        assert_eq!(matched, i % 2 == 0);
    }
}
