//! Bracket markers for expected statement spans.
//!
//! Fixtures wrap every expected statement in `[` and `]`. Stripping the
//! markers yields the real source plus the spans the tree should report, so
//! fixtures must not contain literal brackets.

use std::cmp::Reverse;
use std::ops::Range;

use kerf_syntax::StatementTree;

/// A fixture with its markers removed.
#[derive(Debug)]
pub struct Marked {
    /// Source text without markers.
    pub source: String,
    /// Expected `(depth, byte span)` pairs in pre-order.
    pub spans: Vec<(usize, Range<usize>)>,
}

/// Strips `[`/`]` markers from `marked` and records the spans they enclose.
///
/// # Panics
///
/// Panics when the markers are unbalanced.
pub fn parse_markers(marked: &str) -> Marked {
    let mut source = String::with_capacity(marked.len());
    let mut open = Vec::new();
    let mut spans = Vec::new();
    for ch in marked.chars() {
        match ch {
            '[' => open.push(source.len()),
            ']' => {
                let start = open.pop().expect("unbalanced closing marker");
                spans.push((open.len(), start..source.len()));
            }
            _ => source.push(ch),
        }
    }
    assert!(open.is_empty(), "unbalanced opening marker");
    spans.sort_by_key(|(_, span)| (span.start, Reverse(span.end)));
    Marked { source, spans }
}

/// Returns the `(depth, byte span)` of every statement in pre-order.
pub fn tree_spans(tree: &StatementTree) -> Vec<(usize, Range<usize>)> {
    tree.iter()
        .map(|node| (node.depth(), node.byte_range()))
        .collect()
}

#[test]
fn nested_markers_record_depth() {
    let marked = parse_markers("[if (x) { [y = 1;] }]");
    assert_eq!(marked.source, "if (x) { y = 1; }");
    assert_eq!(marked.spans, vec![(0, 0..17), (1, 9..15)]);
}
