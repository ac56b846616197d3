//! Behaviour-driven scenarios for statement tree construction.

use std::cell::RefCell;
use std::ops::Range;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{StatementTree, StatementTreeError};

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// Language identifier under test.
    language: String,
    /// Source text under test.
    source: String,
    /// Tree built by the `when` step.
    tree: Option<StatementTree>,
    /// Error raised while constructing or building the tree.
    error: Option<StatementTreeError>,
}

impl TestWorld {
    fn build(&mut self, range: Range<usize>) {
        let result = StatementTree::new(&self.language, self.source.as_str(), range)
            .and_then(|mut tree| tree.build_blocking().map(|()| tree));
        match result {
            Ok(tree) => self.tree = Some(tree),
            Err(error) => self.error = Some(error),
        }
    }

    fn tree(&self) -> &StatementTree {
        self.tree.as_ref().expect("tree should be built")
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips surrounding double quotes from a string if present.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

/// Expands the `\n` escapes used in feature files.
fn unescape(s: &str) -> String {
    strip_quotes(s).replace("\\n", "\n")
}

fn parse_offset(raw: &str) -> usize {
    strip_quotes(raw).trim().parse().expect("offset")
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("language {language}")]
fn given_language(world: &RefCell<TestWorld>, language: String) {
    world.borrow_mut().language = strip_quotes(&language).to_owned();
}

#[given("source {source}")]
fn given_source(world: &RefCell<TestWorld>, source: String) {
    world.borrow_mut().source = unescape(&source);
}

// =============================================================================
// When Steps
// =============================================================================

#[when("the whole document is built")]
fn when_whole_document_built(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    let len = w.source.len();
    w.build(0..len);
}

#[when("the range {start} to {end} is built")]
fn when_range_built(world: &RefCell<TestWorld>, start: String, end: String) {
    world
        .borrow_mut()
        .build(parse_offset(&start)..parse_offset(&end));
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("the top-level spans are {spans}")]
fn then_top_level_spans(world: &RefCell<TestWorld>, spans: String) {
    let w = world.borrow();
    let actual: Vec<String> = w
        .tree()
        .statements()
        .map(|node| {
            let range = node.range();
            format!("{}..{}", range.start, range.end)
        })
        .collect();
    assert_eq!(actual.join(", "), strip_quotes(&spans));
}

#[then("the first statement is compound with {count} children")]
fn then_first_compound(world: &RefCell<TestWorld>, count: String) {
    let w = world.borrow();
    let first = w.tree().statements().next().expect("first statement");
    assert!(first.is_compound_statement_type(), "{first:?}");
    assert_eq!(first.child_count(), parse_offset(&count));
}

#[then("the first statement is simple")]
fn then_first_simple(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let first = w.tree().statements().next().expect("first statement");
    assert!(!first.is_compound_statement_type(), "{first:?}");
    assert_eq!(first.child_count(), 0);
}

#[then("the first child text is {text}")]
fn then_first_child_text(world: &RefCell<TestWorld>, text: String) {
    let w = world.borrow();
    let first = w.tree().statements().next().expect("first statement");
    let child = first.children().next().expect("first child");
    assert_eq!(child.text(), strip_quotes(&text));
}

#[then("some statement has text {text}")]
fn then_some_statement_text(world: &RefCell<TestWorld>, text: String) {
    let w = world.borrow();
    let expected = strip_quotes(&text);
    assert!(
        w.tree().iter().any(|node| node.text() == expected),
        "no statement reads {expected:?}:\n{}",
        w.tree().dump()
    );
}

#[then("some statement contains {text}")]
fn then_some_statement_contains(world: &RefCell<TestWorld>, text: String) {
    let w = world.borrow();
    let expected = strip_quotes(&text);
    assert!(
        w.tree().iter().any(|node| node.text().contains(expected)),
        "no statement contains {expected:?}:\n{}",
        w.tree().dump()
    );
}

#[then("no statement has text {text}")]
fn then_no_statement_text(world: &RefCell<TestWorld>, text: String) {
    let w = world.borrow();
    let rejected = strip_quotes(&text);
    assert!(
        w.tree().iter().all(|node| node.text() != rejected),
        "a statement reads {rejected:?}:\n{}",
        w.tree().dump()
    );
}

#[then("the source has syntax errors")]
fn then_syntax_errors(world: &RefCell<TestWorld>) {
    assert!(world.borrow().tree().has_syntax_errors());
}

#[then("construction fails with an unsupported language error")]
fn then_unsupported(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert!(w.tree.is_none());
    assert!(matches!(
        w.error,
        Some(StatementTreeError::UnsupportedLanguage { .. })
    ));
}

// =============================================================================
// Scenarios
// =============================================================================

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "Sequential statements become siblings"
)]
fn sequential_statements(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "A braced if statement is compound"
)]
fn braced_if(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "An unbraced if statement is simple"
)]
fn unbraced_if(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "A loop body is nested under the loop"
)]
fn loop_body(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "Comments are not statements"
)]
fn comments_are_transparent(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "A cursor inside a function selects the enclosing function"
)]
fn cursor_in_function(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "An unterminated block still yields a tree"
)]
fn unterminated_block(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "A malformed tail becomes one statement"
)]
fn malformed_tail(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/kerf_syntax.feature",
    name = "Unknown languages are rejected"
)]
fn unknown_language(world: RefCell<TestWorld>) {
    drop(world);
}
