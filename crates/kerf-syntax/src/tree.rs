//! The statement tree and its query surface.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::Arc;

use kerf_config::TreeOptions;
use tracing::debug;

use crate::arena::{Arena, StatementId, StatementRecord};
use crate::builder::Builder;
use crate::cst::{CstHandle, SyntaxErrorInfo};
use crate::error::StatementTreeError;
use crate::language::SupportedLanguage;
use crate::offsets::OffsetMapper;

/// Longest snippet shown per line of [`StatementTree::dump`].
const DUMP_SNIPPET_CHARS: usize = 40;

/// Statement structure of one source text within a query range.
///
/// A tree is single-use: construct it, call [`StatementTree::build`] once,
/// then query it any number of times. Queries before the build return empty
/// results.
///
/// # Examples
///
/// ```
/// use kerf_syntax::StatementTree;
///
/// let source = "x = 1;\ny = 2;";
/// let mut tree = StatementTree::new("c", source, 0..source.len())?;
/// tree.build_blocking()?;
///
/// let spans: Vec<_> = tree.statements().map(|node| node.range()).collect();
/// assert_eq!(spans, vec![0..6, 7..13]);
/// # Ok::<(), kerf_syntax::StatementTreeError>(())
/// ```
pub struct StatementTree {
    language: SupportedLanguage,
    source: Arc<str>,
    query: Range<usize>,
    byte_query: Range<usize>,
    options: TreeOptions,
    offsets: OffsetMapper,
    built: Option<Built>,
}

struct Built {
    cst: CstHandle,
    arena: Arena,
}

impl StatementTree {
    /// Creates an unbuilt tree with default options.
    ///
    /// `range` is half-open and measured in bytes. An empty range is a
    /// point query selecting the statements that contain it.
    ///
    /// # Errors
    ///
    /// Returns [`StatementTreeError::UnsupportedLanguage`] for an unknown
    /// language identifier, [`StatementTreeError::InvalidRange`] for an
    /// inverted or out-of-bounds range and
    /// [`StatementTreeError::SourceTooLarge`] for oversized sources.
    pub fn new(
        language_id: &str,
        text: impl Into<Arc<str>>,
        range: Range<usize>,
    ) -> Result<Self, StatementTreeError> {
        Self::with_options(language_id, text, range, TreeOptions::default())
    }

    /// Creates an unbuilt tree with explicit options.
    ///
    /// `range` is measured in the unit chosen by
    /// [`TreeOptions::offset_encoding`], as are all ranges the tree reports.
    ///
    /// # Errors
    ///
    /// Fails as [`StatementTree::new`] does.
    pub fn with_options(
        language_id: &str,
        text: impl Into<Arc<str>>,
        range: Range<usize>,
        options: TreeOptions,
    ) -> Result<Self, StatementTreeError> {
        let language = SupportedLanguage::from_str(language_id)
            .map_err(|_| StatementTreeError::unsupported_language(language_id))?;
        Self::for_language(language, text, range, options)
    }

    /// Creates an unbuilt tree for an already resolved language.
    ///
    /// # Errors
    ///
    /// Returns [`StatementTreeError::InvalidRange`] or
    /// [`StatementTreeError::SourceTooLarge`].
    pub fn for_language(
        language: SupportedLanguage,
        text: impl Into<Arc<str>>,
        range: Range<usize>,
        options: TreeOptions,
    ) -> Result<Self, StatementTreeError> {
        let source: Arc<str> = text.into();
        if source.len() > options.max_source_bytes {
            return Err(StatementTreeError::source_too_large(
                source.len(),
                options.max_source_bytes,
            ));
        }

        let offsets = OffsetMapper::new(&source, options.offset_encoding);
        if range.start > range.end || range.end > offsets.len() {
            return Err(StatementTreeError::invalid_range(
                range.start,
                range.end,
                offsets.len(),
            ));
        }
        let byte_query = offsets.range_to_bytes(&range);

        Ok(Self {
            language,
            source,
            query: range,
            byte_query,
            options,
            offsets,
            built: None,
        })
    }

    /// Returns the language of the source.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns the source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the query range as supplied by the caller.
    #[must_use]
    pub fn query_range(&self) -> Range<usize> {
        self.query.clone()
    }

    /// Returns the options the tree was created with.
    #[must_use]
    pub const fn options(&self) -> TreeOptions {
        self.options
    }

    /// Parses the source and builds the statement hierarchy.
    ///
    /// Parsing runs on Tokio's blocking pool; arena construction runs on the
    /// calling task. Dropping the future abandons the build.
    ///
    /// # Errors
    ///
    /// Returns [`StatementTreeError::AlreadyBuilt`] on a second call,
    /// [`StatementTreeError::ParserInit`] or
    /// [`StatementTreeError::ParseFailure`] when no syntax tree is produced,
    /// and [`StatementTreeError::Inconsistent`] if construction breaks a
    /// tree invariant.
    pub async fn build(&mut self) -> Result<(), StatementTreeError> {
        self.ensure_unbuilt()?;
        let language = self.language;
        let source = Arc::clone(&self.source);
        let cst = tokio::task::spawn_blocking(move || CstHandle::parse(language, source))
            .await
            .map_err(|error| StatementTreeError::parse_failure(language, error.to_string()))??;
        self.finish(cst)
    }

    /// Synchronous form of [`StatementTree::build`] for callers without a
    /// runtime.
    ///
    /// # Errors
    ///
    /// Fails as [`StatementTree::build`] does.
    pub fn build_blocking(&mut self) -> Result<(), StatementTreeError> {
        self.ensure_unbuilt()?;
        let cst = CstHandle::parse(self.language, Arc::clone(&self.source))?;
        self.finish(cst)
    }

    const fn ensure_unbuilt(&self) -> Result<(), StatementTreeError> {
        if self.built.is_some() {
            return Err(StatementTreeError::AlreadyBuilt);
        }
        Ok(())
    }

    fn finish(&mut self, cst: CstHandle) -> Result<(), StatementTreeError> {
        debug!(
            language = %self.language,
            query = ?self.query,
            source_len = self.source.len(),
            "building statement tree"
        );
        let arena = Builder::new(
            self.language,
            self.byte_query.clone(),
            self.options.range_policy,
        )
        .build(cst.root())?;
        debug!(
            language = %self.language,
            statements = arena.len(),
            syntax_errors = cst.has_errors(),
            "built statement tree"
        );
        self.built = Some(Built { cst, arena });
        Ok(())
    }

    /// Returns whether [`StatementTree::build`] has completed.
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.built.is_some()
    }

    fn arena(&self) -> Option<&Arena> {
        self.built.as_ref().map(|built| &built.arena)
    }

    /// Returns the top-level statements in document order.
    pub fn statements(&self) -> impl Iterator<Item = StatementNode<'_>> + '_ {
        self.arena()
            .map(Arena::roots)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.node(*id))
    }

    /// Returns every statement in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = StatementNode<'_>> + '_ {
        self.arena()
            .into_iter()
            .flat_map(Arena::ids)
            .filter_map(|id| self.node(id))
    }

    /// Returns the statement with the given identifier.
    #[must_use]
    pub fn node(&self, id: StatementId) -> Option<StatementNode<'_>> {
        let arena = self.arena()?;
        let record = arena.get(id)?;
        Some(StatementNode {
            tree: self,
            arena,
            id,
            record,
        })
    }

    /// Returns the innermost statement with `start <= offset < end`.
    ///
    /// A statement owns its start boundary but not its end boundary.
    #[must_use]
    pub fn statement_at(&self, offset: usize) -> Option<StatementNode<'_>> {
        let arena = self.arena()?;
        let byte = self.offsets.offset_to_byte(offset);
        let mut found = None;
        let mut level = arena.roots();
        loop {
            let after = level.partition_point(|id| {
                arena.range(*id).is_some_and(|range| range.start <= byte)
            });
            let Some(candidate) = after.checked_sub(1).and_then(|index| level.get(index)) else {
                break;
            };
            if !arena.range(*candidate).is_some_and(|range| byte < range.end) {
                break;
            }
            found = Some(*candidate);
            level = arena.children_of(Some(*candidate));
        }
        found.and_then(|id| self.node(id))
    }

    /// Returns the number of statements in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena().map_or(0, Arena::len)
    }

    /// Returns whether the tree holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the parser recovered from syntax errors.
    ///
    /// Malformed input still yields a best-effort tree.
    #[must_use]
    pub fn has_syntax_errors(&self) -> bool {
        self.built.as_ref().is_some_and(|built| built.cst.has_errors())
    }

    /// Returns the recovered syntax errors with byte positions.
    #[must_use]
    pub fn syntax_errors(&self) -> Vec<SyntaxErrorInfo> {
        self.built
            .as_ref()
            .map(|built| built.cst.errors())
            .unwrap_or_default()
    }

    /// Renders the tree one statement per line, indented by depth.
    ///
    /// Each line reads `kind [start..end) compound|simple "snippet"`.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for node in self.iter() {
            out.push_str(&"  ".repeat(node.depth()));
            out.push_str(&node.describe());
            out.push('\n');
        }
        out
    }

    /// Renders the chain of statements from the top level down to `node`.
    #[must_use]
    pub fn dump_path(&self, node: StatementNode<'_>) -> String {
        let mut chain: Vec<_> = node.ancestors().collect();
        chain.reverse();
        chain.push(node);
        chain
            .iter()
            .map(StatementNode::label)
            .collect::<Vec<_>>()
            .join(" > ")
    }

    /// Releases the tree and its syntax tree.
    pub fn dispose(self) {
        debug!(
            language = %self.language,
            statements = self.len(),
            "disposed statement tree"
        );
    }
}

impl fmt::Debug for StatementTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementTree")
            .field("language", &self.language)
            .field("query", &self.query)
            .field("built", &self.is_built())
            .field("statements", &self.len())
            .finish_non_exhaustive()
    }
}

/// Borrowed view of one statement.
#[derive(Clone, Copy)]
pub struct StatementNode<'tree> {
    tree: &'tree StatementTree,
    arena: &'tree Arena,
    id: StatementId,
    record: &'tree StatementRecord,
}

impl<'tree> StatementNode<'tree> {
    /// Returns the identifier of this statement.
    #[must_use]
    pub const fn id(&self) -> StatementId {
        self.id
    }

    /// Returns the half-open span in the tree's offset unit.
    ///
    /// Spans are never clipped to the query range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.tree.offsets.bytes_to_range(&self.record.range)
    }

    /// Returns the half-open span in bytes.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.record.range.clone()
    }

    /// Returns the Tree-sitter kind of the statement.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.record.kind
    }

    /// Returns whether the statement owns a block of nested statements.
    #[must_use]
    pub const fn is_compound_statement_type(&self) -> bool {
        self.record.compound
    }

    /// Returns the enclosing statement.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.record.parent.and_then(|id| self.tree.node(id))
    }

    /// Returns the nested statements in document order.
    pub fn children(&self) -> impl Iterator<Item = Self> + use<'tree> {
        let tree = self.tree;
        self.record
            .children
            .iter()
            .filter_map(move |id| tree.node(*id))
    }

    /// Returns the number of nested statements.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.record.children.len()
    }

    /// Returns the source text of the statement.
    #[must_use]
    pub fn text(&self) -> &'tree str {
        self.tree
            .source
            .get(self.record.range.clone())
            .unwrap_or_default()
    }

    /// Returns the number of enclosing statements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Returns the enclosing statements, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> + use<'tree> {
        std::iter::successors(self.parent(), Self::parent)
    }

    /// Returns the nested statements at every depth, in pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = Self> + use<'tree> {
        let tree = self.tree;
        let end = self.record.range.end;
        // Pre-order keeps every subtree contiguous after its root.
        self.arena
            .ids()
            .skip(self.id.index() + 1)
            .map_while(move |id| tree.node(id).filter(|node| node.record.range.start < end))
    }

    fn label(&self) -> String {
        let range = self.range();
        format!("{} [{}..{})", self.kind(), range.start, range.end)
    }

    fn describe(&self) -> String {
        let shape = if self.is_compound_statement_type() {
            "compound"
        } else {
            "simple"
        };
        let first_line = self.text().lines().next().unwrap_or_default().trim_end();
        let mut snippet: String = first_line.chars().take(DUMP_SNIPPET_CHARS).collect();
        if first_line.chars().count() > DUMP_SNIPPET_CHARS {
            snippet.push_str("...");
        }
        format!("{} {shape} {snippet:?}", self.label())
    }
}

impl PartialEq for StatementNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.arena, other.arena)
    }
}

impl Eq for StatementNode<'_> {}

impl fmt::Debug for StatementNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatementNode")
            .field("kind", &self.kind())
            .field("range", &self.range())
            .field("compound", &self.is_compound_statement_type())
            .field("children", &self.child_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use kerf_config::{OffsetEncoding, RangePolicy};
    use rstest::rstest;

    use super::*;

    fn built(language_id: &str, source: &str) -> StatementTree {
        let mut tree = StatementTree::new(language_id, source, 0..source.len()).expect("tree");
        tree.build_blocking().expect("build");
        tree
    }

    #[test]
    fn trees_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatementTree>();
    }

    #[test]
    fn unsupported_languages_fail_fast() {
        let error = StatementTree::new("cobol", "MOVE A TO B.", 0..0).expect_err("unsupported");
        assert!(matches!(
            error,
            StatementTreeError::UnsupportedLanguage { ref language } if language == "cobol"
        ));
    }

    #[rstest]
    #[case(Range { start: 4, end: 2 })]
    #[case(0..7)]
    fn invalid_ranges_fail_fast(#[case] range: Range<usize>) {
        let error = StatementTree::new("c", "x = 1;", range).expect_err("invalid");
        assert!(matches!(
            error,
            StatementTreeError::InvalidRange { len: 6, .. }
        ));
    }

    #[test]
    fn oversized_sources_are_rejected() {
        let options = TreeOptions::default().with_max_source_bytes(4);
        let error =
            StatementTree::with_options("c", "x = 1;", 0..0, options).expect_err("too large");
        assert!(matches!(
            error,
            StatementTreeError::SourceTooLarge { len: 6, limit: 4 }
        ));
    }

    #[test]
    fn queries_before_build_are_empty() {
        let tree = StatementTree::new("c", "x = 1;", 0..6).expect("tree");
        assert!(!tree.is_built());
        assert!(tree.is_empty());
        assert_eq!(tree.statements().count(), 0);
        assert!(tree.statement_at(0).is_none());
        assert_eq!(tree.dump(), "");
    }

    #[test]
    fn second_build_is_rejected() {
        let mut tree = built("c", "x = 1;");
        let error = tree.build_blocking().expect_err("already built");
        assert!(matches!(error, StatementTreeError::AlreadyBuilt));
        assert_eq!(tree.len(), 1);
    }

    #[tokio::test]
    async fn async_build_matches_blocking_build() {
        let source = "for (i = 0; i < 10; i++) { f(i); }";
        let mut tree = StatementTree::new("c", source, 0..source.len()).expect("tree");
        tree.build().await.expect("build");
        assert_eq!(tree.dump(), built("c", source).dump());
    }

    #[test]
    fn statement_at_finds_the_innermost_statement() {
        let tree = built("c", "if (x) { y = 1; }");
        let inner = tree.statement_at(9).expect("inner");
        assert_eq!(inner.text(), "y = 1;");
        assert_eq!(inner.depth(), 1);
        assert_eq!(tree.statement_at(15).map(|node| node.kind()), Some("if_statement"));
        assert!(tree.statement_at(17).is_none());
    }

    #[test]
    fn navigation_follows_the_hierarchy() {
        let tree = built("c", "while (a) { if (b) { c(); } d(); }");
        let root = tree.statements().next().expect("while");
        let kinds: Vec<_> = root.descendants().map(|node| node.kind()).collect();
        assert_eq!(
            kinds,
            vec!["if_statement", "expression_statement", "expression_statement"]
        );

        let call = tree.statement_at(21).expect("c()");
        assert_eq!(call.text(), "c();");
        let ancestors: Vec<_> = call.ancestors().map(|node| node.kind()).collect();
        assert_eq!(ancestors, vec!["if_statement", "while_statement"]);
        assert_eq!(call.parent().and_then(|node| node.parent()), Some(root));
        assert_eq!(
            tree.dump_path(call),
            "while_statement [0..34) > if_statement [12..27) > expression_statement [21..25)"
        );
    }

    #[test]
    fn dump_lists_statements_by_depth() {
        let tree = built("c", "if (x) { y = 1; }");
        insta::assert_snapshot!(tree.dump(), @r#"
        if_statement [0..17) compound "if (x) { y = 1; }"
          expression_statement [9..15) simple "y = 1;"
        "#);
    }

    #[test]
    fn utf16_offsets_are_reported_in_code_units() {
        let source = "s = \"😀\";\nt = 2;";
        let options = TreeOptions::default().with_offset_encoding(OffsetEncoding::Utf16);
        // The emoji is 4 bytes but 2 UTF-16 units.
        let mut tree = StatementTree::with_options("c", source, 0..16, options).expect("tree");
        tree.build_blocking().expect("build");

        let spans: Vec<_> = tree.statements().map(|node| node.range()).collect();
        assert_eq!(spans, vec![0..9, 10..16]);
        let byte_spans: Vec<_> = tree.statements().map(|node| node.byte_range()).collect();
        assert_eq!(byte_spans, vec![0..11, 12..18]);
        assert_eq!(tree.statement_at(10).map(|node| node.text()), Some("t = 2;"));
    }

    #[test]
    fn contained_policy_drops_statements_crossing_the_boundary() {
        let source = "a();\nb();\nc();";
        let options = TreeOptions::default().with_range_policy(RangePolicy::Contained);
        let mut tree = StatementTree::with_options("c", source, 2..10, options).expect("tree");
        tree.build_blocking().expect("build");
        let texts: Vec<_> = tree.statements().map(|node| node.text()).collect();
        assert_eq!(texts, vec!["b();"]);
    }

    #[test]
    fn malformed_source_is_reported_but_still_built() {
        let tree = built("c", "int f() { x = 1;");
        assert!(tree.has_syntax_errors());
        assert!(!tree.syntax_errors().is_empty());
    }
}
