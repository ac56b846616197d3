//! Concrete syntax tree adapter over Tree-sitter.
//!
//! [`CstHandle`] owns a parsed tree together with the source it was parsed
//! from, and [`CstNode`] is the uniform node view the builder consumes. The
//! rest of the crate never touches the Tree-sitter API directly, so the
//! walker stays language-agnostic.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use crate::error::StatementTreeError;
use crate::language::SupportedLanguage;

thread_local! {
    /// Parsers are reused per thread; Tree-sitter parsers are not `Sync`.
    static PARSERS: RefCell<HashMap<SupportedLanguage, tree_sitter::Parser>> =
        RefCell::new(HashMap::new());
}

/// A parsed concrete syntax tree and the source it covers.
///
/// Tree-sitter recovers from malformed input, so a handle may contain
/// `ERROR` and missing nodes; [`CstHandle::has_errors`] reports them.
pub struct CstHandle {
    tree: tree_sitter::Tree,
    source: Arc<str>,
    language: SupportedLanguage,
}

impl CstHandle {
    /// Parses `source` with the grammar for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`StatementTreeError::ParserInit`] if the grammar cannot be
    /// loaded and [`StatementTreeError::ParseFailure`] if the parser does not
    /// produce a tree.
    pub fn parse(
        language: SupportedLanguage,
        source: Arc<str>,
    ) -> Result<Self, StatementTreeError> {
        let tree = PARSERS.with(|cell| {
            let mut parsers = cell.borrow_mut();
            let parser = match parsers.entry(language) {
                std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
                std::collections::hash_map::Entry::Vacant(entry) => {
                    let mut parser = tree_sitter::Parser::new();
                    parser
                        .set_language(&language.tree_sitter_language())
                        .map_err(|e| StatementTreeError::parser_init(language, e.to_string()))?;
                    entry.insert(parser)
                }
            };
            parser
                .parse(source.as_bytes(), None)
                .ok_or_else(|| {
                    StatementTreeError::parse_failure(language, "parser returned no tree")
                })
        })?;

        Ok(Self {
            tree,
            source,
            language,
        })
    }

    /// Returns the root node of the tree.
    #[must_use]
    pub fn root(&self) -> CstNode<'_> {
        CstNode::new(self.tree.root_node())
    }

    /// Returns the source text the tree was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the language of the parsed source.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns whether the parser had to recover from syntax errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Collects the error and missing nodes found in the tree.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &mut errors);
        errors
    }
}

impl std::fmt::Debug for CstHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CstHandle")
            .field("language", &self.language)
            .field("source_len", &self.source.len())
            .finish_non_exhaustive()
    }
}

/// Location and description of a recovered syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>) -> Self {
        let start = node.start_position();
        // Line/column numbers will realistically never exceed u32::MAX.
        let line = u32::try_from(start.row.saturating_add(1)).unwrap_or(u32::MAX);
        let column = u32::try_from(start.column.saturating_add(1)).unwrap_or(u32::MAX);
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        Self {
            byte_range: node.byte_range(),
            line,
            column,
            message,
        }
    }
}

fn collect_error_nodes(node: tree_sitter::Node<'_>, errors: &mut Vec<SyntaxErrorInfo>) {
    if !node.has_error() {
        return;
    }
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, errors);
    }
}

/// Uniform, language-independent view of one CST node.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CstNode<'tree> {
    inner: tree_sitter::Node<'tree>,
}

impl<'tree> CstNode<'tree> {
    const fn new(inner: tree_sitter::Node<'tree>) -> Self {
        Self { inner }
    }

    /// Returns the grammar's node type tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    /// Returns the byte range covered by the node.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.inner.byte_range()
    }

    /// Returns the first byte of the node.
    #[must_use]
    pub fn start(&self) -> usize {
        self.inner.start_byte()
    }

    /// Returns the byte just past the node.
    #[must_use]
    pub fn end(&self) -> usize {
        self.inner.end_byte()
    }

    /// Returns whether the node covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.start_byte() >= self.inner.end_byte()
    }

    /// Returns whether the node is a named grammar rule rather than a token.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.inner.is_named()
    }

    /// Returns whether the node is an extra such as a comment.
    #[must_use]
    pub fn is_extra(&self) -> bool {
        self.inner.is_extra()
    }

    /// Returns whether the node is an `ERROR` node.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.inner.is_error()
    }

    /// Returns whether the parser inserted the node to recover from an error.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.inner.is_missing()
    }

    /// Returns the enclosing node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.inner.parent().map(Self::new)
    }

    /// Returns the first child stored under `field`.
    #[must_use]
    pub fn child_by_field_name(&self, field: &str) -> Option<Self> {
        self.inner.child_by_field_name(field).map(Self::new)
    }

    /// Returns every child in document order paired with its field name.
    #[must_use]
    pub fn children_with_fields(&self) -> Vec<(Self, Option<&'static str>)> {
        let mut children = Vec::with_capacity(self.inner.child_count());
        let mut cursor = self.inner.walk();
        if cursor.goto_first_child() {
            loop {
                children.push((Self::new(cursor.node()), cursor.field_name()));
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        children
    }

    /// Returns the number of named children.
    #[must_use]
    pub fn named_child_count(&self) -> usize {
        self.inner.named_child_count()
    }

    /// Returns the first named child of the given kind.
    #[must_use]
    pub fn first_child_of_kind(&self, kind: &str) -> Option<Self> {
        let mut cursor = self.inner.walk();
        let found = self
            .inner
            .named_children(&mut cursor)
            .find(|child| child.kind() == kind);
        found.map(Self::new)
    }

    /// Returns the last named child that is neither a comment nor a header
    /// field such as a name, condition or parameter list. Error regions
    /// count as children.
    ///
    /// Grammars that give a construct's body no field name place it last,
    /// so this is where such bodies are found.
    #[must_use]
    pub fn last_body_child(&self) -> Option<Self> {
        self.children_with_fields()
            .into_iter()
            .rev()
            .find(|(child, field)| {
                child.is_named()
                    && (!child.is_extra() || child.is_error())
                    && !field.is_some_and(crate::grammar::is_header_field)
            })
            .map(|(child, _)| child)
    }

    /// Returns the text of the node within `source`.
    #[must_use]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.byte_range()).unwrap_or_default()
    }
}

impl std::fmt::Debug for CstNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{:?}", self.kind(), self.byte_range())
    }
}
