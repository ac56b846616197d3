//! Range-scoped construction of the statement arena from a CST.
//!
//! The walk is depth-first and left-to-right, so statements reach the arena
//! in pre-order and siblings in document order.

use std::ops::Range;

use kerf_config::RangePolicy;
use tracing::trace;

use crate::arena::{Arena, StatementId};
use crate::classifier::{self, BodyPart};
use crate::cst::CstNode;
use crate::error::StatementTreeError;
use crate::grammar::{self, Classification, Profile, Role};
use crate::language::SupportedLanguage;

/// Kind reported for the unparsed remainder of an error region.
const ERROR_KIND: &str = "ERROR";

/// Attachments waiting for the statement they annotate.
struct Attached {
    kind: &'static str,
    range: Range<usize>,
}

pub(crate) struct Builder {
    profile: &'static Profile,
    query: Range<usize>,
    policy: RangePolicy,
    arena: Arena,
}

impl Builder {
    /// Creates a builder admitting statements that meet `query`, a byte range.
    ///
    /// An empty query is a point: it admits statements with
    /// `start <= point < end`.
    pub(crate) fn new(
        language: SupportedLanguage,
        query: Range<usize>,
        policy: RangePolicy,
    ) -> Self {
        Self {
            profile: grammar::profile(language),
            query,
            policy,
            arena: Arena::default(),
        }
    }

    pub(crate) fn build(mut self, root: CstNode<'_>) -> Result<Arena, StatementTreeError> {
        if root.is_error() {
            self.walk_recovered_part(root, None)?;
        } else {
            let container = self.profile.is_container(root.kind());
            self.walk_members(root, container, None)?;
        }
        Ok(self.arena)
    }

    fn walk_members(
        &mut self,
        node: CstNode<'_>,
        container: bool,
        parent: Option<StatementId>,
    ) -> Result<(), StatementTreeError> {
        let mut pending: Option<Attached> = None;
        let mut recovered: Option<Range<usize>> = None;
        for (child, field) in node.children_with_fields() {
            if !is_candidate(child, field) {
                continue;
            }
            let role = self.profile.role(child.kind(), child.is_error(), container);
            if let Some(fragment) = recovered.take() {
                // A lone terminator closes the error region before it.
                if matches!(role, Role::Statement(_)) && is_lone_terminator(child) {
                    self.emit_fragment(fragment.start..child.end(), parent)?;
                    continue;
                }
                self.emit_fragment(fragment, parent)?;
            }
            match role {
                Role::Attachment => {
                    pending = Some(pending.map_or_else(
                        || Attached {
                            kind: child.kind(),
                            range: child.byte_range(),
                        },
                        |attached| Attached {
                            range: attached.range.start..child.end(),
                            ..attached
                        },
                    ));
                }
                Role::Statement(class) => {
                    let start = pending
                        .take()
                        .map_or(child.start(), |attached| attached.range.start);
                    self.visit_statement(child, class, start, parent)?;
                }
                Role::Transparent => {
                    self.flush_attachments(pending.take(), parent)?;
                    if self.intersects(&child.byte_range()) {
                        let nested = self.profile.is_container(child.kind());
                        self.walk_members(child, nested, parent)?;
                    }
                }
                Role::Recovered => {
                    self.flush_attachments(pending.take(), parent)?;
                    self.walk_recovered(child, parent, &mut recovered)?;
                }
                Role::Opaque => {}
            }
        }
        if let Some(fragment) = recovered {
            self.emit_fragment(fragment, parent)?;
        }
        self.flush_attachments(pending, parent)
    }

    /// Walks a parser error region.
    ///
    /// Statements the parser still recognised are emitted as usual. Every
    /// other piece of the region is gathered into `fragment`, which is
    /// emitted as one simple statement before the next statement.
    fn walk_recovered(
        &mut self,
        node: CstNode<'_>,
        parent: Option<StatementId>,
        fragment: &mut Option<Range<usize>>,
    ) -> Result<(), StatementTreeError> {
        for (child, _) in node.children_with_fields() {
            if child.is_missing() || child.is_empty() || (child.is_extra() && !child.is_error()) {
                continue;
            }
            if child.is_error() {
                self.walk_recovered(child, parent, fragment)?;
                continue;
            }
            let kind = child.kind();
            let class = self.profile.classify(kind);
            if child.is_named() && class.is_statement {
                if let Some(range) = fragment.take() {
                    self.emit_fragment(range, parent)?;
                }
                self.visit_statement(child, class, child.start(), parent)?;
            } else if child.is_named() && self.profile.is_block(kind) {
                if let Some(range) = fragment.take() {
                    self.emit_fragment(range, parent)?;
                }
                let container = self.profile.is_container(kind);
                self.walk_members(child, container, parent)?;
            } else {
                *fragment = Some(fragment.take().map_or_else(
                    || child.byte_range(),
                    |range| range.start..child.end(),
                ));
            }
        }
        Ok(())
    }

    fn walk_recovered_part(
        &mut self,
        node: CstNode<'_>,
        parent: Option<StatementId>,
    ) -> Result<(), StatementTreeError> {
        let mut fragment = None;
        self.walk_recovered(node, parent, &mut fragment)?;
        fragment.map_or(Ok(()), |range| self.emit_fragment(range, parent))
    }

    /// Emits the unparsed remainder of an error region as a simple statement.
    fn emit_fragment(
        &mut self,
        range: Range<usize>,
        parent: Option<StatementId>,
    ) -> Result<(), StatementTreeError> {
        if !self.intersects(&range)
            || (self.policy == RangePolicy::Contained && !self.contains(&range))
        {
            return Ok(());
        }
        let enclosing = parent.and_then(|id| self.arena.range(id));
        if enclosing.is_some_and(|outer| *outer == range) {
            trace!(?range, "merged error region into parent with the same span");
            return Ok(());
        }
        trace!(?range, "emitted error region as a simple statement");
        self.arena.push(range, ERROR_KIND, false, parent).map(|_| ())
    }

    fn visit_statement(
        &mut self,
        node: CstNode<'_>,
        class: Classification,
        start: usize,
        parent: Option<StatementId>,
    ) -> Result<(), StatementTreeError> {
        let range = start..node.end();
        if !self.intersects(&range) {
            return Ok(());
        }

        let parts = classifier::resolve(self.profile, node, class.body);
        let compound = parts.iter().any(BodyPart::is_block);
        if self.policy == RangePolicy::Contained && !compound && !self.contains(&range) {
            trace!(kind = node.kind(), ?range, "skipped statement crossing the range boundary");
            return Ok(());
        }

        let same_as_parent = parent
            .and_then(|id| self.arena.range(id))
            .is_some_and(|enclosing| *enclosing == range);
        if same_as_parent {
            trace!(kind = node.kind(), ?range, "merged statement into parent with the same span");
            return if compound {
                self.walk_parts(&parts, parent)
            } else {
                Ok(())
            };
        }

        let id = self.arena.push(range, node.kind(), compound, parent)?;
        if compound {
            self.walk_parts(&parts, Some(id))?;
        }
        Ok(())
    }

    fn walk_parts(
        &mut self,
        parts: &[BodyPart<'_>],
        parent: Option<StatementId>,
    ) -> Result<(), StatementTreeError> {
        for part in parts {
            match *part {
                BodyPart::Block(block) => {
                    let container = self.profile.is_container(block.kind());
                    self.walk_members(block, container, parent)?;
                }
                BodyPart::Inline(statement) => {
                    let class = self.profile.classify(statement.kind());
                    self.visit_statement(statement, class, statement.start(), parent)?;
                }
                BodyPart::Recovered(region) => self.walk_recovered_part(region, parent)?,
            }
        }
        Ok(())
    }

    /// Emits attachments that no statement followed as one simple statement.
    fn flush_attachments(
        &mut self,
        pending: Option<Attached>,
        parent: Option<StatementId>,
    ) -> Result<(), StatementTreeError> {
        let Some(Attached { kind, range }) = pending else {
            return Ok(());
        };
        if !self.intersects(&range)
            || (self.policy == RangePolicy::Contained && !self.contains(&range))
        {
            return Ok(());
        }
        self.arena.push(range, kind, false, parent).map(|_| ())
    }

    fn intersects(&self, range: &Range<usize>) -> bool {
        if self.query.is_empty() {
            range.start <= self.query.start && self.query.start < range.end
        } else {
            range.start < self.query.end && self.query.start < range.end
        }
    }

    fn contains(&self, range: &Range<usize>) -> bool {
        !self.query.is_empty() && self.query.start <= range.start && range.end <= self.query.end
    }
}

/// Whether a child can hold statements at all.
///
/// Tree-sitter marks error regions as extras; they are still walked.
fn is_candidate(node: CstNode<'_>, field: Option<&str>) -> bool {
    node.is_named()
        && (!node.is_extra() || node.is_error())
        && !node.is_missing()
        && !node.is_empty()
        && !field.is_some_and(grammar::is_header_field)
}

/// A one-byte statement with no named parts, such as `;`.
fn is_lone_terminator(node: CstNode<'_>) -> bool {
    node.named_child_count() == 0 && node.end() - node.start() == 1
}
