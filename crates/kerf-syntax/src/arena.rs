//! Flat storage for the statements of one tree.
//!
//! Nodes refer to each other through [`StatementId`] indices, so parent
//! links are plain data and the tree owns every node exactly once.

use std::ops::Range;

use crate::error::StatementTreeError;

/// Handle to one statement within a [`crate::StatementTree`].
///
/// Identifiers are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatementId(usize);

impl StatementId {
    /// Returns the position of the statement in pre-order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatementRecord {
    /// Byte span, including fused attachments.
    pub(crate) range: Range<usize>,
    pub(crate) kind: &'static str,
    pub(crate) compound: bool,
    pub(crate) parent: Option<StatementId>,
    pub(crate) children: Vec<StatementId>,
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    records: Vec<StatementRecord>,
    roots: Vec<StatementId>,
}

impl Arena {
    /// Appends a statement under `parent`.
    ///
    /// Statements arrive in pre-order, so a node's index is its pre-order
    /// position. The span must be non-empty, strictly inside the parent and
    /// after the previous sibling.
    pub(crate) fn push(
        &mut self,
        range: Range<usize>,
        kind: &'static str,
        compound: bool,
        parent: Option<StatementId>,
    ) -> Result<StatementId, StatementTreeError> {
        self.check_placement(&range, kind, parent)?;

        let id = StatementId(self.records.len());
        self.records.push(StatementRecord {
            range,
            kind,
            compound,
            parent,
            children: Vec::new(),
        });
        match parent.and_then(|parent_id| self.records.get_mut(parent_id.0)) {
            Some(record) => record.children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    fn check_placement(
        &self,
        range: &Range<usize>,
        kind: &str,
        parent: Option<StatementId>,
    ) -> Result<(), StatementTreeError> {
        if range.start >= range.end {
            return Err(violation(format!("{kind} has an empty span {range:?}")));
        }

        if let Some(parent_id) = parent {
            let enclosing = self.get(parent_id).ok_or_else(|| {
                violation(format!("{kind} refers to unknown parent {parent_id:?}"))
            })?;
            let nested = enclosing.range.start <= range.start
                && range.end <= enclosing.range.end
                && *range != enclosing.range;
            if !nested {
                return Err(violation(format!(
                    "{kind} {range:?} is not strictly inside {} {:?}",
                    enclosing.kind, enclosing.range
                )));
            }
        }

        let previous = self
            .children_of(parent)
            .last()
            .and_then(|sibling| self.get(*sibling));
        if let Some(sibling) = previous {
            if sibling.range.end > range.start {
                return Err(violation(format!(
                    "{kind} {range:?} overlaps preceding sibling {} {:?}",
                    sibling.kind, sibling.range
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn get(&self, id: StatementId) -> Option<&StatementRecord> {
        self.records.get(id.0)
    }

    pub(crate) fn range(&self, id: StatementId) -> Option<&Range<usize>> {
        self.get(id).map(|record| &record.range)
    }

    /// Returns the top-level statements, or the children of `parent`.
    pub(crate) fn children_of(&self, parent: Option<StatementId>) -> &[StatementId] {
        match parent {
            Some(id) => self
                .get(id)
                .map_or(&[][..], |record| record.children.as_slice()),
            None => &self.roots,
        }
    }

    pub(crate) fn roots(&self) -> &[StatementId] {
        &self.roots
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = StatementId> + '_ {
        (0..self.records.len()).map(StatementId)
    }

    pub(crate) const fn len(&self) -> usize {
        self.records.len()
    }
}

/// Invariant violations are builder bugs: loud in debug builds, an error in
/// release builds.
fn violation(message: String) -> StatementTreeError {
    debug_assert!(false, "statement tree invariant violated: {message}");
    StatementTreeError::inconsistent(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_linked_to_parents() {
        let mut arena = Arena::default();
        let parent = arena.push(0..17, "if_statement", true, None).expect("parent");
        let child = arena
            .push(9..15, "expression_statement", false, Some(parent))
            .expect("child");

        assert_eq!(arena.roots(), &[parent]);
        assert_eq!(arena.children_of(Some(parent)), &[child]);
        assert_eq!(arena.get(child).and_then(|record| record.parent), Some(parent));
        assert_eq!(arena.len(), 2);
        assert_eq!(child.index(), 1);
    }

    #[test]
    fn siblings_may_touch() {
        let mut arena = Arena::default();
        arena.push(0..6, "expression_statement", false, None).expect("first");
        arena.push(6..12, "expression_statement", false, None).expect("second");
        assert_eq!(arena.roots().len(), 2);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "statement tree invariant violated")]
    fn equal_span_child_panics_in_debug_builds() {
        let mut arena = Arena::default();
        let parent = arena.push(0..10, "block", true, None).expect("parent");
        let result = arena.push(0..10, "expression_statement", false, Some(parent));
        assert!(result.is_err());
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn overlapping_sibling_is_reported() {
        let mut arena = Arena::default();
        arena.push(0..6, "expression_statement", false, None).expect("first");
        let error = arena
            .push(5..9, "expression_statement", false, None)
            .expect_err("overlap");
        assert!(matches!(error, StatementTreeError::Inconsistent { .. }));
    }
}
