//! Compound classification of individual statement nodes.
//!
//! A statement is compound when at least one of its body parts is a block.
//! A body made only of a single inline statement collapses the owner to a
//! simple statement: `if (x) { y = 1; }` is compound while `if (x) y = 1;`
//! is not.

use crate::cst::CstNode;
use crate::grammar::{self, BodySelector, Profile};
use crate::language::SupportedLanguage;

/// One piece of a statement's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyPart<'tree> {
    /// A member list walked for nested statements.
    Block(CstNode<'tree>),
    /// A single statement standing in for a body.
    Inline(CstNode<'tree>),
    /// A parser error region inside the body. Never makes its owner compound.
    Recovered(CstNode<'tree>),
}

impl BodyPart<'_> {
    pub(crate) const fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

/// Resolves the body parts of `node` according to `body`, in document order.
pub(crate) fn resolve<'tree>(
    profile: &Profile,
    node: CstNode<'tree>,
    body: BodySelector,
) -> Vec<BodyPart<'tree>> {
    let mut parts = Vec::new();
    match body {
        BodySelector::Simple => {}
        BodySelector::Members => parts.push(BodyPart::Block(node)),
        BodySelector::Fields(fields) => collect_fields(profile, node, fields, &mut parts),
        BodySelector::Tail => {
            if let Some(tail) = node.last_body_child() {
                collect_part(profile, tail, &mut parts);
            }
        }
        BodySelector::Target(field) => {
            let target = field.map_or_else(
                || node.last_body_child(),
                |name| node.child_by_field_name(name),
            );
            if let Some(wrapped) = target {
                collect_target(profile, wrapped, &mut parts);
            }
        }
        BodySelector::Path(steps) => {
            if let Some(end) = follow_path(node, steps) {
                if profile.is_block(end.kind()) {
                    parts.push(BodyPart::Block(end));
                }
            }
        }
    }
    parts
}

/// Returns whether `node` is a compound statement in `language`.
///
/// This is the per-node decision: a kind that can own a body is only
/// compound when its body actually contains a block.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use kerf_syntax::{CstHandle, SupportedLanguage, is_compound_statement};
///
/// let cst = CstHandle::parse(SupportedLanguage::C, Arc::from("if (x) y = 1;"))?;
/// let statement = cst.root().first_child_of_kind("if_statement").expect("if");
/// assert!(!is_compound_statement(SupportedLanguage::C, statement));
/// # Ok::<(), kerf_syntax::StatementTreeError>(())
/// ```
#[must_use]
pub fn is_compound_statement(language: SupportedLanguage, node: CstNode<'_>) -> bool {
    let profile = grammar::profile(language);
    let class = profile.classify(node.kind());
    class.is_statement
        && resolve(profile, node, class.body)
            .iter()
            .any(BodyPart::is_block)
}

fn collect_fields<'tree>(
    profile: &Profile,
    node: CstNode<'tree>,
    fields: &[&str],
    parts: &mut Vec<BodyPart<'tree>>,
) {
    for (child, field) in node.children_with_fields() {
        if !child.is_named() || (child.is_extra() && !child.is_error()) || child.is_missing() {
            continue;
        }
        match field {
            _ if child.is_error() => parts.push(BodyPart::Recovered(child)),
            Some(name) if fields.contains(&name) => collect_part(profile, child, parts),
            Some(name) if grammar::is_header_field(name) => {}
            _ if profile.is_clause(child.kind()) => collect_part(profile, child, parts),
            _ => {}
        }
    }
}

fn collect_part<'tree>(profile: &Profile, node: CstNode<'tree>, parts: &mut Vec<BodyPart<'tree>>) {
    let kind = node.kind();
    if node.is_error() {
        parts.push(BodyPart::Recovered(node));
    } else if profile.is_block(kind) {
        parts.push(BodyPart::Block(node));
    } else if profile.is_clause(kind) {
        // `else`, `elif`, `catch` and friends: their own bodies belong to
        // the owning statement.
        for (child, field) in node.children_with_fields() {
            if !child.is_named()
                || (child.is_extra() && !child.is_error())
                || field.is_some_and(grammar::is_header_field)
            {
                continue;
            }
            collect_part(profile, child, parts);
        }
    } else if profile.classify(kind).is_statement {
        parts.push(BodyPart::Inline(node));
    }
}

fn collect_target<'tree>(
    profile: &Profile,
    wrapped: CstNode<'tree>,
    parts: &mut Vec<BodyPart<'tree>>,
) {
    if profile.is_block(wrapped.kind()) {
        parts.push(BodyPart::Block(wrapped));
        return;
    }
    let class = profile.classify(wrapped.kind());
    if class.is_statement {
        parts.extend(resolve(profile, wrapped, class.body));
    }
}

fn follow_path<'tree>(node: CstNode<'tree>, steps: &[&str]) -> Option<CstNode<'tree>> {
    steps.iter().try_fold(node, |current, step| {
        current
            .child_by_field_name(step)
            .or_else(|| current.first_child_of_kind(step))
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::rstest;

    use super::*;
    use crate::cst::CstHandle;

    fn last_statement(handle: &CstHandle) -> CstNode<'_> {
        handle
            .root()
            .children_with_fields()
            .into_iter()
            .rev()
            .map(|(child, _)| child)
            .find(|child| child.is_named() && !child.is_extra())
            .expect("statement")
    }

    #[rstest]
    #[case(SupportedLanguage::C, "if (x) { y = 1; }", true)]
    #[case(SupportedLanguage::C, "if (x) y = 1;", false)]
    #[case(SupportedLanguage::C, "if (x) y = 1; else { z = 2; }", true)]
    #[case(SupportedLanguage::C, "if (a) x(); else if (b) y();", false)]
    #[case(SupportedLanguage::C, "if (a) x(); else if (b) { y(); }", false)]
    #[case(SupportedLanguage::C, "while (x) {}", true)]
    #[case(SupportedLanguage::C, "typedef struct { int a; } T;", true)]
    #[case(SupportedLanguage::C, "typedef int T;", false)]
    #[case(SupportedLanguage::JavaScript, "for (;;) f();", false)]
    #[case(SupportedLanguage::JavaScript, "outer: for (;;) { f(); }", true)]
    #[case(SupportedLanguage::JavaScript, "export function f() {}", true)]
    #[case(SupportedLanguage::JavaScript, "export const x = 1;", false)]
    #[case(SupportedLanguage::Python, "if x: pass", true)]
    #[case(SupportedLanguage::Python, "@d\ndef f():\n    pass\n", true)]
    #[case(SupportedLanguage::Go, "package p\ntype T struct { A int }", true)]
    #[case(SupportedLanguage::Go, "package p\ntype T int", false)]
    #[case(SupportedLanguage::Ruby, "def f\nend", true)]
    fn compound_status_follows_the_body_shape(
        #[case] language: SupportedLanguage,
        #[case] source: &str,
        #[case] expected: bool,
    ) {
        let handle = CstHandle::parse(language, Arc::from(source)).expect("parse");
        let statement = last_statement(&handle);
        assert_eq!(
            is_compound_statement(language, statement),
            expected,
            "{source}"
        );
    }

    #[test]
    fn else_if_chains_yield_the_inner_if_inline() {
        let source = "if (a) { x(); } else if (b) { y(); }";
        let handle = CstHandle::parse(SupportedLanguage::C, Arc::from(source)).expect("parse");
        let statement = last_statement(&handle);
        let profile = grammar::profile(SupportedLanguage::C);
        let class = profile.classify(statement.kind());
        let parts = resolve(profile, statement, class.body);

        let kinds: Vec<_> = parts
            .iter()
            .map(|part| match part {
                BodyPart::Block(node) => ("block", node.kind()),
                BodyPart::Inline(node) => ("inline", node.kind()),
                BodyPart::Recovered(node) => ("recovered", node.kind()),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("block", "compound_statement"),
                ("inline", "if_statement"),
            ]
        );
    }

    #[test]
    fn non_statements_are_never_compound() {
        let handle =
            CstHandle::parse(SupportedLanguage::C, Arc::from("int x;")).expect("parse");
        let statement = last_statement(&handle);
        let declarator = statement
            .child_by_field_name("declarator")
            .expect("declarator");
        assert!(!is_compound_statement(SupportedLanguage::C, declarator));
    }
}
