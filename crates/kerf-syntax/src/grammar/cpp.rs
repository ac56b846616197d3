//! C++ additions layered over the C rules.

use super::BodySelector::{Fields, Simple, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("class_specifier", Fields(&["body"])),
        ("namespace_definition", Fields(&["body"])),
        ("template_declaration", Target(None)),
        ("for_range_loop", Fields(&["body"])),
        ("try_statement", Fields(&["body"])),
        ("throw_statement", Simple),
        ("co_return_statement", Simple),
        ("co_yield_statement", Simple),
        ("alias_declaration", Simple),
        ("using_declaration", Simple),
        ("namespace_alias_definition", Simple),
        ("static_assert_declaration", Simple),
        ("concept_definition", Simple),
        ("friend_declaration", Simple),
        ("template_instantiation", Simple),
    ],
    blocks: &[],
    clauses: &["catch_clause"],
    containers: &[],
    attachments: &[],
    opaque: &[
        "access_specifier",
        "condition_clause",
        "field_initializer_list",
        "template_parameter_list",
    ],
};
