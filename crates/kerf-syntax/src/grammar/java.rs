//! Java statement rules.

use super::BodySelector::{Fields, Members, Simple, Tail, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("package_declaration", Simple),
        ("import_declaration", Simple),
        ("module_declaration", Fields(&["body"])),
        ("class_declaration", Fields(&["body"])),
        ("interface_declaration", Fields(&["body"])),
        ("enum_declaration", Fields(&["body"])),
        ("record_declaration", Fields(&["body"])),
        ("annotation_type_declaration", Fields(&["body"])),
        ("method_declaration", Fields(&["body"])),
        ("constructor_declaration", Fields(&["body"])),
        ("compact_constructor_declaration", Fields(&["body"])),
        ("static_initializer", Tail),
        ("field_declaration", Simple),
        ("constant_declaration", Simple),
        ("annotation_type_element_declaration", Simple),
        ("block", Members),
        ("local_variable_declaration", Simple),
        ("expression_statement", Simple),
        ("explicit_constructor_invocation", Simple),
        ("return_statement", Simple),
        ("throw_statement", Simple),
        ("break_statement", Simple),
        ("continue_statement", Simple),
        ("yield_statement", Simple),
        ("assert_statement", Simple),
        ("if_statement", Fields(&["consequence", "alternative"])),
        ("while_statement", Fields(&["body"])),
        ("for_statement", Fields(&["body"])),
        ("enhanced_for_statement", Fields(&["body"])),
        ("do_statement", Fields(&["body"])),
        ("switch_expression", Fields(&["body"])),
        ("switch_block_statement_group", Members),
        ("switch_rule", Tail),
        ("try_statement", Fields(&["body"])),
        ("try_with_resources_statement", Fields(&["body"])),
        ("synchronized_statement", Tail),
        ("labeled_statement", Target(None)),
    ],
    blocks: &[
        "annotation_type_body",
        "block",
        "class_body",
        "constructor_body",
        "enum_body",
        "interface_body",
        "module_body",
        "switch_block",
    ],
    clauses: &["catch_clause", "finally_clause"],
    containers: &[],
    attachments: &[],
    opaque: &[
        "catch_formal_parameter",
        "enum_constant",
        "modifiers",
        "resource_specification",
        "switch_label",
    ],
};
