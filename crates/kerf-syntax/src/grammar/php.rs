//! PHP statement rules.

use super::BodySelector::{Fields, Members, Simple, Tail};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("namespace_definition", Fields(&["body"])),
        ("namespace_use_declaration", Simple),
        ("function_definition", Fields(&["body"])),
        ("method_declaration", Fields(&["body"])),
        ("class_declaration", Fields(&["body"])),
        ("interface_declaration", Fields(&["body"])),
        ("trait_declaration", Fields(&["body"])),
        ("enum_declaration", Fields(&["body"])),
        ("property_declaration", Simple),
        ("const_declaration", Simple),
        ("use_declaration", Simple),
        ("enum_case", Simple),
        ("compound_statement", Members),
        ("expression_statement", Simple),
        ("echo_statement", Simple),
        ("return_statement", Simple),
        ("global_declaration", Simple),
        ("function_static_declaration", Simple),
        ("unset_statement", Simple),
        ("named_label_statement", Simple),
        ("goto_statement", Simple),
        ("break_statement", Simple),
        ("continue_statement", Simple),
        ("empty_statement", Simple),
        ("declare_statement", Tail),
        ("if_statement", Fields(&["body", "alternative"])),
        ("while_statement", Tail),
        ("for_statement", Tail),
        ("foreach_statement", Tail),
        ("do_statement", Fields(&["body"])),
        ("switch_statement", Fields(&["body"])),
        ("case_statement", Members),
        ("default_statement", Members),
        ("try_statement", Fields(&["body"])),
    ],
    blocks: &[
        "colon_block",
        "compound_statement",
        "declaration_list",
        "enum_declaration_list",
        "switch_block",
    ],
    clauses: &["catch_clause", "else_clause", "else_if_clause", "finally_clause"],
    containers: &[],
    attachments: &[],
    opaque: &["attribute_list", "php_tag", "text"],
};
