//! Rust statement rules.
//!
//! Outer attributes are siblings of the item they annotate, so they are
//! attachments rather than statements of their own.

use super::BodySelector::{Fields, Members, Simple, Tail, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("function_item", Fields(&["body"])),
        ("function_signature_item", Simple),
        ("struct_item", Fields(&["body"])),
        ("union_item", Fields(&["body"])),
        ("enum_item", Fields(&["body"])),
        ("impl_item", Fields(&["body"])),
        ("trait_item", Fields(&["body"])),
        ("mod_item", Fields(&["body"])),
        ("foreign_mod_item", Fields(&["body"])),
        ("const_item", Simple),
        ("static_item", Simple),
        ("type_item", Simple),
        ("associated_type", Simple),
        ("use_declaration", Simple),
        ("extern_crate_declaration", Simple),
        ("macro_definition", Simple),
        ("macro_invocation", Simple),
        ("inner_attribute_item", Simple),
        ("field_declaration", Simple),
        ("let_declaration", Simple),
        ("empty_statement", Simple),
        ("expression_statement", Target(None)),
        ("block", Members),
        ("unsafe_block", Tail),
        ("async_block", Tail),
        ("const_block", Tail),
        ("if_expression", Fields(&["consequence", "alternative"])),
        ("match_expression", Fields(&["body"])),
        ("match_arm", Fields(&["value"])),
        ("loop_expression", Fields(&["body"])),
        ("while_expression", Fields(&["body"])),
        ("for_expression", Fields(&["body"])),
    ],
    blocks: &[
        "block",
        "declaration_list",
        "enum_variant_list",
        "field_declaration_list",
        "match_block",
    ],
    clauses: &["else_clause"],
    // A block's trailing expression is a statement even without a `;`.
    containers: &["block"],
    attachments: &["attribute_item"],
    opaque: &[
        "enum_variant",
        "label",
        "ordered_field_declaration_list",
        "token_tree",
        "visibility_modifier",
    ],
};
