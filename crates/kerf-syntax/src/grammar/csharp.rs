//! C# statement rules.

use super::BodySelector::{Fields, Members, Simple, Tail, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("using_directive", Simple),
        ("extern_alias_directive", Simple),
        ("namespace_declaration", Fields(&["body"])),
        ("file_scoped_namespace_declaration", Members),
        ("class_declaration", Fields(&["body"])),
        ("struct_declaration", Fields(&["body"])),
        ("interface_declaration", Fields(&["body"])),
        ("record_declaration", Fields(&["body"])),
        ("enum_declaration", Fields(&["body"])),
        ("method_declaration", Fields(&["body"])),
        ("constructor_declaration", Fields(&["body"])),
        ("destructor_declaration", Fields(&["body"])),
        ("operator_declaration", Fields(&["body"])),
        ("conversion_operator_declaration", Fields(&["body"])),
        ("local_function_statement", Fields(&["body"])),
        ("property_declaration", Fields(&["accessors"])),
        ("indexer_declaration", Fields(&["accessors"])),
        ("event_declaration", Fields(&["accessors"])),
        ("accessor_declaration", Fields(&["body"])),
        ("field_declaration", Simple),
        ("event_field_declaration", Simple),
        ("delegate_declaration", Simple),
        ("global_statement", Target(None)),
        ("block", Members),
        ("local_declaration_statement", Simple),
        ("expression_statement", Simple),
        ("return_statement", Simple),
        ("break_statement", Simple),
        ("continue_statement", Simple),
        ("goto_statement", Simple),
        ("throw_statement", Simple),
        ("yield_statement", Simple),
        ("empty_statement", Simple),
        ("if_statement", Fields(&["consequence", "alternative"])),
        ("for_statement", Fields(&["body"])),
        ("foreach_statement", Fields(&["body"])),
        ("while_statement", Fields(&["body"])),
        ("do_statement", Fields(&["body"])),
        ("switch_statement", Fields(&["body"])),
        ("switch_section", Members),
        ("try_statement", Fields(&["body"])),
        ("lock_statement", Tail),
        ("using_statement", Tail),
        ("fixed_statement", Tail),
        ("checked_statement", Tail),
        ("unsafe_statement", Tail),
        ("labeled_statement", Target(None)),
        ("preproc_if", Members),
        ("preproc_region", Simple),
        ("preproc_endregion", Simple),
        ("preproc_define", Simple),
        ("preproc_undef", Simple),
        ("preproc_pragma", Simple),
        ("preproc_line", Simple),
        ("preproc_error", Simple),
        ("preproc_warning", Simple),
        ("preproc_nullable", Simple),
    ],
    blocks: &[
        "accessor_list",
        "block",
        "declaration_list",
        "enum_member_declaration_list",
        "switch_body",
    ],
    clauses: &["catch_clause", "finally_clause"],
    containers: &[],
    attachments: &[],
    opaque: &[
        "arrow_expression_clause",
        "attribute_list",
        "bracketed_argument_list",
        "enum_member_declaration",
    ],
};
