//! C statement rules, also the base layer for C++.

use super::BodySelector::{Fields, Members, Path, Simple, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("compound_statement", Members),
        ("expression_statement", Simple),
        ("declaration", Path(&["type", "body"])),
        ("type_definition", Path(&["type", "body"])),
        ("field_declaration", Path(&["type", "body"])),
        ("function_definition", Fields(&["body"])),
        ("linkage_specification", Fields(&["body"])),
        ("struct_specifier", Fields(&["body"])),
        ("union_specifier", Fields(&["body"])),
        ("enum_specifier", Fields(&["body"])),
        ("if_statement", Fields(&["consequence", "alternative"])),
        ("for_statement", Fields(&["body"])),
        ("while_statement", Fields(&["body"])),
        ("do_statement", Fields(&["body"])),
        ("switch_statement", Fields(&["body"])),
        ("case_statement", Members),
        ("labeled_statement", Target(None)),
        ("attributed_statement", Target(None)),
        ("seh_try_statement", Fields(&["body"])),
        ("seh_leave_statement", Simple),
        ("return_statement", Simple),
        ("break_statement", Simple),
        ("continue_statement", Simple),
        ("goto_statement", Simple),
        // Conditional compilation groups hold whole declarations, so they
        // nest like blocks. Their `#else`/`#elif` arms flatten into the group.
        ("preproc_if", Members),
        ("preproc_ifdef", Members),
        ("preproc_include", Simple),
        ("preproc_def", Simple),
        ("preproc_function_def", Simple),
        ("preproc_call", Simple),
    ],
    blocks: &[
        "compound_statement",
        "declaration_list",
        "enumerator_list",
        "field_declaration_list",
    ],
    clauses: &["else_clause", "seh_except_clause", "seh_finally_clause"],
    containers: &[],
    attachments: &[],
    opaque: &[
        "attribute_declaration",
        "enumerator",
        "preproc_arg",
        "preproc_params",
        "ms_declspec_modifier",
    ],
};
