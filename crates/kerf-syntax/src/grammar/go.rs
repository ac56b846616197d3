//! Go statement rules.

use super::BodySelector::{Fields, Members, Path, Simple, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("package_clause", Simple),
        ("import_declaration", Simple),
        ("function_declaration", Fields(&["body"])),
        ("method_declaration", Fields(&["body"])),
        // `type T struct { ... }` nests its fields; aliases and named types
        // without a body stay simple.
        ("type_declaration", Path(&["type_spec", "type"])),
        ("var_declaration", Simple),
        ("const_declaration", Simple),
        ("field_declaration", Simple),
        ("method_elem", Simple),
        ("method_spec", Simple),
        ("block", Members),
        ("short_var_declaration", Simple),
        ("assignment_statement", Simple),
        ("inc_statement", Simple),
        ("dec_statement", Simple),
        ("send_statement", Simple),
        ("expression_statement", Simple),
        ("go_statement", Simple),
        ("defer_statement", Simple),
        ("return_statement", Simple),
        ("break_statement", Simple),
        ("continue_statement", Simple),
        ("goto_statement", Simple),
        ("fallthrough_statement", Simple),
        ("empty_statement", Simple),
        ("if_statement", Fields(&["consequence", "alternative"])),
        ("for_statement", Fields(&["body"])),
        ("expression_switch_statement", Members),
        ("type_switch_statement", Members),
        ("select_statement", Members),
        ("expression_case", Members),
        ("type_case", Members),
        ("communication_case", Members),
        ("default_case", Members),
        ("labeled_statement", Target(None)),
    ],
    blocks: &["block", "field_declaration_list", "interface_type", "struct_type"],
    clauses: &[],
    containers: &[],
    attachments: &[],
    opaque: &["func_literal", "type_arguments", "type_parameter_list"],
};
