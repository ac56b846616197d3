//! JavaScript statement rules, also the base layer for TypeScript.

use super::BodySelector::{Fields, Members, Simple, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("import_statement", Simple),
        ("export_statement", Target(Some("declaration"))),
        ("expression_statement", Simple),
        ("lexical_declaration", Simple),
        ("variable_declaration", Simple),
        ("function_declaration", Fields(&["body"])),
        ("generator_function_declaration", Fields(&["body"])),
        ("class_declaration", Fields(&["body"])),
        ("method_definition", Fields(&["body"])),
        ("field_definition", Simple),
        ("class_static_block", Fields(&["body"])),
        ("statement_block", Members),
        ("if_statement", Fields(&["consequence", "alternative"])),
        ("for_statement", Fields(&["body"])),
        ("for_in_statement", Fields(&["body"])),
        ("while_statement", Fields(&["body"])),
        ("do_statement", Fields(&["body"])),
        ("with_statement", Fields(&["body"])),
        ("switch_statement", Fields(&["body"])),
        ("switch_case", Members),
        ("switch_default", Members),
        ("try_statement", Fields(&["body"])),
        ("return_statement", Simple),
        ("throw_statement", Simple),
        ("break_statement", Simple),
        ("continue_statement", Simple),
        ("debugger_statement", Simple),
        ("empty_statement", Simple),
        ("labeled_statement", Target(Some("body"))),
    ],
    blocks: &["class_body", "statement_block", "switch_body"],
    clauses: &["catch_clause", "else_clause", "finally_clause"],
    containers: &[],
    attachments: &[],
    opaque: &["arrow_function", "class", "decorator", "jsx_element", "object"],
};
