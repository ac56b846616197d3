//! Python statement rules.
//!
//! Suites are `block` nodes even when written on the header line, so
//! `if x: pass` is compound just like its indented form.

use super::BodySelector::{Fields, Members, Simple, Tail, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("expression_statement", Simple),
        ("import_statement", Simple),
        ("import_from_statement", Simple),
        ("future_import_statement", Simple),
        ("print_statement", Simple),
        ("assert_statement", Simple),
        ("return_statement", Simple),
        ("delete_statement", Simple),
        ("raise_statement", Simple),
        ("pass_statement", Simple),
        ("break_statement", Simple),
        ("continue_statement", Simple),
        ("global_statement", Simple),
        ("nonlocal_statement", Simple),
        ("exec_statement", Simple),
        ("type_alias_statement", Simple),
        ("if_statement", Fields(&["consequence", "alternative"])),
        ("for_statement", Fields(&["body", "alternative"])),
        ("while_statement", Fields(&["body", "alternative"])),
        ("try_statement", Fields(&["body"])),
        ("with_statement", Fields(&["body"])),
        ("function_definition", Fields(&["body"])),
        ("class_definition", Fields(&["body"])),
        ("decorated_definition", Target(Some("definition"))),
        ("match_statement", Members),
        ("case_clause", Tail),
    ],
    blocks: &["block"],
    clauses: &[
        "elif_clause",
        "else_clause",
        "except_clause",
        "except_group_clause",
        "finally_clause",
    ],
    containers: &[],
    attachments: &[],
    opaque: &["decorator", "lambda"],
};
