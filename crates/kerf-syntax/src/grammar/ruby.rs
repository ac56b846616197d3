//! Ruby statement rules.
//!
//! Ruby has no statement node: every named child of a body is one statement,
//! so bodies are listed as containers and only the compound forms appear in
//! the statement table.

use super::BodySelector::{Fields, Members, Simple};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("method", Members),
        ("singleton_method", Members),
        ("class", Members),
        ("singleton_class", Members),
        ("module", Members),
        ("begin", Members),
        ("begin_block", Members),
        ("end_block", Members),
        ("if", Fields(&["consequence", "alternative"])),
        ("unless", Fields(&["consequence", "alternative"])),
        ("while", Fields(&["body"])),
        ("until", Fields(&["body"])),
        ("for", Fields(&["body"])),
        ("case", Members),
        ("case_match", Members),
        ("when", Members),
        ("in_clause", Members),
        ("if_modifier", Simple),
        ("unless_modifier", Simple),
        ("while_modifier", Simple),
        ("until_modifier", Simple),
        ("rescue_modifier", Simple),
    ],
    blocks: &["body_statement", "do", "else", "then"],
    clauses: &["elsif", "ensure", "rescue"],
    containers: &[
        "begin",
        "begin_block",
        "body_statement",
        "class",
        "do",
        "else",
        "end_block",
        "ensure",
        "method",
        "module",
        "program",
        "singleton_class",
        "singleton_method",
        "then",
    ],
    attachments: &[],
    opaque: &[
        "block",
        "block_parameters",
        "do_block",
        "exception_variable",
        "exceptions",
        "heredoc_body",
        "lambda",
        "lambda_parameters",
        "method_parameters",
    ],
};
