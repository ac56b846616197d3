//! TypeScript additions layered over the JavaScript rules.

use super::BodySelector::{Fields, Simple, Target};
use super::LanguageTable;

pub(super) const TABLE: LanguageTable = LanguageTable {
    statements: &[
        ("interface_declaration", Fields(&["body"])),
        ("abstract_class_declaration", Fields(&["body"])),
        ("enum_declaration", Fields(&["body"])),
        ("module", Fields(&["body"])),
        ("internal_module", Fields(&["body"])),
        // A statement-level `namespace N { ... }` parses as an expression
        // statement wrapping the module.
        ("expression_statement", Target(None)),
        ("ambient_declaration", Target(None)),
        ("type_alias_declaration", Simple),
        ("import_alias", Simple),
        ("function_signature", Simple),
        ("method_signature", Simple),
        ("abstract_method_signature", Simple),
        ("property_signature", Simple),
        ("public_field_definition", Simple),
        ("index_signature", Simple),
        ("call_signature", Simple),
        ("construct_signature", Simple),
    ],
    blocks: &["enum_body", "interface_body", "object_type"],
    clauses: &[],
    containers: &[],
    attachments: &[],
    opaque: &["enum_assignment", "type_annotation", "type_parameters"],
};
