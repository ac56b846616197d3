//! Per-language statement classification tables.
//!
//! Each language contributes one [`LanguageTable`] naming the Tree-sitter
//! node kinds that are statements and where their bodies live. Tables are
//! merged into a [`Profile`] once per process and only read afterwards, so
//! concurrent trees share them without locking.

mod c;
mod cpp;
mod csharp;
mod go;
mod java;
mod javascript;
mod php;
mod python;
mod ruby;
mod rust;
mod typescript;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::language::SupportedLanguage;

/// Where a statement's nested statements live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySelector {
    /// Atomic statement; never descended.
    Simple,
    /// The statement's own children are its body. Always compound.
    Members,
    /// The body lives under the named fields and in branch clauses such as
    /// `else`, `catch` or `rescue`. Compound only when a body part is a block.
    Fields(&'static [&'static str]),
    /// The body is the last named child. Compound only when it is a block.
    Tail,
    /// Pass-through wrapper (labels, decorators, `export`, `template<>`).
    /// The node takes the compound status and body of the wrapped statement,
    /// found under the named field or as the last named child.
    Target(Option<&'static str>),
    /// Follow a path of field names (or child kinds) to a nested body block,
    /// as in `typedef struct { ... } Name;`.
    Path(&'static [&'static str]),
}

/// Static classification of one node kind in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Whether the kind denotes a statement.
    pub is_statement: bool,
    /// Whether the kind may own a body of nested statements. Whether a
    /// particular node is compound also depends on the shape of its body.
    pub is_compound: bool,
    /// Where nested statements are found.
    pub body: BodySelector,
}

impl Classification {
    /// Classification of kinds that are not statements.
    pub const NOT_STATEMENT: Self = Self {
        is_statement: false,
        is_compound: false,
        body: BodySelector::Simple,
    };

    /// Classification of statements with no body.
    pub const SIMPLE: Self = Self {
        is_statement: true,
        is_compound: false,
        body: BodySelector::Simple,
    };

    /// Creates a statement classification with the given body selector.
    #[must_use]
    pub const fn statement(body: BodySelector) -> Self {
        Self {
            is_statement: true,
            is_compound: !matches!(body, BodySelector::Simple),
            body,
        }
    }
}

/// Authoring format for one language's rules.
pub(crate) struct LanguageTable {
    /// Statement kinds and their body selectors.
    pub(crate) statements: &'static [(&'static str, BodySelector)],
    /// Kinds seen through when they form a body (`{ ... }`, Python suites).
    pub(crate) blocks: &'static [&'static str],
    /// Branch wrappers flattened into their owner (`else`, `catch`).
    pub(crate) clauses: &'static [&'static str],
    /// Kinds whose every named child is a statement.
    pub(crate) containers: &'static [&'static str],
    /// Kinds fused into the span of the statement that follows them.
    pub(crate) attachments: &'static [&'static str],
    /// Kinds never descended while looking for statements.
    pub(crate) opaque: &'static [&'static str],
}

/// Fields holding statement headers rather than bodies: conditions, names,
/// parameter lists, case values and the like.
const HEADER_FIELDS: &[&str] = &[
    "alias",
    "arguments",
    "communication",
    "condition",
    "declarator",
    "exceptions",
    "guard",
    "initializer",
    "interfaces",
    "key",
    "label",
    "left",
    "name",
    "object",
    "operator",
    "parameters",
    "pattern",
    "receiver",
    "result",
    "return_type",
    "right",
    "subject",
    "superclass",
    "superclasses",
    "type",
    "type_parameters",
    "update",
    "value",
    "variable",
];

/// Expression-level kinds shared by most grammars that never hold statements
/// worth splitting.
const COMMON_OPAQUE: &[&str] = &[
    "argument_list",
    "arguments",
    "formal_parameters",
    "parameter_list",
    "parameters",
    "string",
    "template_string",
];

/// How the builder treats a node it meets while walking a member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    /// Emit a statement.
    Statement(Classification),
    /// Fuse into the following statement.
    Attachment,
    /// Descend without emitting.
    Transparent,
    /// Parser error region: well-formed statements inside it are emitted and
    /// the remaining fragments become one simple statement.
    Recovered,
    /// Skip entirely.
    Opaque,
}

/// Merged, lookup-ready rules for one language.
pub(crate) struct Profile {
    language: SupportedLanguage,
    statements: HashMap<&'static str, BodySelector>,
    blocks: HashSet<&'static str>,
    clauses: HashSet<&'static str>,
    containers: HashSet<&'static str>,
    attachments: HashSet<&'static str>,
    opaque: HashSet<&'static str>,
}

impl Profile {
    fn from_tables(language: SupportedLanguage, tables: &[&LanguageTable]) -> Self {
        let mut profile = Self {
            language,
            statements: HashMap::new(),
            blocks: HashSet::new(),
            clauses: HashSet::new(),
            containers: HashSet::new(),
            attachments: HashSet::new(),
            opaque: COMMON_OPAQUE.iter().copied().collect(),
        };
        // Later tables refine earlier ones (C++ over C, TypeScript over
        // JavaScript).
        for table in tables {
            profile
                .statements
                .extend(table.statements.iter().copied());
            profile.blocks.extend(table.blocks.iter().copied());
            profile.clauses.extend(table.clauses.iter().copied());
            profile.containers.extend(table.containers.iter().copied());
            profile.attachments.extend(table.attachments.iter().copied());
            profile.opaque.extend(table.opaque.iter().copied());
        }
        profile
    }

    #[cfg(test)]
    pub(crate) const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns the static classification of `kind`.
    pub(crate) fn classify(&self, kind: &str) -> Classification {
        self.statements
            .get(kind)
            .map_or(Classification::NOT_STATEMENT, |body| {
                Classification::statement(*body)
            })
    }

    pub(crate) fn is_block(&self, kind: &str) -> bool {
        self.blocks.contains(kind)
    }

    pub(crate) fn is_clause(&self, kind: &str) -> bool {
        self.clauses.contains(kind)
    }

    pub(crate) fn is_container(&self, kind: &str) -> bool {
        self.containers.contains(kind)
    }

    /// Decides how a named child met in a member list is treated.
    ///
    /// `in_container` is true when the enclosing node is a container kind,
    /// in which case otherwise unknown children are simple statements.
    pub(crate) fn role(&self, kind: &str, is_error: bool, in_container: bool) -> Role {
        if is_error {
            return Role::Recovered;
        }
        if let Some(body) = self.statements.get(kind) {
            return Role::Statement(Classification::statement(*body));
        }
        if self.attachments.contains(kind) {
            return Role::Attachment;
        }
        if self.blocks.contains(kind) || self.clauses.contains(kind) {
            return Role::Transparent;
        }
        if self.opaque.contains(kind) {
            return Role::Opaque;
        }
        if in_container {
            return Role::Statement(Classification::SIMPLE);
        }
        if is_expression_kind(kind) {
            return Role::Opaque;
        }
        Role::Transparent
    }
}

/// Returns whether `field` names a statement header rather than a body.
pub(crate) fn is_header_field(field: &str) -> bool {
    HEADER_FIELDS.contains(&field)
}

fn is_expression_kind(kind: &str) -> bool {
    kind.ends_with("expression") || kind.ends_with("literal") || kind.ends_with("lambda")
}

macro_rules! profile_static {
    ($name:ident, $language:ident, [$($table:expr),+ $(,)?]) => {
        static $name: Lazy<Profile> = Lazy::new(|| {
            Profile::from_tables(SupportedLanguage::$language, &[$(&$table),+])
        });
    };
}

profile_static!(C_PROFILE, C, [c::TABLE]);
profile_static!(CPP_PROFILE, Cpp, [c::TABLE, cpp::TABLE]);
profile_static!(CSHARP_PROFILE, CSharp, [csharp::TABLE]);
profile_static!(GO_PROFILE, Go, [go::TABLE]);
profile_static!(JAVA_PROFILE, Java, [java::TABLE]);
profile_static!(JAVASCRIPT_PROFILE, JavaScript, [javascript::TABLE]);
profile_static!(PHP_PROFILE, Php, [php::TABLE]);
profile_static!(PYTHON_PROFILE, Python, [python::TABLE]);
profile_static!(RUBY_PROFILE, Ruby, [ruby::TABLE]);
profile_static!(RUST_PROFILE, Rust, [rust::TABLE]);
profile_static!(TYPESCRIPT_PROFILE, TypeScript, [javascript::TABLE, typescript::TABLE]);
profile_static!(TSX_PROFILE, Tsx, [javascript::TABLE, typescript::TABLE]);

/// Returns the merged rules for `language`, building them on first use.
pub(crate) fn profile(language: SupportedLanguage) -> &'static Profile {
    match language {
        SupportedLanguage::C => &C_PROFILE,
        SupportedLanguage::Cpp => &CPP_PROFILE,
        SupportedLanguage::CSharp => &CSHARP_PROFILE,
        SupportedLanguage::Go => &GO_PROFILE,
        SupportedLanguage::Java => &JAVA_PROFILE,
        SupportedLanguage::JavaScript => &JAVASCRIPT_PROFILE,
        SupportedLanguage::Php => &PHP_PROFILE,
        SupportedLanguage::Python => &PYTHON_PROFILE,
        SupportedLanguage::Ruby => &RUBY_PROFILE,
        SupportedLanguage::Rust => &RUST_PROFILE,
        SupportedLanguage::TypeScript => &TYPESCRIPT_PROFILE,
        SupportedLanguage::Tsx => &TSX_PROFILE,
    }
}

/// Classifies `kind` for `language`.
///
/// Unknown kinds are reported as [`Classification::NOT_STATEMENT`]; the
/// builder walks through them transparently.
///
/// # Examples
///
/// ```
/// use kerf_syntax::{BodySelector, SupportedLanguage, classify};
///
/// let class = classify(SupportedLanguage::C, "if_statement");
/// assert!(class.is_statement && class.is_compound);
/// assert_eq!(classify(SupportedLanguage::C, "argument_list").is_statement, false);
/// ```
#[must_use]
pub fn classify(language: SupportedLanguage, kind: &str) -> Classification {
    profile(language).classify(kind)
}
