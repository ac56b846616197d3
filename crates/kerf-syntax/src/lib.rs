//! Statement boundaries for source code, powered by Tree-sitter.
//!
//! Given a document, a language identifier and a range, this crate builds a
//! [`StatementTree`]: the statements that intersect the range, nested the
//! way the code nests them. Editors use it to select, move or fold whole
//! statements instead of raw lines.
//!
//! - **Grammar registry** ([`classify`]) decides which Tree-sitter node
//!   kinds are statements and where their bodies live.
//! - **CST adapter** ([`CstHandle`], [`CstNode`]) parses source and exposes a
//!   uniform node view.
//! - **Compound classifier** ([`is_compound_statement`]) decides per node
//!   whether a statement owns a block.
//! - **Statement tree** ([`StatementTree`], [`StatementNode`]) builds and
//!   queries the hierarchy.
//!
//! # Supported Languages
//!
//! C, C++, C#, Go, Java, JavaScript, PHP, Python, Ruby, Rust, TypeScript and
//! TSX.
//!
//! # Compound statements
//!
//! A statement is compound only when it owns a block. Braces decide, not
//! the statement kind:
//!
//! ```
//! use kerf_syntax::StatementTree;
//!
//! let braced = "if (x) { y = 1; }";
//! let mut tree = StatementTree::new("c", braced, 0..braced.len())?;
//! tree.build_blocking()?;
//! let statement = tree.statements().next().expect("statement");
//! assert!(statement.is_compound_statement_type());
//! assert_eq!(statement.children().count(), 1);
//!
//! let bare = "if (x) y = 1;";
//! let mut tree = StatementTree::new("c", bare, 0..bare.len())?;
//! tree.build_blocking()?;
//! let statement = tree.statements().next().expect("statement");
//! assert!(!statement.is_compound_statement_type());
//! # Ok::<(), kerf_syntax::StatementTreeError>(())
//! ```
//!
//! # Range scoping
//!
//! Only statements intersecting the query range are built, each with its
//! full extent. An empty range is a point: a cursor inside a function yields
//! the enclosing function and the statement under the cursor.
//!
//! ```
//! use kerf_syntax::StatementTree;
//!
//! let source = "int f() {\n  a();\n  b();\n}\n";
//! let mut tree = StatementTree::new("c", source, 13..13)?;
//! tree.build_blocking()?;
//! let function = tree.statements().next().expect("function");
//! let texts: Vec<_> = function.children().map(|node| node.text()).collect();
//! assert_eq!(texts, vec!["a();"]);
//! # Ok::<(), kerf_syntax::StatementTreeError>(())
//! ```

mod arena;
mod builder;
mod classifier;
mod cst;
mod error;
mod grammar;
mod language;
mod offsets;
mod tree;

pub use arena::StatementId;
pub use classifier::is_compound_statement;
pub use cst::{CstHandle, CstNode, SyntaxErrorInfo};
pub use error::StatementTreeError;
pub use grammar::{BodySelector, Classification, classify};
pub use kerf_config::{OffsetEncoding, RangePolicy, TreeOptions};
pub use language::{LanguageParseError, SupportedLanguage, is_supported};
pub use tree::{StatementNode, StatementTree};

#[cfg(test)]
mod tests;
