//! `graphql_schema_linter`
//! =========
//!
//! _Fast linting of GraphQL Schema Definition Language documents._
//!
//! The **`graphql_schema_linter`** library checks a GraphQL schema definition for mistakes and
//! for violations of a set of conventions, for instance fields without descriptions, type names
//! that aren't capitalized or deprecations that don't give a reason.
//!
//! Linting a document happens in stages. A document that doesn't describe a valid schema is never
//! linted any further:
//!
//! - The document is checked for structural mistakes, like duplicate or unknown names
//! - A [`Schema`](schema::Schema) is built from the document and validated
//! - All selected lint rules are run on the document in a single traversal
//!
//! The errors of whichever stage has found any are returned, sorted by the line they've been
//! found on.
//!
//! ```
//! use graphql_schema_linter::{ast::ASTContext, config::LintConfiguration, validate::lint_schema};
//!
//! let ctx = ASTContext::new();
//! let configuration = LintConfiguration {
//!     rules: vec!["TypesAreCapitalized".to_string()],
//!     ..LintConfiguration::default()
//! };
//!
//! let errors = lint_schema(&ctx, "type foo { bar: String }", &configuration).unwrap();
//! assert_eq!(
//!     errors[0].to_string(),
//!     "1:1 The object type `foo` should start with a capital letter.  types-are-capitalized"
//! );
//! ```
//!
//! All memory for a document, the schema built from it and the errors pointing into it is
//! allocated in the arena of an [`ASTContext`](ast::ASTContext) and dropped at once.
//!
//! [A good place to start learning more about this crate is the `validate` module...](validate)

pub mod ast;
pub mod config;
pub mod error;
pub mod schema;
pub mod validate;
pub mod visit;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
