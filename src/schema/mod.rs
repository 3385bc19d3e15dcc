//! # Building and Validating Schemas
//!
//! The `graphql_schema_linter::schema` module builds a [Schema] from a parsed schema definition
//! document and checks it for mistakes. These are the collaborators the linter relies on before
//! any lint rule is run:
//!
//! - [`validate_sdl`], which checks the document for structural mistakes, like duplicate names
//! - [`build_ast_schema`], which turns the document and its extensions into a [Schema]
//! - [`validate_schema`], which checks the rules of the type system on a built [Schema]
//!
//! ```
//! use graphql_schema_linter::{ast::*, schema::*};
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "type Query { hello: String }").unwrap();
//!
//! let schema = document.build_ast_schema(&ctx, BuildOptions::default()).unwrap();
//! assert_eq!(schema.query_type().map(|query| query.name), Some("Query"));
//! assert!(validate_schema(schema).is_empty());
//! ```
//!
//! [More information on the Schema struct.](Schema)

pub mod build_ast_schema;
pub mod builtins;
#[allow(clippy::module_inception)]
pub mod schema;
pub mod sdl;
pub mod validate_schema;

pub use build_ast_schema::{build_ast_schema, BuildASTSchema, BuildOptions};
pub use schema::*;
pub use sdl::validate_sdl;
pub use validate_schema::validate_schema;
