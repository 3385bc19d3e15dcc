//! # GraphQL Schema Definition Language AST
//!
//! The `graphql_schema_linter::ast` module contains the AST of the GraphQL schema definition
//! language (SDL) and the trait to parse it from source text.
//! [Reference](https://spec.graphql.org/October2021/#sec-Type-System)
//!
//! It's easiest to use this module by importing all of it, however, its main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`ASTNode`], a copyable reference to any AST node that errors are anchored at
//! - [`get_description`], which resolves a node's description, optionally from `#` comments
//!
//! The following workflow describes the minimum that's done using this module and while an AST
//! Context is active in the given scope.
//!
//! ```
//! use graphql_schema_linter::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let document = Document::parse(&ctx, "type Query { hello: String }").unwrap();
//!
//! // Every node knows where it's been defined
//! let definition = document.type_definitions().next().unwrap();
//! assert_eq!(definition.loc().line, 1);
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_kind;
mod ast_node;
mod description;
mod lexer;
mod parser;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use ast_node::ASTNode;
pub use description::{get_description, has_description};
pub use parser::ParseNode;
