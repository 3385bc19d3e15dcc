//! # Visiting GraphQL Schema ASTs
//!
//! The `graphql_schema_linter::visit` module contains utilities to traverse GraphQL SDL ASTs.
//! Mainly, this module exposes the [Visitor] trait, which is used to implement a visitor, and the
//! [`VisitNode`] trait that AST nodes implement and where visiting can start.
//!
//! Typically, a visitor is used to gain information about the AST and inspect it for certain
//! features. This is how the lint rules and the structural SDL rules of this crate are
//! implemented.
//!
//! In this example we'll define a visitor that counts all fields of object types:
//!
//! ```
//! use graphql_schema_linter::{ast::*, visit::*};
//!
//! #[derive(Default)]
//! struct CountFields {
//!    fields: usize,
//! }
//!
//! impl<'a> Visitor<'a> for CountFields {
//!     fn enter_input_object_type_definition(
//!         &mut self,
//!         _ctx: &mut (),
//!         _input: &'a InputObjectTypeDefinition<'a>,
//!         _info: &VisitInfo<'a>
//!     ) -> VisitFlow {
//!         // We can skip over input objects and never traverse their children,
//!         // since we're only interested in counting output fields
//!         VisitFlow::Skip
//!     }
//!
//!     fn enter_field_definition(
//!         &mut self,
//!         _ctx: &mut (),
//!         _field: &'a FieldDefinition<'a>,
//!         _info: &VisitInfo<'a>
//!     ) -> VisitFlow {
//!         self.fields += 1;
//!         VisitFlow::Next
//!     }
//! }
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "type Query { a: Int b: Int } input I { c: Int }").unwrap();
//! let mut visitor = CountFields::default();
//! document.visit(&mut (), &mut visitor);
//! assert_eq!(visitor.fields, 2);
//! ```
//!
//! Callbacks receive a [`VisitInfo`], which carries the current node's path and its ancestors,
//! so that a callback can for instance find the type that a field is defined on.
//!
//! Two visitors that are known statically may be combined using a [`ComposedVisitor`], while a
//! dynamic list of boxed visitors can be run in a single traversal using a [`ParallelVisitor`].
//!
//! [More information on the Visitor trait](Visitor)

/// Invokes the given macro with the list of all pairs of visitor callbacks and the AST node type
/// that they receive. The node types are passed as bare identifiers and take the `'a` lifetime.
macro_rules! for_each_callback {
    ($mac:ident) => {
        $mac! {
            enter_document, leave_document: Document;
            enter_schema_definition, leave_schema_definition: SchemaDefinition;
            enter_schema_extension, leave_schema_extension: SchemaExtension;
            enter_operation_type_definition, leave_operation_type_definition: OperationTypeDefinition;
            enter_scalar_type_definition, leave_scalar_type_definition: ScalarTypeDefinition;
            enter_object_type_definition, leave_object_type_definition: ObjectTypeDefinition;
            enter_interface_type_definition, leave_interface_type_definition: InterfaceTypeDefinition;
            enter_union_type_definition, leave_union_type_definition: UnionTypeDefinition;
            enter_enum_type_definition, leave_enum_type_definition: EnumTypeDefinition;
            enter_input_object_type_definition, leave_input_object_type_definition: InputObjectTypeDefinition;
            enter_type_extension, leave_type_extension: TypeExtension;
            enter_field_definition, leave_field_definition: FieldDefinition;
            enter_input_value_definition, leave_input_value_definition: InputValueDefinition;
            enter_enum_value_definition, leave_enum_value_definition: EnumValueDefinition;
            enter_directive_definition, leave_directive_definition: DirectiveDefinition;
            enter_directive, leave_directive: Directive;
            enter_argument, leave_argument: Argument;
            enter_named_type, leave_named_type: NamedType;
        }
    };
}

mod compose;
mod parallel;
mod path;
mod visitor;

pub use compose::ComposedVisitor;
pub use parallel::ParallelVisitor;
pub use path::*;
pub use visitor::*;
