use std::fmt;

/// An enum of identifiers representing AST nodes.
///
/// This enum can be printed using the [`fmt::Display`] trait, which prints the kind's name as
/// GraphQL.js names it, e.g. `ObjectTypeDefinition`.
/// When parsing this enum is used to indicate what AST node encountered a parsing error.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::Definition]
    Definition,
    /// See: [crate::ast::SchemaDefinition]
    SchemaDefinition,
    /// See: [crate::ast::SchemaExtension]
    SchemaExtension,
    /// See: [crate::ast::OperationTypeDefinition]
    OperationTypeDefinition,
    /// See: [crate::ast::ScalarTypeDefinition]
    ScalarTypeDefinition,
    /// See: [crate::ast::ObjectTypeDefinition]
    ObjectTypeDefinition,
    /// See: [crate::ast::InterfaceTypeDefinition]
    InterfaceTypeDefinition,
    /// See: [crate::ast::UnionTypeDefinition]
    UnionTypeDefinition,
    /// See: [crate::ast::EnumTypeDefinition]
    EnumTypeDefinition,
    /// See: [crate::ast::EnumValueDefinition]
    EnumValueDefinition,
    /// See: [crate::ast::InputObjectTypeDefinition]
    InputObjectTypeDefinition,
    /// See: [crate::ast::FieldDefinition]
    FieldDefinition,
    /// See: [crate::ast::InputValueDefinition]
    InputValueDefinition,
    /// See: [crate::ast::DirectiveDefinition]
    DirectiveDefinition,
    /// See: [crate::ast::DirectiveLocation]
    DirectiveLocation,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
    /// See: [crate::ast::Type]
    Type,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::ObjectValue]
    Object,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::Value]
    Value,
    /// See: [crate::ast::StringValue]
    String,
    /// See: [crate::ast::ListValue]
    List,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ASTKind::Document => "Document",
            ASTKind::Definition => "Definition",
            ASTKind::SchemaDefinition => "SchemaDefinition",
            ASTKind::SchemaExtension => "SchemaExtension",
            ASTKind::OperationTypeDefinition => "OperationTypeDefinition",
            ASTKind::ScalarTypeDefinition => "ScalarTypeDefinition",
            ASTKind::ObjectTypeDefinition => "ObjectTypeDefinition",
            ASTKind::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            ASTKind::UnionTypeDefinition => "UnionTypeDefinition",
            ASTKind::EnumTypeDefinition => "EnumTypeDefinition",
            ASTKind::EnumValueDefinition => "EnumValueDefinition",
            ASTKind::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            ASTKind::FieldDefinition => "FieldDefinition",
            ASTKind::InputValueDefinition => "InputValueDefinition",
            ASTKind::DirectiveDefinition => "DirectiveDefinition",
            ASTKind::DirectiveLocation => "DirectiveLocation",
            ASTKind::ScalarTypeExtension => "ScalarTypeExtension",
            ASTKind::ObjectTypeExtension => "ObjectTypeExtension",
            ASTKind::InterfaceTypeExtension => "InterfaceTypeExtension",
            ASTKind::UnionTypeExtension => "UnionTypeExtension",
            ASTKind::EnumTypeExtension => "EnumTypeExtension",
            ASTKind::InputObjectTypeExtension => "InputObjectTypeExtension",
            ASTKind::Type => "Type",
            ASTKind::NamedType => "NamedType",
            ASTKind::Directive => "Directive",
            ASTKind::Argument => "Argument",
            ASTKind::Object => "ObjectValue",
            ASTKind::ObjectField => "ObjectField",
            ASTKind::Value => "Value",
            ASTKind::String => "StringValue",
            ASTKind::List => "ListValue",
        })
    }
}
