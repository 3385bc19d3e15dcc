use super::ast::*;
use super::ast_kind::ASTKind;
use std::fmt;

/// A copyable reference to any AST node that errors may point at.
///
/// Visitors record the ancestors of the current node as `ASTNode`s and validation errors carry
/// the nodes they're anchored at, from which their locations are derived.
#[derive(Clone, Copy, PartialEq)]
pub enum ASTNode<'a> {
    Document(&'a Document<'a>),
    SchemaDefinition(&'a SchemaDefinition<'a>),
    SchemaExtension(&'a SchemaExtension<'a>),
    OperationTypeDefinition(&'a OperationTypeDefinition<'a>),
    TypeDefinition(&'a TypeDefinition<'a>),
    TypeExtension(&'a TypeExtension<'a>),
    FieldDefinition(&'a FieldDefinition<'a>),
    InputValueDefinition(&'a InputValueDefinition<'a>),
    EnumValueDefinition(&'a EnumValueDefinition<'a>),
    DirectiveDefinition(&'a DirectiveDefinition<'a>),
    Directive(&'a Directive<'a>),
    Argument(&'a Argument<'a>),
    ObjectField(&'a ObjectField<'a>),
    NamedType(&'a NamedType<'a>),
}

impl<'a> ASTNode<'a> {
    /// Returns the kind of the referenced node.
    pub fn kind(&self) -> ASTKind {
        match self {
            ASTNode::Document(_) => ASTKind::Document,
            ASTNode::SchemaDefinition(_) => ASTKind::SchemaDefinition,
            ASTNode::SchemaExtension(_) => ASTKind::SchemaExtension,
            ASTNode::OperationTypeDefinition(_) => ASTKind::OperationTypeDefinition,
            ASTNode::TypeDefinition(def) => match def {
                TypeDefinition::Scalar(_) => ASTKind::ScalarTypeDefinition,
                TypeDefinition::Object(_) => ASTKind::ObjectTypeDefinition,
                TypeDefinition::Interface(_) => ASTKind::InterfaceTypeDefinition,
                TypeDefinition::Union(_) => ASTKind::UnionTypeDefinition,
                TypeDefinition::Enum(_) => ASTKind::EnumTypeDefinition,
                TypeDefinition::InputObject(_) => ASTKind::InputObjectTypeDefinition,
            },
            ASTNode::TypeExtension(ext) => match ext.definition {
                TypeDefinition::Scalar(_) => ASTKind::ScalarTypeExtension,
                TypeDefinition::Object(_) => ASTKind::ObjectTypeExtension,
                TypeDefinition::Interface(_) => ASTKind::InterfaceTypeExtension,
                TypeDefinition::Union(_) => ASTKind::UnionTypeExtension,
                TypeDefinition::Enum(_) => ASTKind::EnumTypeExtension,
                TypeDefinition::InputObject(_) => ASTKind::InputObjectTypeExtension,
            },
            ASTNode::FieldDefinition(_) => ASTKind::FieldDefinition,
            ASTNode::InputValueDefinition(_) => ASTKind::InputValueDefinition,
            ASTNode::EnumValueDefinition(_) => ASTKind::EnumValueDefinition,
            ASTNode::DirectiveDefinition(_) => ASTKind::DirectiveDefinition,
            ASTNode::Directive(_) => ASTKind::Directive,
            ASTNode::Argument(_) => ASTKind::Argument,
            ASTNode::ObjectField(_) => ASTKind::ObjectField,
            ASTNode::NamedType(_) => ASTKind::NamedType,
        }
    }

    /// Returns the source range of the referenced node.
    pub fn loc(&self) -> Loc {
        match self {
            ASTNode::Document(node) => node.loc,
            ASTNode::SchemaDefinition(node) => node.loc,
            ASTNode::SchemaExtension(node) => node.loc,
            ASTNode::OperationTypeDefinition(node) => node.loc,
            ASTNode::TypeDefinition(node) => node.loc(),
            ASTNode::TypeExtension(node) => node.loc(),
            ASTNode::FieldDefinition(node) => node.loc,
            ASTNode::InputValueDefinition(node) => node.loc,
            ASTNode::EnumValueDefinition(node) => node.loc,
            ASTNode::DirectiveDefinition(node) => node.loc,
            ASTNode::Directive(node) => node.loc,
            ASTNode::Argument(node) => node.loc,
            ASTNode::ObjectField(node) => node.loc,
            ASTNode::NamedType(node) => node.loc,
        }
    }

    /// Returns the name of the referenced node, if it has one.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            ASTNode::Document(_)
            | ASTNode::SchemaDefinition(_)
            | ASTNode::SchemaExtension(_)
            | ASTNode::OperationTypeDefinition(_) => None,
            ASTNode::TypeDefinition(node) => Some(node.name()),
            ASTNode::TypeExtension(node) => Some(node.name()),
            ASTNode::FieldDefinition(node) => Some(node.name),
            ASTNode::InputValueDefinition(node) => Some(node.name),
            ASTNode::EnumValueDefinition(node) => Some(node.name),
            ASTNode::DirectiveDefinition(node) => Some(node.name),
            ASTNode::Directive(node) => Some(node.name),
            ASTNode::Argument(node) => Some(node.name),
            ASTNode::ObjectField(node) => Some(node.name),
            ASTNode::NamedType(node) => Some(node.name),
        }
    }
}

impl<'a> ASTNode<'a> {
    /// Returns the description string that was written for the referenced node, if any.
    pub fn description(&self) -> Option<&'a StringValue<'a>> {
        match self {
            ASTNode::SchemaDefinition(node) => node.description.as_ref(),
            ASTNode::TypeDefinition(node) => node.description(),
            ASTNode::FieldDefinition(node) => node.description.as_ref(),
            ASTNode::InputValueDefinition(node) => node.description.as_ref(),
            ASTNode::EnumValueDefinition(node) => node.description.as_ref(),
            ASTNode::DirectiveDefinition(node) => node.description.as_ref(),
            _ => None,
        }
    }
}

impl<'a> fmt::Debug for ASTNode<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self.loc();
        match self.name() {
            Some(name) => write!(f, "{}({}) @ {}:{}", self.kind(), name, loc.line, loc.column),
            None => write!(f, "{} @ {}:{}", self.kind(), loc.line, loc.column),
        }
    }
}
