use crate::ast::*;
use bumpalo::collections::Vec;
use bumpalo::Bump;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;
use std::fmt;

/// Schema Definition
///
/// A schema is built from an SDL document and holds all named types in the order they've been
/// defined in, with the built-in scalars first, the root operation types, and all directives.
/// Every type and member keeps a reference to the AST node it's been defined by and to the
/// extension nodes that added to it, so that errors found on the schema can point at the source.
///
/// The schema never caches any validation state. [`validate_schema`](super::validate_schema)
/// always computes its errors from scratch.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, Clone)]
pub struct Schema<'a> {
    pub description: Option<&'a str>,
    pub(crate) query_type: Option<SchemaType<'a>>,
    pub(crate) mutation_type: Option<SchemaType<'a>>,
    pub(crate) subscription_type: Option<SchemaType<'a>>,
    pub(crate) types: HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a Bump>,
    pub(crate) type_names: Vec<'a, &'a str>,
    pub(crate) directives: Vec<'a, &'a SchemaDirective<'a>>,
    pub ast_node: Option<&'a SchemaDefinition<'a>>,
    pub extension_ast_nodes: Vec<'a, &'a SchemaExtension<'a>>,
}

impl<'a> DefaultIn<'a> for Schema<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Schema {
            description: None,
            query_type: None,
            mutation_type: None,
            subscription_type: None,
            types: HashMap::new_in(arena),
            type_names: Vec::new_in(arena),
            directives: Vec::new_in(arena),
            ast_node: None,
            extension_ast_nodes: Vec::new_in(arena),
        }
    }
}

impl<'a> Schema<'a> {
    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.query_type.and_then(|schema_type| schema_type.object())
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.mutation_type.and_then(|schema_type| schema_type.object())
    }

    /// Returns the root object type for subscription operations
    #[inline]
    pub fn subscription_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.subscription_type
            .and_then(|schema_type| schema_type.object())
    }

    /// Returns the type that's been declared as the root type of the passed operation kind.
    ///
    /// Unlike [`Schema::query_type`] this returns the type even if it isn't an object type.
    #[inline]
    pub fn get_root_type(&self, operation_kind: OperationKind) -> Option<SchemaType<'a>> {
        match operation_kind {
            OperationKind::Query => self.query_type,
            OperationKind::Mutation => self.mutation_type,
            OperationKind::Subscription => self.subscription_type,
        }
    }

    /// Retrieves a type by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<SchemaType<'a>> {
        self.types.get(name).copied()
    }

    /// Returns an iterator over all types in the order they've been defined in.
    pub fn types(&self) -> impl Iterator<Item = SchemaType<'a>> + '_ {
        self.type_names
            .iter()
            .filter_map(move |name| self.types.get(name).copied())
    }

    /// Returns all directives, starting with the built-in directives.
    #[inline]
    pub fn directives(&self) -> &[&'a SchemaDirective<'a>] {
        &self.directives
    }

    /// Retrieves a directive by name.
    pub fn get_directive(&self, name: &str) -> Option<&'a SchemaDirective<'a>> {
        self.directives
            .iter()
            .find(|directive| directive.name == name)
            .copied()
    }

    /// Checks whether a given type is a sub type of another.
    ///
    /// This is typically used for return types of fields. A return type may be any given sub type
    /// of the return type of said field.
    pub fn is_sub_type(&self, abstract_type: SchemaType<'a>, sub_type: SchemaType<'a>) -> bool {
        match abstract_type {
            SchemaType::Union(schema_union) => schema_union.is_sub_type(sub_type),
            SchemaType::Interface(schema_interface) => schema_interface.is_sub_type(sub_type),
            _ => false,
        }
    }

    /// Checks whether `maybe_sub_type` may be used where `super_type` is expected, which is the
    /// case when both types are equal or when the sub type is more specific, for instance
    /// non-null or an implementation of an interface.
    pub fn is_type_sub_type_of(
        &self,
        maybe_sub_type: &TypeRef<'a>,
        super_type: &TypeRef<'a>,
    ) -> bool {
        if maybe_sub_type == super_type {
            return true;
        }
        match (super_type, maybe_sub_type) {
            (TypeRef::NonNullType(super_of), TypeRef::NonNullType(sub_of)) => {
                self.is_type_sub_type_of(sub_of, super_of)
            }
            (TypeRef::NonNullType(_), _) => false,
            (_, TypeRef::NonNullType(sub_of)) => self.is_type_sub_type_of(sub_of, super_type),
            (TypeRef::ListType(super_of), TypeRef::ListType(sub_of)) => {
                self.is_type_sub_type_of(sub_of, super_of)
            }
            (TypeRef::ListType(_), _) | (_, TypeRef::ListType(_)) => false,
            (TypeRef::Type(super_name), TypeRef::Type(sub_name)) => {
                match (self.get_type(super_name), self.get_type(sub_name)) {
                    (Some(super_type), Some(sub_type)) => self.is_sub_type(super_type, sub_type),
                    _ => false,
                }
            }
        }
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields<'a>: Sized {
    /// Get the list of all fields in definition order
    fn get_fields(&self) -> &[SchemaField<'a>];

    /// Get a known field by name
    #[inline]
    fn get_field(&self, name: &str) -> Option<&SchemaField<'a>> {
        self.get_fields().iter().find(|field| field.name == name)
    }
}

/// Generic trait for any schema type that implements interfaces
pub trait SchemaInterfaces<'a>: Sized {
    /// Get list of implemented interfaces by name
    fn get_interfaces(&self) -> &[&'a str];

    /// Checks whether the type implements the given interface
    #[inline]
    fn implements_interface(&self, schema_interface: &SchemaInterface<'a>) -> bool {
        self.get_interfaces()
            .iter()
            .any(|interface| *interface == schema_interface.name)
    }
}

/// Generic trait for any schema type that may be a super type of other types
pub trait SchemaSuperType<'a>: Sized {
    /// Checks whether a given type is a sub type of the current super type.
    fn is_sub_type(&self, subtype: SchemaType<'a>) -> bool;
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields and the interfaces they implement.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: Vec<'a, SchemaField<'a>>,
    pub(crate) interfaces: Vec<'a, &'a str>,
    pub ast_node: Option<&'a TypeDefinition<'a>>,
    pub extension_ast_nodes: Vec<'a, &'a TypeExtension<'a>>,
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    #[inline]
    fn get_fields(&self) -> &[SchemaField<'a>] {
        &self.fields
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaObject<'a> {
    #[inline]
    fn get_interfaces(&self) -> &[&'a str] {
        &self.interfaces
    }
}

/// An Interface type definition.
///
/// Any object or other interfaces may implement one or more interfaces and must then adhere to the
/// definition of this interface.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone)]
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) fields: Vec<'a, SchemaField<'a>>,
    pub(crate) interfaces: Vec<'a, &'a str>,
    pub ast_node: Option<&'a TypeDefinition<'a>>,
    pub extension_ast_nodes: Vec<'a, &'a TypeExtension<'a>>,
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    #[inline]
    fn get_fields(&self) -> &[SchemaField<'a>] {
        &self.fields
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaInterface<'a> {
    #[inline]
    fn get_interfaces(&self) -> &[&'a str] {
        &self.interfaces
    }
}

impl<'a> SchemaSuperType<'a> for SchemaInterface<'a> {
    #[inline]
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool {
        match sub_type {
            SchemaType::Object(schema_object) => schema_object.implements_interface(self),
            SchemaType::Interface(schema_interface) => schema_interface.implements_interface(self),
            _ => false,
        }
    }
}

/// An object or interface Field definition.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone)]
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub arguments: Vec<'a, SchemaInputField<'a>>,
    pub output_type: &'a TypeRef<'a>,
    pub deprecation_reason: Option<&'a str>,
    pub ast_node: Option<&'a FieldDefinition<'a>>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

/// An argument or input object field definition.
#[derive(Debug, Clone)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub input_type: &'a TypeRef<'a>,
    pub default_value: Option<&'a Value<'a>>,
    pub deprecation_reason: Option<&'a str>,
    pub ast_node: Option<&'a InputValueDefinition<'a>>,
}

impl<'a> SchemaInputField<'a> {
    /// Returns whether a value must be passed for this input, which is the case for non-null
    /// inputs without a default value.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.input_type.is_non_null() && self.default_value.is_none()
    }
}

/// A Union type definition.
///
/// A union contains a list of possible types that can be returned in its stead when its defined as
/// an output type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone)]
pub struct SchemaUnion<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub(crate) possible_types: Vec<'a, &'a str>,
    pub ast_node: Option<&'a TypeDefinition<'a>>,
    pub extension_ast_nodes: Vec<'a, &'a TypeExtension<'a>>,
}

impl<'a> SchemaUnion<'a> {
    /// Get list of possible object types by name
    #[inline]
    pub fn get_possible_types(&self) -> &[&'a str] {
        &self.possible_types
    }

    /// Get a specific possible type by name if it exists on the type
    #[inline]
    pub fn get_possible_type(&self, name: &str) -> Option<&'a str> {
        self.possible_types
            .iter()
            .find(|possible_type| **possible_type == name)
            .copied()
    }
}

impl<'a> SchemaSuperType<'a> for SchemaUnion<'a> {
    #[inline]
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool {
        if let SchemaType::Object(schema_object) = sub_type {
            self.get_possible_type(schema_object.name).is_some()
        } else {
            false
        }
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values in GraphQL that are represented with a specific
/// serializer and deserializer, which makes the values returnable to a GraphQL client or readable
/// by a GraphQL API.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone)]
pub struct SchemaScalar<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub specified_by_url: Option<&'a str>,
    pub ast_node: Option<&'a TypeDefinition<'a>>,
    pub extension_ast_nodes: Vec<'a, &'a TypeExtension<'a>>,
}

/// An Enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, Clone)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub values: Vec<'a, SchemaEnumValue<'a>>,
    pub ast_node: Option<&'a TypeDefinition<'a>>,
    pub extension_ast_nodes: Vec<'a, &'a TypeExtension<'a>>,
}

#[derive(Debug, Clone)]
pub struct SchemaEnumValue<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub deprecation_reason: Option<&'a str>,
    pub ast_node: Option<&'a EnumValueDefinition<'a>>,
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to the
/// shape of an Input Object definition. This is often used to represent more complex inputs.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub fields: Vec<'a, SchemaInputField<'a>>,
    pub ast_node: Option<&'a TypeDefinition<'a>>,
    pub extension_ast_nodes: Vec<'a, &'a TypeExtension<'a>>,
}

/// A directive definition, either built-in or defined in the schema's document.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, Clone)]
pub struct SchemaDirective<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub arguments: Vec<'a, SchemaInputField<'a>>,
    pub locations: Vec<'a, DirectiveLocation>,
    pub repeatable: bool,
    pub ast_node: Option<&'a DirectiveDefinition<'a>>,
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, Clone, Copy)]
pub enum SchemaType<'a> {
    InputObject(&'a SchemaInputObject<'a>),
    Object(&'a SchemaObject<'a>),
    Union(&'a SchemaUnion<'a>),
    Interface(&'a SchemaInterface<'a>),
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
}

impl<'a> SchemaType<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::InputObject(x) => x.name,
            SchemaType::Object(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Scalar(x) => x.name,
            SchemaType::Enum(x) => x.name,
        }
    }

    #[inline]
    pub fn description(&self) -> Option<&'a str> {
        match self {
            SchemaType::InputObject(x) => x.description,
            SchemaType::Object(x) => x.description,
            SchemaType::Union(x) => x.description,
            SchemaType::Interface(x) => x.description,
            SchemaType::Scalar(x) => x.description,
            SchemaType::Enum(x) => x.description,
        }
    }

    pub fn object(&self) -> Option<&'a SchemaObject<'a>> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn input_object(&self) -> Option<&'a SchemaInputObject<'a>> {
        match self {
            SchemaType::InputObject(x) => Some(x),
            _ => None,
        }
    }

    pub fn interface(&self) -> Option<&'a SchemaInterface<'a>> {
        match self {
            SchemaType::Interface(x) => Some(x),
            _ => None,
        }
    }

    pub fn union_type(&self) -> Option<&'a SchemaUnion<'a>> {
        match self {
            SchemaType::Union(x) => Some(x),
            _ => None,
        }
    }

    /// Returns whether values of this type may be used as inputs.
    #[inline]
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            SchemaType::Scalar(_) | SchemaType::Enum(_) | SchemaType::InputObject(_)
        )
    }

    /// Returns whether this type may be returned by fields.
    #[inline]
    pub fn is_output_type(&self) -> bool {
        !matches!(self, SchemaType::InputObject(_))
    }

    /// Returns the AST nodes of the type's definition followed by its extensions.
    pub fn ast_nodes(&self) -> std::vec::Vec<ASTNode<'a>> {
        let (definition, extensions) = match self {
            SchemaType::InputObject(x) => (x.ast_node, &x.extension_ast_nodes),
            SchemaType::Object(x) => (x.ast_node, &x.extension_ast_nodes),
            SchemaType::Union(x) => (x.ast_node, &x.extension_ast_nodes),
            SchemaType::Interface(x) => (x.ast_node, &x.extension_ast_nodes),
            SchemaType::Scalar(x) => (x.ast_node, &x.extension_ast_nodes),
            SchemaType::Enum(x) => (x.ast_node, &x.extension_ast_nodes),
        };
        definition
            .map(ASTNode::TypeDefinition)
            .into_iter()
            .chain(extensions.iter().map(|node| ASTNode::TypeExtension(node)))
            .collect()
    }
}

/// A reference to a named type, optionally wrapped in list and non-null types.
///
/// References are resolved by name against the [Schema], which allows types to reference
/// each other circularly.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TypeRef<'a> {
    Type(&'a str),
    ListType(&'a TypeRef<'a>),
    NonNullType(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    /// Converts an AST type reference into a `TypeRef` allocated on the arena.
    pub fn from_ast(ctx: &'a ASTContext, of_type: &Type<'a>) -> &'a TypeRef<'a> {
        let type_ref = match of_type {
            Type::NamedType(named) => TypeRef::Type(named.name),
            Type::ListType(of_type) => TypeRef::ListType(TypeRef::from_ast(ctx, of_type)),
            Type::NonNullType(of_type) => TypeRef::NonNullType(TypeRef::from_ast(ctx, of_type)),
        };
        ctx.alloc(type_ref)
    }

    /// Returns the name of the named type that's wrapped by this reference.
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            TypeRef::Type(name) => name,
            TypeRef::ListType(of_type) | TypeRef::NonNullType(of_type) => of_type.name(),
        }
    }

    /// Resolves the named type that's wrapped by this reference.
    #[inline]
    pub fn of_type(&self, schema: &Schema<'a>) -> Option<SchemaType<'a>> {
        schema.get_type(self.name())
    }

    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNullType(_))
    }
}

impl<'a> fmt::Display for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Type(name) => f.write_str(name),
            TypeRef::ListType(of_type) => write!(f, "[{}]", of_type),
            TypeRef::NonNullType(of_type) => write!(f, "{}!", of_type),
        }
    }
}

impl<'a> fmt::Debug for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self)
    }
}
