use crate::error::Location;
use bumpalo::collections::Vec;
use std::fmt;

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of parsing, building, validating and linting a schema it's performant and
/// convenient to allocate memory in one chunk for the AST and everything derived from it. This
/// context represents the lifetime of an AST and its derivatives, such as the
/// [`Schema`](crate::schema::Schema) built from it and the lint results pointing back into it.
///
/// Once the results aren't needed anymore all of this memory is dropped at once. Independent
/// contexts don't share any state and may be used on different threads.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for creating empty values of arena-allocated AST structures.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_ctx: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}

/// The source range of an AST node.
///
/// `start` and `end` are byte offsets into the source text, while `line` and `column` are the
/// one-based position of `start`. A definition's range starts at its description, if it has one.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Loc {
    /// Returns the line and column this node starts at.
    #[inline]
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
}

/// AST Node of an integer value.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: &'a str,
}

/// AST Node of a floating point value.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: &'a str,
}

/// AST Node of a string value.
///
/// Escape sequences are normalised away when parsing and block strings are dedented, hence this
/// `value` is the string's final value. `block` records whether the string was written as a
/// block string, i.e. using triple quotes.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
    pub block: bool,
}

/// AST Node of constant input values in GraphQL.
///
/// Schema definitions only accept constant values, which is why there are no variables.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// Representing JSON-like `null` values
    Null,
}

/// AST Node for a List of values.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: Vec<'a, Value<'a>>,
}

/// AST Node for a field of an Object value.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub loc: Loc,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a> {
    pub children: Vec<'a, ObjectField<'a>>,
}

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub loc: Loc,
}

/// AST Node for a list of Arguments that are passed to a directive.
///
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the argument with the given name, if it's been passed.
    pub fn get(&self, name: &str) -> Option<&Argument<'a>> {
        self.children.iter().find(|argument| argument.name == name)
    }
}

impl<'a> DefaultIn<'a> for Arguments<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Arguments {
            children: Vec::new_in(arena),
        }
    }
}

/// AST Node for GraphQL Directives, which annotate schema definitions.
///
/// Typical directives that occur in schemas are for example `@deprecated` and `@specifiedBy`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Arguments<'a>,
    pub loc: Loc,
}

/// AST Node for lists of GraphQL Directives.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    pub children: Vec<'a, Directive<'a>>,
}

impl<'a> Directives<'a> {
    /// Checks whether this list of Directives contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the first directive with the given name.
    pub fn get(&self, name: &str) -> Option<&Directive<'a>> {
        self.children
            .iter()
            .find(|directive| directive.name == name)
    }
}

impl<'a> DefaultIn<'a> for Directives<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Directives {
            children: Vec::new_in(arena),
        }
    }
}

/// AST Node for a type name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
    pub loc: Loc,
}

/// AST Node for a type reference.
///
/// Fields and input values must describe their type, including whether they expect lists,
/// non-null values, or a type reference, which is a recursive type definition.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named type, which is a leaf node of a [Type].
    NamedType(NamedType<'a>),
    /// A list node wrapper for a Type.
    ListType(&'a Type<'a>),
    /// A non-null node wrapper for a Type.
    NonNullType(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn of_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(of_type) => of_type,
            Type::ListType(of_type) | Type::NonNullType(of_type) => of_type.of_type(),
        }
    }

    /// Returns whether the outermost wrapper of this type is a non-null type.
    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNullType(_))
    }
}

impl<'a> fmt::Display for Type<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::NamedType(named) => f.write_str(named.name),
            Type::ListType(of_type) => write!(f, "[{}]", of_type),
            Type::NonNullType(of_type) => write!(f, "{}!", of_type),
        }
    }
}

/// AST Node for a kind of operation, as referred to by an [`OperationTypeDefinition`].
///
/// [Reference](https://spec.graphql.org/October2021/#OperationType)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AST Node assigning a root type to an operation kind inside a schema definition.
///
/// [Reference](https://spec.graphql.org/October2021/#RootOperationTypeDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationTypeDefinition<'a> {
    pub operation: OperationKind,
    pub named_type: NamedType<'a>,
    pub loc: Loc,
}

/// AST Node of a `schema` definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub directives: Directives<'a>,
    pub operation_types: Vec<'a, OperationTypeDefinition<'a>>,
    pub loc: Loc,
}

/// AST Node of an `extend schema` definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema-Extension)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaExtension<'a> {
    pub directives: Directives<'a>,
    pub operation_types: Vec<'a, OperationTypeDefinition<'a>>,
    pub loc: Loc,
}

/// AST Node of an input value, which are arguments of fields and directives, and the fields of
/// input object types.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub of_type: Type<'a>,
    /// The default value of this input value, if one was written.
    pub default_value: Option<Value<'a>>,
    pub directives: Directives<'a>,
    pub loc: Loc,
}

impl<'a> InputValueDefinition<'a> {
    /// Returns whether a value must be passed, i.e. it's non-null and has no default value.
    #[inline]
    pub fn is_required(&self) -> bool {
        self.of_type.is_non_null() && self.default_value.is_none()
    }
}

/// AST Node of a field on an object or interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub arguments: Vec<'a, InputValueDefinition<'a>>,
    pub of_type: Type<'a>,
    pub directives: Directives<'a>,
    pub loc: Loc,
}

/// AST Node of a single value of an enum type.
///
/// [Reference](https://spec.graphql.org/October2021/#EnumValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub loc: Loc,
}

/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub loc: Loc,
}

/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
    pub loc: Loc,
}

/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
    pub loc: Loc,
}

/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub types: Vec<'a, NamedType<'a>>,
    pub loc: Loc,
}

/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub values: Vec<'a, EnumValueDefinition<'a>>,
    pub loc: Loc,
}

/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, InputValueDefinition<'a>>,
    pub loc: Loc,
}

/// AST Node of any named type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#TypeDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeDefinition<'a> {
    Scalar(ScalarTypeDefinition<'a>),
    Object(ObjectTypeDefinition<'a>),
    Interface(InterfaceTypeDefinition<'a>),
    Union(UnionTypeDefinition<'a>),
    Enum(EnumTypeDefinition<'a>),
    InputObject(InputObjectTypeDefinition<'a>),
}

impl<'a> TypeDefinition<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            TypeDefinition::Scalar(def) => def.name,
            TypeDefinition::Object(def) => def.name,
            TypeDefinition::Interface(def) => def.name,
            TypeDefinition::Union(def) => def.name,
            TypeDefinition::Enum(def) => def.name,
            TypeDefinition::InputObject(def) => def.name,
        }
    }

    #[inline]
    pub fn description(&self) -> Option<&StringValue<'a>> {
        match self {
            TypeDefinition::Scalar(def) => def.description.as_ref(),
            TypeDefinition::Object(def) => def.description.as_ref(),
            TypeDefinition::Interface(def) => def.description.as_ref(),
            TypeDefinition::Union(def) => def.description.as_ref(),
            TypeDefinition::Enum(def) => def.description.as_ref(),
            TypeDefinition::InputObject(def) => def.description.as_ref(),
        }
    }

    #[inline]
    pub fn directives(&self) -> &Directives<'a> {
        match self {
            TypeDefinition::Scalar(def) => &def.directives,
            TypeDefinition::Object(def) => &def.directives,
            TypeDefinition::Interface(def) => &def.directives,
            TypeDefinition::Union(def) => &def.directives,
            TypeDefinition::Enum(def) => &def.directives,
            TypeDefinition::InputObject(def) => &def.directives,
        }
    }

    #[inline]
    pub fn loc(&self) -> Loc {
        match self {
            TypeDefinition::Scalar(def) => def.loc,
            TypeDefinition::Object(def) => def.loc,
            TypeDefinition::Interface(def) => def.loc,
            TypeDefinition::Union(def) => def.loc,
            TypeDefinition::Enum(def) => def.loc,
            TypeDefinition::InputObject(def) => def.loc,
        }
    }

    /// The kind of this type as it's named in messages, e.g. "input object".
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDefinition::Scalar(_) => "scalar",
            TypeDefinition::Object(_) => "object",
            TypeDefinition::Interface(_) => "interface",
            TypeDefinition::Union(_) => "union",
            TypeDefinition::Enum(_) => "enum",
            TypeDefinition::InputObject(_) => "input object",
        }
    }
}

/// AST Node of an `extend` definition of a named type.
///
/// The extended parts are stored in the same shape as a type definition, which never carries a
/// description for extensions.
///
/// [Reference](https://spec.graphql.org/October2021/#TypeExtension)
#[derive(Debug, PartialEq, Clone)]
pub struct TypeExtension<'a> {
    pub definition: TypeDefinition<'a>,
}

impl<'a> TypeExtension<'a> {
    #[inline]
    pub fn name(&self) -> &'a str {
        self.definition.name()
    }

    #[inline]
    pub fn loc(&self) -> Loc {
        self.definition.loc()
    }
}

/// A location at which a directive may be applied.
///
/// [Reference](https://spec.graphql.org/October2021/#DirectiveLocations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => DirectiveLocation::Query,
            "MUTATION" => DirectiveLocation::Mutation,
            "SUBSCRIPTION" => DirectiveLocation::Subscription,
            "FIELD" => DirectiveLocation::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            "SCHEMA" => DirectiveLocation::Schema,
            "SCALAR" => DirectiveLocation::Scalar,
            "OBJECT" => DirectiveLocation::Object,
            "FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            "INTERFACE" => DirectiveLocation::Interface,
            "UNION" => DirectiveLocation::Union,
            "ENUM" => DirectiveLocation::Enum,
            "ENUM_VALUE" => DirectiveLocation::EnumValue,
            "INPUT_OBJECT" => DirectiveLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AST Node of a `directive` definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub arguments: Vec<'a, InputValueDefinition<'a>>,
    pub repeatable: bool,
    pub locations: Vec<'a, DirectiveLocation>,
    pub loc: Loc,
}

/// AST Node of a definition as contained inside a [`Document`].
///
/// [Reference](https://spec.graphql.org/October2021/#TypeSystemDefinitionOrExtension)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Schema(SchemaDefinition<'a>),
    SchemaExtension(SchemaExtension<'a>),
    Type(TypeDefinition<'a>),
    TypeExtension(TypeExtension<'a>),
    Directive(DirectiveDefinition<'a>),
}

impl<'a> Definition<'a> {
    #[inline]
    pub fn loc(&self) -> Loc {
        match self {
            Definition::Schema(def) => def.loc,
            Definition::SchemaExtension(def) => def.loc,
            Definition::Type(def) => def.loc(),
            Definition::TypeExtension(def) => def.loc(),
            Definition::Directive(def) => def.loc,
        }
    }
}

/// AST Root Node for a GraphQL schema definition language document.
///
/// The document keeps a reference to the source text it was parsed from, which is needed to
/// recover descriptions that were written as `#` comments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub struct Document<'a> {
    pub definitions: Vec<'a, Definition<'a>>,
    pub source: &'a str,
    pub loc: Loc,
}

impl<'a> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates over all named type definitions in this document.
    pub fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition<'a>> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::Type(def) => Some(def),
            _ => None,
        })
    }

    /// Iterates over all type extensions in this document.
    pub fn type_extensions(&self) -> impl Iterator<Item = &TypeExtension<'a>> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::TypeExtension(def) => Some(def),
            _ => None,
        })
    }

    /// Iterates over all directive definitions in this document.
    pub fn directive_definitions(&self) -> impl Iterator<Item = &DirectiveDefinition<'a>> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::Directive(def) => Some(def),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_display() {
        let ctx = ASTContext::new();
        let named = Type::NamedType(NamedType {
            name: "String",
            loc: Loc::default(),
        });
        let list = Type::ListType(ctx.alloc(Type::NonNullType(ctx.alloc(named))));
        let wrapped = Type::NonNullType(ctx.alloc(list));
        assert_eq!(wrapped.to_string(), "[String!]!");
        assert_eq!(wrapped.of_type().name, "String");
        assert!(wrapped.is_non_null());
        assert!(!list.is_non_null());
    }

    #[test]
    fn directive_locations() {
        assert_eq!(
            DirectiveLocation::from_name("FIELD_DEFINITION"),
            Some(DirectiveLocation::FieldDefinition)
        );
        assert_eq!(DirectiveLocation::from_name("NOPE"), None);
        assert_eq!(DirectiveLocation::EnumValue.to_string(), "ENUM_VALUE");
    }
}
