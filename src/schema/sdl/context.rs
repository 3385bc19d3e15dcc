use super::super::builtins::{is_builtin_scalar, BuiltinDirective, BUILTIN_DIRECTIVES};
use crate::ast::*;
use crate::error::GraphQLError;
use crate::visit::VisitInfo;
use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// The `SdlContext` carrying the validated document, lookups of the types and directives it
/// defines, and a list of errors.
///
/// New errors are added to the list as the structural rules find problems in the document.
pub struct SdlContext<'a> {
    pub document: &'a Document<'a>,
    pub arena: &'a Bump,
    types: HashMap<&'a str, &'a TypeDefinition<'a>, DefaultHashBuilder, &'a Bump>,
    directives: HashMap<&'a str, KnownDirective<'a>, DefaultHashBuilder, &'a Bump>,
    pub errors: Vec<GraphQLError<'a>>,
}

impl<'a> SdlContext<'a> {
    /// Create a new `SdlContext` for a document, collecting the first definition of every type
    /// and directive name upfront.
    pub fn new(ctx: &'a ASTContext, document: &'a Document<'a>) -> Self {
        let mut types = HashMap::new_in(&ctx.arena);
        let mut directives = HashMap::new_in(&ctx.arena);
        for directive in BUILTIN_DIRECTIVES.iter() {
            directives.insert(directive.name, KnownDirective::Builtin(directive));
        }
        for definition in document.definitions.iter() {
            match definition {
                Definition::Type(type_def) => {
                    types.entry(type_def.name()).or_insert(type_def);
                }
                Definition::Directive(directive_def) => {
                    if !matches!(
                        directives.get(directive_def.name),
                        Some(KnownDirective::Defined(_))
                    ) {
                        directives
                            .insert(directive_def.name, KnownDirective::Defined(directive_def));
                    }
                }
                _ => {}
            }
        }
        SdlContext {
            document,
            arena: &ctx.arena,
            types,
            directives,
            errors: Vec::new(),
        }
    }

    /// Add an error to the list of errors in the `SdlContext`.
    pub fn report_error<S: Into<String>>(&mut self, message: S, nodes: Vec<ASTNode<'a>>) {
        self.errors.push(GraphQLError::new(message, nodes));
    }

    /// Returns the first definition of a type in the document by name.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<&'a TypeDefinition<'a>> {
        self.types.get(name).copied()
    }

    /// Returns whether a type name is either defined in the document or a built-in scalar.
    #[inline]
    pub fn is_known_type(&self, name: &str) -> bool {
        is_builtin_scalar(name) || self.types.contains_key(name)
    }

    /// Returns a directive by name. Definitions in the document take precedence over built-ins.
    #[inline]
    pub fn get_directive(&self, name: &str) -> Option<KnownDirective<'a>> {
        self.directives.get(name).copied()
    }
}

/// A directive that may be used in the validated document.
#[derive(Debug, Clone, Copy)]
pub enum KnownDirective<'a> {
    Builtin(&'static BuiltinDirective),
    Defined(&'a DirectiveDefinition<'a>),
}

impl<'a> KnownDirective<'a> {
    pub fn has_location(&self, location: DirectiveLocation) -> bool {
        match self {
            KnownDirective::Builtin(directive) => directive.locations.contains(&location),
            KnownDirective::Defined(directive) => directive.locations.contains(&location),
        }
    }

    pub fn is_repeatable(&self) -> bool {
        match self {
            KnownDirective::Builtin(_) => false,
            KnownDirective::Defined(directive) => directive.repeatable,
        }
    }

    pub fn has_argument(&self, name: &str) -> bool {
        match self {
            KnownDirective::Builtin(directive) => {
                directive.arguments.iter().any(|arg| arg.name == name)
            }
            KnownDirective::Defined(directive) => {
                directive.arguments.iter().any(|arg| arg.name == name)
            }
        }
    }

    /// Returns the names and printed types of all arguments which must be passed.
    pub fn required_arguments(&self) -> Vec<(&'a str, String)> {
        match self {
            KnownDirective::Builtin(directive) => directive
                .arguments
                .iter()
                .filter(|arg| arg.is_required())
                .map(|arg| (arg.name, format!("{}!", arg.type_name)))
                .collect(),
            KnownDirective::Defined(directive) => directive
                .arguments
                .iter()
                .filter(|arg| arg.is_required())
                .map(|arg| (arg.name, arg.of_type.to_string()))
                .collect(),
        }
    }
}

/// Returns the location of a directive that's currently being visited, which is derived from
/// the node that it's been applied to.
pub fn directive_location(info: &VisitInfo) -> Option<DirectiveLocation> {
    let mut ancestors = info.ancestors.iter().rev();
    let location = match ancestors.next()? {
        ASTNode::SchemaDefinition(_) | ASTNode::SchemaExtension(_) => DirectiveLocation::Schema,
        ASTNode::TypeDefinition(definition) => type_location(definition),
        ASTNode::TypeExtension(extension) => type_location(&extension.definition),
        ASTNode::FieldDefinition(_) => DirectiveLocation::FieldDefinition,
        ASTNode::EnumValueDefinition(_) => DirectiveLocation::EnumValue,
        ASTNode::InputValueDefinition(_) => match ancestors.next()? {
            ASTNode::TypeDefinition(TypeDefinition::InputObject(_)) => {
                DirectiveLocation::InputFieldDefinition
            }
            ASTNode::TypeExtension(TypeExtension {
                definition: TypeDefinition::InputObject(_),
            }) => DirectiveLocation::InputFieldDefinition,
            _ => DirectiveLocation::ArgumentDefinition,
        },
        _ => return None,
    };
    Some(location)
}

fn type_location(definition: &TypeDefinition) -> DirectiveLocation {
    match definition {
        TypeDefinition::Scalar(_) => DirectiveLocation::Scalar,
        TypeDefinition::Object(_) => DirectiveLocation::Object,
        TypeDefinition::Interface(_) => DirectiveLocation::Interface,
        TypeDefinition::Union(_) => DirectiveLocation::Union,
        TypeDefinition::Enum(_) => DirectiveLocation::Enum,
        TypeDefinition::InputObject(_) => DirectiveLocation::InputObject,
    }
}
