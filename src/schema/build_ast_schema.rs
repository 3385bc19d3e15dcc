use self::private::BuildSchemaContext;

use super::schema::Schema;
use super::sdl::validate_sdl;
use super::validate_schema::validate_schema;
use crate::ast::{ASTContext, Document};
use crate::error::{Error, Result};

/// Options that are passed to [`build_ast_schema`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Use blocks of `#` comments directly above a node as its description when it has no
    /// description string.
    pub comment_descriptions: bool,
    /// Skip running the structural SDL rules on the document before building the schema.
    pub assume_valid_sdl: bool,
    /// Skip validating the built schema.
    pub assume_valid: bool,
}

pub(crate) mod private {
    use bumpalo::collections::Vec;
    use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

    use super::super::builtins::*;
    use super::super::schema::*;
    use crate::ast::*;
    use crate::error::{Error, Result};

    type ArenaMap<'a, V> = HashMap<&'a str, V, DefaultHashBuilder, &'a bumpalo::Bump>;

    pub struct BuildSchemaContext<'a> {
        pub(crate) ctx: &'a ASTContext,
        pub(crate) document: &'a Document<'a>,
        comment_descriptions: bool,
        definitions: ArenaMap<'a, &'a TypeDefinition<'a>>,
        extensions: ArenaMap<'a, Vec<'a, &'a TypeExtension<'a>>>,
    }

    impl<'a> BuildSchemaContext<'a> {
        pub(crate) fn new(
            ctx: &'a ASTContext,
            document: &'a Document<'a>,
            comment_descriptions: bool,
        ) -> Self {
            // The first pass collects all definitions and extensions by name, so that type
            // references can be checked and extensions merged while types are built.
            let mut definitions = HashMap::new_in(&ctx.arena);
            let mut extensions: HashMap<_, Vec<'a, _>, _, _> = HashMap::new_in(&ctx.arena);
            for definition in document.definitions.iter() {
                match definition {
                    Definition::Type(type_def) => {
                        definitions.entry(type_def.name()).or_insert(type_def);
                    }
                    Definition::TypeExtension(extension) => {
                        extensions
                            .entry(extension.name())
                            .or_insert_with(|| Vec::new_in(&ctx.arena))
                            .push(extension);
                    }
                    _ => {}
                }
            }
            BuildSchemaContext {
                ctx,
                document,
                comment_descriptions,
                definitions,
                extensions,
            }
        }

        pub(crate) fn description(&self, node: ASTNode<'a>) -> Option<&'a str> {
            use std::borrow::Cow;
            match get_description(node, self.document.source, self.comment_descriptions)? {
                Cow::Borrowed(description) => Some(description),
                Cow::Owned(description) => Some(self.ctx.alloc_string(description)),
            }
        }

        pub(crate) fn deprecation_reason(&self, directives: &'a Directives<'a>) -> Option<&'a str> {
            let deprecated = directives.get("deprecated")?;
            let reason = deprecated.arguments.get("reason");
            match reason.map(|argument| &argument.value) {
                Some(Value::String(reason)) => Some(reason.value),
                _ => Some(DEFAULT_DEPRECATION_REASON),
            }
        }

        pub(crate) fn type_ref(&self, of_type: &Type<'a>) -> Result<&'a TypeRef<'a>> {
            let name = of_type.of_type().name;
            if is_builtin_scalar(name) || self.definitions.contains_key(name) {
                Ok(TypeRef::from_ast(self.ctx, of_type))
            } else {
                Err(Error::new(format!("Unknown type: \"{}\".", name), None))
            }
        }

        pub(crate) fn extensions_of(&self, name: &str) -> &[&'a TypeExtension<'a>] {
            self.extensions
                .get(name)
                .map(|extensions| &extensions[..])
                .unwrap_or(&[])
        }

        /// Collects the members of a type definition followed by the members its extensions add.
        fn extended<T: 'a, F>(
            &self,
            definition: &'a TypeDefinition<'a>,
            select: F,
        ) -> std::vec::Vec<&'a T>
        where
            F: Fn(&'a TypeDefinition<'a>) -> Option<&'a [T]>,
        {
            let extensions = self
                .extensions_of(definition.name())
                .iter()
                .copied()
                .map(|extension| &extension.definition);
            std::iter::once(definition)
                .chain(extensions)
                .filter_map(select)
                .flat_map(|members| members.iter())
                .collect()
        }

        fn extension_nodes(
            &self,
            definition: &'a TypeDefinition<'a>,
        ) -> Vec<'a, &'a TypeExtension<'a>> {
            let mut nodes = Vec::new_in(&self.ctx.arena);
            let kind = std::mem::discriminant(definition);
            // Extensions of a different kind are never merged into the type
            for extension in self.extensions_of(definition.name()) {
                if std::mem::discriminant(&extension.definition) == kind {
                    nodes.push(*extension);
                }
            }
            nodes
        }

        fn named_types(
            &self,
            named_types: std::vec::Vec<&'a NamedType<'a>>,
        ) -> Result<Vec<'a, &'a str>> {
            let mut names = Vec::with_capacity_in(named_types.len(), &self.ctx.arena);
            for named_type in named_types {
                let of_type = Type::NamedType(*named_type);
                names.push(self.type_ref(&of_type)?.name());
            }
            Ok(names)
        }

        fn fields(&self, definition: &'a TypeDefinition<'a>) -> Result<Vec<'a, SchemaField<'a>>> {
            let members = self.extended(definition, |def| match def {
                TypeDefinition::Object(object) => Some(&object.fields[..]),
                TypeDefinition::Interface(interface) => Some(&interface.fields[..]),
                _ => None,
            });
            let mut fields = Vec::with_capacity_in(members.len(), &self.ctx.arena);
            for field in members {
                fields.push(field.on_create(self)?);
            }
            Ok(fields)
        }

        fn input_fields(
            &self,
            definition: &'a TypeDefinition<'a>,
        ) -> Result<Vec<'a, SchemaInputField<'a>>> {
            let members = self.extended(definition, |def| match def {
                TypeDefinition::InputObject(input_object) => Some(&input_object.fields[..]),
                _ => None,
            });
            let mut fields = Vec::with_capacity_in(members.len(), &self.ctx.arena);
            for field in members {
                fields.push(field.on_create(self)?);
            }
            Ok(fields)
        }

        fn interfaces(&self, definition: &'a TypeDefinition<'a>) -> Result<Vec<'a, &'a str>> {
            self.named_types(self.extended(definition, |def| match def {
                TypeDefinition::Object(object) => Some(&object.interfaces[..]),
                TypeDefinition::Interface(interface) => Some(&interface.interfaces[..]),
                _ => None,
            }))
        }

        pub fn build_schema(&self) -> Result<&'a Schema<'a>> {
            let mut schema = Schema::default_in(&self.ctx.arena);

            for name in BUILTIN_SCALARS.iter().copied() {
                if !self.definitions.contains_key(name) {
                    let scalar = SchemaScalar {
                        name,
                        description: None,
                        specified_by_url: None,
                        ast_node: None,
                        extension_ast_nodes: Vec::new_in(&self.ctx.arena),
                    };
                    schema.type_names.push(name);
                    schema
                        .types
                        .insert(name, SchemaType::Scalar(self.ctx.alloc(scalar)));
                }
            }

            for definition in self.document.type_definitions() {
                let name = definition.name();
                if schema.types.contains_key(name) {
                    continue;
                }
                let schema_type = definition.on_create(self)?;
                schema.type_names.push(name);
                schema.types.insert(name, schema_type);
            }

            let mut schema_definition = None;
            for definition in self.document.definitions.iter() {
                match definition {
                    Definition::Schema(def) if schema_definition.is_none() => {
                        schema_definition = Some(def);
                    }
                    Definition::SchemaExtension(extension) => {
                        schema.extension_ast_nodes.push(extension);
                    }
                    _ => {}
                }
            }
            schema.ast_node = schema_definition;
            schema.description =
                schema_definition.and_then(|def| self.description(ASTNode::SchemaDefinition(def)));

            if schema.ast_node.is_none() && schema.extension_ast_nodes.is_empty() {
                schema.query_type = schema.get_type("Query");
                schema.mutation_type = schema.get_type("Mutation");
                schema.subscription_type = schema.get_type("Subscription");
            } else {
                let operation_types = schema
                    .ast_node
                    .iter()
                    .flat_map(|def| def.operation_types.iter())
                    .chain(
                        schema
                            .extension_ast_nodes
                            .iter()
                            .flat_map(|extension| extension.operation_types.iter()),
                    );
                let mut roots = [None, None, None];
                for operation_type in operation_types {
                    let name = operation_type.named_type.name;
                    let root = schema.get_type(name).ok_or_else(|| {
                        Error::new(format!("Unknown type: \"{}\".", name), None)
                    })?;
                    let index = match operation_type.operation {
                        OperationKind::Query => 0,
                        OperationKind::Mutation => 1,
                        OperationKind::Subscription => 2,
                    };
                    roots[index] = Some(root);
                }
                let [query_type, mutation_type, subscription_type] = roots;
                schema.query_type = query_type;
                schema.mutation_type = mutation_type;
                schema.subscription_type = subscription_type;
            }

            let defined_directives: std::vec::Vec<_> =
                self.document.directive_definitions().collect();
            for directive in BUILTIN_DIRECTIVES.iter() {
                if defined_directives
                    .iter()
                    .all(|def| def.name != directive.name)
                {
                    let directive: &'a SchemaDirective<'a> =
                        self.ctx.alloc(directive.on_create(self)?);
                    schema.directives.push(directive);
                }
            }
            for directive in defined_directives {
                let directive: &'a SchemaDirective<'a> = self.ctx.alloc(directive.on_create(self)?);
                schema.directives.push(directive);
            }

            Ok(self.ctx.alloc(schema))
        }
    }

    pub trait BuildSchemaType<'a, T>: Sized {
        fn on_create(&'a self, ctx: &BuildSchemaContext<'a>) -> Result<T>;
    }

    impl<'a> BuildSchemaType<'a, SchemaType<'a>> for TypeDefinition<'a> {
        fn on_create(&'a self, ctx: &BuildSchemaContext<'a>) -> Result<SchemaType<'a>> {
            let description = ctx.description(ASTNode::TypeDefinition(self));
            let extension_ast_nodes = ctx.extension_nodes(self);
            let arena = &ctx.ctx.arena;
            let schema_type = match self {
                TypeDefinition::Scalar(_) => {
                    let extension_directives = extension_ast_nodes
                        .iter()
                        .map(|ext| ext.definition.directives());
                    let specified_by_url = std::iter::once(self.directives())
                        .chain(extension_directives)
                        .find_map(|directives| directives.get("specifiedBy"))
                        .and_then(|directive| directive.arguments.get("url"))
                        .and_then(|argument| match &argument.value {
                            Value::String(url) => Some(url.value),
                            _ => None,
                        });
                    SchemaType::Scalar(arena.alloc(SchemaScalar {
                        name: self.name(),
                        description,
                        specified_by_url,
                        ast_node: Some(self),
                        extension_ast_nodes,
                    }))
                }
                TypeDefinition::Object(_) => SchemaType::Object(arena.alloc(SchemaObject {
                    name: self.name(),
                    description,
                    fields: ctx.fields(self)?,
                    interfaces: ctx.interfaces(self)?,
                    ast_node: Some(self),
                    extension_ast_nodes,
                })),
                TypeDefinition::Interface(_) => SchemaType::Interface(arena.alloc(SchemaInterface {
                    name: self.name(),
                    description,
                    fields: ctx.fields(self)?,
                    interfaces: ctx.interfaces(self)?,
                    ast_node: Some(self),
                    extension_ast_nodes,
                })),
                TypeDefinition::Union(_) => {
                    let members = ctx.extended(self, |def| match def {
                        TypeDefinition::Union(union_type) => Some(&union_type.types[..]),
                        _ => None,
                    });
                    SchemaType::Union(arena.alloc(SchemaUnion {
                        name: self.name(),
                        description,
                        possible_types: ctx.named_types(members)?,
                        ast_node: Some(self),
                        extension_ast_nodes,
                    }))
                }
                TypeDefinition::Enum(_) => {
                    let members = ctx.extended(self, |def| match def {
                        TypeDefinition::Enum(enum_type) => Some(&enum_type.values[..]),
                        _ => None,
                    });
                    let mut values = Vec::with_capacity_in(members.len(), arena);
                    for value in members {
                        values.push(value.on_create(ctx)?);
                    }
                    SchemaType::Enum(arena.alloc(SchemaEnum {
                        name: self.name(),
                        description,
                        values,
                        ast_node: Some(self),
                        extension_ast_nodes,
                    }))
                }
                TypeDefinition::InputObject(_) => {
                    SchemaType::InputObject(arena.alloc(SchemaInputObject {
                        name: self.name(),
                        description,
                        fields: ctx.input_fields(self)?,
                        ast_node: Some(self),
                        extension_ast_nodes,
                    }))
                }
            };
            Ok(schema_type)
        }
    }

    impl<'a> BuildSchemaType<'a, SchemaField<'a>> for FieldDefinition<'a> {
        fn on_create(&'a self, ctx: &BuildSchemaContext<'a>) -> Result<SchemaField<'a>> {
            let mut arguments = Vec::with_capacity_in(self.arguments.len(), &ctx.ctx.arena);
            for argument in self.arguments.iter() {
                arguments.push(argument.on_create(ctx)?);
            }
            Ok(SchemaField {
                name: self.name,
                description: ctx.description(ASTNode::FieldDefinition(self)),
                arguments,
                output_type: ctx.type_ref(&self.of_type)?,
                deprecation_reason: ctx.deprecation_reason(&self.directives),
                ast_node: Some(self),
            })
        }
    }

    impl<'a> BuildSchemaType<'a, SchemaInputField<'a>> for InputValueDefinition<'a> {
        fn on_create(&'a self, ctx: &BuildSchemaContext<'a>) -> Result<SchemaInputField<'a>> {
            Ok(SchemaInputField {
                name: self.name,
                description: ctx.description(ASTNode::InputValueDefinition(self)),
                input_type: ctx.type_ref(&self.of_type)?,
                default_value: self.default_value.as_ref(),
                deprecation_reason: ctx.deprecation_reason(&self.directives),
                ast_node: Some(self),
            })
        }
    }

    impl<'a> BuildSchemaType<'a, SchemaEnumValue<'a>> for EnumValueDefinition<'a> {
        fn on_create(&'a self, ctx: &BuildSchemaContext<'a>) -> Result<SchemaEnumValue<'a>> {
            Ok(SchemaEnumValue {
                name: self.name,
                description: ctx.description(ASTNode::EnumValueDefinition(self)),
                deprecation_reason: ctx.deprecation_reason(&self.directives),
                ast_node: Some(self),
            })
        }
    }

    impl<'a> BuildSchemaType<'a, SchemaDirective<'a>> for DirectiveDefinition<'a> {
        fn on_create(&'a self, ctx: &BuildSchemaContext<'a>) -> Result<SchemaDirective<'a>> {
            let arena = &ctx.ctx.arena;
            let mut arguments = Vec::with_capacity_in(self.arguments.len(), arena);
            for argument in self.arguments.iter() {
                arguments.push(argument.on_create(ctx)?);
            }
            let mut locations = Vec::with_capacity_in(self.locations.len(), arena);
            locations.extend(self.locations.iter().copied());
            Ok(SchemaDirective {
                name: self.name,
                description: ctx.description(ASTNode::DirectiveDefinition(self)),
                arguments,
                locations,
                repeatable: self.repeatable,
                ast_node: Some(self),
            })
        }
    }

    impl<'a> BuildSchemaType<'a, SchemaDirective<'a>> for BuiltinDirective {
        fn on_create(&'a self, ctx: &BuildSchemaContext<'a>) -> Result<SchemaDirective<'a>> {
            let arena = &ctx.ctx.arena;
            let mut arguments = Vec::with_capacity_in(self.arguments.len(), arena);
            for argument in self.arguments.iter() {
                let named: &'a TypeRef<'a> = ctx.ctx.alloc(TypeRef::Type(argument.type_name));
                let input_type = if argument.non_null {
                    ctx.ctx.alloc(TypeRef::NonNullType(named))
                } else {
                    named
                };
                let default_value = argument.default_value.map(|value| {
                    let value: &'a Value<'a> = ctx.ctx.alloc(Value::String(StringValue {
                        value,
                        block: false,
                    }));
                    value
                });
                arguments.push(SchemaInputField {
                    name: argument.name,
                    description: Some(argument.description),
                    input_type,
                    default_value,
                    deprecation_reason: None,
                    ast_node: None,
                });
            }
            let mut locations = Vec::with_capacity_in(self.locations.len(), arena);
            locations.extend(self.locations.iter().copied());
            Ok(SchemaDirective {
                name: self.name,
                description: Some(self.description),
                arguments,
                locations,
                repeatable: false,
                ast_node: None,
            })
        }
    }
}

/// Builds a [Schema] from a schema definition document.
///
/// Unless [`BuildOptions::assume_valid_sdl`] is set the document is first checked using the
/// structural SDL rules, and unless [`BuildOptions::assume_valid`] is set the built schema is
/// validated afterwards. Both fail with an [Error] listing all messages that have been found.
/// Referencing a type that isn't defined always fails the build.
pub fn build_ast_schema<'a>(
    ctx: &'a ASTContext,
    document: &'a Document<'a>,
    options: BuildOptions,
) -> Result<&'a Schema<'a>> {
    if !options.assume_valid_sdl {
        let errors = validate_sdl(ctx, document);
        if !errors.is_empty() {
            return Err(Error::from_messages(
                "Schema definition failed validation",
                errors.iter().map(|error| error.message.as_str()),
            ));
        }
    }

    let builder_ctx = BuildSchemaContext::new(ctx, document, options.comment_descriptions);
    let schema = builder_ctx.build_schema()?;

    if !options.assume_valid {
        let errors = validate_schema(schema);
        if !errors.is_empty() {
            return Err(Error::from_messages(
                "Schema failed validation",
                errors.iter().map(|error| error.message.as_str()),
            ));
        }
    }
    Ok(schema)
}

/// Trait to build a [Schema] from a schema definition document.
pub trait BuildASTSchema<'a> {
    /// Converts the document to a [Schema]. See [`build_ast_schema`].
    fn build_ast_schema(
        &'a self,
        ctx: &'a ASTContext,
        options: BuildOptions,
    ) -> Result<&'a Schema<'a>>;
}

impl<'a> BuildASTSchema<'a> for Document<'a> {
    #[inline]
    fn build_ast_schema(
        &'a self,
        ctx: &'a ASTContext,
        options: BuildOptions,
    ) -> Result<&'a Schema<'a>> {
        build_ast_schema(ctx, self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::super::schema::*;
    use super::*;
    use crate::ast::{DirectiveLocation, ParseNode};
    use indoc::indoc;

    const SOURCE: &str = indoc! {r#"
        """
        The root
        """
        type Query implements Node {
          id: ID!
          # The viewer
          viewer: User
          old: String @deprecated
        }

        interface Node { id: ID! }
        type User implements Node { id: ID! name(full: Boolean = false): String }
        extend type User { email: String @deprecated(reason: "Private") }
        union Result = User
        extend union Result = Query
        enum Role { ADMIN USER }
        input Filter { role: Role = ADMIN }
        scalar Url @specifiedBy(url: "https://example.com")
        directive @auth(role: Role!) repeatable on OBJECT
    "#};

    #[test]
    fn builds_types_in_order() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, SOURCE).unwrap();
        let schema = build_ast_schema(&ctx, document, BuildOptions::default()).unwrap();

        let names: Vec<&str> = schema.types().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "String", "Int", "Float", "Boolean", "ID", "Query", "Node", "User", "Result",
                "Role", "Filter", "Url",
            ]
        );
        assert_eq!(schema.query_type().map(|query| query.name), Some("Query"));
        assert!(schema.mutation_type().is_none());
        let query = schema.get_type("Query").unwrap();
        assert_eq!(query.description(), Some("The root"));
        assert_eq!(
            schema.get_type("Url").and_then(|url| match url {
                SchemaType::Scalar(scalar) => scalar.specified_by_url,
                _ => None,
            }),
            Some("https://example.com")
        );
    }

    #[test]
    fn merges_extensions() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, SOURCE).unwrap();
        let schema = build_ast_schema(&ctx, document, BuildOptions::default()).unwrap();

        let user = schema.get_type("User").and_then(|t| t.object()).unwrap();
        assert_eq!(user.get_fields().len(), 3);
        assert_eq!(user.extension_ast_nodes.len(), 1);
        assert_eq!(
            user.get_field("email").unwrap().deprecation_reason,
            Some("Private")
        );
        assert_eq!(user.get_field("name").unwrap().arguments.len(), 1);

        let result = schema
            .get_type("Result")
            .and_then(|t| t.union_type())
            .unwrap();
        assert_eq!(result.get_possible_types(), &["User", "Query"]);

        let node = schema.get_type("Node").and_then(|t| t.interface()).unwrap();
        assert!(node.is_sub_type(SchemaType::Object(user)));
    }

    #[test]
    fn deprecations_and_directives() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, SOURCE).unwrap();
        let schema = build_ast_schema(&ctx, document, BuildOptions::default()).unwrap();

        let query = schema.query_type().unwrap();
        assert_eq!(
            query.get_field("old").unwrap().deprecation_reason,
            Some("No longer supported")
        );
        assert_eq!(query.get_field("id").unwrap().deprecation_reason, None);

        let names: Vec<&str> = schema.directives().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec!["include", "skip", "deprecated", "specifiedBy", "auth"]
        );
        let auth = schema.get_directive("auth").unwrap();
        assert!(auth.repeatable);
        assert_eq!(auth.locations.as_slice(), &[DirectiveLocation::Object]);
        assert_eq!(auth.arguments[0].input_type.to_string(), "Role!");
    }

    #[test]
    fn comment_descriptions() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, SOURCE).unwrap();

        let schema = build_ast_schema(&ctx, document, BuildOptions::default()).unwrap();
        let query = schema.query_type().unwrap();
        assert_eq!(query.get_field("viewer").unwrap().description, None);

        let options = BuildOptions {
            comment_descriptions: true,
            ..BuildOptions::default()
        };
        let schema = build_ast_schema(&ctx, document, options).unwrap();
        let query = schema.query_type().unwrap();
        assert_eq!(
            query.get_field("viewer").unwrap().description,
            Some("The viewer")
        );
    }

    #[test]
    fn root_types_from_schema_definition() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {"
                schema { query: Root }
                extend schema { mutation: Mutate }
                type Root { a: Int }
                type Mutate { b: Int }
                type Query { c: Int }
            "},
        )
        .unwrap();
        let schema = document
            .build_ast_schema(&ctx, BuildOptions::default())
            .unwrap();
        assert_eq!(schema.query_type().map(|root| root.name), Some("Root"));
        assert_eq!(schema.mutation_type().map(|root| root.name), Some("Mutate"));
        assert_eq!(schema.extension_ast_nodes.len(), 1);
    }

    #[test]
    fn failing_builds() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "type Query { a: Foo }").unwrap();

        let error = build_ast_schema(&ctx, document, BuildOptions::default()).unwrap_err();
        assert_eq!(error.message(), "Schema definition failed validation");
        assert_eq!(
            error.print(true),
            "GraphQL Error: Schema definition failed validation\n- Unknown type \"Foo\"."
        );

        let options = BuildOptions {
            assume_valid_sdl: true,
            ..BuildOptions::default()
        };
        let error = build_ast_schema(&ctx, document, options).unwrap_err();
        assert_eq!(error.message(), "Unknown type: \"Foo\".");

        let document =
            Document::parse(&ctx, "type Query { a: Int } union Bad = Query | Int").unwrap();
        let error = build_ast_schema(&ctx, document, BuildOptions::default()).unwrap_err();
        assert_eq!(error.message(), "Schema failed validation");

        let options = BuildOptions {
            assume_valid: true,
            ..BuildOptions::default()
        };
        assert!(build_ast_schema(&ctx, document, options).is_ok());
    }
}
