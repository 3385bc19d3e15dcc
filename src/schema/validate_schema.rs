use super::schema::*;
use crate::ast::*;
use crate::error::GraphQLError;
use hashbrown::{HashMap, HashSet};

/// Validates a built [Schema] and returns all errors that are found in it.
///
/// This checks the rules of the type system that can only be checked once all types have been
/// built, for instance whether objects implement their interfaces correctly or whether input
/// objects reference themselves through non-null fields. The errors are computed from scratch on
/// every call and are never cached on the schema.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System)
pub fn validate_schema<'a>(schema: &'a Schema<'a>) -> Vec<GraphQLError<'a>> {
    let mut context = SchemaValidationContext {
        schema,
        errors: Vec::new(),
    };
    context.validate_root_types();
    context.validate_directives();
    context.validate_types();
    tracing::trace!(errors = context.errors.len(), "validated schema");
    context.errors
}

struct SchemaValidationContext<'a> {
    schema: &'a Schema<'a>,
    errors: Vec<GraphQLError<'a>>,
}

/// Returns the definition and extension nodes of a type as type definitions.
fn type_definitions<'a>(schema_type: SchemaType<'a>) -> Vec<&'a TypeDefinition<'a>> {
    schema_type
        .ast_nodes()
        .into_iter()
        .filter_map(|node| match node {
            ASTNode::TypeDefinition(definition) => Some(definition),
            ASTNode::TypeExtension(extension) => Some(&extension.definition),
            _ => None,
        })
        .collect()
}

/// Returns all named type nodes with which a type declares that it implements an interface.
fn implements_interface_nodes<'a>(schema_type: SchemaType<'a>, name: &str) -> Vec<ASTNode<'a>> {
    let mut nodes = Vec::new();
    for definition in type_definitions(schema_type) {
        let interfaces = match definition {
            TypeDefinition::Object(object) => &object.interfaces[..],
            TypeDefinition::Interface(interface) => &interface.interfaces[..],
            _ => continue,
        };
        nodes.extend(
            interfaces
                .iter()
                .filter(|interface| interface.name == name)
                .map(ASTNode::NamedType),
        );
    }
    nodes
}

/// Returns all named type nodes with which a union includes a member type.
fn union_member_nodes<'a>(schema_union: &'a SchemaUnion<'a>, name: &str) -> Vec<ASTNode<'a>> {
    let mut nodes = Vec::new();
    for definition in type_definitions(SchemaType::Union(schema_union)) {
        if let TypeDefinition::Union(union_type) = definition {
            nodes.extend(
                union_type
                    .types
                    .iter()
                    .filter(|member| member.name == name)
                    .map(ASTNode::NamedType),
            );
        }
    }
    nodes
}

fn field_nodes<'a>(field: &SchemaField<'a>) -> Vec<ASTNode<'a>> {
    field
        .ast_node
        .map(ASTNode::FieldDefinition)
        .into_iter()
        .collect()
}

fn input_field_nodes<'a>(field: &SchemaInputField<'a>) -> Vec<ASTNode<'a>> {
    field
        .ast_node
        .map(ASTNode::InputValueDefinition)
        .into_iter()
        .collect()
}

/// Returns the node of the `@deprecated` directive of an input, falling back to the input itself.
fn deprecated_nodes<'a>(field: &SchemaInputField<'a>) -> Vec<ASTNode<'a>> {
    match field
        .ast_node
        .and_then(|node| node.directives.get("deprecated"))
    {
        Some(directive) => vec![ASTNode::Directive(directive)],
        None => input_field_nodes(field),
    }
}

impl<'a> SchemaValidationContext<'a> {
    fn report_error<S: Into<String>>(&mut self, message: S, nodes: Vec<ASTNode<'a>>) {
        self.errors.push(GraphQLError::new(message, nodes));
    }

    fn is_input_type(&self, type_ref: &TypeRef<'a>) -> bool {
        type_ref
            .of_type(self.schema)
            .map_or(false, |schema_type| schema_type.is_input_type())
    }

    fn is_output_type(&self, type_ref: &TypeRef<'a>) -> bool {
        type_ref
            .of_type(self.schema)
            .map_or(false, |schema_type| schema_type.is_output_type())
    }

    fn validate_name(&mut self, name: &str, nodes: Vec<ASTNode<'a>>) {
        if name.starts_with("__") {
            self.report_error(
                format!(
                    "Name \"{}\" must not begin with \"__\", which is reserved by GraphQL introspection.",
                    name
                ),
                nodes,
            );
        }
    }

    fn validate_root_types(&mut self) {
        let schema = self.schema;
        let roots = [
            (OperationKind::Query, "Query root type must be Object type"),
            (
                OperationKind::Mutation,
                "Mutation root type must be Object type if provided",
            ),
            (
                OperationKind::Subscription,
                "Subscription root type must be Object type if provided",
            ),
        ];
        // A missing query root is accepted, since the schema may be one part of a larger schema
        for (operation, message) in roots {
            let root_type = match schema.get_root_type(operation) {
                Some(root_type) => root_type,
                None => continue,
            };
            if root_type.object().is_none() {
                let operation_type_node = schema
                    .ast_node
                    .iter()
                    .flat_map(|def| def.operation_types.iter())
                    .chain(
                        schema
                            .extension_ast_nodes
                            .iter()
                            .flat_map(|extension| extension.operation_types.iter()),
                    )
                    .find(|operation_type| operation_type.operation == operation);
                let nodes = match operation_type_node {
                    Some(node) => vec![ASTNode::OperationTypeDefinition(node)],
                    None => root_type.ast_nodes().into_iter().take(1).collect(),
                };
                self.report_error(
                    format!("{}, it cannot be {}.", message, root_type.name()),
                    nodes,
                );
            }
        }
    }

    fn validate_directives(&mut self) {
        let schema = self.schema;
        for directive in schema.directives() {
            let directive_nodes: Vec<ASTNode<'a>> = directive
                .ast_node
                .map(ASTNode::DirectiveDefinition)
                .into_iter()
                .collect();
            self.validate_name(directive.name, directive_nodes);

            for argument in directive.arguments.iter() {
                self.validate_name(argument.name, input_field_nodes(argument));
                if !self.is_input_type(argument.input_type) {
                    self.report_error(
                        format!(
                            "The type of @{}({}:) must be Input Type but got: {}.",
                            directive.name, argument.name, argument.input_type
                        ),
                        input_field_nodes(argument),
                    );
                }
                if argument.is_required() && argument.deprecation_reason.is_some() {
                    self.report_error(
                        format!(
                            "Required argument @{}({}:) cannot be deprecated.",
                            directive.name, argument.name
                        ),
                        deprecated_nodes(argument),
                    );
                }
            }
        }
    }

    fn validate_types(&mut self) {
        let schema = self.schema;
        let mut cycles = InputObjectCycles::default();
        for schema_type in schema.types() {
            self.validate_name(
                schema_type.name(),
                schema_type.ast_nodes().into_iter().take(1).collect(),
            );
            match schema_type {
                SchemaType::Object(object) => {
                    self.validate_fields(schema_type, object.get_fields());
                    self.validate_interfaces(schema_type, object.get_interfaces());
                }
                SchemaType::Interface(interface) => {
                    self.validate_fields(schema_type, interface.get_fields());
                    self.validate_interfaces(schema_type, interface.get_interfaces());
                }
                SchemaType::Union(union_type) => self.validate_union_members(union_type),
                SchemaType::Enum(enum_type) => self.validate_enum_values(enum_type),
                SchemaType::InputObject(input_object) => {
                    self.validate_input_fields(input_object);
                    cycles.detect(self, input_object);
                }
                SchemaType::Scalar(_) => {}
            }
        }
    }

    fn validate_fields(&mut self, schema_type: SchemaType<'a>, fields: &'a [SchemaField<'a>]) {
        let type_name = schema_type.name();
        if fields.is_empty() {
            self.report_error(
                format!("Type {} must define one or more fields.", type_name),
                schema_type.ast_nodes(),
            );
        }

        for field in fields {
            self.validate_name(field.name, field_nodes(field));
            if !self.is_output_type(field.output_type) {
                self.report_error(
                    format!(
                        "The type of {}.{} must be Output Type but got: {}.",
                        type_name, field.name, field.output_type
                    ),
                    field_nodes(field),
                );
            }

            for argument in field.arguments.iter() {
                self.validate_name(argument.name, input_field_nodes(argument));
                if !self.is_input_type(argument.input_type) {
                    self.report_error(
                        format!(
                            "The type of {}.{}({}:) must be Input Type but got: {}.",
                            type_name, field.name, argument.name, argument.input_type
                        ),
                        input_field_nodes(argument),
                    );
                }
                if argument.is_required() && argument.deprecation_reason.is_some() {
                    self.report_error(
                        format!(
                            "Required argument {}.{}({}:) cannot be deprecated.",
                            type_name, field.name, argument.name
                        ),
                        deprecated_nodes(argument),
                    );
                }
            }
        }
    }

    fn validate_interfaces(&mut self, schema_type: SchemaType<'a>, interfaces: &'a [&'a str]) {
        let schema = self.schema;
        let type_name = schema_type.name();
        let mut implemented: HashSet<&str> = HashSet::new();
        for &interface_name in interfaces {
            let interface = match schema.get_type(interface_name) {
                Some(SchemaType::Interface(interface)) => interface,
                _ => {
                    self.report_error(
                        format!(
                            "Type {} must only implement Interface types, it cannot implement {}.",
                            type_name, interface_name
                        ),
                        implements_interface_nodes(schema_type, interface_name),
                    );
                    continue;
                }
            };
            if interface.name == type_name {
                self.report_error(
                    format!(
                        "Type {} cannot implement itself because it would create a circular reference.",
                        type_name
                    ),
                    implements_interface_nodes(schema_type, interface_name),
                );
                continue;
            }
            if !implemented.insert(interface.name) {
                self.report_error(
                    format!(
                        "Type {} can only implement {} once.",
                        type_name, interface.name
                    ),
                    implements_interface_nodes(schema_type, interface_name),
                );
                continue;
            }
            self.validate_implements_ancestors(schema_type, interfaces, interface);
            self.validate_implements_interface(schema_type, interface);
        }
    }

    fn validate_implements_ancestors(
        &mut self,
        schema_type: SchemaType<'a>,
        interfaces: &'a [&'a str],
        interface: &'a SchemaInterface<'a>,
    ) {
        let type_name = schema_type.name();
        for transitive in interface.get_interfaces() {
            if interfaces.contains(transitive) {
                continue;
            }
            let message = if *transitive == type_name {
                format!(
                    "Type {} cannot implement {} because it would create a circular reference.",
                    type_name, interface.name
                )
            } else {
                format!(
                    "Type {} must implement {} because it is implemented by {}.",
                    type_name, transitive, interface.name
                )
            };
            let mut nodes =
                implements_interface_nodes(SchemaType::Interface(interface), transitive);
            nodes.extend(implements_interface_nodes(schema_type, interface.name));
            self.report_error(message, nodes);
        }
    }

    fn validate_implements_interface(
        &mut self,
        schema_type: SchemaType<'a>,
        interface: &'a SchemaInterface<'a>,
    ) {
        let schema = self.schema;
        let type_name = schema_type.name();
        let type_fields: &'a [SchemaField<'a>] = match schema_type {
            SchemaType::Object(object) => object.get_fields(),
            SchemaType::Interface(interface) => interface.get_fields(),
            _ => return,
        };

        for interface_field in interface.get_fields() {
            let field_name = interface_field.name;
            let type_field = match type_fields.iter().find(|field| field.name == field_name) {
                Some(type_field) => type_field,
                None => {
                    let mut nodes = field_nodes(interface_field);
                    nodes.extend(schema_type.ast_nodes());
                    self.report_error(
                        format!(
                            "Interface field {}.{} expected but {} does not provide it.",
                            interface.name, field_name, type_name
                        ),
                        nodes,
                    );
                    continue;
                }
            };

            if !schema.is_type_sub_type_of(type_field.output_type, interface_field.output_type) {
                let mut nodes = field_nodes(interface_field);
                nodes.extend(field_nodes(type_field));
                self.report_error(
                    format!(
                        "Interface field {}.{} expects type {} but {}.{} is type {}.",
                        interface.name,
                        field_name,
                        interface_field.output_type,
                        type_name,
                        field_name,
                        type_field.output_type
                    ),
                    nodes,
                );
            }

            for interface_argument in interface_field.arguments.iter() {
                let argument_name = interface_argument.name;
                let type_argument = match type_field.get_argument(argument_name) {
                    Some(type_argument) => type_argument,
                    None => {
                        let mut nodes = input_field_nodes(interface_argument);
                        nodes.extend(field_nodes(type_field));
                        self.report_error(
                            format!(
                                "Interface field argument {}.{}({}:) expected but {}.{} does not provide it.",
                                interface.name, field_name, argument_name, type_name, field_name
                            ),
                            nodes,
                        );
                        continue;
                    }
                };

                if interface_argument.input_type != type_argument.input_type {
                    let mut nodes = input_field_nodes(interface_argument);
                    nodes.extend(input_field_nodes(type_argument));
                    self.report_error(
                        format!(
                            "Interface field argument {}.{}({}:) expects type {} but {}.{}({}:) is type {}.",
                            interface.name,
                            field_name,
                            argument_name,
                            interface_argument.input_type,
                            type_name,
                            field_name,
                            argument_name,
                            type_argument.input_type
                        ),
                        nodes,
                    );
                }
            }

            for type_argument in type_field.arguments.iter() {
                if type_argument.is_required()
                    && interface_field.get_argument(type_argument.name).is_none()
                {
                    let mut nodes = input_field_nodes(type_argument);
                    nodes.extend(field_nodes(interface_field));
                    self.report_error(
                        format!(
                            "Object field {}.{} includes required argument {} that is missing from the Interface field {}.{}.",
                            type_name, field_name, type_argument.name, interface.name, field_name
                        ),
                        nodes,
                    );
                }
            }
        }
    }

    fn validate_union_members(&mut self, union_type: &'a SchemaUnion<'a>) {
        let schema = self.schema;
        let members = union_type.get_possible_types();
        if members.is_empty() {
            self.report_error(
                format!(
                    "Union type {} must define one or more member types.",
                    union_type.name
                ),
                SchemaType::Union(union_type).ast_nodes(),
            );
        }

        let mut included: HashSet<&str> = HashSet::new();
        for &member in members {
            if !included.insert(member) {
                self.report_error(
                    format!(
                        "Union type {} can only include type {} once.",
                        union_type.name, member
                    ),
                    union_member_nodes(union_type, member),
                );
                continue;
            }
            if schema.get_type(member).and_then(|t| t.object()).is_none() {
                self.report_error(
                    format!(
                        "Union type {} can only include Object types, it cannot include {}.",
                        union_type.name, member
                    ),
                    union_member_nodes(union_type, member),
                );
            }
        }
    }

    fn validate_enum_values(&mut self, enum_type: &'a SchemaEnum<'a>) {
        if enum_type.values.is_empty() {
            self.report_error(
                format!(
                    "Enum type {} must define one or more values.",
                    enum_type.name
                ),
                SchemaType::Enum(enum_type).ast_nodes(),
            );
        }

        for value in enum_type.values.iter() {
            let nodes: Vec<ASTNode<'a>> = value
                .ast_node
                .map(ASTNode::EnumValueDefinition)
                .into_iter()
                .collect();
            self.validate_name(value.name, nodes.clone());
            if matches!(value.name, "true" | "false" | "null") {
                self.report_error(
                    format!(
                        "Enum type {} cannot include value: {}.",
                        enum_type.name, value.name
                    ),
                    nodes,
                );
            }
        }
    }

    fn validate_input_fields(&mut self, input_object: &'a SchemaInputObject<'a>) {
        if input_object.fields.is_empty() {
            self.report_error(
                format!(
                    "Input Object type {} must define one or more fields.",
                    input_object.name
                ),
                SchemaType::InputObject(input_object).ast_nodes(),
            );
        }

        for field in input_object.fields.iter() {
            self.validate_name(field.name, input_field_nodes(field));
            if !self.is_input_type(field.input_type) {
                self.report_error(
                    format!(
                        "The type of {}.{} must be Input Type but got: {}.",
                        input_object.name, field.name, field.input_type
                    ),
                    input_field_nodes(field),
                );
            }
            if field.is_required() && field.deprecation_reason.is_some() {
                self.report_error(
                    format!(
                        "Required input field {}.{} cannot be deprecated.",
                        input_object.name, field.name
                    ),
                    deprecated_nodes(field),
                );
            }
        }
    }
}

/// Detects input objects that reference themselves through a path of non-null singular fields,
/// which makes it impossible to provide a finite value for them.
#[derive(Default)]
struct InputObjectCycles<'a> {
    visited: HashSet<&'a str>,
    field_path: Vec<&'a SchemaInputField<'a>>,
    path_index_by_type: HashMap<&'a str, usize>,
}

impl<'a> InputObjectCycles<'a> {
    fn detect(
        &mut self,
        context: &mut SchemaValidationContext<'a>,
        input_object: &'a SchemaInputObject<'a>,
    ) {
        if !self.visited.insert(input_object.name) {
            return;
        }
        self.path_index_by_type
            .insert(input_object.name, self.field_path.len());

        for field in input_object.fields.iter() {
            let field_type = match field.input_type {
                TypeRef::NonNullType(TypeRef::Type(name)) => {
                    match context.schema.get_type(name).and_then(|t| t.input_object()) {
                        Some(field_type) => field_type,
                        None => continue,
                    }
                }
                _ => continue,
            };

            self.field_path.push(field);
            match self.path_index_by_type.get(field_type.name).copied() {
                None => self.detect(context, field_type),
                Some(cycle_index) => {
                    let cycle_path = &self.field_path[cycle_index..];
                    let path = cycle_path
                        .iter()
                        .map(|field| field.name)
                        .collect::<Vec<_>>()
                        .join(".");
                    let nodes = cycle_path
                        .iter()
                        .flat_map(|field| input_field_nodes(field))
                        .collect();
                    context.report_error(
                        format!(
                            "Cannot reference Input Object \"{}\" within itself through a series of non-null fields: \"{}\".",
                            field_type.name, path
                        ),
                        nodes,
                    );
                }
            }
            self.field_path.pop();
        }

        self.path_index_by_type.remove(input_object.name);
    }
}

#[cfg(test)]
mod tests {
    use super::super::build_ast_schema::{build_ast_schema, BuildOptions};
    use super::*;
    use indoc::indoc;

    fn messages_of(source: &str) -> Vec<String> {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, source).unwrap();
        let options = BuildOptions {
            assume_valid_sdl: true,
            assume_valid: true,
            ..BuildOptions::default()
        };
        let schema = build_ast_schema(&ctx, document, options).unwrap();
        let errors = validate_schema(schema);
        errors.into_iter().map(|error| error.message).collect()
    }

    #[test]
    fn valid_schema() {
        let messages = messages_of(indoc! {r#"
            type Query implements Node & Entity {
              id: ID!
              node(id: ID!, extra: Int): Node
            }
            interface Entity { id: ID! }
            interface Node implements Entity { id: ID! node(id: ID!): Node }
            union Result = Query
            enum Color { RED }
            input Filter { color: Color, next: Filter, list: [Filter!]! }
        "#});
        assert!(messages.is_empty(), "{:?}", messages);
    }

    #[test]
    fn missing_query_root_is_accepted() {
        let messages = messages_of("type Foo { a: Int }");
        assert!(messages.is_empty());
    }

    #[test]
    fn root_types() {
        let messages = messages_of(indoc! {"
            schema { query: Filter mutation: Color }
            input Filter { a: Int }
            enum Color { RED }
        "});
        assert_eq!(
            messages,
            vec![
                "Query root type must be Object type, it cannot be Filter.",
                "Mutation root type must be Object type if provided, it cannot be Color.",
            ]
        );
    }

    #[test]
    fn reserved_names() {
        let messages = messages_of("type __Query { __a: Int } directive @__d on FIELD");
        assert_eq!(
            messages,
            vec![
                "Name \"__d\" must not begin with \"__\", which is reserved by GraphQL introspection.",
                "Name \"__Query\" must not begin with \"__\", which is reserved by GraphQL introspection.",
                "Name \"__a\" must not begin with \"__\", which is reserved by GraphQL introspection.",
            ]
        );
    }

    #[test]
    fn field_and_argument_types() {
        let messages = messages_of(indoc! {"
            type Query {
              input: Filter
              search(by: Query): Int
              old(id: ID! @deprecated): Int
            }
            input Filter { query: Query, required: Int! @deprecated }
            directive @d(arg: Query) on FIELD
        "});
        assert_eq!(
            messages,
            vec![
                "The type of @d(arg:) must be Input Type but got: Query.",
                "The type of Query.input must be Output Type but got: Filter.",
                "The type of Query.search(by:) must be Input Type but got: Query.",
                "Required argument Query.old(id:) cannot be deprecated.",
                "The type of Filter.query must be Input Type but got: Query.",
                "Required input field Filter.required cannot be deprecated.",
            ]
        );
    }

    #[test]
    fn interface_implementations() {
        let messages = messages_of(indoc! {"
            type Query implements Node & Query & Result & Node {
              id: String
              other(id: ID!): Int
            }
            interface Node implements Entity {
              id: ID!
              other(id: ID, flag: Boolean): Int
              missing: Int
            }
            interface Entity { id: ID! }
            union Result = Query
        "});
        assert_eq!(
            messages,
            vec![
                "Type Query must implement Entity because it is implemented by Node.",
                "Interface field Node.id expects type ID! but Query.id is type String.",
                "Interface field argument Node.other(id:) expects type ID but Query.other(id:) is type ID!.",
                "Interface field argument Node.other(flag:) expected but Query.other does not provide it.",
                "Interface field Node.missing expected but Query does not provide it.",
                "Type Query must only implement Interface types, it cannot implement Query.",
                "Type Query must only implement Interface types, it cannot implement Result.",
                "Type Query can only implement Node once.",
            ]
        );
    }

    #[test]
    fn interface_self_reference_and_extra_arguments() {
        let messages = messages_of(indoc! {"
            interface Node implements Node { id: ID! }
            interface A implements B { id: ID! }
            interface B implements A { id: ID! }
            type Query implements A & B { id(required: Int!): ID! }
        "});
        assert_eq!(
            messages,
            vec![
                "Type Node cannot implement itself because it would create a circular reference.",
                "Type A cannot implement B because it would create a circular reference.",
                "Type B cannot implement A because it would create a circular reference.",
                "Object field Query.id includes required argument required that is missing from the Interface field A.id.",
                "Object field Query.id includes required argument required that is missing from the Interface field B.id.",
            ]
        );
    }

    #[test]
    fn empty_types() {
        let messages = messages_of("type Empty\nunion Nothing\nenum Never\ninput Blank");
        assert_eq!(
            messages,
            vec![
                "Type Empty must define one or more fields.",
                "Union type Nothing must define one or more member types.",
                "Enum type Never must define one or more values.",
                "Input Object type Blank must define one or more fields.",
            ]
        );
    }

    #[test]
    fn union_members() {
        let messages = messages_of(indoc! {"
            type Query { a: Int }
            scalar Date
            union Result = Query | Query | Date
        "});
        assert_eq!(
            messages,
            vec![
                "Union type Result can only include type Query once.",
                "Union type Result can only include Object types, it cannot include Date.",
            ]
        );
    }

    #[test]
    fn input_object_cycles() {
        let messages = messages_of(indoc! {"
            input A { b: B! optional: A }
            input B { c: C! list: [A!]! }
            input C { a: A! self: C! }
        "});
        assert_eq!(
            messages,
            vec![
                "Cannot reference Input Object \"A\" within itself through a series of non-null fields: \"b.c.a\".",
                "Cannot reference Input Object \"C\" within itself through a series of non-null fields: \"self\".",
            ]
        );
    }

    #[test]
    fn errors_point_at_nodes() {
        let ctx = ASTContext::new();
        let document =
            Document::parse(&ctx, "type Query { a: Int }\nunion U = Query | Int").unwrap();
        let options = BuildOptions {
            assume_valid_sdl: true,
            assume_valid: true,
            ..BuildOptions::default()
        };
        let schema = build_ast_schema(&ctx, document, options).unwrap();
        let errors = validate_schema(schema);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].nodes.len(), 1);
        assert_eq!(errors[0].nodes[0].loc().line, 2);
        assert_eq!(errors[0].nodes[0].name(), Some("Int"));
    }
}
