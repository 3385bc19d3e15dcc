use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};
use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// Validates that the fields of every object, interface and input object type are only defined
/// once, across the type definition and all of its extensions.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects.Type-Validation)
pub struct UniqueFieldDefinitionNames<'a> {
    known_fields: HashMap<(&'a str, &'a str), ASTNode<'a>, DefaultHashBuilder, &'a Bump>,
}

impl<'a> DefaultIn<'a> for UniqueFieldDefinitionNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        UniqueFieldDefinitionNames {
            known_fields: HashMap::new_in(arena),
        }
    }
}

impl<'a> SdlRule<'a> for UniqueFieldDefinitionNames<'a> {}

impl<'a> UniqueFieldDefinitionNames<'a> {
    fn check_field(&mut self, ctx: &mut SdlContext<'a>, parent: ASTNode<'a>, field: ASTNode<'a>) {
        let (type_name, field_name) = match (parent.name(), field.name()) {
            (Some(type_name), Some(field_name)) => (type_name, field_name),
            _ => return,
        };
        if let Some(known) = self.known_fields.get(&(type_name, field_name)) {
            ctx.report_error(
                format!(
                    "Field \"{}.{}\" can only be defined once.",
                    type_name, field_name
                ),
                vec![*known, field],
            );
        } else {
            self.known_fields.insert((type_name, field_name), field);
        }
    }
}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueFieldDefinitionNames<'a> {
    fn enter_field_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        field: &'a FieldDefinition<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(parent) = info.parent() {
            self.check_field(ctx, parent, ASTNode::FieldDefinition(field));
        }
        VisitFlow::Skip
    }

    fn enter_input_value_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        input_value: &'a InputValueDefinition<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        // Only input fields are visited here, since field arguments are skipped above
        match info.parent() {
            Some(parent @ ASTNode::TypeDefinition(TypeDefinition::InputObject(_)))
            | Some(
                parent @ ASTNode::TypeExtension(TypeExtension {
                    definition: TypeDefinition::InputObject(_),
                }),
            ) => self.check_field(ctx, parent, ASTNode::InputValueDefinition(input_value)),
            _ => {}
        }
        VisitFlow::Skip
    }

    fn enter_directive_definition(
        &mut self,
        _ctx: &mut SdlContext<'a>,
        _directive: &'a DirectiveDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }
}
