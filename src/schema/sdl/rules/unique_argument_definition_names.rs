use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that the arguments of every field and directive definition have unique names.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects.Type-Validation)
#[derive(Default)]
pub struct UniqueArgumentDefinitionNames;

impl<'a> SdlRule<'a> for UniqueArgumentDefinitionNames {}

/// Reports every group of arguments sharing a name, naming the arguments using `describe`.
fn check_arguments<'a, F>(
    ctx: &mut SdlContext<'a>,
    arguments: &'a [InputValueDefinition<'a>],
    describe: F,
) where
    F: Fn(&str) -> String,
{
    for (index, argument) in arguments.iter().enumerate() {
        let is_first = !arguments[..index]
            .iter()
            .any(|other| other.name == argument.name);
        if !is_first {
            continue;
        }
        let duplicates: Vec<ASTNode<'a>> = arguments[index..]
            .iter()
            .filter(|other| other.name == argument.name)
            .map(ASTNode::InputValueDefinition)
            .collect();
        if duplicates.len() > 1 {
            ctx.report_error(
                format!(
                    "Argument \"{}\" can only be defined once.",
                    describe(argument.name)
                ),
                duplicates,
            );
        }
    }
}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueArgumentDefinitionNames {
    fn enter_field_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        field: &'a FieldDefinition<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let type_name = info
            .parent()
            .and_then(|parent| parent.name())
            .unwrap_or_default();
        check_arguments(ctx, &field.arguments, |argument| {
            format!("{}.{}({}:)", type_name, field.name, argument)
        });
        VisitFlow::Skip
    }

    fn enter_directive_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        directive: &'a DirectiveDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        check_arguments(ctx, &directive.arguments, |argument| {
            format!("@{}({}:)", directive.name, argument)
        });
        VisitFlow::Skip
    }
}
