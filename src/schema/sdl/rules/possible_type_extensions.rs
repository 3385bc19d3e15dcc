use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};
use std::mem::discriminant;

/// Validates that type extensions only extend types which are defined and are of the same kind.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Object-Extensions.Type-Validation)
#[derive(Default)]
pub struct PossibleTypeExtensions;

impl<'a> SdlRule<'a> for PossibleTypeExtensions {}

impl<'a> Visitor<'a, SdlContext<'a>> for PossibleTypeExtensions {
    fn enter_type_extension(
        &mut self,
        ctx: &mut SdlContext<'a>,
        extension: &'a TypeExtension<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let name = extension.name();
        match ctx.get_type(name) {
            None => ctx.report_error(
                format!("Cannot extend type \"{}\" because it is not defined.", name),
                vec![ASTNode::TypeExtension(extension)],
            ),
            Some(definition)
                if discriminant(definition) != discriminant(&extension.definition) =>
            {
                ctx.report_error(
                    format!(
                        "Cannot extend non-{} type \"{}\".",
                        extension.definition.kind_name(),
                        name
                    ),
                    vec![
                        ASTNode::TypeDefinition(definition),
                        ASTNode::TypeExtension(extension),
                    ],
                )
            }
            Some(_) => {}
        }
        VisitFlow::Skip
    }
}
