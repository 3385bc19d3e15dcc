use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that a document contains at most one schema definition.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Default)]
pub struct LoneSchemaDefinition {
    schema_definitions: usize,
}

impl<'a> SdlRule<'a> for LoneSchemaDefinition {}

impl<'a> Visitor<'a, SdlContext<'a>> for LoneSchemaDefinition {
    fn enter_schema_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        schema: &'a SchemaDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if self.schema_definitions > 0 {
            ctx.report_error(
                "Must provide only one schema definition.",
                vec![ASTNode::SchemaDefinition(schema)],
            );
        }
        self.schema_definitions += 1;
        VisitFlow::Skip
    }
}
