use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that every operation kind is assigned a root type only once across the schema
/// definition and all of its extensions.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Root-Operation-Types)
#[derive(Default)]
pub struct UniqueOperationTypes<'a> {
    defined: [Option<&'a OperationTypeDefinition<'a>>; 3],
}

impl<'a> SdlRule<'a> for UniqueOperationTypes<'a> {}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueOperationTypes<'a> {
    fn enter_operation_type_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        operation_type: &'a OperationTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let index = match operation_type.operation {
            OperationKind::Query => 0,
            OperationKind::Mutation => 1,
            OperationKind::Subscription => 2,
        };
        match self.defined[index] {
            Some(known) => ctx.report_error(
                format!(
                    "There can be only one {} type in schema.",
                    operation_type.operation
                ),
                vec![
                    ASTNode::OperationTypeDefinition(known),
                    ASTNode::OperationTypeDefinition(operation_type),
                ],
            ),
            None => self.defined[index] = Some(operation_type),
        }
        VisitFlow::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::tests::messages_of;
    use super::*;

    #[test]
    fn distinct_operation_types() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueOperationTypes>(
            &ctx,
            "schema { query: Query } extend schema { mutation: Mutation subscription: Sub }",
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn duplicate_operation_types() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueOperationTypes>(
            &ctx,
            "schema { query: Query query: Root } extend schema { query: Other }",
        );
        assert_eq!(
            messages,
            vec![
                "There can be only one query type in schema.",
                "There can be only one query type in schema.",
            ]
        );
    }
}
