use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that every type that's referenced in the document is either defined in it or is a
/// built-in scalar.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Default)]
pub struct KnownTypeNames;

impl<'a> SdlRule<'a> for KnownTypeNames {}

impl<'a> Visitor<'a, SdlContext<'a>> for KnownTypeNames {
    fn enter_named_type(
        &mut self,
        ctx: &mut SdlContext<'a>,
        named_type: &'a NamedType<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if !ctx.is_known_type(named_type.name) {
            ctx.report_error(
                format!("Unknown type \"{}\".", named_type.name),
                vec![ASTNode::NamedType(named_type)],
            );
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::tests::messages_of;
    use super::*;
    use indoc::indoc;

    #[test]
    fn known_types() {
        let ctx = ASTContext::new();
        let messages = messages_of::<KnownTypeNames>(
            &ctx,
            indoc! {"
                schema { query: Query }
                type Query implements Node { id: ID! list(filter: Filter): [Result] }
                interface Node { id: ID! }
                union Result = Query
                input Filter { on: Boolean }
            "},
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn unknown_types() {
        let ctx = ASTContext::new();
        let messages = messages_of::<KnownTypeNames>(
            &ctx,
            indoc! {"
                schema { query: Root }
                type Query implements Node { list(filter: Filter): [Result!]! }
                union Result = Query | Other
                directive @d(arg: Arg) on FIELD
            "},
        );
        assert_eq!(
            messages,
            vec![
                "Unknown type \"Root\".",
                "Unknown type \"Node\".",
                "Unknown type \"Filter\".",
                "Unknown type \"Other\".",
                "Unknown type \"Arg\".",
            ]
        );
    }
}
