use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that all arguments of a directive which are non-null and have no default value are
/// passed when the directive is applied.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Required-Arguments)
#[derive(Default)]
pub struct ProvidedRequiredArgumentsOnDirectives;

impl<'a> SdlRule<'a> for ProvidedRequiredArgumentsOnDirectives {}

impl<'a> Visitor<'a, SdlContext<'a>> for ProvidedRequiredArgumentsOnDirectives {
    fn enter_directive(
        &mut self,
        ctx: &mut SdlContext<'a>,
        directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(known) = ctx.get_directive(directive.name) {
            for (name, type_name) in known.required_arguments() {
                if directive.arguments.get(name).is_none() {
                    ctx.report_error(
                        format!(
                            "Directive \"@{}\" argument \"{}\" of type \"{}\" is required, but it was not provided.",
                            directive.name, name, type_name
                        ),
                        vec![ASTNode::Directive(directive)],
                    );
                }
            }
        }
        VisitFlow::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::tests::messages_of;
    use super::*;

    #[test]
    fn provided_arguments() {
        let ctx = ASTContext::new();
        let messages = messages_of::<ProvidedRequiredArgumentsOnDirectives>(
            &ctx,
            "directive @d(a: Int!, b: Int! = 1, c: Int) on SCALAR scalar Url @d(a: 1) @specifiedBy(url: \"\")",
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn missing_arguments() {
        let ctx = ASTContext::new();
        let messages = messages_of::<ProvidedRequiredArgumentsOnDirectives>(
            &ctx,
            "directive @d(a: [Int]!, b: Int! = 1) on SCALAR scalar Url @d(b: 2) @specifiedBy",
        );
        assert_eq!(
            messages,
            vec![
                "Directive \"@d\" argument \"a\" of type \"[Int]!\" is required, but it was not provided.",
                "Directive \"@specifiedBy\" argument \"url\" of type \"String!\" is required, but it was not provided.",
            ]
        );
    }
}
