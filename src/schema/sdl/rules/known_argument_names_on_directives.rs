use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that only arguments which a directive defines are passed to it.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Names)
#[derive(Default)]
pub struct KnownArgumentNamesOnDirectives;

impl<'a> SdlRule<'a> for KnownArgumentNamesOnDirectives {}

impl<'a> Visitor<'a, SdlContext<'a>> for KnownArgumentNamesOnDirectives {
    fn enter_directive(
        &mut self,
        ctx: &mut SdlContext<'a>,
        directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(known) = ctx.get_directive(directive.name) {
            for argument in directive.arguments.children.iter() {
                if !known.has_argument(argument.name) {
                    ctx.report_error(
                        format!(
                            "Unknown argument \"{}\" on directive \"@{}\".",
                            argument.name, directive.name
                        ),
                        vec![ASTNode::Argument(argument)],
                    );
                }
            }
        }
        VisitFlow::Skip
    }
}
