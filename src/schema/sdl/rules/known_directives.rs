use super::super::{directive_location, SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that every applied directive is known and may be applied at the location it's been
/// used at.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Directives-Are-Defined)
#[derive(Default)]
pub struct KnownDirectives;

impl<'a> SdlRule<'a> for KnownDirectives {}

impl<'a> Visitor<'a, SdlContext<'a>> for KnownDirectives {
    fn enter_directive(
        &mut self,
        ctx: &mut SdlContext<'a>,
        directive: &'a Directive<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        match ctx.get_directive(directive.name) {
            None => ctx.report_error(
                format!("Unknown directive \"@{}\".", directive.name),
                vec![ASTNode::Directive(directive)],
            ),
            Some(known) => {
                if let Some(location) = directive_location(info) {
                    if !known.has_location(location) {
                        ctx.report_error(
                            format!(
                                "Directive \"@{}\" may not be used on {}.",
                                directive.name, location
                            ),
                            vec![ASTNode::Directive(directive)],
                        );
                    }
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
    use indoc::indoc;

    #[test]
    fn known_directives_at_valid_locations() {
        let ctx = ASTContext::new();
        let messages = messages_of::<KnownDirectives>(
            &ctx,
            indoc! {r#"
                directive @onSchema on SCHEMA
                directive @onType on OBJECT | INPUT_OBJECT
                directive @onInput on INPUT_FIELD_DEFINITION | ARGUMENT_DEFINITION

                schema @onSchema { query: Query }
                type Query @onType {
                  old(arg: Int @onInput @deprecated): Int @deprecated(reason: "Old")
                }
                input Filter @onType { on: Boolean @onInput @deprecated }
                extend input Filter @onType { off: Boolean @onInput }
                enum Color { RED @deprecated }
                scalar Url @specifiedBy(url: "https://example.com")
            "#},
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn unknown_and_misplaced_directives() {
        let ctx = ASTContext::new();
        let messages = messages_of::<KnownDirectives>(
            &ctx,
            indoc! {"
                directive @onField on FIELD_DEFINITION
                type Query @onField @unknown {
                  a: Int @include(if: true)
                }
                extend schema @onField
                enum Color { RED @onField }
            "},
        );
        assert_eq!(
            messages,
            vec![
                "Directive \"@onField\" may not be used on OBJECT.",
                "Unknown directive \"@unknown\".",
                "Directive \"@include\" may not be used on FIELD_DEFINITION.",
                "Directive \"@onField\" may not be used on SCHEMA.",
                "Directive \"@onField\" may not be used on ENUM_VALUE.",
            ]
        );
    }
}
