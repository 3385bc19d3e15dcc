use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};
use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// Validates that no two directives in the document are defined with the same name.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives.Validation)
pub struct UniqueDirectiveNames<'a> {
    known_directives: HashMap<&'a str, &'a DirectiveDefinition<'a>, DefaultHashBuilder, &'a Bump>,
}

impl<'a> DefaultIn<'a> for UniqueDirectiveNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        UniqueDirectiveNames {
            known_directives: HashMap::new_in(arena),
        }
    }
}

impl<'a> SdlRule<'a> for UniqueDirectiveNames<'a> {}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueDirectiveNames<'a> {
    fn enter_directive_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        directive: &'a DirectiveDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(known) = self.known_directives.get(directive.name) {
            ctx.report_error(
                format!(
                    "There can be only one directive named \"@{}\".",
                    directive.name
                ),
                vec![
                    ASTNode::DirectiveDefinition(known),
                    ASTNode::DirectiveDefinition(directive),
                ],
            );
        } else {
            self.known_directives.insert(directive.name, directive);
        }
        VisitFlow::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::tests::messages_of;
    use super::*;

    #[test]
    fn unique_directives() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueDirectiveNames>(
            &ctx,
            "directive @a on FIELD directive @b on FIELD",
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn duplicate_directives() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueDirectiveNames>(
            &ctx,
            "directive @a on FIELD directive @a on OBJECT",
        );
        assert_eq!(
            messages,
            vec!["There can be only one directive named \"@a\"."]
        );
    }
}
