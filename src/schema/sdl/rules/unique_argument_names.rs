use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that every argument is passed at most once to each applied directive.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Uniqueness)
#[derive(Default)]
pub struct UniqueArgumentNames;

impl<'a> SdlRule<'a> for UniqueArgumentNames {}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueArgumentNames {
    fn enter_directive(
        &mut self,
        ctx: &mut SdlContext<'a>,
        directive: &'a Directive<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let arguments = &directive.arguments.children;
        for (index, argument) in arguments.iter().enumerate() {
            if arguments[..index]
                .iter()
                .any(|other| other.name == argument.name)
            {
                continue;
            }
            let duplicates: Vec<ASTNode<'a>> = arguments[index..]
                .iter()
                .filter(|other| other.name == argument.name)
                .map(ASTNode::Argument)
                .collect();
            if duplicates.len() > 1 {
                ctx.report_error(
                    format!(
                        "There can be only one argument named \"{}\".",
                        argument.name
                    ),
                    duplicates,
                );
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
    fn unique_arguments() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueArgumentNames>(
            &ctx,
            "type Query { a: Int @deprecated(reason: \"a\") b: Int @deprecated(reason: \"b\") }",
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn duplicate_arguments() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueArgumentNames>(
            &ctx,
            "type Query { a: Int @deprecated(reason: \"a\", reason: \"b\", reason: \"c\") }",
        );
        assert_eq!(
            messages,
            vec!["There can be only one argument named \"reason\"."]
        );
    }
}
