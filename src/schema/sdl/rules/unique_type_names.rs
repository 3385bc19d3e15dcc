use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};
use hashbrown::HashMap;

/// Validates that no two types in the document are defined with the same name.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Default)]
pub struct UniqueTypeNames;

impl<'a> SdlRule<'a> for UniqueTypeNames {}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueTypeNames {
    fn enter_document(
        &mut self,
        ctx: &mut SdlContext<'a>,
        document: &'a Document<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let mut known_types: HashMap<&'a str, &'a TypeDefinition<'a>> = HashMap::new();
        for definition in document.type_definitions() {
            let name = definition.name();
            if let Some(known) = known_types.get(name) {
                ctx.report_error(
                    format!("There can be only one type named \"{}\".", name),
                    vec![
                        ASTNode::TypeDefinition(known),
                        ASTNode::TypeDefinition(definition),
                    ],
                );
            } else {
                known_types.insert(name, definition);
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
    fn unique_names() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueTypeNames>(
            &ctx,
            "type Foo { a: Int } interface Bar { a: Int } extend type Foo { b: Int }",
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn names_across_kinds() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueTypeNames>(
            &ctx,
            "type Foo { a: Int } scalar Foo input Foo { a: Int }",
        );
        assert_eq!(
            messages,
            vec![
                "There can be only one type named \"Foo\".",
                "There can be only one type named \"Foo\".",
            ]
        );
    }
}
