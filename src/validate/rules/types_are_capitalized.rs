use super::super::{Rule, RuleContext, RuleVisitor, ValidationError};
use super::type_definition_nodes;
use crate::{ast::*, visit::*};

/// Validates that the names of object and interface types start with a capital letter.
pub struct TypesAreCapitalized;

impl TypesAreCapitalized {
    pub const RULE: Rule = Rule::Unconfigured {
        name: "TypesAreCapitalized",
        create: Self::create,
    };

    fn create<'a>(_ctx: &RuleContext<'a>) -> RuleVisitor<'a> {
        Box::new(TypesAreCapitalized)
    }

    fn check(ctx: &mut RuleContext, kind_name: &str, name: &str) -> VisitFlow {
        if name.chars().next().map_or(false, char::is_lowercase) {
            let nodes = type_definition_nodes(ctx, name);
            ctx.report_error(ValidationError::new(
                "types-are-capitalized",
                format!(
                    "The {} type `{}` should start with a capital letter.",
                    kind_name, name
                ),
                nodes,
            ));
        }
        VisitFlow::Skip
    }
}

impl<'a> Visitor<'a, RuleContext<'a>> for TypesAreCapitalized {
    fn enter_object_type_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        object: &'a ObjectTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        Self::check(ctx, "object", object.name)
    }

    fn enter_interface_type_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        interface: &'a InterfaceTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        Self::check(ctx, "interface", interface.name)
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::tests::lint;
    use super::*;
    use indoc::indoc;

    #[test]
    fn capitalized_types() {
        let errors = lint(
            &[TypesAreCapitalized::RULE],
            indoc! {"
                type Query { a: Int }
                interface _Node { id: ID! }
                enum color { RED }
                input filter { a: Int }
            "},
            false,
        );
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn lowercase_types() {
        let errors = lint(
            &[TypesAreCapitalized::RULE],
            indoc! {"
                type query { a: Int }
                interface node { id: ID! }
            "},
            false,
        );
        assert_eq!(
            errors,
            vec![
                "1:1 The object type `query` should start with a capital letter.  types-are-capitalized",
                "2:1 The interface type `node` should start with a capital letter.  types-are-capitalized",
            ]
        );
    }
}
