use super::super::{Rule, RuleContext, RuleVisitor, ValidationError};
use super::parent_name;
use crate::{ast::*, visit::*};

/// Validates that all fields of input object definitions have a description.
///
/// This rule isn't part of the [default rules](super::super::default_rules) and must be selected
/// explicitly. Only description strings count, `#` comments are never used as descriptions here.
pub struct InputObjectValuesHaveDescriptions;

impl InputObjectValuesHaveDescriptions {
    pub const RULE: Rule = Rule::Unconfigured {
        name: "InputObjectValuesHaveDescriptions",
        create: Self::create,
    };

    fn create<'a>(_ctx: &RuleContext<'a>) -> RuleVisitor<'a> {
        Box::new(InputObjectValuesHaveDescriptions)
    }
}

impl<'a> Visitor<'a, RuleContext<'a>> for InputObjectValuesHaveDescriptions {
    fn enter_field_definition(
        &mut self,
        _ctx: &mut RuleContext<'a>,
        _field: &'a FieldDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_input_value_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        input_value: &'a InputValueDefinition<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let is_input_field = matches!(
            info.parent(),
            Some(ASTNode::TypeDefinition(TypeDefinition::InputObject(_)))
        );
        let node = ASTNode::InputValueDefinition(input_value);
        if is_input_field && !has_description(node, ctx.source(), false) {
            ctx.report_error(ValidationError::new(
                "input-object-values-have-descriptions",
                format!(
                    "The input value `{}.{}` is missing a description.",
                    parent_name(info),
                    input_value.name
                ),
                vec![node],
            ));
        }
        VisitFlow::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::tests::lint;
    use super::*;
    use indoc::indoc;

    #[test]
    fn input_values() {
        let errors = lint(
            &[InputObjectValuesHaveDescriptions::RULE],
            indoc! {r#"
                type Query { search(filter: Filter, term: String): Int }
                input Filter {
                  "Described" described: Int
                  # A comment
                  undescribed: Int
                }
                extend input Filter { extended: Int }
                directive @d(arg: Int) on FIELD
            "#},
            false,
        );
        assert_eq!(
            errors,
            vec!["5:3 The input value `Filter.undescribed` is missing a description.  input-object-values-have-descriptions"]
        );

        let errors = lint(
            &[InputObjectValuesHaveDescriptions::RULE],
            "input Filter {\n  # Commented\n  a: Int\n}",
            true,
        );
        assert_eq!(errors.len(), 1);
    }
}
