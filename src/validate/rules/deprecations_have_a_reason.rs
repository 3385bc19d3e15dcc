use super::super::{Rule, RuleContext, RuleVisitor, ValidationError};
use super::parent_name;
use crate::{ast::*, visit::*};

/// Validates that every `@deprecated` directive on a field or an enum value passes a `reason`.
pub struct DeprecationsHaveAReason;

impl DeprecationsHaveAReason {
    pub const RULE: Rule = Rule::Unconfigured {
        name: "DeprecationsHaveAReason",
        create: Self::create,
    };

    fn create<'a>(_ctx: &RuleContext<'a>) -> RuleVisitor<'a> {
        Box::new(DeprecationsHaveAReason)
    }
}

#[inline]
fn lacks_deprecation_reason(directives: &Directives) -> bool {
    match directives.get("deprecated") {
        Some(deprecated) => deprecated.arguments.get("reason").is_none(),
        None => false,
    }
}

impl<'a> Visitor<'a, RuleContext<'a>> for DeprecationsHaveAReason {
    fn enter_field_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        field: &'a FieldDefinition<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if lacks_deprecation_reason(&field.directives) {
            ctx.report_error(ValidationError::new(
                "deprecations-have-a-reason",
                format!(
                    "The field `{}.{}` is deprecated but has no deprecation reason.",
                    parent_name(info),
                    field.name
                ),
                vec![ASTNode::FieldDefinition(field)],
            ));
        }
        VisitFlow::Skip
    }

    fn enter_enum_value_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        enum_value: &'a EnumValueDefinition<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if lacks_deprecation_reason(&enum_value.directives) {
            ctx.report_error(ValidationError::new(
                "deprecations-have-a-reason",
                format!(
                    "The enum value `{}.{}` is deprecated but has no deprecation reason.",
                    parent_name(info),
                    enum_value.name
                ),
                vec![ASTNode::EnumValueDefinition(enum_value)],
            ));
        }
        VisitFlow::Skip
    }
}
