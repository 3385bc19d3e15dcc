use super::super::{Rule, RuleContext, RuleVisitor, ValidationError};
use super::parent_name;
use crate::config::Configuration;
use crate::{ast::*, visit::*};

/// Validates that all fields of object and interface types, including the fields added by
/// extensions, have a description.
///
/// When `comment_descriptions` is configured a `#` comment block directly above a field counts as
/// its description.
pub struct FieldsHaveDescriptions {
    comment_descriptions: bool,
}

impl FieldsHaveDescriptions {
    pub const RULE: Rule = Rule::Configured {
        name: "FieldsHaveDescriptions",
        create: Self::create,
    };

    fn create<'a>(configuration: &dyn Configuration, _ctx: &RuleContext<'a>) -> RuleVisitor<'a> {
        Box::new(FieldsHaveDescriptions {
            comment_descriptions: configuration.comment_descriptions(),
        })
    }
}

impl<'a> Visitor<'a, RuleContext<'a>> for FieldsHaveDescriptions {
    fn enter_input_object_type_definition(
        &mut self,
        _ctx: &mut RuleContext<'a>,
        _input_object: &'a InputObjectTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_field_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        field: &'a FieldDefinition<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let node = ASTNode::FieldDefinition(field);
        if !has_description(node, ctx.source(), self.comment_descriptions) {
            ctx.report_error(ValidationError::new(
                "fields-have-descriptions",
                format!(
                    "The field `{}.{}` is missing a description.",
                    parent_name(info),
                    field.name
                ),
                vec![node],
            ));
        }
        VisitFlow::Skip
    }
}
