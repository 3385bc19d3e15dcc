use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};

/// Validates that the object values which are passed to directives or used as default values
/// don't contain any field twice.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Field-Uniqueness)
#[derive(Default)]
pub struct UniqueInputFieldNames;

impl<'a> SdlRule<'a> for UniqueInputFieldNames {}

fn check_value<'a>(ctx: &mut SdlContext<'a>, value: &'a Value<'a>) {
    match value {
        Value::List(list) => {
            for item in list.children.iter() {
                check_value(ctx, item);
            }
        }
        Value::Object(object) => {
            for (index, field) in object.children.iter().enumerate() {
                let known = object.children[..index]
                    .iter()
                    .find(|other| other.name == field.name);
                if let Some(known) = known {
                    ctx.report_error(
                        format!(
                            "There can be only one input field named \"{}\".",
                            field.name
                        ),
                        vec![ASTNode::ObjectField(known), ASTNode::ObjectField(field)],
                    );
                }
                check_value(ctx, &field.value);
            }
        }
        _ => {}
    }
}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueInputFieldNames {
    fn enter_argument(
        &mut self,
        ctx: &mut SdlContext<'a>,
        argument: &'a Argument<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        check_value(ctx, &argument.value);
        VisitFlow::Skip
    }

    fn enter_input_value_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        input_value: &'a InputValueDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        if let Some(default_value) = &input_value.default_value {
            check_value(ctx, default_value);
        }
        VisitFlow::Next
    }
}
