use super::super::{Rule, RuleContext, RuleVisitor, ValidationError};
use super::type_definition_nodes;
use crate::config::Configuration;
use crate::{ast::*, visit::*};

/// Validates that all type definitions have a description. Type extensions aren't checked.
///
/// When `comment_descriptions` is configured a `#` comment block directly above a type counts as
/// its description.
pub struct TypesHaveDescriptions {
    comment_descriptions: bool,
}

impl TypesHaveDescriptions {
    pub const RULE: Rule = Rule::Configured {
        name: "TypesHaveDescriptions",
        create: Self::create,
    };

    fn create<'a>(configuration: &dyn Configuration, _ctx: &RuleContext<'a>) -> RuleVisitor<'a> {
        Box::new(TypesHaveDescriptions {
            comment_descriptions: configuration.comment_descriptions(),
        })
    }

    fn check<'a>(&self, ctx: &mut RuleContext<'a>, kind_name: &str, name: &str) -> VisitFlow {
        let nodes = type_definition_nodes(ctx, name);
        let described = match nodes.first() {
            Some(node) => has_description(*node, ctx.source(), self.comment_descriptions),
            None => false,
        };
        if !described {
            ctx.report_error(ValidationError::new(
                "types-have-descriptions",
                format!(
                    "The {} type `{}` is missing a description.",
                    kind_name, name
                ),
                nodes,
            ));
        }
        VisitFlow::Skip
    }
}

impl<'a> Visitor<'a, RuleContext<'a>> for TypesHaveDescriptions {
    fn enter_scalar_type_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        scalar: &'a ScalarTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.check(ctx, "scalar", scalar.name)
    }

    fn enter_object_type_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        object: &'a ObjectTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.check(ctx, "object", object.name)
    }

    fn enter_interface_type_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        interface: &'a InterfaceTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.check(ctx, "interface", interface.name)
    }

    fn enter_union_type_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        union_type: &'a UnionTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.check(ctx, "union", union_type.name)
    }

    fn enter_enum_type_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        enum_type: &'a EnumTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.check(ctx, "enum", enum_type.name)
    }

    fn enter_input_object_type_definition(
        &mut self,
        ctx: &mut RuleContext<'a>,
        input_object: &'a InputObjectTypeDefinition<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        self.check(ctx, "input object", input_object.name)
    }

    fn enter_type_extension(
        &mut self,
        _ctx: &mut RuleContext<'a>,
        _extension: &'a TypeExtension<'a>,
        _info: &VisitInfo<'a>,
    ) -> VisitFlow {
        VisitFlow::Skip
    }
}
