use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};
use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// Validates that the values of every enum type are only defined once, across the enum's
/// definition and all of its extensions.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums.Type-Validation)
pub struct UniqueEnumValueNames<'a> {
    known_values:
        HashMap<(&'a str, &'a str), &'a EnumValueDefinition<'a>, DefaultHashBuilder, &'a Bump>,
}

impl<'a> DefaultIn<'a> for UniqueEnumValueNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        UniqueEnumValueNames {
            known_values: HashMap::new_in(arena),
        }
    }
}

impl<'a> SdlRule<'a> for UniqueEnumValueNames<'a> {}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueEnumValueNames<'a> {
    fn enter_enum_value_definition(
        &mut self,
        ctx: &mut SdlContext<'a>,
        value: &'a EnumValueDefinition<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let type_name = match info.parent().and_then(|parent| parent.name()) {
            Some(type_name) => type_name,
            None => return VisitFlow::Skip,
        };
        if let Some(known) = self.known_values.get(&(type_name, value.name)) {
            ctx.report_error(
                format!(
                    "Enum value \"{}.{}\" can only be defined once.",
                    type_name, value.name
                ),
                vec![
                    ASTNode::EnumValueDefinition(known),
                    ASTNode::EnumValueDefinition(value),
                ],
            );
        } else {
            self.known_values.insert((type_name, value.name), value);
        }
        VisitFlow::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::tests::messages_of;
    use super::*;

    #[test]
    fn unique_values() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueEnumValueNames>(
            &ctx,
            "enum Color { RED GREEN } enum Light { RED } extend enum Color { BLUE }",
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn duplicate_values() {
        let ctx = ASTContext::new();
        let messages = messages_of::<UniqueEnumValueNames>(
            &ctx,
            "enum Color { RED RED } extend enum Color { GREEN RED }",
        );
        assert_eq!(
            messages,
            vec![
                "Enum value \"Color.RED\" can only be defined once.",
                "Enum value \"Color.RED\" can only be defined once.",
            ]
        );
    }
}
