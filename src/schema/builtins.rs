use crate::ast::DirectiveLocation;

/// The scalars every schema contains, in the order they're added to a built schema.
pub static BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Returns whether the type name refers to one of the built-in scalars.
#[inline]
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// The default reason of a `@deprecated` directive that's been used without one.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// An argument of a built-in directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinArgument {
    pub name: &'static str,
    pub description: &'static str,
    /// The name of the named type this argument accepts
    pub type_name: &'static str,
    pub non_null: bool,
    pub default_value: Option<&'static str>,
}

impl BuiltinArgument {
    #[inline]
    pub fn is_required(&self) -> bool {
        self.non_null && self.default_value.is_none()
    }
}

/// A directive that's known to every schema without being defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinDirective {
    pub name: &'static str,
    pub description: &'static str,
    pub locations: &'static [DirectiveLocation],
    pub arguments: &'static [BuiltinArgument],
}

const IF_ARGUMENT: [BuiltinArgument; 1] = [BuiltinArgument {
    name: "if",
    description: "Included when true.",
    type_name: "Boolean",
    non_null: true,
    default_value: None,
}];

pub static BUILTIN_DIRECTIVES: [BuiltinDirective; 4] = [
    BuiltinDirective {
        name: "include",
        description: "Directs the executor to include this field or fragment only when the `if` argument is true.",
        locations: &[
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ],
        arguments: &IF_ARGUMENT,
    },
    BuiltinDirective {
        name: "skip",
        description: "Directs the executor to skip this field or fragment when the `if` argument is true.",
        locations: &[
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ],
        arguments: &[BuiltinArgument {
            name: "if",
            description: "Skipped when true.",
            type_name: "Boolean",
            non_null: true,
            default_value: None,
        }],
    },
    BuiltinDirective {
        name: "deprecated",
        description: "Marks an element of a GraphQL schema as no longer supported.",
        locations: &[
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::ArgumentDefinition,
            DirectiveLocation::InputFieldDefinition,
            DirectiveLocation::EnumValue,
        ],
        arguments: &[BuiltinArgument {
            name: "reason",
            description: "Explains why this element was deprecated.",
            type_name: "String",
            non_null: false,
            default_value: Some(DEFAULT_DEPRECATION_REASON),
        }],
    },
    BuiltinDirective {
        name: "specifiedBy",
        description: "Exposes a URL that specifies the behavior of this scalar.",
        locations: &[DirectiveLocation::Scalar],
        arguments: &[BuiltinArgument {
            name: "url",
            description: "The URL that specifies the behavior of this scalar.",
            type_name: "String",
            non_null: true,
            default_value: None,
        }],
    },
];

/// Looks up a built-in directive by name.
pub fn builtin_directive(name: &str) -> Option<&'static BuiltinDirective> {
    BUILTIN_DIRECTIVES
        .iter()
        .find(|directive| directive.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookups() {
        assert!(is_builtin_scalar("ID"));
        assert!(!is_builtin_scalar("Date"));

        let deprecated = builtin_directive("deprecated").unwrap();
        assert!(!deprecated.arguments[0].is_required());
        assert!(deprecated
            .locations
            .contains(&DirectiveLocation::EnumValue));

        let specified_by = builtin_directive("specifiedBy").unwrap();
        assert!(specified_by.arguments[0].is_required());
        assert!(builtin_directive("defer").is_none());
    }
}
