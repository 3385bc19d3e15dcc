//! # Linting Schema Definitions
//!
//! This module contains the lint rules and the logic that runs them on a schema definition
//! document. [`validate_schema_definition`] first makes sure that the document describes a valid
//! schema, and only then runs the selected lint rules on it. All errors are returned as
//! [`ValidationError`]s sorted by the line they were found on.
//!
//! The rules this module comes with are:
//!
//! - [`rules::FieldsHaveDescriptions`]: checks that all fields of object and interface types have descriptions
//! - [`rules::DeprecationsHaveAReason`]: checks that every `@deprecated` field and enum value passes a reason
//! - [`rules::TypesHaveDescriptions`]: checks that all type definitions have descriptions
//! - [`rules::TypesAreCapitalized`]: checks that object and interface type names are capitalized
//! - [`rules::InputObjectValuesHaveDescriptions`]: checks that all input object fields have descriptions
//!
//! The first four rules are returned by [`default_rules`], while the last one must be selected
//! explicitly, for instance using [`rule_by_name`].
//!
//! A [Rule] creates a [Visitor](crate::visit::Visitor) that accepts the [`RuleContext`], which
//! holds the document, the schema built from it and the list of reported errors. Rules that
//! depend on the [`Configuration`](crate::config::Configuration) are defined as
//! [`Rule::Configured`] and receive it through [`Rule::bind`].
//!
//! ```
//! use graphql_schema_linter::{ast::*, config::LintConfiguration, validate::*};
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "type foo { bar: String }").unwrap();
//! let configuration = LintConfiguration::default();
//!
//! let rules = [TypesAreCapitalized::RULE];
//! let errors = validate_schema_definition(&ctx, document, &rules, &configuration).unwrap();
//! assert_eq!(errors[0].message, "The object type `foo` should start with a capital letter.");
//! ```

#[allow(clippy::module_inception)]
mod validate;

mod context;
mod rule;
mod validation_error;

pub mod rules;
pub use context::RuleContext;
pub use rule::*;
pub use rules::*;
pub use validate::*;
pub use validation_error::*;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ast::*;
    use crate::config::LintConfiguration;

    /// Runs rules on the source text and returns the printed errors.
    pub(crate) fn lint(rules: &[Rule], source: &str, comment_descriptions: bool) -> Vec<String> {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, source).unwrap();
        let configuration = LintConfiguration {
            comment_descriptions,
            ..LintConfiguration::default()
        };
        let errors = validate_schema_definition(&ctx, document, rules, &configuration).unwrap();
        errors.iter().map(ToString::to_string).collect()
    }
}
