//! # Lint Configuration
//!
//! The [Configuration] trait is what lint rules and the schema build read their options from,
//! while [`LintConfiguration`] is the concrete configuration that selects which rules are run.
//! With the `json` feature enabled it may be loaded from a JSON document:
//!
//! ```
//! # #[cfg(feature = "json")]
//! # {
//! use graphql_schema_linter::config::LintConfiguration;
//!
//! let configuration = LintConfiguration::from_json(
//!     r#"{ "commentDescriptions": true, "rules": ["TypesAreCapitalized"] }"#,
//! ).unwrap();
//!
//! assert!(configuration.comment_descriptions);
//! assert_eq!(configuration.rules().unwrap()[0].name(), "TypesAreCapitalized");
//! # }
//! ```

use crate::error::{Error, Result};
use crate::validate::{default_rules, rule_by_name, Rule};

#[cfg(feature = "json")]
use serde::Deserialize;

/// Options that are read while a schema definition is linted.
pub trait Configuration {
    /// Whether `#` comment blocks directly above a definition count as its description.
    fn comment_descriptions(&self) -> bool;
}

/// The configuration of a lint run.
///
/// `rules` names the rules that are run, either in PascalCase or in kebab-case. When it's empty
/// the [default rules](default_rules) are run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase", default))]
pub struct LintConfiguration {
    pub comment_descriptions: bool,
    pub rules: Vec<String>,
}

impl Configuration for LintConfiguration {
    #[inline]
    fn comment_descriptions(&self) -> bool {
        self.comment_descriptions
    }
}

impl LintConfiguration {
    /// Resolves the rules that this configuration selects.
    pub fn rules(&self) -> Result<Vec<Rule>> {
        if self.rules.is_empty() {
            return Ok(default_rules());
        }
        self.rules
            .iter()
            .map(|name| {
                rule_by_name(name)
                    .ok_or_else(|| Error::new(format!("Unknown rule \"{}\".", name), None))
            })
            .collect()
    }

    /// Parses a configuration from a JSON document with the `commentDescriptions` and `rules`
    /// keys, which may both be omitted.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str(json) {
            Ok(configuration) => Ok(configuration),
            Err(error) => {
                let message = format!("Invalid configuration: {}", error);
                Err(Error::new(message, None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration() {
        let configuration = LintConfiguration::default();
        assert!(!configuration.comment_descriptions());
        let rules = configuration.rules().unwrap();
        let names: Vec<&str> = rules.iter().map(Rule::name).collect();
        assert_eq!(names.len(), 4);
        assert!(!names.contains(&"InputObjectValuesHaveDescriptions"));
    }

    #[test]
    fn selected_rules() {
        let configuration = LintConfiguration {
            comment_descriptions: false,
            rules: vec![
                "input-object-values-have-descriptions".to_string(),
                "TypesAreCapitalized".to_string(),
            ],
        };
        let rules = configuration.rules().unwrap();
        let names: Vec<&str> = rules.iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec!["InputObjectValuesHaveDescriptions", "TypesAreCapitalized"]
        );

        let configuration = LintConfiguration {
            comment_descriptions: false,
            rules: vec!["Unknown".to_string()],
        };
        let error = configuration.rules().unwrap_err();
        assert_eq!(error.message(), "Unknown rule \"Unknown\".");
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_configuration() {
        let configuration = LintConfiguration::from_json("{}").unwrap();
        assert_eq!(configuration, LintConfiguration::default());

        let configuration =
            LintConfiguration::from_json(r#"{ "rules": ["fields-have-descriptions"] }"#).unwrap();
        assert_eq!(configuration.rules, vec!["fields-have-descriptions"]);
        assert!(!configuration.comment_descriptions);

        let error = LintConfiguration::from_json(r#"{ "rules": 1 }"#).unwrap_err();
        assert!(error.message().starts_with("Invalid configuration"));
    }
}
