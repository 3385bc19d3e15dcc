use super::context::RuleContext;
use super::rules::*;
use crate::config::Configuration;
use crate::visit::Visitor;
use std::fmt;

/// A boxed visitor that's been created by a [Rule] for one run of the lint rules.
pub type RuleVisitor<'a> = Box<dyn Visitor<'a, RuleContext<'a>> + 'a>;

/// A lint rule, which creates a visitor that reports errors into a [`RuleContext`].
///
/// Whether a rule reads the [Configuration] is decided when it's defined. `Unconfigured` rules
/// only receive the context, while `Configured` rules also receive the configuration, which they
/// may read while creating their visitor. Either way, [`Rule::bind`] turns a rule into a
/// [`BoundRule`] with a single calling convention.
///
/// Rules don't carry any state and a new visitor is created for every run.
#[derive(Clone, Copy)]
pub enum Rule {
    Unconfigured {
        name: &'static str,
        create: for<'a> fn(&RuleContext<'a>) -> RuleVisitor<'a>,
    },
    Configured {
        name: &'static str,
        create: for<'a> fn(&dyn Configuration, &RuleContext<'a>) -> RuleVisitor<'a>,
    },
}

impl Rule {
    /// Returns the rule's name, e.g. `FieldsHaveDescriptions`.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Unconfigured { name, .. } | Rule::Configured { name, .. } => *name,
        }
    }

    /// Returns the rule's name in kebab-case, e.g. `fields-have-descriptions`, which is also the
    /// kind of the errors it reports.
    pub fn kind(&self) -> String {
        kebab_case(self.name())
    }

    /// Binds the rule to a configuration.
    #[inline]
    pub fn bind<'c>(self, configuration: &'c dyn Configuration) -> BoundRule<'c> {
        BoundRule {
            rule: self,
            configuration,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Unconfigured { name, .. } => write!(f, "Rule::Unconfigured({})", name),
            Rule::Configured { name, .. } => write!(f, "Rule::Configured({})", name),
        }
    }
}

/// A [Rule] that's been bound to a configuration and only needs a context to create its visitor.
#[derive(Clone, Copy)]
pub struct BoundRule<'c> {
    rule: Rule,
    configuration: &'c dyn Configuration,
}

impl<'c> BoundRule<'c> {
    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Creates the rule's visitor for a single run.
    pub fn create<'a>(&self, context: &RuleContext<'a>) -> RuleVisitor<'a> {
        match self.rule {
            Rule::Unconfigured { create, .. } => create(context),
            Rule::Configured { create, .. } => create(self.configuration, context),
        }
    }
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (index, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if index > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Returns the rules that are run when none have been selected, in order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        FieldsHaveDescriptions::RULE,
        DeprecationsHaveAReason::RULE,
        TypesHaveDescriptions::RULE,
        TypesAreCapitalized::RULE,
    ]
}

/// Returns every rule that's available, including the ones that must be selected explicitly.
pub fn all_rules() -> Vec<Rule> {
    let mut rules = default_rules();
    rules.push(InputObjectValuesHaveDescriptions::RULE);
    rules
}

/// Looks up a rule by its name, either in PascalCase (`TypesAreCapitalized`) or in kebab-case
/// (`types-are-capitalized`).
pub fn rule_by_name(name: &str) -> Option<Rule> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name() == name || rule.kind() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry() {
        let names: Vec<&str> = default_rules().iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                "FieldsHaveDescriptions",
                "DeprecationsHaveAReason",
                "TypesHaveDescriptions",
                "TypesAreCapitalized",
            ]
        );
        assert_eq!(all_rules().len(), 5);
        assert!(matches!(
            default_rules()[0],
            Rule::Configured {
                name: "FieldsHaveDescriptions",
                ..
            }
        ));
        assert!(matches!(
            default_rules()[1],
            Rule::Unconfigured { .. }
        ));
    }

    #[test]
    fn lookup_by_name() {
        let rule = rule_by_name("input-object-values-have-descriptions").unwrap();
        assert_eq!(rule.name(), "InputObjectValuesHaveDescriptions");
        let rule = rule_by_name("TypesAreCapitalized").unwrap();
        assert_eq!(rule.kind(), "types-are-capitalized");
        assert!(rule_by_name("types_are_capitalized").is_none());
        assert!(rule_by_name("NoSuchRule").is_none());
    }
}
