use super::context::RuleContext;
use super::rule::{BoundRule, Rule};
use super::validation_error::ValidationError;
use crate::ast::{ASTContext, Document, ParseNode};
use crate::config::{Configuration, LintConfiguration};
use crate::error::Result;
use crate::schema::{build_ast_schema, validate_schema, validate_sdl, BuildOptions, Schema};
use crate::visit::{ParallelVisitor, VisitNode};
use tracing::debug;

/// Runs bound rules on a document and its schema and returns the errors they've reported in the
/// order they were reported in.
///
/// All rules are run in a single traversal of the document using a [`ParallelVisitor`] and share
/// one [`RuleContext`].
pub fn validate<'a>(
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
    rules: &[BoundRule],
) -> Vec<ValidationError<'a>> {
    let mut context = RuleContext::new(document, schema);
    let visitors = rules.iter().map(|rule| rule.create(&context)).collect();
    let mut visitor = ParallelVisitor::new(visitors);
    document.visit(&mut context, &mut visitor);
    context.errors
}

/// Orders errors by the line of their first location.
///
/// The sort is stable and doesn't consider columns, so errors on the same line stay in the order
/// they've been reported in.
fn sort_errors(mut errors: Vec<ValidationError>) -> Vec<ValidationError> {
    errors.sort_by_key(ValidationError::line);
    errors
}

fn invalid_schema_errors<'a>(
    errors: Vec<crate::error::GraphQLError<'a>>,
    document: &'a Document<'a>,
) -> Vec<ValidationError<'a>> {
    let errors = errors
        .into_iter()
        .map(|error| ValidationError::invalid_schema(error, document))
        .collect();
    sort_errors(errors)
}

/// Lints a parsed schema definition document and returns all errors sorted by line.
///
/// The document is first checked for structural mistakes, then built into a schema which is
/// validated as well. If either check fails its errors are returned as
/// [`INVALID_GRAPHQL_SCHEMA`](super::INVALID_GRAPHQL_SCHEMA) errors and no rule is run. Otherwise
/// every rule is bound to the configuration and all of them are run in a single traversal.
///
/// An `Err` is only returned when the schema unexpectedly can't be built from a document that has
/// passed the structural checks.
pub fn validate_schema_definition<'a>(
    ctx: &'a ASTContext,
    document: &'a Document<'a>,
    rules: &[Rule],
    configuration: &dyn Configuration,
) -> Result<Vec<ValidationError<'a>>> {
    let sdl_errors = validate_sdl(ctx, document);
    if !sdl_errors.is_empty() {
        debug!(
            errors = sdl_errors.len(),
            "schema definition failed structural validation"
        );
        return Ok(invalid_schema_errors(sdl_errors, document));
    }

    let options = BuildOptions {
        comment_descriptions: configuration.comment_descriptions(),
        assume_valid_sdl: true,
        assume_valid: true,
    };
    let schema = build_ast_schema(ctx, document, options)?;

    let schema_errors = validate_schema(schema);
    if !schema_errors.is_empty() {
        debug!(errors = schema_errors.len(), "schema failed validation");
        return Ok(invalid_schema_errors(schema_errors, document));
    }

    let bound_rules: Vec<BoundRule> = rules.iter().map(|rule| rule.bind(configuration)).collect();
    let errors = validate(schema, document, &bound_rules);
    debug!(
        rules = bound_rules.len(),
        errors = errors.len(),
        "ran lint rules"
    );
    Ok(sort_errors(errors))
}

/// Parses a schema definition from source text and lints it with the rules selected by the
/// configuration.
///
/// Fails when the configuration names an unknown rule or when the source text can't be parsed.
///
/// ```
/// use graphql_schema_linter::{ast::ASTContext, config::LintConfiguration, validate::*};
///
/// let ctx = ASTContext::new();
/// let configuration = LintConfiguration::default();
/// let errors = lint_schema(&ctx, "type Query { a: Int }", &configuration).unwrap();
///
/// assert_eq!(errors[0].kind, "types-have-descriptions");
/// assert_eq!(errors[1].kind, "fields-have-descriptions");
/// ```
pub fn lint_schema<'a>(
    ctx: &'a ASTContext,
    source: &str,
    configuration: &LintConfiguration,
) -> Result<Vec<ValidationError<'a>>> {
    let rules = configuration.rules()?;
    let document = Document::parse(ctx, source)?;
    validate_schema_definition(ctx, document, &rules, configuration)
}

#[cfg(test)]
mod tests {
    use super::super::*;
    use super::*;
    use crate::ast::*;
    use crate::error::ErrorType;
    use crate::visit::*;
    use indoc::indoc;

    struct AlwaysReports;

    impl<'a> Visitor<'a, RuleContext<'a>> for AlwaysReports {
        fn enter_document(
            &mut self,
            ctx: &mut RuleContext<'a>,
            _document: &'a Document<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            ctx.report_error(ValidationError::new("always-reports", "Reported.", vec![]));
            VisitFlow::Break
        }
    }

    fn always_reports<'a>(_ctx: &RuleContext<'a>) -> RuleVisitor<'a> {
        Box::new(AlwaysReports)
    }

    const ALWAYS_REPORTS: Rule = Rule::Unconfigured {
        name: "AlwaysReports",
        create: always_reports,
    };

    /// Reports two errors for every type definition, starting with the last definition.
    struct ReportsBackwards;

    impl<'a> Visitor<'a, RuleContext<'a>> for ReportsBackwards {
        fn enter_document(
            &mut self,
            ctx: &mut RuleContext<'a>,
            document: &'a Document<'a>,
            _info: &VisitInfo<'a>,
        ) -> VisitFlow {
            let definitions: Vec<&'a TypeDefinition<'a>> = document.type_definitions().collect();
            for definition in definitions.into_iter().rev() {
                for label in ["first", "second"] {
                    ctx.report_error(ValidationError::new(
                        "reports-backwards",
                        format!("{} {}", label, definition.name()),
                        vec![ASTNode::TypeDefinition(definition)],
                    ));
                }
            }
            VisitFlow::Break
        }
    }

    fn reports_backwards<'a>(_ctx: &RuleContext<'a>) -> RuleVisitor<'a> {
        Box::new(ReportsBackwards)
    }

    const REPORTS_BACKWARDS: Rule = Rule::Unconfigured {
        name: "ReportsBackwards",
        create: reports_backwards,
    };

    fn run<'a>(ctx: &'a ASTContext, source: &str, rules: &[Rule]) -> Vec<ValidationError<'a>> {
        let document = Document::parse(ctx, source).unwrap();
        validate_schema_definition(ctx, document, rules, &LintConfiguration::default()).unwrap()
    }

    fn kinds(errors: &[ValidationError]) -> Vec<String> {
        errors.iter().map(|error| error.kind.clone()).collect()
    }

    #[test]
    fn structural_errors_short_circuit() {
        let ctx = ASTContext::new();
        let errors = run(
            &ctx,
            indoc! {"
                type Query { a: Unknown }
                type query { b: Int }
                type query { c: Int }
            "},
            &[ALWAYS_REPORTS, TypesAreCapitalized::RULE],
        );
        assert_eq!(kinds(&errors), vec![INVALID_GRAPHQL_SCHEMA; 2]);
        assert_eq!(errors[0].message, "Unknown type \"Unknown\".");
        assert_eq!(errors[0].line(), 1);
        assert_eq!(
            errors[1].message,
            "There can be only one type named \"query\"."
        );
    }

    #[test]
    fn schema_errors_short_circuit() {
        let ctx = ASTContext::new();
        let errors = run(
            &ctx,
            "type Query { a: Int }\nunion Result = Query | String",
            &[ALWAYS_REPORTS],
        );
        assert_eq!(kinds(&errors), vec![INVALID_GRAPHQL_SCHEMA]);
        assert_eq!(
            errors[0].message,
            "Union type Result can only include Object types, it cannot include String."
        );
        assert_eq!(errors[0].line(), 2);
    }

    #[test]
    fn schema_errors_without_nodes_point_at_document() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "type Query { a: Int }").unwrap();
        let errors = invalid_schema_errors(
            vec![crate::error::GraphQLError::new("Broken.", vec![])],
            document,
        );
        assert_eq!(errors[0].nodes, vec![ASTNode::Document(document)]);
        assert_eq!(errors[0].line(), 1);
    }

    #[test]
    fn errors_without_nodes_are_anchored() {
        let ctx = ASTContext::new();
        let source = "\"Root\" type Query { \"A\" a: Int }";
        let errors = run(&ctx, source, &[ALWAYS_REPORTS]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].locations.len(), 1);
        assert_eq!(errors[0].to_string(), "1:1 Reported.  always-reports");
    }

    #[test]
    fn stable_sort_by_line() {
        let ctx = ASTContext::new();
        let errors = run(
            &ctx,
            indoc! {"
                type A { a: Int } type B { b: Int }
                type C { c: Int }
            "},
            &[REPORTS_BACKWARDS],
        );
        let messages: Vec<&str> = errors.iter().map(|error| error.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["first B", "second B", "first A", "second A", "first C", "second C"]
        );
        let lines: Vec<usize> = errors.iter().map(ValidationError::line).collect();
        assert!(lines.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn rules_are_independent() {
        let ctx = ASTContext::new();
        let source = indoc! {"
            type query {
              a: String @deprecated
            }
            enum Color { RED @deprecated }
        "};
        let all = run(&ctx, source, &default_rules());
        let without_types: Vec<Rule> = default_rules()
            .into_iter()
            .filter(|rule| rule.name() != "TypesHaveDescriptions")
            .collect();
        let some = run(&ctx, source, &without_types);

        let expected: Vec<ValidationError> = all
            .into_iter()
            .filter(|error| error.kind != "types-have-descriptions")
            .collect();
        assert_eq!(some, expected);
        assert_eq!(some.len(), 4);
    }

    #[test]
    fn repeated_runs_are_equal() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {"
                type foo { bar: String @deprecated }
                input Filter { a: Int }
            "},
        )
        .unwrap();
        let configuration = LintConfiguration::default();
        let first =
            validate_schema_definition(&ctx, document, &all_rules(), &configuration).unwrap();
        let second =
            validate_schema_definition(&ctx, document, &all_rules(), &configuration).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn lowercase_type_without_descriptions() {
        let ctx = ASTContext::new();
        let source = "type foo { bar: String }";

        let rules = [TypesAreCapitalized::RULE, FieldsHaveDescriptions::RULE];
        let errors = run(&ctx, source, &rules);
        let printed: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(
            printed,
            vec![
                "1:1 The object type `foo` should start with a capital letter.  types-are-capitalized",
                "1:12 The field `foo.bar` is missing a description.  fields-have-descriptions",
            ]
        );

        let errors = run(&ctx, source, &default_rules());
        assert_eq!(
            kinds(&errors),
            vec![
                "types-have-descriptions",
                "types-are-capitalized",
                "fields-have-descriptions",
            ]
        );
        assert!(errors.iter().all(|error| error.line() == 1));
    }

    #[test]
    fn duplicate_type_definitions() {
        let ctx = ASTContext::new();
        let source = "type Foo {a: Int} type Foo {b: Int}";
        for rules in [vec![], default_rules(), all_rules(), vec![ALWAYS_REPORTS]] {
            let errors = run(&ctx, source, &rules);
            assert_eq!(kinds(&errors), vec![INVALID_GRAPHQL_SCHEMA]);
            assert_eq!(
                errors[0].message,
                "There can be only one type named \"Foo\"."
            );
        }
    }

    #[test]
    fn deprecation_without_reason() {
        let ctx = ASTContext::new();
        let errors = run(
            &ctx,
            "type Foo { bar: String @deprecated }",
            &[DeprecationsHaveAReason::RULE],
        );
        assert_eq!(kinds(&errors), vec!["deprecations-have-a-reason"]);
        assert_eq!(
            errors[0].message,
            "The field `Foo.bar` is deprecated but has no deprecation reason."
        );
    }

    #[test]
    fn lint_from_source() {
        let ctx = ASTContext::new();
        let configuration = LintConfiguration {
            comment_descriptions: true,
            rules: vec![
                "types-have-descriptions".into(),
                "FieldsHaveDescriptions".into(),
            ],
        };
        let source = indoc! {"
            # The root
            type Query {
              # A field
              a: Int
              b: Int
            }
        "};
        let errors = lint_schema(&ctx, source, &configuration).unwrap();
        assert_eq!(
            errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["5:3 The field `Query.b` is missing a description.  fields-have-descriptions"]
        );

        let error = lint_schema(&ctx, "type Query {", &configuration).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Syntax);

        let configuration = LintConfiguration {
            rules: vec!["NoSuchRule".into()],
            ..LintConfiguration::default()
        };
        let error = lint_schema(&ctx, "type Query { a: Int }", &configuration).unwrap_err();
        assert_eq!(error.message(), "Unknown rule \"NoSuchRule\".");
    }

    #[test]
    fn unicode_escapes_in_descriptions() {
        let ctx = ASTContext::new();
        let configuration = LintConfiguration {
            comment_descriptions: false,
            rules: vec!["FieldsHaveDescriptions".into()],
        };
        let source = r#"type Query { "\u00e9 \uD83D\uDE00" a: Int }"#;
        let errors = lint_schema(&ctx, source, &configuration).unwrap();
        assert!(errors.is_empty());

        let document = Document::parse(&ctx, source).unwrap();
        let field = match document.type_definitions().next() {
            Some(TypeDefinition::Object(object)) => &object.fields[0],
            _ => panic!("expected an object type"),
        };
        let description = field.description.as_ref().unwrap();
        assert_eq!(description.value, "\u{e9} \u{1F600}");
    }

    #[test]
    fn lint_fixture() {
        let ctx = ASTContext::new();
        let configuration = LintConfiguration {
            comment_descriptions: true,
            rules: Vec::new(),
        };
        let source = include_str!("../../fixture/linted_schema.graphql");
        let errors = lint_schema(&ctx, source, &configuration).unwrap();

        let count = |kind: &str| errors.iter().filter(|error| error.kind == kind).count();
        assert_eq!(count("fields-have-descriptions"), 13);
        assert_eq!(count("deprecations-have-a-reason"), 2);
        assert_eq!(count("types-have-descriptions"), 6);
        assert_eq!(count("types-are-capitalized"), 2);
        assert_eq!(errors.len(), 23);
        let lines: Vec<usize> = errors.iter().map(ValidationError::line).collect();
        assert!(lines.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(
            errors[0].to_string(),
            "14:3 The field `Query.search` is missing a description.  fields-have-descriptions"
        );
    }
}
