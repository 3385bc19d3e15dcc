#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn graphql_sdl_parse_graphql_schema_linter(bench: &mut Bencher) {
    use graphql_schema_linter::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, SCHEMA).ok();
    });
}

fn graphql_sdl_parse_async_graphql_parser(bench: &mut Bencher) {
    use async_graphql_parser::parse_schema;
    bench.iter(|| {
        parse_schema(SCHEMA).ok();
    });
}

fn graphql_sdl_parse_graphql_parser(bench: &mut Bencher) {
    use graphql_parser::schema::parse_schema;
    bench.iter(|| {
        parse_schema::<&str>(SCHEMA).ok();
    });
}

fn graphql_sdl_parse_apollo_parser(bench: &mut Bencher) {
    use apollo_parser::Parser;
    bench.iter(|| {
        let parser = Parser::new(SCHEMA);
        let cst = parser.parse();
        cst.document();
    });
}

fn graphql_sdl_validate(bench: &mut Bencher) {
    use graphql_schema_linter::ast::*;
    use graphql_schema_linter::schema::validate_sdl;
    let ctx = ASTContext::new();
    let document = Document::parse(&ctx, SCHEMA).unwrap();
    bench.iter(|| validate_sdl(&ctx, document));
}

fn graphql_sdl_lint(bench: &mut Bencher) {
    use graphql_schema_linter::ast::*;
    use graphql_schema_linter::config::LintConfiguration;
    use graphql_schema_linter::validate::*;
    let configuration = LintConfiguration {
        comment_descriptions: true,
        rules: Vec::new(),
    };
    bench.iter(|| {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, LINTED_SCHEMA).unwrap();
        let errors = validate_schema_definition(&ctx, document, &all_rules(), &configuration);
        errors.map(|errors| errors.len()).unwrap_or_default()
    });
}

benchmark_group!(
    lint,
    graphql_sdl_parse_graphql_schema_linter,
    graphql_sdl_parse_async_graphql_parser,
    graphql_sdl_parse_graphql_parser,
    graphql_sdl_parse_apollo_parser,
    graphql_sdl_validate,
    graphql_sdl_lint
);

benchmark_main!(lint);

static SCHEMA: &str = include_str!("../fixture/kitchen_sink_schema.graphql");
static LINTED_SCHEMA: &str = include_str!("../fixture/linted_schema.graphql");
