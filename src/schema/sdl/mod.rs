//! # Structural SDL Validation
//!
//! The `schema::sdl` module contains the rules that check a schema definition document for
//! structural mistakes before a [`Schema`](super::Schema) is built from it, like duplicate or
//! unknown names and misplaced directives.
//! [Reference](https://spec.graphql.org/October2021/#sec-Type-System)
//!
//! Every rule is a [`Visitor`] accepting an [`SdlContext`] and implements the [`SdlRule`] trait.
//! All rules are combined into [`DefaultSdlRules`], which [`validate_sdl`] runs in a single pass.
//!
//! ```
//! use graphql_schema_linter::{ast::*, schema::sdl::*};
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "type Query { a: Foo }").unwrap();
//!
//! let errors = validate_sdl(&ctx, document);
//! assert_eq!(errors[0].message, "Unknown type \"Foo\".");
//! ```

use crate::ast::{ASTContext, DefaultIn, Document};
use crate::error::GraphQLError;
use crate::visit::{ComposedVisitor, VisitNode, Visitor};

mod context;
pub mod rules;

pub use context::{directive_location, KnownDirective, SdlContext};
pub use rules::*;

/// Trait for an `SdlRule` that checks a schema definition document for structural mistakes using
/// a visitor.
///
/// A rule always implements a visitor and accepts the [`SdlContext`] structure as its passed
/// context. Rules are instantiated with [`DefaultIn`] so that they may keep their bookkeeping in
/// the AST Context's arena.
pub trait SdlRule<'a>: Visitor<'a, SdlContext<'a>> + DefaultIn<'a> {
    /// Run this `SdlRule` against the given document and return all errors it has reported.
    #[inline]
    fn validate(ctx: &'a ASTContext, document: &'a Document<'a>) -> Vec<GraphQLError<'a>>
    where
        Self: Sized,
    {
        let mut context = SdlContext::new(ctx, document);
        let mut visitor = Self::default_in(&ctx.arena);
        document.visit(&mut context, &mut visitor);
        context.errors
    }
}

impl<'a, A, B> DefaultIn<'a> for ComposedVisitor<'a, SdlContext<'a>, A, B>
where
    A: SdlRule<'a>,
    B: SdlRule<'a>,
{
    #[inline]
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ComposedVisitor::new(A::default_in(arena), B::default_in(arena))
    }
}

impl<'a, A, B> SdlRule<'a> for ComposedVisitor<'a, SdlContext<'a>, A, B>
where
    A: SdlRule<'a>,
    B: SdlRule<'a>,
{
}

type Compose<'a, A, B> = ComposedVisitor<'a, SdlContext<'a>, A, B>;

/// All structural rules combined into one `SdlRule`.
///
/// See: [`ComposedVisitor`]
pub type DefaultSdlRules<'a> = Compose<
    'a,
    Compose<
        'a,
        Compose<
            'a,
            Compose<'a, LoneSchemaDefinition, UniqueOperationTypes<'a>>,
            Compose<'a, UniqueTypeNames, UniqueFieldDefinitionNames<'a>>,
        >,
        Compose<
            'a,
            Compose<'a, UniqueArgumentDefinitionNames, UniqueEnumValueNames<'a>>,
            Compose<'a, UniqueDirectiveNames<'a>, KnownTypeNames>,
        >,
    >,
    Compose<
        'a,
        Compose<
            'a,
            Compose<'a, KnownDirectives, UniqueDirectivesPerLocation<'a>>,
            Compose<'a, UniqueArgumentNames, UniqueInputFieldNames>,
        >,
        Compose<
            'a,
            Compose<'a, KnownArgumentNamesOnDirectives, ProvidedRequiredArgumentsOnDirectives>,
            PossibleTypeExtensions,
        >,
    >,
>;

/// Checks a schema definition document using all structural rules and returns every error they
/// report, in the order they were found.
pub fn validate_sdl<'a>(ctx: &'a ASTContext, document: &'a Document<'a>) -> Vec<GraphQLError<'a>> {
    DefaultSdlRules::validate(ctx, document)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ast::ParseNode;
    use indoc::indoc;

    /// Runs a single rule on the source text and returns the messages it reported.
    pub(crate) fn messages_of<'a, R: SdlRule<'a>>(
        ctx: &'a ASTContext,
        source: &str,
    ) -> Vec<String> {
        let document = Document::parse(ctx, source).unwrap();
        R::validate(ctx, document)
            .into_iter()
            .map(|error| error.message)
            .collect()
    }

    #[test]
    fn valid_schema() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {r#"
                schema { query: Root }

                "The root"
                type Root implements Node {
                  id: ID!
                  search(term: String = "all", first: Int @deprecated(reason: "No")): [Result!]
                }

                interface Node { id: ID! }
                union Result = Root
                enum Color { RED GREEN }
                input Filter { color: Color = RED }
                scalar Date @specifiedBy(url: "https://example.com")
                directive @auth(role: String!, filter: Filter = { color: RED }) repeatable on OBJECT | FIELD_DEFINITION

                extend type Root @auth(role: "admin") @auth(role: "user") {
                  date: Date
                }
            "#},
        )
        .unwrap();
        assert_eq!(validate_sdl(&ctx, document), vec![]);
    }

    #[test]
    fn reports_errors_of_all_rules() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {r#"
                type Query { a: Unknown }
                type Query { b: String @unknown }
                extend scalar Missing @specifiedBy(url: "https://example.com")
            "#},
        )
        .unwrap();

        let mut messages: Vec<String> = validate_sdl(&ctx, document)
            .into_iter()
            .map(|error| error.message)
            .collect();
        messages.sort();
        assert_eq!(
            messages,
            vec![
                "Cannot extend type \"Missing\" because it is not defined.",
                "There can be only one type named \"Query\".",
                "Unknown directive \"@unknown\".",
                "Unknown type \"Unknown\".",
            ]
        );
    }
}
