use super::super::{SdlContext, SdlRule};
use crate::{ast::*, visit::*};
use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// The node a directive is applied to. Directives of a schema definition and its extensions and
/// of a type and its extensions are applied to the same location.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
enum DirectiveHost<'a> {
    Schema,
    Type(&'a str),
    Node(ASTKind, usize),
}

/// Validates that non-repeatable directives are applied at most once per location.
///
/// See [`SdlRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location)
pub struct UniqueDirectivesPerLocation<'a> {
    seen_directives:
        HashMap<(DirectiveHost<'a>, &'a str), &'a Directive<'a>, DefaultHashBuilder, &'a Bump>,
}

impl<'a> DefaultIn<'a> for UniqueDirectivesPerLocation<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        UniqueDirectivesPerLocation {
            seen_directives: HashMap::new_in(arena),
        }
    }
}

impl<'a> SdlRule<'a> for UniqueDirectivesPerLocation<'a> {}

impl<'a> Visitor<'a, SdlContext<'a>> for UniqueDirectivesPerLocation<'a> {
    fn enter_directive(
        &mut self,
        ctx: &mut SdlContext<'a>,
        directive: &'a Directive<'a>,
        info: &VisitInfo<'a>,
    ) -> VisitFlow {
        let is_unique = ctx
            .get_directive(directive.name)
            .map_or(false, |known| !known.is_repeatable());
        if !is_unique {
            return VisitFlow::Skip;
        }
        let host = match info.parent() {
            Some(ASTNode::SchemaDefinition(_)) | Some(ASTNode::SchemaExtension(_)) => {
                DirectiveHost::Schema
            }
            Some(ASTNode::TypeDefinition(definition)) => DirectiveHost::Type(definition.name()),
            Some(ASTNode::TypeExtension(extension)) => DirectiveHost::Type(extension.name()),
            Some(node) => DirectiveHost::Node(node.kind(), node.loc().start),
            None => return VisitFlow::Skip,
        };
        if let Some(seen) = self.seen_directives.get(&(host, directive.name)) {
            ctx.report_error(
                format!(
                    "The directive \"@{}\" can only be used once at this location.",
                    directive.name
                ),
                vec![ASTNode::Directive(seen), ASTNode::Directive(directive)],
            );
        } else {
            self.seen_directives.insert((host, directive.name), directive);
        }
        VisitFlow::Skip
    }
}
