use super::context::RuleContext;
use crate::ast::ASTNode;

mod deprecations_have_a_reason;
mod fields_have_descriptions;
mod input_object_values_have_descriptions;
mod types_are_capitalized;
mod types_have_descriptions;

pub use deprecations_have_a_reason::*;
pub use fields_have_descriptions::*;
pub use input_object_values_have_descriptions::*;
pub use types_are_capitalized::*;
pub use types_have_descriptions::*;

/// Returns the definition node of a named type as it's been recorded on the schema.
///
/// Type definition callbacks only receive the inner definition, e.g. an `ObjectTypeDefinition`,
/// while errors point at the whole `TypeDefinition` node.
fn type_definition_nodes<'a>(ctx: &RuleContext<'a>, name: &str) -> Vec<ASTNode<'a>> {
    match ctx.schema.get_type(name) {
        Some(schema_type) => schema_type.ast_nodes().into_iter().take(1).collect(),
        None => Vec::new(),
    }
}

/// Returns the name of the type that the currently visited field or value is defined on.
fn parent_name<'a>(info: &crate::visit::VisitInfo<'a>) -> &'a str {
    info.parent()
        .and_then(|parent| parent.name())
        .unwrap_or_default()
}
