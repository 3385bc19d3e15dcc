use crate::ast::{ASTNode, Document};
use crate::error::{GraphQLError, Location};
use std::fmt;

/// The kind of errors that are reported when a schema definition is structurally invalid or when
/// the schema built from it fails validation.
pub const INVALID_GRAPHQL_SCHEMA: &str = "invalid-graphql-schema";

/// An error that's been found while linting a schema definition.
///
/// The `kind` identifies what reported the error, which is either [`INVALID_GRAPHQL_SCHEMA`] or
/// the kind of a lint rule, e.g. `fields-have-descriptions`. The error points at the AST nodes it's
/// been reported for and their `locations` are derived once when it's created.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError<'a> {
    pub kind: String,
    pub message: String,
    pub nodes: Vec<ASTNode<'a>>,
    pub locations: Vec<Location>,
}

impl<'a> ValidationError<'a> {
    pub fn new<K: Into<String>, M: Into<String>>(
        kind: K,
        message: M,
        nodes: Vec<ASTNode<'a>>,
    ) -> Self {
        let locations = nodes.iter().map(|node| node.loc().location()).collect();
        ValidationError {
            kind: kind.into(),
            message: message.into(),
            nodes,
            locations,
        }
    }

    /// Wraps an error that's been reported while checking or validating the schema itself.
    pub fn invalid_schema(error: GraphQLError<'a>, document: &'a Document<'a>) -> Self {
        ValidationError::new(INVALID_GRAPHQL_SCHEMA, error.message, error.nodes)
            .with_fallback(document)
    }

    /// Anchors an error without any nodes at the whole document, so that every error has a
    /// location.
    pub fn with_fallback(self, document: &'a Document<'a>) -> Self {
        if self.nodes.is_empty() {
            ValidationError::new(self.kind, self.message, vec![ASTNode::Document(document)])
        } else {
            self
        }
    }

    /// Returns the location of the first node this error points at.
    #[inline]
    pub fn location(&self) -> Option<Location> {
        self.locations.first().copied()
    }

    /// Returns the line that's used to order errors.
    #[inline]
    pub fn line(&self) -> usize {
        self.location().map_or(0, |location| location.line)
    }
}

impl<'a> fmt::Display for ValidationError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location() {
            Some(location) => write!(f, "{} {}  {}", location, self.message, self.kind),
            None => write!(f, "{}  {}", self.message, self.kind),
        }
    }
}
