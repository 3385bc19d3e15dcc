use super::validation_error::ValidationError;
use crate::ast::Document;
use crate::schema::Schema;

/// The `RuleContext` carrying the linted document, the schema that's been built from it, and a
/// list of errors.
///
/// A new context is created for every run of the lint rules. All rules share it during a single
/// traversal of the document and add their errors to it as they find them.
pub struct RuleContext<'a> {
    pub document: &'a Document<'a>,
    pub schema: &'a Schema<'a>,
    pub errors: Vec<ValidationError<'a>>,
}

impl<'a> RuleContext<'a> {
    /// Create a new `RuleContext` for a document and its schema.
    pub fn new(document: &'a Document<'a>, schema: &'a Schema<'a>) -> Self {
        RuleContext {
            document,
            schema,
            errors: Vec::new(),
        }
    }

    /// Add an error to the list of errors in the `RuleContext`.
    ///
    /// Errors that don't point at any nodes are anchored at the document.
    pub fn report_error(&mut self, error: ValidationError<'a>) {
        tracing::trace!(kind = %error.kind, message = %error.message, "rule reported error");
        self.errors.push(error.with_fallback(self.document));
    }

    /// Returns the source text of the linted document.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.document.source
    }
}
