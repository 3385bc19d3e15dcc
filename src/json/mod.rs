//! # JSON Output
//!
//! The `graphql_schema_linter::json` module converts lint results to `serde_json` values, which is
//! how they're reported to tools that consume the linter's output.
//!
//! The [`ErrorToJson`] trait adds a `to_json` method to [`ValidationError`]s and
//! [`errors_to_json`] converts a whole list of errors into a single report:
//!
//! ```json
//! {
//!   "errors": [
//!     {
//!       "message": "The field `Query.a` is missing a description.",
//!       "location": { "line": 1, "column": 14 },
//!       "rule": "fields-have-descriptions"
//!     }
//!   ]
//! }
//! ```

#[cfg(feature = "json")]
extern crate serde_json;

use crate::error::Location;
use crate::validate::ValidationError;
use serde_json::{json, Value as JSValue};

/// Trait for converting lint results to [`serde_json::Value`]s.
pub trait ErrorToJson {
    fn to_json(&self) -> JSValue;
}

impl ErrorToJson for Location {
    #[inline]
    fn to_json(&self) -> JSValue {
        json!({ "line": self.line, "column": self.column })
    }
}

impl<'a> ErrorToJson for ValidationError<'a> {
    /// Converts the error to an object with its message, the location of its first node and the
    /// kind of the error as its `rule`.
    fn to_json(&self) -> JSValue {
        let location = self
            .location()
            .map_or(JSValue::Null, |location| location.to_json());
        json!({
            "message": self.message,
            "location": location,
            "rule": self.kind,
        })
    }
}

/// Converts a list of errors to a report object with an `errors` list.
pub fn errors_to_json(errors: &[ValidationError]) -> JSValue {
    let errors: Vec<JSValue> = errors.iter().map(ErrorToJson::to_json).collect();
    json!({ "errors": errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ASTContext;
    use crate::config::LintConfiguration;
    use crate::validate::lint_schema;

    #[test]
    fn lint_report() {
        let ctx = ASTContext::new();
        let configuration = LintConfiguration {
            comment_descriptions: false,
            rules: vec!["FieldsHaveDescriptions".to_string()],
        };
        let errors = lint_schema(&ctx, "type Query { a: Int }", &configuration).unwrap();

        assert_eq!(
            errors_to_json(&errors),
            json!({
                "errors": [
                    {
                        "message": "The field `Query.a` is missing a description.",
                        "location": { "line": 1, "column": 14 },
                        "rule": "fields-have-descriptions",
                    }
                ]
            })
        );
        assert_eq!(errors_to_json(&[]), json!({ "errors": [] }));
    }
}
