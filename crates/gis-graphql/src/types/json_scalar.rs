//! JSON scalars.
//!
//! - [`JsonScalar`] (`JSONScalar`) passes an opaque JSON structure through
//!   output fields unchanged. It is output-only: both parse operations fail.
//! - [`JsonStringScalar`] (`JSONString`) carries JSON as text in both
//!   directions.

use async_graphql::Value;
use tracing::debug;

use super::scalar::{CustomScalar, literal_kind};
use crate::error::{ScalarError, ScalarResult};

/// Output-only scalar for arbitrary JSON payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonScalar;

impl JsonScalar {
    fn input_unsupported(operation: &str) -> ScalarError {
        ScalarError::unimplemented(format!(
            "JSONScalar does not support {operation}; it can only be used for output fields"
        ))
    }
}

impl CustomScalar for JsonScalar {
    type Internal = serde_json::Value;
    type Serialized = serde_json::Value;

    fn name(&self) -> &'static str {
        "JSONScalar"
    }

    fn description(&self) -> &'static str {
        "An arbitrary JSON value"
    }

    fn serialize(&self, value: &serde_json::Value) -> ScalarResult<serde_json::Value> {
        Ok(value.clone())
    }

    fn parse_literal(&self, _node: &Value) -> ScalarResult<serde_json::Value> {
        Err(Self::input_unsupported("parse_literal"))
    }

    fn parse_value(&self, _value: &str) -> ScalarResult<serde_json::Value> {
        Err(Self::input_unsupported("parse_value"))
    }
}

/// Scalar carrying JSON encoded as a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonStringScalar;

impl CustomScalar for JsonStringScalar {
    type Internal = serde_json::Value;
    type Serialized = String;

    fn name(&self) -> &'static str {
        "JSONString"
    }

    fn description(&self) -> &'static str {
        "Allows use of a JSON String for input / output from the GraphQL schema"
    }

    fn specified_by_url(&self) -> Option<&'static str> {
        Some("https://datatracker.ietf.org/doc/html/rfc8259")
    }

    fn serialize(&self, value: &serde_json::Value) -> ScalarResult<String> {
        serde_json::to_string(value).map_err(|e| ScalarError::MalformedJson(e.to_string()))
    }

    fn parse_literal(&self, node: &Value) -> ScalarResult<serde_json::Value> {
        match node {
            Value::String(text) => self.parse_value(text),
            other => Err(ScalarError::InvalidLiteralKind {
                scalar: "JSONString",
                found: literal_kind(other),
            }),
        }
    }

    fn parse_value(&self, value: &str) -> ScalarResult<serde_json::Value> {
        serde_json::from_str(value).map_err(|e| {
            debug!(scalar = "JSONString", error = %e, "JSON input rejected");
            ScalarError::MalformedJson(e.to_string())
        })
    }
}
