//! Helpers for resolvers working with custom scalars.
//!
//! Dynamic schemas hand arguments to resolvers as raw values, so coercion
//! happens here: [`parse_argument`] applies a scalar's `parse_literal` to an
//! argument and [`serialize_output`] applies its `serialize` to a value
//! returned into an output field.

use async_graphql::dynamic::ResolverContext;
use async_graphql::{Error as GraphQLError, ErrorExtensions, Value};
use tracing::trace;

use crate::types::CustomScalar;

/// Parses a resolver argument with the given scalar.
///
/// Missing arguments and coercion failures are returned as GraphQL errors;
/// coercion failures carry the scalar error code in their extensions.
pub fn parse_argument<S: CustomScalar>(
    ctx: &ResolverContext<'_>,
    name: &str,
    scalar: &S,
) -> Result<S::Internal, GraphQLError> {
    let argument = ctx
        .args
        .get(name)
        .ok_or_else(|| GraphQLError::new(format!("Missing required argument '{name}'")))?;

    trace!(argument = name, scalar = scalar.name(), "Coercing argument");
    scalar
        .parse_literal(argument.as_value())
        .map_err(|e| e.extend())
}

/// Serializes a value for an output field typed with the given scalar.
pub fn serialize_output<S>(scalar: &S, value: &S::Internal) -> Result<Value, GraphQLError>
where
    S: CustomScalar,
    S::Serialized: Into<serde_json::Value>,
{
    scalar
        .serialize(value)
        .map(|serialized| json_to_graphql_value(serialized.into()))
        .map_err(|e| e.extend())
}

/// Convert a serde_json::Value to async_graphql::Value.
pub fn json_to_graphql_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::List(arr.into_iter().map(json_to_graphql_value).collect())
        }
        serde_json::Value::Object(obj) => {
            let map: async_graphql::indexmap::IndexMap<async_graphql::Name, Value> = obj
                .into_iter()
                .map(|(k, v)| (async_graphql::Name::new(k), json_to_graphql_value(v)))
                .collect();
            Value::Object(map)
        }
    }
}
