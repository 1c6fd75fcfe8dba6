//! The conversion contract shared by every custom scalar.

use async_graphql::Value;
use async_graphql::dynamic::Scalar;

use crate::error::ScalarResult;

/// A custom GraphQL scalar with its coercion rules.
///
/// `parse_literal` receives the literal node written in a query document,
/// `parse_value` receives the text bound to a variable, and `serialize`
/// produces the wire value placed into an output field. Both parse
/// operations return the internal value; serialization only ever happens at
/// the output boundary.
pub trait CustomScalar {
    /// Value handed to resolvers after input coercion.
    type Internal;

    /// Value placed into output fields.
    type Serialized;

    /// GraphQL type name.
    fn name(&self) -> &'static str;

    /// Human-readable description shown in the SDL.
    fn description(&self) -> &'static str;

    /// URL of the document specifying the wire format, if any.
    fn specified_by_url(&self) -> Option<&'static str> {
        None
    }

    /// Converts an internal value into its wire representation.
    fn serialize(&self, value: &Self::Internal) -> ScalarResult<Self::Serialized>;

    /// Coerces a literal node from a query document.
    fn parse_literal(&self, node: &Value) -> ScalarResult<Self::Internal>;

    /// Coerces text bound to a variable.
    fn parse_value(&self, value: &str) -> ScalarResult<Self::Internal>;

    /// Builds the dynamic schema registration for this scalar.
    fn to_dynamic(&self) -> Scalar {
        let scalar = Scalar::new(self.name()).description(self.description());
        match self.specified_by_url() {
            Some(url) => scalar.specified_by_url(url),
            None => scalar,
        }
    }
}

/// Names the kind of a literal node, for error messages.
pub(crate) fn literal_kind(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Boolean(_) => "boolean",
        Value::Binary(_) => "binary",
        Value::Enum(_) => "enum",
        Value::List(_) => "list",
        Value::Object(_) => "object",
    }
}
