//! # gis-graphql
//!
//! GIS geometry and JSON custom scalars for async-graphql dynamic schemas.
//!
//! Geometry scalars accept well-known text on input and produce GeoJSON
//! geometry objects on output:
//!
//! ```graphql
//! mutation {
//!   createPoint(location: "POINT(3 5)") {
//!     point { location }   # {"type": "Point", "coordinates": [3.0, 5.0]}
//!   }
//! }
//! ```
//!
//! Resolvers receive a validated [`GeometryValue`] rather than a plain JSON
//! structure, and serialization happens when the value is placed into an
//! output field.
//!
//! ## Configuration
//!
//! ```toml
//! [graphql]
//! max_depth = 15
//! max_complexity = 500
//! introspection = true
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration options
//! - [`geometry`] - Internal geometry representation
//! - [`types`] - Custom scalar types
//! - [`schema`] - Schema building
//! - [`resolvers`] - Argument and output coercion helpers
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod geometry;
pub mod resolvers;
pub mod schema;
pub mod types;

// Re-export main types
pub use config::GisGraphQLConfig;
pub use error::{GraphQLError, ScalarError, ScalarResult};
pub use geometry::{GeometryKind, GeometryValue};
pub use resolvers::{parse_argument, serialize_output};
pub use schema::{GisSchemaBuilder, SchemaBuilderConfig, register_scalars};
pub use types::{CustomScalar, GeometryScalar, JsonScalar, JsonStringScalar};

/// Result type for GraphQL operations.
pub type Result<T> = std::result::Result<T, GraphQLError>;
