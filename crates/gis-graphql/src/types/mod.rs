//! Custom scalar types for GraphQL.
//!
//! Every scalar implements [`CustomScalar`], the conversion contract used at
//! the argument and output boundaries:
//!
//! - Geometry: `PointScalar`, `LineStringScalar`, `PolygonScalar`,
//!   `MultiPolygonScalar` (all [`GeometryScalar`] descriptors)
//! - JSON: `JSONScalar` (output only), `JSONString`

mod geometry_scalar;
mod json_scalar;
mod scalar;

pub use geometry_scalar::GeometryScalar;
pub use json_scalar::{JsonScalar, JsonStringScalar};
pub use scalar::CustomScalar;
