//! Schema construction.

mod builder;

pub use builder::{GisSchemaBuilder, SchemaBuilderConfig, register_scalars};
