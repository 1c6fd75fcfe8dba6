//! GIS GraphQL schema builder.
//!
//! This module provides `GisSchemaBuilder`, which assembles a dynamic
//! async-graphql schema around caller-supplied root objects and registers
//! every GIS and JSON scalar on it.

use async_graphql::dynamic::{Object, Schema, SchemaBuilder};
use tracing::debug;

use crate::error::GraphQLError;
use crate::types::{CustomScalar, GeometryScalar, JsonScalar, JsonStringScalar};

/// Configuration for the schema builder.
#[derive(Debug, Clone)]
pub struct SchemaBuilderConfig {
    /// Maximum query depth allowed.
    pub max_depth: usize,

    /// Maximum query complexity allowed.
    pub max_complexity: usize,

    /// Whether to enable introspection queries.
    pub introspection_enabled: bool,
}

impl Default for SchemaBuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: 15,
            max_complexity: 500,
            introspection_enabled: true,
        }
    }
}

/// Registers the geometry and JSON scalars on a dynamic schema builder.
pub fn register_scalars(mut builder: SchemaBuilder) -> SchemaBuilder {
    for scalar in GeometryScalar::CONCRETE {
        builder = builder.register(scalar.to_dynamic());
    }
    builder
        .register(JsonScalar.to_dynamic())
        .register(JsonStringScalar.to_dynamic())
}

/// Builds dynamic GraphQL schemas that use the GIS scalars.
///
/// # Example
///
/// ```ignore
/// let schema = GisSchemaBuilder::new(SchemaBuilderConfig::default())
///     .build(query, Some(mutation), vec![point_model])?;
/// ```
pub struct GisSchemaBuilder {
    config: SchemaBuilderConfig,
}

impl GisSchemaBuilder {
    /// Creates a new schema builder.
    #[must_use]
    pub fn new(config: SchemaBuilderConfig) -> Self {
        Self { config }
    }

    /// Builds the schema from a query root, an optional mutation root and
    /// any additional object types they reference.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQLError::SchemaBuildFailed`] if the engine rejects the
    /// schema, e.g. a field references an unregistered type.
    pub fn build(
        &self,
        query: Object,
        mutation: Option<Object>,
        types: Vec<Object>,
    ) -> Result<Schema, GraphQLError> {
        let query_name = query.type_name().to_string();
        let mutation_name = mutation.as_ref().map(|m| m.type_name().to_string());
        debug!(
            query = %query_name,
            mutation = ?mutation_name,
            object_count = types.len(),
            "Starting GraphQL schema build"
        );

        let mut schema_builder = Schema::build(&query_name, mutation_name.as_deref(), None);
        schema_builder = register_scalars(schema_builder);

        schema_builder = schema_builder.register(query);
        if let Some(mutation) = mutation {
            schema_builder = schema_builder.register(mutation);
        }
        for object in types {
            schema_builder = schema_builder.register(object);
        }

        // Configure limits
        let mut schema_builder = schema_builder
            .limit_depth(self.config.max_depth)
            .limit_complexity(self.config.max_complexity);

        if !self.config.introspection_enabled {
            schema_builder = schema_builder.disable_introspection();
        }

        let schema = schema_builder
            .finish()
            .map_err(|e| GraphQLError::SchemaBuildFailed(e.to_string()))?;

        debug!("GraphQL schema build complete");
        Ok(schema)
    }
}
