//! GraphQL configuration.
//!
//! Holds the limits applied to schemas built with the GIS scalars.
//! Configuration can be specified in TOML under the `[graphql]` section;
//! every key is optional and falls back to its default.
//!
//! # Example Configuration
//!
//! ```toml
//! [graphql]
//! max_depth = 15
//! max_complexity = 500
//! introspection = true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GraphQLError;
use crate::schema::SchemaBuilderConfig;

/// GraphQL schema configuration.
///
/// Call [`GisGraphQLConfig::validate`] after loading, then hand the result of
/// [`GisGraphQLConfig::to_schema_builder_config`] to the schema builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GisGraphQLConfig {
    /// Maximum query depth allowed.
    /// Bounds how deeply a request may nest selections, e.g.
    /// `createPoint { point { location } }` has depth 3.
    /// Default: 15
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum query complexity allowed.
    /// Every selected field costs one unit; requests above the limit are
    /// rejected before any resolver runs.
    /// Default: 500
    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,

    /// Enable GraphQL introspection queries.
    /// Lets clients discover the registered scalars and their `specifiedBy`
    /// URLs. Turn it off where the schema should not be published.
    /// Default: true
    #[serde(default = "default_introspection")]
    pub introspection: bool,
}

fn default_max_depth() -> usize {
    15
}

fn default_max_complexity() -> usize {
    500
}

fn default_introspection() -> bool {
    true
}

impl Default for GisGraphQLConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_complexity: default_max_complexity(),
            introspection: default_introspection(),
        }
    }
}

impl GisGraphQLConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQLError::InvalidConfig`] if a limit is zero.
    pub fn validate(&self) -> Result<(), GraphQLError> {
        if self.max_depth == 0 {
            return Err(GraphQLError::InvalidConfig(
                "graphql.max_depth must be > 0".into(),
            ));
        }
        if self.max_complexity == 0 {
            return Err(GraphQLError::InvalidConfig(
                "graphql.max_complexity must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Converts this config to a SchemaBuilderConfig.
    #[must_use]
    pub fn to_schema_builder_config(&self) -> SchemaBuilderConfig {
        SchemaBuilderConfig {
            max_depth: self.max_depth,
            max_complexity: self.max_complexity,
            introspection_enabled: self.introspection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GisGraphQLConfig::default();
        assert_eq!(config.max_depth, 15);
        assert_eq!(config.max_complexity, 500);
        assert!(config.introspection);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_limits() {
        let mut config = GisGraphQLConfig::default();
        config.max_depth = 0;
        assert!(matches!(
            config.validate(),
            Err(GraphQLError::InvalidConfig(_))
        ));

        let mut config = GisGraphQLConfig::default();
        config.max_complexity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml = r#"
            max_depth = 20
            introspection = false
        "#;

        let config: GisGraphQLConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.max_depth, 20);
        assert_eq!(config.max_complexity, 500);
        assert!(!config.introspection);

        let builder_config = config.to_schema_builder_config();
        assert_eq!(builder_config.max_depth, 20);
        assert!(!builder_config.introspection_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: GisGraphQLConfig = toml::from_str("").unwrap();
        assert_eq!(config, GisGraphQLConfig::default());
    }
}
