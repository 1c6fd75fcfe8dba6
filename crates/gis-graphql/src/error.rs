//! Error types for scalar coercion and schema building.
//!
//! [`ScalarError`] is raised by the conversion operations of every custom
//! scalar. It converts into an `async_graphql::Error` carrying an
//! `extensions.code`, so a failed coercion surfaces as a field-level error
//! in the GraphQL response. [`GraphQLError`] covers the crate-level failures
//! around schema construction and configuration.

use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::geometry::GeometryKind;

/// Result type for scalar conversions.
pub type ScalarResult<T> = std::result::Result<T, ScalarError>;

/// Errors raised while converting between wire values and internal values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// The operation has no implementation for this scalar.
    #[error("{0}")]
    Unimplemented(String),

    /// A literal node of the wrong kind was supplied where a string was required.
    #[error("{scalar} expects a string literal, got {found}")]
    InvalidLiteralKind {
        /// Name of the scalar performing the coercion.
        scalar: &'static str,
        /// Kind of the literal that was supplied (e.g. `number`).
        found: &'static str,
    },

    /// The input text is not a valid geometry.
    #[error("Malformed geometry '{input}': {reason}")]
    MalformedGeometry {
        /// Text that failed to parse.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A valid geometry of the wrong kind was supplied to a concrete scalar.
    #[error("{scalar} expects a {expected} geometry, got {found}")]
    GeometryKindMismatch {
        /// Name of the scalar performing the coercion.
        scalar: &'static str,
        /// Kind the scalar accepts.
        expected: GeometryKind,
        /// Kind that was parsed.
        found: GeometryKind,
    },

    /// The input text is not valid JSON.
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),
}

impl ScalarError {
    /// Creates an [`ScalarError::Unimplemented`] error.
    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::Unimplemented(message.into())
    }

    /// Creates a [`ScalarError::MalformedGeometry`] error.
    pub fn malformed_geometry(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedGeometry {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the error code placed in GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unimplemented(_) => "UNIMPLEMENTED",
            Self::InvalidLiteralKind { .. } => "INVALID_LITERAL_KIND",
            Self::MalformedGeometry { .. } => "MALFORMED_GEOMETRY",
            Self::GeometryKindMismatch { .. } => "GEOMETRY_KIND_MISMATCH",
            Self::MalformedJson(_) => "MALFORMED_JSON",
        }
    }
}

impl ErrorExtensions for ScalarError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.error_code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Errors that can occur while building or configuring a GIS schema.
#[derive(Debug, Error)]
pub enum GraphQLError {
    /// Schema build failed.
    #[error("Failed to build GraphQL schema: {0}")]
    SchemaBuildFailed(String),

    /// Configuration values are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scalar coercion failed.
    #[error(transparent)]
    Scalar(#[from] ScalarError),
}

impl GraphQLError {
    /// Returns the error code for GraphQL error extensions.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaBuildFailed(_) => "SCHEMA_BUILD_FAILED",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Scalar(err) => err.error_code(),
        }
    }
}
