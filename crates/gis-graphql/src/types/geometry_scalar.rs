//! GIS geometry scalars.
//!
//! A single descriptor type covers the whole family. The concrete scalars
//! differ only in their GraphQL name, description and geometry-kind tag:
//!
//! | Scalar               | Kind tag |
//! |----------------------|----------|
//! | `PointScalar`        | 0        |
//! | `LineStringScalar`   | 1        |
//! | `PolygonScalar`      | 3        |
//! | `MultiPolygonScalar` | 6        |
//!
//! Input is well-known text (`"POINT(3 5)"`), output is a GeoJSON geometry
//! object (`{"type": "Point", "coordinates": [3.0, 5.0]}`).

use async_graphql::Value;
use tracing::{debug, trace};

use super::scalar::{CustomScalar, literal_kind};
use crate::error::{ScalarError, ScalarResult};
use crate::geometry::{GeometryKind, GeometryValue};

/// RFC 7946, the GeoJSON format produced on output.
const GEOJSON_SPEC_URL: &str = "https://datatracker.ietf.org/doc/html/rfc7946";

/// Descriptor of a geometry scalar.
///
/// Use one of the concrete constants. [`GeometryScalar::ABSTRACT`] stands
/// for the family itself: it has no kind tag and accepts any geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryScalar {
    name: &'static str,
    description: &'static str,
    kind: Option<GeometryKind>,
}

impl GeometryScalar {
    /// The abstract base of the family.
    pub const ABSTRACT: Self = Self {
        name: "GISScalar",
        description: "A GIS geometry geojson",
        kind: None,
    };

    /// `PointScalar`, kind tag 0.
    pub const POINT: Self = Self::concrete("PointScalar", "A GIS Point geojson", GeometryKind::Point);

    /// `LineStringScalar`, kind tag 1.
    pub const LINE_STRING: Self = Self::concrete(
        "LineStringScalar",
        "A GIS LineString geojson",
        GeometryKind::LineString,
    );

    /// `PolygonScalar`, kind tag 3.
    pub const POLYGON: Self = Self::concrete(
        "PolygonScalar",
        "A GIS Polygon geojson",
        GeometryKind::Polygon,
    );

    /// `MultiPolygonScalar`, kind tag 6.
    pub const MULTI_POLYGON: Self = Self::concrete(
        "MultiPolygonScalar",
        "A GIS MultiPolygon geojson",
        GeometryKind::MultiPolygon,
    );

    /// Every concrete geometry scalar.
    pub const CONCRETE: [Self; 4] = [
        Self::POINT,
        Self::LINE_STRING,
        Self::POLYGON,
        Self::MULTI_POLYGON,
    ];

    const fn concrete(name: &'static str, description: &'static str, kind: GeometryKind) -> Self {
        Self {
            name,
            description,
            kind: Some(kind),
        }
    }

    /// Returns the concrete scalar for a geometry kind, if one exists.
    #[must_use]
    pub fn for_kind(kind: GeometryKind) -> Option<Self> {
        Self::CONCRETE.into_iter().find(|scalar| scalar.kind == Some(kind))
    }

    /// Returns the geometry kind, `None` for the abstract base.
    #[must_use]
    pub fn kind(&self) -> Option<GeometryKind> {
        self.kind
    }

    /// Returns the GEOS geometry type id accepted by this scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::Unimplemented`] for [`GeometryScalar::ABSTRACT`].
    pub fn geom_typeid(&self) -> ScalarResult<u8> {
        self.kind.map(GeometryKind::type_id).ok_or_else(|| {
            ScalarError::unimplemented(format!(
                "{} is an abstract scalar and doesn't have a 'geom_typeid'. \
                 Use a concrete subtype instead.",
                self.name
            ))
        })
    }

    fn check_kind(&self, value: GeometryValue) -> ScalarResult<GeometryValue> {
        match self.kind {
            Some(expected) if value.kind() != expected => Err(ScalarError::GeometryKindMismatch {
                scalar: self.name,
                expected,
                found: value.kind(),
            }),
            _ => Ok(value),
        }
    }
}

impl CustomScalar for GeometryScalar {
    type Internal = GeometryValue;
    type Serialized = serde_json::Value;

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn specified_by_url(&self) -> Option<&'static str> {
        Some(GEOJSON_SPEC_URL)
    }

    fn serialize(&self, value: &GeometryValue) -> ScalarResult<serde_json::Value> {
        value.to_geojson()
    }

    fn parse_literal(&self, node: &Value) -> ScalarResult<GeometryValue> {
        match node {
            Value::String(text) => self.parse_value(text),
            other => {
                let err = ScalarError::InvalidLiteralKind {
                    scalar: self.name,
                    found: literal_kind(other),
                };
                debug!(scalar = self.name, error = %err, "Geometry literal rejected");
                Err(err)
            }
        }
    }

    fn parse_value(&self, value: &str) -> ScalarResult<GeometryValue> {
        let parsed = GeometryValue::from_wkt(value).and_then(|geometry| self.check_kind(geometry));
        match &parsed {
            Ok(geometry) => trace!(scalar = self.name, kind = %geometry.kind(), "Geometry parsed"),
            Err(err) => debug!(scalar = self.name, error = %err, "Geometry input rejected"),
        }
        parsed
    }
}
