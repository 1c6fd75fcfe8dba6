//! Internal geometry representation.
//!
//! [`GeometryValue`] is what resolvers receive after a geometry literal has
//! been coerced: a validated `geo_types` geometry rather than a plain JSON
//! structure. WKT parsing is delegated to the `wkt` crate and the GeoJSON
//! form is produced from `geojson`'s structured conversion, so geometry text
//! is never evaluated.

use std::fmt;

use geo_types::Geometry;
use wkt::types::{Coord, LineString, Polygon};
use wkt::{ToWkt, Wkt};

use crate::error::{ScalarError, ScalarResult};

/// Geometry type enumeration as numbered by GEOS.
///
/// The discriminants are the external type ids, which is why the kinds
/// backed by a scalar (0, 1, 3, 6) are not contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GeometryKind {
    Point = 0,
    LineString = 1,
    LinearRing = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryKind {
    /// All kinds, ordered by type id.
    pub const ALL: [GeometryKind; 8] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::LinearRing,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// Returns the GEOS geometry type id.
    #[must_use]
    pub const fn type_id(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by its GEOS type id.
    #[must_use]
    pub fn from_type_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_id() == id)
    }

    /// Returns the GeoJSON `type` member for this kind.
    ///
    /// A linear ring has no GeoJSON type of its own and is rendered as a
    /// `LineString`.
    #[must_use]
    pub const fn geojson_type(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString | Self::LinearRing => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }

    /// Classifies a `geo_types` geometry.
    #[must_use]
    pub fn of(geometry: &Geometry<f64>) -> Self {
        match geometry {
            Geometry::Point(_) => Self::Point,
            Geometry::Line(_) | Geometry::LineString(_) => Self::LineString,
            Geometry::Polygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => Self::Polygon,
            Geometry::MultiPoint(_) => Self::MultiPoint,
            Geometry::MultiLineString(_) => Self::MultiLineString,
            Geometry::MultiPolygon(_) => Self::MultiPolygon,
            Geometry::GeometryCollection(_) => Self::GeometryCollection,
        }
    }

    /// Classifies parsed WKT. `LINEARRING` text parses as a line string.
    fn of_wkt(geometry: &Wkt<f64>) -> Self {
        match geometry {
            Wkt::Point(_) => Self::Point,
            Wkt::LineString(_) => Self::LineString,
            Wkt::Polygon(_) => Self::Polygon,
            Wkt::MultiPoint(_) => Self::MultiPoint,
            Wkt::MultiLineString(_) => Self::MultiLineString,
            Wkt::MultiPolygon(_) => Self::MultiPolygon,
            Wkt::GeometryCollection(_) => Self::GeometryCollection,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LinearRing => "LinearRing",
            other => other.geojson_type(),
        };
        f.write_str(name)
    }
}

/// A validated geometry handed to resolvers.
///
/// The kind is taken from the WKT text rather than from the converted
/// `geo_types` value. `geo_types` has no empty point, so `POINT EMPTY` is held
/// as an empty `MultiPoint` while still reporting [`GeometryKind::Point`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryValue {
    kind: GeometryKind,
    geometry: Geometry<f64>,
}

impl GeometryValue {
    /// Parses well-known text into a geometry.
    ///
    /// Keywords are case-insensitive. Only two-dimensional coordinates are
    /// accepted, line strings need at least two points and polygon rings
    /// must be closed with at least four points. Empty geometries are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::MalformedGeometry`] if `text` is not valid WKT,
    /// carries Z or M values, or describes a degenerate line or ring.
    pub fn from_wkt(text: &str) -> ScalarResult<Self> {
        let parsed: Wkt<f64> = text
            .parse()
            .map_err(|e| ScalarError::malformed_geometry(text, e))?;
        check_wkt(&parsed, false).map_err(|reason| ScalarError::malformed_geometry(text, reason))?;

        let kind = GeometryKind::of_wkt(&parsed);
        let geometry =
            Geometry::try_from(parsed).map_err(|e| ScalarError::malformed_geometry(text, e))?;
        Ok(Self { kind, geometry })
    }

    /// Returns the kind of this geometry.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Borrows the underlying `geo_types` geometry.
    #[must_use]
    pub fn geometry(&self) -> &Geometry<f64> {
        &self.geometry
    }

    /// Consumes the value, returning the underlying `geo_types` geometry.
    #[must_use]
    pub fn into_geometry(self) -> Geometry<f64> {
        self.geometry
    }

    /// Returns `true` for `POINT EMPTY`.
    fn is_empty_point(&self) -> bool {
        self.kind == GeometryKind::Point && !matches!(self.geometry, Geometry::Point(_))
    }

    /// Renders the geometry as well-known text.
    #[must_use]
    pub fn to_wkt(&self) -> String {
        if self.is_empty_point() {
            return "POINT EMPTY".to_string();
        }
        self.geometry.wkt_string()
    }

    /// Renders the geometry as a GeoJSON geometry object.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::MalformedGeometry`] if the structure cannot be
    /// represented as JSON.
    pub fn to_geojson(&self) -> ScalarResult<serde_json::Value> {
        let value = if self.is_empty_point() {
            geojson::Value::Point(Vec::new())
        } else {
            geojson::Value::from(&self.geometry)
        };
        serde_json::to_value(geojson::Geometry::new(value))
            .map_err(|e| ScalarError::malformed_geometry(self.to_wkt(), e))
    }
}

impl From<Geometry<f64>> for GeometryValue {
    fn from(geometry: Geometry<f64>) -> Self {
        Self {
            kind: GeometryKind::of(&geometry),
            geometry,
        }
    }
}

fn check_wkt(geometry: &Wkt<f64>, nested: bool) -> Result<(), &'static str> {
    match geometry {
        Wkt::Point(point) => match &point.0 {
            Some(coord) => check_coord(coord),
            None if nested => Err("empty points are only supported as a standalone geometry"),
            None => Ok(()),
        },
        Wkt::LineString(line) => check_line(line),
        Wkt::Polygon(polygon) => check_polygon(polygon),
        Wkt::MultiPoint(points) => points.0.iter().try_for_each(|point| match &point.0 {
            Some(coord) => check_coord(coord),
            None => Err("empty points are only supported as a standalone geometry"),
        }),
        Wkt::MultiLineString(lines) => lines.0.iter().try_for_each(check_line),
        Wkt::MultiPolygon(polygons) => polygons.0.iter().try_for_each(check_polygon),
        Wkt::GeometryCollection(collection) => {
            collection.0.iter().try_for_each(|member| check_wkt(member, true))
        }
    }
}

fn check_coord(coord: &Coord<f64>) -> Result<(), &'static str> {
    if coord.z.is_some() || coord.m.is_some() {
        return Err("Z and M coordinates are not supported");
    }
    Ok(())
}

fn check_line(line: &LineString<f64>) -> Result<(), &'static str> {
    if line.0.len() == 1 {
        return Err("a LineString needs at least 2 points");
    }
    line.0.iter().try_for_each(check_coord)
}

fn check_polygon(polygon: &Polygon<f64>) -> Result<(), &'static str> {
    polygon.0.iter().try_for_each(|ring| {
        ring.0.iter().try_for_each(check_coord)?;
        match ring.0.len() {
            0 => Ok(()),
            1..=3 => Err("a polygon ring needs at least 4 points"),
            _ if ring.0.first() != ring.0.last() => Err("polygon rings must be closed"),
            _ => Ok(()),
        }
    })
}

impl fmt::Display for GeometryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_ids() {
        assert_eq!(GeometryKind::Point.type_id(), 0);
        assert_eq!(GeometryKind::LineString.type_id(), 1);
        assert_eq!(GeometryKind::Polygon.type_id(), 3);
        assert_eq!(GeometryKind::MultiPolygon.type_id(), 6);
        assert_eq!(GeometryKind::from_type_id(6), Some(GeometryKind::MultiPolygon));
        assert_eq!(GeometryKind::from_type_id(8), None);
    }

    #[test]
    fn test_parse_point() {
        let value = GeometryValue::from_wkt("POINT(3 5)").unwrap();
        assert_eq!(value.kind(), GeometryKind::Point);
        assert_eq!(
            value.to_geojson().unwrap(),
            json!({"type": "Point", "coordinates": [3.0, 5.0]})
        );
    }

    #[test]
    fn test_parse_kinds() {
        let cases = [
            ("LINESTRING(0 0, 1 1, 2 1)", GeometryKind::LineString),
            ("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))", GeometryKind::Polygon),
            (
                "MULTILINESTRING((0 0, 1 1), (2 2, 3 3))",
                GeometryKind::MultiLineString,
            ),
            (
                "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))",
                GeometryKind::MultiPolygon,
            ),
            (
                "GEOMETRYCOLLECTION(POINT(1 2), LINESTRING(0 0, 1 1))",
                GeometryKind::GeometryCollection,
            ),
        ];
        for (wkt, kind) in cases {
            let value = GeometryValue::from_wkt(wkt).unwrap();
            assert_eq!(value.kind(), kind, "kind of {wkt}");
        }
    }

    #[test]
    fn test_polygon_geojson() {
        let value = GeometryValue::from_wkt("POLYGON((0 0, 1 0, 1 1, 0 0))").unwrap();
        assert_eq!(
            value.to_geojson().unwrap(),
            json!({
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
            })
        );
    }

    #[test]
    fn test_collection_geojson_uses_geometries() {
        let value =
            GeometryValue::from_wkt("GEOMETRYCOLLECTION(POINT(1 2), POINT(3 4))").unwrap();
        let geojson = value.to_geojson().unwrap();
        assert_eq!(geojson["type"], "GeometryCollection");
        assert_eq!(geojson["geometries"][1]["coordinates"], json!([3.0, 4.0]));
    }

    #[test]
    fn test_malformed_wkt() {
        let err = GeometryValue::from_wkt("NOT A GEOMETRY").unwrap_err();
        assert!(
            matches!(err, ScalarError::MalformedGeometry { ref input, .. } if input == "NOT A GEOMETRY")
        );
    }

    #[test]
    fn test_lower_case_keywords() {
        let lower = GeometryValue::from_wkt("point(3 5)").unwrap();
        assert_eq!(lower, GeometryValue::from_wkt("POINT(3 5)").unwrap());
    }

    #[test]
    fn test_empty_point_keeps_kind() {
        let value = GeometryValue::from_wkt("POINT EMPTY").unwrap();
        assert_eq!(value.kind(), GeometryKind::Point);
        assert_eq!(value.to_wkt(), "POINT EMPTY");
        assert_eq!(
            value.to_geojson().unwrap(),
            json!({"type": "Point", "coordinates": []})
        );
    }

    #[test]
    fn test_empty_geometries() {
        let cases = [
            ("LINESTRING EMPTY", GeometryKind::LineString),
            ("MULTIPOINT EMPTY", GeometryKind::MultiPoint),
            ("MULTIPOLYGON EMPTY", GeometryKind::MultiPolygon),
        ];
        for (wkt, kind) in cases {
            let value = GeometryValue::from_wkt(wkt).unwrap();
            assert_eq!(value.kind(), kind, "kind of {wkt}");
            assert_eq!(value.to_geojson().unwrap()["type"], kind.geojson_type());
        }
    }

    #[test]
    fn test_empty_point_inside_collection_is_rejected() {
        let err = GeometryValue::from_wkt("GEOMETRYCOLLECTION(POINT EMPTY, POINT(1 2))").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_GEOMETRY");
    }

    #[test]
    fn test_z_and_m_coordinates_are_rejected() {
        for wkt in [
            "POINT Z(1 2 3)",
            "POINT M(1 2 3)",
            "POINT ZM(1 2 3 4)",
            "LINESTRING Z(0 0 1, 1 1 1)",
        ] {
            let err = GeometryValue::from_wkt(wkt).unwrap_err();
            assert!(
                matches!(err, ScalarError::MalformedGeometry { ref input, .. } if input == wkt),
                "accepted {wkt}"
            );
        }
    }

    #[test]
    fn test_degenerate_geometries_are_rejected() {
        let cases = [
            ("LINESTRING(1 1)", "at least 2 points"),
            ("POLYGON((0 0, 1 1))", "at least 4 points"),
            ("POLYGON((0 0, 1 0, 1 1, 0 1))", "closed"),
            ("MULTILINESTRING((0 0, 1 1), (2 2))", "at least 2 points"),
            ("MULTIPOLYGON(((0 0, 1 0, 1 1, 0 1)))", "closed"),
            ("GEOMETRYCOLLECTION(LINESTRING(5 5))", "at least 2 points"),
        ];
        for (wkt, reason) in cases {
            let err = GeometryValue::from_wkt(wkt).unwrap_err();
            assert!(err.to_string().contains(reason), "{wkt}: {err}");
        }
    }

    #[test]
    fn test_closed_ring_is_not_modified() {
        let value = GeometryValue::from_wkt("POLYGON((0 0, 1 0, 1 1, 0 1, 0 0))").unwrap();
        assert_eq!(
            value.to_geojson().unwrap()["coordinates"],
            json!([[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]])
        );
    }

    #[test]
    fn test_wkt_roundtrip() {
        let value = GeometryValue::from_wkt("LINESTRING(0 0, 1.5 2)").unwrap();
        let reparsed = GeometryValue::from_wkt(&value.to_wkt()).unwrap();
        assert_eq!(value, reparsed);
    }

    #[test]
    fn test_value_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryValue>();
    }

    #[test]
    fn test_from_geo_types_classifies_kind() {
        let value = GeometryValue::from(Geometry::Point(geo_types::Point::new(1.0, 2.0)));
        assert_eq!(value.kind(), GeometryKind::Point);
        assert_eq!(value.to_wkt(), "POINT(1 2)");
    }
}
