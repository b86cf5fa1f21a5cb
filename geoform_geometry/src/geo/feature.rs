use super::*;
use crate::geojson::{self, json_error};
use geoform_core::{GeoError, Result};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// The geometry kinds a [`Feature`] can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureGeometry {
	Point(Point),
	LineString(LineString),
	Polygon(Polygon),
}

impl FeatureGeometry {
	pub fn to_json(&self) -> Result<String> {
		match self {
			FeatureGeometry::Point(g) => g.to_json(),
			FeatureGeometry::LineString(g) => g.to_json(),
			FeatureGeometry::Polygon(g) => g.to_json(),
		}
	}

	/// Decodes a GeoJSON geometry object, dispatching on its `type` tag.
	///
	/// Any tag other than `Point`, `LineString` or `Polygon` fails with
	/// [`GeoError::UnsupportedFeatureGeometry`] carrying the raw JSON.
	pub fn from_json(json: &str) -> Result<Self> {
		match geojson::read_tag(json)?.as_str() {
			"Point" => Point::from_json(json).map(FeatureGeometry::Point),
			"LineString" => LineString::from_json(json).map(FeatureGeometry::LineString),
			"Polygon" => Polygon::from_json(json).map(FeatureGeometry::Polygon),
			_ => Err(GeoError::UnsupportedFeatureGeometry(json.to_string())),
		}
	}
}

impl From<FeatureGeometry> for Geometry {
	fn from(value: FeatureGeometry) -> Self {
		match value {
			FeatureGeometry::Point(g) => Geometry::Point(g),
			FeatureGeometry::LineString(g) => Geometry::LineString(g),
			FeatureGeometry::Polygon(g) => Geometry::Polygon(g),
		}
	}
}

impl TryFrom<Geometry> for FeatureGeometry {
	type Error = GeoError;

	fn try_from(value: Geometry) -> Result<Self> {
		match value {
			Geometry::Point(g) => Ok(FeatureGeometry::Point(g)),
			Geometry::LineString(g) => Ok(FeatureGeometry::LineString(g)),
			Geometry::Polygon(g) => Ok(FeatureGeometry::Polygon(g)),
			other => Err(GeoError::UnsupportedFeatureGeometry(other.type_name().to_string())),
		}
	}
}

impl From<Point> for FeatureGeometry {
	fn from(value: Point) -> Self {
		FeatureGeometry::Point(value)
	}
}

impl From<LineString> for FeatureGeometry {
	fn from(value: LineString) -> Self {
		FeatureGeometry::LineString(value)
	}
}

impl From<Polygon> for FeatureGeometry {
	fn from(value: Polygon) -> Self {
		FeatureGeometry::Polygon(value)
	}
}

#[derive(Serialize, Deserialize)]
struct FeatureObject {
	#[serde(rename = "type")]
	kind: String,
	geometry: Box<RawValue>,
}

/// A GeoJSON feature: a geometry tagged with `"type":"Feature"`.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
	pub geometry: FeatureGeometry,
}

impl Feature {
	pub const KIND: &'static str = "Feature";

	pub fn new(geometry: impl Into<FeatureGeometry>) -> Self {
		Self {
			geometry: geometry.into(),
		}
	}

	/// Writes `{"type":"Feature","geometry":{...}}`.
	pub fn to_json(&self) -> Result<String> {
		let geometry = RawValue::from_string(self.geometry.to_json()?).map_err(json_error)?;
		serde_json::to_string(&FeatureObject {
			kind: Self::KIND.to_string(),
			geometry,
		})
		.map_err(json_error)
	}

	/// Reads the outer `type` tag and keeps `geometry` as raw JSON, then decodes the
	/// geometry with [`FeatureGeometry::from_json`].
	pub fn from_json(json: &str) -> Result<Self> {
		log::trace!("decoding GeoJSON Feature from {} bytes", json.len());
		let object: FeatureObject = serde_json::from_str(json).map_err(json_error)?;
		if object.kind != Self::KIND {
			return Err(GeoError::FormatMismatch {
				expected: Self::KIND,
				found: object.kind,
			});
		}
		Ok(Self {
			geometry: FeatureGeometry::from_json(object.geometry.get())?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn ring() -> LinearRing {
		LinearRing::try_from(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap()
	}

	#[test]
	fn point_feature() -> Result<()> {
		let feature = Feature::new(Point::new(4.0, 9.5));
		let json = feature.to_json()?;
		assert_eq!(
			json,
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[4.0,9.5]}}"#
		);
		let decoded = Feature::from_json(&json)?;
		assert_eq!(decoded, feature);
		assert_eq!(decoded.to_json()?, json);
		Ok(())
	}

	#[rstest]
	#[case(FeatureGeometry::from(LineString::from([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])))]
	#[case(FeatureGeometry::from(Polygon::new(ring(), vec![])))]
	fn other_geometries(#[case] geometry: FeatureGeometry) -> Result<()> {
		let feature = Feature::new(geometry);
		assert_eq!(Feature::from_json(&feature.to_json()?)?, feature);
		Ok(())
	}

	#[test]
	fn decode_ignores_whitespace_and_extra_members() -> Result<()> {
		let json = r#"{ "properties": {}, "type": "Feature",
			"geometry": { "coordinates": [4, 9.5], "type": "Point" } }"#;
		assert_eq!(Feature::from_json(json)?, Feature::new(Point::new(4.0, 9.5)));
		Ok(())
	}

	#[rstest]
	#[case(r#"{"type":"MultiPolygon","coordinates":[]}"#)]
	#[case(r#"{"type":"LinearRing","coordinates":[[0,0],[1,0],[0,1],[0,0]]}"#)]
	#[case(r#"{"type":"GeometryCollection","geometries":[]}"#)]
	fn unsupported_geometry_carries_raw_json(#[case] geometry: &str) {
		let json = format!(r#"{{"type":"Feature","geometry":{geometry}}}"#);
		assert_eq!(
			Feature::from_json(&json),
			Err(GeoError::UnsupportedFeatureGeometry(geometry.to_string()))
		);
	}

	#[test]
	fn decode_failures() {
		assert_eq!(
			Feature::from_json(r#"{"type":"FeatureCollection","geometry":{}}"#),
			Err(GeoError::FormatMismatch {
				expected: "Feature",
				found: "FeatureCollection".to_string()
			})
		);
		assert!(matches!(
			Feature::from_json(r#"{"type":"Feature"}"#),
			Err(GeoError::ParseFailure(_))
		));
		assert!(matches!(
			Feature::from_json(r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1]}}"#),
			Err(GeoError::InvalidDimension(1))
		));
	}

	#[test]
	fn geometry_conversions() -> Result<()> {
		let point = Point::new(1.0, 2.0);
		let geometry = Geometry::from(FeatureGeometry::from(point));
		assert_eq!(geometry, Geometry::Point(point));
		assert_eq!(FeatureGeometry::try_from(geometry)?, FeatureGeometry::Point(point));
		assert_eq!(
			FeatureGeometry::try_from(Geometry::from(MultiPolygon::default())),
			Err(GeoError::UnsupportedFeatureGeometry("MultiPolygon".to_string()))
		);
		Ok(())
	}
}
