//! GeoJSON geometry objects.
//!
//! Objects are written with their members in the order `type`, `coordinates`, so a
//! decoded and re-encoded object is byte-identical to what the encoder produced.
//! Positions are deserialized as `Vec<f64>` first and checked for length afterwards.

use geoform_core::{GeoError, GeometryType, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::value::RawValue;

#[derive(Serialize)]
struct GeometryObject<'a, C: Serialize> {
	#[serde(rename = "type")]
	kind: &'a str,
	coordinates: &'a C,
}

#[derive(Deserialize)]
struct RawGeometryObject {
	#[serde(rename = "type")]
	kind: String,
	coordinates: Option<Box<RawValue>>,
}

#[derive(Deserialize)]
struct Tagged {
	#[serde(rename = "type")]
	kind: String,
}

/// Writes `{"type":<kind>,"coordinates":<coords>}`.
pub fn write_object<C: Serialize>(kind: GeometryType, coordinates: &C) -> Result<String> {
	write_tagged(kind.name(), coordinates)
}

/// Writes `{"type":<tag>,"coordinates":<coords>}` for tags that are not geometry kinds.
pub(crate) fn write_tagged<C: Serialize>(tag: &str, coordinates: &C) -> Result<String> {
	serde_json::to_string(&GeometryObject { kind: tag, coordinates }).map_err(json_error)
}

/// Reads the `coordinates` member of an object whose `type` must be `expected`.
pub fn read_object<C: DeserializeOwned>(json: &str, expected: GeometryType) -> Result<C> {
	log::trace!("decoding GeoJSON {expected} from {} bytes", json.len());
	let object = read_raw_object(json)?;
	GeometryType::from_name(&object.kind)?.expect(expected)?;
	read_coordinates(object)
}

/// Reads the `coordinates` member of an object tagged with a name that is not a geometry kind.
pub(crate) fn read_tagged<C: DeserializeOwned>(json: &str, tag: &'static str) -> Result<C> {
	let object = read_raw_object(json)?;
	if object.kind != tag {
		return Err(GeoError::FormatMismatch {
			expected: tag,
			found: object.kind,
		});
	}
	read_coordinates(object)
}

fn read_raw_object(json: &str) -> Result<RawGeometryObject> {
	serde_json::from_str(json).map_err(json_error)
}

fn read_coordinates<C: DeserializeOwned>(object: RawGeometryObject) -> Result<C> {
	let raw = object
		.coordinates
		.ok_or_else(|| GeoError::ParseFailure(format!("{} without coordinates", object.kind)))?;
	serde_json::from_str(raw.get()).map_err(json_error)
}

/// Returns the `type` member of a JSON object, ignoring all other members.
pub fn read_tag(json: &str) -> Result<String> {
	let tagged: Tagged = serde_json::from_str(json).map_err(json_error)?;
	Ok(tagged.kind)
}

/// Checks that a raw position has exactly two values.
pub(crate) fn position(raw: Vec<f64>) -> Result<[f64; 2]> {
	match raw.as_slice() {
		[x, y] => Ok([*x, *y]),
		_ => Err(GeoError::InvalidDimension(raw.len())),
	}
}

pub(crate) fn positions(raw: Vec<Vec<f64>>) -> Result<Vec<[f64; 2]>> {
	raw.into_iter().map(position).collect()
}

pub(crate) fn json_error(error: serde_json::Error) -> GeoError {
	GeoError::ParseFailure(error.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;
	use pretty_assertions::assert_eq;

	#[test]
	fn write_object_orders_members() -> Result<()> {
		assert_eq!(
			write_object(GeometryType::Point, &[4.0, 9.5])?,
			r#"{"type":"Point","coordinates":[4.0,9.5]}"#
		);
		assert_eq!(
			write_object(GeometryType::LineString, &vec![[1.0, 2.0], [3.0, 4.0]])?,
			r#"{"type":"LineString","coordinates":[[1.0,2.0],[3.0,4.0]]}"#
		);
		Ok(())
	}

	#[test]
	fn read_object_ignores_extra_members() -> Result<()> {
		let json = r#"{"bbox":[0,0,1,1],"coordinates":[4,9.5],"type":"Point"}"#;
		let coords: Vec<f64> = read_object(json, GeometryType::Point)?;
		assert_eq!(coords, vec![4.0, 9.5]);
		Ok(())
	}

	#[test]
	fn read_object_checks_tag() {
		let json = r#"{"type":"Polygon","coordinates":[]}"#;
		assert_eq!(
			read_object::<Vec<f64>>(json, GeometryType::Point),
			Err(GeoError::FormatMismatch {
				expected: "Point",
				found: "Polygon".to_string()
			})
		);

		let json = r#"{"type":"GeometryCollection","coordinates":[]}"#;
		assert_eq!(
			read_object::<Vec<f64>>(json, GeometryType::Point),
			Err(GeoError::UnrecognizedType("GeometryCollection".to_string()))
		);
	}

	#[test]
	fn read_object_failures() {
		assert!(matches!(
			read_object::<Vec<f64>>(r#"{"type":"Point"}"#, GeometryType::Point),
			Err(GeoError::ParseFailure(_))
		));
		assert!(matches!(
			read_object::<Vec<f64>>(r#"{"type":"Point","coordinates":"x"}"#, GeometryType::Point),
			Err(GeoError::ParseFailure(_))
		));
		assert!(matches!(
			read_object::<Vec<f64>>("[1,2]", GeometryType::Point),
			Err(GeoError::ParseFailure(_))
		));
	}

	#[test]
	fn tagged_objects() -> Result<()> {
		let json = write_tagged("LinearRing", &vec![[1.0, 2.0]])?;
		assert_eq!(json, r#"{"type":"LinearRing","coordinates":[[1.0,2.0]]}"#);
		let coords: Vec<Vec<f64>> = read_tagged(&json, "LinearRing")?;
		assert_eq!(coords, vec![vec![1.0, 2.0]]);
		assert!(matches!(
			read_tagged::<Vec<Vec<f64>>>(&json, "Ring"),
			Err(GeoError::FormatMismatch { expected: "Ring", .. })
		));
		Ok(())
	}

	#[test]
	fn read_tag_only_reads_type() -> Result<()> {
		assert_eq!(read_tag(r#"{"geometry":null,"type":"Feature"}"#)?, "Feature");
		assert!(read_tag(r#"{"geometry":null}"#).is_err());
		Ok(())
	}

	#[test]
	fn position_checks_length() {
		assert_eq!(position(vec![1.0, 2.0]), Ok([1.0, 2.0]));
		assert_eq!(position(vec![1.0, 2.0, 3.0]), Err(GeoError::InvalidDimension(3)));
		assert_eq!(position(vec![]), Err(GeoError::InvalidDimension(0)));
		assert_eq!(
			positions(vec![vec![1.0, 2.0], vec![3.0]]),
			Err(GeoError::InvalidDimension(1))
		);
	}
}
