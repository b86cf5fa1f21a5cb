use super::GeometryTrait;
use crate::{
	geojson,
	wkb::{self, WkbFragment},
	wkt,
};
use geoform_core::{
	ByteOrderFlag, Endianness, GeometryType, Result,
	io::{ValueReaderSlice, ValueWriterBlob},
};
use std::fmt::{Debug, Display};

/// A single position defined by x and y coordinates.
///
/// This is the building block of every other geometry.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.x, self.y]
	}

	/// Returns `"<x> <y>"`, the form points take inside every WKT body.
	#[must_use]
	pub fn to_text(&self) -> String {
		self.to_string()
	}

	/// Parses `"<x> <y>"`.
	pub fn parse_text(text: &str) -> Result<Self> {
		wkt::parse_position(text).map(Self::from)
	}

	/// Returns the two coordinates as 16 bytes without WKB header.
	#[must_use]
	pub fn to_binary(&self, order: Endianness) -> Vec<u8> {
		wkb::encode_fragment(self, order)
	}

	pub fn from_binary(data: &[u8], order: Endianness) -> Result<Self> {
		wkb::decode_fragment(data, order)
	}
}

impl GeometryTrait for Point {
	const GEOMETRY_TYPE: GeometryType = GeometryType::Point;
	type Coords = [f64; 2];
	type RawCoords = Vec<f64>;

	fn to_coords(&self) -> [f64; 2] {
		self.as_array()
	}

	fn from_coords(coords: [f64; 2]) -> Result<Self> {
		Ok(Self::from(coords))
	}

	fn from_raw_coords(raw: Vec<f64>) -> Result<Self> {
		geojson::position(raw).map(Self::from)
	}

	fn to_wkt_body(&self) -> String {
		format!("({self})")
	}

	fn from_wkt_body(body: &str) -> Result<Self> {
		Self::parse_text(wkt::unwrap_parens(body)?)
	}

	fn write_wkb_body<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>) {
		self.write_fragment(writer);
	}

	fn read_wkb_body<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self> {
		Self::read_fragment(reader)
	}
}

impl WkbFragment for Point {
	fn write_fragment<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>) {
		wkb::write_point(writer, self);
	}

	fn read_fragment<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self> {
		wkb::read_point(reader)
	}
}

impl Display for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.x, self.y)
	}
}

impl Debug for Point {
	/// Formats the point as `[x, y]`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{:?}, {:?}]", self.x, self.y)
	}
}

impl From<[f64; 2]> for Point {
	fn from(value: [f64; 2]) -> Self {
		Self::new(value[0], value[1])
	}
}

impl From<&[f64; 2]> for Point {
	fn from(value: &[f64; 2]) -> Self {
		Self::new(value[0], value[1])
	}
}

impl From<(f64, f64)> for Point {
	fn from(value: (f64, f64)) -> Self {
		Self::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Point {
	fn from(value: &(f64, f64)) -> Self {
		Self::new(value.0, value.1)
	}
}

impl From<&Point> for Point {
	fn from(value: &Point) -> Self {
		*value
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;
	use geoform_core::GeoError;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(4.0, 9.5, "4 9.5")]
	#[case(-0.5, 1e21, "-0.5 1000000000000000000000")]
	#[case(0.1, 2.0 / 3.0, "0.1 0.6666666666666666")]
	fn to_text(#[case] x: f64, #[case] y: f64, #[case] expected: &str) -> Result<()> {
		let point = Point::new(x, y);
		assert_eq!(point.to_text(), expected);
		assert_eq!(Point::parse_text(expected)?, point);
		Ok(())
	}

	#[test]
	fn to_binary_is_16_bytes() -> Result<()> {
		let point = Point::new(4.0, 9.5);
		for order in [Endianness::BigEndian, Endianness::LittleEndian] {
			let data = point.to_binary(order);
			assert_eq!(data.len(), 16);
			assert_eq!(Point::from_binary(&data, order)?, point);
		}
		assert_eq!(&point.to_binary(Endianness::BigEndian)[0..8], &4.0f64.to_be_bytes());
		assert_eq!(&point.to_binary(Endianness::LittleEndian)[8..16], &9.5f64.to_le_bytes());
		Ok(())
	}

	#[test]
	fn wkt() -> Result<()> {
		let point = Point::new(4.0, 9.5);
		assert_eq!(point.to_wkt(), "POINT (4 9.5)");
		assert_eq!(Point::from_wkt("POINT (4 9.5)")?, point);
		assert_eq!(Point::from_wkt("point(4   9.5)")?, point);
		assert_eq!(Point::from_wkt(" POINT ( 4 9.5 ) ")?, point);
		Ok(())
	}

	#[rstest]
	#[case("POINT (1 2 3)", GeoError::InvalidDimension(3))]
	#[case(
		"LINESTRING (1 2,3 4,5 6)",
		GeoError::FormatMismatch { expected: "Point", found: "LineString".to_string() }
	)]
	fn wkt_errors(#[case] text: &str, #[case] error: GeoError) {
		assert_eq!(Point::from_wkt(text), Err(error));
	}

	#[test]
	fn wkt_parse_failures() {
		for text in ["POINT ()", "POINT (a b)", "POINT 1 2", "(1 2)", "POINT (1 2,3 4)"] {
			assert!(matches!(Point::from_wkt(text), Err(GeoError::ParseFailure(_))), "{text}");
		}
	}

	#[test]
	fn wkb_round_trip() -> Result<()> {
		let point = Point::new(-122.5, 37.25);
		for order in [Endianness::BigEndian, Endianness::LittleEndian] {
			let data = point.to_wkb(order);
			assert_eq!(data.len(), 21);
			assert_eq!(data[0], order.as_flag());
			assert_eq!(Point::from_wkb(&data)?, point);
		}
		Ok(())
	}

	#[test]
	fn json() -> Result<()> {
		let point = Point::new(4.0, 9.5);
		let json = point.to_json()?;
		assert_eq!(json, r#"{"type":"Point","coordinates":[4.0,9.5]}"#);
		assert_eq!(Point::from_json(&json)?, point);
		assert_eq!(Point::from_json(r#"{"type":"Point","coordinates":[4,9.5]}"#)?, point);
		Ok(())
	}

	#[test]
	fn json_keeps_full_precision() -> Result<()> {
		let values = [
			(111.520_627_183_947_17, 109.277_895_992_541_63),
			(0.1 + 0.2, 1.0 / 3.0),
			(-179.999_999_999_999_97, 89.999_999_999_999_99),
			(f64::MIN_POSITIVE, -f64::MAX),
		];
		for (x, y) in values {
			let point = Point::new(x, y);
			let decoded = Point::from_json(&point.to_json()?)?;
			assert_eq!(decoded.x.to_bits(), x.to_bits());
			assert_eq!(decoded.y.to_bits(), y.to_bits());
		}
		Ok(())
	}

	#[rstest]
	#[case(r#"{"type":"Point","coordinates":[1]}"#, GeoError::InvalidDimension(1))]
	#[case(r#"{"type":"Point","coordinates":[1,2,3]}"#, GeoError::InvalidDimension(3))]
	#[case(
		r#"{"type":"Polygon","coordinates":[1,2]}"#,
		GeoError::FormatMismatch { expected: "Point", found: "Polygon".to_string() }
	)]
	#[case(r#"{"type":"Circle","coordinates":[1,2]}"#, GeoError::UnrecognizedType("Circle".to_string()))]
	fn json_errors(#[case] json: &str, #[case] error: GeoError) {
		assert_eq!(Point::from_json(json), Err(error));
	}

	#[test]
	fn conversions_and_debug() {
		let point = Point::new(1.0, 2.0);
		assert_eq!(Point::from([1.0, 2.0]), point);
		assert_eq!(Point::from(&(1.0, 2.0)), point);
		assert_eq!(point.as_array(), [1.0, 2.0]);
		assert_eq!(format!("{point:?}"), "[1.0, 2.0]");
	}
}
