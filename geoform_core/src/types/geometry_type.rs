use crate::{GeoError, Result};
use std::fmt::Display;

/// The geometry kinds that can appear at the top level of an encoded document.
///
/// One table drives all three formats: the WKB type code, the WKT keyword and the
/// GeoJSON `type` member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point = 1,
	LineString = 2,
	Polygon = 3,
	MultiPolygon = 6,
}

impl GeometryType {
	pub const ALL: [GeometryType; 4] = [
		GeometryType::Point,
		GeometryType::LineString,
		GeometryType::Polygon,
		GeometryType::MultiPolygon,
	];

	/// The 4-byte WKB geometry type code.
	pub fn wkb_code(self) -> u32 {
		self as u32
	}

	/// The uppercase WKT keyword.
	pub fn wkt_keyword(self) -> &'static str {
		match self {
			GeometryType::Point => "POINT",
			GeometryType::LineString => "LINESTRING",
			GeometryType::Polygon => "POLYGON",
			GeometryType::MultiPolygon => "MULTIPOLYGON",
		}
	}

	/// The GeoJSON `type` name.
	pub fn name(self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPolygon => "MultiPolygon",
		}
	}

	pub fn from_wkb_code(code: u32) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|t| t.wkb_code() == code)
			.ok_or_else(|| GeoError::UnrecognizedType(format!("WKB type code {code}")))
	}

	pub fn from_wkt_keyword(keyword: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|t| t.wkt_keyword() == keyword)
			.ok_or_else(|| GeoError::UnrecognizedType(keyword.to_string()))
	}

	pub fn from_name(name: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|t| t.name() == name)
			.ok_or_else(|| GeoError::UnrecognizedType(name.to_string()))
	}

	/// Fails with [`GeoError::FormatMismatch`] unless `self` is the `requested` kind.
	pub fn expect(self, requested: GeometryType) -> Result<()> {
		if self == requested {
			Ok(())
		} else {
			Err(GeoError::FormatMismatch {
				expected: requested.name(),
				found: self.name().to_string(),
			})
		}
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(GeometryType::Point, 1, "POINT", "Point")]
	#[case(GeometryType::LineString, 2, "LINESTRING", "LineString")]
	#[case(GeometryType::Polygon, 3, "POLYGON", "Polygon")]
	#[case(GeometryType::MultiPolygon, 6, "MULTIPOLYGON", "MultiPolygon")]
	fn lookup_table(#[case] kind: GeometryType, #[case] code: u32, #[case] keyword: &str, #[case] name: &str) {
		assert_eq!(kind.wkb_code(), code);
		assert_eq!(kind.wkt_keyword(), keyword);
		assert_eq!(kind.name(), name);
		assert_eq!(GeometryType::from_wkb_code(code), Ok(kind));
		assert_eq!(GeometryType::from_wkt_keyword(keyword), Ok(kind));
		assert_eq!(GeometryType::from_name(name), Ok(kind));
	}

	#[test]
	fn unknown_codes_are_unrecognized() {
		assert_eq!(
			GeometryType::from_wkb_code(4),
			Err(GeoError::UnrecognizedType("WKB type code 4".to_string()))
		);
		assert_eq!(
			GeometryType::from_name("LinearRing"),
			Err(GeoError::UnrecognizedType("LinearRing".to_string()))
		);
		assert!(GeometryType::from_wkt_keyword("point").is_err());
	}

	#[test]
	fn expect_reports_mismatch() {
		assert_eq!(GeometryType::Point.expect(GeometryType::Point), Ok(()));
		assert_eq!(
			GeometryType::Polygon.expect(GeometryType::Point),
			Err(GeoError::FormatMismatch {
				expected: "Point",
				found: "Polygon".to_string()
			})
		);
	}

	#[test]
	fn display_uses_geojson_name() {
		assert_eq!(GeometryType::MultiPolygon.to_string(), "MultiPolygon");
	}
}
