use super::*;
use crate::{geojson, wkb, wkt};
use geoform_core::{Endianness, GeometryType, Result};
use std::{
	fmt::{Debug, Display},
	str::FromStr,
};

/// Any geometry value, for callers that do not know the kind in advance.
///
/// Each `from_*` decoder looks up the kind once (WKT keyword, WKB type code or GeoJSON
/// `type` tag) and returns the matching variant; decoders never return
/// [`Geometry::LinearRing`]. A ring is encoded as the closed [`LineString`] it traces.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Point),
	LineString(LineString),
	LinearRing(LinearRing),
	Polygon(Polygon),
	MultiPolygon(MultiPolygon),
}

impl Geometry {
	/// The kind this value is encoded as.
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) | Geometry::LinearRing(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
		}
	}

	/// The GeoJSON `type` name this value is encoded with.
	pub fn type_name(&self) -> &'static str {
		self.geometry_type().name()
	}

	pub fn to_wkt(&self) -> String {
		match self {
			Geometry::Point(g) => g.to_wkt(),
			Geometry::LineString(g) => g.to_wkt(),
			Geometry::LinearRing(g) => g.to_line_string().to_wkt(),
			Geometry::Polygon(g) => g.to_wkt(),
			Geometry::MultiPolygon(g) => g.to_wkt(),
		}
	}

	pub fn to_wkb(&self, order: Endianness) -> Vec<u8> {
		match self {
			Geometry::Point(g) => g.to_wkb(order),
			Geometry::LineString(g) => g.to_wkb(order),
			Geometry::LinearRing(g) => g.to_line_string().to_wkb(order),
			Geometry::Polygon(g) => g.to_wkb(order),
			Geometry::MultiPolygon(g) => g.to_wkb(order),
		}
	}

	pub fn to_json(&self) -> Result<String> {
		match self {
			Geometry::Point(g) => g.to_json(),
			Geometry::LineString(g) => g.to_json(),
			Geometry::LinearRing(g) => g.to_line_string().to_json(),
			Geometry::Polygon(g) => g.to_json(),
			Geometry::MultiPolygon(g) => g.to_json(),
		}
	}

	pub fn from_wkt(text: &str) -> Result<Self> {
		let (geometry_type, body) = wkt::split_keyword(text)?;
		log::trace!("decoding WKT {geometry_type} from {} characters", text.len());
		Ok(match geometry_type {
			GeometryType::Point => Geometry::Point(Point::from_wkt_body(body)?),
			GeometryType::LineString => Geometry::LineString(LineString::from_wkt_body(body)?),
			GeometryType::Polygon => Geometry::Polygon(Polygon::from_wkt_body(body)?),
			GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::from_wkt_body(body)?),
		})
	}

	pub fn from_wkb(data: &[u8]) -> Result<Self> {
		Ok(match wkb::peek_type(data)? {
			GeometryType::Point => Geometry::Point(wkb::decode(data)?),
			GeometryType::LineString => Geometry::LineString(wkb::decode(data)?),
			GeometryType::Polygon => Geometry::Polygon(wkb::decode(data)?),
			GeometryType::MultiPolygon => Geometry::MultiPolygon(wkb::decode(data)?),
		})
	}

	pub fn from_json(json: &str) -> Result<Self> {
		Ok(match GeometryType::from_name(&geojson::read_tag(json)?)? {
			GeometryType::Point => Geometry::Point(Point::from_json(json)?),
			GeometryType::LineString => Geometry::LineString(LineString::from_json(json)?),
			GeometryType::Polygon => Geometry::Polygon(Polygon::from_json(json)?),
			GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::from_json(json)?),
		})
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::LinearRing(g) => ("LinearRing", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::MultiPolygon(g) => ("MultiPolygon", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}

impl Display for Geometry {
	/// Writes the geometry as WKT.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_wkt())
	}
}

impl FromStr for Geometry {
	type Err = geoform_core::GeoError;

	/// Parses WKT.
	fn from_str(s: &str) -> Result<Self> {
		Self::from_wkt(s)
	}
}

macro_rules! impl_from_variant {
	($($t:ident),*) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$t(value)
			}
		}
	)*}
}

impl_from_variant!(Point, LineString, LinearRing, Polygon, MultiPolygon);
