use crate::{geojson, wkb, wkt};
use geoform_core::{
	ByteOrderFlag, Endianness, GeometryType, Result,
	io::{ValueReaderSlice, ValueWriterBlob},
};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// Interface shared by every geometry that can be encoded at the top level of a
/// WKT, WKB or GeoJSON document.
///
/// Implementors supply the format-specific bodies; the provided methods add the
/// keyword, header or `type` member and perform the type check on decode.
pub trait GeometryTrait: Debug + Clone + PartialEq + Sized {
	/// The kind written into WKB headers, WKT keywords and GeoJSON `type` members.
	const GEOMETRY_TYPE: GeometryType;

	/// Nested coordinate arrays, shaped like the GeoJSON `coordinates` member.
	type Coords: Serialize;

	/// The same shape as [`Self::Coords`] with unchecked positions (`Vec<f64>`),
	/// as deserialized from JSON.
	type RawCoords: DeserializeOwned;

	/// Returns the coordinates as plain nested arrays.
	///
	/// Rings are returned in closed form.
	fn to_coords(&self) -> Self::Coords;

	/// Builds the geometry from plain nested arrays, checking the same invariants as
	/// the decoders.
	fn from_coords(coords: Self::Coords) -> Result<Self>;

	/// Checks that every position has exactly two values, then calls [`Self::from_coords`].
	fn from_raw_coords(raw: Self::RawCoords) -> Result<Self>;

	/// Writes the parenthesized WKT body, e.g. `(4 9.5)` for a point.
	fn to_wkt_body(&self) -> String;

	/// Parses a parenthesized WKT body.
	fn from_wkt_body(body: &str) -> Result<Self>;

	/// Writes everything after the WKB type code.
	fn write_wkb_body<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>);

	/// Reads everything after the WKB type code.
	fn read_wkb_body<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self>;

	/// Encodes the geometry as WKT, e.g. `POINT (4 9.5)`.
	fn to_wkt(&self) -> String {
		format!("{} {}", Self::GEOMETRY_TYPE.wkt_keyword(), self.to_wkt_body())
	}

	fn from_wkt(text: &str) -> Result<Self> {
		wkt::parse_geometry(text)
	}

	/// Encodes the geometry as a WKB block in the given byte order.
	fn to_wkb(&self, order: Endianness) -> Vec<u8> {
		wkb::encode(self, order)
	}

	fn from_wkb(data: &[u8]) -> Result<Self> {
		wkb::decode(data)
	}

	/// Encodes the geometry as a GeoJSON geometry object.
	fn to_json(&self) -> Result<String> {
		geojson::write_object(Self::GEOMETRY_TYPE, &self.to_coords())
	}

	fn from_json(json: &str) -> Result<Self> {
		Self::from_raw_coords(geojson::read_object(json, Self::GEOMETRY_TYPE)?)
	}
}

/// Read access to geometries that are sequences of simpler elements.
/// For example, a polygon is made of rings, and a ring is made of points.
///
/// There are no mutators: a changed geometry is rebuilt from [`Self::into_inner`].
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns the elements as a slice.
	fn as_slice(&self) -> &[Item];

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_slice().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_slice().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_slice().last()
	}
}
