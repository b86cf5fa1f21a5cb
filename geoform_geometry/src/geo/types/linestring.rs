use super::{GeometryTrait, Point, macros::impl_from_array};
use crate::{
	geojson,
	wkb::{self, WkbFragment},
	wkt,
};
use geoform_core::{
	ByteOrderFlag, Endianness, GeoError, GeometryType, Result,
	io::{ValueReaderSlice, ValueWriterBlob},
};

/// An ordered sequence of points that is not required to be closed.
///
/// Any number of points can be passed to [`LineString::new`]; the decoders require at
/// least [`LineString::MIN_POINTS`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString(Vec<Point>);

impl LineString {
	pub const MIN_POINTS: usize = 3;

	#[must_use]
	pub fn new(points: Vec<Point>) -> Self {
		Self(points)
	}

	/// Builds a line string with at least [`Self::MIN_POINTS`] points.
	pub fn checked(points: Vec<Point>) -> Result<Self> {
		if points.len() < Self::MIN_POINTS {
			return Err(GeoError::TooFewPoints {
				expected: Self::MIN_POINTS,
				found: points.len(),
			});
		}
		Ok(Self(points))
	}

	/// Returns `"(x y,x y,...)"`.
	#[must_use]
	pub fn to_text(&self) -> String {
		wkt::format_points(self.0.iter())
	}

	pub fn parse_text(text: &str) -> Result<Self> {
		Self::checked(wkt::parse_points(text)?)
	}

	/// Returns the point count and points without WKB header.
	#[must_use]
	pub fn to_binary(&self, order: Endianness) -> Vec<u8> {
		wkb::encode_fragment(self, order)
	}

	pub fn from_binary(data: &[u8], order: Endianness) -> Result<Self> {
		wkb::decode_fragment(data, order)
	}
}

impl GeometryTrait for LineString {
	const GEOMETRY_TYPE: GeometryType = GeometryType::LineString;
	type Coords = Vec<[f64; 2]>;
	type RawCoords = Vec<Vec<f64>>;

	fn to_coords(&self) -> Vec<[f64; 2]> {
		self.0.iter().map(Point::as_array).collect()
	}

	fn from_coords(coords: Vec<[f64; 2]>) -> Result<Self> {
		Self::checked(coords.into_iter().map(Point::from).collect())
	}

	fn from_raw_coords(raw: Vec<Vec<f64>>) -> Result<Self> {
		Self::from_coords(geojson::positions(raw)?)
	}

	fn to_wkt_body(&self) -> String {
		self.to_text()
	}

	fn from_wkt_body(body: &str) -> Result<Self> {
		Self::parse_text(body)
	}

	fn write_wkb_body<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>) {
		self.write_fragment(writer);
	}

	fn read_wkb_body<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self> {
		Self::read_fragment(reader)
	}
}

impl WkbFragment for LineString {
	fn write_fragment<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>) {
		wkb::write_points(writer, self.0.len(), self.0.iter());
	}

	fn read_fragment<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self> {
		let count = wkb::read_count(reader)?;
		Self::checked(wkb::read_points(reader, count)?)
	}
}

impl_from_array!(LineString, Point);
