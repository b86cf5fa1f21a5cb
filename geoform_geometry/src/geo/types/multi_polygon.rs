use super::{GeometryTrait, Polygon, macros::impl_from_array};
use crate::{wkb, wkt};
use geoform_core::{
	ByteOrderFlag, GeometryType, Result,
	io::{ValueReaderSlice, ValueWriterBlob},
};

/// Smallest WKB block of a nested polygon: order flag, type code and ring count.
const MIN_POLYGON_SIZE: u64 = 9;

/// A collection of polygons, without any overlap or validity checks.
///
/// In WKB every polygon is written as a complete block with its own order flag and
/// type code, so a multipolygon can mix byte orders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
	#[must_use]
	pub fn new(polygons: Vec<Polygon>) -> Self {
		Self(polygons)
	}
}

impl GeometryTrait for MultiPolygon {
	const GEOMETRY_TYPE: GeometryType = GeometryType::MultiPolygon;
	type Coords = Vec<Vec<Vec<[f64; 2]>>>;
	type RawCoords = Vec<Vec<Vec<Vec<f64>>>>;

	fn to_coords(&self) -> Self::Coords {
		self.0.iter().map(Polygon::to_coords).collect()
	}

	fn from_coords(coords: Self::Coords) -> Result<Self> {
		coords.into_iter().map(Polygon::from_coords).collect::<Result<_>>().map(Self)
	}

	fn from_raw_coords(raw: Self::RawCoords) -> Result<Self> {
		raw
			.into_iter()
			.map(Polygon::from_raw_coords)
			.collect::<Result<_>>()
			.map(Self)
	}

	fn to_wkt_body(&self) -> String {
		wkt::format_groups(self.0.iter().map(Polygon::to_wkt_body))
	}

	fn from_wkt_body(body: &str) -> Result<Self> {
		wkt::split_groups(body)?
			.into_iter()
			.map(Polygon::from_wkt_body)
			.collect::<Result<_>>()
			.map(Self)
	}

	fn write_wkb_body<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>) {
		writer.write_count(self.0.len());
		for polygon in &self.0 {
			wkb::write_block(polygon, writer);
		}
	}

	fn read_wkb_body<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self> {
		let count = wkb::read_count(reader)?;
		reader.ensure_remaining(count as u64 * MIN_POLYGON_SIZE)?;
		(0..count)
			.map(|_| wkb::read_block::<Polygon, E>(reader))
			.collect::<Result<_>>()
			.map(Self)
	}
}

impl_from_array!(MultiPolygon, Polygon);
