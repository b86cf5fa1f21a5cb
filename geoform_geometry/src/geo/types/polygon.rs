use super::{GeometryTrait, LinearRing, macros::impl_from_array};
use crate::{wkb, wkt};
use geoform_core::{
	ByteOrderFlag, GeometryType, Result,
	io::{ValueReaderSlice, ValueWriterBlob},
};

/// Smallest WKB encoding of a ring: an empty point count.
const MIN_RING_SIZE: u64 = 4;

/// A polygon made of rings. The first ring is the exterior boundary, the others are holes.
///
/// A polygon without rings is a valid empty value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon(Vec<LinearRing>);

impl Polygon {
	#[must_use]
	pub fn new(exterior: LinearRing, interiors: Vec<LinearRing>) -> Self {
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(exterior);
		rings.extend(interiors);
		Self(rings)
	}

	#[must_use]
	pub fn exterior(&self) -> Option<&LinearRing> {
		self.0.first()
	}

	#[must_use]
	pub fn interiors(&self) -> &[LinearRing] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for Polygon {
	const GEOMETRY_TYPE: GeometryType = GeometryType::Polygon;
	type Coords = Vec<Vec<[f64; 2]>>;
	type RawCoords = Vec<Vec<Vec<f64>>>;

	fn to_coords(&self) -> Self::Coords {
		self.0.iter().map(LinearRing::to_coords).collect()
	}

	fn from_coords(coords: Self::Coords) -> Result<Self> {
		coords.into_iter().map(LinearRing::from_coords).collect::<Result<_>>().map(Self)
	}

	fn from_raw_coords(raw: Self::RawCoords) -> Result<Self> {
		raw
			.into_iter()
			.map(LinearRing::from_raw_coords)
			.collect::<Result<_>>()
			.map(Self)
	}

	fn to_wkt_body(&self) -> String {
		wkt::format_groups(self.0.iter().map(LinearRing::to_text))
	}

	fn from_wkt_body(body: &str) -> Result<Self> {
		wkt::split_groups(body)?
			.into_iter()
			.map(LinearRing::parse_text)
			.collect::<Result<_>>()
			.map(Self)
	}

	fn write_wkb_body<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>) {
		writer.write_count(self.0.len());
		for ring in &self.0 {
			ring.write_wkb_body(writer);
		}
	}

	fn read_wkb_body<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self> {
		let count = wkb::read_count(reader)?;
		reader.ensure_remaining(count as u64 * MIN_RING_SIZE)?;
		(0..count)
			.map(|_| LinearRing::read_wkb_body(reader))
			.collect::<Result<_>>()
			.map(Self)
	}
}

impl_from_array!(Polygon, LinearRing);
