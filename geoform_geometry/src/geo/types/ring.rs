use super::{LineString, Point, macros::impl_composite};
use crate::{
	geojson,
	wkb::{self, WkbFragment},
	wkt,
};
use geoform_core::{
	ByteOrderFlag, Endianness, GeoError, Result,
	io::{ValueReaderSlice, ValueWriterBlob},
};

/// A closed boundary loop of a polygon.
///
/// The points are stored in open form: the first point is not repeated at the end.
/// Every serialized form ([`Self::to_text`], [`Self::to_binary`], [`Self::to_coords`])
/// writes the closing point, and every parser checks it against the first point and
/// strips it. The closing point matches when each coordinate compares equal or has the
/// same bit pattern, so rings holding `NaN` still round-trip.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRing(Vec<Point>);

fn closes(first: &Point, last: &Point) -> bool {
	let same = |a: f64, b: f64| a == b || a.to_bits() == b.to_bits();
	same(first.x, last.x) && same(first.y, last.y)
}

impl LinearRing {
	const TAG: &'static str = "LinearRing";

	/// Minimum number of stored (distinct) points.
	pub const MIN_POINTS: usize = 3;

	/// Builds a ring from an open or closed sequence of points.
	///
	/// A closing point equal to the first point is dropped.
	pub fn new(mut points: Vec<Point>) -> Result<Self> {
		if points.len() > 1 && points.first().zip(points.last()).is_some_and(|(a, b)| closes(a, b)) {
			points.pop();
		}
		if points.len() < Self::MIN_POINTS {
			return Err(GeoError::TooFewPoints {
				expected: Self::MIN_POINTS,
				found: points.len(),
			});
		}
		Ok(Self(points))
	}

	/// Builds a ring from a serialized, closed sequence of points.
	pub fn from_closed(mut points: Vec<Point>) -> Result<Self> {
		let (Some(first), Some(last)) = (points.first(), points.last()) else {
			return Err(GeoError::TooFewPoints {
				expected: Self::MIN_POINTS + 1,
				found: 0,
			});
		};
		if points.len() <= Self::MIN_POINTS {
			return Err(GeoError::TooFewPoints {
				expected: Self::MIN_POINTS + 1,
				found: points.len(),
			});
		}
		if !closes(first, last) {
			return Err(GeoError::RingNotClosed {
				first: first.as_array(),
				last: last.as_array(),
			});
		}
		points.pop();
		Ok(Self(points))
	}

	/// Iterates the stored points followed by the first point again.
	pub fn closed_points(&self) -> impl Iterator<Item = &Point> {
		self.0.iter().chain(self.0.first())
	}

	fn closed_len(&self) -> usize {
		self.0.len() + 1
	}

	/// Returns `"(x y,x y,...)"` in closed form.
	#[must_use]
	pub fn to_text(&self) -> String {
		wkt::format_points(self.closed_points())
	}

	pub fn parse_text(text: &str) -> Result<Self> {
		Self::from_closed(wkt::parse_points(text)?)
	}

	/// Returns the closed point count and points without WKB header.
	#[must_use]
	pub fn to_binary(&self, order: Endianness) -> Vec<u8> {
		wkb::encode_fragment(self, order)
	}

	pub fn from_binary(data: &[u8], order: Endianness) -> Result<Self> {
		wkb::decode_fragment(data, order)
	}

	/// Writes the ring as it appears inside a WKB polygon body.
	pub fn write_wkb_body<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>) {
		wkb::write_points(writer, self.closed_len(), self.closed_points());
	}

	pub fn read_wkb_body<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self> {
		let count = wkb::read_count(reader)?;
		if count <= Self::MIN_POINTS {
			return Err(GeoError::TooFewPoints {
				expected: Self::MIN_POINTS + 1,
				found: count,
			});
		}
		Self::from_closed(wkb::read_points(reader, count)?)
	}

	/// Returns the closed coordinate list.
	#[must_use]
	pub fn to_coords(&self) -> Vec<[f64; 2]> {
		self.closed_points().map(Point::as_array).collect()
	}

	/// Builds a ring from a closed coordinate list.
	pub fn from_coords(coords: Vec<[f64; 2]>) -> Result<Self> {
		Self::from_closed(coords.into_iter().map(Point::from).collect())
	}

	pub(crate) fn from_raw_coords(raw: Vec<Vec<f64>>) -> Result<Self> {
		Self::from_coords(geojson::positions(raw)?)
	}

	/// Returns the closed line string that traces this ring.
	#[must_use]
	pub fn to_line_string(&self) -> LineString {
		LineString::new(self.closed_points().copied().collect())
	}

	/// Writes `{"type":"LinearRing","coordinates":[...]}`.
	///
	/// This is not a GeoJSON geometry; it is meant for stores that keep rings on their own.
	pub fn to_tagged_json(&self) -> Result<String> {
		geojson::write_tagged(Self::TAG, &self.to_coords())
	}

	pub fn from_tagged_json(json: &str) -> Result<Self> {
		Self::from_raw_coords(geojson::read_tagged(json, Self::TAG)?)
	}
}

impl WkbFragment for LinearRing {
	fn write_fragment<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>) {
		self.write_wkb_body(writer);
	}

	fn read_fragment<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self> {
		Self::read_wkb_body(reader)
	}
}

impl<T> TryFrom<Vec<T>> for LinearRing
where
	Point: From<T>,
{
	type Error = GeoError;

	fn try_from(value: Vec<T>) -> Result<Self> {
		Self::new(value.into_iter().map(Point::from).collect())
	}
}

impl_composite!(LinearRing, Point);
