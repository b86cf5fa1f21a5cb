//! WKB (Well-Known Binary) framing.
//!
//! A WKB block is a 1-byte order flag, a 4-byte geometry type code in that order,
//! and a type-specific body. Nested blocks (the polygons of a multipolygon) carry
//! their own flag and type code, so [`read_block`] looks at the flag of every block
//! it reads and continues with a reader of that byte order.

use crate::{GeometryTrait, Point};
use byteorder::{BigEndian, LittleEndian};
use geoform_core::{
	ByteOrderFlag, Endianness, GeometryType, Result,
	io::{ValueReaderSlice, ValueWriterBlob},
};

/// Bytes per coordinate pair: two IEEE-754 doubles.
pub const POINT_SIZE: u64 = 16;

/// Encodes `geometry` as a WKB block in the given byte order.
pub fn encode<G: GeometryTrait>(geometry: &G, order: Endianness) -> Vec<u8> {
	match order {
		Endianness::BigEndian => encode_as::<G, BigEndian>(geometry),
		Endianness::LittleEndian => encode_as::<G, LittleEndian>(geometry),
	}
}

fn encode_as<G: GeometryTrait, E: ByteOrderFlag>(geometry: &G) -> Vec<u8> {
	let mut writer = ValueWriterBlob::<E>::new();
	write_block(geometry, &mut writer);
	writer.into_vec()
}

/// Writes order flag, type code and body of `geometry`.
pub fn write_block<G: GeometryTrait, E: ByteOrderFlag>(geometry: &G, writer: &mut ValueWriterBlob<E>) {
	writer.write_u8(E::ENDIANNESS.as_flag());
	writer.write_u32(G::GEOMETRY_TYPE.wkb_code());
	geometry.write_wkb_body(writer);
}

/// Decodes a complete WKB block of type `G`.
///
/// Bytes after the end of the block are ignored.
pub fn decode<G: GeometryTrait>(data: &[u8]) -> Result<G> {
	log::trace!("decoding WKB {} from {} bytes", G::GEOMETRY_TYPE, data.len());
	let mut reader = ValueReaderSlice::new_le(data);
	let geometry = read_block(&mut reader)?;
	if reader.has_remaining() {
		log::debug!(
			"ignoring {} trailing bytes after WKB {}",
			reader.remaining(),
			G::GEOMETRY_TYPE
		);
	}
	Ok(geometry)
}

/// Reads one block of type `G`, honoring the block's own order flag.
///
/// `reader` is advanced past the block; its own byte order is not used.
pub fn read_block<G: GeometryTrait, E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<G> {
	match Endianness::try_from(reader.read_u8()?)? {
		Endianness::BigEndian => read_block_as::<G, BigEndian, E>(reader),
		Endianness::LittleEndian => read_block_as::<G, LittleEndian, E>(reader),
	}
}

fn read_block_as<G: GeometryTrait, F: ByteOrderFlag, E: ByteOrderFlag>(outer: &mut ValueReaderSlice<'_, E>) -> Result<G> {
	let mut reader = outer.with_byte_order::<F>();
	GeometryType::from_wkb_code(reader.read_u32()?)?.expect(G::GEOMETRY_TYPE)?;
	let geometry = G::read_wkb_body(&mut reader)?;
	outer.set_position(reader.position())?;
	Ok(geometry)
}

/// Reads order flag and type code of the block at the start of `data`.
pub fn peek_type(data: &[u8]) -> Result<GeometryType> {
	let mut reader = ValueReaderSlice::new_le(data);
	let code = match Endianness::try_from(reader.read_u8()?)? {
		Endianness::BigEndian => reader.with_byte_order::<BigEndian>().read_u32()?,
		Endianness::LittleEndian => reader.read_u32()?,
	};
	GeometryType::from_wkb_code(code)
}

/// Values with a headerless WKB encoding that appear inside the bodies of larger geometries.
pub trait WkbFragment: Sized {
	fn write_fragment<E: ByteOrderFlag>(&self, writer: &mut ValueWriterBlob<E>);
	fn read_fragment<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Self>;
}

/// Encodes a fragment without order flag or type code.
pub fn encode_fragment<T: WkbFragment>(value: &T, order: Endianness) -> Vec<u8> {
	match order {
		Endianness::BigEndian => {
			let mut writer = ValueWriterBlob::new_be();
			value.write_fragment(&mut writer);
			writer.into_vec()
		}
		Endianness::LittleEndian => {
			let mut writer = ValueWriterBlob::new_le();
			value.write_fragment(&mut writer);
			writer.into_vec()
		}
	}
}

/// Decodes a fragment written in the given byte order.
pub fn decode_fragment<T: WkbFragment>(data: &[u8], order: Endianness) -> Result<T> {
	match order {
		Endianness::BigEndian => T::read_fragment(&mut ValueReaderSlice::new_be(data)),
		Endianness::LittleEndian => T::read_fragment(&mut ValueReaderSlice::new_le(data)),
	}
}

pub(crate) fn write_point<E: ByteOrderFlag>(writer: &mut ValueWriterBlob<E>, point: &Point) {
	writer.write_f64(point.x);
	writer.write_f64(point.y);
}

pub(crate) fn read_point<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<Point> {
	let x = reader.read_f64()?;
	let y = reader.read_f64()?;
	Ok(Point::new(x, y))
}

/// Writes a point count followed by the points, without per-point headers.
pub(crate) fn write_points<'a, E: ByteOrderFlag>(
	writer: &mut ValueWriterBlob<E>,
	count: usize,
	points: impl Iterator<Item = &'a Point>,
) {
	writer.write_count(count);
	for point in points {
		write_point(writer, point);
	}
}

pub(crate) fn read_count<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>) -> Result<usize> {
	Ok(reader.read_u32()? as usize)
}

/// Reads `count` points after checking that the buffer holds all of them.
pub(crate) fn read_points<E: ByteOrderFlag>(reader: &mut ValueReaderSlice<'_, E>, count: usize) -> Result<Vec<Point>> {
	reader.ensure_remaining(count as u64 * POINT_SIZE)?;
	(0..count).map(|_| read_point(reader)).collect()
}
