use crate::{GeoError, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order of the multi-byte fields in a WKB block.
///
/// The wire format only ever encodes one bit: `0` for big-endian (XDR) and `1` for
/// little-endian (NDR).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endianness {
	BigEndian,
	#[default]
	LittleEndian,
}

impl Endianness {
	/// Returns the order flag as written in byte 0 of a WKB block.
	pub fn as_flag(self) -> u8 {
		match self {
			Endianness::BigEndian => 0,
			Endianness::LittleEndian => 1,
		}
	}
}

impl TryFrom<u8> for Endianness {
	type Error = GeoError;

	fn try_from(flag: u8) -> Result<Self> {
		match flag {
			0 => Ok(Endianness::BigEndian),
			1 => Ok(Endianness::LittleEndian),
			_ => Err(GeoError::InvalidByteOrder(flag)),
		}
	}
}

impl From<Endianness> for u8 {
	fn from(value: Endianness) -> Self {
		value.as_flag()
	}
}

/// Links a `byteorder` type to the flag that announces it in a WKB header.
pub trait ByteOrderFlag: ByteOrder {
	const ENDIANNESS: Endianness;
}

impl ByteOrderFlag for BigEndian {
	const ENDIANNESS: Endianness = Endianness::BigEndian;
}

impl ByteOrderFlag for LittleEndian {
	const ENDIANNESS: Endianness = Endianness::LittleEndian;
}
