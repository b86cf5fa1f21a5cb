//! This module provides the `ValueReaderSlice` struct for reading values from a byte slice.
//!
//! # Overview
//!
//! The reader walks a borrowed slice with an explicit position. Every read checks the
//! remaining length first and fails with [`GeoError::TruncatedInput`] instead of reading
//! past the end. [`ValueReaderSlice::with_byte_order`] hands out a reader of a different
//! byte order at the same position, which is how nested WKB blocks that re-declare their
//! own order flag are decoded.
//!
//! # Examples
//!
//! ```rust
//! use geoform_core::io::ValueReaderSlice;
//!
//! let data = &[0x01, 0x02, 0x03, 0x04];
//!
//! let mut reader_le = ValueReaderSlice::new_le(data);
//! assert_eq!(reader_le.read_u32().unwrap(), 0x0403_0201);
//!
//! let mut reader_be = ValueReaderSlice::new_be(data);
//! assert_eq!(reader_be.read_u32().unwrap(), 0x0102_0304);
//! ```

use crate::{GeoError, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::marker::PhantomData;

/// Reads values from a byte slice using the byte order `E`.
#[derive(Clone, Debug)]
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	slice: &'a [u8],
	position: usize,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	/// Creates a new `ValueReaderSlice` from a byte slice, positioned at the start.
	///
	/// # Arguments
	///
	/// * `slice` - A reference to the byte slice to read.
	///
	/// # Returns
	///
	/// * A new `ValueReaderSlice` instance.
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			slice,
			position: 0,
		}
	}

	/// Returns a reader with byte order `F` that continues at the current position.
	///
	/// The returned reader has its own position; the caller moves this one forward with
	/// [`Self::set_position`] once the nested value is read.
	#[must_use]
	pub fn with_byte_order<F: ByteOrder>(&self) -> ValueReaderSlice<'a, F> {
		ValueReaderSlice {
			_phantom: PhantomData,
			slice: self.slice,
			position: self.position,
		}
	}

	/// Total length of the underlying slice in bytes.
	#[must_use]
	pub fn len(&self) -> usize {
		self.slice.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.slice.is_empty()
	}

	/// Current read position, counted from the start of the slice.
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Moves the read position.
	///
	/// # Arguments
	///
	/// * `position` - The new position. It may equal the length, which leaves nothing to read.
	///
	/// # Returns
	///
	/// * `Ok(())` if the position is within the slice.
	/// * [`GeoError::TruncatedInput`] if it lies past the end.
	pub fn set_position(&mut self, position: usize) -> Result<()> {
		if position > self.slice.len() {
			return Err(GeoError::TruncatedInput {
				needed: position as u64,
				remaining: self.slice.len() as u64,
			});
		}
		self.position = position;
		Ok(())
	}

	/// Number of bytes left after the current position.
	#[must_use]
	pub fn remaining(&self) -> usize {
		self.slice.len() - self.position
	}

	#[must_use]
	pub fn has_remaining(&self) -> bool {
		self.remaining() > 0
	}

	/// Fails unless at least `needed` bytes are left.
	///
	/// Decoders call this with the byte size implied by a declared element count before
	/// allocating anything for those elements.
	pub fn ensure_remaining(&self, needed: u64) -> Result<()> {
		let remaining = self.remaining() as u64;
		if needed > remaining {
			Err(GeoError::TruncatedInput { needed, remaining })
		} else {
			Ok(())
		}
	}

	fn take(&mut self, length: usize) -> Result<&'a [u8]> {
		self.ensure_remaining(length as u64)?;
		let bytes = &self.slice[self.position..self.position + length];
		self.position += length;
		Ok(bytes)
	}

	/// Reads a single byte, such as a WKB byte-order flag.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.take(1)?[0])
	}

	/// Reads a 4-byte unsigned integer in byte order `E`.
	///
	/// # Returns
	///
	/// * The value, or [`GeoError::TruncatedInput`] if fewer than 4 bytes are left. A failed
	///   read leaves the position unchanged.
	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(E::read_u32(self.take(4)?))
	}

	/// Reads an 8-byte IEEE 754 double in byte order `E`.
	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(E::read_f64(self.take(8)?))
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	/// Creates a new `ValueReaderSlice` with little-endian byte order.
	///
	/// # Arguments
	///
	/// * `slice` - A reference to the byte slice to read.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a> ValueReaderSlice<'a, BigEndian> {
	/// Creates a new `ValueReaderSlice` with big-endian byte order.
	///
	/// # Arguments
	///
	/// * `slice` - A reference to the byte slice to read.
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a, BigEndian> {
		ValueReaderSlice::new(slice)
	}
}
