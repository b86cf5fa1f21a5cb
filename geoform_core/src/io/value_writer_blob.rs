//! This module provides the `ValueWriterBlob` struct for writing values to an in-memory buffer.
//!
//! # Examples
//!
//! ```rust
//! use geoform_core::io::ValueWriterBlob;
//!
//! let mut writer = ValueWriterBlob::new_be();
//! writer.write_u8(0);
//! writer.write_u32(1);
//! assert_eq!(writer.into_vec(), vec![0, 0, 0, 0, 1]);
//! ```

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::marker::PhantomData;

/// Writes values to a growing byte buffer using the byte order `E`.
///
/// Writing to memory cannot fail, so none of the write methods return a `Result`.
#[derive(Clone, Debug)]
pub struct ValueWriterBlob<E: ByteOrder> {
	_phantom: PhantomData<E>,
	data: Vec<u8>,
}

impl<E: ByteOrder> ValueWriterBlob<E> {
	/// Creates a new, empty `ValueWriterBlob`.
	///
	/// # Returns
	///
	/// * A new `ValueWriterBlob` instance with an empty buffer.
	#[must_use]
	pub fn new() -> ValueWriterBlob<E> {
		ValueWriterBlob {
			_phantom: PhantomData,
			data: Vec::new(),
		}
	}

	/// Creates a new `ValueWriterBlob` with room for `capacity` bytes.
	///
	/// # Arguments
	///
	/// * `capacity` - Number of bytes to reserve up front.
	#[must_use]
	pub fn with_capacity(capacity: usize) -> ValueWriterBlob<E> {
		ValueWriterBlob {
			_phantom: PhantomData,
			data: Vec::with_capacity(capacity),
		}
	}

	/// Number of bytes written so far.
	#[must_use]
	pub fn position(&self) -> usize {
		self.data.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Appends a single byte.
	pub fn write_u8(&mut self, value: u8) {
		self.data.push(value);
	}

	/// Appends a 4-byte unsigned integer in byte order `E`.
	pub fn write_u32(&mut self, value: u32) {
		let mut buf = [0u8; 4];
		E::write_u32(&mut buf, value);
		self.data.extend_from_slice(&buf);
	}

	/// Appends an 8-byte IEEE 754 double in byte order `E`.
	pub fn write_f64(&mut self, value: f64) {
		let mut buf = [0u8; 8];
		E::write_f64(&mut buf, value);
		self.data.extend_from_slice(&buf);
	}

	/// Writes a collection length as a 4-byte count.
	pub fn write_count(&mut self, count: usize) {
		self.write_u32(count as u32);
	}

	/// Consumes the writer and returns the written bytes.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.data
	}
}

impl ValueWriterBlob<LittleEndian> {
	/// Creates a new `ValueWriterBlob` with little-endian byte order.
	#[must_use]
	pub fn new_le() -> ValueWriterBlob<LittleEndian> {
		ValueWriterBlob::new()
	}
}

impl ValueWriterBlob<BigEndian> {
	/// Creates a new `ValueWriterBlob` with big-endian byte order.
	#[must_use]
	pub fn new_be() -> ValueWriterBlob<BigEndian> {
		ValueWriterBlob::new()
	}
}

impl<E: ByteOrder> Default for ValueWriterBlob<E> {
	fn default() -> Self {
		Self::new()
	}
}
