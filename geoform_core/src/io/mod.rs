//! Binary value reader and writer used by the WKB codec.
//!
//! Both are generic over a [`byteorder::ByteOrder`], so a codec body is written once and
//! monomorphised for big- and little-endian streams.

mod value_reader_slice;
mod value_writer_blob;

pub use value_reader_slice::*;
pub use value_writer_blob::*;
