//! Building blocks shared by the geoform codecs.
//!
//! Contains the crate-wide [`GeoError`], the WKB byte-order flag ([`Endianness`]),
//! the [`GeometryType`] table that maps between WKB codes, WKT keywords and GeoJSON
//! type names, and the binary value reader/writer used by the WKB codec.

mod error;
pub mod io;
mod types;

pub use error::*;
pub use types::*;
