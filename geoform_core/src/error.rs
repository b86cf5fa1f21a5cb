//! Defines [`GeoError`], representing all errors returned by the geoform codecs.

use thiserror::Error;

/// Enum with all errors returned while building, encoding or decoding geometries.
///
/// Every variant carries the offending value or a fragment of the raw input.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeoError {
	/// The encoded type code or tag names a known geometry kind, but not the requested one.
	#[error("expected {expected}, found {found}")]
	FormatMismatch { expected: &'static str, found: String },

	/// The encoded type code or tag does not name any known geometry kind.
	#[error("unrecognized geometry type: {0}")]
	UnrecognizedType(String),

	/// Fewer points than the shape requires.
	#[error("too few points: expected at least {expected}, found {found}")]
	TooFewPoints { expected: usize, found: usize },

	/// A coordinate does not have exactly two values.
	#[error("coordinates must have exactly 2 values, found {0}")]
	InvalidDimension(usize),

	/// Text does not match the expected grammar.
	#[error("could not parse: {0}")]
	ParseFailure(String),

	/// Binary input ends before the declared structure does.
	#[error("input truncated: needed {needed} bytes, but only {remaining} remaining")]
	TruncatedInput { needed: u64, remaining: u64 },

	/// The geometry of a GeoJSON feature is not a Point, LineString or Polygon.
	#[error("unsupported feature geometry: {0}")]
	UnsupportedFeatureGeometry(String),

	/// The closing point of a serialized ring differs from its first point.
	#[error("ring is not closed: first point {first:?}, last point {last:?}")]
	RingNotClosed { first: [f64; 2], last: [f64; 2] },

	/// A WKB byte-order flag other than 0 or 1.
	#[error("invalid byte order flag {0}")]
	InvalidByteOrder(u8),
}

/// Result type used throughout geoform.
pub type Result<T> = std::result::Result<T, GeoError>;
