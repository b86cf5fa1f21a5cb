//! Geometry values with WKT, WKB and GeoJSON codecs.
//!
//! Every concrete type ([`Point`], [`LineString`], [`Polygon`], [`MultiPolygon`])
//! implements [`GeometryTrait`], which provides `to_wkt`/`from_wkt`, `to_wkb`/`from_wkb`
//! and `to_json`/`from_json`. [`LinearRing`] has no top-level codec of its own; it is
//! encoded as part of a polygon.
//! [`Geometry`] decodes any supported kind from any of the three formats, and
//! [`Feature`]/[`FeatureCollection`] wrap geometries for GeoJSON.
//!
//! ```rust
//! use geoform_geometry::{Endianness, GeometryTrait, LinearRing, Point, Polygon};
//!
//! let point = Point::new(4.0, 9.5);
//! assert_eq!(point.to_wkt(), "POINT (4 9.5)");
//! assert_eq!(Point::from_wkt("POINT (4 9.5)").unwrap(), point);
//!
//! let ring = LinearRing::try_from(vec![[4.0, 9.5], [2.0, 9.5], [4.0, 5.5]]).unwrap();
//! let polygon = Polygon::new(ring, vec![]);
//! let wkb = polygon.to_wkb(Endianness::LittleEndian);
//! assert_eq!(Polygon::from_wkb(&wkb).unwrap(), polygon);
//! ```

mod geo;
pub mod geojson;
pub mod wkb;
pub mod wkt;

pub use geo::*;
pub use geoform_core::{Endianness, GeoError, GeometryType, Result};
