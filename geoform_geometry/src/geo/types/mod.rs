// The concrete geometry values and the traits they share.
// `LinearRing` keeps its points in open form; the closing point only exists in the
// serialized forms written and read by its codec methods.

mod linestring;
mod macros;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use linestring::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
