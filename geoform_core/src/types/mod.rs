mod endianness;
mod geometry_type;

pub use endianness::*;
pub use geometry_type::*;
