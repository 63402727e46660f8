// This module defines the geometric types produced by the WKT parser: `Coordinates`,
// `RingGeometry`, `PolygonGeometry` and `MultiPolygonGeometry`. They implement the shared
// `GeometryTrait` and `CompositeGeometryTrait` for GeoJSON conversion, bounds and container access.

mod coordinates;
mod macros;
mod multi_polygon;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use ring::*;
pub use traits::{CompositeGeometryTrait, GeometryTrait, merge_bounds};
