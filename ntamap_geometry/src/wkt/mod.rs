//! Lenient parsing of WKT `MULTIPOLYGON` strings.
//!
//! The parser is purely syntactic and works bottom-up:
//! - [`parse_coordinates`] turns `lon lat, lon lat, …` into a ring,
//! - [`extract_rings`] splits one polygon into its exterior and holes,
//! - [`extract_polygon_groups`] finds the `((…))` polygons of a multipolygon,
//! - [`parse_wkt_multipolygon`] ties them together and selects `Polygon` or `MultiPolygon`.
//!
//! Nothing here returns an error. Malformed input yields a [`SkipReason`], and every dropped
//! pair, ring or polygon is counted in a [`ParseReport`].

mod coordinates;
mod groups;
mod parse;
mod report;
mod rings;

pub use coordinates::*;
pub use groups::*;
pub use parse::*;
pub use report::*;
pub use rings::*;
