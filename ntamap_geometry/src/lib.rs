//! Parses NTA neighborhood geometries from WKT `MULTIPOLYGON` strings and assembles them into
//! a GeoJSON feature collection keyed by neighborhood name.
//!
//! ## Usage Example
//!
//! ```rust
//! use ntamap_geometry::{CollectionCache, NtaRow};
//!
//! let cache = CollectionCache::new(vec![NtaRow::new(
//!     "Greenpoint",
//!     "Brooklyn",
//!     "BK0101",
//!     "MULTIPOLYGON (((-73.96 40.73, -73.94 40.73, -73.94 40.74, -73.96 40.73)))",
//! )]);
//!
//! let collection = cache.get();
//! assert_eq!(collection.ids().collect::<Vec<_>>(), vec!["Greenpoint"]);
//! ```

mod geo;
pub mod nta;
pub mod wkt;

pub use geo::*;
pub use nta::*;
