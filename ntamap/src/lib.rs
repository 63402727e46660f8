//! # ntamap
//!
//! Converts neighborhood (NTA) datasets with WKT `MULTIPOLYGON` geometries into GeoJSON
//! feature collections whose feature ids are the neighborhood names.

pub mod config;

pub use ntamap_geometry as geometry;
