//! ntamap configuration.
//!
//! A YAML file with two optional sections:
//! - `columns`: the CSV header names of the dataset columns ([`ntamap_geometry::ColumnNames`])
//! - `output`: GeoJSON output settings ([`OutputConfig`])
//!
//! Command line flags override the values read from the file.

mod main;
mod output;

pub use main::Config;
pub use output::OutputConfig;
