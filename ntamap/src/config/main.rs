use super::OutputConfig;
use anyhow::{Context, Result};
use ntamap_geometry::ColumnNames;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// CSV header names of the dataset columns
	#[serde(default)]
	pub columns: ColumnNames,

	/// GeoJSON output settings
	#[serde(default)]
	pub output: OutputConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse config file {path:?}"))
	}

	/// Loads the config file if one is given, the defaults otherwise.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		match path {
			Some(path) => Config::from_path(path),
			None => Ok(Config::default()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::path::PathBuf;

	#[test]
	fn parse_example_config() {
		let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../testdata/config.yml");
		let cfg = Config::from_path(&path).unwrap();

		assert_eq!(
			cfg,
			Config {
				columns: ColumnNames {
					name: "nta_name".to_string(),
					borough: "boro_name".to_string(),
					code: "nta_code".to_string(),
					geometry: "wkt".to_string(),
				},
				output: OutputConfig {
					precision: Some(6),
					pretty: Some(true),
				},
			}
		);
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
	}

	#[test]
	fn parse_partial_columns() {
		let cfg = Config::from_string("columns:\n  geometry: wkt\n").unwrap();
		assert_eq!(cfg.columns.geometry, "wkt");
		assert_eq!(cfg.columns.name, "NTAName");
		assert_eq!(cfg.output, OutputConfig::default());
	}

	#[test]
	fn parse_invalid_config() {
		assert!(Config::from_string("output:\n  precission: 3").is_err());
		assert!(Config::from_string("output:\n  precision: -1").is_err());
		assert!(Config::from_string("server: {}").is_err());
	}

	#[test]
	fn load_without_path() {
		assert_eq!(Config::load(None).unwrap(), Config::default());
	}

	#[test]
	fn load_missing_file() {
		let err = Config::load(Some(Path::new("../testdata/missing.yml"))).unwrap_err();
		assert_eq!(err.to_string(), "Failed to open config file \"../testdata/missing.yml\"");
	}
}
