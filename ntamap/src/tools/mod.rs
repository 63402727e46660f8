pub mod convert;
pub mod probe;

use anyhow::Result;
use ntamap::{
	config::Config,
	geometry::{CollectionCache, read_nta_csv_file},
};
use std::path::{Path, PathBuf};

/// Loads the configuration and the dataset it describes.
fn load_dataset(input_file: &Path, config_file: Option<&PathBuf>) -> Result<(Config, CollectionCache)> {
	let config = Config::load(config_file.map(PathBuf::as_path))?;
	let rows = read_nta_csv_file(input_file, &config.columns)?;
	Ok((config, CollectionCache::new(rows)))
}
