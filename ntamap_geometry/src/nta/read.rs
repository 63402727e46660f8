use super::NtaRow;
use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

/// The CSV header names of the dataset columns.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnNames {
	pub name: String,
	pub borough: String,
	/// Optional column; rows get an empty code when it is missing.
	pub code: String,
	pub geometry: String,
}

impl Default for ColumnNames {
	fn default() -> Self {
		Self {
			name: "NTAName".to_string(),
			borough: "BoroName".to_string(),
			code: "NTA2020".to_string(),
			geometry: "the_geom".to_string(),
		}
	}
}

/// Reads neighborhood rows from CSV data with a header line.
///
/// The name, borough and geometry columns must exist. Cells are passed on verbatim, so an
/// empty geometry cell becomes a row that the parser will skip.
pub fn read_nta_csv(reader: impl Read, columns: &ColumnNames) -> Result<Vec<NtaRow>> {
	let mut csv_reader = csv::Reader::from_reader(reader);
	let header = csv_reader.headers().context("Failed to read CSV headers")?.clone();

	let find = |column: &str| header.iter().position(|h| h.trim() == column);
	let require = |column: &str| find(column).ok_or_else(|| anyhow!("CSV is missing the column '{column}'"));

	let name_index = require(columns.name.as_str())?;
	let borough_index = require(columns.borough.as_str())?;
	let geometry_index = require(columns.geometry.as_str())?;
	let code_index = find(columns.code.as_str());

	let mut rows = Vec::new();
	for (index, record) in csv_reader.records().enumerate() {
		let record = record.with_context(|| format!("Failed to read CSV record {}", index + 1))?;
		let cell = |i: usize| record.get(i).unwrap_or_default().to_string();
		rows.push(NtaRow {
			name: cell(name_index),
			borough: cell(borough_index),
			code: code_index.map(cell).unwrap_or_default(),
			geometry: cell(geometry_index),
		});
	}

	Ok(rows)
}

pub fn read_nta_csv_file(path: &Path, columns: &ColumnNames) -> Result<Vec<NtaRow>> {
	let file = File::open(path).with_context(|| format!("Failed to open file at path: {path:?}"))?;
	let rows = read_nta_csv(file, columns).with_context(|| format!("Failed to read {path:?}"))?;
	debug!("read {} rows from {path:?}", rows.len());
	Ok(rows)
}
