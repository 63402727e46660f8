use super::NtaRow;
use crate::{
	GeoCollection, GeoFeature, Geometry, NtaProperties,
	wkt::{ParseReport, SkipReason, parse_wkt_multipolygon},
};
use anyhow::{Result, bail, ensure};
use std::{
	collections::BTreeMap,
	fmt::{self, Display},
};

/// Builds the feature of one row, or `None` if its geometry does not parse.
pub fn assemble_feature(row: &NtaRow) -> Option<GeoFeature> {
	Geometry::from_wkt(&row.geometry).map(|geometry| feature_for_row(row, geometry))
}

fn feature_for_row(row: &NtaRow, geometry: Geometry) -> GeoFeature {
	GeoFeature::new(
		geometry,
		NtaProperties::new(row.name.as_str(), row.borough.as_str(), row.code.as_str()),
	)
}

/// Builds the features of all rows in order, leaving out rows without geometry.
pub fn assemble_features(rows: &[NtaRow]) -> (GeoCollection, AssemblyReport) {
	let mut report = AssemblyReport::default();
	let mut features = Vec::with_capacity(rows.len());

	for (index, row) in rows.iter().enumerate() {
		let parse = parse_wkt_multipolygon(&row.geometry);
		report.record(index, row, &parse.report, parse.geometry.as_ref().err().copied());
		if let Ok(geometry) = parse.geometry {
			features.push(feature_for_row(row, geometry));
		}
	}

	(GeoCollection::from(features), report)
}

/// A row that produced no feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
	/// Zero-based position in the input.
	pub index: usize,
	pub name: String,
	pub reason: SkipReason,
}

/// What happened to a whole dataset during assembly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssemblyReport {
	pub rows: usize,
	pub features: usize,
	pub skipped: Vec<SkippedRow>,
	/// Rows whose geometry lost pairs, rings or polygons, or needed the fallback.
	pub degraded_rows: usize,
	pub dropped_pairs: usize,
	pub dropped_rings: usize,
	pub dropped_polygons: usize,
	pub rejected_groups: usize,
	pub fallback_rows: usize,
}

impl AssemblyReport {
	fn record(&mut self, index: usize, row: &NtaRow, parse: &ParseReport, skip: Option<SkipReason>) {
		self.rows += 1;
		match skip {
			Some(reason) => self.skipped.push(SkippedRow {
				index,
				name: row.name.clone(),
				reason,
			}),
			None => self.features += 1,
		}
		if !parse.is_clean() {
			self.degraded_rows += 1;
		}
		self.dropped_pairs += parse.dropped_pairs;
		self.dropped_rings += parse.dropped_rings;
		self.dropped_polygons += parse.dropped_polygons;
		self.rejected_groups += parse.rejected_groups;
		if parse.used_fallback {
			self.fallback_rows += 1;
		}
	}

	/// Number of skipped rows per reason, for reasons that occurred.
	pub fn skipped_by_reason(&self) -> BTreeMap<SkipReason, usize> {
		let mut counts = BTreeMap::new();
		for row in &self.skipped {
			*counts.entry(row.reason).or_insert(0) += 1;
		}
		counts
	}

	pub fn is_clean(&self) -> bool {
		self.skipped.is_empty() && self.degraded_rows == 0
	}

	/// Fails if any row was skipped or lost part of its geometry.
	pub fn ensure_clean(&self) -> Result<()> {
		if let Some(first) = self.skipped.first() {
			bail!(
				"{} of {} rows have no geometry, first is row {} ('{}'): {}",
				self.skipped.len(),
				self.rows,
				first.index + 1,
				first.name,
				first.reason
			);
		}
		ensure!(
			self.degraded_rows == 0,
			"{} of {} rows lost part of their geometry while parsing",
			self.degraded_rows,
			self.rows
		);
		Ok(())
	}
}

impl Display for AssemblyReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} rows, {} features, {} skipped, {} degraded",
			self.rows,
			self.features,
			self.skipped.len(),
			self.degraded_rows
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	const SQUARE: &str = "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 1, 0 0)))";
	const TWO_PARTS: &str = "MULTIPOLYGON (((0 0,1 0,1 1,0 0)),((5 5,6 5,6 6,5 5)))";

	fn rows() -> Vec<NtaRow> {
		vec![
			NtaRow::new("Greenpoint", "Brooklyn", "BK0101", SQUARE),
			NtaRow::new("Broken", "Queens", "", "POLYGON ((0 0,1 0,1 1,0 0))"),
			NtaRow::new("City Island", "Bronx", "BX1002", TWO_PARTS),
			NtaRow::new("Empty", "Manhattan", "MN9991", ""),
			NtaRow::new("Tiny", "Staten Island", "SI0101", "MULTIPOLYGON (((0 0, 1 1)))"),
		]
	}

	#[test]
	fn assemble_feature_copies_row() {
		let feature = assemble_feature(&rows()[0]).unwrap();
		assert_eq!(feature.id, "Greenpoint");
		assert_eq!(feature.properties, NtaProperties::new("Greenpoint", "Brooklyn", "BK0101"));
		assert_eq!(feature.geometry.get_type_name(), "Polygon");
	}

	#[test]
	fn assemble_feature_skips_unparseable_rows() {
		let rows = rows();
		assert!(assemble_feature(&rows[1]).is_none());
		assert!(assemble_feature(&rows[3]).is_none());
		assert!(assemble_feature(&rows[4]).is_none());
	}

	#[test]
	fn features_keep_row_order() {
		let rows = rows();
		let (collection, _) = assemble_features(&rows);
		assert!(collection.len() <= rows.len());
		assert_eq!(collection.ids().collect::<Vec<_>>(), vec!["Greenpoint", "City Island"]);
		assert_eq!(collection.features[1].geometry.get_type_name(), "MultiPolygon");
	}

	#[test]
	fn report_counts_skips() {
		let (_, report) = assemble_features(&rows());
		assert_eq!(report.rows, 5);
		assert_eq!(report.features, 2);
		assert_eq!(
			report.skipped_by_reason(),
			BTreeMap::from([
				(SkipReason::Empty, 1),
				(SkipReason::UnsupportedKind, 1),
				(SkipReason::NoValidPolygon, 1),
			])
		);
		assert_eq!(report.skipped[0].index, 1);
		assert_eq!(report.skipped[0].name, "Broken");
		assert_eq!(report.degraded_rows, 1);
		assert_eq!(report.dropped_rings, 1);
		assert_eq!(report.to_string(), "5 rows, 2 features, 3 skipped, 1 degraded");
	}

	#[test]
	fn ensure_clean_names_first_skipped_row() {
		let (_, report) = assemble_features(&rows());
		assert_eq!(
			report.ensure_clean().unwrap_err().to_string(),
			"3 of 5 rows have no geometry, first is row 2 ('Broken'): unsupported geometry kind"
		);
	}

	#[test]
	fn ensure_clean_reports_degraded_rows() {
		let rows = vec![NtaRow::new("A", "B", "", "MULTIPOLYGON (((0 0, 1 0, x, 1 1)))")];
		let (collection, report) = assemble_features(&rows);
		assert_eq!(collection.len(), 1);
		assert_eq!(
			report.ensure_clean().unwrap_err().to_string(),
			"1 of 1 rows lost part of their geometry while parsing"
		);
	}

	#[test]
	fn clean_dataset() {
		let rows = vec![NtaRow::new("A", "B", "C", SQUARE)];
		let (_, report) = assemble_features(&rows);
		assert!(report.is_clean());
		assert!(report.ensure_clean().is_ok());
	}

	#[test]
	fn empty_dataset() {
		let (collection, report) = assemble_features(&[]);
		assert!(collection.is_empty());
		assert_eq!(report, AssemblyReport::default());
	}
}
