use super::{AssemblyReport, NtaRow, assemble_features};
use crate::GeoCollection;
use log::{debug, info, warn};
use std::sync::OnceLock;

/// Owns the loaded dataset and the feature collection built from it.
///
/// The dataset never changes after construction, so the collection is assembled on the first
/// call to [`CollectionCache::get`] and every later call returns the same value. Create one cache
/// at startup and hand out references to it.
#[derive(Debug)]
pub struct CollectionCache {
	rows: Vec<NtaRow>,
	built: OnceLock<(GeoCollection, AssemblyReport)>,
}

impl CollectionCache {
	pub fn new(rows: Vec<NtaRow>) -> Self {
		Self {
			rows,
			built: OnceLock::new(),
		}
	}

	pub fn rows(&self) -> &[NtaRow] {
		&self.rows
	}

	/// Returns the feature collection, building it on first use.
	pub fn get(&self) -> &GeoCollection {
		&self.build().0
	}

	/// Returns what happened while building the collection, building it on first use.
	pub fn report(&self) -> &AssemblyReport {
		&self.build().1
	}

	pub fn is_built(&self) -> bool {
		self.built.get().is_some()
	}

	fn build(&self) -> &(GeoCollection, AssemblyReport) {
		self.built.get_or_init(|| {
			let (collection, report) = assemble_features(&self.rows);
			for skipped in &report.skipped {
				debug!("skip row {} ('{}'): {}", skipped.index + 1, skipped.name, skipped.reason);
			}
			if report.features == 0 && report.rows > 0 {
				warn!("none of {} rows has a usable geometry", report.rows);
			}
			info!("built feature collection: {report}");
			(collection, report)
		})
	}
}
