use super::{ParseReport, parse_coordinates};
use crate::{CompositeGeometryTrait, RingGeometry};
use lazy_static::lazy_static;
use regex::Regex;

/// Rings with fewer coordinates are dropped.
pub const MIN_RING_COORDINATES: usize = 3;

lazy_static! {
	static ref RING_BOUNDARY: Regex = Regex::new(r"\)\s*,\s*\(").unwrap();
}

/// Splits the text of one polygon, e.g. `(0 0, 1 0, 1 1),(…)`, into its rings.
///
/// Ring lists are flat, so rings are separated by `),(` with optional whitespace. The first
/// returned ring is the exterior; rings with fewer than three coordinates are dropped, even when
/// that promotes a later ring to be the exterior.
pub fn extract_rings(text: &str, report: &mut ParseReport) -> Vec<RingGeometry> {
	let mut rings = Vec::new();
	for part in RING_BOUNDARY.split(text) {
		let cleaned = part.trim().trim_matches(['(', ')']);
		let ring = parse_coordinates(cleaned, report);
		if ring.len() >= MIN_RING_COORDINATES {
			rings.push(ring);
		} else {
			report.dropped_rings += 1;
		}
	}
	rings
}
