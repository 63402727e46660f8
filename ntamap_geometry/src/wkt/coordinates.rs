use super::ParseReport;
use crate::{Coordinates, RingGeometry};

/// Parses a comma-separated run of `lon lat` pairs.
///
/// A pair contributes a coordinate when it has at least two whitespace-separated tokens and the
/// first two parse as finite numbers; additional tokens are ignored. Other non-blank pairs are counted
/// in `report.dropped_pairs` and skipped.
pub fn parse_coordinates(text: &str, report: &mut ParseReport) -> RingGeometry {
	let mut coordinates = Vec::new();
	for pair in text.split(',') {
		let mut tokens = pair.split_whitespace();
		let (Some(lon), Some(lat)) = (tokens.next(), tokens.next()) else {
			if !pair.trim().is_empty() {
				report.dropped_pairs += 1;
			}
			continue;
		};
		match (lon.parse::<f64>(), lat.parse::<f64>()) {
			(Ok(lon), Ok(lat)) if lon.is_finite() && lat.is_finite() => coordinates.push(Coordinates::new(lon, lat)),
			_ => report.dropped_pairs += 1,
		}
	}
	RingGeometry(coordinates)
}
