use super::{
	MIN_RING_COORDINATES, ParseReport, SkipReason, extract_polygon_groups, extract_rings, find_single_polygon_block,
	parse_coordinates,
};
use crate::{CompositeGeometryTrait, Geometry, PolygonGeometry};
use lazy_static::lazy_static;
use regex::Regex;

const KEYWORD: &str = "MULTIPOLYGON";

lazy_static! {
	static ref MULTIPOLYGON_BODY: Regex = Regex::new(r"(?s)^MULTIPOLYGON\s*\(\s*(.+)\s*\)$").unwrap();
}

/// The outcome of parsing one WKT string: the geometry, or why there is none, plus a record
/// of everything that was dropped on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct WktParse {
	pub geometry: Result<Geometry, SkipReason>,
	pub report: ParseReport,
}

impl WktParse {
	fn skipped(reason: SkipReason, report: ParseReport) -> Self {
		Self {
			geometry: Err(reason),
			report,
		}
	}

	pub fn into_geometry(self) -> Option<Geometry> {
		self.geometry.ok()
	}
}

/// Parses a WKT `MULTIPOLYGON` into a `Polygon` (one polygon) or `MultiPolygon` (several).
///
/// Parsing is lenient and never fails hard: unparseable pairs, rings with fewer than three
/// coordinates and polygons left without rings are dropped and counted in the report. When
/// no `((…))` group can be recognised, the first `(((…)))` block is read as a polygon with a
/// single ring.
pub fn parse_wkt_multipolygon(wkt: &str) -> WktParse {
	let mut report = ParseReport::default();
	let wkt = wkt.trim();

	if wkt.is_empty() {
		return WktParse::skipped(SkipReason::Empty, report);
	}
	if !wkt.starts_with(KEYWORD) {
		return WktParse::skipped(SkipReason::UnsupportedKind, report);
	}
	let Some(content) = MULTIPOLYGON_BODY.captures(wkt).and_then(|c| c.get(1)) else {
		return WktParse::skipped(SkipReason::StructureMismatch, report);
	};

	let scan = extract_polygon_groups(content.as_str());
	report.rejected_groups = scan.rejected;
	let found_groups = !scan.groups.is_empty();

	let mut polygons = Vec::with_capacity(scan.groups.len());
	for group in scan.groups {
		let rings = extract_rings(group, &mut report);
		if rings.is_empty() {
			report.dropped_polygons += 1;
		} else {
			polygons.push(PolygonGeometry(rings));
		}
	}

	let mut found_fallback = false;
	if !found_groups {
		if let Some(block) = find_single_polygon_block(wkt) {
			found_fallback = true;
			report.used_fallback = true;
			let ring = parse_coordinates(block, &mut report);
			if ring.len() >= MIN_RING_COORDINATES {
				polygons.push(PolygonGeometry(vec![ring]));
			} else {
				report.dropped_rings += 1;
				report.dropped_polygons += 1;
			}
		}
	}

	match Geometry::from_polygons(polygons) {
		Some(geometry) => WktParse {
			geometry: Ok(geometry),
			report,
		},
		None if found_groups || found_fallback => WktParse::skipped(SkipReason::NoValidPolygon, report),
		None => WktParse::skipped(SkipReason::StructureMismatch, report),
	}
}

impl Geometry {
	/// Parses a WKT `MULTIPOLYGON`, discarding the parse report.
	pub fn from_wkt(wkt: &str) -> Option<Geometry> {
		parse_wkt_multipolygon(wkt).into_geometry()
	}
}
