use anyhow::{Result, ensure};
use std::fmt::{self, Display};

/// Why a geometry string produced no geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkipReason {
	/// The string was empty or whitespace only.
	Empty,
	/// The string does not start with the `MULTIPOLYGON` keyword.
	UnsupportedKind,
	/// The bracket structure could not be recognised.
	StructureMismatch,
	/// Polygons were found, but none kept a ring with at least three coordinates.
	NoValidPolygon,
}

impl SkipReason {
	pub const ALL: [SkipReason; 4] = [
		SkipReason::Empty,
		SkipReason::UnsupportedKind,
		SkipReason::StructureMismatch,
		SkipReason::NoValidPolygon,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			SkipReason::Empty => "empty geometry",
			SkipReason::UnsupportedKind => "unsupported geometry kind",
			SkipReason::StructureMismatch => "structure mismatch",
			SkipReason::NoValidPolygon => "no valid polygon",
		}
	}
}

impl Display for SkipReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Counts everything the lenient parser silently omitted while parsing one geometry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
	/// Non-blank coordinate pairs that did not parse as two numbers.
	pub dropped_pairs: usize,
	/// Rings with fewer than three coordinates.
	pub dropped_rings: usize,
	/// Polygon groups without any retained ring.
	pub dropped_polygons: usize,
	/// Parenthesised groups that did not have the `((…))` polygon shape.
	pub rejected_groups: usize,
	/// Whether the single `(((…)))` fallback produced the result.
	pub used_fallback: bool,
}

impl ParseReport {
	pub fn is_clean(&self) -> bool {
		*self == ParseReport::default()
	}

	pub fn ensure_clean(&self) -> Result<()> {
		ensure!(self.is_clean(), "geometry was degraded while parsing: {self}");
		Ok(())
	}
}

impl Display for ParseReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_clean() {
			return f.write_str("clean");
		}
		let mut parts = Vec::new();
		for (count, label) in [
			(self.dropped_pairs, "dropped pairs"),
			(self.dropped_rings, "dropped rings"),
			(self.dropped_polygons, "dropped polygons"),
			(self.rejected_groups, "rejected groups"),
		] {
			if count > 0 {
				parts.push(format!("{count} {label}"));
			}
		}
		if self.used_fallback {
			parts.push("fallback used".to_string());
		}
		f.write_str(&parts.join(", "))
	}
}
