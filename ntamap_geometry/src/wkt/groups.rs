use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref TRIPLE_PAREN_BLOCK: Regex = Regex::new(r"(?s)\(\(\((.+?)\)\)\)").unwrap();
}

/// The polygon groups found in the content of a `MULTIPOLYGON (…)`.
#[derive(Debug, Default, PartialEq)]
pub struct GroupScan<'a> {
	/// The inner text of each accepted `((…))` group, i.e. its ring list including the
	/// rings' own parentheses, in order.
	pub groups: Vec<&'a str>,
	/// Top-level groups that did not have the polygon shape, or were never closed.
	pub rejected: usize,
}

/// Scans the content of a multipolygon for polygon groups.
///
/// A group opens at a top-level `(` and closes when the paren depth returns to zero. It is
/// accepted when it is bounded by `((` and `))` and nests exactly one level below its own
/// parentheses, which is where the rings of a polygon live. Deeper nesting, single-paren groups
/// and unterminated groups are rejected. Stray `)` at top level are ignored.
pub fn extract_polygon_groups(content: &str) -> GroupScan<'_> {
	let mut scan = GroupScan::default();
	let mut depth = 0usize;
	let mut max_depth = 0usize;
	let mut start = 0usize;

	for (index, byte) in content.bytes().enumerate() {
		match byte {
			b'(' => {
				if depth == 0 {
					start = index;
					max_depth = 0;
				}
				depth += 1;
				max_depth = max_depth.max(depth);
			}
			b')' if depth > 0 => {
				depth -= 1;
				if depth == 0 {
					let inner = &content[start + 1..index];
					if max_depth == 2 && is_ring_list(inner) {
						scan.groups.push(inner);
					} else {
						scan.rejected += 1;
					}
				}
			}
			_ => {}
		}
	}

	if depth > 0 {
		scan.rejected += 1;
	}
	scan
}

fn is_ring_list(inner: &str) -> bool {
	inner.trim_start().starts_with('(') && inner.trim_end().ends_with(')')
}

/// Finds the text of the first `(((…)))` block, the shape of a multipolygon holding a
/// single simple polygon.
pub fn find_single_polygon_block(wkt: &str) -> Option<&str> {
	TRIPLE_PAREN_BLOCK
		.captures(wkt)
		.and_then(|captures| captures.get(1))
		.map(|m| m.as_str())
}
