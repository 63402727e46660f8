use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use serde_json::Value;
use std::fmt::Debug;

/// An ordered run of coordinates bounding a polygon, either its exterior or one of its holes.
///
/// Rings are kept exactly as parsed: closure (first == last) and orientation are not checked.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|coord| coord.to_json(precision)).collect::<Vec<_>>())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		let (first, rest) = self.0.split_first()?;
		let start = [first.lon(), first.lat(), first.lon(), first.lat()];
		Some(rest.iter().fold(start, |[x0, y0, x1, y1], c| {
			[x0.min(c.lon()), y0.min(c.lat()), x1.max(c.lon()), y1.max(c.lat())]
		}))
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
