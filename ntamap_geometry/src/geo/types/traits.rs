use serde_json::Value;
use std::fmt::Debug;

/// Shared by rings, polygons and multipolygons.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// The nested `coordinates` array of GeoJSON, rounded to `precision` decimals if given.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;

	/// `[x_min, y_min, x_max, y_max]` over all coordinates, `None` without any.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// A geometry that is an ordered list of its parts: rings of coordinates, polygons of rings,
/// multipolygons of polygons.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// For a polygon this is the exterior ring.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Merges the bounding boxes of several parts into one.
pub fn merge_bounds(parts: impl IntoIterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	parts.into_iter().flatten().reduce(|a, b| {
		[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
	})
}
