use super::*;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// The geometry of a single feature.
///
/// A parsed `MULTIPOLYGON` with one polygon is represented as `Polygon`; only two or more
/// polygons become a `MultiPolygon`.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	/// Selects the geometry type for a list of polygons: none for an empty list,
	/// `Polygon` for exactly one, `MultiPolygon` otherwise.
	pub fn from_polygons(mut polygons: Vec<PolygonGeometry>) -> Option<Self> {
		match polygons.len() {
			0 => None,
			1 => polygons.pop().map(Geometry::Polygon),
			_ => Some(Geometry::MultiPolygon(MultiPolygonGeometry(polygons))),
		}
	}

	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	pub fn get_type_name(&self) -> &'static str {
		match self {
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	/// Iterates over the polygons of this geometry in order.
	pub fn polygons(&self) -> impl Iterator<Item = &PolygonGeometry> {
		match self {
			Geometry::Polygon(g) => std::slice::from_ref(g).iter(),
			Geometry::MultiPolygon(g) => g.as_vec().iter(),
		}
	}

	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
		}
	}

	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let coordinates = match self {
			Geometry::Polygon(g) => g.to_coord_json(precision),
			Geometry::MultiPolygon(g) => g.to_coord_json(precision),
		};
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from(self.get_type_name()));
		obj.insert("coordinates".to_string(), coordinates);
		Value::Object(obj)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]]],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.get_type_name()).field(inner).finish()
	}
}
