use serde_json::{Value, json};
use std::fmt::Debug;

/// A `(longitude, latitude)` pair, stored in WKT `x y` order.
#[derive(Clone, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(lon: f64, lat: f64) -> Self {
		Self([lon, lat])
	}

	#[must_use]
	pub fn lon(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		if let Some(prec) = precision {
			let factor = 10f64.powi(prec as i32);
			let lon = (self.0[0] * factor).round() / factor;
			let lat = (self.0[1] * factor).round() / factor;
			json!([lon, lat])
		} else {
			json!(self.0)
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
