use super::{GeoFeature, merge_bounds};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io::Write;

/// An ordered list of features, rendered as a GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Feature ids in collection order.
	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.features.iter().map(|f| f.id.as_str())
	}

	/// Looks up a feature by exact (case-sensitive) id.
	pub fn get(&self, id: &str) -> Option<&GeoFeature> {
		self.features.iter().find(|f| f.id == id)
	}

	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.features.iter().map(|f| f.geometry.compute_bounds()))
	}

	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from("FeatureCollection"));
		let features_json = Value::from(self.features.iter().map(|f| f.to_json(precision)).collect::<Vec<_>>());
		obj.insert("features".to_string(), features_json);
		Value::Object(obj)
	}

	pub fn write_geojson(&self, mut writer: impl Write, precision: Option<u8>, pretty: bool) -> Result<()> {
		let json = self.to_json(precision);
		let written = if pretty {
			serde_json::to_writer_pretty(&mut writer, &json)
		} else {
			serde_json::to_writer(&mut writer, &json)
		};
		written.context("Failed to write GeoJSON")?;
		writer.flush()?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Geometry, NtaProperties};
	use pretty_assertions::assert_eq;

	fn feature(name: &str) -> GeoFeature {
		GeoFeature::new(
			Geometry::new_polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]),
			NtaProperties::new(name, "Brooklyn", ""),
		)
	}

	#[test]
	fn ids_and_lookup() {
		let collection = GeoCollection::from(vec![feature("Greenpoint"), feature("Williamsburg")]);
		assert_eq!(collection.ids().collect::<Vec<_>>(), vec!["Greenpoint", "Williamsburg"]);
		assert!(collection.get("Williamsburg").is_some());
		assert!(collection.get("williamsburg").is_none());
	}

	#[test]
	fn empty_collection_json() {
		let collection = GeoCollection::default();
		assert!(collection.is_empty());
		assert_eq!(
			serde_json::to_string(&collection.to_json(None)).unwrap(),
			r#"{"type":"FeatureCollection","features":[]}"#
		);
		assert_eq!(collection.compute_bounds(), None);
	}

	#[test]
	fn write_geojson_compact() -> Result<()> {
		let collection = GeoCollection::from(vec![feature("Greenpoint")]);
		let mut buffer = Vec::new();
		collection.write_geojson(&mut buffer, Some(2), false)?;
		let text = String::from_utf8(buffer)?;
		assert_eq!(
			text,
			concat!(
				r#"{"type":"FeatureCollection","features":[{"type":"Feature","#,
				r#""geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0]]]},"#,
				r#""properties":{"NTAName":"Greenpoint","BoroName":"Brooklyn","NTA2020":""},"#,
				r#""id":"Greenpoint"}]}"#
			)
		);
		Ok(())
	}

	#[test]
	fn write_geojson_pretty() -> Result<()> {
		let collection = GeoCollection::from(vec![feature("Greenpoint")]);
		let mut buffer = Vec::new();
		collection.write_geojson(&mut buffer, None, true)?;
		let text = String::from_utf8(buffer)?;
		assert!(text.starts_with("{\n  \"type\": \"FeatureCollection\""));
		Ok(())
	}
}
