use super::*;
use serde_json::{Map, Value};

/// A neighborhood with its parsed geometry.
///
/// `id` is the join key used by map consumers and always equals `properties.name`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: String,
	pub geometry: Geometry,
	pub properties: NtaProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry, properties: NtaProperties) -> Self {
		Self {
			id: properties.name.clone(),
			geometry,
			properties,
		}
	}

	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), Value::from("Feature"));
		obj.insert("geometry".to_string(), self.geometry.to_json(precision));
		obj.insert("properties".to_string(), self.properties.to_json());
		obj.insert("id".to_string(), Value::from(self.id.as_str()));
		Value::Object(obj)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new(
			Geometry::new_example(),
			NtaProperties::new("Greenpoint", "Brooklyn", "BK0101"),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn id_equals_name() {
		let feature = GeoFeature::new_example();
		assert_eq!(feature.id, "Greenpoint");
		assert_eq!(feature.id, feature.properties.name);
	}

	#[test]
	fn to_json_shape() {
		let feature = GeoFeature::new(
			Geometry::new_polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]),
			NtaProperties::new("Astoria (Central)", "Queens", "QN0105"),
		);
		assert_eq!(
			feature.to_json(None),
			json!({
				"type": "Feature",
				"geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]},
				"properties": {"NTAName": "Astoria (Central)", "BoroName": "Queens", "NTA2020": "QN0105"},
				"id": "Astoria (Central)"
			})
		);
	}
}
