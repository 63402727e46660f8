use serde_json::{Map, Value};

/// Output key of the neighborhood name; also the feature id.
pub const KEY_NAME: &str = "NTAName";
/// Output key of the borough display name.
pub const KEY_BOROUGH: &str = "BoroName";
/// Output key of the auxiliary area code.
pub const KEY_CODE: &str = "NTA2020";

/// The descriptive attributes of one neighborhood feature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NtaProperties {
	pub name: String,
	pub borough: String,
	pub code: String,
}

impl NtaProperties {
	pub fn new(name: impl Into<String>, borough: impl Into<String>, code: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			borough: borough.into(),
			code: code.into(),
		}
	}

	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		obj.insert(KEY_NAME.to_string(), Value::from(self.name.as_str()));
		obj.insert(KEY_BOROUGH.to_string(), Value::from(self.borough.as_str()));
		obj.insert(KEY_CODE.to_string(), Value::from(self.code.as_str()));
		Value::Object(obj)
	}
}
