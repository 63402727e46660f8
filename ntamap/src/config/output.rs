use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
	/// Number of decimals coordinates are rounded to. Unset keeps full precision.
	#[serde()]
	pub precision: Option<u8>,

	/// Indent the written GeoJSON.
	#[serde()]
	pub pretty: Option<bool>,
}

impl OutputConfig {
	pub fn override_optional_precision(&mut self, precision: &Option<u8>) {
		if precision.is_some() {
			self.precision = *precision;
		}
	}
	pub fn override_optional_pretty(&mut self, pretty: bool) {
		if pretty {
			self.pretty = Some(true);
		}
	}
}
