/// One record of the neighborhood dataset, as loaded from storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NtaRow {
	/// Neighborhood name; becomes the feature id.
	pub name: String,
	pub borough: String,
	/// Auxiliary area code, may be empty.
	pub code: String,
	/// Raw WKT, may be empty or malformed.
	pub geometry: String,
}

impl NtaRow {
	pub fn new(
		name: impl Into<String>,
		borough: impl Into<String>,
		code: impl Into<String>,
		geometry: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			borough: borough.into(),
			code: code.into(),
			geometry: geometry.into(),
		}
	}
}
