use approx::assert_abs_diff_eq;
use predicates::str;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use test_utilities::{get_temp_output, get_testdata, ntamap_cmd};

fn read_json(text: &str) -> Value {
	serde_json::from_str(text).expect("output is not valid JSON")
}

fn ids(json: &Value) -> Vec<&str> {
	json["features"]
		.as_array()
		.unwrap()
		.iter()
		.map(|feature| feature["id"].as_str().unwrap())
		.collect()
}

#[test]
fn convert_to_stdout() {
	let assert = ntamap_cmd()
		.args(["convert", get_testdata("ntas.csv").to_str().unwrap()])
		.assert()
		.success()
		.stderr(str::contains("5 rows, 4 features, 1 skipped, 1 degraded"));

	let json = read_json(&String::from_utf8(assert.get_output().stdout.clone()).unwrap());
	assert_eq!(json["type"], "FeatureCollection");
	assert_eq!(
		ids(&json),
		["Greenpoint", "Astoria (Central)", "City Island", "Tottenville-Charleston"]
	);

	let astoria = &json["features"][1];
	assert_eq!(astoria["geometry"]["type"], "Polygon");
	assert_eq!(astoria["geometry"]["coordinates"].as_array().unwrap().len(), 2);
	assert_eq!(astoria["properties"]["NTAName"], "Astoria (Central)");
	assert_eq!(astoria["properties"]["BoroName"], "Queens");
	assert_eq!(astoria["properties"]["NTA2020"], "QN0103");

	let city_island = &json["features"][2];
	assert_eq!(city_island["geometry"]["type"], "MultiPolygon");
	assert_eq!(city_island["geometry"]["coordinates"].as_array().unwrap().len(), 2);

	let tottenville = &json["features"][3]["geometry"]["coordinates"][0];
	assert_eq!(tottenville.as_array().unwrap().len(), 4);
}

#[test]
fn convert_to_file_with_config() {
	let (temp_dir, output) = get_temp_output("ntas.geojson");

	ntamap_cmd()
		.args([
			"convert",
			"--config",
			get_testdata("config.yml").to_str().unwrap(),
			get_testdata("ntas_renamed.csv").to_str().unwrap(),
			output.to_str().unwrap(),
		])
		.assert()
		.success()
		.stdout(str::is_empty());

	assert!(output.exists(), "output file was not created: {:?}", output);
	let text = fs::read_to_string(&output).unwrap();
	assert!(text.starts_with("{\n  \"type\": \"FeatureCollection\""));

	let json = read_json(&text);
	assert_eq!(ids(&json), ["SoHo-Little Italy-Hudson Square", "Greenwich Village"]);
	assert_eq!(json["features"][0]["properties"]["NTA2020"], "MN0201");

	let first = &json["features"][0]["geometry"]["coordinates"][0][0];
	assert_abs_diff_eq!(first[0].as_f64().unwrap(), -74.012346, epsilon = 1e-9);
	assert_abs_diff_eq!(first[1].as_f64().unwrap(), 40.721235, epsilon = 1e-9);

	drop(temp_dir);
}

#[test]
fn strict_fails_on_skipped_rows() {
	ntamap_cmd()
		.args(["convert", "--strict", get_testdata("ntas.csv").to_str().unwrap()])
		.assert()
		.failure()
		.stdout(str::is_empty())
		.stderr(str::contains("1 of 5 rows have no geometry, first is row 4"));
}

#[test]
fn strict_accepts_clean_dataset() {
	ntamap_cmd()
		.args([
			"convert",
			"--strict",
			"--config",
			get_testdata("config.yml").to_str().unwrap(),
			get_testdata("ntas_renamed.csv").to_str().unwrap(),
			"-",
		])
		.assert()
		.success()
		.stdout(str::contains("Greenwich Village"));
}

#[test]
fn missing_name_column() {
	ntamap_cmd()
		.args(["convert", get_testdata("ntas_renamed.csv").to_str().unwrap()])
		.assert()
		.failure()
		.stdout(str::is_empty())
		.stderr(str::contains("CSV is missing the column 'NTAName'"));
}

#[test]
fn probe_prints_summary() {
	ntamap_cmd()
		.args(["probe", "--list", get_testdata("ntas.csv").to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains("features: 4 (3 Polygon, 1 MultiPolygon)"))
		.stdout(str::contains("row 4 'Freshkills Park (South)': unsupported geometry kind"))
		.stdout(str::contains("bbox: [-74.25, 40.5, -73.76, 40.86]"));
}
