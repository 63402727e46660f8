use anyhow::Result;
use log::info;
use ntamap::geometry::{CollectionCache, Geometry, wkt::SkipReason};
use std::{fmt::Write, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// CSV file with one neighborhood per row and a WKT MULTIPOLYGON geometry column
	#[arg()]
	input_file: PathBuf,

	/// list every skipped row
	#[arg(long, short)]
	list: bool,

	/// YAML file with column names
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("probe {:?}", arguments.input_file);

	let (_config, cache) = super::load_dataset(&arguments.input_file, arguments.config.as_ref())?;
	print!("{}", summary(&cache, arguments.list)?);

	Ok(())
}

fn summary(cache: &CollectionCache, list: bool) -> Result<String> {
	let collection = cache.get();
	let report = cache.report();
	let multi = collection
		.features
		.iter()
		.filter(|feature| matches!(feature.geometry, Geometry::MultiPolygon(_)))
		.count();

	let mut text = String::new();
	writeln!(text, "rows: {}", report.rows)?;
	writeln!(
		text,
		"features: {} ({} Polygon, {} MultiPolygon)",
		report.features,
		report.features - multi,
		multi
	)?;

	writeln!(text, "skipped rows: {}", report.skipped.len())?;
	let skipped = report.skipped_by_reason();
	for reason in SkipReason::ALL {
		writeln!(text, "   {reason}: {}", skipped.get(&reason).unwrap_or(&0))?;
	}
	if list {
		for row in &report.skipped {
			writeln!(text, "   row {} '{}': {}", row.index + 1, row.name, row.reason)?;
		}
	}

	writeln!(text, "degraded rows: {}", report.degraded_rows)?;
	if report.degraded_rows > 0 {
		writeln!(text, "   dropped pairs: {}", report.dropped_pairs)?;
		writeln!(text, "   dropped rings: {}", report.dropped_rings)?;
		writeln!(text, "   dropped polygons: {}", report.dropped_polygons)?;
		writeln!(text, "   rejected groups: {}", report.rejected_groups)?;
		writeln!(text, "   fallback rows: {}", report.fallback_rows)?;
	}

	match collection.compute_bounds() {
		Some(bbox) => writeln!(text, "bbox: {bbox:?}")?,
		None => writeln!(text, "bbox: none")?,
	}

	Ok(text)
}
