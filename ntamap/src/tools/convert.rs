use anyhow::{Context, Result};
use log::{info, warn};
use std::{
	fs::File,
	io::{self, BufWriter, Write},
	path::PathBuf,
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// CSV file with one neighborhood per row and a WKT MULTIPOLYGON geometry column
	#[arg()]
	input_file: PathBuf,

	/// GeoJSON file to write, "-" or nothing writes to stdout
	#[arg()]
	output_file: Option<PathBuf>,

	/// round coordinates to this many decimals
	#[arg(long, short, value_name = "int", display_order = 1)]
	precision: Option<u8>,

	/// indent the GeoJSON output
	#[arg(long, display_order = 1)]
	pretty: bool,

	/// fail if any row is skipped or loses part of its geometry
	#[arg(long, display_order = 2)]
	strict: bool,

	/// YAML file with column names and output settings
	#[arg(long, short, value_name = "FILE", display_order = 2)]
	config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let (mut config, cache) = super::load_dataset(&arguments.input_file, arguments.config.as_ref())?;
	config.output.override_optional_precision(&arguments.precision);
	config.output.override_optional_pretty(arguments.pretty);

	let report = cache.report();
	if arguments.strict {
		report
			.ensure_clean()
			.with_context(|| format!("Refusing to convert {:?}", arguments.input_file))?;
	} else if !report.is_clean() {
		warn!("{report}, run 'probe' for details");
	}

	let collection = cache.get();
	let precision = config.output.precision;
	let pretty = config.output.pretty.unwrap_or(false);

	match arguments.output_file.as_ref().filter(|path| path.as_os_str() != "-") {
		Some(path) => {
			let file = File::create(path).with_context(|| format!("Failed to create file at path: {path:?}"))?;
			collection.write_geojson(BufWriter::new(file), precision, pretty)?;
			info!("wrote {} features to {path:?}", collection.len());
		}
		None => {
			let mut stdout = io::stdout().lock();
			collection.write_geojson(BufWriter::new(&mut stdout), precision, pretty)?;
			writeln!(stdout)?;
			info!("wrote {} features to stdout", collection.len());
		}
	}

	Ok(())
}
