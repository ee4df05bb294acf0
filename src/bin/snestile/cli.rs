//! Command-line arguments and option loading.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use snestile_rs::prelude::*;

/// Prefix of environment variables that override configuration file values.
const ENV_PREFIX: &str = "SNESTILE";

#[derive(Parser, Debug)]
#[command(name = "snestile")]
#[command(version)]
#[command(about = "SNES tile conversion tool", long_about = None)]
pub struct Cli {
	/// Input image
	#[arg(short, long, value_name = "FILE")]
	pub infile: PathBuf,

	/// Output file prefix
	#[arg(short, long, value_name = "PREFIX")]
	pub outprefix: PathBuf,

	/// Bits per pixel (2, 4 or 8) [default: 4]
	#[arg(short, long)]
	pub bpp: Option<BitDepth>,

	/// Tile size (8x8 or 16x16) [default: 8x8]
	#[arg(short = 's', long)]
	pub tilesize: Option<TileSize>,

	/// Use CG direct select (8bpp only)
	#[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
	pub direct_select: Option<bool>,

	/// Generate data in mode 7 format
	#[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
	pub mode7: Option<bool>,

	/// Optimize duplicate tiles
	#[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
	pub optimize_dupes: Option<bool>,

	/// Optimize mirrored tiles (needs --optimize-dupes)
	#[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
	pub optimize_mirrors: Option<bool>,

	/// TOML file with default options
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Show verbose output
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	/// Builds the conversion options: configuration file and environment
	/// first, command-line flags on top.
	pub fn options(&self) -> anyhow::Result<Options> {
		let options = load_options(self.config.as_deref())?;
		Ok(self.apply(options))
	}

	/// Overrides every option given on the command line.
	///
	/// A bare switch means `true`; `--switch=false` turns off a value set in
	/// the configuration file.
	fn apply(&self, mut options: Options) -> Options {
		if let Some(bit_depth) = self.bpp {
			options.bit_depth = bit_depth;
		}
		if let Some(tile_size) = self.tilesize {
			options.tile_size = tile_size;
		}
		if let Some(direct_color) = self.direct_select {
			options.direct_color = direct_color;
		}
		if let Some(mode7) = self.mode7 {
			options.mode7 = mode7;
		}
		if let Some(optimize_dupes) = self.optimize_dupes {
			options.optimize_dupes = optimize_dupes;
		}
		if let Some(optimize_mirrors) = self.optimize_mirrors {
			options.optimize_mirrors = optimize_mirrors;
		}
		options
	}
}

/// Loads options from an optional TOML file and `SNESTILE_*` environment variables.
fn load_options(path: Option<&Path>) -> anyhow::Result<Options> {
	let mut builder = config::Config::builder();
	if let Some(path) = path {
		builder = builder.add_source(config::File::from(path));
	}
	builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

	let settings = builder.build().context("Failed to load configuration")?;
	let options = settings.try_deserialize::<Options>().context("Invalid configuration")?;

	Ok(options)
}
