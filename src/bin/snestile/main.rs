//! SNES tile conversion tool
//!
//! Converts an image into CHR, tile map and palette files, or a mode 7 stream.
//!
//! # Usage
//!
//! ```bash
//! # 4bpp 8x8 tiles with duplicate and mirror optimization
//! snestile -i level.png -o build/level --optimize-dupes --optimize-mirrors
//!
//! # Mode 7 data
//! snestile -i floor.png -o build/floor -b 8 --mode7
//!
//! # Options from a TOML file, flags still override it
//! snestile -i hud.png -o build/hud -c hud.toml
//! ```

mod cli;
mod decode;
mod output;

use clap::Parser;
use log::{error, info, warn};
use snestile_rs::prelude::*;

use crate::cli::Cli;

fn main() {
	let cli = Cli::parse();

	let default_filter = if cli.verbose {
		"debug"
	} else {
		"info"
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_filter));

	if let Err(e) = run(&cli) {
		error!("{e:#}");
		std::process::exit(1);
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let options = cli.options()?;
	let converter = Converter::new(options)?;
	info!("Converting {} ({})", cli.infile.display(), converter.options());

	let image = decode::load(&cli.infile)?;
	info!("Loaded {}", image.grid);

	let conversion = converter.convert(&image.grid, image.palette.as_ref())?;
	for warning in &conversion.diagnostics {
		warn!("{warning}");
	}

	info!(
		"{}x{} cells, {} tiles stored, {} palette colors",
		conversion.columns,
		conversion.rows,
		conversion.tiles.len(),
		conversion.colors.len()
	);

	for path in output::write_outputs(&cli.outprefix, &conversion)? {
		info!("Wrote {}", path.display());
	}

	Ok(())
}
