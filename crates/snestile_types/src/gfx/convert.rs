//! End-to-end conversion pipeline.
//!
//! ```text
//! PixelGrid -> extract_tiles -> Deduplicator -> encode_chr + encode_tilemap
//!                                           \-> encode_mode7 (mode 7)
//! SourcePalette -> quantize_palette -> encode_palette
//! ```

use std::borrow::Cow;

use super::{
	dedup::Deduplicator,
	diagnostics::Diagnostics,
	error::{ConvertError, Result},
	extract::extract_tiles,
	mode7::encode_mode7,
	options::Options,
	palette::{SnesColor, encode_palette, quantize_palette},
	pixels::{PixelGrid, SourcePalette},
	planar::encode_chr,
	tile::Tile,
	tilemap::{MapEntry, encode_tilemap},
};

/// Output of a successful conversion.
///
/// Each stream is `None` when the selected mode does not produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
	/// Bitplane-packed tile data (not in mode 7)
	pub chr: Option<Vec<u8>>,

	/// Little-endian tile map words (not in mode 7)
	pub tilemap: Option<Vec<u8>>,

	/// Interleaved mode 7 words (mode 7 only)
	pub mode7: Option<Vec<u8>>,

	/// Little-endian palette words (not in direct color mode)
	pub palette: Option<Vec<u8>>,

	/// Quantized palette colors
	pub colors: Vec<SnesColor>,

	/// Stored tiles in output order
	pub tiles: Vec<Tile>,

	/// One entry per cell, row-major
	pub entries: Vec<MapEntry>,

	/// Tile map width in cells
	pub columns: usize,

	/// Tile map height in cells
	pub rows: usize,

	/// Warnings collected along the way
	pub diagnostics: Diagnostics,
}

/// Runs conversions with a validated set of options.
#[derive(Debug, Clone)]
pub struct Converter {
	options: Options,
	diagnostics: Diagnostics,
}

impl Converter {
	/// Validates `options` and creates a converter.
	///
	/// # Errors
	///
	/// Returns [`ConvertError::IncompatibleModeConfiguration`] for invalid
	/// option combinations.
	pub fn new(options: Options) -> Result<Self> {
		let (options, diagnostics) = options.resolve()?;
		log::debug!("converter options: {options}");

		Ok(Self {
			options,
			diagnostics,
		})
	}

	/// Returns the effective options.
	pub fn options(&self) -> &Options {
		&self.options
	}

	/// Converts one image.
	///
	/// Indexed mode requires `palette` to be an RGB palette. In direct color
	/// mode an indexed grid is resolved through `palette` first and no
	/// palette stream is produced.
	pub fn convert(&self, grid: &PixelGrid, palette: Option<&SourcePalette>) -> Result<Conversion> {
		let options = &self.options;
		let mut diagnostics = self.diagnostics.clone();

		let grid = if options.direct_color {
			match (grid.is_indexed(), palette) {
				(false, _) => Cow::Borrowed(grid),
				(true, Some(palette)) => Cow::Owned(grid.to_rgb(palette)?),
				(true, None) => {
					return Err(ConvertError::UnsupportedPaletteMode(
						"indexed image has no palette".to_string(),
					));
				}
			}
		} else {
			let palette = palette
				.ok_or_else(|| ConvertError::UnsupportedPaletteMode("image must be paletted".to_string()))?;
			palette.ensure_rgb()?;
			Cow::Borrowed(grid)
		};

		let extraction = extract_tiles(&grid, options.tile_size, options.bit_depth, options.direct_color)?;
		diagnostics.extend(extraction.diagnostics);

		let deduplicated =
			Deduplicator::new(options.optimize_dupes, options.optimize_mirrors).run(&extraction.tiles);
		let tiles = deduplicated.store.into_tiles();
		let entries = deduplicated.entries;

		let (chr, tilemap, mode7) = if options.mode7 {
			(None, None, Some(encode_mode7(&tiles, &entries)?))
		} else {
			let tilemap = encode_tilemap(&entries, options.tile_size)?;
			let chr = encode_chr(&tiles, options.tile_size, options.bit_depth);
			(Some(chr), Some(tilemap), None)
		};

		let (colors, palette) = match palette {
			Some(source) if !options.direct_color => {
				let colors = quantize_palette(source, options.bit_depth)?;
				let encoded = encode_palette(&colors);
				(colors, Some(encoded))
			}
			_ => (Vec::new(), None),
		};

		log::debug!(
			"converted {}: {} cells, {} stored tiles, {} warnings",
			grid,
			entries.len(),
			tiles.len(),
			diagnostics.len()
		);

		Ok(Conversion {
			chr,
			tilemap,
			mode7,
			palette,
			colors,
			tiles,
			entries,
			columns: extraction.columns,
			rows: extraction.rows,
			diagnostics,
		})
	}
}
