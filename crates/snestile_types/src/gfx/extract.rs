//! Slicing a pixel grid into tiles.
//!
//! Cells are visited row-major: every cell of a tile row, left to right,
//! before the next tile row. Each cell yields its raw index bytes masked to
//! the bit depth and the palette group encoded in the bits above it.

use super::{
	diagnostics::{Diagnostics, Warning},
	error::{ConvertError, Result},
	options::{BitDepth, TileSize},
	palette::direct_color_byte,
	pixels::{PixelGrid, Pixels},
	tile::Tile,
};

/// Largest palette group number a tile map entry can hold.
pub const MAX_PALETTE_GROUP: u8 = 7;

/// A tile cut out of the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTile {
	/// Masked index data
	pub tile: Tile,

	/// Palette group number (0..=7)
	pub palette: u8,

	/// X coordinate of the top-left pixel
	pub x: usize,

	/// Y coordinate of the top-left pixel
	pub y: usize,
}

/// Result of slicing a grid into tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
	/// One tile per cell, row-major
	pub tiles: Vec<ExtractedTile>,

	/// Number of cells per row
	pub columns: usize,

	/// Number of cell rows
	pub rows: usize,

	/// Tiles mixing palette groups
	pub diagnostics: Diagnostics,
}

/// Slices `grid` into tiles of `tile_size`.
///
/// In direct color mode `grid` must hold RGB pixels, which are requantized to
/// one `BBGGGRRR` byte each and always use palette group 0. Otherwise `grid`
/// must hold palette indices.
///
/// # Errors
///
/// - [`ConvertError::DimensionMismatch`] if the grid is not a whole number of tiles
/// - [`ConvertError::UnsupportedPaletteMode`] if the pixel storage does not match the mode
pub fn extract_tiles(
	grid: &PixelGrid,
	tile_size: TileSize,
	bit_depth: BitDepth,
	direct_color: bool,
) -> Result<Extraction> {
	let dim = tile_size.dim();
	if grid.width() % dim != 0 || grid.height() % dim != 0 {
		return Err(ConvertError::DimensionMismatch {
			width: grid.width(),
			height: grid.height(),
			tile: dim,
		});
	}

	let columns = grid.width() / dim;
	let rows = grid.height() / dim;
	let mut tiles = Vec::with_capacity(columns * rows);
	let mut diagnostics = Diagnostics::new();

	for cell_y in 0..rows {
		for cell_x in 0..columns {
			let x = cell_x * dim;
			let y = cell_y * dim;

			let extracted = match (grid.pixels(), direct_color) {
				(Pixels::Rgb(rgb), true) => {
					let raw = crop(rgb, grid.width(), x, y, dim);
					let data: Vec<u8> = raw.iter().map(|&c| direct_color_byte(c)).collect();
					ExtractedTile {
						tile: Tile::new(tile_size, data)?,
						palette: 0,
						x,
						y,
					}
				}
				(Pixels::Indexed(indexed), false) => {
					let mut raw = crop(indexed, grid.width(), x, y, dim);
					let palette = match resolve_palette_group(&raw, bit_depth) {
						PaletteGroup::Single(group) => group,
						PaletteGroup::Conflict(group) => {
							diagnostics.push(Warning::MultiplePalettes {
								x,
								y,
							});
							group
						}
					};

					let mask = bit_depth.mask();
					raw.iter_mut().for_each(|p| *p &= mask);

					ExtractedTile {
						tile: Tile::new(tile_size, raw)?,
						palette,
						x,
						y,
					}
				}
				(Pixels::Indexed(_), true) => {
					return Err(ConvertError::UnsupportedPaletteMode(
						"direct color needs RGB pixels; resolve the palette first".to_string(),
					));
				}
				(Pixels::Rgb(_), false) => {
					return Err(ConvertError::UnsupportedPaletteMode(
						"image must be paletted".to_string(),
					));
				}
			};

			tiles.push(extracted);
		}
	}

	log::debug!("extracted {} tiles ({}x{} cells of {})", tiles.len(), columns, rows, tile_size);

	Ok(Extraction {
		tiles,
		columns,
		rows,
		diagnostics,
	})
}

/// Palette group resolved for one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaletteGroup {
	/// Every non-transparent pixel agrees
	Single(u8),

	/// Pixels disagree; holds the first group seen
	Conflict(u8),
}

/// Finds the palette group of a tile from its unmasked pixels.
///
/// Transparent pixels (index 0 after masking) are ignored and a fully
/// transparent tile uses group 0.
fn resolve_palette_group(raw: &[u8], bit_depth: BitDepth) -> PaletteGroup {
	let mask = bit_depth.mask();
	let mut first: Option<u8> = None;
	let mut conflict = false;

	for &pixel in raw.iter().filter(|&&p| p & mask != 0) {
		// always 0 at 8bpp
		let group = ((u32::from(pixel) >> bit_depth.bits()) as u8) & MAX_PALETTE_GROUP;
		match first {
			None => first = Some(group),
			Some(seen) if seen != group => conflict = true,
			Some(_) => {}
		}
	}

	let group = first.unwrap_or(0);
	if conflict {
		PaletteGroup::Conflict(group)
	} else {
		PaletteGroup::Single(group)
	}
}

fn crop<T: Copy>(src: &[T], stride: usize, x: usize, y: usize, dim: usize) -> Vec<T> {
	let mut out = Vec::with_capacity(dim * dim);
	for row in y..y + dim {
		let start = row * stride + x;
		out.extend_from_slice(&src[start..start + dim]);
	}
	out
}
