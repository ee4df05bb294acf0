//! Benchmark helper utilities for snestile-rs
//!
//! This module provides synthetic images for the conversion benchmarks.

use snestile_types::gfx::{PixelGrid, SourcePalette};

/// Generates an indexed test image with a repeating, partly mirrored tile pattern
///
/// Cells with `cell % 8 == 3` all share one pattern, so deduplication finds
/// repeats. Palette groups cycle per cell.
pub fn generate_test_image(width: usize, height: usize) -> PixelGrid {
	let mut data = vec![0u8; width * height];

	for (i, pixel) in data.iter_mut().enumerate() {
		let x = i % width;
		let y = i / width;
		let cell = (y / 8) * (width / 8) + x / 8;
		let (px, py) = (x % 8, y % 8);

		let pattern = match cell % 8 {
			3 => (px * 3 + py) % 16,
			_ => (px * 5 + py * 3 + cell) % 16,
		};
		let group = (cell % 8) as u8;
		*pixel = (group << 4) | pattern as u8;
	}

	PixelGrid::indexed(width, height, data).unwrap_or_else(|e| panic!("invalid test image: {e}"))
}

/// Generates a 256-color grayscale RGB palette
pub fn generate_test_palette() -> SourcePalette {
	let colors: Vec<[u8; 3]> = (0..=255u8).map(|i| [i, i, i]).collect();
	SourcePalette::from_colors(&colors)
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// One screen: 256x224
	pub const SCREEN: (usize, usize) = (256, 224);
	/// Full 64x64 cell tile map: 512x512
	pub const MAP_64X64: (usize, usize) = (512, 512);
	/// Large level strip: 2048x256
	pub const LEVEL: (usize, usize) = (2048, 256);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_test_image() {
		let grid = generate_test_image(64, 16);
		assert_eq!(grid.width(), 64);
		assert_eq!(grid.height(), 16);
		assert!(grid.is_indexed());
	}

	#[test]
	fn test_sizes_are_tile_aligned() {
		for (w, h) in [sizes::SCREEN, sizes::MAP_64X64, sizes::LEVEL] {
			assert_eq!(w % 16, 0);
			assert_eq!(h % 16, 0);
		}
	}

	#[test]
	fn test_generate_test_palette() {
		assert_eq!(generate_test_palette().len(), 256);
	}
}
