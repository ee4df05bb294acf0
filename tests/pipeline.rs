//! Conversion pipeline tests through the public `snestile-rs` API

use snestile_rs::gfx::{decode_block, tile::BLOCK_PIXELS};
use snestile_rs::prelude::*;

/// Builds a 2bpp grid of 8x8 tiles laid out left to right, every tile in palette group 1.
fn grid(tiles: &[[u8; BLOCK_PIXELS]]) -> PixelGrid {
	let width = tiles.len() * 8;
	let mut data = vec![0u8; width * 8];
	for (n, tile) in tiles.iter().enumerate() {
		for (i, &pixel) in tile.iter().enumerate() {
			data[(i / 8) * width + n * 8 + i % 8] = (1 << 2) | pixel;
		}
	}
	PixelGrid::indexed(width, 8, data).unwrap()
}

fn corner_tile() -> [u8; BLOCK_PIXELS] {
	let mut tile = [0u8; BLOCK_PIXELS];
	tile[0] = 3;
	tile[1] = 2;
	tile[8] = 1;
	tile
}

fn flipped(tile: &[u8; BLOCK_PIXELS], flip: Flip) -> [u8; BLOCK_PIXELS] {
	let mut out = [0u8; BLOCK_PIXELS];
	for y in 0..8 {
		for x in 0..8 {
			let (sx, sy) = match flip {
				Flip::None => (x, y),
				Flip::Horizontal => (7 - x, y),
				Flip::Vertical => (x, 7 - y),
				Flip::Both => (7 - x, 7 - y),
			};
			out[y * 8 + x] = tile[sy * 8 + sx];
		}
	}
	out
}

fn palette() -> SourcePalette {
	SourcePalette::from_colors(&[[0, 0, 0], [255, 0, 0], [0, 255, 0], [0, 0, 255]])
}

#[test_log::test]
fn test_all_orientations_share_one_tile() {
	let tile = corner_tile();
	let tiles: Vec<_> =
		[Flip::None, Flip::Horizontal, Flip::Vertical, Flip::Both].iter().map(|&f| flipped(&tile, f)).collect();

	let options = Options {
		bit_depth: BitDepth::Bpp2,
		optimize_dupes: true,
		optimize_mirrors: true,
		..Default::default()
	};
	let conversion = Converter::new(options).unwrap().convert(&grid(&tiles), Some(&palette())).unwrap();

	assert_eq!(conversion.tiles.len(), 1);
	let flips: Vec<_> = conversion.entries.iter().map(|e| e.flip).collect();
	assert_eq!(flips, vec![Flip::None, Flip::Horizontal, Flip::Vertical, Flip::Both]);

	let stored = decode_block(conversion.chr.as_deref().unwrap(), BitDepth::Bpp2).unwrap();
	assert_eq!(stored, tile);

	let words: Vec<u16> =
		conversion.tilemap.unwrap().chunks_exact(2).map(|w| u16::from_le_bytes([w[0], w[1]])).collect();
	assert_eq!(words, vec![0x0400, 0x4400, 0x8400, 0xC400]);
}

#[test_log::test]
fn test_invalid_configuration_fails_before_conversion() {
	let options = Options {
		bit_depth: BitDepth::Bpp4,
		mode7: true,
		..Default::default()
	};
	assert!(matches!(Converter::new(options), Err(ConvertError::IncompatibleModeConfiguration(_))));
}

#[test]
fn test_palette_is_capped_by_bit_depth() {
	let colors: Vec<[u8; 3]> = (0..100u8).map(|i| [i, i, i]).collect();
	let palette = SourcePalette::from_colors(&colors);
	let options = Options {
		bit_depth: BitDepth::Bpp2,
		..Default::default()
	};

	let conversion = Converter::new(options).unwrap().convert(&grid(&[corner_tile()]), Some(&palette)).unwrap();

	// 8 groups of 4 colors
	assert_eq!(conversion.colors.len(), 32);
	assert_eq!(conversion.palette.unwrap().len(), 64);
}
