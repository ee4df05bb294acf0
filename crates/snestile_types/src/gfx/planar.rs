//! Bitplane packing of tile pixel data (CHR).
//!
//! An 8x8 block is stored as `8 * bpp` bytes. Bitplanes are interleaved two
//! at a time: each 16-byte group holds one pair of planes for all 8 rows,
//! with the lower plane of the pair first for every row.
//!
//! ```text
//! 2bpp: r0p0 r0p1 r1p0 r1p1 ... r7p0 r7p1
//! 4bpp: (planes 0/1 as above) r0p2 r0p3 ... r7p2 r7p3
//! ```
//!
//! The leftmost pixel of a row maps to the most significant bit.

use super::{
	error::{ConvertError, Result},
	options::{BitDepth, TileSize},
	tile::{BLOCK_DIM, BLOCK_PIXELS, Block, Tile},
};

/// Number of 16x16 tiles sharing one pair of CHR rows.
pub const LARGE_TILES_PER_ROW: usize = 8;

/// Returns the source row and bitplane of output byte `k` of a packed block.
#[inline]
fn byte_source(k: usize) -> (usize, usize) {
	let row = (k / 2) % BLOCK_DIM;
	let plane = 2 * (k >> 4) | (k & 1);
	(row, plane)
}

/// Packs one 8x8 block into `buffer`, appending `8 * bpp` bytes.
pub fn pack_block_into(block: &Block, bit_depth: BitDepth, buffer: &mut Vec<u8>) {
	for k in 0..bit_depth.bytes_per_block() {
		let (row, plane) = byte_source(k);
		let pixels = &block[row * BLOCK_DIM..(row + 1) * BLOCK_DIM];
		let packed = pixels.iter().fold(0u8, |acc, &p| (acc << 1) | ((p >> plane) & 1));
		buffer.push(packed);
	}
}

/// Packs one 8x8 block.
pub fn pack_block(block: &Block, bit_depth: BitDepth) -> Vec<u8> {
	let mut buffer = Vec::with_capacity(bit_depth.bytes_per_block());
	pack_block_into(block, bit_depth, &mut buffer);
	buffer
}

/// Unpacks one 8x8 block from the start of `data`.
///
/// # Errors
///
/// Returns [`ConvertError::InsufficientData`] if `data` is shorter than one
/// packed block.
pub fn decode_block(data: &[u8], bit_depth: BitDepth) -> Result<Block> {
	let size = bit_depth.bytes_per_block();
	if data.len() < size {
		return Err(ConvertError::InsufficientData {
			expected: size,
			actual: data.len(),
		});
	}

	let mut block = [0u8; BLOCK_PIXELS];
	for (k, &packed) in data[..size].iter().enumerate() {
		let (row, plane) = byte_source(k);
		for col in 0..BLOCK_DIM {
			let bit = (packed >> (7 - col)) & 1;
			block[row * BLOCK_DIM + col] |= bit << plane;
		}
	}
	Ok(block)
}

/// Encodes stored tiles as CHR data.
///
/// 8x8 tiles are packed in order. 16x16 tiles are split into 8x8 blocks and
/// laid out in groups of eight: the upper halves of all eight tiles (left
/// block, then right block), then their lower halves. Missing tiles of a
/// group are padded with blank blocks, except in the lower half of the last
/// group where nothing follows.
pub fn encode_chr(tiles: &[Tile], tile_size: TileSize, bit_depth: BitDepth) -> Vec<u8> {
	let blocks = tiles.len() * tile_size.blocks_per_edge() * tile_size.blocks_per_edge();
	let mut buffer = Vec::with_capacity(blocks * bit_depth.bytes_per_block());

	match tile_size {
		TileSize::TS8x8 => {
			for tile in tiles {
				pack_block_into(&tile.block(0, 0), bit_depth, &mut buffer);
			}
		}
		TileSize::TS16x16 => {
			let blank = [0u8; BLOCK_PIXELS];
			let last_group = tiles.len().saturating_sub(1) / LARGE_TILES_PER_ROW;

			for base in (0..tiles.len()).step_by(LARGE_TILES_PER_ROW) {
				for half in 0..2 {
					for i in 0..LARGE_TILES_PER_ROW {
						match tiles.get(base + i) {
							Some(tile) => {
								pack_block_into(&tile.block(0, half), bit_depth, &mut buffer);
								pack_block_into(&tile.block(1, half), bit_depth, &mut buffer);
							}
							None if half == 1 && base / LARGE_TILES_PER_ROW == last_group => {}
							None => {
								pack_block_into(&blank, bit_depth, &mut buffer);
								pack_block_into(&blank, bit_depth, &mut buffer);
							}
						}
					}
				}
			}
		}
	}

	log::debug!("packed {} tiles into {} bytes of {} CHR", tiles.len(), buffer.len(), bit_depth);
	buffer
}
