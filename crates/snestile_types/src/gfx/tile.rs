//! Raw tile pixel data.

use super::{
	error::{ConvertError, Result},
	options::TileSize,
};

/// Edge length of the hardware tile every larger tile is built from.
pub const BLOCK_DIM: usize = 8;

/// Number of pixels in one 8x8 hardware tile.
pub const BLOCK_PIXELS: usize = BLOCK_DIM * BLOCK_DIM;

/// One 8x8 block of raw index bytes, row-major.
pub type Block = [u8; BLOCK_PIXELS];

/// A square block of raw index bytes, row-major.
///
/// Every byte is already masked to the conversion's bit depth, and the buffer
/// always holds exactly `size.pixels()` bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
	size: TileSize,
	data: Box<[u8]>,
}

impl Tile {
	/// Creates a tile from raw index bytes.
	///
	/// # Errors
	///
	/// Returns [`ConvertError::PixelCountMismatch`] if `data` does not hold
	/// exactly one tile's worth of pixels.
	pub fn new(size: TileSize, data: impl Into<Box<[u8]>>) -> Result<Self> {
		let data = data.into();
		if data.len() != size.pixels() {
			return Err(ConvertError::PixelCountMismatch {
				expected: size.pixels(),
				actual: data.len(),
			});
		}

		Ok(Self {
			size,
			data,
		})
	}

	/// Returns the tile size.
	pub fn size(&self) -> TileSize {
		self.size
	}

	/// Returns the raw index bytes.
	pub fn pixels(&self) -> &[u8] {
		&self.data
	}

	/// Returns the index at (x, y).
	pub fn get(&self, x: usize, y: usize) -> u8 {
		self.data[y * self.size.dim() + x]
	}

	/// Returns `true` if every pixel is index 0.
	pub fn is_blank(&self) -> bool {
		self.data.iter().all(|&p| p == 0)
	}

	/// Returns the tile mirrored horizontally (each row reversed).
	pub fn mirror_h(&self) -> Tile {
		let mut data = self.data.clone();
		for row in data.chunks_exact_mut(self.size.dim()) {
			row.reverse();
		}

		Self {
			size: self.size,
			data,
		}
	}

	/// Returns the tile mirrored vertically (row order reversed).
	pub fn mirror_v(&self) -> Tile {
		let data: Vec<u8> = self.data.chunks_exact(self.size.dim()).rev().flatten().copied().collect();

		Self {
			size: self.size,
			data: data.into_boxed_slice(),
		}
	}

	/// Returns the tile mirrored on both axes.
	pub fn mirror_hv(&self) -> Tile {
		self.mirror_h().mirror_v()
	}

	/// Copies out the 8x8 block at block coordinates (`bx`, `by`).
	///
	/// For 8x8 tiles the only block is (0, 0).
	pub fn block(&self, bx: usize, by: usize) -> Block {
		debug_assert!(bx < self.size.blocks_per_edge() && by < self.size.blocks_per_edge());

		let stride = self.size.dim();
		let mut block = [0u8; BLOCK_PIXELS];
		for (row, out) in block.chunks_exact_mut(BLOCK_DIM).enumerate() {
			let start = (by * BLOCK_DIM + row) * stride + bx * BLOCK_DIM;
			out.copy_from_slice(&self.data[start..start + BLOCK_DIM]);
		}
		block
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn numbered(size: TileSize) -> Tile {
		let data: Vec<u8> = (0..size.pixels()).map(|i| i as u8).collect();
		Tile::new(size, data).unwrap()
	}

	#[test]
	fn test_new_checks_length() {
		assert!(Tile::new(TileSize::TS8x8, vec![0u8; 63]).is_err());
		assert!(Tile::new(TileSize::TS16x16, vec![0u8; 256]).is_ok());
	}

	#[test]
	fn test_mirror_h() {
		let tile = numbered(TileSize::TS8x8);
		let mirrored = tile.mirror_h();
		assert_eq!(mirrored.get(0, 0), 7);
		assert_eq!(mirrored.get(7, 0), 0);
		assert_eq!(mirrored.get(0, 3), 31);
	}

	#[test]
	fn test_mirror_v() {
		let tile = numbered(TileSize::TS8x8);
		let mirrored = tile.mirror_v();
		assert_eq!(mirrored.get(0, 0), 56);
		assert_eq!(mirrored.get(5, 7), 5);
	}

	#[test]
	fn test_mirrors_are_involutions() {
		for size in [TileSize::TS8x8, TileSize::TS16x16] {
			let tile = numbered(size);
			assert_eq!(tile.mirror_h().mirror_h(), tile);
			assert_eq!(tile.mirror_v().mirror_v(), tile);
			assert_eq!(tile.mirror_hv().mirror_hv(), tile);
		}
	}

	#[test]
	fn test_mirrors_commute() {
		for size in [TileSize::TS8x8, TileSize::TS16x16] {
			let tile = numbered(size);
			assert_eq!(tile.mirror_h().mirror_v(), tile.mirror_v().mirror_h());
		}
	}

	#[test]
	fn test_block_quadrants() {
		let tile = numbered(TileSize::TS16x16);
		let top_left = tile.block(0, 0);
		let top_right = tile.block(1, 0);
		let bottom_left = tile.block(0, 1);
		let bottom_right = tile.block(1, 1);

		assert_eq!(top_left[0], 0);
		assert_eq!(top_left[8], 16);
		assert_eq!(top_right[0], 8);
		assert_eq!(bottom_left[0], 128);
		assert_eq!(bottom_right[63], 255);
	}

	#[test]
	fn test_block_of_small_tile_is_whole_tile() {
		let tile = numbered(TileSize::TS8x8);
		assert_eq!(&tile.block(0, 0)[..], tile.pixels());
	}
}
