//! Mode 7 interleaved stream.
//!
//! Mode 7 VRAM interleaves the tile map and the character data: the low byte
//! of each word is a tile map entry (a plain 8-bit tile index), the high byte
//! is one 8bpp pixel. Both lanes advance one byte per word and the shorter
//! lane is zero-filled.

use super::{
	error::{ConvertError, Result},
	tile::Tile,
	tilemap::MapEntry,
};

/// Largest tile index a mode 7 tile map entry can hold.
pub const MAX_MODE7_INDEX: usize = 0xFF;

/// Encodes tiles and tile map entries as interleaved little-endian words.
///
/// # Errors
///
/// Returns [`ConvertError::MapIndexOverflow`] if an entry's index exceeds 255.
pub fn encode_mode7(tiles: &[Tile], entries: &[MapEntry]) -> Result<Vec<u8>> {
	let colors: Vec<u8> = tiles.iter().flat_map(|t| t.pixels().iter().copied()).collect();
	let words = colors.len().max(entries.len());
	let mut buffer = Vec::with_capacity(words * 2);

	for i in 0..words {
		let index = match entries.get(i) {
			Some(entry) if entry.index > MAX_MODE7_INDEX => {
				return Err(ConvertError::MapIndexOverflow {
					index: entry.index,
					max_index: MAX_MODE7_INDEX,
					palette: entry.palette,
					flip: entry.flip.bits(),
				});
			}
			Some(entry) => entry.index as u8,
			None => 0,
		};
		let color = colors.get(i).copied().unwrap_or(0);

		buffer.extend_from_slice(&[index, color]);
	}

	log::debug!("interleaved {} map entries with {} pixels", entries.len(), colors.len());
	Ok(buffer)
}
