//! Tile map entries and their packed 16-bit form.
//!
//! Word layout, most significant bit first:
//!
//! ```text
//! VH.PPPII IIIIIIII
//! ```
//!
//! - `V`/`H`: vertical/horizontal flip
//! - `.`: priority, always 0
//! - `PPP`: palette group
//! - `II...`: 10-bit index of the 8x8 tile in CHR space

use std::fmt;

use super::{
	error::{ConvertError, Result},
	extract::MAX_PALETTE_GROUP,
	options::TileSize,
};

/// Largest 8x8 tile index addressable by a tile map entry.
pub const MAX_TILE_INDEX: usize = 0x3FF;

/// Size of one packed tile map entry in bytes.
pub const ENTRY_SIZE: usize = 2;

/// Orientation a tile is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Flip {
	/// Drawn as stored
	#[default]
	None = 0b00,

	/// Mirrored horizontally
	Horizontal = 0b01,

	/// Mirrored vertically
	Vertical = 0b10,

	/// Mirrored on both axes
	Both = 0b11,
}

impl Flip {
	/// Returns the 2-bit flag field (bit 0 horizontal, bit 1 vertical).
	pub fn bits(&self) -> u8 {
		*self as u8
	}

	/// Converts a 2-bit flag field back to a `Flip`.
	pub fn from_bits(bits: u8) -> Option<Self> {
		match bits {
			0b00 => Some(Self::None),
			0b01 => Some(Self::Horizontal),
			0b10 => Some(Self::Vertical),
			0b11 => Some(Self::Both),
			_ => None,
		}
	}
}

impl fmt::Display for Flip {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::None => write!(f, "-"),
			Self::Horizontal => write!(f, "H"),
			Self::Vertical => write!(f, "V"),
			Self::Both => write!(f, "HV"),
		}
	}
}

/// Reference from one screen cell to a stored tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapEntry {
	/// Index of the tile in the tile store
	pub index: usize,

	/// Palette group number
	pub palette: u8,

	/// Orientation
	pub flip: Flip,
}

impl MapEntry {
	/// Creates a new entry.
	pub fn new(index: usize, palette: u8, flip: Flip) -> Self {
		Self {
			index,
			palette,
			flip,
		}
	}

	/// Returns the index in 8x8 CHR space.
	///
	/// A 16x16 tile covers a 2x2 block of 8x8 tiles, and CHR rows are 16
	/// blocks wide, so eight 16x16 tiles fill two CHR rows.
	pub fn chr_index(&self, tile_size: TileSize) -> usize {
		match tile_size {
			TileSize::TS8x8 => self.index,
			TileSize::TS16x16 => self.index / 8 * 32 + self.index % 8 * 2,
		}
	}

	/// Packs the entry into a tile map word.
	///
	/// # Errors
	///
	/// Returns [`ConvertError::MapIndexOverflow`] if the CHR index exceeds 1023
	/// or the palette group exceeds 7.
	pub fn to_word(&self, tile_size: TileSize) -> Result<u16> {
		let index = self.chr_index(tile_size);
		if index > MAX_TILE_INDEX || self.palette > MAX_PALETTE_GROUP {
			return Err(ConvertError::MapIndexOverflow {
				index,
				max_index: MAX_TILE_INDEX,
				palette: self.palette,
				flip: self.flip.bits(),
			});
		}

		Ok((u16::from(self.flip.bits()) << 14) | (u16::from(self.palette) << 10) | index as u16)
	}

	/// Unpacks a tile map word. The index is returned in 8x8 CHR space.
	pub fn from_word(word: u16) -> Self {
		Self {
			index: usize::from(word) & MAX_TILE_INDEX,
			palette: ((word >> 10) & 0x07) as u8,
			flip: Flip::from_bits((word >> 14) as u8).unwrap_or_default(),
		}
	}
}

impl fmt::Display for MapEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{} pal {} flip {}", self.index, self.palette, self.flip)
	}
}

/// Packs a sequence of entries as little-endian tile map words.
pub fn encode_tilemap(entries: &[MapEntry], tile_size: TileSize) -> Result<Vec<u8>> {
	let mut buffer = Vec::with_capacity(entries.len() * ENTRY_SIZE);
	for entry in entries {
		buffer.extend_from_slice(&entry.to_word(tile_size)?.to_le_bytes());
	}
	Ok(buffer)
}
