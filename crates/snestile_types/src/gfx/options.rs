//! Conversion options.
//!
//! Bit depth and tile size are closed enumerations, and [`Options::resolve`]
//! rejects every invalid combination before a single pixel is processed.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use super::{
	diagnostics::{Diagnostics, Warning},
	error::{ConvertError, Result},
};

/// Number of bits used by each pixel of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u32")]
#[repr(u32)]
pub enum BitDepth {
	/// 4 colors per palette group
	Bpp2 = 2,

	/// 16 colors per palette group
	Bpp4 = 4,

	/// 256 colors, a single palette group
	Bpp8 = 8,
}

impl BitDepth {
	/// Returns the number of bits per pixel.
	pub fn bits(&self) -> u32 {
		*self as u32
	}

	/// Returns the AND mask that strips the palette group from a pixel.
	pub fn mask(&self) -> u8 {
		match self {
			BitDepth::Bpp2 => 0x03,
			BitDepth::Bpp4 => 0x0F,
			BitDepth::Bpp8 => 0xFF,
		}
	}

	/// Returns the number of colors addressable by one palette group.
	pub fn colors(&self) -> usize {
		1 << self.bits()
	}

	/// Returns the size of one packed 8x8 block in bytes.
	pub fn bytes_per_block(&self) -> usize {
		8 * self.bits() as usize
	}
}

impl Default for BitDepth {
	fn default() -> Self {
		Self::Bpp4
	}
}

impl TryFrom<u32> for BitDepth {
	type Error = ConvertError;

	fn try_from(value: u32) -> Result<Self> {
		match value {
			2 => Ok(Self::Bpp2),
			4 => Ok(Self::Bpp4),
			8 => Ok(Self::Bpp8),
			other => Err(ConvertError::InvalidBitDepth(other)),
		}
	}
}

impl FromStr for BitDepth {
	type Err = ConvertError;

	fn from_str(s: &str) -> Result<Self> {
		let value = s.trim().parse::<u32>().map_err(|_| ConvertError::InvalidBitDepth(0))?;
		Self::try_from(value)
	}
}

impl fmt::Display for BitDepth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}bpp", self.bits())
	}
}

/// Edge length of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
#[repr(u32)]
pub enum TileSize {
	/// 8x8 pixels
	TS8x8 = 8,

	/// 16x16 pixels, stored as four 8x8 blocks
	TS16x16 = 16,
}

impl TileSize {
	/// Returns the tile edge length in pixels.
	pub fn dim(&self) -> usize {
		*self as usize
	}

	/// Returns the number of pixels in one tile.
	pub fn pixels(&self) -> usize {
		self.dim() * self.dim()
	}

	/// Returns the number of 8x8 blocks per tile edge.
	pub fn blocks_per_edge(&self) -> usize {
		match self {
			TileSize::TS8x8 => 1,
			TileSize::TS16x16 => 2,
		}
	}
}

impl Default for TileSize {
	fn default() -> Self {
		Self::TS8x8
	}
}

impl FromStr for TileSize {
	type Err = ConvertError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"8x8" | "8" => Ok(Self::TS8x8),
			"16x16" | "16" => Ok(Self::TS16x16),
			_ => Err(ConvertError::InvalidTileSize(s.to_string())),
		}
	}
}

impl TryFrom<String> for TileSize {
	type Error = ConvertError;

	fn try_from(value: String) -> Result<Self> {
		value.parse()
	}
}

impl fmt::Display for TileSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{0}x{0}", self.dim())
	}
}

/// Options controlling a conversion.
///
/// Defaults: 4 bpp, 8x8 tiles, every optional mode off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
	/// Bits per pixel
	pub bit_depth: BitDepth,

	/// Tile size
	pub tile_size: TileSize,

	/// Encode quantized RGB directly per pixel instead of palette indices (8 bpp only)
	pub direct_color: bool,

	/// Emit the interleaved mode 7 stream instead of CHR and tile map data
	pub mode7: bool,

	/// Store identical tiles once
	pub optimize_dupes: bool,

	/// Store mirrored tiles once and reference them with flip flags
	pub optimize_mirrors: bool,
}

impl Options {
	/// Validates the options and returns the effective set.
	///
	/// Mode 7 has no flip bits, so mirror optimization is turned off there and
	/// reported as a warning. Any other invalid combination is an error.
	pub fn resolve(&self) -> Result<(Options, Diagnostics)> {
		let mut effective = *self;
		let mut diagnostics = Diagnostics::new();

		if effective.mode7 {
			if effective.bit_depth != BitDepth::Bpp8 {
				return Err(ConvertError::IncompatibleModeConfiguration(format!(
					"mode 7 requires 8bpp, got {}",
					effective.bit_depth
				)));
			}
			if effective.tile_size != TileSize::TS8x8 {
				return Err(ConvertError::IncompatibleModeConfiguration(format!(
					"mode 7 requires 8x8 tiles, got {}",
					effective.tile_size
				)));
			}
			if effective.optimize_mirrors {
				diagnostics.push(Warning::MirrorsIgnoredInMode7);
				effective.optimize_mirrors = false;
			}
		}

		if effective.direct_color && effective.bit_depth != BitDepth::Bpp8 {
			return Err(ConvertError::IncompatibleModeConfiguration(format!(
				"direct color requires 8bpp, got {}",
				effective.bit_depth
			)));
		}

		if effective.optimize_mirrors && !effective.optimize_dupes {
			return Err(ConvertError::IncompatibleModeConfiguration(
				"mirror optimization requires duplicate optimization".to_string(),
			));
		}

		Ok((effective, diagnostics))
	}
}

impl fmt::Display for Options {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {} tiles (direct color: {}, mode 7: {}, dupes: {}, mirrors: {})",
			self.bit_depth,
			self.tile_size,
			self.direct_color,
			self.mode7,
			self.optimize_dupes,
			self.optimize_mirrors
		)
	}
}
