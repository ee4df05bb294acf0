//! Hardware color encoding.
//!
//! Palette entries are 15-bit words, `0BBBBBGG GGGRRRRR`, each channel
//! truncated from 8 bits. Direct color pixels are single `BBGGGRRR` bytes.

use std::fmt;

use super::{error::Result, options::BitDepth, pixels::SourcePalette};

/// Number of palette groups addressable by a tile map entry.
pub const PALETTE_GROUPS: usize = 8;

/// Size of one encoded palette entry in bytes.
pub const COLOR_SIZE: usize = 2;

/// A 15-bit BGR hardware color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SnesColor(u16);

impl SnesColor {
	/// Largest valid color word.
	pub const MAX: u16 = 0x7FFF;

	/// Quantizes an 8-bit RGB color by truncating each channel to 5 bits.
	pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
		Self(((b as u16 / 8) << 10) | ((g as u16 / 8) << 5) | (r as u16 / 8))
	}

	/// Returns the raw color word.
	pub const fn raw(&self) -> u16 {
		self.0
	}

	/// Expands the color back to 8 bits per channel.
	pub const fn to_rgb(&self) -> [u8; 3] {
		let r = (self.0 & 0x1F) as u8;
		let g = ((self.0 >> 5) & 0x1F) as u8;
		let b = ((self.0 >> 10) & 0x1F) as u8;
		[r << 3, g << 3, b << 3]
	}
}

impl From<SnesColor> for u16 {
	fn from(color: SnesColor) -> Self {
		color.0
	}
}

impl fmt::Display for SnesColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "${:04X}", self.0)
	}
}

/// Requantizes an RGB color to a direct color byte (`BBGGGRRR`).
pub fn direct_color_byte(rgb: [u8; 3]) -> u8 {
	let [r, g, b] = rgb;
	((b / 64) << 6) | ((g / 32) << 3) | (r / 32)
}

/// Converts a source palette to hardware colors.
///
/// At most `8 * 2^bpp` colors are kept: one full palette per palette group.
///
/// # Errors
///
/// Returns [`ConvertError::UnsupportedPaletteMode`](super::ConvertError::UnsupportedPaletteMode)
/// if the palette is not RGB.
pub fn quantize_palette(palette: &SourcePalette, bit_depth: BitDepth) -> Result<Vec<SnesColor>> {
	palette.ensure_rgb()?;

	let max_bytes = 3 * PALETTE_GROUPS * bit_depth.colors();
	let len = palette.data().len().min(max_bytes);
	let colors: Vec<_> =
		palette.data()[..len].chunks_exact(3).map(|c| SnesColor::from_rgb(c[0], c[1], c[2])).collect();

	log::debug!("quantized {} of {} palette entries", colors.len(), palette.len());
	Ok(colors)
}

/// Encodes hardware colors as little-endian words.
pub fn encode_palette(colors: &[SnesColor]) -> Vec<u8> {
	let mut buffer = Vec::with_capacity(colors.len() * COLOR_SIZE);
	for color in colors {
		buffer.extend_from_slice(&color.raw().to_le_bytes());
	}
	buffer
}
