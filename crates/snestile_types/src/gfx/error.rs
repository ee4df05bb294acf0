//! Error types for tile conversion.

use thiserror::Error;

/// Errors that can occur while converting an image into SNES graphics data.
///
/// Every variant is fatal: a conversion that fails produces no output at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
	/// Image dimensions are not a multiple of the tile size
	#[error(
		"Image size {width}x{height} is not a multiple of the tile size ({tile}x{tile})"
	)]
	DimensionMismatch {
		/// Image width in pixels
		width: usize,
		/// Image height in pixels
		height: usize,
		/// Tile edge length in pixels
		tile: usize,
	},

	/// Pixel buffer does not hold `width * height` pixels
	#[error("Pixel buffer holds {actual} pixels, expected {expected}")]
	PixelCountMismatch {
		/// Expected number of pixels
		expected: usize,
		/// Actual number of pixels
		actual: usize,
	},

	/// Indexed mode without a usable RGB palette
	#[error("Unsupported palette mode: {0}")]
	UnsupportedPaletteMode(String),

	/// Mutually exclusive options were requested together
	#[error("Incompatible configuration: {0}")]
	IncompatibleModeConfiguration(String),

	/// A tile map field does not fit its bit field
	#[error(
		"Tile map entry out of range: index {index} (max {max_index}), palette {palette} (max 7), flip {flip} (max 3)"
	)]
	MapIndexOverflow {
		/// Tile index after renumbering
		index: usize,
		/// Largest index the target format can address
		max_index: usize,
		/// Palette group number
		palette: u8,
		/// Flip flags
		flip: u8,
	},

	/// Bit depth is not one of 2, 4 or 8
	#[error("Invalid bit depth: {0} (expected 2, 4 or 8)")]
	InvalidBitDepth(u32),

	/// Tile size is not one of 8x8 or 16x16
	#[error("Invalid tile size: {0} (expected 8x8 or 16x16)")]
	InvalidTileSize(String),

	/// Not enough data to decode
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},
}

/// Result type used throughout the conversion engine.
pub type Result<T> = std::result::Result<T, ConvertError>;
