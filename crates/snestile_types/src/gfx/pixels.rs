//! Decoded source image data.
//!
//! A [`PixelGrid`] is produced by an image decoder and read once by the
//! conversion engine. Indexed grids come with a [`SourcePalette`].

use std::fmt;

use super::error::{ConvertError, Result};

/// Pixel storage of a [`PixelGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pixels {
	/// One palette index per pixel. Bits above the bit depth select the palette group.
	Indexed(Vec<u8>),

	/// One RGB triple per pixel
	Rgb(Vec<[u8; 3]>),
}

impl Pixels {
	/// Returns the number of pixels.
	pub fn len(&self) -> usize {
		match self {
			Pixels::Indexed(data) => data.len(),
			Pixels::Rgb(data) => data.len(),
		}
	}

	/// Returns `true` if there are no pixels.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Immutable 2D grid of pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
	width: usize,
	height: usize,
	pixels: Pixels,
}

impl PixelGrid {
	/// Creates a grid from raw pixel storage.
	///
	/// # Errors
	///
	/// Returns [`ConvertError::PixelCountMismatch`] if `pixels` does not hold
	/// exactly `width * height` pixels.
	pub fn new(width: usize, height: usize, pixels: Pixels) -> Result<Self> {
		let expected = width * height;
		if pixels.len() != expected {
			return Err(ConvertError::PixelCountMismatch {
				expected,
				actual: pixels.len(),
			});
		}

		Ok(Self {
			width,
			height,
			pixels,
		})
	}

	/// Creates an indexed grid.
	pub fn indexed(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
		Self::new(width, height, Pixels::Indexed(data))
	}

	/// Creates an RGB grid from packed `R, G, B` bytes.
	pub fn rgb_from_bytes(width: usize, height: usize, data: &[u8]) -> Result<Self> {
		if data.len() != width * height * 3 {
			return Err(ConvertError::PixelCountMismatch {
				expected: width * height,
				actual: data.len() / 3,
			});
		}

		let pixels = data.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
		Self::new(width, height, Pixels::Rgb(pixels))
	}

	/// Returns the width in pixels.
	pub fn width(&self) -> usize {
		self.width
	}

	/// Returns the height in pixels.
	pub fn height(&self) -> usize {
		self.height
	}

	/// Returns the pixel storage.
	pub fn pixels(&self) -> &Pixels {
		&self.pixels
	}

	/// Returns `true` if the grid holds palette indices.
	pub fn is_indexed(&self) -> bool {
		matches!(self.pixels, Pixels::Indexed(_))
	}

	/// Resolves an indexed grid through `palette` into an RGB grid.
	///
	/// Indices past the end of the palette resolve to black. Grayscale
	/// entries expand to equal channels. RGB grids are returned unchanged.
	pub fn to_rgb(&self, palette: &SourcePalette) -> Result<PixelGrid> {
		let Pixels::Indexed(data) = &self.pixels else {
			return Ok(self.clone());
		};

		let pixels = data.iter().map(|&index| palette.color(index as usize).unwrap_or([0; 3])).collect();

		Self::new(self.width, self.height, Pixels::Rgb(pixels))
	}
}

impl fmt::Display for PixelGrid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let kind = if self.is_indexed() {
			"indexed"
		} else {
			"RGB"
		};
		write!(f, "{}x{} {} image", self.width, self.height, kind)
	}
}

/// Channel layout of a decoded source palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
	/// Three bytes per entry: R, G, B
	Rgb,

	/// One byte per entry
	Grayscale,
}

impl PaletteKind {
	/// Returns the number of bytes per palette entry.
	pub fn channels(&self) -> usize {
		match self {
			Self::Rgb => 3,
			Self::Grayscale => 1,
		}
	}
}

impl fmt::Display for PaletteKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rgb => write!(f, "RGB"),
			Self::Grayscale => write!(f, "grayscale"),
		}
	}
}

/// Palette of the source image, as reported by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePalette {
	kind: PaletteKind,
	data: Vec<u8>,
}

impl SourcePalette {
	/// Creates a palette from raw entry bytes.
	pub fn new(kind: PaletteKind, data: Vec<u8>) -> Self {
		Self {
			kind,
			data,
		}
	}

	/// Creates an RGB palette from colors.
	pub fn from_colors(colors: &[[u8; 3]]) -> Self {
		Self::new(PaletteKind::Rgb, colors.iter().flatten().copied().collect())
	}

	/// Returns the channel layout.
	pub fn kind(&self) -> PaletteKind {
		self.kind
	}

	/// Returns the raw entry bytes.
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Fails with [`ConvertError::UnsupportedPaletteMode`] unless this is an RGB palette.
	pub fn ensure_rgb(&self) -> Result<()> {
		if self.kind != PaletteKind::Rgb {
			return Err(ConvertError::UnsupportedPaletteMode(format!(
				"image must have an RGB palette, got {}",
				self.kind
			)));
		}
		Ok(())
	}

	/// Returns the number of complete entries.
	pub fn len(&self) -> usize {
		self.data.len() / self.kind.channels()
	}

	/// Returns `true` if there are no complete entries.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the color at `index` as RGB.
	pub fn color(&self, index: usize) -> Option<[u8; 3]> {
		match self.kind {
			PaletteKind::Rgb => {
				let start = index * 3;
				self.data.get(start..start + 3).map(|c| [c[0], c[1], c[2]])
			}
			PaletteKind::Grayscale => self.data.get(index).map(|&v| [v; 3]),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_indexed_grid() {
		let grid = PixelGrid::indexed(2, 2, vec![0, 1, 2, 3]).unwrap();
		assert_eq!(grid.width(), 2);
		assert_eq!(grid.height(), 2);
		assert!(grid.is_indexed());
		assert_eq!(grid.to_string(), "2x2 indexed image");
	}

	#[test]
	fn test_pixel_count_mismatch() {
		let result = PixelGrid::indexed(4, 4, vec![0; 15]);
		assert_eq!(
			result,
			Err(ConvertError::PixelCountMismatch {
				expected: 16,
				actual: 15
			})
		);
	}

	#[test]
	fn test_rgb_from_bytes() {
		let grid = PixelGrid::rgb_from_bytes(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
		assert_eq!(grid.pixels(), &Pixels::Rgb(vec![[1, 2, 3], [4, 5, 6]]));
		assert!(PixelGrid::rgb_from_bytes(2, 1, &[1, 2, 3]).is_err());
	}

	#[test]
	fn test_to_rgb() {
		let palette = SourcePalette::from_colors(&[[0, 0, 0], [255, 0, 0]]);
		let grid = PixelGrid::indexed(3, 1, vec![1, 0, 9]).unwrap();
		let rgb = grid.to_rgb(&palette).unwrap();
		assert_eq!(rgb.pixels(), &Pixels::Rgb(vec![[255, 0, 0], [0, 0, 0], [0, 0, 0]]));
	}

	#[test]
	fn test_to_rgb_grayscale_palette() {
		let palette = SourcePalette::new(PaletteKind::Grayscale, vec![0, 128, 255]);
		assert_eq!(palette.len(), 3);
		assert!(palette.ensure_rgb().is_err());

		let grid = PixelGrid::indexed(3, 1, vec![1, 2, 7]).unwrap();
		let rgb = grid.to_rgb(&palette).unwrap();
		assert_eq!(rgb.pixels(), &Pixels::Rgb(vec![[128; 3], [255; 3], [0; 3]]));
	}

	#[test]
	fn test_palette_color_lookup() {
		let palette = SourcePalette::new(PaletteKind::Rgb, vec![1, 2, 3, 4, 5]);
		assert_eq!(palette.len(), 1);
		assert_eq!(palette.color(0), Some([1, 2, 3]));
		assert_eq!(palette.color(1), None);
	}
}
