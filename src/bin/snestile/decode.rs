//! Source image decoding.
//!
//! Indexed PNGs are read with the `png` crate so raw palette indices (and the
//! palette group bits above the bit depth) survive. Grayscale PNGs of up to 8
//! bits keep their raw samples with a grayscale ramp as palette. Everything
//! else goes through the `image` crate as RGB and is only usable in direct
//! color mode.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, bail};
use log::debug;
use snestile_rs::prelude::*;

/// A decoded source image.
#[derive(Debug)]
pub struct DecodedImage {
	/// Pixel data
	pub grid: PixelGrid,

	/// Palette of an indexed image
	pub palette: Option<SourcePalette>,
}

/// Loads an image file.
pub fn load(path: &Path) -> anyhow::Result<DecodedImage> {
	let is_png = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("png"));

	if is_png {
		if let Some(image) = load_png_samples(path)? {
			return Ok(image);
		}
		debug!("{} has no palette-like samples, decoding as RGB", path.display());
	}

	let rgb = image::open(path).with_context(|| format!("Cannot open image {}", path.display()))?.to_rgb8();
	let (width, height) = rgb.dimensions();
	let grid = PixelGrid::rgb_from_bytes(width as usize, height as usize, rgb.as_raw())?;

	Ok(DecodedImage {
		grid,
		palette: None,
	})
}

/// Decodes an indexed or low-depth grayscale PNG, or returns `None` for any
/// other color type.
fn load_png_samples(path: &Path) -> anyhow::Result<Option<DecodedImage>> {
	let file = File::open(path).with_context(|| format!("Cannot open image {}", path.display()))?;
	let mut decoder = png::Decoder::new(BufReader::new(file));
	decoder.set_transformations(png::Transformations::IDENTITY);

	let mut reader =
		decoder.read_info().with_context(|| format!("Failed to read PNG info from {}", path.display()))?;

	let (color_type, bit_depth, plte) = {
		let info = reader.info();
		(info.color_type, info.bit_depth as u8, info.palette.as_ref().map(|p| p.to_vec()))
	};
	let palette = match color_type {
		png::ColorType::Indexed => plte.map(|data| SourcePalette::new(PaletteKind::Rgb, data)),
		png::ColorType::Grayscale if bit_depth <= 8 => {
			Some(SourcePalette::new(PaletteKind::Grayscale, grayscale_ramp(bit_depth)))
		}
		_ => return Ok(None),
	};

	let mut buf = vec![0u8; reader.output_buffer_size()];
	let frame =
		reader.next_frame(&mut buf).with_context(|| format!("Failed to decode PNG {}", path.display()))?;

	let width = frame.width as usize;
	let height = frame.height as usize;
	let indices = unpack_indices(&buf[..frame.buffer_size()], frame.line_size, width, height, frame.bit_depth as u8)?;

	debug!(
		"{:?} PNG: {}x{} at {} bits, {} palette entries",
		color_type,
		width,
		height,
		frame.bit_depth as u8,
		palette.as_ref().map_or(0, SourcePalette::len)
	);

	Ok(Some(DecodedImage {
		grid: PixelGrid::indexed(width, height, indices)?,
		palette,
	}))
}

/// Builds the intensity of every sample value of a `bit_depth`-bit grayscale image.
fn grayscale_ramp(bit_depth: u8) -> Vec<u8> {
	let max = (1u16 << bit_depth) - 1;
	(0..=max).map(|v| (v * 255 / max) as u8).collect()
}

/// Expands packed rows of 1, 2, 4 or 8-bit indices to one byte per pixel.
///
/// Sub-byte pixels are stored leftmost pixel in the most significant bits.
fn unpack_indices(
	data: &[u8],
	line_size: usize,
	width: usize,
	height: usize,
	bit_depth: u8,
) -> anyhow::Result<Vec<u8>> {
	if !matches!(bit_depth, 1 | 2 | 4 | 8) {
		bail!("Unsupported indexed bit depth: {bit_depth}");
	}
	if data.len() < line_size * height {
		bail!("PNG data too short: expected {} bytes, got {}", line_size * height, data.len());
	}

	let depth = usize::from(bit_depth);
	let per_byte = 8 / depth;
	let mask = ((1u16 << depth) - 1) as u8;
	let mut indices = Vec::with_capacity(width * height);

	for row in data.chunks_exact(line_size).take(height) {
		for x in 0..width {
			let byte = row[x / per_byte];
			let shift = 8 - depth * (x % per_byte + 1);
			indices.push((byte >> shift) & mask);
		}
	}

	Ok(indices)
}
