//! This crate provides the tile encoding engine of the `snestile-rs` project.
//!
//! It turns a decoded image (palette indices or RGB pixels, plus an optional
//! palette) into the data consumed by SNES video hardware:
//!
//! - **CHR**: bitplane-packed 8x8 tiles at 2, 4 or 8 bits per pixel
//! - **Tile map**: one 16-bit word per screen cell (index, palette group, flip flags)
//! - **Palette**: 15-bit BGR colors
//! - **Mode 7**: tile map bytes and 8bpp pixels interleaved in one word stream
//!
//! # Examples
//!
//! ```
//! use snestile_types::prelude::*;
//!
//! // 16x8 image: two identical 8x8 tiles using palette group 1 at 4bpp
//! let grid = PixelGrid::indexed(16, 8, vec![0x11; 16 * 8]).unwrap();
//! let palette = SourcePalette::from_colors(&[[0, 0, 0], [255, 255, 255]]);
//!
//! let options = Options {
//!     optimize_dupes: true,
//!     ..Default::default()
//! };
//! let conversion = Converter::new(options).unwrap().convert(&grid, Some(&palette)).unwrap();
//!
//! assert_eq!(conversion.tiles.len(), 1);
//! assert_eq!(conversion.tilemap.unwrap(), vec![0x00, 0x04, 0x00, 0x04]);
//! ```

pub mod gfx;

/// `use snestile_types::prelude::*;` to import commonly used items.
pub mod prelude;
