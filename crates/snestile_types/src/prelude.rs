//! Prelude module for `snestile_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```no_run
//! use snestile_types::prelude::*;
//!
//! let options = Options {
//!     bit_depth: BitDepth::Bpp2,
//!     ..Default::default()
//! };
//! let converter = Converter::new(options).unwrap();
//! ```

#[doc(inline)]
pub use crate::gfx::{
	// Options
	BitDepth,
	// Pipeline
	Conversion,
	ConvertError,
	Converter,
	Diagnostics,
	Flip,
	MapEntry,
	Options,
	PaletteKind,
	// Source data
	PixelGrid,
	Pixels,
	SnesColor,
	SourcePalette,
	Tile,
	TileSize,
	Warning,
};

// Re-export the gfx module for advanced usage
#[doc(inline)]
pub use crate::gfx;
