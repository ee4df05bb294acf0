//! SNES tile graphics conversion.

mod error;

pub mod convert;
pub mod dedup;
pub mod diagnostics;
pub mod extract;
pub mod mode7;
pub mod options;
pub mod palette;
pub mod pixels;
pub mod planar;
pub mod tile;
pub mod tilemap;


// Re-export unified error type
pub use error::{ConvertError, Result};

pub use convert::{Conversion, Converter};
pub use dedup::{Deduplicated, Deduplicator, TileStore};
pub use diagnostics::{Diagnostics, Warning};
pub use extract::{ExtractedTile, Extraction, extract_tiles};
pub use mode7::encode_mode7;
pub use options::{BitDepth, Options, TileSize};
pub use palette::{SnesColor, direct_color_byte, encode_palette, quantize_palette};
pub use pixels::{PaletteKind, PixelGrid, Pixels, SourcePalette};
pub use planar::{decode_block, encode_chr, pack_block};
pub use tile::{Block, Tile};
pub use tilemap::{Flip, MapEntry, encode_tilemap};
