#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `snestile-rs` converts indexed images into SNES graphics data: bitplane
//! tiles (CHR), tile maps, palettes and mode 7 streams.
//!
//! The conversion engine lives in [`snestile_types`]; this crate re-exports it
//! and ships the `snestile` command-line tool.
//!
pub use snestile_types::*;

// Re-export snestile_types for convenience
pub use snestile_types;
