//! Writing conversion results to disk.

use std::{
	ffi::OsString,
	path::{Path, PathBuf},
};

use anyhow::Context;
use snestile_rs::prelude::*;

/// File extensions of the produced streams.
mod extensions {
	pub const CHR: &str = "chr";
	pub const TILEMAP: &str = "nam";
	pub const MODE7: &str = "mo7";
	pub const PALETTE: &str = "pal";
}

/// Returns `<prefix>.<extension>`, keeping any dots already in the prefix.
fn output_path(prefix: &Path, extension: &str) -> PathBuf {
	let mut name = OsString::from(prefix.as_os_str());
	name.push(".");
	name.push(extension);
	PathBuf::from(name)
}

/// Lists the streams present in `conversion` with their output extension.
fn streams(conversion: &Conversion) -> Vec<(&'static str, &[u8])> {
	[
		(extensions::MODE7, conversion.mode7.as_deref()),
		(extensions::CHR, conversion.chr.as_deref()),
		(extensions::TILEMAP, conversion.tilemap.as_deref()),
		(extensions::PALETTE, conversion.palette.as_deref()),
	]
	.into_iter()
	.filter_map(|(extension, data)| data.map(|d| (extension, d)))
	.collect()
}

/// Writes every stream of `conversion` next to `prefix` and returns the written paths.
pub fn write_outputs(prefix: &Path, conversion: &Conversion) -> anyhow::Result<Vec<PathBuf>> {
	if let Some(parent) = prefix.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent).with_context(|| format!("Cannot create {}", parent.display()))?;
	}

	let mut written = Vec::new();
	for (extension, data) in streams(conversion) {
		let path = output_path(prefix, extension);
		std::fs::write(&path, data).with_context(|| format!("Cannot write {}", path.display()))?;
		written.push(path);
	}

	Ok(written)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn convert(options: Options) -> Conversion {
		let grid = PixelGrid::indexed(8, 8, vec![1; 64]).unwrap();
		let palette = SourcePalette::from_colors(&[[0, 0, 0], [255, 255, 255]]);
		Converter::new(options).unwrap().convert(&grid, Some(&palette)).unwrap()
	}

	#[test]
	fn test_output_path_appends_extension() {
		assert_eq!(output_path(Path::new("build/level"), "chr"), PathBuf::from("build/level.chr"));
		assert_eq!(output_path(Path::new("level.v2"), "pal"), PathBuf::from("level.v2.pal"));
	}

	#[test]
	fn test_streams_default_mode() {
		let conversion = convert(Options::default());
		let names: Vec<_> = streams(&conversion).into_iter().map(|(e, _)| e).collect();
		assert_eq!(names, vec!["chr", "nam", "pal"]);
	}

	#[test]
	fn test_streams_mode7() {
		let conversion = convert(Options {
			bit_depth: BitDepth::Bpp8,
			mode7: true,
			..Default::default()
		});
		let names: Vec<_> = streams(&conversion).into_iter().map(|(e, _)| e).collect();
		assert_eq!(names, vec!["mo7", "pal"]);
	}
}
