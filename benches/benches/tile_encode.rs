//! Benchmark suite for tile conversion
//!
//! Measures the stages of the conversion pipeline separately and end to end.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use snestile_benches::{generate_test_image, generate_test_palette, sizes};
use snestile_types::gfx::{
	BitDepth, Converter, Deduplicator, Options, TileSize, encode_chr, extract_tiles, pack_block,
};
use std::hint::black_box;

/// Benchmark slicing images into tiles
fn bench_extract(c: &mut Criterion) {
	let mut group = c.benchmark_group("extract");

	for (name, (w, h)) in [("screen", sizes::SCREEN), ("map_64x64", sizes::MAP_64X64)] {
		let grid = generate_test_image(w, h);
		group.throughput(Throughput::Elements((w * h) as u64));
		group.bench_with_input(BenchmarkId::new("8x8_4bpp", name), &grid, |b, grid| {
			b.iter(|| extract_tiles(black_box(grid), TileSize::TS8x8, BitDepth::Bpp4, false));
		});
	}

	group.finish();
}

/// Benchmark deduplication with and without mirror lookups
fn bench_dedup(c: &mut Criterion) {
	let mut group = c.benchmark_group("dedup");

	let grid = generate_test_image(sizes::LEVEL.0, sizes::LEVEL.1);
	let extraction = match extract_tiles(&grid, TileSize::TS8x8, BitDepth::Bpp4, false) {
		Ok(e) => e,
		Err(e) => {
			eprintln!("Warning: Could not extract tiles: {}", e);
			return;
		}
	};

	group.throughput(Throughput::Elements(extraction.tiles.len() as u64));
	for (name, dupes, mirrors) in [("none", false, false), ("dupes", true, false), ("mirrors", true, true)] {
		let dedup = Deduplicator::new(dupes, mirrors);
		group.bench_function(name, |b| {
			b.iter(|| dedup.run(black_box(&extraction.tiles)));
		});
	}

	group.finish();
}

/// Benchmark bitplane packing at every depth
fn bench_pack(c: &mut Criterion) {
	let mut group = c.benchmark_group("pack");

	let block: [u8; 64] = core::array::from_fn(|i| (i * 7 % 256) as u8);
	for depth in [BitDepth::Bpp2, BitDepth::Bpp4, BitDepth::Bpp8] {
		let masked = block.map(|p| p & depth.mask());
		group.bench_with_input(BenchmarkId::new("block", depth), &masked, |b, block| {
			b.iter(|| pack_block(black_box(block), depth));
		});
	}

	let grid = generate_test_image(sizes::MAP_64X64.0, sizes::MAP_64X64.1);
	if let Ok(extraction) = extract_tiles(&grid, TileSize::TS16x16, BitDepth::Bpp4, false) {
		let tiles: Vec<_> = extraction.tiles.into_iter().map(|t| t.tile).collect();
		group.throughput(Throughput::Elements(tiles.len() as u64));
		group.bench_function("chr_16x16", |b| {
			b.iter(|| encode_chr(black_box(&tiles), TileSize::TS16x16, BitDepth::Bpp4));
		});
	}

	group.finish();
}

/// Full end-to-end benchmark
fn bench_convert(c: &mut Criterion) {
	let mut group = c.benchmark_group("convert");

	let grid = generate_test_image(sizes::SCREEN.0, sizes::SCREEN.1);
	let palette = generate_test_palette();
	let options = Options {
		optimize_dupes: true,
		optimize_mirrors: true,
		..Default::default()
	};
	let converter = match Converter::new(options) {
		Ok(c) => c,
		Err(e) => {
			eprintln!("Warning: Invalid options: {}", e);
			return;
		}
	};

	group.throughput(Throughput::Elements((grid.width() * grid.height()) as u64));
	group.bench_function("screen_4bpp", |b| {
		b.iter(|| converter.convert(black_box(&grid), Some(&palette)));
	});

	group.finish();
}

criterion_group!(benches, bench_extract, bench_dedup, bench_pack, bench_convert);

criterion_main!(benches);
