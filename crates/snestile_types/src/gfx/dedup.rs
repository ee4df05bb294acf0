//! Canonical tile storage with duplicate and mirror elimination.

use std::collections::HashMap;

use super::{
	extract::ExtractedTile,
	tile::Tile,
	tilemap::{Flip, MapEntry},
};

/// Ordered set of unique tiles. Insertion order is output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileStore {
	tiles: Vec<Tile>,
	lookup: HashMap<Tile, usize>,
}

impl TileStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of stored tiles.
	pub fn len(&self) -> usize {
		self.tiles.len()
	}

	/// Returns `true` if nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.tiles.is_empty()
	}

	/// Returns the stored tiles in output order.
	pub fn tiles(&self) -> &[Tile] {
		&self.tiles
	}

	/// Returns the position of a tile with exactly this content.
	pub fn find(&self, tile: &Tile) -> Option<usize> {
		self.lookup.get(tile).copied()
	}

	/// Appends a tile and returns its position.
	///
	/// Only the first copy of identical content is registered for lookup.
	pub fn push(&mut self, tile: Tile) -> usize {
		let index = self.tiles.len();
		self.lookup.entry(tile.clone()).or_insert(index);
		self.tiles.push(tile);
		index
	}

	/// Consumes the store and returns the tiles.
	pub fn into_tiles(self) -> Vec<Tile> {
		self.tiles
	}
}

/// Result of deduplicating a tile sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduplicated {
	/// Canonical tiles
	pub store: TileStore,

	/// One entry per input tile, in input order
	pub entries: Vec<MapEntry>,
}

/// Builds a [`TileStore`] and the matching map entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deduplicator {
	optimize_dupes: bool,
	optimize_mirrors: bool,
}

impl Deduplicator {
	/// Creates a deduplicator.
	///
	/// `optimize_mirrors` only has an effect together with `optimize_dupes`.
	pub fn new(optimize_dupes: bool, optimize_mirrors: bool) -> Self {
		Self {
			optimize_dupes,
			optimize_mirrors,
		}
	}

	/// Deduplicates `tiles` in order.
	///
	/// Without duplicate optimization every tile is stored and its index is
	/// its cell position. Otherwise mirrored candidates are tried in the order
	/// horizontal, vertical, both; an exact match overrides any of them.
	pub fn run(&self, tiles: &[ExtractedTile]) -> Deduplicated {
		let mut store = TileStore::new();
		let mut entries = Vec::with_capacity(tiles.len());

		for (cell, extracted) in tiles.iter().enumerate() {
			let (index, flip) = if self.optimize_dupes {
				self.place(&mut store, &extracted.tile)
			} else {
				store.push(extracted.tile.clone());
				(cell, Flip::None)
			};

			entries.push(MapEntry::new(index, extracted.palette, flip));
		}

		log::debug!("{} tiles reduced to {} unique", tiles.len(), store.len());

		Deduplicated {
			store,
			entries,
		}
	}

	fn place(&self, store: &mut TileStore, tile: &Tile) -> (usize, Flip) {
		if let Some(index) = store.find(tile) {
			return (index, Flip::None);
		}

		if self.optimize_mirrors {
			let candidates = [
				(tile.mirror_h(), Flip::Horizontal),
				(tile.mirror_v(), Flip::Vertical),
				(tile.mirror_hv(), Flip::Both),
			];
			for (candidate, flip) in candidates {
				if let Some(index) = store.find(&candidate) {
					return (index, flip);
				}
			}
		}

		(store.push(tile.clone()), Flip::None)
	}
}
