use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::ziff::{ChunkTree, ChunkType, ReadOptions, Result, parse_tree_with};

/// In-memory Ziff/GEO file.
///
/// Owns the raw bytes; every parsed [`ChunkTree`] borrows from it.
#[derive(Debug, Clone)]
pub struct ZiffFile {
	bytes: Vec<u8>,
}

impl ZiffFile {
	/// Read a whole file into memory.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Ok(Self::from_bytes(bytes))
	}

	/// Wrap an already loaded buffer.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Raw file bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Parse the chunk tree with default options.
	pub fn tree(&self) -> Result<ChunkTree<'_>> {
		self.tree_with(ReadOptions::default())
	}

	/// Parse the chunk tree with explicit options.
	pub fn tree_with(&self, options: ReadOptions) -> Result<ChunkTree<'_>> {
		parse_tree_with(&self.bytes, options)
	}

	/// Parse the tree and collect per-tag and shape statistics.
	pub fn scan_chunk_stats(&self, options: ReadOptions) -> Result<ChunkStats> {
		let tree = self.tree_with(options)?;
		Ok(ChunkStats::collect(&tree))
	}
}

/// Summary counts over a parsed chunk tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkStats {
	/// Root chunk tag.
	pub root_tag: ChunkType,
	/// Root chunk declared payload size.
	pub root_size: u32,
	/// Total node count, root included.
	pub chunk_count: u32,
	/// Nodes without children.
	pub leaf_count: u32,
	/// Deepest node depth; the root is depth 0.
	pub max_depth: usize,
	/// Bytes after the root chunk.
	pub trailing_len: usize,
	/// Occurrences of each tag.
	pub tags: HashMap<ChunkType, u32>,
}

impl ChunkStats {
	/// Walk `tree` once and tally its nodes.
	pub fn collect(tree: &ChunkTree<'_>) -> Self {
		let mut stats = Self {
			root_tag: tree.root.tag,
			root_size: tree.root.declared_size,
			chunk_count: 0,
			leaf_count: 0,
			max_depth: 0,
			trailing_len: tree.trailing_len(),
			tags: HashMap::new(),
		};

		for (depth, node) in tree.walk() {
			stats.chunk_count += 1;
			if node.is_leaf() {
				stats.leaf_count += 1;
			}
			stats.max_depth = stats.max_depth.max(depth);
			*stats.tags.entry(node.tag).or_insert(0) += 1;
		}

		stats
	}

	/// Tag counts sorted by descending count, then tag name.
	pub fn sorted_tags(&self) -> Vec<(ChunkType, u32)> {
		let mut entries: Vec<_> = self.tags.iter().map(|(tag, count)| (*tag, *count)).collect();
		entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.as_str().cmp(right.0.as_str())));
		entries
	}
}

/// Load `path`, parse it once, and hand the borrowed tree to `consumer`.
///
/// The buffer lives for the duration of the call, so `consumer` must extract
/// whatever it needs before returning.
pub fn import_geo<T>(path: impl AsRef<Path>, options: ReadOptions, consumer: impl FnOnce(&ChunkTree<'_>) -> T) -> Result<T> {
	let file = ZiffFile::open(path)?;
	let tree = file.tree_with(options)?;
	Ok(consumer(&tree))
}
