use log::{debug, trace};

use crate::ziff::bytes::Cursor;
use crate::ziff::chunk::CHUNK_HEADER_LEN;
use crate::ziff::tag::raw_tag_label;
use crate::ziff::{ChunkNode, ChunkTree, ChunkType, Result, ZiffError};

const LOG_TARGET: &str = "ziffgeo::reader";

/// Hard cap on [`ReadOptions::max_depth`]; larger requests are clamped to it.
pub const MAX_DEPTH_LIMIT: u32 = 256;

/// Chunk tree parse options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
	/// Deepest permitted nesting level; the root is depth 0. Capped at [`MAX_DEPTH_LIMIT`].
	pub max_depth: u32,
	/// Accept bytes after the root chunk instead of failing with [`ZiffError::TrailingBytes`].
	pub allow_trailing: bool,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			allow_trailing: true,
		}
	}
}

/// Recursive-descent reader that rebuilds chunk containment from a flat buffer.
///
/// Each chunk's payload is first skipped as a whole to learn its end offset,
/// then rescanned from its start for nested chunks. The scan for a region
/// stops at the first position that does not hold a known tag or that is too
/// short for another header, and the cursor then jumps to the region's end.
#[derive(Debug)]
pub struct ChunkTreeReader<'a> {
	cursor: Cursor<'a>,
	options: ReadOptions,
}

impl<'a> ChunkTreeReader<'a> {
	/// Create a reader positioned at the start of `bytes`.
	///
	/// `options.max_depth` is clamped to [`MAX_DEPTH_LIMIT`] so recursion stays
	/// within the call stack.
	pub fn new(bytes: &'a [u8], options: ReadOptions) -> Self {
		let options = ReadOptions {
			max_depth: options.max_depth.min(MAX_DEPTH_LIMIT),
			..options
		};
		Self {
			cursor: Cursor::new(bytes),
			options,
		}
	}

	/// Parse the root chunk at offset 0 and everything nested in it.
	pub fn read_root(mut self) -> Result<ChunkTree<'a>> {
		let buffer_len = self.cursor.len();
		if buffer_len < CHUNK_HEADER_LEN {
			return Err(ZiffError::TruncatedRoot { len: buffer_len });
		}

		let raw = self.cursor.read_u32_le()?;
		self.cursor.seek(0);
		let Some(root) = self.read_chunk(buffer_len, 0)? else {
			return Err(ZiffError::UnknownRootTag { tag: raw });
		};

		let tree = ChunkTree { root, buffer_len };
		let trailing = tree.trailing_len();
		if trailing > 0 && !self.options.allow_trailing {
			return Err(ZiffError::TrailingBytes {
				at: tree.root.payload_end(),
				len: trailing,
			});
		}

		debug!(
			target: LOG_TARGET,
			"parsed {} root: size={} children={} trailing={}",
			tree.root.tag,
			tree.root.declared_size,
			tree.root.children.len(),
			trailing
		);
		Ok(tree)
	}

	/// Parse one chunk at the cursor, bounded by absolute offset `end`.
	///
	/// Returns `Ok(None)` when the bytes at the cursor do not start with a
	/// known tag. The cursor is left at the chunk's payload end on success.
	pub fn read_chunk(&mut self, end: usize, depth: u32) -> Result<Option<ChunkNode<'a>>> {
		let header_offset = self.cursor.pos();
		let raw = self.cursor.read_u32_le()?;
		let Some(tag) = ChunkType::from_raw(raw) else {
			debug!(target: LOG_TARGET, "no chunk at {header_offset}: unrecognized tag {}", raw_tag_label(raw));
			return Ok(None);
		};

		if depth > self.options.max_depth {
			return Err(ZiffError::DepthLimitExceeded {
				at: header_offset,
				max_depth: self.options.max_depth,
			});
		}

		let declared_size = self.cursor.read_u32_le()?;
		let payload_offset = self.cursor.pos();
		trace!(target: LOG_TARGET, "reading {tag} chunk at {header_offset}, size {declared_size}, depth {depth}");

		let len = usize::try_from(declared_size).unwrap_or(usize::MAX);
		let payload = self.cursor.read_exact(len)?;
		let payload_end = self.cursor.pos();
		if payload_end > end {
			return Err(ZiffError::ChildOverrunsParent {
				at: header_offset,
				end: payload_end,
				parent_end: end,
			});
		}

		self.cursor.seek(payload_offset);
		let children = self.read_children(payload_end, depth + 1)?;
		self.cursor.seek(payload_end);

		Ok(Some(ChunkNode {
			tag,
			declared_size,
			payload_offset,
			payload,
			children,
		}))
	}

	fn read_children(&mut self, end: usize, depth: u32) -> Result<Vec<ChunkNode<'a>>> {
		let mut children = Vec::new();
		while self.cursor.pos() + CHUNK_HEADER_LEN <= end {
			match self.read_chunk(end, depth)? {
				Some(child) => children.push(child),
				None => break,
			}
		}
		Ok(children)
	}
}

/// Parse `bytes` as a single-root chunk tree with default options.
pub fn parse_tree(bytes: &[u8]) -> Result<ChunkTree<'_>> {
	parse_tree_with(bytes, ReadOptions::default())
}

/// Parse `bytes` as a single-root chunk tree.
pub fn parse_tree_with(bytes: &[u8], options: ReadOptions) -> Result<ChunkTree<'_>> {
	ChunkTreeReader::new(bytes, options).read_root()
}

#[cfg(test)]
mod tests;
