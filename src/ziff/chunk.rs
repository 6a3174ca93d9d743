use crate::ziff::ChunkType;

/// Size of a chunk header: `u32` tag followed by `u32` payload length.
pub const CHUNK_HEADER_LEN: usize = 8;

/// One parsed chunk and its nested children.
///
/// `payload` borrows from the parsed buffer and covers the whole declared
/// payload, including the bytes of any children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkNode<'a> {
	/// Chunk tag.
	pub tag: ChunkType,
	/// Declared payload length, excluding the 8-byte header.
	pub declared_size: u32,
	/// Absolute buffer offset of the first payload byte.
	pub payload_offset: usize,
	/// Raw payload bytes.
	pub payload: &'a [u8],
	/// Nested chunks in file order.
	pub children: Vec<ChunkNode<'a>>,
}

impl<'a> ChunkNode<'a> {
	/// Absolute offset of the chunk header.
	pub fn header_offset(&self) -> usize {
		self.payload_offset.saturating_sub(CHUNK_HEADER_LEN)
	}

	/// Absolute offset one past the last payload byte.
	pub fn payload_end(&self) -> usize {
		self.payload_offset + self.payload.len()
	}

	/// Return true when no nested chunks were found in the payload.
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// Return true if any direct child has tag `tag`.
	pub fn contains(&self, tag: ChunkType) -> bool {
		self.children.iter().any(|child| child.tag == tag)
	}

	/// Return the first direct child with tag `tag`.
	pub fn first(&self, tag: ChunkType) -> Option<&ChunkNode<'a>> {
		self.children.iter().find(|child| child.tag == tag)
	}

	/// Iterate direct children with tag `tag` in file order.
	pub fn all(&self, tag: ChunkType) -> impl Iterator<Item = &ChunkNode<'a>> {
		self.children.iter().filter(move |child| child.tag == tag)
	}

	/// Follow `path` through first-matching direct children.
	///
	/// An empty path returns `self`.
	pub fn find_path(&self, path: &[ChunkType]) -> Option<&ChunkNode<'a>> {
		path.iter().try_fold(self, |node, tag| node.first(*tag))
	}

	/// Pre-order walk over this node and all descendants.
	pub fn walk(&self) -> ChunkWalk<'_, 'a> {
		ChunkWalk { stack: vec![(0, self)] }
	}

	/// Number of nodes below this one.
	pub fn descendant_count(&self) -> usize {
		self.walk().count() - 1
	}
}

/// Pre-order iterator yielding `(depth, node)`, where `self` is depth 0.
#[derive(Debug)]
pub struct ChunkWalk<'n, 'a> {
	stack: Vec<(usize, &'n ChunkNode<'a>)>,
}

impl<'n, 'a> Iterator for ChunkWalk<'n, 'a> {
	type Item = (usize, &'n ChunkNode<'a>);

	fn next(&mut self) -> Option<Self::Item> {
		let (depth, node) = self.stack.pop()?;
		self.stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
		Some((depth, node))
	}
}

/// Fully parsed chunk tree for one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkTree<'a> {
	/// Root chunk at offset 0.
	pub root: ChunkNode<'a>,
	/// Total length of the parsed buffer.
	pub buffer_len: usize,
}

impl<'a> ChunkTree<'a> {
	/// Bytes after the root chunk's declared extent.
	pub fn trailing_len(&self) -> usize {
		self.buffer_len.saturating_sub(self.root.payload_end())
	}

	/// Pre-order walk over every node in the tree.
	pub fn walk(&self) -> ChunkWalk<'_, 'a> {
		self.root.walk()
	}

	/// Follow `path` from the root's children.
	pub fn find_path(&self, path: &[ChunkType]) -> Option<&ChunkNode<'a>> {
		self.root.find_path(path)
	}
}
