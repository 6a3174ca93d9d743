use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ZiffError>;

/// Errors produced while reading and parsing Ziff/GEO chunk trees.
#[derive(Debug, Error)]
pub enum ZiffError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON encoding failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Not enough bytes remained for a requested read.
	#[error("out of bounds at offset {at}, need {need} bytes, remaining {rem}")]
	OutOfBounds {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Chunk nesting went deeper than the configured ceiling.
	#[error("chunk nesting at offset {at} exceeds max depth {max_depth}")]
	DepthLimitExceeded {
		/// Header offset of the chunk that crossed the ceiling.
		at: usize,
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Child chunk declared an extent past the end of its parent payload.
	#[error("chunk at offset {at} ends at {end}, past parent end {parent_end}")]
	ChildOverrunsParent {
		/// Header offset of the offending child.
		at: usize,
		/// Declared end offset of the child payload.
		end: usize,
		/// End offset of the enclosing payload.
		parent_end: usize,
	},
	/// Buffer is too short to hold a root chunk header.
	#[error("truncated root: {len} bytes, need at least 8")]
	TruncatedRoot {
		/// Total buffer length.
		len: usize,
	},
	/// First four bytes of the buffer are not a known chunk tag.
	#[error("unknown root tag 0x{tag:08x}")]
	UnknownRootTag {
		/// Raw little-endian tag value.
		tag: u32,
	},
	/// Bytes remained after the root chunk in strict mode.
	#[error("{len} trailing bytes after root chunk at offset {at}")]
	TrailingBytes {
		/// Offset of the first trailing byte.
		at: usize,
		/// Number of trailing bytes.
		len: usize,
	},
	/// Chunk type name could not be parsed.
	#[error("invalid chunk type: {name}")]
	InvalidChunkType {
		/// Original user-provided name.
		name: String,
	},
	/// Requested chunk path did not match any node.
	#[error("chunk not found: {path}")]
	ChunkNotFound {
		/// Slash-separated tag path.
		path: String,
	},
}

impl ZiffError {
	/// Return true for errors that describe a structurally broken chunk tree.
	pub fn is_malformed(&self) -> bool {
		matches!(
			self,
			Self::DepthLimitExceeded { .. }
				| Self::ChildOverrunsParent { .. }
				| Self::TruncatedRoot { .. }
				| Self::UnknownRootTag { .. }
				| Self::TrailingBytes { .. }
		)
	}
}
