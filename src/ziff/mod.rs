mod bytes;
mod chunk;
mod error;
mod file;
mod reader;
mod tag;
#[cfg(test)]
mod test_support;

/// Bounded little-endian byte cursor.
pub use bytes::Cursor;
/// Parsed chunk node, tree, and traversal types.
pub use chunk::{CHUNK_HEADER_LEN, ChunkNode, ChunkTree, ChunkWalk};
/// Error and result aliases.
pub use error::{Result, ZiffError};
/// File abstraction, tree statistics, and import entry point.
pub use file::{ChunkStats, ZiffFile, import_geo};
/// Recursive chunk tree reader and parse entry points.
pub use reader::{ChunkTreeReader, MAX_DEPTH_LIMIT, ReadOptions, parse_tree, parse_tree_with};
/// Known chunk tag registry.
pub use tag::{ChunkType, raw_tag_label};
