use std::path::Path;

use ziffgeo::ziff::{ChunkNode, ChunkTree, ChunkType, MAX_DEPTH_LIMIT, ReadOptions, Result, ZiffError, ZiffFile};

/// Parse options shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct ReadArgs {
	/// Deepest chunk nesting accepted before failing.
	#[arg(long = "max-depth", default_value_t = 64, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_DEPTH_LIMIT)))]
	pub max_depth: u32,
	/// Reject bytes after the root chunk.
	#[arg(long)]
	pub strict: bool,
}

impl ReadArgs {
	pub(crate) fn options(self) -> ReadOptions {
		ReadOptions {
			max_depth: self.max_depth,
			allow_trailing: !self.strict,
		}
	}
}

/// Open `path` and parse its tree, handing it to `f` while the buffer is alive.
pub(crate) fn with_tree<T>(path: &Path, read: ReadArgs, f: impl FnOnce(&ZiffFile, &ChunkTree<'_>) -> Result<T>) -> Result<T> {
	let file = ZiffFile::open(path)?;
	let tree = file.tree_with(read.options())?;
	f(&file, &tree)
}

/// Parse `TGEO/TGHD` style tag paths. Empty input and `/` select the root.
pub(crate) fn parse_tag_path(path: &str) -> Result<Vec<ChunkType>> {
	path.split('/').filter(|part| !part.is_empty()).map(ChunkType::parse_name).collect()
}

/// Join tags with `/`.
pub(crate) fn render_tag_path(tags: &[ChunkType]) -> String {
	tags.iter().map(|tag| tag.as_str()).collect::<Vec<_>>().join("/")
}

/// Resolve a tag path against the root or report it missing.
pub(crate) fn require_path<'t, 'a>(tree: &'t ChunkTree<'a>, path: &str) -> Result<&'t ChunkNode<'a>> {
	let tags = parse_tag_path(path)?;
	tree.find_path(&tags).ok_or_else(|| ZiffError::ChunkNotFound { path: path.to_owned() })
}

/// Render one 16-byte hex dump row starting at absolute `offset`.
pub(crate) fn hex_row(offset: usize, bytes: &[u8]) -> String {
	let mut hex = String::with_capacity(48);
	for (index, byte) in bytes.iter().enumerate() {
		if index > 0 {
			hex.push(' ');
		}
		hex.push_str(&format!("{byte:02x}"));
	}

	let ascii: String = bytes
		.iter()
		.map(|byte| if byte.is_ascii_graphic() || *byte == b' ' { char::from(*byte) } else { '.' })
		.collect();

	format!("{offset:08x}  {hex:<47}  |{ascii}|")
}

/// Lowercase hex string without separators.
pub(crate) fn hex_string(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	println!("{}", render_json(value)?);
	Ok(())
}

/// Encode `value` as pretty JSON.
pub(crate) fn render_json<T: serde::Serialize>(value: &T) -> Result<String> {
	Ok(serde_json::to_string_pretty(value)?)
}
