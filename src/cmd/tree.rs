use std::path::PathBuf;

use ziffgeo::ziff::{ChunkNode, Result};

use crate::cmd::util::{ReadArgs, emit_json, require_path, with_tree};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Start from this tag path instead of the root (for example `TGEO/TIVN`).
	#[arg(long = "at", default_value = "")]
	pub at: String,
	/// Stop descending below this many levels.
	#[arg(long)]
	pub depth: Option<usize>,
	#[command(flatten)]
	pub read: ReadArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print the chunk tree, one node per line.
pub fn run(args: Args) -> Result<()> {
	let Args { path, at, depth, read, json } = args;
	let max_depth = depth.unwrap_or(usize::MAX);

	with_tree(&path, read, |_, tree| {
		let start = require_path(tree, &at)?;

		if json {
			emit_json(&NodeJson::build(start, max_depth))?;
			return Ok(());
		}

		for (level, node) in start.walk().filter(|(level, _)| *level <= max_depth) {
			println!(
				"{}{} @{} size={} children={}",
				"  ".repeat(level),
				node.tag,
				node.header_offset(),
				node.declared_size,
				node.children.len()
			);
		}
		Ok(())
	})
}

#[derive(serde::Serialize)]
struct NodeJson {
	tag: &'static str,
	offset: usize,
	payload_offset: usize,
	size: u32,
	child_count: usize,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	children: Vec<NodeJson>,
}

impl NodeJson {
	fn build(node: &ChunkNode<'_>, depth_left: usize) -> Self {
		let children = if depth_left == 0 {
			Vec::new()
		} else {
			node.children.iter().map(|child| Self::build(child, depth_left - 1)).collect()
		};

		Self {
			tag: node.tag.as_str(),
			offset: node.header_offset(),
			payload_offset: node.payload_offset,
			size: node.declared_size,
			child_count: node.children.len(),
			children,
		}
	}
}
