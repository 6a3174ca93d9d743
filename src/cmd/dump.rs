use std::path::PathBuf;

use ziffgeo::ziff::Result;

use crate::cmd::util::{ReadArgs, emit_json, hex_row, hex_string, require_path, with_tree};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Tag path below the root, first match per step (for example `TGEO/TGHD`).
	#[arg(long = "path", default_value = "")]
	pub chunk_path: String,
	/// Maximum payload bytes to print.
	#[arg(long, default_value_t = 256)]
	pub limit: usize,
	#[command(flatten)]
	pub read: ReadArgs,
	#[arg(long)]
	pub json: bool,
}

/// Hex dump the payload of the chunk selected by `--path`.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		chunk_path,
		limit,
		read,
		json,
	} = args;

	with_tree(&path, read, |_, tree| {
		let node = require_path(tree, &chunk_path)?;
		let shown = &node.payload[..node.payload.len().min(limit)];

		if json {
			emit_json(&DumpJson {
				path: chunk_path.clone(),
				tag: node.tag.as_str(),
				offset: node.header_offset(),
				size: node.declared_size,
				shown: shown.len(),
				hex: hex_string(shown),
			})?;
			return Ok(());
		}

		println!("{} @{} size={}", node.tag, node.header_offset(), node.declared_size);
		for (row, bytes) in shown.chunks(16).enumerate() {
			println!("{}", hex_row(node.payload_offset + row * 16, bytes));
		}
		if shown.len() < node.payload.len() {
			println!("... {} more bytes", node.payload.len() - shown.len());
		}
		Ok(())
	})
}

#[derive(serde::Serialize)]
struct DumpJson {
	path: String,
	tag: &'static str,
	offset: usize,
	size: u32,
	shown: usize,
	hex: String,
}
