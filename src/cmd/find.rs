use std::path::PathBuf;

use ziffgeo::ziff::{ChunkNode, ChunkType, Result};

use crate::cmd::util::{ReadArgs, emit_json, render_tag_path, with_tree};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Tag to search for.
	#[arg(long)]
	pub tag: String,
	#[command(flatten)]
	pub read: ReadArgs,
	#[arg(long)]
	pub json: bool,
}

/// List every chunk with the requested tag, with its ancestry.
pub fn run(args: Args) -> Result<()> {
	let Args { path, tag, read, json } = args;
	let tag = ChunkType::parse_name(&tag)?;

	let hits = with_tree(&path, read, |_, tree| {
		let mut hits = Vec::new();
		collect_hits(&tree.root, tag, &mut Vec::new(), &mut hits);
		Ok(hits)
	})?;

	if json {
		emit_json(&FindJson {
			tag: tag.as_str(),
			count: hits.len(),
			hits,
		})?;
		return Ok(());
	}

	for hit in &hits {
		println!("{} @{} size={} children={}", hit.path, hit.offset, hit.size, hit.child_count);
	}
	println!("matches: {}", hits.len());

	Ok(())
}

fn collect_hits(node: &ChunkNode<'_>, tag: ChunkType, ancestry: &mut Vec<ChunkType>, out: &mut Vec<HitJson>) {
	ancestry.push(node.tag);
	if node.tag == tag {
		out.push(HitJson {
			path: render_tag_path(ancestry),
			offset: node.header_offset(),
			size: node.declared_size,
			child_count: node.children.len(),
		});
	}
	for child in &node.children {
		collect_hits(child, tag, ancestry, out);
	}
	ancestry.pop();
}

#[derive(serde::Serialize)]
struct HitJson {
	path: String,
	offset: usize,
	size: u32,
	child_count: usize,
}

#[derive(serde::Serialize)]
struct FindJson {
	tag: &'static str,
	count: usize,
	hits: Vec<HitJson>,
}
