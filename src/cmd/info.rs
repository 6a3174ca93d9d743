use std::path::PathBuf;

use ziffgeo::ziff::{ChunkStats, Result};

use crate::cmd::util::{ReadArgs, emit_json, with_tree};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub read: ReadArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print high-level file and chunk statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, read, json } = args;

	let (file_size, stats) = with_tree(&path, read, |file, tree| Ok((file.bytes().len(), ChunkStats::collect(tree))))?;
	let entries = stats.sorted_tags();

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			file_size,
			root_tag: stats.root_tag.as_str(),
			root_size: stats.root_size,
			trailing_bytes: stats.trailing_len,
			chunk_count: stats.chunk_count,
			leaf_count: stats.leaf_count,
			max_depth: stats.max_depth,
			top_tags: entries
				.iter()
				.take(12)
				.map(|(tag, count)| TagCountJson {
					tag: tag.as_str(),
					count: *count,
				})
				.collect(),
		};
		emit_json(&payload)?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("file_size: {file_size}");
	println!("root_tag: {}", stats.root_tag);
	println!("root_size: {}", stats.root_size);
	println!("trailing_bytes: {}", stats.trailing_len);
	println!("chunk_count: {}", stats.chunk_count);
	println!("leaf_count: {}", stats.leaf_count);
	println!("max_depth: {}", stats.max_depth);

	println!("top_tags:");
	for (tag, count) in entries.into_iter().take(12) {
		println!("  {tag}: {count}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct TagCountJson {
	tag: &'static str,
	count: u32,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	file_size: usize,
	root_tag: &'static str,
	root_size: u32,
	trailing_bytes: usize,
	chunk_count: u32,
	leaf_count: u32,
	max_depth: usize,
	top_tags: Vec<TagCountJson>,
}
