#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "ziffgeo", about = "Ziff/GEO chunk tree inspection tools")]
struct Cli {
	/// Log parser activity to stderr (-v debug, -vv trace).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize the chunk tree of a file.
	Info(cmd::info::Args),
	/// Print the chunk tree as an indented outline.
	Tree(cmd::tree::Args),
	/// List every chunk with a given tag.
	Find(cmd::find::Args),
	/// Hex dump the payload of one chunk.
	Dump(cmd::dump::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> ziffgeo::ziff::Result<()> {
	let cli = Cli::parse();
	cmd::logger::init(cli.verbose);

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Tree(args) => cmd::tree::run(args),
		Commands::Find(args) => cmd::find::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
	}
}
