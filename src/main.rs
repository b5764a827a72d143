#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "savprop", about = "Save-file property record inspection tools")]
struct Cli {
	/// Enable debug diagnostics on stderr.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Show compression, size and record statistics.
	Info {
		path: PathBuf,
	},
	/// Decode and print the top-level property list.
	Decode(cmd::decode::Args),
	/// List built-in struct types.
	Structs {
		/// Emit JSON.
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: bool) {
	let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
	env_logger::Builder::new()
		.filter_module("savprop", level)
		.parse_default_env()
		.target(env_logger::Target::Stderr)
		.format_timestamp(None)
		.format_target(false)
		.init();
}

fn run(command: Commands) -> savprop::prop::Result<()> {
	match command {
		Commands::Info { path } => cmd::info::run(path),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Structs { json } => cmd::structs::run(json),
	}
}
