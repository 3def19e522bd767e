use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use dotopts::path::{path_segment, path_slice};
use dotopts::source::{apply_defaults, load_layered, parse_scalar};
use dotopts::{OptionStore, Value};

#[derive(Parser)]
#[command(name = "dotopts")]
#[command(
	author,
	version,
	about = "Inspect nested options addressed by dot-separated paths"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Options file to load; repeat to layer files (later files win)
	#[arg(short = 'f', long = "file", value_name = "FILE", global = true)]
	files: Vec<PathBuf>,

	/// Defaults file; only fills paths no other source sets
	#[arg(long = "defaults", value_name = "FILE", global = true)]
	defaults: Vec<PathBuf>,

	/// Replace the value at PATH after loading files
	#[arg(long = "set", value_name = "PATH=VALUE", global = true)]
	sets: Vec<String>,

	/// Remove PATH after loading files and applying --set
	#[arg(long = "unset", value_name = "PATH", global = true)]
	unsets: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the effective options as TOML
	Show,
	/// Print the value stored at a path
	Get {
		/// Dot path to read
		path: String,

		/// Printed when nothing is stored at the path
		#[arg(long)]
		default: Option<String>,
	},
	/// Print the options whose key or value contains the needle
	Find {
		/// Text to search for
		needle: String,
	},
	/// Print every stored leaf as `path = value`
	Paths,
	/// Slice a dot path by level
	Level {
		/// Dot path to slice
		path: String,

		/// Levels from the start (positive) or the end (negative)
		#[arg(allow_negative_numbers = true)]
		hops: i32,

		/// Print the single segment at that level instead of the remaining path
		#[arg(long)]
		segment: bool,
	},
}

fn main() -> ExitCode {
	env_logger::Builder::from_default_env()
		.target(env_logger::Target::Stderr)
		.init();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	match &cli.command {
		Commands::Level {
			path,
			hops,
			segment,
		} => handle_level(path, *hops, *segment),
		Commands::Show => handle_show(&build_store(&cli)?),
		Commands::Get { path, default } => {
			handle_get(&build_store(&cli)?, path, default.as_deref())
		}
		Commands::Find { needle } => handle_find(&build_store(&cli)?, needle),
		Commands::Paths => handle_paths(&build_store(&cli)?),
	}
}

fn build_store(cli: &Cli) -> Result<OptionStore> {
	let mut store = load_layered(&cli.files).context("Failed to load options files")?;

	for assignment in &cli.sets {
		let (path, raw) = assignment
			.split_once('=')
			.ok_or_else(|| anyhow::anyhow!("Expected PATH=VALUE, got: {}", assignment))?;
		store
			.set_option(path.trim(), parse_scalar(raw.trim()))
			.with_context(|| format!("Failed to set {}", path))?;
	}

	for path in &cli.unsets {
		store
			.unset_option(path.trim())
			.with_context(|| format!("Failed to unset {}", path))?;
	}

	apply_defaults(&mut store, &cli.defaults).context("Failed to load defaults files")?;

	Ok(store)
}

fn render(value: &Value) -> Result<String> {
	Ok(match value {
		Value::Tree(tree) => toml::to_string(tree).context("Failed to render options as TOML")?,
		Value::String(s) => s.clone(),
		other => other.to_string(),
	})
}

fn handle_show(store: &OptionStore) -> Result<ExitCode> {
	if store.is_empty() {
		println!("No options set.");
		return Ok(ExitCode::SUCCESS);
	}

	let rendered = toml::to_string(store.options()).context("Failed to render options as TOML")?;
	print!("{}", rendered);
	Ok(ExitCode::SUCCESS)
}

fn handle_get(store: &OptionStore, path: &str, default: Option<&str>) -> Result<ExitCode> {
	match (store.get_option(path), default) {
		(Some(value), _) => println!("{}", render(value)?.trim_end()),
		(None, Some(fallback)) => println!("{}", fallback),
		(None, None) => anyhow::bail!("Option not found: {}", path),
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_find(store: &OptionStore, needle: &str) -> Result<ExitCode> {
	match store.find(needle) {
		Some(found) => {
			let rendered = toml::to_string(&found).context("Failed to render matches as TOML")?;
			print!("{}", rendered);
			Ok(ExitCode::SUCCESS)
		}
		None => {
			println!("No matches for {:?}.", needle);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_paths(store: &OptionStore) -> Result<ExitCode> {
	for (path, value) in store.paths() {
		println!("{} = {}", path, value);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_level(path: &str, hops: i32, segment: bool) -> Result<ExitCode> {
	let result = if segment {
		path_segment(path, hops)
	} else {
		path_slice(path, hops)
	};
	println!("{}", result);
	Ok(ExitCode::SUCCESS)
}
