//! Command-line viewer and editor for MUCK parameter files
//!
//! Builds the standard parameter table, applies the parameter file on top of it and
//! then shows, reads or changes parameters on behalf of a caller at the configured
//! level. Changes are written back to the same file.
//!
//! Configuration comes from flags or the environment:
//!
//! - `TUNE_FILE`: parameter file (default `./data/parmfile.cfg`)
//! - `TUNE_LEVEL`: caller level, a number 0-5 or a name like `wizard` (default `god`)
//! - `RUST_LOG`: log filter, logs go to stderr

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};

use muck_tune::{
	DbRef, Error, MemoryObjectDb, MucLevel, ObjectKind, TuneRegistry, TuneResult, TuneSetResult,
};

#[derive(Parser, Debug)]
#[command(name = "tune-tool", version, about = "Inspect and edit MUCK tunable parameters")]
struct Cli {
	/// Parameter file
	#[arg(long, short, env = "TUNE_FILE", default_value = "./data/parmfile.cfg")]
	file: PathBuf,

	/// Caller level, 0-5 or a name (none, apprentice, journeyman, master, wizard, god)
	#[arg(long, short, env = "TUNE_LEVEL", default_value = "god", value_parser = parse_level)]
	level: MucLevel,

	/// Object known to the database, as `#N=kind`; rooms #0 and player #1 always exist
	#[arg(long = "object", value_parser = parse_object)]
	objects: Vec<(DbRef, ObjectKind)>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print readable parameters as JSON
	Show {
		/// Name pattern (`*`, `?`, `[..]`, `{a|b}`)
		#[arg(default_value = "")]
		pattern: String,
	},
	/// Print the current value of a parameter
	Get { name: String },
	/// Set a parameter and save the file
	Set { name: String, value: String },
	/// Reset a parameter to its default and save the file
	Reset { name: String },
	/// Apply the parameter file and report the outcome of every line
	Check,
}

fn parse_level(s: &str) -> Result<MucLevel, String> {
	MucLevel::parse(s).ok_or_else(|| format!("invalid level '{}'", s))
}

fn parse_object(s: &str) -> Result<(DbRef, ObjectKind), String> {
	let (obj, kind) = s.split_once('=').ok_or_else(|| format!("expected #N=kind, got '{}'", s))?;
	let obj = obj
		.trim()
		.strip_prefix('#')
		.and_then(|n| n.parse::<i32>().ok())
		.map(DbRef)
		.filter(|obj| !obj.is_nothing())
		.ok_or_else(|| format!("invalid object reference '{}'", obj))?;
	Ok((obj, kind.parse()?))
}

fn open_registry(cli: &Cli) -> TuneResult<TuneRegistry> {
	let mut db = MemoryObjectDb::minimal();
	for &(obj, kind) in &cli.objects {
		db.insert(obj, kind);
	}
	TuneRegistry::standard(Arc::new(db))
}

/// Apply the parameter file if there is one
fn load_file(reg: &mut TuneRegistry, path: &Path) -> TuneResult<()> {
	match reg.load_from_path(path, None) {
		Ok(summary) => {
			if summary.skipped > 0 {
				warn!("{} lines of {} were rejected", summary.skipped, path.display());
			}
			Ok(())
		}
		Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
			info!("No parameter file at {}, using defaults", path.display());
			Ok(())
		}
		Err(err) => Err(err),
	}
}

fn apply(reg: &mut TuneRegistry, cli: &Cli, name: &str, value: &str) -> TuneResult<bool> {
	let result = reg.set_parameter(name, value, cli.level);
	println!("{}", result.message());
	if !result.is_success() {
		return Ok(false);
	}

	if let Some(dir) = cli.file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
		std::fs::create_dir_all(dir)?;
	}
	reg.save_to_path(&cli.file)?;
	Ok(true)
}

fn run(cli: &Cli) -> TuneResult<bool> {
	let mut reg = open_registry(cli)?;

	if let Command::Check = cli.command {
		let mut notes: Vec<String> = Vec::new();
		let summary = reg.load_from_path(&cli.file, Some(&mut notes))?;
		for note in &notes {
			println!("{}", note);
		}
		println!(
			"{} lines: {} set, {} default, {} rejected",
			summary.lines, summary.applied, summary.defaulted, summary.skipped
		);
		return Ok(summary.skipped == 0);
	}

	load_file(&mut reg, &cli.file)?;

	match &cli.command {
		Command::Show { pattern } => {
			let json = reg.export_json(pattern, cli.level)?;
			println!("{}", serde_json::to_string_pretty(&json)?);
			Ok(true)
		}
		Command::Get { name } => {
			if reg.lookup(name).is_none() {
				println!("{}", TuneSetResult::Unknown.message());
				return Ok(false);
			}
			println!("{}", reg.get_parameter_string(name, cli.level));
			Ok(true)
		}
		Command::Set { name, value } => apply(&mut reg, cli, name, value),
		Command::Reset { name } => apply(&mut reg, cli, name, "%"),
		Command::Check => Ok(true),
	}
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	match run(&cli) {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(err) => {
			error!("{}", err);
			ExitCode::FAILURE
		}
	}
}


// vim: ts=4
