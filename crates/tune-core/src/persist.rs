//! Parameter file load and save
//!
//! # Format
//!
//! One assignment per line, `name=value`, values in their canonical spelling. A line
//! for a parameter that still holds its default is written as `%name=value`: the value
//! is recorded so operators can see it, and on load the `%` resets the parameter to
//! whatever the compiled-in default is at that time. Lines starting with `#` are
//! comments.
//!
//! ```text
//! # custom
//! muckname=Hollow Oak
//! %max_output=1024
//! ```

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::codec;
use crate::flag::{DEFAULT_FLAG, is_comment};
use crate::prelude::*;

/// Receiver of per-line load messages
pub trait TuneNotifier {
	fn notify(&mut self, message: &str);
}

impl TuneNotifier for Vec<String> {
	fn notify(&mut self, message: &str) {
		self.push(message.to_string());
	}
}

impl TuneNotifier for flume::Sender<String> {
	fn notify(&mut self, message: &str) {
		if self.send(message.to_string()).is_err() {
			debug!("Load notification dropped, receiver gone");
		}
	}
}

/// Counters collected while loading a parameter file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
	/// Physical lines read, including comments and blank lines
	pub lines: usize,
	/// Lines that installed a new value
	pub applied: usize,
	/// Lines that reset a parameter to its default
	pub defaulted: usize,
	/// Assignment lines that were rejected
	pub skipped: usize,
	pub comments: usize,
}

impl TuneRegistry {
	/// Write every parameter, in definition order
	pub fn save<W: Write>(&self, mut writer: W) -> TuneResult<()> {
		for param in self.iter() {
			if param.is_default {
				write!(writer, "{}", DEFAULT_FLAG)?;
			}
			writeln!(writer, "{}={}", param.entry.name, codec::format(param.value))?;
		}
		writer.flush()?;
		Ok(())
	}

	/// Save to `path`, replacing the file only once the new content is complete
	pub fn save_to_path(&self, path: impl AsRef<Path>) -> TuneResult<()> {
		let path = path.as_ref();
		let tmp_path = path.with_extension("tmp");

		let file = fs::File::create(&tmp_path)?;
		let mut writer = BufWriter::new(file);
		self.save(&mut writer)?;
		writer.into_inner().map_err(std::io::IntoInnerError::into_error)?.sync_all()?;

		if let Err(err) = fs::rename(&tmp_path, path) {
			warn!("Failed to move {} into place: {}", tmp_path.display(), err);
			return Err(err.into());
		}

		info!("Saved {} parameters to {}", self.count(), path.display());
		Ok(())
	}

	/// Load assignments from `reader`
	///
	/// Every assignment is applied at the highest privilege level. A rejected line is
	/// skipped without affecting the others. Reading stops after `max_lines` physical
	/// lines if given, otherwise at end of input. If a `recipient` is given it receives
	/// one message per assignment line.
	pub fn load<R: BufRead>(
		&mut self,
		mut reader: R,
		mut recipient: Option<&mut dyn TuneNotifier>,
		max_lines: Option<usize>,
	) -> TuneResult<LoadSummary> {
		let mut summary = LoadSummary::default();
		let mut buf = Vec::new();

		while max_lines.is_none_or(|max| summary.lines < max) {
			buf.clear();
			if reader.read_until(b'\n', &mut buf)? == 0 {
				break;
			}
			summary.lines += 1;

			let text = String::from_utf8_lossy(&buf);
			let line = text.trim_end_matches(['\n', '\r']);
			if line.trim().is_empty() {
				continue;
			}
			if is_comment(line) {
				summary.comments += 1;
				continue;
			}

			let result = match line.split_once('=') {
				Some((name, value)) => self.set_parameter(name.trim(), value, MucLevel::GOD),
				None => TuneSetResult::Syntax,
			};
			match result {
				TuneSetResult::Success => summary.applied += 1,
				TuneSetResult::SuccessDefault => summary.defaulted += 1,
				_ => {
					debug!("Skipping parameter line {}: {}", summary.lines, result.message());
					summary.skipped += 1;
				}
			}

			if let Some(recipient) = recipient.as_deref_mut() {
				recipient.notify(&format!("{}: {}", line, result.message()));
			}
		}

		info!(
			"Loaded parameters: {} lines, {} set, {} default, {} skipped",
			summary.lines, summary.applied, summary.defaulted, summary.skipped
		);
		Ok(summary)
	}

	/// Load a whole parameter file
	pub fn load_from_path(
		&mut self,
		path: impl AsRef<Path>,
		recipient: Option<&mut dyn TuneNotifier>,
	) -> TuneResult<LoadSummary> {
		let path = path.as_ref();
		let file = fs::File::open(path)?;
		info!("Loading parameters from {}", path.display());
		self.load(BufReader::new(file), recipient, None)
	}
}

// vim: ts=4
