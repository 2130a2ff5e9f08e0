//! Structured parameter snapshot for the scripting layer
//!
//! [`TuneRegistry::export`] yields one [`TuneRecord`] per readable parameter whose
//! name matches a wildcard pattern. Records serialize with the field names scripts
//! expect, so the host can convert them into its own containers.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::gate;
use crate::prelude::*;

/// One exported parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TuneRecord {
	#[serde(rename = "type")]
	pub value_type: &'static str,
	pub group: String,
	pub name: String,
	pub value: String,
	/// Same as `readmlev`
	pub mlev: MucLevel,
	pub readmlev: MucLevel,
	pub writemlev: MucLevel,
	pub label: String,
	pub default: String,
	pub active: bool,
	pub nullable: bool,
	/// Object-reference parameters only
	#[serde(skip_serializing_if = "Option::is_none")]
	pub objtype: Option<&'static str>,
}

/// Wildcard name pattern
///
/// `*` matches any run, `?` one character, `[...]` a character class (`[!...]`
/// negated) and `{a|b}` one of the listed words. `\` quotes the next character.
/// Matching ignores case and covers the whole name. An empty pattern matches all.
#[derive(Debug, Clone)]
pub enum NamePattern {
	All,
	Regex(Regex),
	Literal(String),
}

impl NamePattern {
	pub fn new(pattern: &str) -> Self {
		if pattern.is_empty() {
			return NamePattern::All;
		}
		match Regex::new(&glob_to_regex(pattern)) {
			Ok(re) => NamePattern::Regex(re),
			Err(err) => {
				debug!("Pattern '{}' used literally: {}", pattern, err);
				NamePattern::Literal(pattern.to_lowercase())
			}
		}
	}

	pub fn matches(&self, name: &str) -> bool {
		match self {
			NamePattern::All => true,
			NamePattern::Regex(re) => re.is_match(name),
			NamePattern::Literal(lit) => name.to_lowercase() == *lit,
		}
	}
}

fn glob_to_regex(pattern: &str) -> String {
	let chars: Vec<char> = pattern.chars().collect();
	let mut out = String::from("(?i)^");
	let mut i = 0;

	while i < chars.len() {
		match chars[i] {
			'*' => out.push_str(".*"),
			'?' => out.push('.'),
			'\\' if i + 1 < chars.len() => {
				i += 1;
				push_literal(&mut out, chars[i]);
			}
			'[' => {
				if let Some(end) = chars[i + 1..].iter().position(|&c| c == ']') {
					let class = &chars[i + 1..i + 1 + end];
					out.push('[');
					let class = match class.first() {
						Some('!' | '^') => {
							out.push('^');
							&class[1..]
						}
						_ => class,
					};
					for &c in class {
						if c != '-' && c.is_ascii_punctuation() {
							out.push('\\');
						}
						out.push(c);
					}
					out.push(']');
					i += end + 1;
				} else {
					push_literal(&mut out, '[');
				}
			}
			'{' => {
				if let Some(end) = chars[i + 1..].iter().position(|&c| c == '}') {
					let words: String = chars[i + 1..i + 1 + end].iter().collect();
					let alternatives: Vec<String> =
						words.split('|').map(regex::escape).collect();
					out.push_str("(?:");
					out.push_str(&alternatives.join("|"));
					out.push(')');
					i += end + 1;
				} else {
					push_literal(&mut out, '{');
				}
			}
			c => push_literal(&mut out, c),
		}
		i += 1;
	}

	out.push('$');
	out
}

fn push_literal(out: &mut String, c: char) {
	let mut buf = [0u8; 4];
	out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

impl TuneRegistry {
	/// Snapshot of the parameters readable at `level` whose names match `pattern`
	pub fn export(&self, pattern: &str, level: MucLevel) -> Vec<TuneRecord> {
		let mut records = Vec::new();
		self.export_into(pattern, level, &mut records);
		records
	}

	/// Like [`export`](Self::export), appending into any collection
	pub fn export_into<E: Extend<TuneRecord>>(&self, pattern: &str, level: MucLevel, sink: &mut E) {
		let pattern = NamePattern::new(pattern);
		sink.extend(
			self.iter()
				.filter(|param| gate::can_read(param.entry, level))
				.filter(|param| pattern.matches(param.name()))
				.map(|param| {
					let entry = param.entry;
					TuneRecord {
						value_type: entry.value_type.name(),
						group: entry.group.clone(),
						name: entry.name.clone(),
						value: param.formatted_value(),
						mlev: entry.read_level,
						readmlev: entry.read_level,
						writemlev: entry.write_level,
						label: entry.label.clone(),
						default: param.formatted_default(),
						active: param.active,
						nullable: entry.nullable,
						objtype: (entry.value_type == TuneType::ObjectRef)
							.then(|| entry.object_type.name()),
					}
				}),
		);
	}

	/// Export rendered as a JSON array
	pub fn export_json(&self, pattern: &str, level: MucLevel) -> TuneResult<serde_json::Value> {
		Ok(serde_json::to_value(self.export(pattern, level))?)
	}
}


// vim: ts=4
