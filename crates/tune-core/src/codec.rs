//! Text encoding of parameter values
//!
//! Parsing turns operator text into a [`TuneValue`] for a given entry, separating
//! text that cannot be read at all ([`CodecError::Syntax`]) from text that reads fine
//! but is not acceptable for the entry ([`CodecError::BadValue`]). Formatting yields
//! the canonical spelling used by both the get path and the parameter file; every
//! formatted value parses back to itself.

use muck_tune_types::ObjectDb;

use crate::prelude::*;

const TRUE_WORDS: &[&str] = &["yes", "y", "true", "t", "on", "1"];
const FALSE_WORDS: &[&str] = &["no", "n", "false", "f", "off", "0"];

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Why a value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
	Syntax,
	BadValue,
}

impl From<CodecError> for TuneSetResult {
	fn from(err: CodecError) -> Self {
		match err {
			CodecError::Syntax => TuneSetResult::Syntax,
			CodecError::BadValue => TuneSetResult::BadValue,
		}
	}
}

/// Parse `text` as a value for `entry`
///
/// Object references are checked against `db`: the object must exist, must not be
/// recycled, and must satisfy the entry's object type.
pub fn parse(entry: &TuneEntry, text: &str, db: &dyn ObjectDb) -> Result<TuneValue, CodecError> {
	match entry.value_type {
		TuneType::Boolean => parse_bool(text).map(TuneValue::Bool).ok_or(CodecError::Syntax),
		TuneType::Integer => {
			let n = parse_int(text).ok_or(CodecError::Syntax)?;
			if entry.min.is_some_and(|min| n < min) || entry.max.is_some_and(|max| n > max) {
				return Err(CodecError::BadValue);
			}
			Ok(TuneValue::Int(n))
		}
		TuneType::Duration => {
			parse_duration(text).map(TuneValue::Duration).ok_or(CodecError::Syntax)
		}
		TuneType::ObjectRef => {
			let obj = parse_dbref(text).ok_or(CodecError::Syntax)?;
			if obj.is_nothing() {
				return Err(CodecError::BadValue);
			}
			match db.kind_of(obj) {
				Some(kind) if entry.object_type.accepts(kind) => Ok(TuneValue::Ref(obj)),
				_ => Err(CodecError::BadValue),
			}
		}
		TuneType::String => {
			// A line break would split the parameter file line
			if text.contains(['\n', '\r']) {
				return Err(CodecError::BadValue);
			}
			if text.is_empty() && !entry.nullable {
				return Err(CodecError::BadValue);
			}
			Ok(TuneValue::Str(text.to_string()))
		}
	}
}

/// Canonical text of a value
pub fn format(value: &TuneValue) -> String {
	match value {
		TuneValue::Bool(true) => "yes".to_string(),
		TuneValue::Bool(false) => "no".to_string(),
		TuneValue::Int(n) | TuneValue::Duration(n) => n.to_string(),
		TuneValue::Ref(obj) => obj.to_string(),
		TuneValue::Str(s) => s.clone(),
	}
}

pub fn parse_bool(text: &str) -> Option<bool> {
	let word = text.trim().to_ascii_lowercase();
	if TRUE_WORDS.contains(&word.as_str()) {
		Some(true)
	} else if FALSE_WORDS.contains(&word.as_str()) {
		Some(false)
	} else {
		None
	}
}

/// Signed decimal integer that fits in 32 bits
pub fn parse_int(text: &str) -> Option<i32> {
	let text = text.trim();
	let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
	if !is_digits(digits) {
		return None;
	}
	text.parse().ok()
}

/// `#N` object reference; does not check that the object exists
pub fn parse_dbref(text: &str) -> Option<DbRef> {
	let body = text.trim().strip_prefix('#')?;
	let digits = body.strip_prefix('-').unwrap_or(body);
	if !is_digits(digits) {
		return None;
	}
	body.parse().ok().map(DbRef)
}

/// Time span in seconds
///
/// Accepts `N` (seconds), `N` with a unit suffix `s`, `m`, `h` or `d`, or the long
/// form `Nd HH:MM:SS`. Clock fields out of range and totals that do not fit in
/// 32 bits are rejected like any other unreadable text.
pub fn parse_duration(text: &str) -> Option<i32> {
	let text = text.trim();
	if !text.starts_with(|c: char| c.is_ascii_digit()) {
		return None;
	}

	let total = match text.split_once(['d', 'D']).filter(|(_, clock)| !clock.is_empty()) {
		Some((days, clock)) => {
			let days = parse_span_number(days)?;
			let fields: Vec<&str> = clock.trim().split(':').collect();
			let [hours, minutes, seconds] = fields.as_slice() else {
				return None;
			};
			let (hours, minutes, seconds) =
				(clock_field(hours)?, clock_field(minutes)?, clock_field(seconds)?);
			if hours >= 24 || minutes >= 60 || seconds >= 60 {
				return None;
			}
			days.checked_mul(SECS_PER_DAY)?
				.checked_add(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds)?
		}
		None => {
			let (body, unit) = match text.chars().last() {
				Some(c) if c.is_ascii_alphabetic() => {
					(&text[..text.len() - c.len_utf8()], c.to_ascii_lowercase())
				}
				_ => (text, 's'),
			};
			let scale = match unit {
				's' => 1,
				'm' => SECS_PER_MINUTE,
				'h' => SECS_PER_HOUR,
				'd' => SECS_PER_DAY,
				_ => return None,
			};
			parse_span_number(body)?.checked_mul(scale)?
		}
	};

	i32::try_from(total).ok()
}

fn is_digits(s: &str) -> bool {
	!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_span_number(s: &str) -> Option<i64> {
	if !is_digits(s) {
		return None;
	}
	s.parse().ok()
}

fn clock_field(s: &str) -> Option<i64> {
	if s.len() > 2 {
		return None;
	}
	parse_span_number(s)
}


// vim: ts=4
