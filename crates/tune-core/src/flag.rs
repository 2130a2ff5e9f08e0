//! The `%` default flag
//!
//! One leading `%` carries two meanings: on a saved line it marks a parameter that
//! still holds its compiled-in default, and on a write it requests a reset to that
//! default. Both the interactive set path and the file loader go through
//! [`split_default_flag`] so the two readings cannot drift apart.

/// Marks a defaulted line on save, and requests a reset on write
pub const DEFAULT_FLAG: char = '%';

/// First non-space character of a comment line in a parameter file
pub const COMMENT_MARK: char = '#';

/// Strip one leading default flag from `name`, reporting whether it was present
pub fn split_default_flag(name: &str) -> (bool, &str) {
	match name.strip_prefix(DEFAULT_FLAG) {
		Some(rest) => (true, rest),
		None => (false, name),
	}
}

/// True if a raw value on its own asks for a reset (`name=%`)
///
/// Only a bare `%` counts; padded text is an ordinary value.
pub fn is_reset_value(raw: &str) -> bool {
	let (flagged, rest) = split_default_flag(raw);
	flagged && rest.is_empty()
}

/// True if a parameter file line is a comment
pub fn is_comment(line: &str) -> bool {
	line.trim_start().starts_with(COMMENT_MARK)
}


// vim: ts=4
