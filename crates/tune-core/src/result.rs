//! Outcome codes of a parameter write

use serde::Serialize;
use std::fmt;

/// Result of [`TuneRegistry::set_parameter`](crate::TuneRegistry::set_parameter)
///
/// Only `Success` and `SuccessDefault` mean state was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TuneSetResult {
	/// New value installed
	Success,
	/// Parameter reset to its compiled-in default
	SuccessDefault,
	/// No parameter by that name
	Unknown,
	/// Value text could not be parsed for the parameter's type
	Syntax,
	/// Value parsed but failed validation
	BadValue,
	/// Caller's level is too low
	Denied,
}

impl TuneSetResult {
	pub fn is_success(self) -> bool {
		matches!(self, TuneSetResult::Success | TuneSetResult::SuccessDefault)
	}

	/// Numeric code used by older tooling and scripts
	pub fn code(self) -> i32 {
		match self {
			TuneSetResult::Success => 0,
			TuneSetResult::Unknown => 1,
			TuneSetResult::Syntax => 2,
			TuneSetResult::BadValue => 3,
			TuneSetResult::Denied => 4,
			TuneSetResult::SuccessDefault => 5,
		}
	}

	/// Message shown to an operator
	pub fn message(self) -> &'static str {
		match self {
			TuneSetResult::Success => "Parameter set.",
			TuneSetResult::SuccessDefault => "Parameter reset to default.",
			TuneSetResult::Unknown => "Unknown parameter.",
			TuneSetResult::Syntax => "Bad parameter syntax.",
			TuneSetResult::BadValue => "Bad parameter value.",
			TuneSetResult::Denied => "Permission denied.",
		}
	}
}

impl fmt::Display for TuneSetResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message())
	}
}

// vim: ts=4
