//! Error type shared by the tune crates

use std::fmt;

use crate::value::TuneType;

pub type TuneResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Parameter name is not defined in the registry
	UnknownParameter(String),
	/// Defect in the parameter table, detected while building the registry
	ConfigError(String),
	/// Typed accessor used on a parameter of another type
	TypeMismatch {
		name: String,
		expected: TuneType,
		got: TuneType,
	},
	Json(String),

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::UnknownParameter(name) => write!(f, "unknown parameter: {}", name),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::TypeMismatch { name, expected, got } => write!(
				f,
				"type mismatch for parameter '{}': expected {}, got {}",
				name,
				expected.name(),
				got.name()
			),
			Error::Json(msg) => write!(f, "json error: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Json(err.to_string())
	}
}

// vim: ts=4
