//! Typed parameter values
//!
//! A parameter's declared [`TuneType`] is the only discriminator for which
//! [`TuneValue`] variant it may hold; values are never classified by inspection.

use serde::{Deserialize, Serialize};

use crate::types::DbRef;

/// Declared type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TuneType {
	Boolean,
	Integer,
	/// Time span, stored as seconds
	#[serde(rename = "timespan")]
	Duration,
	#[serde(rename = "dbref")]
	ObjectRef,
	String,
}

impl TuneType {
	/// Type tag used in exports and messages
	pub fn name(self) -> &'static str {
		match self {
			TuneType::Boolean => "boolean",
			TuneType::Integer => "integer",
			TuneType::Duration => "timespan",
			TuneType::ObjectRef => "dbref",
			TuneType::String => "string",
		}
	}
}

/// Value of a parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TuneValue {
	Bool(bool),
	Int(i32),
	/// Seconds
	Duration(i32),
	Ref(DbRef),
	Str(String),
}

impl TuneValue {
	pub fn value_type(&self) -> TuneType {
		match self {
			TuneValue::Bool(_) => TuneType::Boolean,
			TuneValue::Int(_) => TuneType::Integer,
			TuneValue::Duration(_) => TuneType::Duration,
			TuneValue::Ref(_) => TuneType::ObjectRef,
			TuneValue::Str(_) => TuneType::String,
		}
	}

	/// Check if this value is valid storage for a parameter of type `ty`
	pub fn matches_type(&self, ty: TuneType) -> bool {
		self.value_type() == ty
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			TuneValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i32> {
		match self {
			TuneValue::Int(n) => Some(*n),
			_ => None,
		}
	}

	/// Seconds of a duration value
	pub fn as_duration_secs(&self) -> Option<i32> {
		match self {
			TuneValue::Duration(t) => Some(*t),
			_ => None,
		}
	}

	pub fn as_dbref(&self) -> Option<DbRef> {
		match self {
			TuneValue::Ref(d) => Some(*d),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			TuneValue::Str(s) => Some(s),
			_ => None,
		}
	}
}

impl From<bool> for TuneValue {
	fn from(v: bool) -> Self {
		TuneValue::Bool(v)
	}
}

impl From<i32> for TuneValue {
	fn from(v: i32) -> Self {
		TuneValue::Int(v)
	}
}

impl From<DbRef> for TuneValue {
	fn from(v: DbRef) -> Self {
		TuneValue::Ref(v)
	}
}

impl From<String> for TuneValue {
	fn from(v: String) -> Self {
		TuneValue::Str(v)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_matches_type() {
		assert!(TuneValue::Bool(true).matches_type(TuneType::Boolean));
		assert!(TuneValue::Duration(60).matches_type(TuneType::Duration));
		// Same storage width, different declared type
		assert!(!TuneValue::Int(60).matches_type(TuneType::Duration));
		assert!(!TuneValue::Str(String::new()).matches_type(TuneType::ObjectRef));
	}

	#[test]
	fn test_type_names() {
		assert_eq!(TuneType::Duration.name(), "timespan");
		assert_eq!(TuneType::ObjectRef.name(), "dbref");
		assert_eq!(TuneValue::Ref(DbRef(3)).value_type().name(), "dbref");
	}

	#[test]
	fn test_from_native() {
		assert_eq!(TuneValue::from(true), TuneValue::Bool(true));
		assert_eq!(TuneValue::from(-4), TuneValue::Int(-4));
		assert_eq!(TuneValue::from(DbRef(2)), TuneValue::Ref(DbRef(2)));
		assert_eq!(TuneValue::from(String::from("bead")).as_str(), Some("bead"));
	}
}

// vim: ts=4
