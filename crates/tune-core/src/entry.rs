//! Parameter definitions
//!
//! A [`TuneEntry`] is the fixed, compiled-in description of one parameter: its name,
//! type, default, access levels and display metadata. Entries never change after the
//! registry is built; the live value is held by the registry.

use crate::flag::{COMMENT_MARK, DEFAULT_FLAG};
use crate::prelude::*;

/// Definition of one tunable parameter
#[derive(Debug, Clone, PartialEq)]
pub struct TuneEntry {
	/// Unique name, matched case-insensitively
	pub name: String,
	/// Short human-readable explanation
	pub label: String,
	/// Configuration group, used for display
	pub group: String,
	/// Server module the parameter belongs to; empty for the core server
	pub module: String,
	pub value_type: TuneType,
	pub default: TuneValue,
	/// Minimum level required to read
	pub read_level: MucLevel,
	/// Minimum level required to write
	pub write_level: MucLevel,
	/// String parameters only: whether an empty value is allowed
	pub nullable: bool,
	/// Object-reference parameters only: accepted object kind
	pub object_type: ObjectType,
	/// Integer parameters only: inclusive lower bound
	pub min: Option<i32>,
	/// Integer parameters only: inclusive upper bound
	pub max: Option<i32>,
}

impl TuneEntry {
	/// Create a builder for a parameter of type `value_type`
	pub fn builder(name: impl Into<String>, value_type: TuneType) -> TuneEntryBuilder {
		TuneEntryBuilder::new(name, value_type)
	}

	pub fn boolean(name: impl Into<String>, default: bool) -> TuneEntryBuilder {
		Self::builder(name, TuneType::Boolean).default(default.into())
	}

	pub fn integer(name: impl Into<String>, default: i32) -> TuneEntryBuilder {
		Self::builder(name, TuneType::Integer).default(default.into())
	}

	/// Time span parameter with a default given in seconds
	pub fn duration(name: impl Into<String>, default_secs: i32) -> TuneEntryBuilder {
		Self::builder(name, TuneType::Duration).default(TuneValue::Duration(default_secs))
	}

	pub fn dbref(name: impl Into<String>, default: DbRef) -> TuneEntryBuilder {
		Self::builder(name, TuneType::ObjectRef).default(default.into())
	}

	pub fn string(name: impl Into<String>, default: impl Into<String>) -> TuneEntryBuilder {
		let default: String = default.into();
		Self::builder(name, TuneType::String).default(default.into())
	}
}

/// Builder for [`TuneEntry`]
///
/// Read level defaults to `NONE` and write level to `WIZARD`.
pub struct TuneEntryBuilder {
	name: String,
	label: Option<String>,
	group: String,
	module: String,
	value_type: TuneType,
	default: Option<TuneValue>,
	read_level: MucLevel,
	write_level: MucLevel,
	nullable: bool,
	object_type: Option<ObjectType>,
	min: Option<i32>,
	max: Option<i32>,
}

impl TuneEntryBuilder {
	pub fn new(name: impl Into<String>, value_type: TuneType) -> Self {
		Self {
			name: name.into(),
			label: None,
			group: String::new(),
			module: String::new(),
			value_type,
			default: None,
			read_level: MucLevel::NONE,
			write_level: MucLevel::WIZARD,
			nullable: false,
			object_type: None,
			min: None,
			max: None,
		}
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn group(mut self, group: impl Into<String>) -> Self {
		self.group = group.into();
		self
	}

	pub fn module(mut self, module: impl Into<String>) -> Self {
		self.module = module.into();
		self
	}

	pub fn default(mut self, value: TuneValue) -> Self {
		self.default = Some(value);
		self
	}

	pub fn read_level(mut self, level: MucLevel) -> Self {
		self.read_level = level;
		self
	}

	pub fn write_level(mut self, level: MucLevel) -> Self {
		self.write_level = level;
		self
	}

	/// Set both access levels at once
	pub fn levels(self, read: MucLevel, write: MucLevel) -> Self {
		self.read_level(read).write_level(write)
	}

	pub fn nullable(mut self, nullable: bool) -> Self {
		self.nullable = nullable;
		self
	}

	pub fn object_type(mut self, object_type: ObjectType) -> Self {
		self.object_type = Some(object_type);
		self
	}

	pub fn min(mut self, min: i32) -> Self {
		self.min = Some(min);
		self
	}

	pub fn max(mut self, max: i32) -> Self {
		self.max = Some(max);
		self
	}

	/// Inclusive bounds for an integer parameter
	pub fn range(self, min: i32, max: i32) -> Self {
		self.min(min).max(max)
	}

	/// Validate and build the entry
	///
	/// Any inconsistency here is a defect in the parameter table and fails the
	/// registry construction.
	pub fn build(self) -> TuneResult<TuneEntry> {
		let name = self.name;
		if name.is_empty() {
			return Err(Error::ConfigError("Parameter name must not be empty".into()));
		}
		if name.starts_with(DEFAULT_FLAG) {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' must not start with '{}'",
				name, DEFAULT_FLAG
			)));
		}
		if name.starts_with(COMMENT_MARK) {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' must not start with '{}'",
				name, COMMENT_MARK
			)));
		}
		if name.contains('=') || name.chars().any(char::is_whitespace) {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' contains '=' or whitespace",
				name
			)));
		}

		let default = self
			.default
			.ok_or_else(|| Error::ConfigError(format!("Parameter '{}' has no default", name)))?;
		if !default.matches_type(self.value_type) {
			return Err(Error::ConfigError(format!(
				"Default of parameter '{}' is {}, declared {}",
				name,
				default.value_type().name(),
				self.value_type.name()
			)));
		}

		if self.write_level < self.read_level {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' is writable at level {} but readable only at {}",
				name, self.write_level, self.read_level
			)));
		}
		if self.write_level > MucLevel::GOD {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' has write level {} above the maximum",
				name, self.write_level
			)));
		}

		if self.nullable && self.value_type != TuneType::String {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' is nullable but not a string",
				name
			)));
		}
		if self.object_type.is_some() && self.value_type != TuneType::ObjectRef {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' has an object type but is not a dbref",
				name
			)));
		}

		if (self.min.is_some() || self.max.is_some()) && self.value_type != TuneType::Integer {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' has bounds but is not an integer",
				name
			)));
		}
		if let (Some(min), Some(max)) = (self.min, self.max) {
			if min > max {
				return Err(Error::ConfigError(format!(
					"Parameter '{}' has empty range {}..={}",
					name, min, max
				)));
			}
		}
		if let TuneValue::Int(n) = default {
			if self.min.is_some_and(|min| n < min) || self.max.is_some_and(|max| n > max) {
				return Err(Error::ConfigError(format!(
					"Default {} of parameter '{}' is out of range",
					n, name
				)));
			}
		}

		Ok(TuneEntry {
			label: self.label.unwrap_or_else(|| name.clone()),
			name,
			group: self.group,
			module: self.module,
			value_type: self.value_type,
			default,
			read_level: self.read_level,
			write_level: self.write_level,
			nullable: self.nullable,
			object_type: self.object_type.unwrap_or_default(),
			min: self.min,
			max: self.max,
		})
	}
}


// vim: ts=4
