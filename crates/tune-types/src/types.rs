//! Host-side primitive types consumed by the registry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to an object in the host database
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DbRef(pub i32);

impl DbRef {
	/// The "no object" reference
	pub const NOTHING: DbRef = DbRef(-1);

	pub fn is_nothing(self) -> bool {
		self.0 < 0
	}
}

impl fmt::Display for DbRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// MUCKER privilege level of a caller
///
/// The gate only ever compares levels with `>=`.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MucLevel(pub u8);

impl MucLevel {
	pub const NONE: MucLevel = MucLevel(0);
	pub const APPRENTICE: MucLevel = MucLevel(1);
	pub const JOURNEYMAN: MucLevel = MucLevel(2);
	pub const MASTER: MucLevel = MucLevel(3);
	pub const WIZARD: MucLevel = MucLevel(4);
	/// Highest level; used when applying operator-authored parameter files
	pub const GOD: MucLevel = MucLevel(5);

	/// Parse a level from its number or its name (`wizard`, `god`, ...)
	pub fn parse(s: &str) -> Option<MucLevel> {
		let s = s.trim();
		if let Ok(n) = s.parse::<u8>() {
			return (n <= Self::GOD.0).then_some(MucLevel(n));
		}
		match s.to_ascii_lowercase().as_str() {
			"none" => Some(Self::NONE),
			"apprentice" | "m1" => Some(Self::APPRENTICE),
			"journeyman" | "m2" => Some(Self::JOURNEYMAN),
			"master" | "m3" => Some(Self::MASTER),
			"wizard" | "w" => Some(Self::WIZARD),
			"god" => Some(Self::GOD),
			_ => None,
		}
	}
}

impl fmt::Display for MucLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Kind of an existing object, as reported by the host database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
	Player,
	Thing,
	Room,
	Exit,
	Program,
	/// Recycled object slot
	Garbage,
}

impl ObjectKind {
	pub fn name(self) -> &'static str {
		match self {
			ObjectKind::Player => "player",
			ObjectKind::Thing => "thing",
			ObjectKind::Room => "room",
			ObjectKind::Exit => "exit",
			ObjectKind::Program => "program",
			ObjectKind::Garbage => "garbage",
		}
	}
}

impl std::str::FromStr for ObjectKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"player" => Ok(ObjectKind::Player),
			"thing" => Ok(ObjectKind::Thing),
			"room" => Ok(ObjectKind::Room),
			"exit" => Ok(ObjectKind::Exit),
			"program" => Ok(ObjectKind::Program),
			"garbage" => Ok(ObjectKind::Garbage),
			other => Err(format!("unknown object kind: {}", other)),
		}
	}
}

/// Subtype constraint on an object-reference parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
	#[default]
	Any,
	Player,
	Thing,
	Room,
	Exit,
	Program,
	Garbage,
}

impl ObjectType {
	pub fn name(self) -> &'static str {
		match self {
			ObjectType::Any => "any",
			ObjectType::Player => "player",
			ObjectType::Thing => "thing",
			ObjectType::Room => "room",
			ObjectType::Exit => "exit",
			ObjectType::Program => "program",
			ObjectType::Garbage => "garbage",
		}
	}

	/// Check whether an object of `kind` satisfies this constraint
	///
	/// Recycled objects only satisfy an explicit `Garbage` constraint.
	pub fn accepts(self, kind: ObjectKind) -> bool {
		match (self, kind) {
			(ObjectType::Garbage, ObjectKind::Garbage) => true,
			(_, ObjectKind::Garbage) | (ObjectType::Garbage, _) => false,
			(ObjectType::Any, _) => true,
			(ObjectType::Player, ObjectKind::Player)
			| (ObjectType::Thing, ObjectKind::Thing)
			| (ObjectType::Room, ObjectKind::Room)
			| (ObjectType::Exit, ObjectKind::Exit)
			| (ObjectType::Program, ObjectKind::Program) => true,
			_ => false,
		}
	}
}


// vim: ts=4
