//! Host database interface used to validate object references

use std::collections::BTreeMap;

use crate::types::{DbRef, ObjectKind};

/// The slice of the host object database the registry depends on
pub trait ObjectDb: Send + Sync {
	/// Kind of the object behind `obj`, or `None` if no such object exists
	fn kind_of(&self, obj: DbRef) -> Option<ObjectKind>;
}

/// In-memory object database
///
/// Objects are keyed by reference, so sparse numbering costs nothing. Recycling an
/// object keeps it as garbage.
#[derive(Debug, Clone, Default)]
pub struct MemoryObjectDb {
	objects: BTreeMap<DbRef, ObjectKind>,
}

impl MemoryObjectDb {
	pub fn new() -> Self {
		Self::default()
	}

	/// Database holding the two objects every fresh world starts with:
	/// room `#0` and the wizard player `#1`
	pub fn minimal() -> Self {
		let mut db = Self::new();
		db.insert(DbRef(0), ObjectKind::Room);
		db.insert(DbRef(1), ObjectKind::Player);
		db
	}

	/// Create a new object after the highest existing reference
	///
	/// Returns `None` once references are exhausted.
	pub fn create(&mut self, kind: ObjectKind) -> Option<DbRef> {
		let next = match self.objects.last_key_value() {
			Some((last, _)) => DbRef(last.0.checked_add(1)?),
			None => DbRef(0),
		};
		self.objects.insert(next, kind);
		Some(next)
	}

	/// Place an object of `kind` at `obj`, replacing whatever was there
	///
	/// Returns false for negative references.
	pub fn insert(&mut self, obj: DbRef, kind: ObjectKind) -> bool {
		if obj.is_nothing() {
			return false;
		}
		self.objects.insert(obj, kind);
		true
	}

	/// Turn an existing object into garbage. Returns false if it does not exist.
	pub fn recycle(&mut self, obj: DbRef) -> bool {
		match self.objects.get_mut(&obj) {
			Some(slot) => {
				*slot = ObjectKind::Garbage;
				true
			}
			None => false,
		}
	}

	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}
}

impl ObjectDb for MemoryObjectDb {
	fn kind_of(&self, obj: DbRef) -> Option<ObjectKind> {
		self.objects.get(&obj).copied()
	}
}


// vim: ts=4
