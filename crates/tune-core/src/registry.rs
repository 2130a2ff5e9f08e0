//! Parameter registry
//!
//! The registry owns the live value of every parameter. Other subsystems read values
//! through the typed accessors or through a [`TuneHandle`] resolved once at startup;
//! nothing outside the registry holds a reference into its storage.
//!
//! The registry does no internal locking. A multi-threaded host wraps it in a
//! [`SharedRegistry`] or otherwise serializes access.

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use muck_tune_types::ObjectDb;

use crate::codec;
use crate::flag::{is_reset_value, split_default_flag};
use crate::gate;
use crate::prelude::*;

/// Registry behind a lock, for hosts that access it from several threads
pub type SharedRegistry = Arc<RwLock<TuneRegistry>>;

/// Stable index of a parameter within the registry that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TuneHandle(usize);

#[derive(Debug, Clone)]
pub(crate) struct TuneSlot {
	pub(crate) value: TuneValue,
	pub(crate) is_default: bool,
}

impl TuneSlot {
	fn from_default(entry: &TuneEntry) -> Self {
		Self { value: entry.default.clone(), is_default: true }
	}
}

/// Read-only view of one parameter and its current state
#[derive(Debug, Clone, Copy)]
pub struct TuneParam<'a> {
	pub entry: &'a TuneEntry,
	pub value: &'a TuneValue,
	pub is_default: bool,
	pub active: bool,
}

impl<'a> TuneParam<'a> {
	pub fn name(&self) -> &'a str {
		&self.entry.name
	}

	pub fn formatted_value(&self) -> String {
		codec::format(self.value)
	}

	pub fn formatted_default(&self) -> String {
		codec::format(&self.entry.default)
	}
}

/// Mutable table used while the parameter list is assembled
pub struct TuneRegistryBuilder {
	entries: Vec<TuneEntry>,
	index: HashMap<String, usize>,
}

impl TuneRegistryBuilder {
	pub fn new() -> Self {
		Self { entries: Vec::new(), index: HashMap::new() }
	}

	/// Register a parameter; names must be unique ignoring case
	pub fn register(&mut self, entry: TuneEntry) -> TuneResult<()> {
		let key = entry.name.to_lowercase();
		if self.index.contains_key(&key) {
			return Err(Error::ConfigError(format!(
				"Parameter '{}' is already registered",
				entry.name
			)));
		}

		debug!("Registering parameter: {}", entry.name);
		self.index.insert(key, self.entries.len());
		self.entries.push(entry);
		Ok(())
	}

	/// Freeze the definitions; every parameter starts at its default
	pub fn build(self, db: Arc<dyn ObjectDb>) -> TuneRegistry {
		info!("Building tune registry with {} parameters", self.entries.len());
		let slots = self.entries.iter().map(TuneSlot::from_default).collect();
		TuneRegistry {
			entries: self.entries,
			slots,
			index: self.index,
			db,
			inactive_modules: HashSet::new(),
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for TuneRegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// The parameter table with its live values
pub struct TuneRegistry {
	pub(crate) entries: Vec<TuneEntry>,
	pub(crate) slots: Vec<TuneSlot>,
	index: HashMap<String, usize>,
	db: Arc<dyn ObjectDb>,
	inactive_modules: HashSet<String>,
}

impl fmt::Debug for TuneRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TuneRegistry")
			.field("entries", &self.entries.len())
			.field("inactive_modules", &self.inactive_modules)
			.finish_non_exhaustive()
	}
}

impl TuneRegistry {
	pub fn builder() -> TuneRegistryBuilder {
		TuneRegistryBuilder::new()
	}

	/// Number of defined parameters
	pub fn count(&self) -> usize {
		self.entries.len()
	}

	/// Find a parameter by name, ignoring case and one leading `%`
	pub fn lookup(&self, name: &str) -> Option<TuneParam<'_>> {
		self.position(name).map(|idx| self.param(idx))
	}

	/// All parameters in definition order
	pub fn iter(&self) -> impl Iterator<Item = TuneParam<'_>> + '_ {
		(0..self.entries.len()).map(|idx| self.param(idx))
	}

	/// Resolve a name to a handle for repeated access
	pub fn handle(&self, name: &str) -> Option<TuneHandle> {
		self.position(name).map(TuneHandle)
	}

	/// Current value behind a handle issued by this registry
	pub fn value(&self, handle: TuneHandle) -> Option<&TuneValue> {
		self.slots.get(handle.0).map(|slot| &slot.value)
	}

	/// Replace every value with its default and mark it as defaulted
	///
	/// Overrides are discarded and can only be recovered from a saved file.
	pub fn load_defaults(&mut self) {
		self.reset_all();
		info!("Loaded defaults for {} parameters", self.entries.len());
	}

	/// Release override storage at shutdown
	pub fn free_all(&mut self) {
		let released = self
			.slots
			.iter()
			.filter(|slot| !slot.is_default && matches!(slot.value, TuneValue::Str(_)))
			.count();
		self.reset_all();
		debug!("Released {} overridden string parameters", released);
	}

	fn reset_all(&mut self) {
		for (entry, slot) in self.entries.iter().zip(self.slots.iter_mut()) {
			*slot = TuneSlot::from_default(entry);
		}
	}

	/// Set a parameter from text on behalf of a caller at `level`
	///
	/// A leading `%` on the name, or a value of exactly `%`, resets the parameter to
	/// its default. State changes only when the result is a success.
	pub fn set_parameter(&mut self, name: &str, raw: &str, level: MucLevel) -> TuneSetResult {
		let (flagged, _) = split_default_flag(name);
		let Some(idx) = self.position(name) else {
			debug!("Set of unknown parameter '{}'", name);
			return TuneSetResult::Unknown;
		};
		let entry = &self.entries[idx];

		if !gate::can_write(entry, level) {
			warn!(
				"Permission denied for parameter '{}': requires level {}, caller has {}",
				entry.name, entry.write_level, level
			);
			return TuneSetResult::Denied;
		}

		if flagged || is_reset_value(raw) {
			self.slots[idx] = TuneSlot::from_default(entry);
			debug!("Parameter '{}' reset to default", entry.name);
			return TuneSetResult::SuccessDefault;
		}

		match codec::parse(entry, raw, self.db.as_ref()) {
			Ok(value) => {
				self.slots[idx] = TuneSlot { value, is_default: false };
				debug!("Parameter '{}' set", entry.name);
				TuneSetResult::Success
			}
			Err(err) => {
				debug!("Rejected value for parameter '{}': {:?}", entry.name, err);
				err.into()
			}
		}
	}

	/// Current value of a parameter as text, for a caller at `level`
	///
	/// Unknown names and denied reads both yield empty text.
	pub fn get_parameter_string(&self, name: &str, level: MucLevel) -> String {
		match self.lookup(name) {
			Some(param) if gate::can_read(param.entry, level) => param.formatted_value(),
			_ => String::new(),
		}
	}

	pub fn get_bool(&self, name: &str) -> TuneResult<bool> {
		let value = self.typed(name, TuneType::Boolean)?;
		Ok(value.as_bool().unwrap_or_default())
	}

	pub fn get_int(&self, name: &str) -> TuneResult<i32> {
		let value = self.typed(name, TuneType::Integer)?;
		Ok(value.as_int().unwrap_or_default())
	}

	/// Time span parameter; negative spans read as zero
	pub fn get_duration(&self, name: &str) -> TuneResult<std::time::Duration> {
		let value = self.typed(name, TuneType::Duration)?;
		let secs = value.as_duration_secs().unwrap_or_default();
		Ok(std::time::Duration::from_secs(u64::try_from(secs).unwrap_or(0)))
	}

	pub fn get_dbref(&self, name: &str) -> TuneResult<DbRef> {
		let value = self.typed(name, TuneType::ObjectRef)?;
		Ok(value.as_dbref().unwrap_or(DbRef::NOTHING))
	}

	pub fn get_str(&self, name: &str) -> TuneResult<&str> {
		let value = self.typed(name, TuneType::String)?;
		Ok(value.as_str().unwrap_or_default())
	}

	/// Mark all parameters of a server module as active or inactive
	pub fn set_module_active(&mut self, module: &str, active: bool) {
		let module = module.to_lowercase();
		if active {
			self.inactive_modules.remove(&module);
		} else {
			info!("Module '{}' marked inactive", module);
			self.inactive_modules.insert(module);
		}
	}

	/// Parameters of the core server (empty module) are always active
	pub fn is_module_active(&self, module: &str) -> bool {
		module.is_empty() || !self.inactive_modules.contains(&module.to_lowercase())
	}

	pub fn into_shared(self) -> SharedRegistry {
		Arc::new(RwLock::new(self))
	}

	fn position(&self, name: &str) -> Option<usize> {
		let (_, name) = split_default_flag(name);
		self.index.get(&name.to_lowercase()).copied()
	}

	fn param(&self, idx: usize) -> TuneParam<'_> {
		let entry = &self.entries[idx];
		let slot = &self.slots[idx];
		TuneParam {
			entry,
			value: &slot.value,
			is_default: slot.is_default,
			active: self.is_module_active(&entry.module),
		}
	}

	fn typed(&self, name: &str, expected: TuneType) -> TuneResult<&TuneValue> {
		let param = self.lookup(name).ok_or_else(|| Error::UnknownParameter(name.to_string()))?;
		if param.entry.value_type != expected {
			return Err(Error::TypeMismatch {
				name: param.entry.name.clone(),
				expected,
				got: param.entry.value_type,
			});
		}
		Ok(param.value)
	}
}

// vim: ts=4
