//! Runtime-tunable parameter registry.
//!
//! A fixed table of named parameters, each with a compiled-in default, access levels
//! and display metadata. The registry tracks whether every parameter still holds its
//! default, gates reads and writes by caller level, saves to and loads from a
//! line-oriented text file, and exports a structured snapshot for scripts.
//!
//! # Modules
//!
//! - **Entry** (`entry.rs`): parameter definitions and their builder
//! - **Registry** (`registry.rs`): live values, lookup, set/get, typed accessors
//! - **Gate** (`gate.rs`): read/write level checks
//! - **Codec** (`codec.rs`): text parsing and canonical formatting
//! - **Persistence** (`persist.rs`): parameter file save and load
//! - **Export** (`export.rs`): filtered snapshot records
//! - **Table** (`tunelist.rs`): the standard parameter set

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod entry;
pub mod export;
pub mod flag;
pub mod gate;
pub mod persist;
pub mod prelude;
pub mod registry;
pub mod result;
pub mod tunelist;

pub use entry::{TuneEntry, TuneEntryBuilder};
pub use export::{NamePattern, TuneRecord};
pub use persist::{LoadSummary, TuneNotifier};
pub use registry::{SharedRegistry, TuneHandle, TuneParam, TuneRegistry, TuneRegistryBuilder};
pub use result::TuneSetResult;
pub use tunelist::keys;

pub use muck_tune_types::{
	DbRef, Error, MemoryObjectDb, MucLevel, ObjectDb, ObjectKind, ObjectType, TuneResult, TuneType,
	TuneValue,
};

// vim: ts=4
