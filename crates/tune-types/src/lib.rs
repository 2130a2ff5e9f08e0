//! Shared types for the tunable parameter registry.
//!
//! This crate holds everything the registry consumes from, or hands back to, the host
//! server process: privilege levels, object references and their kinds, the typed
//! parameter value, and the error type used across the workspace.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod object_db;
pub mod prelude;
pub mod types;
pub mod value;

pub use error::{Error, TuneResult};
pub use object_db::{MemoryObjectDb, ObjectDb};
pub use types::{DbRef, MucLevel, ObjectKind, ObjectType};
pub use value::{TuneType, TuneValue};

// vim: ts=4
