//! Commonly used types

pub use muck_tune_types::prelude::*;

pub use crate::entry::TuneEntry;
pub use crate::registry::{TuneRegistry, TuneRegistryBuilder};
pub use crate::result::TuneSetResult;

// vim: ts=4
