//! Commonly used types

pub use crate::error::{Error, TuneResult};
pub use crate::types::{DbRef, MucLevel, ObjectKind, ObjectType};
pub use crate::value::{TuneType, TuneValue};

// vim: ts=4
