//! Access control for parameter reads and writes
//!
//! Read and write levels are checked independently; a caller passing one check says
//! nothing about the other.

use crate::prelude::*;

/// Check if a caller at `level` may read `entry`
pub fn can_read(entry: &TuneEntry, level: MucLevel) -> bool {
	level >= entry.read_level
}

/// Check if a caller at `level` may write `entry`
pub fn can_write(entry: &TuneEntry, level: MucLevel) -> bool {
	level >= entry.write_level
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(read: MucLevel, write: MucLevel) -> TuneEntry {
		TuneEntry::boolean("secure_who", false).levels(read, write).build().expect("valid entry")
	}

	#[test]
	fn test_read_write_levels() {
		let e = entry(MucLevel::MASTER, MucLevel::WIZARD);
		assert!(!can_read(&e, MucLevel::JOURNEYMAN));
		assert!(can_read(&e, MucLevel::MASTER));
		assert!(!can_write(&e, MucLevel::MASTER));
		assert!(can_write(&e, MucLevel::WIZARD));
	}

	#[test]
	fn test_monotonic() {
		let e = entry(MucLevel::APPRENTICE, MucLevel::MASTER);
		for lvl in 0..=MucLevel::GOD.0 {
			if can_write(&e, MucLevel(lvl)) {
				assert!((lvl..=MucLevel::GOD.0).all(|higher| can_write(&e, MucLevel(higher))));
			}
			if can_read(&e, MucLevel(lvl)) {
				assert!((lvl..=MucLevel::GOD.0).all(|higher| can_read(&e, MucLevel(higher))));
			}
		}
	}

	#[test]
	fn test_god_passes_everything() {
		let e = entry(MucLevel::GOD, MucLevel::GOD);
		assert!(can_read(&e, MucLevel::GOD));
		assert!(can_write(&e, MucLevel::GOD));
		assert!(!can_read(&e, MucLevel::WIZARD));
	}
}

// vim: ts=4
