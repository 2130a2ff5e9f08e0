//! Registry behaviour tests
//!
//! Exercises lookup, the set/get contract, reset semantics, privilege checks and the
//! typed accessors against the standard parameter table.

use std::sync::Arc;
use std::time::Duration;

use muck_tune::{
	DbRef, Error, MemoryObjectDb, MucLevel, ObjectKind, TuneEntry, TuneRegistry, TuneSetResult,
	TuneValue, keys,
};

fn init_logging() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn standard() -> TuneRegistry {
	init_logging();
	TuneRegistry::standard(Arc::new(MemoryObjectDb::minimal())).expect("Failed to build registry")
}

#[test]
fn test_lookup_ignores_case_and_default_flag() {
	let reg = standard();

	let param = reg.lookup("MAX_OUTPUT").expect("max_output should exist");
	assert_eq!(param.name(), "max_output");
	assert_eq!(reg.lookup("%max_output").map(|p| p.name().to_string()), Some("max_output".into()));
	assert!(reg.lookup("not_a_real_param").is_none());
	assert!(reg.lookup("%%max_output").is_none());
}

#[test]
fn test_load_defaults_restores_everything() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter("max_output", "4096", MucLevel::GOD), TuneSetResult::Success);
	assert_eq!(reg.set_parameter("muckname", "Hollow Oak", MucLevel::GOD), TuneSetResult::Success);
	assert_eq!(reg.set_parameter("dark_sleepers", "yes", MucLevel::GOD), TuneSetResult::Success);

	reg.load_defaults();

	for param in reg.iter() {
		assert!(param.is_default, "{} should be default", param.name());
		assert_eq!(param.formatted_value(), param.formatted_default(), "{}", param.name());
	}
}

#[test]
fn test_boolean_canonical_spelling() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter(keys::SECURE_WHO, "YES", MucLevel::WIZARD), TuneSetResult::Success);
	assert_eq!(reg.get_parameter_string(keys::SECURE_WHO, MucLevel::NONE), "yes");
	assert!(!reg.lookup(keys::SECURE_WHO).expect("exists").is_default);

	assert_eq!(reg.set_parameter(keys::SECURE_WHO, "false", MucLevel::WIZARD), TuneSetResult::Success);
	assert_eq!(reg.get_parameter_string(keys::SECURE_WHO, MucLevel::NONE), "no");
}

#[test]
fn test_negative_integer_is_bad_value() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter(keys::MAX_OUTPUT, "-1", MucLevel::GOD), TuneSetResult::BadValue);
	assert_eq!(reg.get_parameter_string(keys::MAX_OUTPUT, MucLevel::GOD), "1024");
	assert!(reg.lookup(keys::MAX_OUTPUT).expect("exists").is_default);
}

#[test]
fn test_syntax_error_leaves_value() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter(keys::MAX_OUTPUT, "lots", MucLevel::GOD), TuneSetResult::Syntax);
	assert_eq!(reg.set_parameter(keys::SECURE_WHO, "maybe", MucLevel::GOD), TuneSetResult::Syntax);
	assert_eq!(reg.set_parameter(keys::DUMP_INTERVAL, "soon", MucLevel::GOD), TuneSetResult::Syntax);
	assert_eq!(reg.get_parameter_string(keys::MAX_OUTPUT, MucLevel::GOD), "1024");
	assert_eq!(reg.get_parameter_string(keys::DUMP_INTERVAL, MucLevel::GOD), "14400");
}

#[test]
fn test_numeric_overflow_is_syntax() {
	let mut reg = standard();
	assert_eq!(
		reg.set_parameter(keys::MAX_OUTPUT, "99999999999", MucLevel::GOD),
		TuneSetResult::Syntax
	);
	assert_eq!(reg.set_parameter(keys::MAXIDLE, "99999999999", MucLevel::GOD), TuneSetResult::Syntax);
	assert_eq!(reg.set_parameter(keys::MAXIDLE, "99999d", MucLevel::GOD), TuneSetResult::Syntax);
	assert!(reg.lookup(keys::MAX_OUTPUT).expect("exists").is_default);
	assert!(reg.lookup(keys::MAXIDLE).expect("exists").is_default);
}

#[test]
fn test_unknown_parameter() {
	let mut reg = standard();
	let count = reg.count();
	assert_eq!(
		reg.set_parameter("not_a_real_param", "1", MucLevel::GOD),
		TuneSetResult::Unknown
	);
	assert_eq!(reg.count(), count);
	assert_eq!(reg.get_parameter_string("not_a_real_param", MucLevel::GOD), "");
}

#[test]
fn test_denied_write_does_not_mutate() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter(keys::MUCKNAME, "Hollow Oak", MucLevel::GOD), TuneSetResult::Success);

	assert_eq!(reg.set_parameter(keys::MUCKNAME, "Other", MucLevel::MASTER), TuneSetResult::Denied);
	assert_eq!(reg.set_parameter("%muckname", "", MucLevel::MASTER), TuneSetResult::Denied);
	assert_eq!(reg.set_parameter(keys::MUCKNAME, "%", MucLevel::MASTER), TuneSetResult::Denied);

	let param = reg.lookup(keys::MUCKNAME).expect("exists");
	assert_eq!(param.formatted_value(), "Hollow Oak");
	assert!(!param.is_default);
}

#[test]
fn test_denied_even_for_bad_text() {
	let mut reg = standard();
	// The gate runs before the parser
	assert_eq!(reg.set_parameter(keys::MAX_OUTPUT, "lots", MucLevel::NONE), TuneSetResult::Denied);
	assert_eq!(
		reg.set_parameter(keys::STRICT_GOD_PRIV, "no", MucLevel::WIZARD),
		TuneSetResult::Denied
	);
	assert_eq!(
		reg.set_parameter(keys::STRICT_GOD_PRIV, "no", MucLevel::GOD),
		TuneSetResult::Success
	);
}

#[test]
fn test_reset_restores_default() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter(keys::MAX_OUTPUT, "4096", MucLevel::GOD), TuneSetResult::Success);

	assert_eq!(
		reg.set_parameter("%max_output", "ignored", MucLevel::GOD),
		TuneSetResult::SuccessDefault
	);
	let param = reg.lookup(keys::MAX_OUTPUT).expect("exists");
	assert!(param.is_default);
	assert_eq!(param.value, &TuneValue::Int(1024));

	assert_eq!(reg.set_parameter(keys::MAX_OUTPUT, "4096", MucLevel::GOD), TuneSetResult::Success);
	assert_eq!(reg.set_parameter(keys::MAX_OUTPUT, "%", MucLevel::GOD), TuneSetResult::SuccessDefault);
	assert!(reg.lookup(keys::MAX_OUTPUT).expect("exists").is_default);
}

#[test]
fn test_padded_percent_is_a_plain_string() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter(keys::MUCKNAME, " % ", MucLevel::GOD), TuneSetResult::Success);
	let param = reg.lookup(keys::MUCKNAME).expect("exists");
	assert!(!param.is_default);
	assert_eq!(param.formatted_value(), " % ");

	assert_eq!(reg.set_parameter(keys::MUCKNAME, "%", MucLevel::GOD), TuneSetResult::SuccessDefault);
	assert_eq!(reg.get_parameter_string(keys::MUCKNAME, MucLevel::NONE), "Fuzzball");
}

#[test]
fn test_reset_works_for_every_parameter() {
	let mut reg = standard();
	let names: Vec<String> = reg.iter().map(|p| p.name().to_string()).collect();
	for name in names {
		assert_eq!(
			reg.set_parameter(&name, "%", MucLevel::GOD),
			TuneSetResult::SuccessDefault,
			"{}",
			name
		);
		let param = reg.lookup(&name).expect("exists");
		assert!(param.is_default);
		assert_eq!(param.value, &param.entry.default);
	}
}

#[test]
fn test_explicit_default_value_counts_as_override() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter(keys::MAX_OUTPUT, "1024", MucLevel::GOD), TuneSetResult::Success);
	assert!(!reg.lookup(keys::MAX_OUTPUT).expect("exists").is_default);
}

#[test]
fn test_set_then_get_is_canonical() {
	let mut reg = standard();
	let cases = [
		(keys::IDLEBOOT, "off", "no"),
		(keys::MAX_PENNIES, "+250", "250"),
		(keys::DUMP_INTERVAL, "2h", "7200"),
		(keys::MAXIDLE, "1d 00:30:00", "88200"),
		(keys::LOST_AND_FOUND, " #0 ", "#0"),
		(keys::PENNY, "bead", "bead"),
	];
	for (name, text, expected) in cases {
		assert_eq!(reg.set_parameter(name, text, MucLevel::GOD), TuneSetResult::Success, "{}", name);
		let formatted = reg.get_parameter_string(name, MucLevel::GOD);
		assert_eq!(formatted, expected);

		// Formatting is a fixed point
		assert_eq!(reg.set_parameter(name, &formatted, MucLevel::GOD), TuneSetResult::Success);
		assert_eq!(reg.get_parameter_string(name, MucLevel::GOD), formatted);
	}
}

#[test]
fn test_write_privilege_is_monotonic() {
	let mut reg = standard();
	let params: Vec<(String, String)> =
		reg.iter().map(|p| (p.name().to_string(), p.formatted_default())).collect();

	for (name, text) in params {
		let mut succeeded_below = false;
		for level in 0..=MucLevel::GOD.0 {
			let ok = reg.set_parameter(&name, &text, MucLevel(level)).is_success();
			assert!(!succeeded_below || ok, "{} failed at level {} after succeeding lower", name, level);
			succeeded_below |= ok;
		}
		assert!(succeeded_below, "{} never accepted its own default", name);
	}
}

#[test]
fn test_read_denied_returns_empty() {
	let mut reg = standard();
	assert_eq!(
		reg.set_parameter(keys::SSL_KEYFILE_PASSWD, "hunter2", MucLevel::GOD),
		TuneSetResult::Success
	);
	assert_eq!(reg.get_parameter_string(keys::SSL_KEYFILE_PASSWD, MucLevel::WIZARD), "");
	assert_eq!(reg.get_parameter_string(keys::SSL_KEYFILE_PASSWD, MucLevel::GOD), "hunter2");
	assert_eq!(reg.get_parameter_string("%ssl_keyfile_passwd", MucLevel::GOD), "hunter2");
}

#[test]
fn test_object_reference_validation() {
	let mut db = MemoryObjectDb::minimal();
	let room = db.create(ObjectKind::Room).expect("free reference");
	let thing = db.create(ObjectKind::Thing).expect("free reference");
	let gone = db.create(ObjectKind::Room).expect("free reference");
	db.recycle(gone);
	let mut reg = TuneRegistry::standard(Arc::new(db)).expect("Failed to build registry");

	// player_start must be a room
	assert_eq!(reg.set_parameter(keys::PLAYER_START, "#1", MucLevel::GOD), TuneSetResult::BadValue);
	assert_eq!(
		reg.set_parameter(keys::PLAYER_START, &thing.to_string(), MucLevel::GOD),
		TuneSetResult::BadValue
	);
	assert_eq!(
		reg.set_parameter(keys::PLAYER_START, &gone.to_string(), MucLevel::GOD),
		TuneSetResult::BadValue
	);
	assert_eq!(reg.set_parameter(keys::PLAYER_START, "#99", MucLevel::GOD), TuneSetResult::BadValue);
	assert_eq!(reg.set_parameter(keys::PLAYER_START, "2", MucLevel::GOD), TuneSetResult::Syntax);
	assert_eq!(
		reg.set_parameter(keys::PLAYER_START, &room.to_string(), MucLevel::GOD),
		TuneSetResult::Success
	);
	assert_eq!(reg.get_dbref(keys::PLAYER_START).expect("dbref"), room);

	// Unconstrained references still reject garbage
	assert_eq!(
		reg.set_parameter(keys::LOST_AND_FOUND, &thing.to_string(), MucLevel::GOD),
		TuneSetResult::Success
	);
	assert_eq!(
		reg.set_parameter(keys::LOST_AND_FOUND, &gone.to_string(), MucLevel::GOD),
		TuneSetResult::BadValue
	);
}

#[test]
fn test_nullable_strings() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter("reserved_names", "", MucLevel::GOD), TuneSetResult::Success);
	assert_eq!(reg.get_parameter_string("reserved_names", MucLevel::GOD), "");
	assert!(!reg.lookup("reserved_names").expect("exists").is_default);

	assert_eq!(reg.set_parameter(keys::MUCKNAME, "", MucLevel::GOD), TuneSetResult::BadValue);
}

#[test]
fn test_typed_accessors() {
	let mut reg = standard();
	assert_eq!(reg.get_int(keys::MAX_OUTPUT).expect("int"), 1024);
	assert_eq!(reg.get_str(keys::MUCKNAME).expect("str"), "Fuzzball");
	assert!(reg.get_bool(keys::IDLEBOOT).expect("bool"));
	assert_eq!(reg.get_duration(keys::DUMP_INTERVAL).expect("duration"), Duration::from_secs(14_400));
	assert_eq!(reg.get_dbref(keys::TOAD_DEFAULT_RECIPIENT).expect("dbref"), DbRef(1));

	assert_eq!(reg.set_parameter(keys::MAXIDLE, "30m", MucLevel::GOD), TuneSetResult::Success);
	assert_eq!(reg.get_duration(keys::MAXIDLE).expect("duration"), Duration::from_secs(1800));

	assert!(matches!(reg.get_bool(keys::MAX_OUTPUT), Err(Error::TypeMismatch { .. })));
	assert!(matches!(reg.get_int("nope"), Err(Error::UnknownParameter(_))));
}

#[test]
fn test_handles_follow_updates() {
	let mut reg = standard();
	let handle = reg.handle(keys::MAX_OUTPUT).expect("handle");
	assert_eq!(reg.value(handle), Some(&TuneValue::Int(1024)));

	assert_eq!(reg.set_parameter(keys::MAX_OUTPUT, "2048", MucLevel::GOD), TuneSetResult::Success);
	assert_eq!(reg.value(handle), Some(&TuneValue::Int(2048)));
	assert_eq!(reg.handle("MAX_OUTPUT"), Some(handle));
}

#[test]
fn test_inactive_modules() {
	let mut reg = standard();
	assert!(reg.lookup("ssl_cert_file").expect("exists").active);

	reg.set_module_active("SSL", false);
	assert!(!reg.lookup("ssl_cert_file").expect("exists").active);
	assert!(reg.lookup(keys::MUCKNAME).expect("exists").active);

	reg.set_module_active("ssl", true);
	assert!(reg.lookup("ssl_cert_file").expect("exists").active);
}

#[test]
fn test_free_all_restores_defaults() {
	let mut reg = standard();
	assert_eq!(reg.set_parameter(keys::MUCKNAME, "Hollow Oak", MucLevel::GOD), TuneSetResult::Success);
	reg.free_all();

	let param = reg.lookup(keys::MUCKNAME).expect("exists");
	assert!(param.is_default);
	assert_eq!(param.formatted_value(), "Fuzzball");
}

#[test]
fn test_duplicate_registration_rejected() {
	let mut builder = TuneRegistry::builder();
	builder.register(TuneEntry::integer("Foo", 1).build().expect("valid")).expect("first");
	let err = builder.register(TuneEntry::integer("FOO", 2).build().expect("valid"));
	assert!(matches!(err, Err(Error::ConfigError(_))));
	assert_eq!(builder.len(), 1);
}

#[test]
fn test_comment_mark_name_rejected() {
	let err = TuneEntry::integer("#hash_param", 1).build();
	assert!(matches!(err, Err(Error::ConfigError(_))));
	// Every saved line of the standard table must read back as an assignment
	let reg = standard();
	assert!(reg.iter().all(|p| !p.name().starts_with('#')));
}

#[test]
fn test_standard_keys_resolve() {
	let reg = standard();
	for name in [
		keys::AGING_TIME,
		keys::ALLOW_LISTENERS,
		keys::CLEAN_INTERVAL,
		keys::DEFAULT_ROOM_PARENT,
		keys::DUMP_INTERVAL,
		keys::IDLEBOOT,
		keys::LOST_AND_FOUND,
		keys::MAX_OUTPUT,
		keys::MAX_PENNIES,
		keys::MAXIDLE,
		keys::MUCKNAME,
		keys::PENNY,
		keys::PLAYER_START,
		keys::PLAYERMAX_LIMIT,
		keys::SECURE_WHO,
		keys::SMTP_PASSWORD,
		keys::SSL_KEYFILE_PASSWD,
		keys::STRICT_GOD_PRIV,
		keys::TOAD_DEFAULT_RECIPIENT,
	] {
		assert!(reg.lookup(name).is_some(), "{} missing from standard table", name);
	}
}

#[test]
fn test_shared_registry_across_threads() {
	let shared = standard().into_shared();

	std::thread::scope(|s| {
		for _ in 0..4 {
			let shared = &shared;
			s.spawn(move || {
				for _ in 0..50 {
					let value = shared.read().get_parameter_string(keys::MAX_OUTPUT, MucLevel::NONE);
					assert!(value == "1024" || value == "2048");
				}
			});
		}
		s.spawn(|| {
			let result = shared.write().set_parameter(keys::MAX_OUTPUT, "2048", MucLevel::GOD);
			assert_eq!(result, TuneSetResult::Success);
		});
	});

	assert_eq!(shared.read().get_int(keys::MAX_OUTPUT).expect("int"), 2048);
}

// vim: ts=4
