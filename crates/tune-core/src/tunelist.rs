//! Compiled-in parameter table of the server
//!
//! Parameters are registered group by group; definition order here is the order used
//! by saves and exports.

use std::sync::Arc;

use muck_tune_types::ObjectDb;

use crate::entry::TuneEntryBuilder;
use crate::prelude::*;

/// Names of standard parameters that server code reads directly
pub mod keys {
	pub const AGING_TIME: &str = "aging_time";
	pub const ALLOW_LISTENERS: &str = "allow_listeners";
	pub const CLEAN_INTERVAL: &str = "clean_interval";
	pub const DEFAULT_ROOM_PARENT: &str = "default_room_parent";
	pub const DUMP_INTERVAL: &str = "dump_interval";
	pub const IDLEBOOT: &str = "idleboot";
	pub const LOST_AND_FOUND: &str = "lost_and_found";
	pub const MAX_OUTPUT: &str = "max_output";
	pub const MAX_PENNIES: &str = "max_pennies";
	pub const MAXIDLE: &str = "maxidle";
	pub const MUCKNAME: &str = "muckname";
	pub const PENNY: &str = "penny";
	pub const PLAYER_START: &str = "player_start";
	pub const PLAYERMAX_LIMIT: &str = "playermax_limit";
	pub const SECURE_WHO: &str = "secure_who";
	pub const SMTP_PASSWORD: &str = "smtp_password";
	pub const SSL_KEYFILE_PASSWD: &str = "ssl_keyfile_passwd";
	pub const STRICT_GOD_PRIV: &str = "strict_god_priv";
	pub const TOAD_DEFAULT_RECIPIENT: &str = "toad_default_recipient";
}

/// Module name of parameters that only apply with TLS support
pub const MODULE_SSL: &str = "ssl";
/// Module name of parameters that only apply with outgoing mail support
pub const MODULE_SMTP: &str = "smtp";

impl TuneRegistry {
	/// Registry holding the standard parameter table, all at their defaults
	pub fn standard(db: Arc<dyn ObjectDb>) -> TuneResult<TuneRegistry> {
		let mut builder = TuneRegistryBuilder::new();
		register_standard(&mut builder)?;
		Ok(builder.build(db))
	}
}

/// Register the standard parameter table
pub fn register_standard(registry: &mut TuneRegistryBuilder) -> TuneResult<()> {
	let groups = [
		("Charset", charset()),
		("Commands", commands()),
		("Connecting", connecting()),
		("Costs", costs()),
		("Currency", currency()),
		("Database", database()),
		("Dump", dump()),
		("Files", files()),
		("Idle Boot", idle_boot()),
		("Listeners", listeners()),
		("Logging", logging()),
		("Misc", misc()),
		("Movement", movement()),
		("MPI", mpi()),
		("MUF", muf()),
		("Permissions", permissions()),
		("Player Max", player_max()),
		("Properties", properties()),
		("Registration", registration()),
		("Spam Limits", spam_limits()),
		("SSL", ssl()),
		("Email", smtp()),
		("Tuning", tuning()),
	];

	for (group, entries) in groups {
		for entry in entries {
			registry.register(entry.group(group).build()?)?;
		}
	}
	Ok(())
}

fn charset() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("7bit_thing_names", true)
			.label("Limit thing names to 7-bit characters"),
		TuneEntry::boolean("7bit_other_names", true)
			.label("Limit exit, room and program names to 7-bit characters"),
	]
}

fn commands() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("enable_home", true).label("Enable 'home' command"),
		TuneEntry::boolean("enable_prefix", false).label("Enable prefix actions"),
		TuneEntry::boolean("recognize_null_command", false)
			.label("Recognize null command"),
		TuneEntry::boolean("m3_huh", false)
			.label("Enable huh? to call an exit named \"huh?\" and set M3, with full command string"),
		TuneEntry::string("huh_mesg", "Huh?  (Type \"help\" for help.)")
			.label("Unrecognized command warning"),
		TuneEntry::string("autolook_cmd", "look").label("Room entry look command"),
		TuneEntry::boolean("cmd_only_overrides", false)
			.label("Command-only exits override built-in commands"),
	]
}

fn connecting() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::string(
			"connect_fail_mesg",
			"Either that player does not exist, or has a different password.",
		)
		.label("Failed player connect message"),
		TuneEntry::string(
			"create_fail_mesg",
			"Either there is already a player with that name, or that name is illegal.",
		)
		.label("Failed player create message"),
		TuneEntry::string("leave_mesg", "Come back later!").label("Logoff message"),
		TuneEntry::boolean("use_hostnames", true)
			.label("Resolve IP addresses into hostnames"),
	]
}

fn costs() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::integer("exit_cost", 1).min(0).label("Cost to create an exit"),
		TuneEntry::integer("link_cost", 1).min(0).label("Cost to link an exit"),
		TuneEntry::integer("lookup_cost", 0).min(0).label("Cost to lookup a player name"),
		TuneEntry::integer("object_cost", 10).min(0).label("Cost to create an object"),
		TuneEntry::integer("room_cost", 10).min(0).label("Cost to create a room"),
		TuneEntry::integer("max_object_endowment", 100)
			.min(0)
			.label("Max value of an object"),
	]
}

fn currency() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::string("penny", "penny").label("Currency name"),
		TuneEntry::string("pennies", "pennies").label("Currency name, plural"),
		TuneEntry::string("cpenny", "Penny").label("Currency name, capitalized"),
		TuneEntry::string("cpennies", "Pennies")
			.label("Currency name, capitalized, plural"),
		TuneEntry::integer("start_pennies", 1).min(0).label("Player starting wealth"),
		TuneEntry::integer("max_pennies", 10_000).min(0).label("Player maximum wealth"),
		TuneEntry::integer("penny_rate", 8)
			.min(0)
			.label("Moves between finding currency, avg"),
	]
}

fn database() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::dbref("player_start", DbRef(0))
			.object_type(ObjectType::Room)
			.label("Place where new players start"),
		TuneEntry::dbref("default_room_parent", DbRef(0))
			.object_type(ObjectType::Room)
			.label("Place to parent new rooms to"),
		TuneEntry::dbref("lost_and_found", DbRef(1))
			.label("Place for things without a home"),
		TuneEntry::dbref("toad_default_recipient", DbRef(1))
			.object_type(ObjectType::Player)
			.label("Default owner for @toaded player's things"),
		TuneEntry::dbref("welcome_mpi_what", DbRef(0))
			.label("Default 'what' object for welcome screen MPI"),
		TuneEntry::dbref("welcome_mpi_who", DbRef(1))
			.object_type(ObjectType::Player)
			.label("Default 'who' player for welcome screen MPI"),
		TuneEntry::boolean("toad_recycle", false)
			.label("Recycle @toaded player's things"),
		TuneEntry::boolean("diskbase_propvals", true)
			.label("Enable property value diskbasing (requires restart)"),
	]
}

fn dump() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::duration("dump_interval", 4 * 3600).label("Interval between dumps"),
		TuneEntry::duration("dump_warntime", 2 * 60)
			.label("Interval between warning and dump"),
		TuneEntry::boolean("dbdump_warning", true).label("Enable warning messages for dumps"),
		TuneEntry::boolean("dumpdone_warning", true)
			.label("Notify when dump is complete"),
		TuneEntry::string(
			"dumpwarn_mesg",
			"## Game will pause to save the database in a few minutes. ##",
		)
		.label("Dump warning message"),
		TuneEntry::string("dumping_mesg", "## Pausing to save database. This may take a while. ##")
			.label("Dump start message"),
		TuneEntry::string("dumpdone_mesg", "## Save complete. ##")
			.label("Dump completion message"),
		TuneEntry::duration("clean_interval", 15 * 60)
			.label("Interval between unused object purges"),
		TuneEntry::duration("aging_time", 90 * 86_400)
			.label("When to considered an object old and unused"),
		TuneEntry::boolean("periodic_program_purge", true)
			.label("Periodically free unused MUF programs"),
	]
}

fn files() -> Vec<TuneEntryBuilder> {
	let file = |name: &str, default: &str, label: &str| {
		TuneEntry::string(name, default)
			.label(label)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
	};
	vec![
		file("file_welcome_screen", "data/welcome.txt", "Welcome screen"),
		file("file_motd", "data/motd.txt", "Message of the day"),
		file("file_help", "data/help.txt", "Main help file"),
		file("file_help_dir", "data/help", "Main help directory"),
		file("file_news", "data/news.txt", "News file"),
		file("file_news_dir", "data/news", "News directory"),
		file("file_man", "data/man.txt", "Manual file"),
		file("file_credits", "data/credits.txt", "Acknowledgements"),
		file("file_log_commands", "logs/commands", "Log of player commands"),
		file("file_log_gripes", "logs/gripes", "Log of player gripes"),
		file("file_log_programs", "logs/programs", "Log of program text"),
		file("file_log_status", "logs/status", "Log of system status"),
	]
}

fn idle_boot() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("idleboot", true).label("Enable booting of idle players"),
		TuneEntry::duration("maxidle", 2 * 3600).label("Maximum idle time before booting"),
		TuneEntry::string("idle_boot_mesg", "Autodisconnecting for inactivity.")
			.label("Boot message for idling out"),
		TuneEntry::boolean("idle_ping_enable", true)
			.label("Enable keepalive pings to the client"),
		TuneEntry::duration("idle_ping_time", 55).label("Interval between keepalive pings"),
	]
}

fn listeners() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("allow_listeners", true).label("Enable programs to listen to player output"),
		TuneEntry::boolean("allow_listeners_obj", true)
			.label("Allow listeners on objects"),
		TuneEntry::boolean("allow_listeners_env", true)
			.label("Allow listeners down environment"),
		TuneEntry::integer("listen_mlev", 0)
			.range(0, 4)
			.label("Mucker level required for listener programs"),
	]
}

fn logging() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("log_commands", true).label("Log player commands"),
		TuneEntry::boolean("log_failed_commands", false)
			.label("Log unrecognized commands"),
		TuneEntry::boolean("log_interactive", true)
			.label("Log text sent to MUF programs"),
		TuneEntry::boolean("log_programs", true).label("Log programs every time they are saved"),
		TuneEntry::integer("cmd_log_threshold_msec", 1000)
			.min(0)
			.label("Log commands that take longer than X millisecs"),
	]
}

fn misc() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("allow_zombies", true)
			.label("Enable Zombie things to relay what they hear"),
		TuneEntry::boolean("zombie_messages", true)
			.label("Prefix relayed output with the zombie's name"),
		TuneEntry::boolean("verbose_clone", false)
			.label("Report the new object number when cloning"),
		TuneEntry::boolean("quiet_moves", false)
			.label("Suppress basic arrive and depart notifications"),
	]
}

fn movement() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("teleport_to_player", true)
			.label("Allow teleporting to a player"),
		TuneEntry::boolean("secure_teleport", false)
			.label("Restrict actions to Jump_OK or controlled rooms"),
		TuneEntry::boolean("secure_thing_movement", false)
			.label("Moving things act like player"),
		TuneEntry::boolean("wiz_vehicles", false)
			.label("Only let wizards set vehicle bits"),
	]
}

fn mpi() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("do_mpi_parsing", true).label("Parse MPI strings in messages"),
		TuneEntry::boolean("do_welcome_parsing", false)
			.label("Parse MPI on the welcome screen"),
		TuneEntry::integer("mpi_max_commands", 2048)
			.min(0)
			.label("Max MPI instruction run length"),
		TuneEntry::boolean("mpi_continue_after_logout", false)
			.label("Continue running MPI after its triggering player logs out"),
	]
}

fn muf() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::integer("max_instr_count", 20_000)
			.min(0)
			.label("Max MUF instruction run length for ML1"),
		TuneEntry::integer("instr_slice", 2000)
			.min(1)
			.label("Instructions run per timeslice"),
		TuneEntry::integer("max_process_limit", 400)
			.min(0)
			.label("Max concurrent processes on system"),
		TuneEntry::integer("max_plyr_processes", 32)
			.min(0)
			.label("Max concurrent processes per player"),
		TuneEntry::integer("max_interp_recursion", 128)
			.min(1)
			.label("Max nested interpreter calls"),
		TuneEntry::integer("process_timer_limit", 4)
			.min(0)
			.label("Max timers per process"),
		TuneEntry::integer("max_force_level", 1)
			.range(0, 100)
			.label("Maximum number of forces processed within a command"),
		TuneEntry::boolean("optimize_muf", true).label("Enable MUF bytecode optimizer"),
		TuneEntry::boolean("expanded_debug_trace", false)
			.label("MUF debug trace shows array contents"),
		TuneEntry::boolean("muf_comments_strict", true)
			.label("MUF comments are strict and not recursive"),
		TuneEntry::integer("mcp_muf_mlev", 3)
			.range(0, 4)
			.label("Mucker level required to use MCP"),
		TuneEntry::integer("userlog_mlev", 3)
			.range(0, 4)
			.label("Mucker level required to write to userlog"),
		TuneEntry::string("new_program_flags", "").nullable(true)
			.label("Initial flags for newly created programs"),
	]
}

fn permissions() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("secure_who", false)
			.label("Disallow WHO command from login screen and programs"),
		TuneEntry::boolean("who_hides_dark", true).label("Hide dark players from WHO list"),
		TuneEntry::boolean("dark_sleepers", false).label("Make sleeping players dark"),
		TuneEntry::boolean("exit_darking", true).label("Allow players to set exits dark"),
		TuneEntry::boolean("thing_darking", true).label("Allow players to set things dark"),
		TuneEntry::boolean("realms_control", false).label("Enable realms control"),
		TuneEntry::boolean("strict_god_priv", true)
			.label("Only God can touch God's objects")
			.levels(MucLevel::NONE, MucLevel::GOD),
	]
}

fn player_max() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("playermax", false).label("Limit number of concurrent players allowed"),
		TuneEntry::integer("playermax_limit", 56).min(0).label("Max player connections allowed"),
		TuneEntry::string(
			"playermax_warnmesg",
			"You likely won't be able to connect right now, since too many players are online.",
		)
		.label("Max player connection login warning"),
		TuneEntry::string(
			"playermax_bootmesg",
			"Sorry, but there are too many players online.  Please try reconnecting in a few minutes.",
		)
		.label("Max player connection error message"),
	]
}

fn properties() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::string("gender_prop", "sex").label("Property name used for pronouns"),
		TuneEntry::string("description_default", "You see nothing special.")
			.label("Default description for new objects"),
		TuneEntry::integer("max_propfetch", 50)
			.min(0)
			.label("Max properties fetched per MUF call"),
		TuneEntry::boolean("lock_envcheck", false)
			.label("Locks check environment for properties"),
	]
}

fn registration() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::boolean("registration", true).label("Require new players to register manually"),
		TuneEntry::string(
			"register_mesg",
			"Sorry, you can get a character by e-mailing XXXX@machine.net with a charname and password.",
		)
		.label("Login registration denial message"),
		TuneEntry::string("pcreate_flags", "B").nullable(true)
			.label("Initial flags for newly created players"),
		TuneEntry::string("reserved_names", "").nullable(true)
			.label("String-match for reserved object names"),
		TuneEntry::string("reserved_player_names", "").nullable(true)
			.label("String-match for reserved player names"),
	]
}

fn spam_limits() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::integer("command_burst_size", 500)
			.min(0)
			.label("Commands before limiter engages"),
		TuneEntry::integer("commands_per_time", 2)
			.min(1)
			.label("Commands allowed per time period during limit"),
		TuneEntry::integer("command_time_msec", 1000)
			.min(1)
			.label("Millisecs per spam limiter time period"),
	]
}

fn ssl() -> Vec<TuneEntryBuilder> {
	let secret = |name: &str, label: &str| {
		TuneEntry::string(name, "")
			.nullable(true)
			.label(label)
			.module(MODULE_SSL)
			.levels(MucLevel::GOD, MucLevel::GOD)
	};
	vec![
		TuneEntry::string("ssl_cert_file", "data/server.pem")
			.module(MODULE_SSL)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
			.label("Path to SSL certificate .pem"),
		TuneEntry::string("ssl_key_file", "data/server.pem")
			.module(MODULE_SSL)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
			.label("Path to SSL private key .pem"),
		secret("ssl_keyfile_passwd", "Password for SSL private key file"),
		TuneEntry::string("ssl_min_protocol_version", "None")
			.module(MODULE_SSL)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
			.label("Minimum allowed SSL protocol version for clients"),
		TuneEntry::string("ssl_cipher_preference_list", "HIGH:!aNULL:!kRSA:!PSK:!SRP:!MD5:!RC4")
			.module(MODULE_SSL)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
			.label("Allowed OpenSSL cipher list"),
		TuneEntry::boolean("server_cipher_preference", true)
			.module(MODULE_SSL)
			.label("Honor server cipher preference order over client's"),
		TuneEntry::boolean("ssl_auto_reload_certs", true)
			.module(MODULE_SSL)
			.label("Automatically reload certs when they change"),
		TuneEntry::boolean("starttls_allow", false)
			.module(MODULE_SSL)
			.label("Enable support for STARTTLS on the plaintext port"),
	]
}

fn smtp() -> Vec<TuneEntryBuilder> {
	let setting = |name: &str, label: &str| {
		TuneEntry::string(name, "")
			.nullable(true)
			.label(label)
			.module(MODULE_SMTP)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
	};
	vec![
		setting("smtp_server", "SMTP server hostname"),
		TuneEntry::string("smtp_port", "587")
			.module(MODULE_SMTP)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
			.label("SMTP server port"),
		TuneEntry::integer("smtp_ssl_type", 1)
			.range(0, 2)
			.module(MODULE_SMTP)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
			.label("SMTP encryption: 0 none, 1 STARTTLS, 2 implicit TLS"),
		TuneEntry::boolean("smtp_no_verify_cert", false)
			.module(MODULE_SMTP)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
			.label("Skip SMTP server certificate verification"),
		TuneEntry::integer("smtp_auth_type", 1)
			.range(0, 2)
			.module(MODULE_SMTP)
			.levels(MucLevel::WIZARD, MucLevel::GOD)
			.label("SMTP authentication: 0 none, 1 plain, 2 login"),
		setting("smtp_user", "SMTP username"),
		setting("smtp_password", "SMTP password").levels(MucLevel::GOD, MucLevel::GOD),
		setting("smtp_from_name", "Sender name for outgoing mail"),
		setting("smtp_from_email", "Sender address for outgoing mail"),
	]
}

fn tuning() -> Vec<TuneEntryBuilder> {
	vec![
		TuneEntry::string("muckname", "Fuzzball").label("Name of the MUCK"),
		TuneEntry::integer("max_output", 1024)
			.min(0)
			.label("Max output buffer size per connection"),
		TuneEntry::integer("player_name_limit", 16)
			.min(1)
			.label("Limit on player name length"),
		TuneEntry::integer("free_frames_pool", 8)
			.min(0)
			.label("Size of allocated MUF process frame pool"),
		TuneEntry::integer("max_loaded_objs", 0)
			.range(0, 100)
			.label("Max percent of proploaded database objects"),
		TuneEntry::duration("pname_history_threshold", 30 * 86_400)
			.label("Length of player name change history"),
		TuneEntry::boolean("pname_history_reporting", true)
			.label("Report player name change history"),
		TuneEntry::boolean("ieee_bounds_handling", true)
			.label("Floating point errors return IEEE values"),
		TuneEntry::boolean("consistent_lock_source", true)
			.label("Maintain trigger as lock source in TRIGGER()"),
		TuneEntry::boolean("tab_input_replaced_with_space", true)
			.label("Replace tab input with a space"),
	]
}


// vim: ts=4
