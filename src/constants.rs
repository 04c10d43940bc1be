//! Constants used throughout the application.
//!
//! This module contains all constants used in the diary application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "diary";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A plain-text journal kept as one file per day";

// CLI Arguments & Defaults
/// Default command for the editor if not specified otherwise.
pub const DEFAULT_EDITOR_COMMAND: &str = "vim";
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level. Logs go to stderr and stay quiet unless asked for.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used with `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Location of the config file whose first line names the diary folder.
pub const DEFAULT_CONFIG_FILE: &str = "~/.diary";
/// Environment variable overriding the config file location.
pub const ENV_VAR_DIARY_CONFIG: &str = "DIARY_CONFIG";
/// Environment variable for specifying the preferred diary editor.
pub const ENV_VAR_DIARY_EDITOR: &str = "DIARY_EDITOR";
/// Standard environment variable for specifying the default editor.
pub const ENV_VAR_EDITOR: &str = "EDITOR";

// Validation
/// Characters forbidden in editor commands for security reasons.
pub const EDITOR_FORBIDDEN_CHARS: &[char] =
    &['|', '&', ';', '$', '(', ')', '`', '\\', '<', '>', '\'', '"'];
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// External Tools
/// Binary used to mount and dismount the encrypted diary volume.
pub const VOLUME_TOOL_BINARY: &str = "truecrypt";
/// Flag passed to the volume tool to dismount a volume.
pub const VOLUME_DISMOUNT_FLAG: &str = "-d";
/// Editor arguments that jump to the last line and start in insert mode.
pub const EDITOR_OPEN_AT_END_ARGS: &[&str] = &["+9999999", "-c", "startinsert"];

// File System Parameters
/// Prefix of every day file name.
pub const DAY_FILE_PREFIX: &str = "Journal ";
/// File extension for day files.
pub const DAY_FILE_EXTENSION: &str = ".txt";
/// Default POSIX permissions for newly created day files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Canonical date format (YYYY-MM-DD), also the on-disk date token.
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Time format of the line preceding each entry.
pub const ENTRY_TIMESTAMP_FORMAT: &str = "%H:%M:%S";
/// Additional full-date formats accepted by the date resolver, tried in order.
pub const DATE_FORMATS_EXTRA: &[&str] = &[
    "%m/%d/%y",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];
/// Date-time formats accepted by the date resolver; only the date part is kept.
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
/// Month-name formats without a year. The reference year is appended before parsing.
pub const DATE_FORMATS_WITHOUT_YEAR: &[&str] = &[
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%m/%d %Y",
];
/// Suffixes dropped after a day number, as in `5th`.
pub const ORDINAL_SUFFIXES: &[&str] = &["st", "nd", "rd", "th"];
/// Prefix selecting yesterday's date.
pub const YESTERDAY_PREFIX: &str = "yes";
/// Prefix selecting tomorrow's date.
pub const TOMORROW_PREFIX: &str = "tom";
/// Prefix selecting today's date.
pub const TODAY_PREFIX: &str = "tod";

// User-facing Messages
/// Printed after an entry has been appended.
pub const MSG_ENTRY_ADDED: &str = "Added diary entry";
/// Printed when the requested day (or the whole diary) has no entries.
pub const MSG_NO_ENTRY: &str = "No diary entry specified and no entries for today";
/// Guidance printed when the diary folder is missing.
pub const MSG_MISSING_DIARY_DIR: &str =
    "Please specify a valid diary folder, using a config file at ~/.diary";
/// Heading of the stats output.
pub const STATS_HEADING: &str = "Word Count By Month";
/// Separator between file name and line in search output.
pub const SEARCH_RESULT_SEPARATOR: &str = " -- ";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "diary";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
