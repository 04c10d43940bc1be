//! Configuration management for the diary application.
//!
//! Configuration is loaded once at startup and passed by reference to every
//! component. It comes from two places:
//!
//! - The config file (`~/.diary`, or the path in `DIARY_CONFIG`). Its first line
//!   is the diary folder, expanded for `~`. An optional second line names an
//!   encrypted volume that holds the diary folder.
//! - Environment variables: `DIARY_EDITOR`, falling back to `EDITOR`, falling
//!   back to `vim`.
//!
//! A missing config file is not an error. The diary folder is then empty and the
//! folder check in the dispatcher fails with guidance for the user.

use crate::constants;
use crate::editor::EditorCommand;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An encrypted volume that must be mounted before the diary folder appears.
#[derive(Clone, PartialEq)]
pub struct VolumeConfig {
    /// Absolute path of the volume tool, resolved once at startup.
    pub binary: PathBuf,
    /// The volume argument handed to the tool.
    pub volume: String,
}

impl fmt::Debug for VolumeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeConfig")
            .field("binary", &self.binary)
            .field("volume", &constants::REDACTED_PLACEHOLDER)
            .finish()
    }
}

/// Configuration for the diary application.
///
/// # Examples
///
/// ```
/// use diary::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     diary_dir: PathBuf::from("/path/to/diary"),
///     editor: "nano".to_string(),
///     volume: None,
/// };
/// assert!(!config.diary_dir_exists());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Folder holding every day file. Empty when no config file was found.
    pub diary_dir: PathBuf,

    /// Editor command used by `edit`. An empty string disables the editor.
    pub editor: String,

    /// Volume to mount before use, if one is configured and the tool is installed.
    pub volume: Option<VolumeConfig>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("diary_dir", &"[REDACTED_PATH]")
            .field("editor", &self.editor)
            .field("volume", &self.volume)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            diary_dir: PathBuf::new(),
            editor: constants::DEFAULT_EDITOR_COMMAND.to_string(),
            volume: None,
        }
    }
}

/// The contents of the config file, before any lookups are made.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// First line, trimmed and tilde-expanded.
    pub diary_dir: String,
    /// Second line, trimmed, if present and non-empty.
    pub volume: Option<String>,
}

impl ConfigFile {
    /// Parses config file text.
    ///
    /// ```
    /// use diary::config::ConfigFile;
    ///
    /// let file = ConfigFile::parse("  /srv/notes/  \n/dev/sdb1\n");
    /// assert_eq!(file.diary_dir, "/srv/notes/");
    /// assert_eq!(file.volume.as_deref(), Some("/dev/sdb1"));
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines().map(str::trim);
        let diary_dir = lines
            .next()
            .map(|line| shellexpand::tilde(line).into_owned())
            .unwrap_or_default();
        let volume = lines
            .next()
            .filter(|line| !line.is_empty())
            .map(str::to_string);

        ConfigFile { diary_dir, volume }
    }

    /// Reads and parses the config file, treating a missing file as empty.
    pub fn read(path: &Path) -> AppResult<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config file at {}", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(AppError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

impl Config {
    /// Location of the config file: `DIARY_CONFIG` or `~/.diary`.
    pub fn config_file_path() -> PathBuf {
        let raw = env::var(constants::ENV_VAR_DIARY_CONFIG)
            .unwrap_or_else(|_| constants::DEFAULT_CONFIG_FILE.to_string());
        PathBuf::from(shellexpand::tilde(&raw).into_owned())
    }

    /// Loads configuration from the environment and the config file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the config file exists but cannot be read.
    /// The editor setting is kept as given and only checked when `edit` runs.
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_file_path();
        let file = ConfigFile::read(&config_path)?;

        let editor_raw = env::var(constants::ENV_VAR_DIARY_EDITOR)
            .or_else(|_| env::var(constants::ENV_VAR_EDITOR))
            .unwrap_or_else(|_| constants::DEFAULT_EDITOR_COMMAND.to_string());

        let volume_binary = which::which(constants::VOLUME_TOOL_BINARY).ok();

        Ok(Self::from_parts(file, &editor_raw, volume_binary))
    }

    /// Builds a configuration from already gathered inputs.
    ///
    /// The volume is only enabled when both a volume and the tool are present.
    pub fn from_parts(file: ConfigFile, editor: &str, volume_binary: Option<PathBuf>) -> Self {

        let volume = match (file.volume, volume_binary) {
            (Some(volume), Some(binary)) => Some(VolumeConfig { binary, volume }),
            (Some(_), None) => {
                debug!(
                    "Volume configured but '{}' is not installed; mounting disabled",
                    constants::VOLUME_TOOL_BINARY
                );
                None
            }
            _ => None,
        };

        Config {
            diary_dir: PathBuf::from(file.diary_dir),
            editor: editor.to_string(),
            volume,
        }
    }

    /// Whether the diary folder is configured and exists as a directory.
    pub fn diary_dir_exists(&self) -> bool {
        !self.diary_dir.as_os_str().is_empty() && self.diary_dir.is_dir()
    }

    /// The editor setting split into program and arguments, for the `edit` command.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Editor` if the setting is blank or contains shell
    /// metacharacters.
    pub fn editor_command(&self) -> AppResult<EditorCommand> {
        EditorCommand::parse(&self.editor)
    }
}
