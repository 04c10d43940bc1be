//! Command-line parsing and command dispatch.
//!
//! The command line is `diary [OPTIONS] <command> [argument...]`. Options are
//! only recognized before the command word. Everything after it, including
//! words that look like options, is joined with single spaces into one
//! argument string. An unknown or missing command prints the usage summary.

use crate::config::Config;
use crate::constants;
use crate::editor::Editor;
use crate::errors::{AppError, AppResult};
use crate::journal_core::DateSpecifier;
use crate::ops::{self, SearchOptions};
use crate::volume;
use chrono::{DateTime, Local};
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, warn};

/// A plain-text journal kept as one file per day
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Day for `add` (and for `ls`/`edit` when no argument is given): today, yesterday, tomorrow, or a date
    #[arg(short = 'd', long)]
    pub date: Option<String>,

    /// Let `find` also report matches at the very start of a file or line
    #[arg(long)]
    pub match_anywhere: bool,

    /// Keep `find` from reporting timestamp lines
    #[arg(long)]
    pub entries_only: bool,

    /// Print verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Log output format
    #[arg(
        long,
        default_value = constants::LOG_FORMAT_TEXT,
        value_parser = [constants::LOG_FORMAT_TEXT, constants::LOG_FORMAT_JSON]
    )]
    pub log_format: String,

    /// The command (add, ls, find, edit, rand, stats, hide, help) followed by
    /// entry text, a date, or a search term
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}

impl CliArgs {
    /// The first word after the options, if any.
    pub fn command_token(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// The words after the command joined by single spaces, or `None` if there were none.
    pub fn argument(&self) -> Option<String> {
        match self.words.get(1..) {
            Some(rest) if !rest.is_empty() => Some(rest.join(" ")),
            _ => None,
        }
    }

    /// Search options selected by flags.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            match_anywhere: self.match_anywhere,
            entries_only: self.entries_only,
        }
    }
}

/// The commands the diary understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    List,
    Find,
    Help,
    Hide,
    Edit,
    Random,
    Stats,
}

impl Command {
    /// Maps a command token to a command. Anything unrecognized is `Help`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("add") => Command::Add,
            Some("ls") => Command::List,
            Some("find") => Command::Find,
            Some("hide") => Command::Hide,
            Some("edit") => Command::Edit,
            Some("rand") => Command::Random,
            Some("stats") => Command::Stats,
            _ => Command::Help,
        }
    }
}

/// The fixed usage summary.
pub fn help_text() -> String {
    let name = constants::APP_NAME;
    format!(
        "Usage:\n\
         \t{name} add 'Today I went to the @shops and bought some cake for the #party'\n\
         \t{name} find 'search term'\n\
         \t{name} ls - Lists current day or date format specified\n\
         \t{name} help - Displays this text\n\
         \t{name} hide - Will unmount the truecrypt volume\n\
         \t{name} edit - Edits current day or date specified in format\n\
         \t{name} rand - Returns random element\n\
         \t{name} stats - Prints monthly word-count of stats\n"
    )
}

/// Writes the usage summary to `out`.
pub fn print_help(out: &mut dyn Write) -> io::Result<()> {
    out.write_all(help_text().as_bytes())
}

/// Runs one invocation: volume mount, diary folder check, then the command.
///
/// `now` is captured once by the caller and used both for date resolution and
/// for entry timestamps. All user-facing output goes to `out`.
///
/// # Errors
///
/// - `AppError::Config` if the diary folder does not exist; no command runs.
/// - `AppError::InvalidDate` / `AppError::MissingArgument`, after usage help
///   has been written to `out`.
/// - Any error from the command itself.
pub fn run(
    args: &CliArgs,
    config: &Config,
    editor: &dyn Editor,
    now: &DateTime<Local>,
    out: &mut dyn Write,
) -> AppResult<()> {
    if let Some(volume) = &config.volume {
        if !config.diary_dir_exists() {
            if let Err(e) = volume::mount(volume) {
                warn!("Mounting the diary volume failed: {}", e);
            }
        }
    }

    if !config.diary_dir_exists() {
        return Err(AppError::Config(constants::MSG_MISSING_DIARY_DIR.to_string()));
    }

    let command = Command::from_token(args.command_token());
    debug!("Dispatching {:?}", command);

    let result = dispatch(command, args, config, editor, now, out);
    if let Err(e) = &result {
        if e.wants_usage() {
            print_help(out)?;
        }
    }
    result
}

fn dispatch(
    command: Command,
    args: &CliArgs,
    config: &Config,
    editor: &dyn Editor,
    now: &DateTime<Local>,
    out: &mut dyn Write,
) -> AppResult<()> {
    let diary_dir = config.diary_dir.as_path();
    let today = now.date_naive();
    let argument = args.argument();
    let day_token = argument.as_deref().or(args.date.as_deref());

    match command {
        Command::Add => {
            let date_spec = DateSpecifier::parse(args.date.as_deref(), today)?;
            ops::add_entry(diary_dir, &date_spec, argument.as_deref(), now)?;
            writeln!(out, "{}", constants::MSG_ENTRY_ADDED)?;
        }
        Command::List => {
            let date_spec = DateSpecifier::parse(day_token, today)?;
            match ops::list_entry(diary_dir, &date_spec, today)? {
                Some(content) => writeln!(out, "{}", content)?,
                None => writeln!(out, "{}", constants::MSG_NO_ENTRY)?,
            }
        }
        Command::Find => {
            let pattern = argument.as_deref().ok_or_else(|| {
                AppError::MissingArgument("find needs a search term".to_string())
            })?;
            for found in ops::search_entries(diary_dir, pattern, args.search_options())? {
                writeln!(out, "{}", found)?;
            }
        }
        Command::Random => match ops::pick_random_entry(diary_dir, &mut rand::thread_rng())? {
            Some((path, content)) => {
                writeln!(out, "{}", path.display())?;
                writeln!(out, "{}", content)?;
            }
            None => writeln!(out, "{}", constants::MSG_NO_ENTRY)?,
        },
        Command::Stats => {
            write!(out, "{}", ops::collect_word_counts(diary_dir)?)?;
        }
        Command::Edit => {
            config.editor_command()?;
            let date_spec = DateSpecifier::parse(day_token, today)?;
            let path = ops::prepare_entry(diary_dir, &date_spec, now)?;
            writeln!(out, "{}", constants::MSG_ENTRY_ADDED)?;
            out.flush()?;
            editor.open_at_end(&path)?;
        }
        Command::Hide => {
            ops::hide_diary(config)?;
        }
        Command::Help => print_help(out)?,
    }

    Ok(())
}
