//! Plain-text search over day files.
//!
//! By default a match at byte index 0 does not count, neither for the file as
//! a whole nor for an individual line. A pattern that only occurs at the very
//! start of a file is therefore never reported, and lines that begin with the
//! pattern are skipped. `SearchOptions::match_anywhere` lifts this.
//!
//! Timestamp lines are searched like any other line unless
//! `SearchOptions::entries_only` is set.

use crate::constants;
use crate::errors::{AppError, AppResult};
use crate::journal_io;
use chrono::NaiveTime;
use std::path::Path;
use tracing::{debug, info};

/// How a search pattern is matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Count matches at index 0 too.
    pub match_anywhere: bool,
    /// Never report bare `HH:MM:SS` timestamp lines.
    pub entries_only: bool,
}

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// File name of the day file, without its folder.
    pub file_name: String,
    /// The full matching line.
    pub line: String,
}

impl std::fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.file_name,
            constants::SEARCH_RESULT_SEPARATOR,
            self.line
        )
    }
}

/// Searches every day file, in chronological order, for `pattern`.
///
/// # Errors
///
/// Returns `AppError::MissingArgument` for an empty pattern, and
/// `AppError::Io` if the diary folder or a day file cannot be read.
pub fn search_entries(
    diary_dir: &Path,
    pattern: &str,
    options: SearchOptions,
) -> AppResult<Vec<SearchMatch>> {
    if pattern.is_empty() {
        return Err(AppError::MissingArgument(
            "find needs a search term".to_string(),
        ));
    }

    info!("Searching day files");
    let mut matches = Vec::new();

    for path in journal_io::list_day_files(diary_dir)? {
        let text = match journal_io::read_day_file(&path)? {
            Some(text) => text,
            None => continue,
        };

        if !pattern_matches(&text, pattern, options.match_anywhere) {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        for line in text.split('\n') {
            if options.entries_only && is_timestamp_line(line) {
                continue;
            }
            if pattern_matches(line, pattern, options.match_anywhere) {
                matches.push(SearchMatch {
                    file_name: file_name.clone(),
                    line: line.to_string(),
                });
            }
        }
    }

    debug!("Search produced {} matches", matches.len());
    Ok(matches)
}

fn pattern_matches(haystack: &str, pattern: &str, match_anywhere: bool) -> bool {
    match haystack.find(pattern) {
        Some(0) => match_anywhere,
        Some(_) => true,
        None => false,
    }
}

fn is_timestamp_line(line: &str) -> bool {
    line.len() == 8 && NaiveTime::parse_from_str(line, constants::ENTRY_TIMESTAMP_FORMAT).is_ok()
}
