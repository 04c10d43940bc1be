//! Prepare a day file for interactive editing.

use crate::errors::AppResult;
use crate::journal_core::DateSpecifier;
use crate::journal_io;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Appends an empty timestamped entry and a trailing blank line to the day
/// selected by `date_spec`, creating the day file if needed.
///
/// The caller then opens the returned path in the editor. Writing the
/// timestamp up front means the editor lands on a fresh line below it.
pub fn prepare_entry(
    diary_dir: &Path,
    date_spec: &DateSpecifier,
    now: &DateTime<Local>,
) -> AppResult<PathBuf> {
    let date = date_spec.resolve(now.date_naive());
    let path = journal_io::append_entry(diary_dir, date, None, now)?;
    journal_io::append_blank_line(&path)?;
    debug!("Prepared {} for editing", path.display());
    Ok(path)
}
