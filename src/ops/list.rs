//! Show the entries of one day.

use crate::errors::AppResult;
use crate::journal_core::DateSpecifier;
use crate::journal_io;
use chrono::NaiveDate;
use std::path::Path;

/// Reads the day file selected by `date_spec`, or `None` if that day has no entries.
pub fn list_entry(
    diary_dir: &Path,
    date_spec: &DateSpecifier,
    today: NaiveDate,
) -> AppResult<Option<String>> {
    journal_io::read_entry(diary_dir, date_spec.resolve(today))
}
