//! Append a text entry to a day file.

use crate::errors::AppResult;
use crate::journal_core::DateSpecifier;
use crate::journal_io;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// Appends `text` as a new entry on the day selected by `date_spec`.
///
/// Dates are resolved against the date part of `now`; the entry timestamp is
/// the time part. Returns the day file written to.
///
/// # Errors
///
/// Returns `AppError::Io` if the day file cannot be written.
pub fn add_entry(
    diary_dir: &Path,
    date_spec: &DateSpecifier,
    text: Option<&str>,
    now: &DateTime<Local>,
) -> AppResult<PathBuf> {
    let date = date_spec.resolve(now.date_naive());
    let path = journal_io::append_entry(diary_dir, date, text, now)?;
    info!("Added entry for {}", date);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_add_entry_for_yesterday() {
        let temp_dir = tempdir().unwrap();
        let noon = NaiveDate::from_ymd_opt(2023, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let now = Local.from_local_datetime(&noon).earliest().unwrap();

        let path = add_entry(
            temp_dir.path(),
            &DateSpecifier::Yesterday,
            Some("went to the #party"),
            &now,
        )
        .unwrap();

        assert!(path.ends_with("Journal 2023-02-28.txt"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "12:00:00\nwent to the #party\n"
        );
    }
}
