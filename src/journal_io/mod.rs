//! Day file storage.
//!
//! Every calendar date owns at most one plain-text file, `Journal YYYY-MM-DD.txt`,
//! stored flat in the diary folder. Files are only ever appended to. Each entry
//! is a bare `HH:MM:SS` line followed by the entry text; entries after the first
//! are separated from the previous one by a blank line.
//!
//! There is no locking. Two processes appending to the same day file at the same
//! moment may interleave their writes.

use crate::constants;
use crate::errors::{AppError, AppResult};
use crate::journal_core::canonical_date;
use chrono::{DateTime, Local, NaiveDate};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Generates the file path for the day file of a specific date.
///
/// # Examples
///
/// ```
/// use diary::journal_io::entry_path_for_date;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
/// let path = entry_path_for_date(Path::new("/srv/diary/"), date);
/// assert_eq!(path, Path::new("/srv/diary/Journal 2023-01-05.txt"));
/// ```
pub fn entry_path_for_date(diary_dir: &Path, date: NaiveDate) -> PathBuf {
    diary_dir.join(day_file_name(date))
}

/// The file name of the day file for `date`.
pub fn day_file_name(date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        constants::DAY_FILE_PREFIX,
        canonical_date(date),
        constants::DAY_FILE_EXTENSION
    )
}

/// Parses the date out of a day file name, or `None` if the path is not a day file.
///
/// ```
/// use diary::journal_io::date_from_file_name;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let date = date_from_file_name(Path::new("/x/Journal 2022-12-31.txt"));
/// assert_eq!(date, NaiveDate::from_ymd_opt(2022, 12, 31));
/// assert_eq!(date_from_file_name(Path::new("/x/notes.txt")), None);
/// ```
pub fn date_from_file_name(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    let token = name
        .strip_prefix(constants::DAY_FILE_PREFIX)?
        .strip_suffix(constants::DAY_FILE_EXTENSION)?;
    let date = NaiveDate::parse_from_str(token, constants::DATE_FORMAT_ISO).ok()?;

    // Reject tokens chrono accepts but we would never write, like "2023-1-5".
    (canonical_date(date) == token).then_some(date)
}

/// Appends a timestamped entry to the day file for `date`.
///
/// The block written is `HH:MM:SS\n` followed by `text\n`; the text line is
/// left out when `text` is absent or empty. If the day file already exists the
/// block is preceded by a blank line. The file is created if needed.
///
/// # Returns
///
/// The path of the day file written to.
///
/// # Errors
///
/// Returns `AppError::Io` if the file cannot be created or written.
pub fn append_entry(
    diary_dir: &Path,
    date: NaiveDate,
    text: Option<&str>,
    now: &DateTime<Local>,
) -> AppResult<PathBuf> {
    let path = entry_path_for_date(diary_dir, date);
    let existed = path.is_file();

    let block = format_entry_block(text, now, existed);

    let mut file = create_or_open_entry_file(&path)?;
    append_to_file(&mut file, &block)?;

    debug!(
        "Appended {} bytes to {} (new file: {})",
        block.len(),
        path.display(),
        !existed
    );
    Ok(path)
}

/// Builds the text appended for one entry.
fn format_entry_block(text: Option<&str>, now: &DateTime<Local>, follows_entry: bool) -> String {
    let mut block = String::new();
    if follows_entry {
        block.push('\n');
    }
    block.push_str(&now.format(constants::ENTRY_TIMESTAMP_FORMAT).to_string());
    block.push('\n');
    if let Some(text) = text.filter(|text| !text.is_empty()) {
        block.push_str(text);
        block.push('\n');
    }
    block
}

/// Appends a single blank line to an existing day file.
pub fn append_blank_line(path: &Path) -> AppResult<()> {
    let mut file = create_or_open_entry_file(path)?;
    append_to_file(&mut file, "\n")
}

/// Reads the full day file for `date`, or `None` if it does not exist.
pub fn read_entry(diary_dir: &Path, date: NaiveDate) -> AppResult<Option<String>> {
    let path = entry_path_for_date(diary_dir, date);
    read_day_file(&path)
}

/// Reads a day file by path, or `None` if it does not exist.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so one damaged
/// file cannot stop a scan of the whole diary.
pub fn read_day_file(path: &Path) -> AppResult<Option<String>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(AppError::Io(e)),
    };

    match String::from_utf8(bytes) {
        Ok(content) => Ok(Some(content)),
        Err(e) => {
            warn!("{} is not valid UTF-8; reading it lossily", path.display());
            Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
        }
    }
}

/// Lists every day file directly inside the diary folder.
///
/// Files are sorted by name. The date token is fixed-width, so this is also
/// chronological order. Other files in the folder are ignored.
///
/// # Errors
///
/// Returns `AppError::Io` if the folder cannot be read.
pub fn list_day_files(diary_dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(diary_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let message = e.to_string();
            AppError::Io(
                e.into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message)),
            )
        })?;

        if entry.file_type().is_file() && date_from_file_name(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} day files", files.len());
    Ok(files)
}

/// Creates a new file or opens an existing file for appending.
///
/// Newly created files get owner-only permissions on Unix.
fn create_or_open_entry_file(path: &Path) -> AppResult<File> {
    let existed = path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    #[cfg(unix)]
    {
        if !existed {
            let permissions = fs::Permissions::from_mode(constants::DEFAULT_FILE_PERMISSIONS);
            file.set_permissions(permissions).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on day file: {}", e),
                ))
            })?;
        }
    }
    #[cfg(not(unix))]
    let _ = existed;

    Ok(file)
}

fn append_to_file(file: &mut File, content: &str) -> AppResult<()> {
    file.write_all(content.as_bytes())?;
    Ok(())
}
