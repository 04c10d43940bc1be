//! Pick a random day from the diary.

use crate::errors::AppResult;
use crate::journal_io;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Picks one day file uniformly at random and reads it.
///
/// Returns `None` when the diary has no day files.
pub fn pick_random_entry<R: Rng + ?Sized>(
    diary_dir: &Path,
    rng: &mut R,
) -> AppResult<Option<(PathBuf, String)>> {
    let files = journal_io::list_day_files(diary_dir)?;
    debug!("Choosing among {} day files", files.len());

    let chosen = match files.choose(rng) {
        Some(path) => path,
        None => return Ok(None),
    };

    Ok(journal_io::read_day_file(chosen)?.map(|content| (chosen.clone(), content)))
}
