//! Monthly word counts across the whole diary.

use crate::constants;
use crate::errors::AppResult;
use crate::journal_io;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Whitespace-delimited word counts keyed by year, then month.
///
/// Both levels are ordered, so iteration is chronological.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCountStats {
    by_year: BTreeMap<i32, BTreeMap<u32, usize>>,
}

impl WordCountStats {
    /// Adds `words` to the bucket of `date`'s month.
    pub fn record(&mut self, date: NaiveDate, words: usize) {
        *self
            .by_year
            .entry(date.year())
            .or_default()
            .entry(date.month())
            .or_default() += words;
    }

    #[cfg(test)]
    fn count_for(&self, year: i32, month: u32) -> Option<usize> {
        self.by_year.get(&year)?.get(&month).copied()
    }

    /// Iterates `(year, month, words)` in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32, usize)> + '_ {
        self.by_year.iter().flat_map(|(&year, months)| {
            months.iter().map(move |(&month, &words)| (year, month, words))
        })
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }
}

impl fmt::Display for WordCountStats {
    /// Renders the heading, a blank line, then each year followed by one
    /// `<Mon> <count>` line per month.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", constants::STATS_HEADING)?;
        writeln!(f)?;
        for (year, months) in &self.by_year {
            writeln!(f, "{}", year)?;
            for (&month, words) in months {
                writeln!(f, "{} {}", month_abbreviation(*year, month), words)?;
            }
        }
        Ok(())
    }
}

fn month_abbreviation(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%b").to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Tallies the words of every day file into per-month buckets.
///
/// # Errors
///
/// Returns `AppError::Io` if the diary folder or a day file cannot be read.
pub fn collect_word_counts(diary_dir: &Path) -> AppResult<WordCountStats> {
    let mut stats = WordCountStats::default();

    for path in journal_io::list_day_files(diary_dir)? {
        let Some(date) = journal_io::date_from_file_name(&path) else {
            continue;
        };
        let Some(text) = journal_io::read_day_file(&path)? else {
            continue;
        };
        stats.record(date, text.split_whitespace().count());
    }

    debug!("Collected word counts for {} months", stats.iter().count());
    Ok(stats)
}
