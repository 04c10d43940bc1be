//! Date resolution without I/O operations.
//!
//! This module turns the date expressions users type (`yesterday`, `tom`,
//! `2023-01-05`, `Jan 5, 2023`, ...) into calendar dates, and formats those
//! dates into the canonical `YYYY-MM-DD` token used in day file names.

use crate::constants;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

/// Represents the ways a day can be selected.
///
/// # Examples
///
/// ```
/// use diary::journal_core::DateSpecifier;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
///
/// let spec = DateSpecifier::parse(Some("yesterday"), today).unwrap();
/// assert_eq!(spec, DateSpecifier::Yesterday);
/// assert_eq!(spec.resolve(today), NaiveDate::from_ymd_opt(2023, 6, 14).unwrap());
///
/// let spec = DateSpecifier::parse(Some("2023-01-15"), today).unwrap();
/// assert_eq!(spec.resolve(today).to_string(), "2023-01-15");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DateSpecifier {
    /// The reference date itself. Selected by no input or a `tod` prefix.
    Today,

    /// The day before the reference date. Selected by a `yes` prefix.
    Yesterday,

    /// The day after the reference date. Selected by a `tom` prefix.
    Tomorrow,

    /// A fixed calendar date.
    Specific(NaiveDate),
}

impl From<NaiveDate> for DateSpecifier {
    fn from(date: NaiveDate) -> Self {
        DateSpecifier::Specific(date)
    }
}

impl From<NaiveDateTime> for DateSpecifier {
    fn from(datetime: NaiveDateTime) -> Self {
        DateSpecifier::Specific(datetime.date())
    }
}

impl DateSpecifier {
    /// Creates a DateSpecifier from an optional user-supplied expression.
    ///
    /// The relative prefixes are matched case-sensitively against the raw input
    /// and win over everything else, so `"tomato"` means tomorrow. Any other
    /// input must be an absolute date expression.
    ///
    /// `reference_date` supplies the year for expressions that omit one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidDate` if the input is not a recognizable date.
    pub fn parse(input: Option<&str>, reference_date: NaiveDate) -> AppResult<Self> {
        let input = match input {
            None => return Ok(DateSpecifier::Today),
            Some(input) => input,
        };

        if input.starts_with(constants::YESTERDAY_PREFIX) {
            Ok(DateSpecifier::Yesterday)
        } else if input.starts_with(constants::TOMORROW_PREFIX) {
            Ok(DateSpecifier::Tomorrow)
        } else if input.starts_with(constants::TODAY_PREFIX) {
            Ok(DateSpecifier::Today)
        } else {
            parse_date_expression(input, reference_date)
                .map(DateSpecifier::Specific)
                .ok_or_else(|| AppError::InvalidDate(input.to_string()))
        }
    }

    /// Gets the calendar date this specifier selects relative to `reference_date`.
    pub fn resolve(&self, reference_date: NaiveDate) -> NaiveDate {
        match self {
            DateSpecifier::Today => reference_date,
            DateSpecifier::Yesterday => reference_date - Duration::days(1),
            DateSpecifier::Tomorrow => reference_date + Duration::days(1),
            DateSpecifier::Specific(date) => *date,
        }
    }
}

/// Formats a date as the canonical `YYYY-MM-DD` token.
///
/// ```
/// use diary::journal_core::canonical_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
/// assert_eq!(canonical_date(date), "2023-01-05");
/// ```
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(constants::DATE_FORMAT_ISO).to_string()
}

/// Parses an absolute date expression, returning `None` if no format matches.
///
/// Ordinal suffixes are dropped first (`5th` reads as `5`). Expressions without
/// a year take the reference year, and a bare day number takes the reference
/// month as well.
fn parse_date_expression(input: &str, reference_date: NaiveDate) -> Option<NaiveDate> {
    let input = strip_ordinal_suffixes(input.trim());
    let input = input.as_str();
    if input.is_empty() {
        return None;
    }

    if input.len() <= 2 && input.bytes().all(|b| b.is_ascii_digit()) {
        let day = input.parse().ok()?;
        return NaiveDate::from_ymd_opt(reference_date.year(), reference_date.month(), day);
    }

    let full_date_formats = [constants::DATE_FORMAT_ISO, constants::DATE_FORMAT_COMPACT]
        .into_iter()
        .chain(constants::DATE_FORMATS_EXTRA.iter().copied());
    for format in full_date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }

    for format in constants::DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Some(datetime.date());
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }

    let with_year = format!("{} {}", input, reference_date.year());
    constants::DATE_FORMATS_WITHOUT_YEAR
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&with_year, format).ok())
}

/// Removes `st`, `nd`, `rd` and `th` directly following a number.
fn strip_ordinal_suffixes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        out.push(chars[i]);
        if chars[i].is_ascii_digit() {
            if let Some(pair) = chars.get(i + 1..i + 3) {
                let suffix = pair.iter().collect::<String>().to_ascii_lowercase();
                let ends_word = chars.get(i + 3).map_or(true, |c| !c.is_alphanumeric());
                if ends_word && constants::ORDINAL_SUFFIXES.contains(&suffix.as_str()) {
                    i += 3;
                    continue;
                }
            }
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_date(input: Option<&str>, reference_date: NaiveDate) -> AppResult<NaiveDate> {
        DateSpecifier::parse(input, reference_date).map(|spec| spec.resolve(reference_date))
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_absent_input_is_today() {
        let spec = DateSpecifier::parse(None, reference()).unwrap();
        assert_eq!(spec, DateSpecifier::Today);
        assert_eq!(spec.resolve(reference()), reference());
    }

    #[test]
    fn test_none_matches_today_keyword() {
        let none = resolve_date(None, reference()).unwrap();
        let today = resolve_date(Some("today"), reference()).unwrap();
        assert_eq!(canonical_date(none), canonical_date(today));
    }

    #[test]
    fn test_relative_prefixes_ignore_trailing_characters() {
        for input in ["yes", "yesterday", "yesteryear", "yes please"] {
            assert_eq!(
                resolve_date(Some(input), reference()).unwrap(),
                ymd(2023, 6, 14),
                "{input}"
            );
        }
        for input in ["tom", "tomorrow", "tomato"] {
            assert_eq!(
                resolve_date(Some(input), reference()).unwrap(),
                ymd(2023, 6, 16),
                "{input}"
            );
        }
        for input in ["tod", "today", "toddler"] {
            assert_eq!(
                resolve_date(Some(input), reference()).unwrap(),
                reference(),
                "{input}"
            );
        }
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        let result = DateSpecifier::parse(Some("Yesterday"), reference());
        assert!(matches!(result, Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn test_relative_dates_cross_month_and_year() {
        let new_year = ymd(2024, 1, 1);
        assert_eq!(
            DateSpecifier::Yesterday.resolve(new_year),
            ymd(2023, 12, 31)
        );
        let leap = ymd(2024, 2, 28);
        assert_eq!(DateSpecifier::Tomorrow.resolve(leap), ymd(2024, 2, 29));
    }

    #[test]
    fn test_absolute_formats() {
        let cases = [
            ("2023-01-05", ymd(2023, 1, 5)),
            ("20230105", ymd(2023, 1, 5)),
            ("2023/01/05", ymd(2023, 1, 5)),
            ("01/05/2023", ymd(2023, 1, 5)),
            ("2023-01-05 10:30", ymd(2023, 1, 5)),
            ("2023-01-05 10:30:59", ymd(2023, 1, 5)),
            ("2023-01-05T10:30:00", ymd(2023, 1, 5)),
            ("2023-01-05T10:30:00+02:00", ymd(2023, 1, 5)),
            ("January 5 2023", ymd(2023, 1, 5)),
            ("January 5, 2023", ymd(2023, 1, 5)),
            ("Jan 5 2023", ymd(2023, 1, 5)),
            ("Jan 5, 2023", ymd(2023, 1, 5)),
            ("5 January 2023", ymd(2023, 1, 5)),
            ("5 Jan 2023", ymd(2023, 1, 5)),
            ("  2023-01-05  ", ymd(2023, 1, 5)),
            ("1/5/23", ymd(2023, 1, 5)),
            ("01/05/99", ymd(1999, 1, 5)),
            ("Jan 5th 2023", ymd(2023, 1, 5)),
            ("January 5th, 2023", ymd(2023, 1, 5)),
            ("5th January 2023", ymd(2023, 1, 5)),
            ("1st Feb 2023", ymd(2023, 2, 1)),
            ("March 22nd 2023", ymd(2023, 3, 22)),
            ("23RD Mar 2023", ymd(2023, 3, 23)),
        ];
        for (input, expected) in cases {
            assert_eq!(
                resolve_date(Some(input), reference()).unwrap(),
                expected,
                "{input}"
            );
        }
    }

    #[test]
    fn test_month_day_without_year_uses_reference_year() {
        assert_eq!(
            resolve_date(Some("March 3"), reference()).unwrap(),
            ymd(2023, 3, 3)
        );
        assert_eq!(
            resolve_date(Some("3 Mar"), reference()).unwrap(),
            ymd(2023, 3, 3)
        );
    }

    #[test]
    fn test_partial_dates_fill_in_from_reference() {
        let cases = [
            ("1/5", ymd(2023, 1, 5)),
            ("12/31", ymd(2023, 12, 31)),
            ("Jan 5th", ymd(2023, 1, 5)),
            ("5th Jan", ymd(2023, 1, 5)),
            ("5", ymd(2023, 6, 5)),
            ("05", ymd(2023, 6, 5)),
            ("30th", ymd(2023, 6, 30)),
        ];
        for (input, expected) in cases {
            assert_eq!(
                resolve_date(Some(input), reference()).unwrap(),
                expected,
                "{input}"
            );
        }
    }

    #[test]
    fn test_strip_ordinal_suffixes() {
        assert_eq!(strip_ordinal_suffixes("Jan 1st, 2nd 3rd 4th"), "Jan 1, 2 3 4");
        assert_eq!(strip_ordinal_suffixes("August 5"), "August 5");
        assert_eq!(strip_ordinal_suffixes("5this"), "5this");
    }

    #[test]
    fn test_invalid_expressions() {
        for input in ["", "   ", "not-a-date", "2023-02-30", "next week", "31", "0", "2/30"] {
            match DateSpecifier::parse(Some(input), reference()) {
                Err(AppError::InvalidDate(raw)) => assert_eq!(raw, input),
                other => panic!("Expected InvalidDate for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_date_values() {
        let date = ymd(2022, 12, 31);
        assert_eq!(DateSpecifier::from(date), DateSpecifier::Specific(date));

        let datetime = date.and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(DateSpecifier::from(datetime).resolve(reference()), date);
    }

    #[test]
    fn test_canonical_date_is_zero_padded() {
        assert_eq!(canonical_date(ymd(987, 3, 4)), "0987-03-04");
        assert_eq!(canonical_date(ymd(2023, 11, 30)), "2023-11-30");
    }
}
