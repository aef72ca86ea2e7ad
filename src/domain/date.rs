//! Date value object: a concrete month or the ongoing "present".

use super::errors::{FieldError, ParseError, ValidationError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static YEAR_MONTH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("Failed to compile year-month regex")
});

/// Literal rendered for an ongoing date, whatever the formatter.
pub const PRESENT: &str = "present";

/// A point in time, or the open end of an ongoing interval.
///
/// The ongoing variant carries no timestamp, so a formatter can never be
/// asked to format one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Date {
    Concrete(NaiveDate),
    Ongoing,
}

impl Date {
    /// Build a start date; a start date is always required.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingStartDate` if `input` is `None`, or a
    /// `ParseError` if the parser rejects it.
    pub fn start(parser: &dyn DateParser, input: Option<&str>) -> Result<Self, FieldError> {
        let input = input.ok_or(ValidationError::MissingStartDate)?;
        Ok(Self::Concrete(parser.parse(input)?))
    }

    /// Build an end date; a missing end date means the interval is ongoing.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if `input` is present but malformed.
    pub fn end(parser: &dyn DateParser, input: Option<&str>) -> Result<Self, FieldError> {
        match input {
            Some(input) => Ok(Self::Concrete(parser.parse(input)?)),
            None => Ok(Self::Ongoing),
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, Self::Ongoing)
    }

    pub fn render(&self, formatter: &dyn DateFormatter) -> String {
        match self {
            Self::Concrete(date) => formatter.format(date),
            Self::Ongoing => PRESENT.to_string(),
        }
    }
}

// An ongoing date is later than every concrete date.
impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Concrete(a), Self::Concrete(b)) => a.cmp(b),
            (Self::Concrete(_), Self::Ongoing) => Ordering::Less,
            (Self::Ongoing, Self::Concrete(_)) => Ordering::Greater,
            (Self::Ongoing, Self::Ongoing) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parses a raw date literal.
pub trait DateParser: Send + Sync {
    fn parse(&self, input: &str) -> Result<NaiveDate, ParseError>;
}

/// Parses strict `YYYY-MM` input into the first day of that month.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearMonthParser;

impl DateParser for YearMonthParser {
    fn parse(&self, input: &str) -> Result<NaiveDate, ParseError> {
        let trimmed = input.trim();
        let invalid = || ParseError::InvalidYearMonth {
            input: trimmed.to_string(),
        };

        let captures = YEAR_MONTH_REGEX.captures(trimmed).ok_or_else(invalid)?;
        let year: i32 = captures[1].parse().map_err(|_| invalid())?;
        let month: u32 = captures[2].parse().map_err(|_| invalid())?;

        // Calendar years start at 1
        if year == 0 {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
    }
}

/// Formats a concrete date.
pub trait DateFormatter: Send + Sync {
    fn format(&self, date: &NaiveDate) -> String;
}

/// Formats as the full month name and year, e.g. "January 2020".
#[derive(Debug, Clone, Copy, Default)]
pub struct FullMonthNameYearFormatter;

impl DateFormatter for FullMonthNameYearFormatter {
    fn format(&self, date: &NaiveDate) -> String {
        date.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn test_year_month_parser_accepts_strict_input() {
        assert_eq!(YearMonthParser.parse("2020-01").unwrap(), ymd(2020, 1));
        assert_eq!(YearMonthParser.parse(" 1999-12 ").unwrap(), ymd(1999, 12));
        assert_eq!(YearMonthParser.parse("0001-01").unwrap(), ymd(1, 1));
    }

    #[test]
    fn test_year_month_parser_rejects_partial_or_ambiguous() {
        let inputs = [
            "", "0000-01", "2020", "2020-1", "20-01", "2020-13", "2020-00", "2020-01-15",
            "01-2020", "Jan 2020",
        ];
        for input in inputs {
            let err = YearMonthParser.parse(input).unwrap_err();
            assert!(matches!(err, ParseError::InvalidYearMonth { .. }), "{}", input);
        }
    }

    #[test]
    fn test_start_date_missing_is_validation_error() {
        let err = Date::start(&YearMonthParser, None).unwrap_err();
        assert_eq!(err, FieldError::Validation(ValidationError::MissingStartDate));
        assert_eq!(err.to_string(), "Start date missing");
    }

    #[test]
    fn test_start_date_malformed_is_parse_error() {
        let err = Date::start(&YearMonthParser, Some("soon")).unwrap_err();
        assert!(matches!(err, FieldError::Parse(_)));
    }

    #[test]
    fn test_end_date_missing_is_ongoing() {
        let date = Date::end(&YearMonthParser, None).unwrap();
        assert!(date.is_ongoing());
    }

    #[test]
    fn test_render_concrete_full_month_name() {
        let date = Date::end(&YearMonthParser, Some("2020-05")).unwrap();
        assert_eq!(date.render(&FullMonthNameYearFormatter), "May 2020");
    }

    #[test]
    fn test_render_ongoing_ignores_formatter() {
        struct Panicking;
        impl DateFormatter for Panicking {
            fn format(&self, _date: &NaiveDate) -> String {
                panic!("ongoing dates must not reach a formatter");
            }
        }

        assert_eq!(Date::Ongoing.render(&Panicking), "present");
        assert_eq!(Date::Ongoing.render(&FullMonthNameYearFormatter), "present");
    }

    #[test]
    fn test_ordering_puts_ongoing_last() {
        let mut dates = vec![
            Date::Ongoing,
            Date::Concrete(ymd(2021, 6)),
            Date::Concrete(ymd(2019, 1)),
        ];
        dates.sort();
        assert_eq!(
            dates,
            vec![
                Date::Concrete(ymd(2019, 1)),
                Date::Concrete(ymd(2021, 6)),
                Date::Ongoing
            ]
        );
    }
}
