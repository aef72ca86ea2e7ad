//! PhoneNumber value object.
//!
//! A phone number is held as fixed-width groups of digits. Parsing turns raw
//! input into a flat digit list, a regional converter groups the digits, and
//! an ordinal formatter renders the groups segment by segment.

use super::errors::ValidationError;
use super::segment::{apply_segment_formatters, SegmentFormatter};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{1,4}?[-.\s]?\(?[0-9]{1,3}?\)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}$")
        .expect("Failed to compile phone number regex")
});

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(Self)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A group of exactly `N` digits, rendered as one opaque segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGroup<const N: usize>([Digit; N]);

impl<const N: usize> DigitGroup<N> {
    pub fn new(digits: [Digit; N]) -> Self {
        Self(digits)
    }

    /// Build a group from a slice holding exactly `N` digits.
    pub fn from_slice(digits: &[Digit]) -> Option<Self> {
        <[Digit; N]>::try_from(digits).ok().map(Self)
    }

    pub fn digits(&self) -> &[Digit; N] {
        &self.0
    }

    pub fn count(&self) -> usize {
        N
    }
}

impl<const N: usize> fmt::Display for DigitGroup<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|d| write!(f, "{}", d))
    }
}

/// A North American number: country code, area code, prefix and line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UsPhoneNumber {
    country_code: DigitGroup<1>,
    area_code: DigitGroup<3>,
    prefix: DigitGroup<3>,
    line_number: DigitGroup<4>,
}

impl UsPhoneNumber {
    /// The country code is always `1`.
    pub fn new(area_code: DigitGroup<3>, prefix: DigitGroup<3>, line_number: DigitGroup<4>) -> Self {
        Self {
            country_code: DigitGroup::new([Digit(1)]),
            area_code,
            prefix,
            line_number,
        }
    }

    pub fn area_code(&self) -> &DigitGroup<3> {
        &self.area_code
    }

    pub fn prefix(&self) -> &DigitGroup<3> {
        &self.prefix
    }

    pub fn line_number(&self) -> &DigitGroup<4> {
        &self.line_number
    }
}

/// A phone number in one of the supported regional shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumber {
    Us(UsPhoneNumber),
}

impl PhoneNumber {
    /// Parse `input` into digits, then group them with `converter`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the input is not phone-shaped or the
    /// digit count fits no shape the converter supports.
    pub fn from_input(
        parser: &dyn PhoneNumberParser,
        converter: &dyn DigitsToPhoneNumberConverter,
        input: &str,
    ) -> Result<Self, ValidationError> {
        let digits = parser.parse(input)?;
        converter.convert(&digits)
    }

    /// Total number of digits across every group.
    pub fn digit_count(&self) -> usize {
        match self {
            Self::Us(number) => {
                number.country_code.count()
                    + number.area_code.count()
                    + number.prefix.count()
                    + number.line_number.count()
            }
        }
    }

    /// One string per digit group, in order.
    pub fn segments(&self) -> Vec<String> {
        match self {
            Self::Us(number) => vec![
                number.country_code.to_string(),
                number.area_code.to_string(),
                number.prefix.to_string(),
                number.line_number.to_string(),
            ],
        }
    }

    pub fn render(&self, formatter: &dyn PhoneNumberFormatter) -> String {
        formatter.format(self)
    }
}

/// Extracts a flat digit sequence from raw input.
pub trait PhoneNumberParser: Send + Sync {
    fn parse(&self, input: &str) -> Result<Vec<Digit>, ValidationError>;
}

/// Accepts loosely punctuated international-looking numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexPhoneNumberParser;

impl PhoneNumberParser for RegexPhoneNumberParser {
    fn parse(&self, input: &str) -> Result<Vec<Digit>, ValidationError> {
        let trimmed = input.trim();
        if !PHONE_NUMBER_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidPhoneNumber(trimmed.to_string()));
        }

        Ok(trimmed.chars().filter_map(Digit::from_char).collect())
    }
}

/// Groups a flat digit list into a regional phone number.
pub trait DigitsToPhoneNumberConverter: Send + Sync {
    fn convert(&self, digits: &[Digit]) -> Result<PhoneNumber, ValidationError>;
}

/// Accepts ten digits, or eleven with the leading country code.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsDigitsToPhoneNumberConverter;

impl DigitsToPhoneNumberConverter for UsDigitsToPhoneNumberConverter {
    fn convert(&self, digits: &[Digit]) -> Result<PhoneNumber, ValidationError> {
        let national = match digits.len() {
            10 => digits,
            11 => &digits[1..],
            7 => return Err(ValidationError::MissingAreaCode),
            count => return Err(ValidationError::UnexpectedDigitCount(count)),
        };

        let (area_code, rest) = national.split_at(3);
        let (prefix, line_number) = rest.split_at(3);
        let group_error = || ValidationError::UnexpectedDigitCount(digits.len());

        Ok(PhoneNumber::Us(UsPhoneNumber::new(
            DigitGroup::from_slice(area_code).ok_or_else(group_error)?,
            DigitGroup::from_slice(prefix).ok_or_else(group_error)?,
            DigitGroup::from_slice(line_number).ok_or_else(group_error)?,
        )))
    }
}

/// Renders a [`PhoneNumber`] to a string.
pub trait PhoneNumberFormatter: Send + Sync {
    fn format(&self, phone_number: &PhoneNumber) -> String;
}

/// Applies one segment formatter per digit group, by position.
pub struct OrdinalPhoneNumberFormatter {
    segment_formatters: Vec<Box<dyn SegmentFormatter>>,
}

impl OrdinalPhoneNumberFormatter {
    pub fn new(segment_formatters: Vec<Box<dyn SegmentFormatter>>) -> Self {
        Self { segment_formatters }
    }
}

impl PhoneNumberFormatter for OrdinalPhoneNumberFormatter {
    fn format(&self, phone_number: &PhoneNumber) -> String {
        apply_segment_formatters(&self.segment_formatters, &phone_number.segments())
    }
}
