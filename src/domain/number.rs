//! Number value object and scaled formatter.

use super::errors::ValidationError;

/// A finite numeric value such as a rank or a GPA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(f64);

impl Number {
    /// # Errors
    ///
    /// Returns `ValidationError::NonFiniteNumber` for NaN or infinities.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteNumber);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn render(&self, formatter: &dyn NumberFormatter) -> String {
        formatter.format(self)
    }
}

/// Renders a [`Number`] to a string.
pub trait NumberFormatter: Send + Sync {
    fn format(&self, number: &Number) -> String;
}

/// Fixed number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    One,
    Two,
    Three,
}

impl Scale {
    pub fn digits(&self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub fn from_digits(digits: u8) -> Option<Self> {
        match digits {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

/// Optional number formatting behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFormattingFlags {
    /// Separate thousands with `,`.
    pub grouping: bool,

    /// Prefix with `$`.
    pub monetary: bool,
}

const GROUP_SEPARATOR: char = ',';
const CURRENCY_SYMBOL: char = '$';

/// Renders with a fixed decimal scale and optional grouping and currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledNumberFormatter {
    scale: Scale,
    flags: NumberFormattingFlags,
}

impl ScaledNumberFormatter {
    pub fn new(scale: Scale, flags: NumberFormattingFlags) -> Self {
        Self { scale, flags }
    }
}

impl NumberFormatter for ScaledNumberFormatter {
    fn format(&self, number: &Number) -> String {
        let fixed = format!("{:.*}", self.scale.digits(), number.value().abs());
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let integer = if self.flags.grouping {
            group_thousands(integer)
        } else {
            integer.to_string()
        };

        // Rounding can turn a tiny negative into zero; don't print "-0.000"
        let negative = number.value() < 0.0 && fixed.chars().any(|c| matches!(c, '1'..='9'));

        let mut out = String::with_capacity(fixed.len() + 4);
        if negative {
            out.push('-');
        }
        if self.flags.monetary {
            out.push(CURRENCY_SYMBOL);
        }
        out.push_str(&integer);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
