//! Domain validation and parse errors.

use std::fmt;

/// Which half of a city and state location was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    City,
    State,
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::State => write!(f, "state"),
        }
    }
}

/// Errors raised when user data violates a field contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input does not match the email address grammar.
    InvalidEmail(String),

    /// The input does not look like a phone number.
    InvalidPhoneNumber(String),

    /// Seven digits were given where a US number needs ten.
    MissingAreaCode,

    /// A digit count no supported US shape accepts.
    UnexpectedDigitCount(usize),

    /// A city or state name was empty after trimming.
    EmptyPlaceName(PlaceKind),

    /// A start date was not provided.
    MissingStartDate,

    /// A required value was not provided at all.
    MissingField,

    /// A number was NaN or infinite.
    NonFiniteNumber,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(_) => write!(f, "Unable to extract email from input"),
            Self::InvalidPhoneNumber(_) => {
                write!(f, "Unable to extract phone number digits from input")
            }
            Self::MissingAreaCode => write!(
                f,
                "Unexpected length for US phone number. Are you missing the area code?"
            ),
            Self::UnexpectedDigitCount(count) => {
                write!(f, "Unexpected length for US phone number: {}.", count)
            }
            Self::EmptyPlaceName(kind) => write!(
                f,
                "Non-empty {} name required for city and state location",
                kind
            ),
            Self::MissingStartDate => write!(f, "Start date missing"),
            Self::MissingField => write!(f, "Required value missing"),
            Self::NonFiniteNumber => write!(f, "Number must be finite"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised when a scalar literal has malformed syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not a `YYYY-MM` year and month.
    InvalidYearMonth { input: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidYearMonth { input } => {
                write!(f, "Invalid date '{}': expected YYYY-MM", input)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure of a factory that can both validate and parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Validation(ValidationError),
    Parse(ParseError),
}

impl From<ValidationError> for FieldError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ParseError> for FieldError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{}", err),
            Self::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}
