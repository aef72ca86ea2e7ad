//! Email value object, parser and formatter.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("Failed to compile email regex")
});

/// A validated email address split into its two parts.
///
/// Only produced from a successful parse, so neither part is empty and
/// neither contains `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    local_part: String,
    domain_part: String,
}

impl Email {
    /// Parse `input` with `parser` and build the email from its parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the parser rejects the input.
    pub fn from_input(parser: &dyn EmailParser, input: &str) -> Result<Self, ValidationError> {
        let (local_part, domain_part) = parser.parse(input)?;
        Ok(Self {
            local_part,
            domain_part,
        })
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Get the domain part (after '@').
    pub fn domain_part(&self) -> &str {
        &self.domain_part
    }

    pub fn render(&self, formatter: &dyn EmailFormatter) -> String {
        formatter.format(self)
    }
}

/// Splits raw input into an email's local and domain parts.
pub trait EmailParser: Send + Sync {
    fn parse(&self, input: &str) -> Result<(String, String), ValidationError>;
}

/// Matches trimmed input against a single canonical address grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailParser;

impl EmailParser for RegexEmailParser {
    fn parse(&self, input: &str) -> Result<(String, String), ValidationError> {
        let trimmed = input.trim();
        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail(trimmed.to_string()));
        }

        // The grammar admits exactly one '@' with non-empty text on both sides
        let (local, domain) = trimmed
            .split_once('@')
            .expect("email grammar guarantees a single '@'");
        Ok((local.to_string(), domain.to_string()))
    }
}

/// Renders an [`Email`] to a string.
pub trait EmailFormatter: Send + Sync {
    fn format(&self, email: &Email) -> String;
}

/// Recombines the parts as `local@domain`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEmailFormatter;

impl EmailFormatter for PlainEmailFormatter {
    fn format(&self, email: &Email) -> String {
        format!("{}@{}", email.local_part(), email.domain_part())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PlainEmailFormatter.format(self))
    }
}
