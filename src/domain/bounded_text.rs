//! BoundedText value object.

use std::fmt;

/// Character budget for a [`BoundedText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedTextLimits {
    char_limit: usize,
}

impl BoundedTextLimits {
    /// Create limits from a possibly negative budget; negatives clamp to zero.
    pub fn new(char_limit: i64) -> Self {
        Self {
            char_limit: usize::try_from(char_limit.max(0)).unwrap_or(usize::MAX),
        }
    }

    /// The maximum number of characters a rendered text may hold.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }
}

/// Free text that renders trimmed and capped to a character budget.
///
/// The raw input is kept as given; trimming and truncation happen when the
/// text is rendered, so rendering is pure and repeatable.
///
/// # Example
///
/// ```
/// use resume_conversion::domain::{BoundedText, BoundedTextLimits};
///
/// let text = BoundedText::new(BoundedTextLimits::new(5), "  Hello, world  ");
/// assert_eq!(text.to_string(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    limits: BoundedTextLimits,
    raw: String,
}

impl BoundedText {
    pub fn new(limits: BoundedTextLimits, raw: impl Into<String>) -> Self {
        Self {
            limits,
            raw: raw.into(),
        }
    }

    pub fn limits(&self) -> BoundedTextLimits {
        self.limits
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trimmed = self.raw.trim();
        match trimmed.char_indices().nth(self.limits.char_limit()) {
            Some((end, _)) => f.write_str(&trimmed[..end]),
            None => f.write_str(trimmed),
        }
    }
}
