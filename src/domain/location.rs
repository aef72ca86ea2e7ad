//! Location value object and formatter.

use super::errors::{PlaceKind, ValidationError};
use super::segment::{apply_segment_formatters, SegmentFormatter};

/// A single non-empty place name such as a city or state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceName(String);

impl PlaceName {
    /// Trim `input` and reject it if nothing is left.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPlaceName` naming `kind` when the input
    /// is absent or blank.
    pub fn new(kind: PlaceKind, input: Option<&str>) -> Result<Self, ValidationError> {
        let trimmed = input.unwrap_or_default().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyPlaceName(kind));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A place identifier composed of ordered name segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// A city followed by its state.
    CityAndState { city: PlaceName, state: PlaceName },

    /// An existing location worked from remotely; its segments are unchanged.
    Remote(Box<Location>),
}

impl Location {
    /// Build a city and state location from raw names.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyPlaceName` for the first missing name,
    /// city before state.
    pub fn city_and_state(city: Option<&str>, state: Option<&str>) -> Result<Self, ValidationError> {
        let city = PlaceName::new(PlaceKind::City, city)?;
        let state = PlaceName::new(PlaceKind::State, state)?;
        Ok(Self::CityAndState { city, state })
    }

    /// Mark this location as remote without revalidating it.
    pub fn remote(self) -> Self {
        Self::Remote(Box::new(self))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// The place names in construction order.
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::CityAndState { city, state } => vec![city.as_str(), state.as_str()],
            Self::Remote(inner) => inner.segments(),
        }
    }

    pub fn render(&self, formatter: &dyn LocationFormatter) -> String {
        formatter.format(self)
    }
}

/// Renders a [`Location`] to a string.
pub trait LocationFormatter: Send + Sync {
    fn format(&self, location: &Location) -> String;
}

/// Post-processing applied to an already formatted remote location.
pub trait RemotePostFormatter: Send + Sync {
    fn format(&self, formatted: &str) -> String;
}

/// Leaves the formatted location as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPostFormatter;

impl RemotePostFormatter for IdentityPostFormatter {
    fn format(&self, formatted: &str) -> String {
        formatted.to_string()
    }
}

/// Substitutes the formatted location for every `{}` in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePostFormatter {
    template: String,
}

impl TemplatePostFormatter {
    pub const PLACEHOLDER: &'static str = "{}";

    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl RemotePostFormatter for TemplatePostFormatter {
    fn format(&self, formatted: &str) -> String {
        self.template.replace(Self::PLACEHOLDER, formatted)
    }
}

/// Applies one segment formatter per place name, by position, then the
/// remote post-formatter for remote locations.
pub struct OrdinalLocationFormatter {
    segment_formatters: Vec<Box<dyn SegmentFormatter>>,
    remote_post_formatter: Box<dyn RemotePostFormatter>,
}

impl OrdinalLocationFormatter {
    pub fn new(segment_formatters: Vec<Box<dyn SegmentFormatter>>) -> Self {
        Self {
            segment_formatters,
            remote_post_formatter: Box::new(IdentityPostFormatter),
        }
    }

    pub fn with_remote_post_formatter(mut self, post: Box<dyn RemotePostFormatter>) -> Self {
        self.remote_post_formatter = post;
        self
    }

    fn apply_segment_formatters(&self, location: &Location) -> String {
        apply_segment_formatters(&self.segment_formatters, &location.segments())
    }
}

impl LocationFormatter for OrdinalLocationFormatter {
    fn format(&self, location: &Location) -> String {
        match location {
            Location::CityAndState { .. } => self.apply_segment_formatters(location),
            Location::Remote(_) => self
                .remote_post_formatter
                .format(&self.apply_segment_formatters(location)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::segment::TrailingCommaSpaceSegmentFormatter;

    fn formatter() -> OrdinalLocationFormatter {
        OrdinalLocationFormatter::new(vec![Box::new(TrailingCommaSpaceSegmentFormatter)])
            .with_remote_post_formatter(Box::new(TemplatePostFormatter::new(
                "Remote (Headquarters in {})",
            )))
    }

    #[test]
    fn test_city_and_state_trims_names() {
        let location = Location::city_and_state(Some("  Portland "), Some("OR")).unwrap();
        assert_eq!(location.segments(), vec!["Portland", "OR"]);
        assert!(!location.is_remote());
    }

    #[test]
    fn test_city_and_state_requires_city_first() {
        let err = Location::city_and_state(Some(" "), None).unwrap_err();
        assert_eq!(err, ValidationError::EmptyPlaceName(PlaceKind::City));

        let err = Location::city_and_state(Some("Austin"), Some("")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Non-empty state name required for city and state location"
        );
    }

    #[test]
    fn test_remote_keeps_segments() {
        let location = Location::city_and_state(Some("Denver"), Some("CO"))
            .unwrap()
            .remote();
        assert!(location.is_remote());
        assert_eq!(location.segments(), vec!["Denver", "CO"]);
    }

    #[test]
    fn test_format_city_and_state() {
        let location = Location::city_and_state(Some("Austin"), Some("TX")).unwrap();
        assert_eq!(location.render(&formatter()), "Austin, TX");
    }

    #[test]
    fn test_format_remote_applies_post_formatter() {
        let location = Location::city_and_state(Some("Austin"), Some("TX"))
            .unwrap()
            .remote();
        assert_eq!(
            location.render(&formatter()),
            "Remote (Headquarters in Austin, TX)"
        );
    }

    #[test]
    fn test_format_remote_default_post_formatter_is_identity() {
        let location = Location::city_and_state(Some("Austin"), Some("TX"))
            .unwrap()
            .remote();
        let plain = OrdinalLocationFormatter::new(Vec::new());
        assert_eq!(location.render(&plain), "AustinTX");
    }

    #[test]
    fn test_extra_formatters_are_unused() {
        let location = Location::city_and_state(Some("Austin"), Some("TX")).unwrap();
        let formatter = OrdinalLocationFormatter::new(vec![
            Box::new(TrailingCommaSpaceSegmentFormatter),
            Box::new(TrailingCommaSpaceSegmentFormatter),
            Box::new(TrailingCommaSpaceSegmentFormatter),
        ]);
        assert_eq!(location.render(&formatter), "Austin, TX, ");
    }
}
