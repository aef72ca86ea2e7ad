//! Per-position segment formatting shared by phone numbers and locations.

use tracing::debug;

/// A string transform applied to one piece of a multi-part value.
pub trait SegmentFormatter: Send + Sync {
    fn format(&self, segment: &str) -> String;
}

/// Passes the segment through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChangeSegmentFormatter;

impl SegmentFormatter for NoChangeSegmentFormatter {
    fn format(&self, segment: &str) -> String {
        segment.to_string()
    }
}

/// Drops the segment entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct OmitSegmentFormatter;

impl SegmentFormatter for OmitSegmentFormatter {
    fn format(&self, _segment: &str) -> String {
        String::new()
    }
}

/// Appends a `.` after the nested formatter's output.
pub struct TrailingDotSegmentFormatter {
    nested: Box<dyn SegmentFormatter>,
}

impl TrailingDotSegmentFormatter {
    pub fn new() -> Self {
        Self::wrapping(Box::new(NoChangeSegmentFormatter))
    }

    pub fn wrapping(nested: Box<dyn SegmentFormatter>) -> Self {
        Self { nested }
    }
}

impl Default for TrailingDotSegmentFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentFormatter for TrailingDotSegmentFormatter {
    fn format(&self, segment: &str) -> String {
        format!("{}.", self.nested.format(segment))
    }
}

/// Appends `, ` to the segment, as between a city and its state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingCommaSpaceSegmentFormatter;

impl SegmentFormatter for TrailingCommaSpaceSegmentFormatter {
    fn format(&self, segment: &str) -> String {
        format!("{}, ", segment)
    }
}

/// Zip `formatters` against `segments` by position and concatenate.
///
/// Segments beyond the last formatter pass through unchanged; formatters
/// beyond the last segment are unused.
pub fn apply_segment_formatters<S: AsRef<str>>(
    formatters: &[Box<dyn SegmentFormatter>],
    segments: &[S],
) -> String {
    if formatters.len() != segments.len() {
        debug!(
            formatters = formatters.len(),
            segments = segments.len(),
            "Segment formatter count does not match segment count"
        );
    }

    segments
        .iter()
        .enumerate()
        .map(|(position, segment)| match formatters.get(position) {
            Some(formatter) => formatter.format(segment.as_ref()),
            None => NoChangeSegmentFormatter.format(segment.as_ref()),
        })
        .collect()
}
