//! Work experience entry.

use crate::domain::{BoundedText, Date, Location, RankedCollection};

/// One position held at one company.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkExperience {
    pub company_name: BoundedText,

    /// Where the work happened; may be the remote variant
    pub location: Location,

    pub title: BoundedText,
    pub start_date: Date,

    /// `Date::Ongoing` for a current position
    pub end_date: Date,

    /// Achievements, ordered by the author's rank when presented
    pub contributions: RankedCollection<BoundedText>,
}
