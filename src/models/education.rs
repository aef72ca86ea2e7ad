//! Education entry and its nested records.

use crate::domain::{BoundedText, Date, Location, Number};

/// The degree pursued at an institution.
#[derive(Debug, Clone, PartialEq)]
pub struct Degree {
    pub program: BoundedText,
    pub major: BoundedText,
    pub minor: Option<BoundedText>,
    pub emphasis: Option<BoundedText>,
}

/// One role held within an organization over a period.
#[derive(Debug, Clone, PartialEq)]
pub struct InvolvementLevel {
    pub title: BoundedText,
    pub start_date: Date,
    pub end_date: Date,
}

/// Participation in a student organization.
#[derive(Debug, Clone, PartialEq)]
pub struct Involvement {
    pub organization: BoundedText,

    /// Unordered; presented most recent first
    pub levels: Vec<InvolvementLevel>,
}

/// Time spent at one institution.
#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub degree: Degree,
    pub institution: BoundedText,
    pub institution_location: Location,
    pub start_date: Date,
    pub end_date: Date,

    /// Unordered; presented alphabetically
    pub notable_coursework: Vec<BoundedText>,

    /// Unordered; presented alphabetically by organization
    pub involvement: Vec<Involvement>,

    pub gpa: Number,
}
