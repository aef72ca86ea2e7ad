//! Technical knowledge category.

use crate::domain::{BoundedText, RankedCollection};

/// A category of skills, e.g. "Languages", with ranked proficiencies.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnicalKnowledge {
    pub category: BoundedText,
    pub proficiencies: RankedCollection<BoundedText>,
}
