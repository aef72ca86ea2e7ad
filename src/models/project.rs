//! Project entry.

use crate::domain::BoundedText;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: BoundedText,
    pub description: BoundedText,
}
