//! Applicant profile.

use crate::domain::{BoundedText, Email, PhoneNumber};

/// Who the resume belongs to and how to reach them.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: BoundedText,
    pub phone_number: PhoneNumber,
    pub email: Email,
}
