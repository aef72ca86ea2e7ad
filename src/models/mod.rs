//! Resume aggregates.
//!
//! Plain records composed from the domain value objects. Each is built
//! bottom-up during validation and owned exclusively by its parent.

pub mod education;
pub mod profile;
pub mod project;
pub mod resume;
pub mod technical_knowledge;
pub mod work_experience;

pub use education::{Degree, Education, Involvement, InvolvementLevel};
pub use profile::Profile;
pub use project::Project;
pub use resume::Resume;
pub use technical_knowledge::TechnicalKnowledge;
pub use work_experience::WorkExperience;
