//! Resume aggregate.

use super::{Education, Profile, Project, TechnicalKnowledge, WorkExperience};
use crate::domain::RankedCollection;

/// A fully validated resume.
///
/// Built once by the validation phase and read-only afterwards. Multi-valued
/// fields are unordered here; the presentation phase decides their order.
#[derive(Debug, Clone, PartialEq)]
pub struct Resume {
    pub profile: Profile,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub technical_knowledge: RankedCollection<TechnicalKnowledge>,
    pub projects: RankedCollection<Project>,
}
