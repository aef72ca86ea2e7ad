//! Template-ready resume document.
//!
//! Every value is a display string and every list is already in
//! presentation order, so a template renderer can walk it directly.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResumeDocument {
    pub profile: ProfileView,
    pub work_experience: Vec<WorkExperienceView>,
    pub education: Vec<EducationView>,
    pub technical_knowledge: Vec<TechnicalKnowledgeView>,
    pub projects: Vec<ProjectView>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkExperienceView {
    pub company_name: String,
    pub location: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub contributions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DegreeView {
    pub program: String,
    pub major: String,

    /// Serialized as `null` when the degree has no minor
    pub minor: Option<String>,

    /// Serialized as `null` when the degree has no emphasis
    pub emphasis: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InvolvementLevelView {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InvolvementView {
    pub organization: String,
    pub levels: Vec<InvolvementLevelView>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EducationView {
    pub degree: DegreeView,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub notable_coursework: Vec<String>,
    pub involvement: Vec<InvolvementView>,
    pub gpa: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TechnicalKnowledgeView {
    pub category: String,
    pub proficiencies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectView {
    pub title: String,
    pub description: String,
}
