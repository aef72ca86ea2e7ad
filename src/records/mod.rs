//! Serde boundary types: the raw input record and the rendered document.

pub mod input;
pub mod output;

pub use input::{
    RawDegree, RawEducation, RawInvolvement, RawInvolvementLevel, RawLocation, RawProfile,
    RawProject, RawRankedText, RawResume, RawTechnicalKnowledge, RawWorkExperience,
};
pub use output::{
    DegreeView, EducationView, InvolvementLevelView, InvolvementView, ProfileView, ProjectView,
    ResumeDocument, TechnicalKnowledgeView, WorkExperienceView,
};
