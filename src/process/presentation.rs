//! Presentation phase: resume aggregate to template-ready document.
//!
//! Ordering rules:
//! - work experience, education and involvement levels: start date, most
//!   recent first
//! - involvement: organization name, case-insensitive ascending
//! - notable coursework: text, case-insensitive ascending
//! - ranked collections: rank ascending

use super::Formatters;
use crate::domain::{BoundedText, Date, SortOptions};
use crate::models::{
    Degree, Education, Involvement, InvolvementLevel, Profile, Project, Resume,
    TechnicalKnowledge, WorkExperience,
};
use crate::records::{
    DegreeView, EducationView, InvolvementLevelView, InvolvementView, ProfileView, ProjectView,
    ResumeDocument, TechnicalKnowledgeView, WorkExperienceView,
};

/// Sort most recent start date first. Stable, so equal starts keep input order.
fn by_start_date_descending<T>(items: &[T], start_date: impl Fn(&T) -> &Date) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by(|a, b| start_date(b).cmp(start_date(a)));
    sorted
}

fn by_text_case_insensitive<T>(items: &[T], text: impl Fn(&T) -> &BoundedText) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_cached_key(|item| text(item).to_string().to_uppercase());
    sorted
}

pub(super) struct Presenter<'a> {
    formatters: &'a Formatters,
}

impl<'a> Presenter<'a> {
    pub(super) fn new(formatters: &'a Formatters) -> Self {
        Self { formatters }
    }

    pub(super) fn resume(&self, resume: &Resume) -> ResumeDocument {
        ResumeDocument {
            profile: self.profile(&resume.profile),
            work_experience: by_start_date_descending(&resume.work_experience, |w| &w.start_date)
                .into_iter()
                .map(|w| self.work_experience(w))
                .collect(),
            education: by_start_date_descending(&resume.education, |e| &e.start_date)
                .into_iter()
                .map(|e| self.education(e))
                .collect(),
            technical_knowledge: resume
                .technical_knowledge
                .sorted_values(SortOptions::default())
                .into_iter()
                .map(|t| self.technical_knowledge(t))
                .collect(),
            projects: resume
                .projects
                .sorted_values(SortOptions::default())
                .into_iter()
                .map(|p| self.project(p))
                .collect(),
        }
    }

    fn date(&self, date: &Date) -> String {
        date.render(self.formatters.date.as_ref())
    }

    fn profile(&self, profile: &Profile) -> ProfileView {
        ProfileView {
            name: profile.name.to_string(),
            phone_number: profile
                .phone_number
                .render(self.formatters.phone_number.as_ref()),
            email: profile.email.render(self.formatters.email.as_ref()),
        }
    }

    fn work_experience(&self, work: &WorkExperience) -> WorkExperienceView {
        WorkExperienceView {
            company_name: work.company_name.to_string(),
            location: work.location.render(self.formatters.location.as_ref()),
            title: work.title.to_string(),
            start_date: self.date(&work.start_date),
            end_date: self.date(&work.end_date),
            contributions: work
                .contributions
                .sorted_values(SortOptions::default())
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    fn degree(&self, degree: &Degree) -> DegreeView {
        DegreeView {
            program: degree.program.to_string(),
            major: degree.major.to_string(),
            minor: degree.minor.as_ref().map(ToString::to_string),
            emphasis: degree.emphasis.as_ref().map(ToString::to_string),
        }
    }

    fn involvement_level(&self, level: &InvolvementLevel) -> InvolvementLevelView {
        InvolvementLevelView {
            title: level.title.to_string(),
            start_date: self.date(&level.start_date),
            end_date: self.date(&level.end_date),
        }
    }

    fn involvement(&self, involvement: &Involvement) -> InvolvementView {
        InvolvementView {
            organization: involvement.organization.to_string(),
            levels: by_start_date_descending(&involvement.levels, |l| &l.start_date)
                .into_iter()
                .map(|l| self.involvement_level(l))
                .collect(),
        }
    }

    fn education(&self, education: &Education) -> EducationView {
        EducationView {
            degree: self.degree(&education.degree),
            institution: education.institution.to_string(),
            location: education
                .institution_location
                .render(self.formatters.location.as_ref()),
            start_date: self.date(&education.start_date),
            end_date: self.date(&education.end_date),
            notable_coursework: by_text_case_insensitive(&education.notable_coursework, |c| c)
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            involvement: by_text_case_insensitive(&education.involvement, |i| &i.organization)
                .into_iter()
                .map(|i| self.involvement(i))
                .collect(),
            gpa: education.gpa.render(self.formatters.number.as_ref()),
        }
    }

    fn technical_knowledge(&self, knowledge: &TechnicalKnowledge) -> TechnicalKnowledgeView {
        TechnicalKnowledgeView {
            category: knowledge.category.to_string(),
            proficiencies: knowledge
                .proficiencies
                .sorted_values(SortOptions::default())
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    fn project(&self, project: &Project) -> ProjectView {
        ProjectView {
            title: project.title.to_string(),
            description: project.description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundedTextLimits, YearMonthParser};
    use chrono::NaiveDate;

    fn text(s: &str) -> BoundedText {
        BoundedText::new(BoundedTextLimits::new(64), s)
    }

    fn start(s: &str) -> Date {
        Date::start(&YearMonthParser, Some(s)).unwrap()
    }

    #[test]
    fn test_start_date_descending_is_stable() {
        let items = vec![
            ("a", start("2019-01")),
            ("b", start("2021-06")),
            ("c", start("2019-01")),
            ("d", start("2020-03")),
        ];
        let sorted: Vec<&str> = by_start_date_descending(&items, |i| &i.1)
            .into_iter()
            .map(|i| i.0)
            .collect();
        assert_eq!(sorted, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_case_insensitive_text_order() {
        let items = vec![text("zoology"), text("Algorithms"), text("compilers"), text("Biology")];
        let sorted: Vec<String> = by_text_case_insensitive(&items, |t| t)
            .into_iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(sorted, vec!["Algorithms", "Biology", "compilers", "zoology"]);
    }

    #[test]
    fn test_ongoing_start_would_sort_first() {
        let items = vec![
            Date::Concrete(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            Date::Ongoing,
        ];
        let sorted = by_start_date_descending(&items, |d| d);
        assert!(sorted[0].is_ongoing());
    }
}
