//! Validation phase: raw record to resume aggregate.

use super::{Converters, Limits, Parsers};
use crate::domain::{
    BoundedText, BoundedTextLimits, Date, Email, Location, Number, PhoneNumber, Ranked,
    RankedCollection, ValidationError,
};
use crate::error::{ConversionError, ConversionResult};
use crate::models::{
    Degree, Education, Involvement, InvolvementLevel, Profile, Project, Resume,
    TechnicalKnowledge, WorkExperience,
};
use crate::records::{
    RawDegree, RawEducation, RawInvolvement, RawInvolvementLevel, RawLocation, RawProfile,
    RawProject, RawRankedText, RawResume, RawTechnicalKnowledge, RawWorkExperience,
};

/// Dotted path to a field, e.g. `education[0].degree.major`.
fn child(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

fn required<'v, T: ?Sized>(value: Option<&'v T>, field: &str) -> ConversionResult<&'v T> {
    value.ok_or_else(|| ConversionError::validation(field, ValidationError::MissingField))
}

/// Map each entry of an optional list, stopping at the first failure.
fn each<R, T>(
    items: Option<&Vec<R>>,
    field: &str,
    mut convert: impl FnMut(&R, &str) -> ConversionResult<T>,
) -> ConversionResult<Vec<T>> {
    items
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(i, item)| convert(item, &format!("{}[{}]", field, i)))
        .collect()
}

pub(super) struct Validator<'a> {
    limits: &'a Limits,
    parsers: &'a Parsers,
    converters: &'a Converters,
}

impl<'a> Validator<'a> {
    pub(super) fn new(limits: &'a Limits, parsers: &'a Parsers, converters: &'a Converters) -> Self {
        Self {
            limits,
            parsers,
            converters,
        }
    }

    pub(super) fn resume(&self, raw: &RawResume) -> ConversionResult<Resume> {
        let profile = self.profile(required(raw.profile.as_ref(), "profile")?, "profile")?;

        let work_experience = each(raw.work_experience.as_ref(), "workExperience", |w, path| {
            self.work_experience(w, path)
        })?;

        let education = each(raw.education.as_ref(), "education", |e, path| {
            self.education(e, path)
        })?;

        let technical_knowledge = each(
            raw.technical_knowledge.as_ref(),
            "technicalKnowledge",
            |t, path| self.ranked_technical_knowledge(t, path),
        )?;

        let projects = each(raw.projects.as_ref(), "projects", |p, path| {
            self.ranked_project(p, path)
        })?;

        Ok(Resume {
            profile,
            work_experience,
            education,
            technical_knowledge: RankedCollection::new(technical_knowledge),
            projects: RankedCollection::new(projects),
        })
    }

    // Absent text is the empty string, not an error.
    fn text(limits: BoundedTextLimits, value: Option<&String>) -> BoundedText {
        BoundedText::new(limits, value.map(String::as_str).unwrap_or_default())
    }

    fn short_text(&self, value: Option<&String>) -> BoundedText {
        Self::text(self.limits.short_text, value)
    }

    fn long_text(&self, value: Option<&String>) -> BoundedText {
        Self::text(self.limits.long_text, value)
    }

    fn optional_short_text(&self, value: Option<&String>) -> Option<BoundedText> {
        value.map(|v| self.short_text(Some(v)))
    }

    fn rank(&self, value: Option<f64>, field: &str) -> ConversionResult<Number> {
        let field = child(field, "rank");
        let rank = *required(value.as_ref(), &field)?;
        Number::new(rank).map_err(|e| ConversionError::validation(field, e))
    }

    fn start_date(&self, value: Option<&String>, field: &str) -> ConversionResult<Date> {
        Date::start(self.parsers.date.as_ref(), value.map(String::as_str))
            .map_err(|e| ConversionError::field(child(field, "startDate"), e))
    }

    fn end_date(&self, value: Option<&String>, field: &str) -> ConversionResult<Date> {
        Date::end(self.parsers.date.as_ref(), value.map(String::as_str))
            .map_err(|e| ConversionError::field(child(field, "endDate"), e))
    }

    fn location(&self, raw: Option<&RawLocation>, field: &str) -> ConversionResult<Location> {
        let raw = required(raw, field)?;
        Location::city_and_state(raw.city.as_deref(), raw.state.as_deref())
            .map_err(|e| ConversionError::validation(field, e))
    }

    fn work_location(&self, raw: Option<&RawLocation>, field: &str) -> ConversionResult<Location> {
        let location = self.location(raw, field)?;
        match raw.and_then(|r| r.remote) {
            Some(true) => Ok(location.remote()),
            _ => Ok(location),
        }
    }

    fn profile(&self, raw: &RawProfile, field: &str) -> ConversionResult<Profile> {
        let name = self.short_text(raw.name.as_ref());

        let phone_field = child(field, "phoneNumber");
        let phone_number = PhoneNumber::from_input(
            self.parsers.phone_number.as_ref(),
            self.converters.digits_to_phone_number.as_ref(),
            required(raw.phone_number.as_deref(), &phone_field)?,
        )
        .map_err(|e| ConversionError::validation(&phone_field, e))?;

        let email_field = child(field, "email");
        let email = Email::from_input(
            self.parsers.email.as_ref(),
            required(raw.email.as_deref(), &email_field)?,
        )
        .map_err(|e| ConversionError::validation(&email_field, e))?;

        Ok(Profile {
            name,
            phone_number,
            email,
        })
    }

    fn ranked_text(
        &self,
        raw: &RawRankedText,
        field: &str,
        text: impl Fn(Option<&String>) -> BoundedText,
    ) -> ConversionResult<Ranked<BoundedText>> {
        Ok(Ranked::new(self.rank(raw.rank, field)?, text(raw.text.as_ref())))
    }

    fn work_experience(
        &self,
        raw: &RawWorkExperience,
        field: &str,
    ) -> ConversionResult<WorkExperience> {
        let company_name = self.short_text(raw.company_name.as_ref());
        let location = self.work_location(raw.location.as_ref(), &child(field, "location"))?;
        let title = self.short_text(raw.title.as_ref());
        let start_date = self.start_date(raw.start_date.as_ref(), field)?;
        let end_date = self.end_date(raw.end_date.as_ref(), field)?;
        let contributions = each(
            raw.contributions.as_ref(),
            &child(field, "contributions"),
            |c, path| self.ranked_text(c, path, |t| self.long_text(t)),
        )?;

        Ok(WorkExperience {
            company_name,
            location,
            title,
            start_date,
            end_date,
            contributions: RankedCollection::new(contributions),
        })
    }

    fn degree(&self, raw: Option<&RawDegree>, field: &str) -> ConversionResult<Degree> {
        let raw = required(raw, field)?;
        Ok(Degree {
            program: self.short_text(raw.program.as_ref()),
            major: self.short_text(raw.major.as_ref()),
            minor: self.optional_short_text(raw.minor.as_ref()),
            emphasis: self.optional_short_text(raw.emphasis.as_ref()),
        })
    }

    fn involvement_level(
        &self,
        raw: &RawInvolvementLevel,
        field: &str,
    ) -> ConversionResult<InvolvementLevel> {
        Ok(InvolvementLevel {
            title: self.short_text(raw.title.as_ref()),
            start_date: self.start_date(raw.start_date.as_ref(), field)?,
            end_date: self.end_date(raw.end_date.as_ref(), field)?,
        })
    }

    fn involvement(&self, raw: &RawInvolvement, field: &str) -> ConversionResult<Involvement> {
        let organization = self.short_text(raw.organization.as_ref());
        let levels = each(raw.levels.as_ref(), &child(field, "levels"), |l, path| {
            self.involvement_level(l, path)
        })?;
        Ok(Involvement {
            organization,
            levels,
        })
    }

    fn education(&self, raw: &RawEducation, field: &str) -> ConversionResult<Education> {
        let degree = self.degree(raw.degree.as_ref(), &child(field, "degree"))?;
        let institution = self.short_text(raw.institution.as_ref());
        let institution_location = self.location(raw.location.as_ref(), &child(field, "location"))?;
        let start_date = self.start_date(raw.start_date.as_ref(), field)?;
        let end_date = self.end_date(raw.end_date.as_ref(), field)?;
        let notable_coursework = raw
            .notable_coursework
            .iter()
            .flatten()
            .map(|c| self.short_text(Some(c)))
            .collect();
        let involvement = each(
            raw.involvement.as_ref(),
            &child(field, "involvement"),
            |i, path| self.involvement(i, path),
        )?;

        let gpa_field = child(field, "gpa");
        let gpa = Number::new(*required(raw.gpa.as_ref(), &gpa_field)?)
            .map_err(|e| ConversionError::validation(&gpa_field, e))?;

        Ok(Education {
            degree,
            institution,
            institution_location,
            start_date,
            end_date,
            notable_coursework,
            involvement,
            gpa,
        })
    }

    fn ranked_technical_knowledge(
        &self,
        raw: &RawTechnicalKnowledge,
        field: &str,
    ) -> ConversionResult<Ranked<TechnicalKnowledge>> {
        let rank = self.rank(raw.rank, field)?;
        let category = self.short_text(raw.category.as_ref());
        let proficiencies = each(
            raw.proficiencies.as_ref(),
            &child(field, "proficiencies"),
            |p, path| self.ranked_text(p, path, |t| self.short_text(t)),
        )?;

        Ok(Ranked::new(
            rank,
            TechnicalKnowledge {
                category,
                proficiencies: RankedCollection::new(proficiencies),
            },
        ))
    }

    fn ranked_project(&self, raw: &RawProject, field: &str) -> ConversionResult<Ranked<Project>> {
        let rank = self.rank(raw.rank, field)?;
        Ok(Ranked::new(
            rank,
            Project {
                title: self.short_text(raw.title.as_ref()),
                description: self.long_text(raw.description.as_ref()),
            },
        ))
    }
}
