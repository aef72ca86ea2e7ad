//! Resume conversion process.
//!
//! Conversion runs in two phases:
//! - **validation** maps a [`RawResume`] into a [`Resume`], failing on the
//!   first field that violates its contract
//! - **presentation** maps the [`Resume`] into a [`ResumeDocument`] of display
//!   strings in a fixed order
//!
//! Both phases are driven by an injected [`ProcessConfig`].

mod presentation;
mod validation;

use crate::config::Config;
use crate::domain::{
    BoundedTextLimits, DateFormatter, DateParser, DigitsToPhoneNumberConverter, EmailFormatter,
    EmailParser, FullMonthNameYearFormatter, LocationFormatter, NumberFormatter,
    OmitSegmentFormatter, OrdinalLocationFormatter, OrdinalPhoneNumberFormatter,
    PhoneNumberFormatter, PhoneNumberParser, PlainEmailFormatter, RegexEmailParser,
    RegexPhoneNumberParser, ScaledNumberFormatter, TemplatePostFormatter,
    TrailingCommaSpaceSegmentFormatter, TrailingDotSegmentFormatter,
    UsDigitsToPhoneNumberConverter, YearMonthParser,
};
use crate::error::ConversionResult;
use crate::models::Resume;
use crate::records::{RawResume, ResumeDocument};
use presentation::Presenter;
use serde::Deserialize;
use validation::Validator;

/// Character budgets for bounded text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Names, titles, categories and other one-line fields
    pub short_text: BoundedTextLimits,

    /// Contributions and project descriptions
    pub long_text: BoundedTextLimits,
}

/// Parsers used by the validation phase.
pub struct Parsers {
    pub date: Box<dyn DateParser>,
    pub email: Box<dyn EmailParser>,
    pub phone_number: Box<dyn PhoneNumberParser>,
}

/// Converters used by the validation phase.
pub struct Converters {
    pub digits_to_phone_number: Box<dyn DigitsToPhoneNumberConverter>,
}

/// Formatters used by the presentation phase.
pub struct Formatters {
    pub date: Box<dyn DateFormatter>,
    pub email: Box<dyn EmailFormatter>,
    pub location: Box<dyn LocationFormatter>,
    pub number: Box<dyn NumberFormatter>,
    pub phone_number: Box<dyn PhoneNumberFormatter>,
}

/// Everything a [`Process`] needs to validate and present a resume.
pub struct ProcessConfig {
    pub limits: Limits,
    pub parsers: Parsers,
    pub converters: Converters,
    pub formatters: Formatters,
}

impl ProcessConfig {
    /// The standard wiring, tuned by `config`.
    ///
    /// Dates parse as `YYYY-MM` and render as "January 2020", phone numbers
    /// render as `555.123.4567`, and locations as "Austin, TX" with the
    /// configured remote template around remote locations.
    pub fn from_config(config: &Config) -> Self {
        let limits = Limits {
            short_text: BoundedTextLimits::new(config.short_text_limit),
            long_text: BoundedTextLimits::new(config.long_text_limit),
        };

        let parsers = Parsers {
            date: Box::new(YearMonthParser),
            email: Box::new(RegexEmailParser),
            phone_number: Box::new(RegexPhoneNumberParser),
        };

        let converters = Converters {
            digits_to_phone_number: Box::new(UsDigitsToPhoneNumberConverter),
        };

        let location = OrdinalLocationFormatter::new(vec![Box::new(
            TrailingCommaSpaceSegmentFormatter,
        )])
        .with_remote_post_formatter(Box::new(TemplatePostFormatter::new(
            config.remote_location_template.clone(),
        )));

        // Drop the country code, dot after area code and prefix
        let phone_number = OrdinalPhoneNumberFormatter::new(vec![
            Box::new(OmitSegmentFormatter),
            Box::new(TrailingDotSegmentFormatter::new()),
            Box::new(TrailingDotSegmentFormatter::new()),
        ]);

        let formatters = Formatters {
            date: Box::new(FullMonthNameYearFormatter),
            email: Box::new(PlainEmailFormatter),
            location: Box::new(location),
            number: Box::new(ScaledNumberFormatter::new(
                config.number_scale,
                config.number_flags,
            )),
            phone_number: Box::new(phone_number),
        };

        Self {
            limits,
            parsers,
            converters,
            formatters,
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Converts raw resume records into template-ready documents.
///
/// A process holds no per-run state, so one instance can serve any number
/// of records, including from several threads at once.
pub struct Process {
    config: ProcessConfig,
}

impl Process {
    pub fn new(config: ProcessConfig) -> Self {
        Self { config }
    }

    /// Convert an untyped JSON record.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::Input` if the value is not shaped like a
    /// record, or the first validation or parse failure otherwise.
    pub fn run_with(&self, data: &serde_json::Value) -> ConversionResult<ResumeDocument> {
        let raw = RawResume::deserialize(data)?;
        self.run(&raw)
    }

    /// Validate then present a raw record.
    pub fn run(&self, raw: &RawResume) -> ConversionResult<ResumeDocument> {
        let resume = self.validate(raw)?;
        Ok(self.present(&resume))
    }

    /// Validation phase: build the resume aggregate.
    ///
    /// # Errors
    ///
    /// Aborts on the first invalid field; no partial resume is returned.
    pub fn validate(&self, raw: &RawResume) -> ConversionResult<Resume> {
        let validator = Validator::new(
            &self.config.limits,
            &self.config.parsers,
            &self.config.converters,
        );

        match validator.resume(raw) {
            Ok(resume) => {
                tracing::debug!(
                    work_experience = resume.work_experience.len(),
                    education = resume.education.len(),
                    technical_knowledge = resume.technical_knowledge.len(),
                    projects = resume.projects.len(),
                    "Resume validated"
                );
                Ok(resume)
            }
            Err(e) => {
                tracing::debug!(error = %e, "Resume validation failed");
                Err(e)
            }
        }
    }

    /// Presentation phase: render and order every field.
    pub fn present(&self, resume: &Resume) -> ResumeDocument {
        Presenter::new(&self.config.formatters).resume(resume)
    }
}

impl Default for Process {
    fn default() -> Self {
        Self::new(ProcessConfig::default())
    }
}
