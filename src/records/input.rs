//! Raw resume record as authored by the user.
//!
//! Every field is optional so that absence is reported by validation with a
//! field-specific message rather than by the deserializer.

use serde::Deserialize;

/// The whole raw record.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawResume {
    pub profile: Option<RawProfile>,
    pub work_experience: Option<Vec<RawWorkExperience>>,
    pub education: Option<Vec<RawEducation>>,
    pub technical_knowledge: Option<Vec<RawTechnicalKnowledge>>,
    pub projects: Option<Vec<RawProject>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    pub city: Option<String>,
    pub state: Option<String>,

    /// Only `true` marks the location as remote
    pub remote: Option<bool>,
}

/// A text entry with its user-assigned rank.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawRankedText {
    pub rank: Option<f64>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawWorkExperience {
    pub company_name: Option<String>,
    pub location: Option<RawLocation>,
    pub title: Option<String>,
    pub start_date: Option<String>,

    /// Absent while the position is current
    pub end_date: Option<String>,

    pub contributions: Option<Vec<RawRankedText>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawDegree {
    pub program: Option<String>,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub emphasis: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawInvolvementLevel {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawInvolvement {
    pub organization: Option<String>,
    pub levels: Option<Vec<RawInvolvementLevel>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawEducation {
    pub degree: Option<RawDegree>,
    pub institution: Option<String>,
    pub location: Option<RawLocation>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub notable_coursework: Option<Vec<String>>,
    pub involvement: Option<Vec<RawInvolvement>>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTechnicalKnowledge {
    pub rank: Option<f64>,
    pub category: Option<String>,
    pub proficiencies: Option<Vec<RawRankedText>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    pub rank: Option<f64>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case_keys() {
        let raw: RawResume = serde_json::from_value(json!({
            "profile": { "name": "Ada", "phoneNumber": "555-123-4567", "email": "ada@example.com" },
            "workExperience": [{
                "companyName": "Analytical Engines",
                "location": { "city": "London", "state": "UK", "remote": true },
                "startDate": "2020-01"
            }]
        }))
        .unwrap();

        let profile = raw.profile.unwrap();
        assert_eq!(profile.phone_number.as_deref(), Some("555-123-4567"));

        let work = &raw.work_experience.unwrap()[0];
        assert_eq!(work.company_name.as_deref(), Some("Analytical Engines"));
        assert_eq!(work.location.as_ref().and_then(|l| l.remote), Some(true));
        assert!(work.end_date.is_none());
        assert!(work.contributions.is_none());
    }

    #[test]
    fn test_missing_sections_are_none() {
        let raw: RawResume = serde_json::from_value(json!({})).unwrap();
        assert_eq!(raw, RawResume::default());
    }

    #[test]
    fn test_null_values_are_none() {
        let raw: RawEducation =
            serde_json::from_value(json!({ "endDate": null, "notableCoursework": null })).unwrap();
        assert!(raw.end_date.is_none());
        assert!(raw.notable_coursework.is_none());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<RawRankedText, _> =
            serde_json::from_value(json!({ "rank": "first", "text": "x" }));
        assert!(result.is_err());
    }
}
