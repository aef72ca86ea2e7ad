//! Sample resume records for pipeline tests.
//!
//! Records are built as untyped JSON so tests exercise the same
//! deserialization path as the command line tool.

#![allow(dead_code)]

use serde_json::{json, Value};

/// A profile that passes validation.
pub fn sample_profile() -> Value {
    json!({
        "name": "Ada Lovelace",
        "phoneNumber": "+1 (555) 123-4567",
        "email": "ada@example.com"
    })
}

/// A work entry starting at `start_date` with no end date.
pub fn sample_work(company: &str, start_date: &str) -> Value {
    json!({
        "companyName": company,
        "location": { "city": "Austin", "state": "TX" },
        "title": "Engineer",
        "startDate": start_date,
        "contributions": [
            { "rank": 2.0, "text": "Shipped the billing service" },
            { "rank": 1.0, "text": "Led the platform migration" }
        ]
    })
}

/// A remote work entry headquartered in Austin.
pub fn sample_remote_work(company: &str, start_date: &str, end_date: &str) -> Value {
    json!({
        "companyName": company,
        "location": { "city": "Austin", "state": "TX", "remote": true },
        "title": "Staff Engineer",
        "startDate": start_date,
        "endDate": end_date,
        "contributions": []
    })
}

/// An education entry with coursework and involvement in input order that
/// differs from the rendered order.
pub fn sample_education() -> Value {
    json!({
        "degree": { "program": "Bachelor of Science", "major": "Computer Science" },
        "institution": "State University",
        "location": { "city": "Boulder", "state": "CO" },
        "startDate": "2018-09",
        "endDate": "2020-05",
        "notableCoursework": ["operating systems", "Algorithms", "compilers"],
        "involvement": [
            {
                "organization": "robotics club",
                "levels": [
                    { "title": "Member", "startDate": "2018-09", "endDate": "2019-05" },
                    { "title": "President", "startDate": "2019-09" }
                ]
            },
            {
                "organization": "ACM",
                "levels": [{ "title": "Member", "startDate": "2019-01", "endDate": "2020-05" }]
            }
        ],
        "gpa": 3.8
    })
}

/// Technical knowledge entries given out of rank order.
pub fn sample_technical_knowledge() -> Value {
    json!([
        {
            "rank": 2.0,
            "category": "Databases",
            "proficiencies": [{ "rank": 1.0, "text": "PostgreSQL" }]
        },
        {
            "rank": 1.0,
            "category": "Languages",
            "proficiencies": [
                { "rank": 3.0, "text": "Python" },
                { "rank": 1.0, "text": "Rust" },
                { "rank": 2.0, "text": "Go" }
            ]
        }
    ])
}

/// Projects given out of rank order.
pub fn sample_projects() -> Value {
    json!([
        { "rank": 5.0, "title": "Compiler", "description": "A toy compiler" },
        { "rank": 0.5, "title": "Raytracer", "description": "A weekend raytracer" }
    ])
}

/// A complete record touching every section.
pub fn sample_resume() -> Value {
    json!({
        "profile": sample_profile(),
        "workExperience": [
            sample_work("Initech", "2019-01"),
            sample_remote_work("Globex", "2021-06", "2023-02")
        ],
        "education": [sample_education()],
        "technicalKnowledge": sample_technical_knowledge(),
        "projects": sample_projects()
    })
}
