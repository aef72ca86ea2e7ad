//! Resume Conversion - validates raw resume records into a typed model and
//! renders them as template-ready documents.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (bounded text, email, phone number,
//!   location, date, number, ranked values) with pluggable parsers and formatters
//! - **models**: Resume aggregates composed from the value objects
//! - **records**: Serde boundary types for the raw input and the rendered document
//! - **process**: The two-phase conversion pipeline
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **telemetry**: Logging setup
//!
//! # Example
//!
//! ```
//! use resume_conversion::Process;
//! use serde_json::json;
//!
//! let process = Process::default();
//! let document = process
//!     .run_with(&json!({
//!         "profile": {
//!             "name": "Ada Lovelace",
//!             "phoneNumber": "555-123-4567",
//!             "email": "ada@example.com"
//!         }
//!     }))
//!     .unwrap();
//!
//! assert_eq!(document.profile.phone_number, "555.123.4567");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod process;
pub mod records;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, ConversionError, ConversionResult};
pub use models::Resume;
pub use process::{Converters, Formatters, Limits, Parsers, Process, ProcessConfig};
pub use records::{RawResume, ResumeDocument};
