//! Domain value objects and their parsers and formatters.
//!
//! Each value object validates at construction time, so invalid data cannot
//! be represented once a record has been converted. Parsing and formatting
//! are narrow single-method traits injected by the caller.

pub mod bounded_text;
pub mod date;
pub mod email;
pub mod errors;
pub mod location;
pub mod number;
pub mod phone;
pub mod ranked;
pub mod segment;

pub use bounded_text::{BoundedText, BoundedTextLimits};
pub use date::{Date, DateFormatter, DateParser, FullMonthNameYearFormatter, YearMonthParser};
pub use email::{Email, EmailFormatter, EmailParser, PlainEmailFormatter, RegexEmailParser};
pub use errors::{FieldError, ParseError, PlaceKind, ValidationError};
pub use location::{
    IdentityPostFormatter, Location, LocationFormatter, OrdinalLocationFormatter, PlaceName,
    RemotePostFormatter, TemplatePostFormatter,
};
pub use number::{Number, NumberFormatter, NumberFormattingFlags, Scale, ScaledNumberFormatter};
pub use phone::{
    Digit, DigitGroup, DigitsToPhoneNumberConverter, OrdinalPhoneNumberFormatter, PhoneNumber,
    PhoneNumberFormatter, PhoneNumberParser, RegexPhoneNumberParser, UsDigitsToPhoneNumberConverter,
    UsPhoneNumber,
};
pub use ranked::{Ranked, RankedCollection, SortOptions};
pub use segment::{
    NoChangeSegmentFormatter, OmitSegmentFormatter, SegmentFormatter,
    TrailingCommaSpaceSegmentFormatter, TrailingDotSegmentFormatter,
};
