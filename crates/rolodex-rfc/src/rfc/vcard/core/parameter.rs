//! vCard parameter vocabularies (RFC 6350 §5).

use std::fmt;

use super::error::{VCardError, VCardResult};

pub use rolodex_core::types::TypeListStyle;

/// Generic parameter names known to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parameter {
    Language,
    Value,
    Pref,
    AltId,
    Pid,
    Type,
    MediaType,
    CalScale,
    SortAs,
    Geo,
    Tz,
    Label,
}

impl Parameter {
    pub const ALL: [Self; 12] = [
        Self::Language,
        Self::Value,
        Self::Pref,
        Self::AltId,
        Self::Pid,
        Self::Type,
        Self::MediaType,
        Self::CalScale,
        Self::SortAs,
        Self::Geo,
        Self::Tz,
        Self::Label,
    ];

    /// Returns the parameter name as written on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Language => "LANGUAGE",
            Self::Value => "VALUE",
            Self::Pref => "PREF",
            Self::AltId => "ALTID",
            Self::Pid => "PID",
            Self::Type => "TYPE",
            Self::MediaType => "MEDIATYPE",
            Self::CalScale => "CALSCALE",
            Self::SortAs => "SORT-AS",
            Self::Geo => "GEO",
            Self::Tz => "TZ",
            Self::Label => "LABEL",
        }
    }

    /// Looks up a parameter name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values of the TYPE parameter.
///
/// Declaration order is the canonical rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeParameter {
    Cell,
    Fax,
    Home,
    Pager,
    Text,
    Textphone,
    Video,
    Voice,
    Work,
}

impl TypeParameter {
    pub const ALL: [Self; 9] = [
        Self::Cell,
        Self::Fax,
        Self::Home,
        Self::Pager,
        Self::Text,
        Self::Textphone,
        Self::Video,
        Self::Voice,
        Self::Work,
    ];

    /// Returns the upper-case wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cell => "CELL",
            Self::Fax => "FAX",
            Self::Home => "HOME",
            Self::Pager => "PAGER",
            Self::Text => "TEXT",
            Self::Textphone => "TEXTPHONE",
            Self::Video => "VIDEO",
            Self::Voice => "VOICE",
            Self::Work => "WORK",
        }
    }

    /// Looks up a TYPE token, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value data types (RFC 6350 §4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    Text,
    Uri,
    Date,
    Time,
    DateTime,
    DateAndOrTime,
    Timestamp,
    Boolean,
    Integer,
    Float,
    UtcOffset,
    LanguageTag,
}

impl ValueType {
    pub const ALL: [Self; 12] = [
        Self::Text,
        Self::Uri,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::DateAndOrTime,
        Self::Timestamp,
        Self::Boolean,
        Self::Integer,
        Self::Float,
        Self::UtcOffset,
        Self::LanguageTag,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Uri => "uri",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::DateAndOrTime => "date-and-or-time",
            Self::Timestamp => "timestamp",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::UtcOffset => "utc-offset",
            Self::LanguageTag => "language-tag",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar scales for BDAY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Calscale {
    #[default]
    Gregorian,
}

impl Calscale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.eq_ignore_ascii_case("gregorian")
            .then_some(Self::Gregorian)
    }
}

impl fmt::Display for Calscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A PREF value, 1 (most preferred) to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pref(u8);

impl Pref {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// ## Errors
    /// Returns [`VCardError::PrefOutOfRange`] outside 1..=100.
    pub fn new(value: i64) -> VCardResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(VCardError::PrefOutOfRange(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Pref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
