//! KIND property values (RFC 6350 §6.1.4).

use std::fmt;
use std::str::FromStr;

use super::error::VCardError;

/// The kind of object a card represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// An individual person.
    #[default]
    Individual,
    /// A group of people.
    Group,
    /// An organization.
    Org,
    /// A named location.
    Location,
}

impl Kind {
    pub const ALL: [Self; 4] = [Self::Individual, Self::Group, Self::Org, Self::Location];

    /// Returns the kind string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Group => "group",
            Self::Org => "org",
            Self::Location => "location",
        }
    }
}

impl FromStr for Kind {
    type Err = VCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| VCardError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("GROUP".parse::<Kind>(), Ok(Kind::Group));
        assert_eq!("Org".parse::<Kind>(), Ok(Kind::Org));
        assert_eq!(Kind::Location.to_string(), "location");
    }

    #[test]
    fn unknown_kind_rejected() {
        assert_eq!(
            "organization".parse::<Kind>(),
            Err(VCardError::UnknownKind("organization".into()))
        );
        assert!("".parse::<Kind>().is_err());
    }
}
