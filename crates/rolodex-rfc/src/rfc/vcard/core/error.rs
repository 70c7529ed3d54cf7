//! Errors raised while constructing vCard values, entries and cards.

use thiserror::Error;

use super::parameter::{TypeParameter, ValueType};
use super::property::Property;

/// Result type for vCard construction.
pub type VCardResult<T> = Result<T, VCardError>;

/// An invariant violated while building a value, an entry or a card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VCardError {
    /// The escaped form of a value still contains characters its subset forbids.
    #[error("illegal characters in {context}: {value:?}")]
    IllegalCharacters { context: &'static str, value: String },

    /// A raw control character was found while reading input.
    #[error("illegal character U+{code_point:04X} ({block}) on line {line}")]
    IllegalCharacter {
        block: &'static str,
        code_point: u32,
        line: usize,
    },

    /// A generic parameter the property does not allow for its value type.
    #[error("parameter {parameter} is not allowed on {property}")]
    IllegalParameter {
        property: Property,
        parameter: String,
    },

    /// A TYPE value outside the property's vocabulary.
    #[error("TYPE={value} is not allowed on {property}")]
    IllegalTypeParameter {
        property: Property,
        value: TypeParameter,
    },

    /// A VALUE type the property does not support.
    #[error("VALUE={value_type} is not allowed on {property}")]
    IllegalValueType {
        property: Property,
        value_type: ValueType,
    },

    #[error("PREF must be between 1 and 100, got {0}")]
    PrefOutOfRange(i64),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("URI has no scheme: {0:?}")]
    MissingScheme(String),

    #[error("invalid URI: {0:?}")]
    InvalidUri(String),

    #[error("unknown KIND value: {0:?}")]
    UnknownKind(String),

    /// Too few or too many distinct entries for a property.
    #[error("{property} cardinality violated by: {content:?}")]
    Cardinality { property: Property, content: String },

    #[error("fold limit must be at least {min} octets, got {limit}")]
    FoldLimit { limit: usize, min: usize },
}
