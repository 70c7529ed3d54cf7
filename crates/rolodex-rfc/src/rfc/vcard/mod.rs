//! vCard implementation (RFC 6350).
//!
//! This module provides a typed model, parsing, and serialization for
//! vCard 4.0 contact data.
//!
//! ## Overview
//!
//! Every supported property (KIND, FN, N, NICKNAME, BDAY, ADR, TEL, EMAIL,
//! ORG, NOTE, URL) has its own entry type, validated when its builder runs.
//! Entries are collected into a [`VCard`], which enforces per-property
//! cardinality and always carries an FN.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let parsed = parse(input).unwrap();
//! assert_eq!(parsed.card.formatted_name(), Some("John Doe"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::{EmailProperty, EntryBuilder, FnProperty, VCard};
//!
//! let card = VCard::builder()
//!     .add(FnProperty::builder("Jane Doe").build().unwrap())
//!     .add(EmailProperty::builder("jane@example.com").build().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let output = card.serialize();
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Values, property registry, entries, collections and [`VCard`]
//! - [`parse`] - Reader state machine, parameter and value parsers
//! - [`build`] - Escaping, folding and serialization

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{fold, fold_line, serialize, serialize_single};
pub use core::{
    AdrProperty, BdayProperty, Calscale, Cardinality, Component, EmailProperty, EntryBuilder,
    FnProperty, Kind, KindProperty, ListComponent, NProperty, NicknameProperty, NoteProperty,
    OrgProperty, PlainText, Pref, Property, PropertyCollection, PropertyEntry, StructuredDate,
    TelProperty, TypeListStyle, TypeParameter, Uri, UrlProperty, VCard, VCardBuilder, VCardError,
    Value, ValueType,
};
pub use parse::{ParseError, ParseErrorKind, ParseResult, ParsedCard, VCardReader, Warning, parse};
