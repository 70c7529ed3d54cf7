//! vCard serialization (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::{EntryBuilder, NoteProperty, VCard, serialize};
//!
//! let card = VCard::builder()
//!     .add(NoteProperty::builder("Met at the conference").build().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let output = serialize(&[card]);
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:\r\n"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe)
//! - Text, component and parameter escaping per RFC 6350
//! - Fixed property order (KIND, FN, N, NICKNAME, BDAY, ADR, TEL, EMAIL,
//!   ORG, NOTE, URL)
//! - `VALUE=` written only for non-default value types

pub mod escape;
pub mod fold;
pub mod serializer;

pub use escape::{escape_component, escape_param, escape_text, normalize_line_breaks};
pub use fold::{MAX_LINE_OCTETS, MIN_FOLD_LIMIT, fold, fold_line};
pub use serializer::{serialize, serialize_entry, serialize_single};
