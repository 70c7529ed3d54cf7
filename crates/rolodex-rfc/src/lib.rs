//! vCard v4 (RFC 6350) codec.
//!
//! The [`rfc::vcard`] module holds the typed property model, the serializer
//! and the line-oriented reader.

pub mod error;
pub mod rfc;
