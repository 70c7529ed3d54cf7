//! vCard parsing (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;TYPE=work:john@example.com\r\n\
//! X-SKYPE:jdoe\r\n\
//! END:VCARD\r\n";
//!
//! let parsed = parse::parse(input).unwrap();
//! assert_eq!(parsed.card.formatted_name(), Some("John Doe"));
//! assert_eq!(parsed.warnings.len(), 1);
//! ```
//!
//! Only version 4.0 is accepted. Lines may end in CRLF or bare LF, and both
//! fold styles are unfolded. Property groups (`item1.TEL`) are stripped with
//! a warning.

mod error;
mod lexer;
mod params;
mod property;
mod reader;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold, unfold_lenient};
pub use params::ParsedParameters;
pub use property::{LineParser, ParseOutcome, PropertyParser, parser_for};
pub use reader::{
    MAX_INPUT_BYTES, ParsedCard, ReaderState, VCardReader, Warning, check_input_size, parse,
};
pub use values::{
    parse_date, split_component, split_structured, unescape_param, unescape_text,
};
