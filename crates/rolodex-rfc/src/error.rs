use thiserror::Error;

use crate::rfc::vcard::core::VCardError;
use crate::rfc::vcard::parse::ParseError;

/// RFC parsing and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] VCardError),
}
