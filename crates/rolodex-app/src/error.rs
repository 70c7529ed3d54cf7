use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors (command layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    RfcError(#[from] rolodex_rfc::error::RfcError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl From<rolodex_rfc::rfc::vcard::ParseError> for AppError {
    fn from(err: rolodex_rfc::rfc::vcard::ParseError) -> Self {
        Self::RfcError(err.into())
    }
}

impl From<rolodex_rfc::rfc::vcard::VCardError> for AppError {
    fn from(err: rolodex_rfc::rfc::vcard::VCardError) -> Self {
        Self::RfcError(err.into())
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
