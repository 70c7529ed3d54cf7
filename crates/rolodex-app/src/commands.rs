use std::path::Path;

use rolodex_core::config::Settings;
use rolodex_rfc::rfc::vcard::parse::{VCardReader, check_input_size};
use rolodex_rfc::rfc::vcard::{
    EmailProperty, EntryBuilder, FnProperty, NoteProperty, TelProperty, VCard, parse,
};
use serde::Serialize;

use crate::cli::NewArgs;
use crate::error::{AppError, AppResult};

/// Outcome of `check`, printable as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_name: Option<String>,
    pub entries: usize,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl CheckReport {
    /// ## Errors
    /// Fails only if JSON encoding fails.
    pub fn render(&self, json: bool) -> AppResult<String> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }

        let mut out = String::new();
        if self.valid {
            out.push_str("valid");
            if let Some(name) = &self.formatted_name {
                out.push_str(&format!(": {name} ({} entries)", self.entries));
            }
        } else {
            out.push_str("invalid");
            if let Some(error) = &self.error {
                out.push_str(&format!(": {error}"));
            }
        }
        for warning in &self.warnings {
            out.push_str(&format!("\nwarning: {warning}"));
        }
        Ok(out)
    }
}

/// ## Summary
/// Reads a vCard file, rejecting it before parsing if it exceeds the
/// configured size limit.
///
/// ## Errors
/// Returns an I/O error or an input-size parse error.
pub fn read_input(path: &Path, settings: &Settings) -> AppResult<String> {
    let io_error = |source| AppError::Io {
        path: path.to_path_buf(),
        source,
    };

    let len = std::fs::metadata(path).map_err(io_error)?.len();
    check_input_size(
        usize::try_from(len).unwrap_or(usize::MAX),
        settings.codec.max_input_bytes,
    )?;

    std::fs::read_to_string(path).map_err(io_error)
}

/// Checks `input` and reports validity, warnings and the first error.
#[must_use]
pub fn check(input: &str) -> CheckReport {
    let mut reader = VCardReader::new();
    reader.read(input);

    let warnings = reader.warnings().iter().map(ToString::to_string).collect();
    match reader.card() {
        Some(card) => CheckReport {
            valid: true,
            formatted_name: card.formatted_name().map(str::to_string),
            entries: card.entries().len(),
            warnings,
            error: None,
            line: None,
        },
        None => CheckReport {
            valid: false,
            formatted_name: None,
            entries: 0,
            warnings,
            error: reader.error().map(ToString::to_string),
            line: reader.malformed_line().map(|(line, _)| line),
        },
    }
}

/// ## Errors
/// Returns the parse error if `input` is not a valid card.
pub fn normalize(input: &str) -> AppResult<String> {
    let parsed = parse(input)?;
    for warning in &parsed.warnings {
        tracing::warn!(%warning, "dropped while normalizing");
    }
    Ok(parsed.card.serialize())
}

/// ## Summary
/// Builds a card from command-line values.
///
/// TYPE parameters on telephones are written in the configured list style.
///
/// ## Errors
/// Returns a construction error for values the model rejects.
pub fn new_card(args: &NewArgs, settings: &Settings) -> AppResult<VCard> {
    let mut builder = VCard::builder();

    builder.push(FnProperty::builder(args.formatted_name.as_str()).build()?);
    for email in &args.email {
        builder.push(EmailProperty::builder(email.as_str()).build()?);
    }
    for tel in &args.tel {
        builder.push(
            TelProperty::builder(tel.as_str())
                .type_params(args.tel_types.iter().copied())
                .list_style(settings.codec.type_list_style)
                .build()?,
        );
    }
    if let Some(note) = &args.note {
        builder.push(NoteProperty::builder(note.as_str()).build()?);
    }

    tracing::debug!(entries = builder.len(), "building card");
    Ok(builder.build()?)
}
