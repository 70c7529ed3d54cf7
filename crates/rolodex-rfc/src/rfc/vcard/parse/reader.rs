//! Line-oriented vCard reader.
//!
//! The reader walks the logical lines of one card, `BEGIN:VCARD`, then
//! `VERSION:4.0`, then body lines until `END:VCARD`. Body lines are routed to
//! the parser of their property and the resulting entries are assembled into
//! a [`VCard`] at END. Unknown properties and parameters are recorded as
//! [`Warning`]s and skipped. Any other problem stops the reader in the
//! [`ReaderState::Malformed`] state, keeping the first offending line.

use std::fmt;

use tracing::{debug, instrument, warn};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines};
use super::property::{ParseOutcome, PropertyParser, parser_for};
use crate::rfc::vcard::core::charset::check_input_chars;
use crate::rfc::vcard::core::{Property, VCard, VCardBuilder, VCardError};

/// Largest input accepted by [`check_input_size`] callers by default.
pub const MAX_INPUT_BYTES: usize = rolodex_core::constants::DEFAULT_MAX_INPUT_BYTES;

/// Rejects inputs longer than `limit` bytes.
///
/// ## Errors
/// Returns [`ParseErrorKind::InputTooLarge`] when `len > limit`.
pub fn check_input_size(len: usize, limit: usize) -> ParseResult<()> {
    if len > limit {
        return Err(ParseError::too_large(len, limit));
    }
    Ok(())
}

/// Where the reader is in a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReaderState {
    /// Nothing read yet.
    #[default]
    Start,
    /// `BEGIN:VCARD` read.
    Begin,
    /// `VERSION:4.0` read, no body line yet.
    Version,
    /// At least one body line read.
    Body,
    /// `END:VCARD` read and the card assembled.
    Valid,
    /// Reading stopped on an error.
    Malformed,
}

impl ReaderState {
    /// Terminal states consume no further lines.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Valid | Self::Malformed)
    }
}

/// A recoverable condition met while reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A property name outside the model, `X-` names included.
    UnknownProperty { line: usize, name: String },
    /// A parameter name outside the vocabulary.
    UnknownParameter {
        line: usize,
        property: Property,
        name: String,
    },
    /// A TYPE token outside the vocabulary.
    UnknownTypeToken {
        line: usize,
        property: Property,
        token: String,
    },
    /// A legal parameter the model does not keep.
    UnmodeledParameter {
        line: usize,
        property: Property,
        name: String,
    },
    /// A well-formed line deliberately skipped.
    IgnoredProperty {
        line: usize,
        property: Property,
        reason: String,
    },
    /// A `group.` prefix removed from a property name.
    GroupStripped { line: usize, group: String },
}

impl Warning {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownProperty { line, .. }
            | Self::UnknownParameter { line, .. }
            | Self::UnknownTypeToken { line, .. }
            | Self::UnmodeledParameter { line, .. }
            | Self::IgnoredProperty { line, .. }
            | Self::GroupStripped { line, .. } => *line,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty { line, name } => {
                write!(f, "line {line}: unknown property {name}")
            }
            Self::UnknownParameter {
                line,
                property,
                name,
            } => write!(f, "line {line}: unknown parameter {name} on {property}"),
            Self::UnknownTypeToken {
                line,
                property,
                token,
            } => write!(f, "line {line}: unknown TYPE={token} on {property}"),
            Self::UnmodeledParameter {
                line,
                property,
                name,
            } => write!(f, "line {line}: parameter {name} on {property} is not kept"),
            Self::IgnoredProperty {
                line,
                property,
                reason,
            } => write!(f, "line {line}: {property} ignored: {reason}"),
            Self::GroupStripped { line, group } => {
                write!(f, "line {line}: group {group} removed")
            }
        }
    }
}

/// A successfully read card and the warnings raised while reading it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCard {
    pub card: VCard,
    pub warnings: Vec<Warning>,
}

/// Reads a single vCard.
#[derive(Debug, Default)]
pub struct VCardReader {
    state: ReaderState,
    builder: VCardBuilder,
    card: Option<VCard>,
    warnings: Vec<Warning>,
    error: Option<ParseError>,
    malformed_line: Option<(usize, String)>,
    last_line: usize,
}

impl VCardReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Reads one complete card from `input`.
    ///
    /// The input is first checked for raw control characters, then unfolded
    /// and split into logical lines. Reading stops at END or at the first
    /// error; input left after END is not consumed. Does nothing if the
    /// reader is already in a terminal state.
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn read(&mut self, input: &str) {
        if self.state.is_terminal() {
            return;
        }

        if let Err(err) = check_input_chars(input) {
            let line = match &err {
                VCardError::IllegalCharacter { line, .. } => *line,
                _ => 0,
            };
            let content = input.lines().nth(line.saturating_sub(1)).unwrap_or_default();
            self.fail(ParseError::from_vcard(line, &err), content);
            return;
        }

        for (line_num, line) in split_lines(input) {
            self.last_line = line_num;
            self.feed(line_num, &line);
            if self.state.is_terminal() {
                break;
            }
        }

        match self.state {
            ReaderState::Valid | ReaderState::Malformed => {}
            ReaderState::Start => self.fail(
                ParseError::new(ParseErrorKind::MissingBegin, 0, "input has no content lines"),
                "",
            ),
            ReaderState::Begin | ReaderState::Version | ReaderState::Body => self.fail(
                ParseError::new(
                    ParseErrorKind::MissingEnd,
                    self.last_line,
                    "input ended inside a card",
                ),
                "",
            ),
        }
    }

    fn feed(&mut self, line_num: usize, line: &str) {
        match self.state {
            ReaderState::Start => {
                if line.eq_ignore_ascii_case("BEGIN:VCARD") {
                    self.state = ReaderState::Begin;
                } else {
                    self.fail(
                        ParseError::new(ParseErrorKind::MissingBegin, line_num, line),
                        line,
                    );
                }
            }
            ReaderState::Begin => self.read_version(line_num, line),
            ReaderState::Version | ReaderState::Body => match parse_content_line(line, line_num) {
                Ok(content) => self.read_body(line_num, line, content),
                Err(err) => self.fail(err, line),
            },
            ReaderState::Valid | ReaderState::Malformed => {}
        }
    }

    fn read_version(&mut self, line_num: usize, line: &str) {
        let content = match parse_content_line(line, line_num) {
            Ok(content) if content.name == Property::Version.as_str() => content,
            _ => {
                self.fail(
                    ParseError::new(ParseErrorKind::MissingVersion, line_num, line),
                    line,
                );
                return;
            }
        };

        if content.value.trim() == "4.0" {
            self.state = ReaderState::Version;
        } else {
            self.fail(
                ParseError::new(
                    ParseErrorKind::UnsupportedVersion,
                    line_num,
                    content.value.trim(),
                ),
                line,
            );
        }
    }

    fn read_body(&mut self, line_num: usize, line: &str, content: ContentLine) {
        if let Some(group) = content.group {
            self.warn(Warning::GroupStripped {
                line: line_num,
                group,
            });
        }

        let Some(property) = Property::from_name(&content.name) else {
            self.warn(Warning::UnknownProperty {
                line: line_num,
                name: content.name,
            });
            return;
        };

        match property {
            Property::End => {
                if content.params.is_empty() && content.value.eq_ignore_ascii_case("VCARD") {
                    self.assemble(line_num, line);
                } else {
                    self.fail(ParseError::malformed(line_num, "unexpected END", line), line);
                }
                return;
            }
            Property::Begin | Property::Version => {
                self.fail(
                    ParseError::malformed(line_num, "unexpected structural line", line),
                    line,
                );
                return;
            }
            _ => {}
        }

        let Some(mut parser) = parser_for(property) else {
            return;
        };
        parser.reset(&content.params, Some(&content.value));
        parser.parse();

        if let Some(parameters) = parser.parameters() {
            let mut warnings = Vec::new();
            warnings.extend(parameters.unknown.iter().map(|name| Warning::UnknownParameter {
                line: line_num,
                property,
                name: name.clone(),
            }));
            warnings.extend(parameters.unknown_types.iter().map(|token| {
                Warning::UnknownTypeToken {
                    line: line_num,
                    property,
                    token: token.clone(),
                }
            }));
            warnings.extend(parameters.unmodeled.iter().map(|name| {
                Warning::UnmodeledParameter {
                    line: line_num,
                    property,
                    name: name.clone(),
                }
            }));
            for warning in warnings {
                self.warn(warning);
            }
        }

        match parser.outcome() {
            ParseOutcome::Entry(entry) => {
                self.builder.push(entry.clone());
                self.state = ReaderState::Body;
            }
            ParseOutcome::Ignored(reason) => {
                self.warn(Warning::IgnoredProperty {
                    line: line_num,
                    property,
                    reason: reason.clone(),
                });
                self.state = ReaderState::Body;
            }
            ParseOutcome::Invalid(reason) => {
                let err = ParseError::invalid_property(line_num, property.as_str(), reason);
                self.fail(err, line);
            }
            ParseOutcome::Pending => {}
        }
    }

    fn assemble(&mut self, line_num: usize, line: &str) {
        let builder = std::mem::take(&mut self.builder);
        debug!(entries = builder.len(), "assembling card");

        match builder.build() {
            Ok(card) => {
                self.card = Some(card);
                self.state = ReaderState::Valid;
            }
            Err(err) => self.fail(ParseError::from_vcard(line_num, &err), line),
        }
    }

    fn warn(&mut self, warning: Warning) {
        warn!(%warning, "vCard warning");
        self.warnings.push(warning);
    }

    fn fail(&mut self, err: ParseError, line: &str) {
        warn!(error = %err, "malformed vCard");
        if self.error.is_none() {
            self.malformed_line = Some((err.line, line.to_string()));
            self.error = Some(err);
        }
        self.state = ReaderState::Malformed;
    }

    #[must_use]
    pub const fn state(&self) -> ReaderState {
        self.state
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state == ReaderState::Valid
    }

    /// The assembled card, once END was read.
    #[must_use]
    pub const fn card(&self) -> Option<&VCard> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    #[must_use]
    pub fn unknown_properties(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                Warning::UnknownProperty { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn unknown_parameters(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                Warning::UnknownParameter { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn unknown_type_tokens(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                Warning::UnknownTypeToken { token, .. } => Some(token.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Line numbers of ignored lines.
    #[must_use]
    pub fn ignored_lines(&self) -> Vec<usize> {
        self.warnings
            .iter()
            .filter(|w| matches!(w, Warning::IgnoredProperty { .. }))
            .map(Warning::line)
            .collect()
    }

    #[must_use]
    pub fn stripped_groups(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                Warning::GroupStripped { group, .. } => Some(group.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The first error, when the reader is malformed.
    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// The first offending line and its line number (0 when not tied to a
    /// line).
    #[must_use]
    pub fn malformed_line(&self) -> Option<(usize, &str)> {
        self.malformed_line
            .as_ref()
            .map(|(line, content)| (*line, content.as_str()))
    }

    /// ## Errors
    /// Returns the first error if the reader did not reach a valid END.
    pub fn into_result(self) -> ParseResult<ParsedCard> {
        if let Some(err) = self.error {
            return Err(err);
        }
        match self.card {
            Some(card) => Ok(ParsedCard {
                card,
                warnings: self.warnings,
            }),
            None => Err(ParseError::new(
                ParseErrorKind::MissingEnd,
                self.last_line,
                "card was not completed",
            )),
        }
    }
}

/// ## Summary
/// Parses a single vCard v4 document.
///
/// ## Errors
/// Returns the first [`ParseError`] met: an illegal control character, a
/// missing or wrong BEGIN/VERSION/END frame, a malformed line, an invalid
/// known property, or a cardinality violation at assembly.
#[instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<ParsedCard> {
    let mut reader = VCardReader::new();
    reader.read(input);
    debug!(state = ?reader.state(), warnings = reader.warnings().len(), "read finished");
    reader.into_result()
}
