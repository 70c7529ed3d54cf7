//! Parameter list parsing and classification.
//!
//! A parameter string such as `;TYPE=home,voice;PREF=1` is first split into
//! raw segments by a small state machine, then each segment is classified
//! against the registry record of the property. Classification waits until
//! every segment is read because `VALUE` may come last and decides which
//! parameters are legal.

use std::collections::BTreeSet;

use tracing::trace;

use super::values::unescape_param;
use crate::rfc::vcard::core::{
    Parameter, ParamsBuilder, Pref, Property, TypeListStyle, TypeParameter, ValueType,
};

/// A raw `NAME=value[,value...]` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    name: String,
    values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Name,
    Values,
    Quoted,
    AfterQuote,
}

/// Splits a parameter string into segments.
///
/// ## Errors
/// Returns a description of the first syntax error.
fn split_segments(text: &str) -> Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut state = State::Start;
    let mut name = String::new();
    let mut values: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        state = match (state, c) {
            (State::Start, ';') => State::Name,
            (State::Start, _) => return Err(format!("expected ';' before {c:?}")),

            (State::Name, '=') => {
                if name.is_empty() {
                    return Err("parameter without a name".to_string());
                }
                State::Values
            }
            (State::Name, c) if c.is_ascii_alphanumeric() || c == '-' => {
                name.push(c);
                State::Name
            }
            (State::Name, ';') => return Err(format!("parameter {name:?} has no '='")),
            (State::Name, c) => return Err(format!("illegal character {c:?} in parameter name")),

            (State::Values, '"') if current.is_empty() => State::Quoted,
            (State::Values, ',') => {
                values.push(std::mem::take(&mut current));
                State::Values
            }
            (State::Values | State::AfterQuote, ';') => {
                values.push(std::mem::take(&mut current));
                segments.push(Segment {
                    name: std::mem::take(&mut name),
                    values: std::mem::take(&mut values),
                });
                State::Name
            }
            (State::Values, '"') => return Err(format!("stray quote in parameter {name}")),
            (State::Values, c) => {
                current.push(c);
                State::Values
            }

            (State::Quoted, '"') => State::AfterQuote,
            (State::Quoted, c) => {
                current.push(c);
                State::Quoted
            }

            (State::AfterQuote, ',') => {
                values.push(std::mem::take(&mut current));
                State::Values
            }
            (State::AfterQuote, c) => {
                return Err(format!("unexpected {c:?} after quoted value of {name}"));
            }
        };
    }

    match state {
        State::Start => {}
        State::Name => return Err(format!("parameter {name:?} has no '='")),
        State::Quoted => return Err(format!("unterminated quote in parameter {name}")),
        State::Values | State::AfterQuote => {
            values.push(current);
            segments.push(Segment { name, values });
        }
    }

    Ok(segments)
}

/// The classified parameters of one content line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedParameters {
    pub altid: Option<String>,
    /// Already checked to lie in 1..=100.
    pub pref: Option<i64>,
    /// LABEL with `\n` de-escaped.
    pub label: Option<String>,
    /// CALSCALE as written; the property parser decides what it supports.
    pub calscale: Option<String>,
    pub value_type: Option<ValueType>,
    pub types: BTreeSet<TypeParameter>,
    /// Parameter names outside the vocabulary, `X-` names included.
    pub unknown: Vec<String>,
    /// Known parameter names the property does not allow.
    pub illegal: Vec<String>,
    /// TYPE tokens outside the vocabulary.
    pub unknown_types: Vec<String>,
    /// Known TYPE tokens the property does not allow.
    pub illegal_types: Vec<TypeParameter>,
    /// Legal parameters the model does not keep (LANGUAGE, PID, GEO ...).
    pub unmodeled: Vec<String>,
    /// Syntax and value errors.
    pub errors: Vec<String>,
    /// TYPE was given as several `;TYPE=` segments.
    pub multiple_type_segments: bool,
}

impl ParsedParameters {
    /// Parses and classifies `text` for `property`.
    ///
    /// `text` is the raw parameter section including its leading `;`, or the
    /// empty string.
    #[must_use]
    pub fn parse(text: &str, property: Property) -> Self {
        let mut parsed = Self::default();

        let segments = match split_segments(text) {
            Ok(segments) => segments,
            Err(err) => {
                parsed.errors.push(err);
                return parsed;
            }
        };

        let meta = property.meta();
        for segment in segments.iter().filter(|s| is_param(s, Parameter::Value)) {
            if parsed.value_type.is_some() {
                parsed.errors.push("VALUE given more than once".to_string());
            }
            let raw = segment.values.join(",");
            match ValueType::from_name(&raw) {
                Some(vt) => parsed.value_type = Some(vt),
                None => parsed.errors.push(format!("unknown VALUE type {raw:?}")),
            }
        }

        let value_type = parsed.value_type.unwrap_or(meta.default_value_type);
        if !meta.allows_value_type(value_type) {
            parsed.illegal.push(Parameter::Value.as_str().to_string());
            return parsed;
        }

        let mut type_segments = 0;
        for segment in &segments {
            trace!(name = %segment.name, values = ?segment.values, "parameter");

            let Some(parameter) = Parameter::from_name(&segment.name) else {
                parsed.unknown.push(segment.name.to_ascii_uppercase());
                continue;
            };
            if !meta.allows_parameter(value_type, parameter) {
                parsed.illegal.push(parameter.as_str().to_string());
                continue;
            }

            match parameter {
                Parameter::Value => {}
                Parameter::AltId => parsed.altid = Some(unescape_param(&segment.values.join(","))),
                Parameter::Pref => parsed.read_pref(&segment.values.join(",")),
                Parameter::Label => parsed.label = Some(unescape_param(&segment.values.join(","))),
                Parameter::CalScale => parsed.calscale = Some(segment.values.join(",")),
                Parameter::Type => {
                    type_segments += 1;
                    parsed.read_types(property, &segment.values);
                }
                Parameter::Language
                | Parameter::Pid
                | Parameter::MediaType
                | Parameter::SortAs
                | Parameter::Geo
                | Parameter::Tz => parsed.unmodeled.push(parameter.as_str().to_string()),
            }
        }
        parsed.multiple_type_segments = type_segments > 1;

        parsed
    }

    fn read_pref(&mut self, raw: &str) {
        match raw.trim().parse::<i64>() {
            Ok(value) => match Pref::new(value) {
                Ok(_) => self.pref = Some(value),
                Err(err) => self.errors.push(err.to_string()),
            },
            Err(_) => self.errors.push(format!("PREF is not an integer: {raw:?}")),
        }
    }

    fn read_types(&mut self, property: Property, values: &[String]) {
        let meta = property.meta();
        for token in values.iter().filter(|t| !t.is_empty()) {
            match TypeParameter::from_name(token) {
                Some(t) if meta.allows_type(t) => {
                    self.types.insert(t);
                }
                Some(t) => self.illegal_types.push(t),
                None => self.unknown_types.push(token.clone()),
            }
        }
    }

    /// Whether the line can still produce an entry.
    ///
    /// Unknown names and TYPE tokens do not affect validity.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.illegal.is_empty() && self.illegal_types.is_empty()
    }

    /// Describes the first problem that makes the parameters invalid.
    #[must_use]
    pub fn problem(&self) -> Option<String> {
        if let Some(err) = self.errors.first() {
            return Some(err.clone());
        }
        if let Some(name) = self.illegal.first() {
            return Some(format!("parameter {name} is not allowed"));
        }
        self.illegal_types
            .first()
            .map(|t| format!("TYPE={t} is not allowed"))
    }

    /// The shared entry parameters, ready for an entry builder.
    #[must_use]
    pub fn builder(&self) -> ParamsBuilder {
        ParamsBuilder {
            altid: self.altid.clone(),
            pref: self.pref,
            types: self.types.clone(),
            list_style: if self.multiple_type_segments {
                TypeListStyle::Parameters
            } else {
                TypeListStyle::Values
            },
        }
    }
}

fn is_param(segment: &Segment, parameter: Parameter) -> bool {
    segment.name.eq_ignore_ascii_case(parameter.as_str())
}
