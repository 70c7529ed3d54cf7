//! Per-property value parsers.
//!
//! Every body property has one [`PropertyParser`], obtained with
//! [`parser_for`]. A parser is reset with the raw parameter and value text of
//! a content line, run once with [`PropertyParser::parse`], and then queried
//! for its outcome.

use std::str::FromStr;

use tracing::trace;

use super::params::ParsedParameters;
use super::values::{parse_date, split_component, split_structured, unescape_text};
use crate::rfc::vcard::core::{
    AdrProperty, BdayProperty, Calscale, EmailProperty, EntryBuilder, FnProperty, Kind,
    KindProperty, NProperty, NicknameProperty, NoteProperty, OrgProperty, Property,
    PropertyEntry, TelProperty, UrlProperty, ValueType,
};

/// Result of running a property parser.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParseOutcome {
    /// Not parsed yet.
    #[default]
    Pending,
    /// A valid entry.
    Entry(PropertyEntry),
    /// A well-formed line the model deliberately skips.
    Ignored(String),
    /// The line cannot produce an entry.
    Invalid(String),
}

/// Parses the parameters and value of one content line of a known property.
pub trait PropertyParser {
    fn property(&self) -> Property;

    /// Prepares the parser for a new line. `value` is `None` when the line
    /// carries no value text.
    fn reset(&mut self, params: &str, value: Option<&str>);

    /// Runs the parser. Does nothing once the parser is done.
    fn parse(&mut self);

    fn is_done(&self) -> bool;

    /// Whether the line produced an entry or was deliberately ignored.
    fn is_valid(&self) -> bool;

    fn get_entry(&self) -> Option<PropertyEntry>;

    /// Classified parameters of the last parsed line.
    fn parameters(&self) -> Option<&ParsedParameters>;

    fn outcome(&self) -> &ParseOutcome;
}

/// What a value converter produced.
enum Converted {
    Entry(PropertyEntry),
    Ignored(String),
}

type Converter = fn(&ParsedParameters, &str) -> Result<Converted, String>;

/// A parser made of the shared parameter handling and one value converter.
pub struct LineParser {
    property: Property,
    convert: Converter,
    params_text: String,
    value_text: String,
    parameters: Option<ParsedParameters>,
    outcome: ParseOutcome,
}

impl LineParser {
    const fn new(property: Property, convert: Converter) -> Self {
        Self {
            property,
            convert,
            params_text: String::new(),
            value_text: String::new(),
            parameters: None,
            outcome: ParseOutcome::Pending,
        }
    }
}

impl PropertyParser for LineParser {
    fn property(&self) -> Property {
        self.property
    }

    fn reset(&mut self, params: &str, value: Option<&str>) {
        params.clone_into(&mut self.params_text);
        value.unwrap_or_default().clone_into(&mut self.value_text);
        self.parameters = None;
        self.outcome = ParseOutcome::Pending;
    }

    fn parse(&mut self) {
        if self.is_done() {
            return;
        }

        let parameters = ParsedParameters::parse(&self.params_text, self.property);
        self.outcome = match parameters.problem() {
            Some(problem) => ParseOutcome::Invalid(problem),
            None => match (self.convert)(&parameters, &self.value_text) {
                Ok(Converted::Entry(entry)) => ParseOutcome::Entry(entry),
                Ok(Converted::Ignored(reason)) => ParseOutcome::Ignored(reason),
                Err(reason) => ParseOutcome::Invalid(reason),
            },
        };
        trace!(property = %self.property, outcome = ?self.outcome, "parsed property");
        self.parameters = Some(parameters);
    }

    fn is_done(&self) -> bool {
        !matches!(self.outcome, ParseOutcome::Pending)
    }

    fn is_valid(&self) -> bool {
        matches!(
            self.outcome,
            ParseOutcome::Entry(_) | ParseOutcome::Ignored(_)
        )
    }

    fn get_entry(&self) -> Option<PropertyEntry> {
        match &self.outcome {
            ParseOutcome::Entry(entry) => Some(entry.clone()),
            _ => None,
        }
    }

    fn parameters(&self) -> Option<&ParsedParameters> {
        self.parameters.as_ref()
    }

    fn outcome(&self) -> &ParseOutcome {
        &self.outcome
    }
}

/// Returns the parser for a body property, or `None` for BEGIN, VERSION
/// and END.
#[must_use]
pub fn parser_for(property: Property) -> Option<LineParser> {
    let convert: Converter = match property {
        Property::Kind => convert_kind,
        Property::Fn => convert_fn,
        Property::N => convert_n,
        Property::Nickname => convert_nickname,
        Property::Bday => convert_bday,
        Property::Adr => convert_adr,
        Property::Tel => convert_tel,
        Property::Email => convert_email,
        Property::Org => convert_org,
        Property::Note => convert_note,
        Property::Url => convert_url,
        Property::Begin | Property::Version | Property::End => return None,
    };
    Some(LineParser::new(property, convert))
}

/// Applies the shared parameters, builds, and wraps the entry.
fn finish<B>(mut builder: B, parameters: &ParsedParameters) -> Result<Converted, String>
where
    B: EntryBuilder,
    B::Output: Into<PropertyEntry>,
{
    *builder.params_mut() = parameters.builder();
    builder
        .build()
        .map(|entry| Converted::Entry(entry.into()))
        .map_err(|err| err.to_string())
}

/// Splits a structured value into at most `max` components, padding the
/// missing trailing ones.
fn components(property: Property, value: &str, max: usize) -> Result<Vec<Vec<String>>, String> {
    let raw = split_structured(value);
    if raw.len() > max {
        return Err(format!(
            "{property} has {} components, expected at most {max}",
            raw.len()
        ));
    }
    let mut parts: Vec<Vec<String>> = raw.into_iter().map(split_component).collect();
    parts.resize_with(max, Vec::new);
    Ok(parts)
}

fn convert_kind(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    let kind = Kind::from_str(&unescape_text(value)).map_err(|e| e.to_string())?;
    finish(KindProperty::builder(kind), parameters)
}

fn convert_fn(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    finish(FnProperty::builder(unescape_text(value)), parameters)
}

fn convert_n(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    let mut parts = components(Property::N, value, 5)?.into_iter();
    let mut next = || parts.next().unwrap_or_default();
    let builder = NProperty::builder()
        .family_names(next())
        .given_names(next())
        .additional_names(next())
        .honorific_prefixes(next())
        .honorific_suffixes(next());
    finish(builder, parameters)
}

fn convert_nickname(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    finish(NicknameProperty::builder(unescape_text(value)), parameters)
}

fn convert_bday(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    let calscale = match parameters.calscale.as_deref() {
        None => None,
        Some(raw) => match Calscale::from_name(raw) {
            Some(calscale) => Some(calscale),
            None => return Ok(Converted::Ignored(format!("unsupported CALSCALE={raw}"))),
        },
    };

    let value_type = parameters
        .value_type
        .unwrap_or(Property::Bday.meta().default_value_type);
    let builder = match value_type {
        ValueType::Text => BdayProperty::text(unescape_text(value)),
        _ => {
            let date = parse_date(value).map_err(|e| e.to_string())?;
            let builder = BdayProperty::date(date);
            match calscale {
                Some(calscale) => builder.calscale(calscale),
                None => builder,
            }
        }
    };
    finish(builder, parameters)
}

fn convert_adr(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    let mut parts = components(Property::Adr, value, 7)?.into_iter();
    let mut next = || parts.next().unwrap_or_default();
    let mut builder = AdrProperty::builder()
        .po_box(next())
        .extended(next())
        .street(next())
        .locality(next())
        .region(next())
        .postal_code(next())
        .country(next());
    if let Some(label) = &parameters.label {
        builder = builder.label(label.clone());
    }
    finish(builder, parameters)
}

fn convert_tel(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    let builder = match parameters.value_type {
        Some(ValueType::Uri) => TelProperty::builder(value).value_type(ValueType::Uri),
        _ => TelProperty::builder(unescape_text(value)),
    };
    finish(builder, parameters)
}

fn convert_email(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    finish(EmailProperty::builder(unescape_text(value)), parameters)
}

fn convert_org(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    let mut parts = split_structured(value).into_iter().map(unescape_text);
    let name = parts.next().unwrap_or_default();
    finish(OrgProperty::builder(name).units(parts), parameters)
}

fn convert_note(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    finish(NoteProperty::builder(unescape_text(value)), parameters)
}

fn convert_url(parameters: &ParsedParameters, value: &str) -> Result<Converted, String> {
    finish(UrlProperty::builder(value), parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{
        BdayValue, Entry, TelValue, TypeListStyle, TypeParameter, Value,
    };

    fn run(property: Property, params: &str, value: Option<&str>) -> LineParser {
        let mut parser = parser_for(property).unwrap();
        parser.reset(params, value);
        parser.parse();
        parser
    }

    fn entry(property: Property, params: &str, value: &str) -> PropertyEntry {
        let parser = run(property, params, Some(value));
        assert!(parser.is_valid(), "{:?}", parser.outcome());
        parser.get_entry().unwrap()
    }

    #[test]
    fn structural_properties_have_no_parser() {
        assert!(parser_for(Property::Begin).is_none());
        assert!(parser_for(Property::Version).is_none());
        assert!(parser_for(Property::End).is_none());
        for property in Property::BODY {
            assert_eq!(parser_for(property).unwrap().property(), property);
        }
    }

    #[test]
    fn lifecycle() {
        let mut parser = parser_for(Property::Fn).unwrap();
        assert!(!parser.is_done());
        assert_eq!(parser.outcome(), &ParseOutcome::Pending);

        parser.reset("", Some("J. Doe"));
        parser.parse();
        assert!(parser.is_done());
        assert!(parser.is_valid());
        assert!(parser.parameters().is_some());

        parser.reset(";VALUE=uri", Some("x"));
        assert!(!parser.is_done());
        parser.parse();
        assert!(!parser.is_valid());
        assert!(parser.get_entry().is_none());
    }

    #[test]
    fn adr_with_geo() {
        let PropertyEntry::Adr(adr) = entry(
            Property::Adr,
            ";GEO=\"geo:12.3457,78.910\"",
            ";;123 Main Street;Any Town;CA;91921-1234;U.S.A.",
        ) else {
            panic!("expected ADR");
        };
        assert!(adr.po_box().is_empty());
        assert!(adr.extended().is_empty());
        assert_eq!(adr.street(), vec!["123 Main Street"]);
        assert_eq!(adr.locality(), vec!["Any Town"]);
        assert_eq!(adr.region(), vec!["CA"]);
        assert_eq!(adr.postal_code(), vec!["91921-1234"]);
        assert_eq!(adr.country(), vec!["U.S.A."]);
    }

    #[test]
    fn adr_label_and_short_value() {
        let PropertyEntry::Adr(adr) = entry(Property::Adr, ";LABEL=\"PO 1\\nTown\"", ";;Main")
        else {
            panic!("expected ADR");
        };
        assert_eq!(adr.label(), Some("PO 1\nTown"));
        assert_eq!(adr.street(), vec!["Main"]);
        assert!(adr.country().is_empty());
    }

    #[test]
    fn too_many_components() {
        assert!(!run(Property::N, "", Some("a;b;c;d;e;f")).is_valid());
        assert!(!run(Property::Adr, "", Some(";;;;;;;")).is_valid());
    }

    #[test]
    fn n_lists() {
        let PropertyEntry::N(n) = entry(Property::N, "", r"Public;John;Quinlan;Mr.;Esq.,Jr\,III")
        else {
            panic!("expected N");
        };
        assert_eq!(n.family_names(), vec!["Public"]);
        assert_eq!(n.given_names(), vec!["John"]);
        assert_eq!(n.additional_names(), vec!["Quinlan"]);
        assert_eq!(n.honorific_prefixes(), vec!["Mr."]);
        assert_eq!(n.honorific_suffixes(), vec!["Esq.", "Jr,III"]);
    }

    #[test]
    fn empty_values_are_valid() {
        let PropertyEntry::Nickname(nick) = entry(Property::Nickname, "", "") else {
            panic!("expected NICKNAME");
        };
        assert_eq!(nick.value(), "");
        assert_eq!(nick.serialize(), "NICKNAME:\r\n");

        assert!(run(Property::Note, "", None).is_valid());
    }

    #[test]
    fn text_is_unescaped() {
        let PropertyEntry::Note(note) = entry(Property::Note, "", r"line one\nline two\, ok") else {
            panic!("expected NOTE");
        };
        assert_eq!(note.value(), "line one\nline two, ok");
    }

    #[test]
    fn kind_is_case_insensitive() {
        let PropertyEntry::Kind(kind) = entry(Property::Kind, "", "ORG") else {
            panic!("expected KIND");
        };
        assert_eq!(kind.kind(), Kind::Org);
        assert_eq!(kind.render_value(), "org");
        assert!(!run(Property::Kind, "", Some("robot")).is_valid());
    }

    #[test]
    fn org_name_and_units() {
        let PropertyEntry::Org(org) = entry(Property::Org, "", r"ABC\, Inc.;North American Division;Marketing")
        else {
            panic!("expected ORG");
        };
        assert_eq!(org.name(), "ABC, Inc.");
        assert_eq!(org.units(), vec!["North American Division", "Marketing"]);
    }

    #[test]
    fn tel_text_and_uri() {
        let PropertyEntry::Tel(tel) = entry(Property::Tel, ";TYPE=fax;TYPE=voice", "+1 555 0100")
        else {
            panic!("expected TEL");
        };
        assert!(matches!(tel.tel_value(), TelValue::Text(_)));
        assert_eq!(tel.params().list_style(), TypeListStyle::Parameters);
        assert_eq!(
            tel.params().types().iter().copied().collect::<Vec<_>>(),
            vec![TypeParameter::Fax, TypeParameter::Voice]
        );

        let PropertyEntry::Tel(tel) = entry(Property::Tel, ";VALUE=uri", "tel:+1-555-555-5555")
        else {
            panic!("expected TEL");
        };
        assert!(matches!(tel.tel_value(), TelValue::Uri(_)));

        assert!(!run(Property::Tel, ";VALUE=uri", Some("555-5555")).is_valid());
    }

    #[test]
    fn url_requires_scheme() {
        assert!(run(Property::Url, "", Some("https://example.com/")).is_valid());
        assert!(!run(Property::Url, "", Some("example.com")).is_valid());
        assert!(!run(Property::Url, "", None).is_valid());
    }

    #[test]
    fn bday_forms() {
        let PropertyEntry::Bday(bday) = entry(Property::Bday, "", "--0412") else {
            panic!("expected BDAY");
        };
        assert_eq!(bday.as_date().map(Value::render).as_deref(), Some("--0412"));

        let PropertyEntry::Bday(bday) = entry(Property::Bday, ";VALUE=text", "circa 1800") else {
            panic!("expected BDAY");
        };
        assert_eq!(bday.as_text(), Some("circa 1800"));
        assert!(matches!(bday.value(), BdayValue::Text(_)));

        let PropertyEntry::Bday(bday) = entry(Property::Bday, ";CALSCALE=GREGORIAN", "19850412")
        else {
            panic!("expected BDAY");
        };
        assert_eq!(bday.calscale(), Some(Calscale::Gregorian));

        assert!(!run(Property::Bday, "", Some("1985-02-30")).is_valid());
    }

    #[test]
    fn bday_other_calendar_is_ignored() {
        let parser = run(Property::Bday, ";CALSCALE=julian", Some("19850412"));
        assert!(parser.is_valid());
        assert!(parser.get_entry().is_none());
        assert!(matches!(parser.outcome(), ParseOutcome::Ignored(_)));
    }

    #[test]
    fn illegal_parameters_invalidate() {
        let parser = run(Property::N, ";TYPE=home", Some("a;b;;;"));
        assert_eq!(
            parser.outcome(),
            &ParseOutcome::Invalid("parameter TYPE is not allowed".to_string())
        );
    }

    #[test]
    fn unknown_parameters_are_kept_aside() {
        let parser = run(Property::Email, ";X-FOO=1", Some("a@example.com"));
        assert!(parser.is_valid());
        assert_eq!(parser.parameters().unwrap().unknown, vec!["X-FOO"]);
    }
}
