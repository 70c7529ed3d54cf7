//! Explanatory properties (RFC 6350 §6.7).

use super::params::{EntryParams, ParamsBuilder};
use super::{Entry, EntryBuilder};
use crate::rfc::vcard::core::error::VCardResult;
use crate::rfc::vcard::core::parameter::ValueType;
use crate::rfc::vcard::core::property::Property;
use crate::rfc::vcard::core::value::{PlainText, Uri, Value};

/// NOTE: free-form supplemental text.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteProperty {
    value: PlainText,
    params: EntryParams,
}

impl NoteProperty {
    #[must_use]
    pub fn builder(value: impl Into<String>) -> NoteBuilder {
        NoteBuilder {
            value: value.into(),
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl Entry for NoteProperty {
    const PROPERTY: Property = Property::Note;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        self.value.render()
    }
}

#[derive(Debug, Clone)]
pub struct NoteBuilder {
    value: String,
    params: ParamsBuilder,
}

impl EntryBuilder for NoteBuilder {
    type Output = NoteProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<NoteProperty> {
        Ok(NoteProperty {
            value: PlainText::new(&self.value)?,
            params: self.params.build(Property::Note, ValueType::Text)?,
        })
    }
}

/// URL: a web resource associated with the object.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlProperty {
    value: Uri,
    params: EntryParams,
}

impl UrlProperty {
    #[must_use]
    pub fn builder(value: impl Into<String>) -> UrlBuilder {
        UrlBuilder {
            value: value.into(),
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl Entry for UrlProperty {
    const PROPERTY: Property = Property::Url;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        self.value.render()
    }
}

#[derive(Debug, Clone)]
pub struct UrlBuilder {
    value: String,
    params: ParamsBuilder,
}

impl EntryBuilder for UrlBuilder {
    type Output = UrlProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<UrlProperty> {
        Ok(UrlProperty {
            value: Uri::new(self.value)?,
            params: self.params.build(Property::Url, ValueType::Uri)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::error::VCardError;

    #[test]
    fn note_escapes_newlines() {
        let note = NoteProperty::builder("first\nsecond").build().unwrap();
        assert_eq!(note.serialize(), "NOTE:first\\nsecond\r\n");
    }

    #[test]
    fn url_default_value_type_is_not_written() {
        let url = UrlProperty::builder("http://example.org/restaurant.french/~chezchic.html")
            .build()
            .unwrap();
        assert_eq!(
            url.serialize(),
            "URL:http://example.org/restaurant.french/~chezchic.html\r\n"
        );
    }

    #[test]
    fn url_requires_scheme() {
        let err = UrlProperty::builder("www.example.com").build().unwrap_err();
        assert_eq!(err, VCardError::MissingScheme("www.example.com".into()));
    }
}
