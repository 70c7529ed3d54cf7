//! Communications properties (RFC 6350 §6.4).

use super::params::{EntryParams, ParamsBuilder};
use super::{Entry, EntryBuilder};
use crate::rfc::vcard::core::error::{VCardError, VCardResult};
use crate::rfc::vcard::core::parameter::ValueType;
use crate::rfc::vcard::core::property::Property;
use crate::rfc::vcard::core::value::{PlainText, Uri, Value};

/// Value of a TEL entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelValue {
    /// Free-form number, the default.
    Text(PlainText),
    /// `VALUE=uri`, usually a `tel:` URI.
    Uri(Uri),
}

/// TEL: a telephone number.
#[derive(Debug, Clone, PartialEq)]
pub struct TelProperty {
    value: TelValue,
    params: EntryParams,
}

impl TelProperty {
    /// Starts a text-valued TEL; switch with [`TelBuilder::value_type`].
    #[must_use]
    pub fn builder(value: impl Into<String>) -> TelBuilder {
        TelBuilder {
            value: value.into(),
            value_type: ValueType::Text,
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match &self.value {
            TelValue::Text(text) => text.as_str(),
            TelValue::Uri(uri) => uri.as_str(),
        }
    }

    #[must_use]
    pub const fn tel_value(&self) -> &TelValue {
        &self.value
    }
}

impl Entry for TelProperty {
    const PROPERTY: Property = Property::Tel;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn value_type(&self) -> ValueType {
        match self.value {
            TelValue::Text(_) => ValueType::Text,
            TelValue::Uri(_) => ValueType::Uri,
        }
    }

    fn render_value(&self) -> String {
        match &self.value {
            TelValue::Text(text) => text.render(),
            TelValue::Uri(uri) => uri.render(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelBuilder {
    value: String,
    value_type: ValueType,
    params: ParamsBuilder,
}

impl TelBuilder {
    /// `text` (default) or `uri`; anything else fails on build.
    #[must_use]
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }
}

impl EntryBuilder for TelBuilder {
    type Output = TelProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<TelProperty> {
        let params = self.params.build(Property::Tel, self.value_type)?;
        let value = match self.value_type {
            ValueType::Text => TelValue::Text(PlainText::new(&self.value)?),
            ValueType::Uri => TelValue::Uri(Uri::new(self.value)?),
            value_type => {
                return Err(VCardError::IllegalValueType {
                    property: Property::Tel,
                    value_type,
                });
            }
        };
        Ok(TelProperty { value, params })
    }
}

/// EMAIL: an electronic mail address.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailProperty {
    value: PlainText,
    params: EntryParams,
}

impl EmailProperty {
    #[must_use]
    pub fn builder(value: impl Into<String>) -> EmailBuilder {
        EmailBuilder {
            value: value.into(),
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl Entry for EmailProperty {
    const PROPERTY: Property = Property::Email;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        self.value.render()
    }
}

#[derive(Debug, Clone)]
pub struct EmailBuilder {
    value: String,
    params: ParamsBuilder,
}

impl EntryBuilder for EmailBuilder {
    type Output = EmailProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<EmailProperty> {
        Ok(EmailProperty {
            value: PlainText::new(&self.value)?,
            params: self.params.build(Property::Email, ValueType::Text)?,
        })
    }
}
