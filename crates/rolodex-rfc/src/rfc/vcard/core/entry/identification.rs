//! General and identification properties (RFC 6350 §6.1, §6.2).

use super::params::{EntryParams, ParamsBuilder};
use super::{Entry, EntryBuilder, strings};
use crate::rfc::vcard::core::datetime::StructuredDate;
use crate::rfc::vcard::core::error::{VCardError, VCardResult};
use crate::rfc::vcard::core::kind::Kind;
use crate::rfc::vcard::core::parameter::{Calscale, Parameter, ValueType};
use crate::rfc::vcard::core::property::Property;
use crate::rfc::vcard::core::value::{ListComponent, PlainText, Value};

// ---------------------------------------------------------------------------
// KIND

/// KIND: the kind of object the card describes.
#[derive(Debug, Clone, PartialEq)]
pub struct KindProperty {
    kind: Kind,
    params: EntryParams,
}

impl KindProperty {
    #[must_use]
    pub fn builder(kind: Kind) -> KindBuilder {
        KindBuilder {
            kind,
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }
}

impl Entry for KindProperty {
    const PROPERTY: Property = Property::Kind;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        self.kind.as_str().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct KindBuilder {
    kind: Kind,
    params: ParamsBuilder,
}

impl EntryBuilder for KindBuilder {
    type Output = KindProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<KindProperty> {
        Ok(KindProperty {
            kind: self.kind,
            params: self.params.build(Property::Kind, ValueType::Text)?,
        })
    }
}

// ---------------------------------------------------------------------------
// FN

/// FN: the formatted name.
#[derive(Debug, Clone, PartialEq)]
pub struct FnProperty {
    value: PlainText,
    params: EntryParams,
}

impl FnProperty {
    #[must_use]
    pub fn builder(value: impl Into<String>) -> FnBuilder {
        FnBuilder {
            value: value.into(),
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl Entry for FnProperty {
    const PROPERTY: Property = Property::Fn;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        self.value.render()
    }
}

#[derive(Debug, Clone)]
pub struct FnBuilder {
    value: String,
    params: ParamsBuilder,
}

impl EntryBuilder for FnBuilder {
    type Output = FnProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<FnProperty> {
        Ok(FnProperty {
            value: PlainText::new(&self.value)?,
            params: self.params.build(Property::Fn, ValueType::Text)?,
        })
    }
}

// ---------------------------------------------------------------------------
// N

/// N: the structured name, five list-valued components.
#[derive(Debug, Clone, PartialEq)]
pub struct NProperty {
    family_names: ListComponent,
    given_names: ListComponent,
    additional_names: ListComponent,
    honorific_prefixes: ListComponent,
    honorific_suffixes: ListComponent,
    params: EntryParams,
}

impl NProperty {
    #[must_use]
    pub fn builder() -> NBuilder {
        NBuilder::default()
    }

    #[must_use]
    pub fn family_names(&self) -> Vec<&str> {
        self.family_names.values()
    }

    #[must_use]
    pub fn given_names(&self) -> Vec<&str> {
        self.given_names.values()
    }

    #[must_use]
    pub fn additional_names(&self) -> Vec<&str> {
        self.additional_names.values()
    }

    #[must_use]
    pub fn honorific_prefixes(&self) -> Vec<&str> {
        self.honorific_prefixes.values()
    }

    #[must_use]
    pub fn honorific_suffixes(&self) -> Vec<&str> {
        self.honorific_suffixes.values()
    }
}

impl Entry for NProperty {
    const PROPERTY: Property = Property::N;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        [
            &self.family_names,
            &self.given_names,
            &self.additional_names,
            &self.honorific_prefixes,
            &self.honorific_suffixes,
        ]
        .map(ListComponent::render)
        .join(";")
    }
}

#[derive(Debug, Clone, Default)]
pub struct NBuilder {
    family_names: Vec<String>,
    given_names: Vec<String>,
    additional_names: Vec<String>,
    honorific_prefixes: Vec<String>,
    honorific_suffixes: Vec<String>,
    params: ParamsBuilder,
}

impl NBuilder {
    #[must_use]
    pub fn family_names<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.family_names = strings(values);
        self
    }

    #[must_use]
    pub fn given_names<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.given_names = strings(values);
        self
    }

    #[must_use]
    pub fn additional_names<S: Into<String>>(
        mut self,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.additional_names = strings(values);
        self
    }

    #[must_use]
    pub fn honorific_prefixes<S: Into<String>>(
        mut self,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.honorific_prefixes = strings(values);
        self
    }

    #[must_use]
    pub fn honorific_suffixes<S: Into<String>>(
        mut self,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.honorific_suffixes = strings(values);
        self
    }
}

impl EntryBuilder for NBuilder {
    type Output = NProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<NProperty> {
        Ok(NProperty {
            family_names: ListComponent::new(&self.family_names)?,
            given_names: ListComponent::new(&self.given_names)?,
            additional_names: ListComponent::new(&self.additional_names)?,
            honorific_prefixes: ListComponent::new(&self.honorific_prefixes)?,
            honorific_suffixes: ListComponent::new(&self.honorific_suffixes)?,
            params: self.params.build(Property::N, ValueType::Text)?,
        })
    }
}

// ---------------------------------------------------------------------------
// NICKNAME

/// NICKNAME: a familiar name.
#[derive(Debug, Clone, PartialEq)]
pub struct NicknameProperty {
    value: PlainText,
    params: EntryParams,
}

impl NicknameProperty {
    #[must_use]
    pub fn builder(value: impl Into<String>) -> NicknameBuilder {
        NicknameBuilder {
            value: value.into(),
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl Entry for NicknameProperty {
    const PROPERTY: Property = Property::Nickname;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        self.value.render()
    }
}

#[derive(Debug, Clone)]
pub struct NicknameBuilder {
    value: String,
    params: ParamsBuilder,
}

impl EntryBuilder for NicknameBuilder {
    type Output = NicknameProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<NicknameProperty> {
        Ok(NicknameProperty {
            value: PlainText::new(&self.value)?,
            params: self.params.build(Property::Nickname, ValueType::Text)?,
        })
    }
}

// ---------------------------------------------------------------------------
// BDAY

/// Value of a BDAY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BdayValue {
    /// `VALUE=date-and-or-time`, the default.
    Date(StructuredDate),
    /// `VALUE=text`, free text such as "circa 1800".
    Text(PlainText),
}

/// BDAY: the birth date.
#[derive(Debug, Clone, PartialEq)]
pub struct BdayProperty {
    value: BdayValue,
    calscale: Option<Calscale>,
    params: EntryParams,
}

impl BdayProperty {
    #[must_use]
    pub fn date(date: StructuredDate) -> BdayBuilder {
        BdayBuilder {
            value: BdayInput::Date(date),
            calscale: None,
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> BdayBuilder {
        BdayBuilder {
            value: BdayInput::Text(text.into()),
            calscale: None,
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub const fn value(&self) -> &BdayValue {
        &self.value
    }

    /// The date, when the value is not free text.
    #[must_use]
    pub const fn as_date(&self) -> Option<&StructuredDate> {
        match &self.value {
            BdayValue::Date(date) => Some(date),
            BdayValue::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            BdayValue::Date(_) => None,
            BdayValue::Text(text) => Some(text.as_str()),
        }
    }

    #[must_use]
    pub const fn calscale(&self) -> Option<Calscale> {
        self.calscale
    }
}

impl Entry for BdayProperty {
    const PROPERTY: Property = Property::Bday;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn value_type(&self) -> ValueType {
        match self.value {
            BdayValue::Date(_) => ValueType::DateAndOrTime,
            BdayValue::Text(_) => ValueType::Text,
        }
    }

    fn render_value(&self) -> String {
        match &self.value {
            BdayValue::Date(date) => date.render(),
            BdayValue::Text(text) => text.render(),
        }
    }

    fn extra_params(&self) -> Vec<(Parameter, String)> {
        self.calscale
            .map(|c| (Parameter::CalScale, c.as_str().to_string()))
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone)]
enum BdayInput {
    Date(StructuredDate),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct BdayBuilder {
    value: BdayInput,
    calscale: Option<Calscale>,
    params: ParamsBuilder,
}

impl BdayBuilder {
    /// CALSCALE; only legal with a date value.
    #[must_use]
    pub fn calscale(mut self, calscale: Calscale) -> Self {
        self.calscale = Some(calscale);
        self
    }
}

impl EntryBuilder for BdayBuilder {
    type Output = BdayProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<BdayProperty> {
        let value = match self.value {
            BdayInput::Date(date) => BdayValue::Date(date),
            BdayInput::Text(text) => BdayValue::Text(PlainText::new(text)?),
        };
        let value_type = match value {
            BdayValue::Date(_) => ValueType::DateAndOrTime,
            BdayValue::Text(_) => ValueType::Text,
        };

        if self.calscale.is_some()
            && !Property::Bday
                .meta()
                .allows_parameter(value_type, Parameter::CalScale)
        {
            return Err(VCardError::IllegalParameter {
                property: Property::Bday,
                parameter: Parameter::CalScale.as_str().to_string(),
            });
        }

        Ok(BdayProperty {
            value,
            calscale: self.calscale,
            params: self.params.build(Property::Bday, value_type)?,
        })
    }
}
