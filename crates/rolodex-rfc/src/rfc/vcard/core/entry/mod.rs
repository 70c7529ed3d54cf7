//! Property entries: one validated, immutable value per property occurrence.
//!
//! Every concrete entry owns an [`EntryParams`] and is produced by a builder
//! implementing [`EntryBuilder`]. [`PropertyEntry`] is the closed sum over
//! all of them.

mod addressing;
mod communications;
mod explanatory;
mod identification;
mod organizational;
mod params;

use std::fmt;

pub use addressing::{AdrBuilder, AdrProperty};
pub use communications::{EmailBuilder, EmailProperty, TelBuilder, TelProperty, TelValue};
pub use explanatory::{NoteBuilder, NoteProperty, UrlBuilder, UrlProperty};
pub use identification::{
    BdayBuilder, BdayProperty, BdayValue, FnBuilder, FnProperty, KindBuilder, KindProperty,
    NBuilder, NProperty, NicknameBuilder, NicknameProperty,
};
pub use organizational::{OrgBuilder, OrgProperty};
pub use params::{EntryParams, ParamsBuilder};

use super::error::VCardResult;
use super::parameter::{Parameter, TypeListStyle, TypeParameter, ValueType};
use super::property::Property;
use crate::rfc::vcard::build::serializer::serialize_entry;

/// Behaviour common to every concrete entry.
pub trait Entry: Clone + fmt::Debug + PartialEq {
    const PROPERTY: Property;

    fn params(&self) -> &EntryParams;

    /// Value type of this entry; `VALUE=` is written only when it differs
    /// from the registry default.
    fn value_type(&self) -> ValueType {
        Self::PROPERTY.meta().default_value_type
    }

    /// The escaped value, as written after the colon.
    fn render_value(&self) -> String;

    /// Property-specific parameters, rendered, in output order.
    fn extra_params(&self) -> Vec<(Parameter, String)> {
        Vec::new()
    }

    /// Renders the folded content line including its CRLF.
    fn serialize(&self) -> String {
        serialize_entry(self)
    }
}

/// Shared setters of every entry builder.
pub trait EntryBuilder: Sized {
    type Output;

    fn params_mut(&mut self) -> &mut ParamsBuilder;

    /// Validates and produces the entry.
    ///
    /// ## Errors
    /// Returns a [`super::error::VCardError`] describing the first violated
    /// constraint.
    fn build(self) -> VCardResult<Self::Output>;

    #[must_use]
    fn altid(mut self, altid: impl Into<String>) -> Self {
        self.params_mut().altid = Some(altid.into());
        self
    }

    /// PREF, validated to 1..=100 on build.
    #[must_use]
    fn pref(mut self, pref: i64) -> Self {
        self.params_mut().pref = Some(pref);
        self
    }

    #[must_use]
    fn type_param(mut self, value: TypeParameter) -> Self {
        self.params_mut().types.insert(value);
        self
    }

    #[must_use]
    fn type_params(mut self, values: impl IntoIterator<Item = TypeParameter>) -> Self {
        self.params_mut().types.extend(values);
        self
    }

    #[must_use]
    fn list_style(mut self, style: TypeListStyle) -> Self {
        self.params_mut().list_style = style;
        self
    }
}

/// Collects builder list arguments.
fn strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Vec<String> {
    values.into_iter().map(Into::into).collect()
}

/// Any entry of a card.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyEntry {
    Kind(KindProperty),
    Fn(FnProperty),
    N(NProperty),
    Nickname(NicknameProperty),
    Bday(BdayProperty),
    Adr(AdrProperty),
    Tel(TelProperty),
    Email(EmailProperty),
    Org(OrgProperty),
    Note(NoteProperty),
    Url(UrlProperty),
}

impl PropertyEntry {
    #[must_use]
    pub const fn property(&self) -> Property {
        match self {
            Self::Kind(_) => Property::Kind,
            Self::Fn(_) => Property::Fn,
            Self::N(_) => Property::N,
            Self::Nickname(_) => Property::Nickname,
            Self::Bday(_) => Property::Bday,
            Self::Adr(_) => Property::Adr,
            Self::Tel(_) => Property::Tel,
            Self::Email(_) => Property::Email,
            Self::Org(_) => Property::Org,
            Self::Note(_) => Property::Note,
            Self::Url(_) => Property::Url,
        }
    }

    #[must_use]
    pub fn params(&self) -> &EntryParams {
        match self {
            Self::Kind(e) => e.params(),
            Self::Fn(e) => e.params(),
            Self::N(e) => e.params(),
            Self::Nickname(e) => e.params(),
            Self::Bday(e) => e.params(),
            Self::Adr(e) => e.params(),
            Self::Tel(e) => e.params(),
            Self::Email(e) => e.params(),
            Self::Org(e) => e.params(),
            Self::Note(e) => e.params(),
            Self::Url(e) => e.params(),
        }
    }

    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Kind(e) => e.value_type(),
            Self::Fn(e) => e.value_type(),
            Self::N(e) => e.value_type(),
            Self::Nickname(e) => e.value_type(),
            Self::Bday(e) => e.value_type(),
            Self::Adr(e) => e.value_type(),
            Self::Tel(e) => e.value_type(),
            Self::Email(e) => e.value_type(),
            Self::Org(e) => e.value_type(),
            Self::Note(e) => e.value_type(),
            Self::Url(e) => e.value_type(),
        }
    }

    #[must_use]
    pub fn serialize(&self) -> String {
        match self {
            Self::Kind(e) => e.serialize(),
            Self::Fn(e) => e.serialize(),
            Self::N(e) => e.serialize(),
            Self::Nickname(e) => e.serialize(),
            Self::Bday(e) => e.serialize(),
            Self::Adr(e) => e.serialize(),
            Self::Tel(e) => e.serialize(),
            Self::Email(e) => e.serialize(),
            Self::Org(e) => e.serialize(),
            Self::Note(e) => e.serialize(),
            Self::Url(e) => e.serialize(),
        }
    }
}

impl From<KindProperty> for PropertyEntry {
    fn from(e: KindProperty) -> Self {
        Self::Kind(e)
    }
}

impl From<FnProperty> for PropertyEntry {
    fn from(e: FnProperty) -> Self {
        Self::Fn(e)
    }
}

impl From<NProperty> for PropertyEntry {
    fn from(e: NProperty) -> Self {
        Self::N(e)
    }
}

impl From<NicknameProperty> for PropertyEntry {
    fn from(e: NicknameProperty) -> Self {
        Self::Nickname(e)
    }
}

impl From<BdayProperty> for PropertyEntry {
    fn from(e: BdayProperty) -> Self {
        Self::Bday(e)
    }
}

impl From<AdrProperty> for PropertyEntry {
    fn from(e: AdrProperty) -> Self {
        Self::Adr(e)
    }
}

impl From<TelProperty> for PropertyEntry {
    fn from(e: TelProperty) -> Self {
        Self::Tel(e)
    }
}

impl From<EmailProperty> for PropertyEntry {
    fn from(e: EmailProperty) -> Self {
        Self::Email(e)
    }
}

impl From<OrgProperty> for PropertyEntry {
    fn from(e: OrgProperty) -> Self {
        Self::Org(e)
    }
}

impl From<NoteProperty> for PropertyEntry {
    fn from(e: NoteProperty) -> Self {
        Self::Note(e)
    }
}

impl From<UrlProperty> for PropertyEntry {
    fn from(e: UrlProperty) -> Self {
        Self::Url(e)
    }
}
