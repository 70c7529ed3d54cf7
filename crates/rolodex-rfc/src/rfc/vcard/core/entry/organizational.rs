//! Organizational properties (RFC 6350 §6.6).

use super::params::{EntryParams, ParamsBuilder};
use super::{Entry, EntryBuilder};
use crate::rfc::vcard::core::error::VCardResult;
use crate::rfc::vcard::core::parameter::ValueType;
use crate::rfc::vcard::core::property::Property;
use crate::rfc::vcard::core::value::{Component, Value};

/// ORG: organization name followed by zero or more unit names.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgProperty {
    name: Component,
    units: Vec<Component>,
    params: EntryParams,
}

impl OrgProperty {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> OrgBuilder {
        OrgBuilder {
            name: name.into(),
            units: Vec::new(),
            params: ParamsBuilder::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub fn units(&self) -> Vec<&str> {
        self.units.iter().map(Component::as_str).collect()
    }
}

impl Entry for OrgProperty {
    const PROPERTY: Property = Property::Org;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        std::iter::once(&self.name)
            .chain(&self.units)
            .map(Component::render)
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[derive(Debug, Clone)]
pub struct OrgBuilder {
    name: String,
    units: Vec<String>,
    params: ParamsBuilder,
}

impl OrgBuilder {
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.units.push(unit.into());
        self
    }

    #[must_use]
    pub fn units<S: Into<String>>(mut self, units: impl IntoIterator<Item = S>) -> Self {
        self.units.extend(units.into_iter().map(Into::into));
        self
    }
}

impl EntryBuilder for OrgBuilder {
    type Output = OrgProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<OrgProperty> {
        Ok(OrgProperty {
            name: Component::new(&self.name)?,
            units: self
                .units
                .iter()
                .map(Component::new)
                .collect::<VCardResult<_>>()?,
            params: self.params.build(Property::Org, ValueType::Text)?,
        })
    }
}
