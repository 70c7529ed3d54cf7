//! Delivery addressing (RFC 6350 §6.3).

use super::params::{EntryParams, ParamsBuilder};
use super::{Entry, EntryBuilder, strings};
use crate::rfc::vcard::core::error::VCardResult;
use crate::rfc::vcard::core::parameter::{Parameter, ValueType};
use crate::rfc::vcard::core::property::Property;
use crate::rfc::vcard::core::value::{ListComponent, ParamText, Value};

/// ADR: a delivery address of seven list-valued components.
///
/// The optional LABEL holds the formatted address and is always written
/// quoted.
#[derive(Debug, Clone, PartialEq)]
pub struct AdrProperty {
    label: Option<ParamText>,
    po_box: ListComponent,
    extended: ListComponent,
    street: ListComponent,
    locality: ListComponent,
    region: ListComponent,
    postal_code: ListComponent,
    country: ListComponent,
    params: EntryParams,
}

impl AdrProperty {
    #[must_use]
    pub fn builder() -> AdrBuilder {
        AdrBuilder::default()
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_ref().map(ParamText::as_str)
    }

    #[must_use]
    pub fn po_box(&self) -> Vec<&str> {
        self.po_box.values()
    }

    #[must_use]
    pub fn extended(&self) -> Vec<&str> {
        self.extended.values()
    }

    #[must_use]
    pub fn street(&self) -> Vec<&str> {
        self.street.values()
    }

    #[must_use]
    pub fn locality(&self) -> Vec<&str> {
        self.locality.values()
    }

    #[must_use]
    pub fn region(&self) -> Vec<&str> {
        self.region.values()
    }

    #[must_use]
    pub fn postal_code(&self) -> Vec<&str> {
        self.postal_code.values()
    }

    #[must_use]
    pub fn country(&self) -> Vec<&str> {
        self.country.values()
    }
}

impl Entry for AdrProperty {
    const PROPERTY: Property = Property::Adr;

    fn params(&self) -> &EntryParams {
        &self.params
    }

    fn render_value(&self) -> String {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
        .map(ListComponent::render)
        .join(";")
    }

    fn extra_params(&self) -> Vec<(Parameter, String)> {
        self.label
            .iter()
            .map(|label| (Parameter::Label, label.render_quoted()))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdrBuilder {
    label: Option<String>,
    po_box: Vec<String>,
    extended: Vec<String>,
    street: Vec<String>,
    locality: Vec<String>,
    region: Vec<String>,
    postal_code: Vec<String>,
    country: Vec<String>,
    params: ParamsBuilder,
}

impl AdrBuilder {
    /// LABEL; an empty label is omitted.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn po_box<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.po_box = strings(values);
        self
    }

    #[must_use]
    pub fn extended<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.extended = strings(values);
        self
    }

    #[must_use]
    pub fn street<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.street = strings(values);
        self
    }

    #[must_use]
    pub fn locality<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.locality = strings(values);
        self
    }

    #[must_use]
    pub fn region<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.region = strings(values);
        self
    }

    #[must_use]
    pub fn postal_code<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.postal_code = strings(values);
        self
    }

    #[must_use]
    pub fn country<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.country = strings(values);
        self
    }
}

impl EntryBuilder for AdrBuilder {
    type Output = AdrProperty;

    fn params_mut(&mut self) -> &mut ParamsBuilder {
        &mut self.params
    }

    fn build(self) -> VCardResult<AdrProperty> {
        let label = self
            .label
            .filter(|l| !l.is_empty())
            .map(ParamText::new)
            .transpose()?;

        Ok(AdrProperty {
            label,
            po_box: ListComponent::new(&self.po_box)?,
            extended: ListComponent::new(&self.extended)?,
            street: ListComponent::new(&self.street)?,
            locality: ListComponent::new(&self.locality)?,
            region: ListComponent::new(&self.region)?,
            postal_code: ListComponent::new(&self.postal_code)?,
            country: ListComponent::new(&self.country)?,
            params: self.params.build(Property::Adr, ValueType::Text)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::error::VCardError;
    use crate::rfc::vcard::core::parameter::TypeParameter;

    #[test]
    fn adr_renders_seven_components() {
        let adr = AdrProperty::builder()
            .street(["123 Main Street"])
            .locality(["Any Town"])
            .region(["CA"])
            .postal_code(["91921-1234"])
            .country(["U.S.A."])
            .type_param(TypeParameter::Home)
            .build()
            .unwrap();
        assert_eq!(
            adr.serialize(),
            "ADR;TYPE=HOME:;;123 Main Street;Any Town;CA;91921-1234;U.S.A.\r\n"
        );
        assert!(adr.po_box().is_empty());
        assert_eq!(adr.street(), vec!["123 Main Street"]);
    }

    #[test]
    fn label_is_always_quoted() {
        let adr = AdrProperty::builder()
            .label("Mr. John Q. Public\n123 Main St.")
            .street(["123 Main St."])
            .build()
            .unwrap();
        assert_eq!(
            adr.serialize(),
            "ADR;LABEL=\"Mr. John Q. Public\\n123 Main St.\":;;123 Main St.;;;;\r\n"
        );
        assert_eq!(adr.label(), Some("Mr. John Q. Public\n123 Main St."));
    }

    #[test]
    fn empty_label_omitted() {
        let adr = AdrProperty::builder().label("").build().unwrap();
        assert_eq!(adr.label(), None);
        assert_eq!(adr.serialize(), "ADR:;;;;;;\r\n");
    }

    #[test]
    fn label_with_quote_rejected() {
        let err = AdrProperty::builder()
            .label("the \"old\" house")
            .build()
            .unwrap_err();
        assert!(matches!(err, VCardError::IllegalCharacters { .. }));
    }

    #[test]
    fn adr_rejects_phone_types() {
        let err = AdrProperty::builder()
            .type_param(TypeParameter::Cell)
            .build()
            .unwrap_err();
        assert!(matches!(err, VCardError::IllegalTypeParameter { .. }));
    }
}
