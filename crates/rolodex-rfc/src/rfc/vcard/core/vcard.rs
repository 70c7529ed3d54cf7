//! The vCard aggregate.

use super::collection::PropertyCollection;
use super::entry::{
    AdrProperty, BdayProperty, EmailProperty, Entry, EntryBuilder, FnProperty, KindProperty,
    NProperty, NicknameProperty, NoteProperty, OrgProperty, PropertyEntry, TelProperty,
    UrlProperty,
};
use super::error::{VCardError, VCardResult};
use super::kind::Kind;
use crate::rfc::vcard::build::serializer::serialize_single;

/// A complete, validated vCard 4.0.
///
/// Built once through [`VCardBuilder`] and immutable afterwards. A card always
/// carries at least one FN.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VCard {
    kinds: PropertyCollection<KindProperty>,
    formatted_names: PropertyCollection<FnProperty>,
    names: PropertyCollection<NProperty>,
    nicknames: PropertyCollection<NicknameProperty>,
    birthdays: PropertyCollection<BdayProperty>,
    addresses: PropertyCollection<AdrProperty>,
    telephones: PropertyCollection<TelProperty>,
    emails: PropertyCollection<EmailProperty>,
    organizations: PropertyCollection<OrgProperty>,
    notes: PropertyCollection<NoteProperty>,
    urls: PropertyCollection<UrlProperty>,
}

impl VCard {
    #[must_use]
    pub fn builder() -> VCardBuilder {
        VCardBuilder::default()
    }

    /// Returns the most preferred FN value.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.formatted_names.preferred().map(FnProperty::value)
    }

    /// Returns the KIND value, `individual` when absent.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kinds.first().map(KindProperty::kind).unwrap_or_default()
    }

    #[must_use]
    pub const fn kinds(&self) -> &PropertyCollection<KindProperty> {
        &self.kinds
    }

    #[must_use]
    pub const fn formatted_names(&self) -> &PropertyCollection<FnProperty> {
        &self.formatted_names
    }

    #[must_use]
    pub const fn names(&self) -> &PropertyCollection<NProperty> {
        &self.names
    }

    #[must_use]
    pub const fn nicknames(&self) -> &PropertyCollection<NicknameProperty> {
        &self.nicknames
    }

    #[must_use]
    pub const fn birthdays(&self) -> &PropertyCollection<BdayProperty> {
        &self.birthdays
    }

    #[must_use]
    pub const fn addresses(&self) -> &PropertyCollection<AdrProperty> {
        &self.addresses
    }

    #[must_use]
    pub const fn telephones(&self) -> &PropertyCollection<TelProperty> {
        &self.telephones
    }

    #[must_use]
    pub const fn emails(&self) -> &PropertyCollection<EmailProperty> {
        &self.emails
    }

    #[must_use]
    pub const fn organizations(&self) -> &PropertyCollection<OrgProperty> {
        &self.organizations
    }

    #[must_use]
    pub const fn notes(&self) -> &PropertyCollection<NoteProperty> {
        &self.notes
    }

    #[must_use]
    pub const fn urls(&self) -> &PropertyCollection<UrlProperty> {
        &self.urls
    }

    /// All entries in serialization order.
    #[must_use]
    pub fn entries(&self) -> Vec<PropertyEntry> {
        let mut entries = Vec::new();
        entries.extend(self.kinds.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.formatted_names.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.names.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.nicknames.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.birthdays.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.addresses.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.telephones.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.emails.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.organizations.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.notes.iter().cloned().map(PropertyEntry::from));
        entries.extend(self.urls.iter().cloned().map(PropertyEntry::from));
        entries
    }

    /// Renders the card, `BEGIN:VCARD` through `END:VCARD`, CRLF-terminated.
    #[must_use]
    pub fn serialize(&self) -> String {
        serialize_single(self)
    }

    fn insert(&mut self, entry: PropertyEntry) -> VCardResult<()> {
        match entry {
            PropertyEntry::Kind(e) => self.kinds.insert(e),
            PropertyEntry::Fn(e) => self.formatted_names.insert(e),
            PropertyEntry::N(e) => self.names.insert(e),
            PropertyEntry::Nickname(e) => self.nicknames.insert(e),
            PropertyEntry::Bday(e) => self.birthdays.insert(e),
            PropertyEntry::Adr(e) => self.addresses.insert(e),
            PropertyEntry::Tel(e) => self.telephones.insert(e),
            PropertyEntry::Email(e) => self.emails.insert(e),
            PropertyEntry::Org(e) => self.organizations.insert(e),
            PropertyEntry::Note(e) => self.notes.insert(e),
            PropertyEntry::Url(e) => self.urls.insert(e),
        }
    }

    fn validate(&self) -> VCardResult<()> {
        check(&self.kinds)?;
        check(&self.formatted_names)?;
        check(&self.names)?;
        check(&self.nicknames)?;
        check(&self.birthdays)?;
        check(&self.addresses)?;
        check(&self.telephones)?;
        check(&self.emails)?;
        check(&self.organizations)?;
        check(&self.notes)?;
        check(&self.urls)
    }
}

fn check<E: Entry>(collection: &PropertyCollection<E>) -> VCardResult<()> {
    if collection.is_valid() {
        Ok(())
    } else {
        Err(VCardError::Cardinality {
            property: E::PROPERTY,
            content: collection.render(),
        })
    }
}

/// Accumulates entries for one card.
#[derive(Debug, Clone, Default)]
pub struct VCardBuilder {
    entries: Vec<PropertyEntry>,
}

impl VCardBuilder {
    #[must_use]
    pub fn add(mut self, entry: impl Into<PropertyEntry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn push(&mut self, entry: impl Into<PropertyEntry>) {
        self.entries.push(entry.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Partitions the entries by property, synthesizes an empty FN when none
    /// was supplied, and validates every collection.
    ///
    /// ## Errors
    /// Returns [`VCardError::Cardinality`] if a collection rejects an entry or
    /// ends up outside its bounds.
    pub fn build(self) -> VCardResult<VCard> {
        let mut card = VCard::default();
        for entry in self.entries {
            card.insert(entry)?;
        }

        if card.formatted_names.is_empty() {
            tracing::debug!("no FN supplied; synthesizing an empty one");
            card.formatted_names.insert(FnProperty::builder("").build()?)?;
        }

        card.validate()?;
        Ok(card)
    }
}
