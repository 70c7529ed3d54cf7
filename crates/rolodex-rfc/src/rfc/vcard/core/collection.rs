//! Per-property entry collections with cardinality enforcement.

use std::collections::BTreeSet;

use super::entry::Entry;
use super::error::{VCardError, VCardResult};
use super::property::Cardinality;

/// Ordered entries of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCollection<E: Entry> {
    entries: Vec<E>,
}

impl<E: Entry> Default for PropertyCollection<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Entry> PropertyCollection<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cardinality() -> Cardinality {
        E::PROPERTY.meta().cardinality
    }

    /// Appends an entry.
    ///
    /// For `ExactlyOne` and `AtMostOne` properties, a new entry is accepted
    /// only if it is an alternative representation of every entry already
    /// present.
    ///
    /// ## Errors
    /// Returns [`VCardError::Cardinality`] with the rendered collection,
    /// including the rejected entry.
    pub fn insert(&mut self, entry: E) -> VCardResult<()> {
        let accepted = !Self::cardinality().is_singular()
            || self
                .entries
                .iter()
                .all(|existing| existing.params().is_alternative_of(entry.params()));

        if !accepted {
            tracing::debug!(property = %E::PROPERTY, "rejecting non-alternative entry");
            return Err(VCardError::Cardinality {
                property: E::PROPERTY,
                content: format!("{}{}", self.render(), entry.serialize()),
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Entries without ALTID plus the number of distinct ALTID values.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        let mut altids = BTreeSet::new();
        let mut plain = 0;
        for entry in &self.entries {
            match entry.params().altid() {
                Some(altid) => {
                    altids.insert(altid);
                }
                None => plain += 1,
            }
        }
        plain + altids.len()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        Self::cardinality().is_satisfied_by(self.distinct_count())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.entries.first()
    }

    /// Entries ordered by PREF, unset last; ties keep insertion order.
    #[must_use]
    pub fn sorted_by_pref(&self) -> Vec<&E> {
        let mut sorted: Vec<&E> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.params().cmp_pref(b.params()));
        sorted
    }

    /// The most preferred entry.
    #[must_use]
    pub fn preferred(&self) -> Option<&E> {
        self.entries
            .iter()
            .reduce(|best, e| {
                if e.params().cmp_pref(best.params()).is_lt() {
                    e
                } else {
                    best
                }
            })
    }

    /// Concatenated content lines of every entry.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries.iter().map(Entry::serialize).collect()
    }
}

impl<'a, E: Entry> IntoIterator for &'a PropertyCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::entry::{
        EntryBuilder, FnProperty, KindProperty, NProperty, NoteProperty,
    };
    use crate::rfc::vcard::core::kind::Kind;
    use crate::rfc::vcard::core::property::Property;

    fn n(family: &str, altid: Option<&str>) -> NProperty {
        let builder = NProperty::builder().family_names([family]);
        match altid {
            Some(a) => builder.altid(a).build().unwrap(),
            None => builder.build().unwrap(),
        }
    }

    #[test]
    fn at_most_one_rejects_second_plain_entry() {
        let mut names = PropertyCollection::new();
        names.insert(n("Doe", None)).unwrap();
        let err = names.insert(n("Roe", None)).unwrap_err();
        match err {
            VCardError::Cardinality { property, content } => {
                assert_eq!(property, Property::N);
                assert_eq!(content, "N:Doe;;;;\r\nN:Roe;;;;\r\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn at_most_one_accepts_alternatives() {
        let mut names = PropertyCollection::new();
        names.insert(n("Doe", Some("1"))).unwrap();
        names.insert(n("ドウ", Some("1"))).unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names.distinct_count(), 1);
        assert!(names.is_valid());

        assert!(names.insert(n("Roe", Some("2"))).is_err());
        assert!(names.insert(n("Roe", None)).is_err());
    }

    #[test]
    fn any_accepts_everything() {
        let mut notes = PropertyCollection::new();
        for text in ["a", "b", "c"] {
            notes.insert(NoteProperty::builder(text).build().unwrap()).unwrap();
        }
        assert_eq!(notes.distinct_count(), 3);
        assert!(notes.is_valid());
    }

    #[test]
    fn distinct_count_groups_altids() {
        let mut fns = PropertyCollection::new();
        for (value, altid) in [("A", Some("1")), ("B", Some("1")), ("C", Some("2")), ("D", None)] {
            let builder = FnProperty::builder(value);
            let entry = match altid {
                Some(a) => builder.altid(a).build().unwrap(),
                None => builder.build().unwrap(),
            };
            fns.insert(entry).unwrap();
        }
        assert_eq!(fns.distinct_count(), 3);
    }

    #[test]
    fn at_least_one_needs_an_entry() {
        let fns: PropertyCollection<FnProperty> = PropertyCollection::new();
        assert!(!fns.is_valid());
        let kinds: PropertyCollection<KindProperty> = PropertyCollection::new();
        assert!(kinds.is_valid());
    }

    #[test]
    fn kind_is_singular() {
        let mut kinds = PropertyCollection::new();
        kinds
            .insert(KindProperty::builder(Kind::Group).build().unwrap())
            .unwrap();
        assert!(
            kinds
                .insert(KindProperty::builder(Kind::Org).build().unwrap())
                .is_err()
        );
    }

    #[test]
    fn pref_sorting() {
        let mut notes = PropertyCollection::new();
        for (text, pref) in [("none", None), ("two", Some(2)), ("one", Some(1))] {
            let builder = NoteProperty::builder(text);
            let entry = match pref {
                Some(p) => builder.pref(p).build().unwrap(),
                None => builder.build().unwrap(),
            };
            notes.insert(entry).unwrap();
        }
        let order: Vec<&str> = notes.sorted_by_pref().iter().map(|n| n.value()).collect();
        assert_eq!(order, vec!["one", "two", "none"]);
        assert_eq!(notes.preferred().map(NoteProperty::value), Some("one"));
    }
}
