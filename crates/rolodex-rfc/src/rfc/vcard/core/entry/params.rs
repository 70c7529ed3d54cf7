//! Parameters shared by every entry.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::rfc::vcard::core::error::{VCardError, VCardResult};
use crate::rfc::vcard::core::parameter::{Parameter, Pref, TypeListStyle, TypeParameter, ValueType};
use crate::rfc::vcard::core::property::Property;
use crate::rfc::vcard::core::value::{ParamText, Value};

/// Validated ALTID, PREF and TYPE of one entry.
///
/// Equality ignores the TYPE list style, which only affects rendering.
#[derive(Debug, Clone, Eq, Default)]
pub struct EntryParams {
    altid: Option<ParamText>,
    pref: Option<Pref>,
    types: BTreeSet<TypeParameter>,
    list_style: TypeListStyle,
}

impl PartialEq for EntryParams {
    fn eq(&self, other: &Self) -> bool {
        self.altid == other.altid && self.pref == other.pref && self.types == other.types
    }
}

impl EntryParams {
    #[must_use]
    pub fn altid(&self) -> Option<&str> {
        self.altid.as_ref().map(ParamText::as_str)
    }

    #[must_use]
    pub const fn pref(&self) -> Option<Pref> {
        self.pref
    }

    #[must_use]
    pub const fn types(&self) -> &BTreeSet<TypeParameter> {
        &self.types
    }

    #[must_use]
    pub const fn list_style(&self) -> TypeListStyle {
        self.list_style
    }

    /// Two entries are alternatives iff both carry the same non-empty ALTID.
    #[must_use]
    pub fn is_alternative_of(&self, other: &Self) -> bool {
        matches!((self.altid(), other.altid()), (Some(a), Some(b)) if a == b)
    }

    /// Orders by PREF ascending; entries without PREF sort last.
    #[must_use]
    pub fn cmp_pref(&self, other: &Self) -> Ordering {
        match (self.pref, other.pref) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Writes `;ALTID=..;PREF=..;TYPE=..` segments in that order.
    pub(crate) fn write_to(&self, out: &mut String) {
        if let Some(altid) = &self.altid {
            out.push_str(";ALTID=");
            out.push_str(&altid.render());
        }
        if let Some(pref) = self.pref {
            out.push_str(";PREF=");
            out.push_str(&pref.to_string());
        }
        if self.types.is_empty() {
            return;
        }
        match self.list_style {
            TypeListStyle::Values => {
                let joined = self
                    .types
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                out.push_str(";TYPE=");
                out.push_str(&joined);
            }
            TypeListStyle::Parameters => {
                for t in &self.types {
                    out.push_str(";TYPE=");
                    out.push_str(t.as_str());
                }
            }
        }
    }
}

/// Unvalidated shared parameters, owned by every concrete builder.
#[derive(Debug, Clone, Default)]
pub struct ParamsBuilder {
    pub altid: Option<String>,
    pub pref: Option<i64>,
    pub types: BTreeSet<TypeParameter>,
    pub list_style: TypeListStyle,
}

impl ParamsBuilder {
    /// Validates against the registry record of `property` for `value_type`.
    ///
    /// An empty ALTID is treated as absent.
    ///
    /// ## Errors
    /// - [`VCardError::IllegalValueType`] if the property has no such value type
    /// - [`VCardError::IllegalParameter`] if ALTID, PREF or TYPE is not allowed
    /// - [`VCardError::IllegalTypeParameter`] for a TYPE outside the vocabulary
    /// - [`VCardError::PrefOutOfRange`] and [`VCardError::IllegalCharacters`]
    ///   for bad values
    pub fn build(self, property: Property, value_type: ValueType) -> VCardResult<EntryParams> {
        let meta = property.meta();
        let allowed = meta
            .parameters_for(value_type)
            .ok_or(VCardError::IllegalValueType {
                property,
                value_type,
            })?;
        let require = |parameter: Parameter| {
            if allowed.contains(&parameter) {
                Ok(())
            } else {
                Err(VCardError::IllegalParameter {
                    property,
                    parameter: parameter.as_str().to_string(),
                })
            }
        };

        let altid = match self.altid.filter(|a| !a.is_empty()) {
            Some(altid) => {
                require(Parameter::AltId)?;
                Some(ParamText::new(altid)?)
            }
            None => None,
        };

        let pref = match self.pref {
            Some(pref) => {
                require(Parameter::Pref)?;
                Some(Pref::new(pref)?)
            }
            None => None,
        };

        if !self.types.is_empty() {
            require(Parameter::Type)?;
        }
        if let Some(&value) = self.types.iter().find(|t| !meta.allows_type(**t)) {
            return Err(VCardError::IllegalTypeParameter { property, value });
        }

        Ok(EntryParams {
            altid,
            pref,
            types: self.types,
            list_style: self.list_style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(params: ParamsBuilder, property: Property) -> VCardResult<EntryParams> {
        params.build(property, ValueType::Text)
    }

    #[test]
    fn empty_altid_is_absent() {
        let params = build(
            ParamsBuilder {
                altid: Some(String::new()),
                ..Default::default()
            },
            Property::Fn,
        )
        .unwrap();
        assert_eq!(params.altid(), None);
    }

    #[test]
    fn illegal_type_rejected() {
        let err = build(
            ParamsBuilder {
                types: BTreeSet::from([TypeParameter::Fax]),
                ..Default::default()
            },
            Property::Email,
        )
        .unwrap_err();
        assert_eq!(
            err,
            VCardError::IllegalTypeParameter {
                property: Property::Email,
                value: TypeParameter::Fax,
            }
        );
    }

    #[test]
    fn type_on_property_without_type_rejected() {
        let err = build(
            ParamsBuilder {
                types: BTreeSet::from([TypeParameter::Home]),
                ..Default::default()
            },
            Property::N,
        )
        .unwrap_err();
        assert!(matches!(err, VCardError::IllegalParameter { parameter, .. } if parameter == "TYPE"));
    }

    #[test]
    fn pref_validated() {
        let err = build(
            ParamsBuilder {
                pref: Some(0),
                ..Default::default()
            },
            Property::Tel,
        )
        .unwrap_err();
        assert_eq!(err, VCardError::PrefOutOfRange(0));

        let err = build(
            ParamsBuilder {
                pref: Some(1),
                ..Default::default()
            },
            Property::N,
        )
        .unwrap_err();
        assert!(matches!(err, VCardError::IllegalParameter { .. }));
    }

    #[test]
    fn unsupported_value_type_rejected() {
        let err = ParamsBuilder::default()
            .build(Property::Email, ValueType::Uri)
            .unwrap_err();
        assert_eq!(
            err,
            VCardError::IllegalValueType {
                property: Property::Email,
                value_type: ValueType::Uri,
            }
        );
    }

    #[test]
    fn alternatives_need_same_non_empty_altid() {
        let with = |altid: Option<&str>| {
            build(
                ParamsBuilder {
                    altid: altid.map(str::to_string),
                    ..Default::default()
                },
                Property::Fn,
            )
            .unwrap()
        };
        assert!(with(Some("1")).is_alternative_of(&with(Some("1"))));
        assert!(!with(Some("1")).is_alternative_of(&with(Some("2"))));
        assert!(!with(None).is_alternative_of(&with(None)));
        assert!(!with(Some("")).is_alternative_of(&with(Some(""))));
    }

    #[test]
    fn pref_ordering_puts_unset_last() {
        let with = |pref: Option<i64>| {
            build(
                ParamsBuilder {
                    pref,
                    ..Default::default()
                },
                Property::Tel,
            )
            .unwrap()
        };
        assert_eq!(with(Some(1)).cmp_pref(&with(Some(2))), Ordering::Less);
        assert_eq!(with(Some(100)).cmp_pref(&with(None)), Ordering::Less);
        assert_eq!(with(None).cmp_pref(&with(Some(50))), Ordering::Greater);
        assert_eq!(with(None).cmp_pref(&with(None)), Ordering::Equal);
    }

    #[test]
    fn list_style_ignored_by_equality() {
        let types = BTreeSet::from([TypeParameter::Home, TypeParameter::Work]);
        let values = build(
            ParamsBuilder {
                types: types.clone(),
                ..Default::default()
            },
            Property::Fn,
        )
        .unwrap();
        let parameters = build(
            ParamsBuilder {
                types,
                list_style: TypeListStyle::Parameters,
                ..Default::default()
            },
            Property::Fn,
        )
        .unwrap();
        assert_eq!(values, parameters);

        let mut a = String::new();
        values.write_to(&mut a);
        let mut b = String::new();
        parameters.write_to(&mut b);
        assert_eq!(a, ";TYPE=HOME,WORK");
        assert_eq!(b, ";TYPE=HOME;TYPE=WORK");
    }
}
