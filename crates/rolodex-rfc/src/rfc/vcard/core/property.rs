//! Property tags and the metadata registry (RFC 6350 §6).
//!
//! Each [`Property`] maps to one immutable [`PropertyMeta`] record holding
//! its cardinality, its default value type, the generic parameters allowed
//! for each supported value type, and its TYPE vocabulary. The table is
//! built once on first use.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::OnceLock;

use super::parameter::{Parameter, TypeParameter, ValueType};

/// How many distinct entries of a property a card may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    ExactlyOne,
    AtMostOne,
    AtLeastOne,
    Any,
}

impl Cardinality {
    /// Whether at most one distinct entry is allowed.
    #[must_use]
    pub const fn is_singular(self) -> bool {
        matches!(self, Self::ExactlyOne | Self::AtMostOne)
    }

    /// Checks a distinct-entry count against the bounds.
    #[must_use]
    pub const fn is_satisfied_by(self, count: usize) -> bool {
        match self {
            Self::ExactlyOne => count == 1,
            Self::AtMostOne => count <= 1,
            Self::AtLeastOne => count >= 1,
            Self::Any => true,
        }
    }
}

/// Property tags of the v4 model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Begin,
    Version,
    Kind,
    Fn,
    N,
    Nickname,
    Bday,
    Adr,
    Tel,
    Email,
    Org,
    Note,
    Url,
    End,
}

impl Property {
    pub const ALL: [Self; 14] = [
        Self::Begin,
        Self::Version,
        Self::Kind,
        Self::Fn,
        Self::N,
        Self::Nickname,
        Self::Bday,
        Self::Adr,
        Self::Tel,
        Self::Email,
        Self::Org,
        Self::Note,
        Self::Url,
        Self::End,
    ];

    /// Body properties in serialization order.
    pub const BODY: [Self; 11] = [
        Self::Kind,
        Self::Fn,
        Self::N,
        Self::Nickname,
        Self::Bday,
        Self::Adr,
        Self::Tel,
        Self::Email,
        Self::Org,
        Self::Note,
        Self::Url,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "BEGIN",
            Self::Version => "VERSION",
            Self::Kind => "KIND",
            Self::Fn => "FN",
            Self::N => "N",
            Self::Nickname => "NICKNAME",
            Self::Bday => "BDAY",
            Self::Adr => "ADR",
            Self::Tel => "TEL",
            Self::Email => "EMAIL",
            Self::Org => "ORG",
            Self::Note => "NOTE",
            Self::Url => "URL",
            Self::End => "END",
        }
    }

    /// Resolves a property name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }

    /// BEGIN, VERSION and END frame a card rather than describe it.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Begin | Self::Version | Self::End)
    }

    /// Returns the registry record for this property.
    #[must_use]
    pub fn meta(self) -> &'static PropertyMeta {
        &registry()[self as usize]
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry record for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMeta {
    pub cardinality: Cardinality,
    pub default_value_type: ValueType,
    parameters: BTreeMap<ValueType, BTreeSet<Parameter>>,
    types: BTreeSet<TypeParameter>,
}

impl PropertyMeta {
    fn new(
        cardinality: Cardinality,
        default_value_type: ValueType,
        parameters: &[(ValueType, &[Parameter])],
        types: &[TypeParameter],
    ) -> Self {
        Self {
            cardinality,
            default_value_type,
            parameters: parameters
                .iter()
                .map(|(vt, params)| (*vt, params.iter().copied().collect()))
                .collect(),
            types: types.iter().copied().collect(),
        }
    }

    /// Supported value types, in declaration order of [`ValueType`].
    pub fn value_types(&self) -> impl Iterator<Item = ValueType> + '_ {
        self.parameters.keys().copied()
    }

    #[must_use]
    pub fn allows_value_type(&self, value_type: ValueType) -> bool {
        self.parameters.contains_key(&value_type)
    }

    #[must_use]
    pub fn is_default_value_type(&self, value_type: ValueType) -> bool {
        self.default_value_type == value_type
    }

    /// Generic parameters allowed with `value_type`, or `None` if the value
    /// type itself is not supported.
    #[must_use]
    pub fn parameters_for(&self, value_type: ValueType) -> Option<&BTreeSet<Parameter>> {
        self.parameters.get(&value_type)
    }

    #[must_use]
    pub fn allows_parameter(&self, value_type: ValueType, parameter: Parameter) -> bool {
        self.parameters_for(value_type)
            .is_some_and(|params| params.contains(&parameter))
    }

    /// Whether `parameter` is allowed with any supported value type.
    #[must_use]
    pub fn knows_parameter(&self, parameter: Parameter) -> bool {
        self.parameters.values().any(|params| params.contains(&parameter))
    }

    #[must_use]
    pub fn type_parameters(&self) -> &BTreeSet<TypeParameter> {
        &self.types
    }

    #[must_use]
    pub fn allows_type(&self, value: TypeParameter) -> bool {
        self.types.contains(&value)
    }
}

fn registry() -> &'static [PropertyMeta; 14] {
    static REGISTRY: OnceLock<[PropertyMeta; 14]> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

const fn allow(
    value_type: ValueType,
    parameters: &'static [Parameter],
) -> (ValueType, &'static [Parameter]) {
    (value_type, parameters)
}

fn build_registry() -> [PropertyMeta; 14] {
    use Cardinality::{AtLeastOne, AtMostOne, Any, ExactlyOne};
    use Parameter::{
        AltId, CalScale, Geo, Label, Language, MediaType, Pid, Pref, SortAs, Type, Tz, Value,
    };
    use TypeParameter::{Cell, Fax, Home, Pager, Text, Textphone, Video, Voice, Work};
    use ValueType as V;

    const GENERAL: &[TypeParameter] = &[Work, Home];
    const TEL_TYPES: &[TypeParameter] =
        &[Work, Home, Text, Voice, Fax, Cell, Video, Pager, Textphone];

    let framing = || PropertyMeta::new(ExactlyOne, V::Text, &[allow(V::Text, &[])], &[]);

    // Indexed by `Property as usize`; keep in declaration order.
    [
        framing(),
        framing(),
        PropertyMeta::new(AtMostOne, V::Text, &[allow(V::Text, &[Value])], &[]),
        PropertyMeta::new(
            AtLeastOne,
            V::Text,
            &[allow(V::Text, &[Value, Type, Language, AltId, Pid, Pref])],
            GENERAL,
        ),
        PropertyMeta::new(
            AtMostOne,
            V::Text,
            &[allow(V::Text, &[Value, SortAs, Language, AltId])],
            &[],
        ),
        PropertyMeta::new(
            Any,
            V::Text,
            &[allow(V::Text, &[Value, Type, Language, AltId, Pid, Pref])],
            GENERAL,
        ),
        PropertyMeta::new(
            AtMostOne,
            V::DateAndOrTime,
            &[
                allow(V::DateAndOrTime, &[Value, AltId, CalScale]),
                allow(V::Text, &[Value, Language, AltId]),
            ],
            &[],
        ),
        PropertyMeta::new(
            Any,
            V::Text,
            &[allow(
                V::Text,
                &[Value, Label, Language, Geo, Tz, AltId, Pid, Pref, Type],
            )],
            GENERAL,
        ),
        PropertyMeta::new(
            Any,
            V::Text,
            &[
                allow(V::Text, &[Value, Type, Pid, Pref, AltId]),
                allow(V::Uri, &[Value, Type, Pid, Pref, AltId, MediaType]),
            ],
            TEL_TYPES,
        ),
        PropertyMeta::new(
            Any,
            V::Text,
            &[allow(V::Text, &[Value, Pid, Pref, Type, AltId])],
            GENERAL,
        ),
        PropertyMeta::new(
            Any,
            V::Text,
            &[allow(V::Text, &[Value, SortAs, Language, Pid, Pref, AltId, Type])],
            GENERAL,
        ),
        PropertyMeta::new(
            Any,
            V::Text,
            &[allow(V::Text, &[Value, Language, Pid, Pref, Type, AltId])],
            GENERAL,
        ),
        PropertyMeta::new(
            Any,
            V::Uri,
            &[allow(V::Uri, &[Value, Pid, Pref, Type, MediaType, AltId])],
            GENERAL,
        ),
        framing(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(Property::from_name("fn"), Some(Property::Fn));
        assert_eq!(Property::from_name("NickName"), Some(Property::Nickname));
        assert_eq!(Property::from_name("X-FOO"), None);
        assert_eq!(Property::from_name("PHOTO"), None);
    }

    #[test]
    fn registry_is_indexed_by_tag() {
        assert_eq!(Property::Fn.meta().cardinality, Cardinality::AtLeastOne);
        assert_eq!(Property::Kind.meta().cardinality, Cardinality::AtMostOne);
        assert_eq!(Property::N.meta().cardinality, Cardinality::AtMostOne);
        assert_eq!(Property::Bday.meta().cardinality, Cardinality::AtMostOne);
        assert_eq!(Property::Version.meta().cardinality, Cardinality::ExactlyOne);
        assert_eq!(Property::Note.meta().cardinality, Cardinality::Any);
        assert_eq!(Property::Url.meta().default_value_type, ValueType::Uri);
        assert_eq!(
            Property::Bday.meta().default_value_type,
            ValueType::DateAndOrTime
        );
    }

    #[test]
    fn type_parameter_invariant_holds() {
        for property in Property::ALL {
            let meta = property.meta();
            if meta.knows_parameter(Parameter::Type) {
                assert!(!meta.type_parameters().is_empty(), "{property}");
            } else {
                assert!(meta.type_parameters().is_empty(), "{property}");
            }
            assert!(meta.allows_value_type(meta.default_value_type), "{property}");
        }
    }

    #[test]
    fn parameters_depend_on_value_type() {
        let bday = Property::Bday.meta();
        assert!(bday.allows_parameter(ValueType::DateAndOrTime, Parameter::CalScale));
        assert!(!bday.allows_parameter(ValueType::Text, Parameter::CalScale));
        assert!(bday.allows_parameter(ValueType::Text, Parameter::Language));
        assert!(!bday.allows_value_type(ValueType::Uri));

        let tel = Property::Tel.meta();
        assert!(tel.allows_parameter(ValueType::Uri, Parameter::MediaType));
        assert!(!tel.allows_parameter(ValueType::Text, Parameter::MediaType));
        assert!(tel.allows_type(TypeParameter::Textphone));
        assert!(!Property::Email.meta().allows_type(TypeParameter::Fax));
    }

    #[test]
    fn adr_allows_label_geo_tz() {
        let adr = Property::Adr.meta();
        for p in [Parameter::Label, Parameter::Geo, Parameter::Tz] {
            assert!(adr.allows_parameter(ValueType::Text, p));
        }
        assert!(!Property::Kind.meta().knows_parameter(Parameter::AltId));
    }

    #[test]
    fn cardinality_bounds() {
        assert!(Cardinality::ExactlyOne.is_satisfied_by(1));
        assert!(!Cardinality::ExactlyOne.is_satisfied_by(0));
        assert!(!Cardinality::ExactlyOne.is_satisfied_by(2));
        assert!(Cardinality::AtMostOne.is_satisfied_by(0));
        assert!(!Cardinality::AtMostOne.is_satisfied_by(2));
        assert!(!Cardinality::AtLeastOne.is_satisfied_by(0));
        assert!(Cardinality::Any.is_satisfied_by(0));
        assert!(Cardinality::AtMostOne.is_singular());
        assert!(!Cardinality::Any.is_singular());
    }
}
