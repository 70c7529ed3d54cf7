//! vCard data model.

pub mod charset;
mod collection;
mod datetime;
pub mod entry;
mod error;
mod kind;
pub mod parameter;
pub mod property;
pub mod value;
mod vcard;

pub use collection::PropertyCollection;
pub use datetime::StructuredDate;
pub use entry::{
    AdrBuilder, AdrProperty, BdayBuilder, BdayProperty, BdayValue, EmailBuilder, EmailProperty,
    Entry, EntryBuilder, EntryParams, FnBuilder, FnProperty, KindBuilder, KindProperty, NBuilder,
    NProperty, NicknameBuilder, NicknameProperty, NoteBuilder, NoteProperty, OrgBuilder,
    OrgProperty, ParamsBuilder, PropertyEntry, TelBuilder, TelProperty, TelValue, UrlBuilder,
    UrlProperty,
};
pub use error::{VCardError, VCardResult};
pub use kind::Kind;
pub use parameter::{Calscale, Parameter, Pref, TypeListStyle, TypeParameter, ValueType};
pub use property::{Cardinality, Property, PropertyMeta};
pub use value::{Component, ListComponent, ParamText, PlainText, Uri, Value};
pub use vcard::{VCard, VCardBuilder};
