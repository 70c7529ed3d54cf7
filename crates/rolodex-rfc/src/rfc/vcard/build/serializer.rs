//! vCard serialization.

use super::fold::fold_line;
use crate::rfc::vcard::core::{Entry, VCard};

/// Serializes one or more vCards to a string.
///
/// ## Summary
/// Produces RFC 6350 compliant vCard output with proper
/// line folding and escaping.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut output = String::new();

    for card in cards {
        write_vcard(card, &mut output);
    }

    output
}

/// Renders `BEGIN:VCARD` through `END:VCARD` for one card.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    write_vcard(card, &mut output);
    output
}

fn write_vcard(card: &VCard, output: &mut String) {
    output.push_str("BEGIN:VCARD\r\n");
    output.push_str("VERSION:4.0\r\n");

    // Fixed order, matching `Property::BODY`
    output.push_str(&card.kinds().render());
    output.push_str(&card.formatted_names().render());
    output.push_str(&card.names().render());
    output.push_str(&card.nicknames().render());
    output.push_str(&card.birthdays().render());
    output.push_str(&card.addresses().render());
    output.push_str(&card.telephones().render());
    output.push_str(&card.emails().render());
    output.push_str(&card.organizations().render());
    output.push_str(&card.notes().render());
    output.push_str(&card.urls().render());

    output.push_str("END:VCARD\r\n");
}

/// Serializes one entry to a folded, CRLF-terminated content line.
///
/// ## Summary
/// `NAME[;VALUE=type][;ALTID=v][;PREF=n][;TYPE=..][;LABEL="v"][;CALSCALE=..]:value`.
/// `VALUE=` appears only when the entry's value type is not the property's
/// default.
#[must_use]
pub fn serialize_entry<E: Entry>(entry: &E) -> String {
    let mut line = String::from(E::PROPERTY.as_str());

    let value_type = entry.value_type();
    if !E::PROPERTY.meta().is_default_value_type(value_type) {
        line.push_str(";VALUE=");
        line.push_str(value_type.as_str());
    }

    entry.params().write_to(&mut line);

    for (parameter, value) in entry.extra_params() {
        line.push(';');
        line.push_str(parameter.as_str());
        line.push('=');
        line.push_str(&value);
    }

    line.push(':');
    line.push_str(&entry.render_value());
    line.push_str("\r\n");

    fold_line(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{
        AdrProperty, EntryBuilder, FnProperty, NoteProperty, TelProperty, TypeParameter,
    };

    #[test]
    fn serialize_minimal() {
        let card = VCard::builder()
            .add(FnProperty::builder("John Doe").build().unwrap())
            .build()
            .unwrap();

        assert_eq!(
            serialize_single(&card),
            "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn serialize_many() {
        let card = VCard::builder()
            .add(FnProperty::builder("A").build().unwrap())
            .build()
            .unwrap();
        let single = serialize_single(&card);
        assert_eq!(serialize(std::slice::from_ref(&card)), single);
        assert_eq!(card.serialize(), single);

        let output = serialize(&[card.clone(), card]);
        assert_eq!(output, single.repeat(2));
    }

    #[test]
    fn body_order_is_fixed() {
        let card = VCard::builder()
            .add(NoteProperty::builder("note").build().unwrap())
            .add(
                TelProperty::builder("555")
                    .type_param(TypeParameter::Cell)
                    .build()
                    .unwrap(),
            )
            .add(AdrProperty::builder().locality(["Town"]).build().unwrap())
            .add(FnProperty::builder("Name").build().unwrap())
            .build()
            .unwrap();

        let output = serialize_single(&card);
        let lines: Vec<&str> = output.split("\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:4.0",
                "FN:Name",
                "ADR:;;;Town;;;",
                "TEL;TYPE=CELL:555",
                "NOTE:note",
                "END:VCARD",
                "",
            ]
        );
    }

    #[test]
    fn long_lines_fold() {
        let note = NoteProperty::builder("x".repeat(100)).build().unwrap();
        let line = serialize_entry(&note);
        assert!(line.starts_with(&format!("NOTE:{}\r\n ", "x".repeat(70))));
        assert!(line.ends_with("\r\n"));
        assert!(!line.ends_with("\r\n \r\n"));
    }
}
