//! vCard text escaping.
//!
//! Line breaks are LF, CR, CRLF, NEL (U+0085), LS (U+2028) and PS (U+2029);
//! every escaper writes them as the two characters `\n`.

/// Replaces every line-break sequence with a single LF.
#[must_use]
pub fn normalize_line_breaks(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push('\n');
            }
            '\u{85}' | '\u{2028}' | '\u{2029}' => result.push('\n'),
            _ => result.push(c),
        }
    }

    result
}

fn escape_with(s: &str, escape_separators: bool) -> String {
    let normalized = normalize_line_breaks(s);
    let mut result = String::with_capacity(normalized.len());

    for c in normalized.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' if escape_separators => result.push_str("\\,"),
            ';' if escape_separators => result.push_str("\\;"),
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a whole text property value.
///
/// Escapes backslash and line breaks. Commas and semicolons stay raw since
/// nothing splits a plain text value.
#[must_use]
pub fn escape_text(s: &str) -> String {
    escape_with(s, false)
}

/// Escapes one component of a structured or list value.
///
/// Escapes backslash, line breaks, comma, and semicolon.
#[must_use]
pub fn escape_component(s: &str) -> String {
    escape_with(s, true)
}

/// Escapes a parameter value (ALTID, LABEL).
///
/// Backslash and line breaks are escaped; quoting is decided separately by
/// the parameter subset of the result.
#[must_use]
pub fn escape_param(s: &str) -> String {
    escape_with(s, false)
}
