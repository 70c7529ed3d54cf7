//! vCard value parsers: de-escaping, structured splitting, partial dates.

use crate::rfc::vcard::core::{StructuredDate, VCardError, VCardResult};

/// Unescapes a vCard text value.
///
/// `\n` and `\N` become LF; any other `\X` becomes `X`. A trailing lone
/// backslash is kept.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') => result.push('\n'),
                Some(other) => result.push(other),
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Unescapes a parameter value: only `\n`/`\N` and `\\` are escapes.
#[must_use]
pub fn unescape_param(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits on unescaped occurrences of `separator`, keeping escapes intact.
fn split_unescaped(s: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == separator {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a structured value on unescaped semicolons.
///
/// Components are returned still escaped.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    split_unescaped(s, ';')
}

/// Splits one structured component on unescaped commas and unescapes each
/// item. The empty component yields no items.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    split_unescaped(s, ',')
        .into_iter()
        .map(unescape_text)
        .collect()
}

fn digits<T: std::str::FromStr>(s: &str, len: usize) -> Option<T> {
    if s.len() == len && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Parses a partial date.
///
/// Accepted forms: `YYYY`, `YYYYMM`, `YYYY-MM`, `YYYYMMDD`, `YYYY-MM-DD`,
/// `--MM`, `--MMDD`, `--MM-DD`, `---DD`. The empty string is the empty date.
///
/// ## Errors
/// Returns [`VCardError::InvalidDate`] for any other form or an impossible
/// date.
pub fn parse_date(value: &str) -> VCardResult<StructuredDate> {
    let invalid = || VCardError::InvalidDate(value.to_string());

    // Byte offsets below are only char boundaries for ASCII input.
    if !value.is_ascii() {
        return Err(invalid());
    }

    let (year, month, day) = if value.is_empty() {
        (None, None, None)
    } else if let Some(d) = value.strip_prefix("---") {
        (None, None, Some(digits(d, 2).ok_or_else(invalid)?))
    } else if let Some(rest) = value.strip_prefix("--") {
        let (m, d) = match rest.len() {
            2 => (rest, None),
            4 => (&rest[..2], Some(&rest[2..])),
            5 if rest.as_bytes()[2] == b'-' => (&rest[..2], Some(&rest[3..])),
            _ => return Err(invalid()),
        };
        let month = digits(m, 2).ok_or_else(invalid)?;
        let day = d.map(|d| digits(d, 2).ok_or_else(invalid)).transpose()?;
        (None, Some(month), day)
    } else {
        let (y, m, d) = match value.len() {
            4 => (value, None, None),
            6 => (&value[..4], Some(&value[4..]), None),
            7 if value.as_bytes()[4] == b'-' => (&value[..4], Some(&value[5..]), None),
            8 => (&value[..4], Some(&value[4..6]), Some(&value[6..])),
            10 if value.as_bytes()[4] == b'-' && value.as_bytes()[7] == b'-' => {
                (&value[..4], Some(&value[5..7]), Some(&value[8..]))
            }
            _ => return Err(invalid()),
        };
        let year = digits(y, 4).ok_or_else(invalid)?;
        let month = m.map(|m| digits(m, 2).ok_or_else(invalid)).transpose()?;
        let day = d.map(|d| digits(d, 2).ok_or_else(invalid)).transpose()?;
        (Some(year), month, day)
    };

    StructuredDate::new(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::build::escape::{escape_component, escape_text};
    use crate::rfc::vcard::core::Value;

    #[test]
    fn unescape_known_sequences() {
        assert_eq!(unescape_text(r"a\nb\Nc"), "a\nb\nc");
        assert_eq!(unescape_text(r"a\,b\;c\\d"), "a,b;c\\d");
    }

    #[test]
    fn unescape_unknown_drops_backslash() {
        assert_eq!(unescape_text(r"\x\t"), "xt");
        assert_eq!(unescape_text("end\\"), "end\\");
    }

    #[test]
    fn unescape_reverses_escape() {
        for s in [
            "plain",
            "comma, semi; back\\slash",
            "multi\nline\ntext",
            "trailing\\",
            "ユニコード, ok",
            "",
        ] {
            assert_eq!(unescape_text(&escape_text(s)), s);
            assert_eq!(unescape_text(&escape_component(s)), s);
        }
    }

    #[test]
    fn unescape_param_values() {
        assert_eq!(unescape_param(r"123 Main\nTown"), "123 Main\nTown");
        assert_eq!(unescape_param(r"C:\\dir"), "C:\\dir");
        assert_eq!(unescape_param(r"a\,b"), r"a\,b");
    }

    #[test]
    fn split_structured_simple() {
        assert_eq!(split_structured("a;b;c"), vec!["a", "b", "c"]);
        assert_eq!(split_structured(";;x;;"), vec!["", "", "x", "", ""]);
        assert_eq!(split_structured(""), vec![""]);
    }

    #[test]
    fn split_structured_respects_escapes() {
        assert_eq!(split_structured(r"a\;b;c"), vec![r"a\;b", "c"]);
        // escaped backslash followed by a real separator
        assert_eq!(split_structured(r"a\\;b"), vec![r"a\\", "b"]);
        assert_eq!(split_structured(r"a\\\;b"), vec![r"a\\\;b"]);
    }

    #[test]
    fn split_component_unescapes() {
        assert_eq!(split_component(r"Jr.,M.D.\, PhD"), vec!["Jr.", "M.D., PhD"]);
        assert!(split_component("").is_empty());
        assert_eq!(split_component(","), vec!["", ""]);
    }

    #[test]
    fn parse_date_forms() {
        let render = |s: &str| parse_date(s).unwrap().render();
        assert_eq!(render("1985"), "1985");
        assert_eq!(render("198504"), "1985-04");
        assert_eq!(render("1985-04"), "1985-04");
        assert_eq!(render("19850412"), "19850412");
        assert_eq!(render("1985-04-12"), "19850412");
        assert_eq!(render("--04"), "--04");
        assert_eq!(render("--0412"), "--0412");
        assert_eq!(render("--04-12"), "--0412");
        assert_eq!(render("---12"), "---12");
        assert_eq!(render(""), "");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        for bad in [
            "85", "1985-4", "19850412T1200", "--4", "----1", "abcd", "1985/04/12", "--0230",
            "20010229", "--13", "---32",
        ] {
            assert!(
                matches!(parse_date(bad), Err(VCardError::InvalidDate(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn parse_date_non_ascii_does_not_panic() {
        assert!(parse_date("１９８５").is_err());
        assert!(parse_date("--é1").is_err());
        assert!(parse_date("1985é").is_err());
        for bad in ["12日4", "123日456", "--a日", "---日", "1985-日"] {
            assert!(
                matches!(parse_date(bad), Err(VCardError::InvalidDate(ref v)) if v == bad),
                "{bad}"
            );
        }
    }
}
