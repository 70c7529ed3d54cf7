//! vCard lexer for line unfolding and content line splitting.
//!
//! Folding follows RFC 6350 §3.2: a line break followed by one space or tab
//! is removed on unfolding.

use super::error::{ParseError, ParseResult};

fn unfold_with(input: &str, lenient: bool) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                // Continuation: drop the break and exactly one whitespace
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push_str("\r\n");
                }
            }
            '\n' if lenient && matches!(chars.peek(), Some(' ' | '\t')) => {
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result
}

/// Unfolds a vCard document by removing line continuations.
///
/// Removes every CRLF followed by a single space or tab. Other line breaks
/// are kept as they are.
#[must_use]
pub fn unfold(input: &str) -> String {
    unfold_with(input, false)
}

/// Like [`unfold`], but also removes a bare LF followed by a space or tab.
#[must_use]
pub fn unfold_lenient(input: &str) -> String {
    unfold_with(input, true)
}

/// Splits input into logical lines, unfolding leniently.
///
/// Returns each non-blank logical line with the 1-based physical line it
/// starts on. CRLF and bare LF both end a line.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (index, physical) in input.split('\n').enumerate() {
        let physical = physical.strip_suffix('\r').unwrap_or(physical);

        if let Some(continuation) = physical.strip_prefix([' ', '\t'])
            && let Some((_, prev)) = lines.last_mut()
        {
            prev.push_str(continuation);
            continue;
        }

        if physical.trim().is_empty() {
            continue;
        }
        lines.push((index + 1, physical.to_string()));
    }

    lines
}

/// A content line split into its parts, before parameter or value parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Raw parameter text including the leading `;`, or empty.
    pub params: String,
    /// Raw value text after the first unquoted colon.
    pub value: String,
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param=value]*:value`
///
/// ## Errors
/// Returns a malformed line error if the colon separator is missing or the
/// name is not `[A-Za-z0-9-]+`.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line)
        .ok_or_else(|| ParseError::malformed(line_num, "missing colon separator", line))?;

    let (head, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (name_part, params) = head.find(';').map_or((head, ""), |pos| head.split_at(pos));
    let (group, name) = parse_group(name_part);

    if !is_name(name) {
        return Err(ParseError::malformed(line_num, "invalid property name", line));
    }

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params: params.to_string(),
        value: value.to_string(),
    })
}

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Finds the colon that separates name/params from value.
///
/// Colons inside quoted parameter values do not count.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Splits an optional `group.` prefix off the name.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some((group, name)) = s.split_once('.')
        && is_name(group)
    {
        return (Some(group), name);
    }
    (None, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::parse::ParseErrorKind;

    #[test]
    fn unfold_crlf() {
        let input = "FN:John\r\n Doe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn unfold_tab() {
        let input = "FN:John\r\n\tDoe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn unfold_removes_one_whitespace_only() {
        assert_eq!(unfold("NOTE:a\r\n  b"), "NOTE:a b");
    }

    #[test]
    fn strict_unfold_keeps_bare_lf() {
        assert_eq!(unfold("FN:John\n Doe"), "FN:John\n Doe");
        assert_eq!(unfold_lenient("FN:John\n Doe"), "FN:JohnDoe");
    }

    #[test]
    fn unfold_keeps_plain_breaks() {
        assert_eq!(unfold("A:1\r\nB:2\r\n"), "A:1\r\nB:2\r\n");
    }

    #[test]
    fn split_lines_filters_empty() {
        let input = "LINE1\n\nLINE2\n";
        let lines = split_lines(input);
        assert_eq!(lines, vec![(1, "LINE1".to_string()), (3, "LINE2".to_string())]);
    }

    #[test]
    fn split_lines_unfolds_and_tracks_physical_lines() {
        let input = "BEGIN:VCARD\r\nNOTE:one\r\n  two\r\n\tthree\r\nEND:VCARD\r\n";
        let lines = split_lines(input);
        assert_eq!(
            lines,
            vec![
                (1, "BEGIN:VCARD".to_string()),
                (2, "NOTE:one twothree".to_string()),
                (5, "END:VCARD".to_string()),
            ]
        );
    }

    #[test]
    fn parse_simple_line() {
        let line = parse_content_line("FN:John Doe", 1).unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "John Doe");
    }

    #[test]
    fn parse_grouped_line() {
        let line = parse_content_line("item1.tel:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.group, Some("item1".to_string()));
        assert_eq!(line.name, "TEL");
    }

    #[test]
    fn parse_with_parameters() {
        let line = parse_content_line("TEL;TYPE=home,voice;PREF=1:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.name, "TEL");
        assert_eq!(line.params, ";TYPE=home,voice;PREF=1");
        assert_eq!(line.value, "+1-555-555-5555");
    }

    #[test]
    fn parse_quoted_colon_in_param() {
        let line =
            parse_content_line("ADR;GEO=\"geo:12.3457,78.910\":;;123 Main Street", 1).unwrap();
        assert_eq!(line.params, ";GEO=\"geo:12.3457,78.910\"");
        assert_eq!(line.value, ";;123 Main Street");
    }

    #[test]
    fn parse_colon_in_value() {
        let line = parse_content_line("URL:https://example.com:8080/path", 1).unwrap();
        assert_eq!(line.value, "https://example.com:8080/path");
    }

    #[test]
    fn parse_empty_value() {
        let line = parse_content_line("NICKNAME:", 1).unwrap();
        assert_eq!(line.value, "");
    }

    #[test]
    fn missing_colon_is_malformed() {
        let err = parse_content_line("FN John", 7).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedLine);
        assert_eq!(err.line, 7);
    }

    #[test]
    fn bad_name_is_malformed() {
        assert!(parse_content_line("F N:x", 1).is_err());
        assert!(parse_content_line(":x", 1).is_err());
        assert!(parse_content_line("item1.:x", 1).is_err());
    }
}
