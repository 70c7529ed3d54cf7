//! Character subsets of RFC 6350 §3.3.
//!
//! Classifiers return the *weakest* subset a string belongs to. The variants
//! of each subset enum are ordered from strongest to weakest, so the
//! classification of a string is the maximum over its characters.

use super::error::{VCardError, VCardResult};

/// Subsets for parameter values (`param-value` in RFC 6350 §3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamSubset {
    /// No `:`, `;` or `"`. Written as-is.
    Safe,
    /// Contains `:` or `;`. Must be written in double quotes.
    QSafe,
    /// Contains `"`. Cannot be written at all.
    Value,
    /// Contains control characters.
    Other,
}

impl ParamSubset {
    #[must_use]
    pub const fn is_legal(self) -> bool {
        matches!(self, Self::Safe | Self::QSafe)
    }

    #[must_use]
    pub const fn needs_quotes(self) -> bool {
        matches!(self, Self::QSafe)
    }
}

/// Subsets for escaped property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextSubset {
    /// No raw `,`, `;` or `\`. Usable as one component of a structured value.
    Component,
    /// Raw `,` or `;` present. Usable only as a whole property value.
    Text,
    /// Control characters or a backslash not starting `\n`, `\,`, `\\`, `\;`.
    Other,
}

impl TextSubset {
    #[must_use]
    pub const fn is_legal(self) -> bool {
        !matches!(self, Self::Other)
    }
}

fn is_disallowed_control(c: char) -> bool {
    c.is_control() && c != '\t'
}

/// Classifies a parameter value.
#[must_use]
pub fn classify_param(value: &str) -> ParamSubset {
    value
        .chars()
        .map(|c| match c {
            c if is_disallowed_control(c) => ParamSubset::Other,
            '"' => ParamSubset::Value,
            ':' | ';' => ParamSubset::QSafe,
            _ => ParamSubset::Safe,
        })
        .max()
        .unwrap_or(ParamSubset::Safe)
}

/// Classifies an already-escaped property value.
#[must_use]
pub fn classify_text(escaped: &str) -> TextSubset {
    let mut subset = TextSubset::Component;
    let mut chars = escaped.chars();

    while let Some(c) = chars.next() {
        let class = match c {
            '\\' => match chars.next() {
                Some('n' | ',' | '\\' | ';') => TextSubset::Component,
                _ => TextSubset::Other,
            },
            ',' | ';' => TextSubset::Text,
            c if is_disallowed_control(c) => TextSubset::Other,
            _ => TextSubset::Component,
        };

        if class == TextSubset::Other {
            return TextSubset::Other;
        }
        subset = subset.max(class);
    }

    subset
}

/// Returns whether `c` is a raw control character that may not appear in
/// vCard input. HTAB, LF and CR are the only permitted controls.
#[must_use]
pub const fn is_illegal_input_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{7f}')
}

/// Names the Unicode block of `c` for diagnostics.
#[must_use]
pub const fn unicode_block(c: char) -> &'static str {
    match c {
        '\u{0}'..='\u{7f}' => "Basic Latin",
        '\u{80}'..='\u{ff}' => "Latin-1 Supplement",
        '\u{2000}'..='\u{206f}' => "General Punctuation",
        _ => "Other",
    }
}

/// Rejects input containing raw control characters.
///
/// ## Errors
/// Returns [`VCardError::IllegalCharacter`] for the first offending
/// character, with its 1-based physical line.
pub fn check_input_chars(input: &str) -> VCardResult<()> {
    let mut line = 1;
    for c in input.chars() {
        if c == '\n' {
            line += 1;
        } else if is_illegal_input_char(c) {
            return Err(VCardError::IllegalCharacter {
                block: unicode_block(c),
                code_point: u32::from(c),
                line,
            });
        }
    }
    Ok(())
}
