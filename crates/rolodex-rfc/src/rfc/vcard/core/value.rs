//! Leaf value types.
//!
//! Every leaf escapes its input on construction and classifies the escaped
//! form; a value that would be illegal on the wire cannot be built.

use super::charset::{TextSubset, classify_param, classify_text};
use super::error::{VCardError, VCardResult};
use crate::rfc::vcard::build::escape::{
    escape_component, escape_param, escape_text, normalize_line_breaks,
};

/// Anything that can be written as (part of) a content line.
pub trait Value {
    /// Returns the escaped, wire-safe text.
    fn render(&self) -> String;

    /// Number of logical elements; zero when the value is empty.
    fn element_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}

fn escaped_text(
    raw: &str,
    context: &'static str,
    escape: fn(&str) -> String,
) -> VCardResult<(String, String)> {
    let raw = normalize_line_breaks(raw);
    let escaped = escape(&raw);
    if classify_text(&escaped) == TextSubset::Other {
        return Err(VCardError::IllegalCharacters {
            context,
            value: raw,
        });
    }
    Ok((raw, escaped))
}

/// A whole text property value (FN, NOTE, EMAIL, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PlainText {
    raw: String,
    escaped: String,
}

impl PlainText {
    /// ## Errors
    /// Returns [`VCardError::IllegalCharacters`] if the text contains control
    /// characters.
    pub fn new(value: impl AsRef<str>) -> VCardResult<Self> {
        let (raw, escaped) = escaped_text(value.as_ref(), "text", escape_text)?;
        Ok(Self { raw, escaped })
    }

    /// The unescaped text, line breaks normalized to LF.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Value for PlainText {
    fn render(&self) -> String {
        self.escaped.clone()
    }

    fn element_count(&self) -> usize {
        usize::from(!self.raw.is_empty())
    }
}

/// One component of a structured value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Component {
    raw: String,
    escaped: String,
}

impl Component {
    /// ## Errors
    /// Returns [`VCardError::IllegalCharacters`] if the text contains control
    /// characters.
    pub fn new(value: impl AsRef<str>) -> VCardResult<Self> {
        let (raw, escaped) = escaped_text(value.as_ref(), "component", escape_component)?;
        Ok(Self { raw, escaped })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Value for Component {
    fn render(&self) -> String {
        self.escaped.clone()
    }

    fn element_count(&self) -> usize {
        usize::from(!self.raw.is_empty())
    }
}

/// A comma-separated list of components (list positions of N and ADR).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ListComponent(Vec<Component>);

impl ListComponent {
    /// Builds a list; a list whose members are all empty becomes the empty
    /// list.
    ///
    /// ## Errors
    /// Returns [`VCardError::IllegalCharacters`] for the first illegal member.
    pub fn new<I, S>(items: I) -> VCardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let components = items
            .into_iter()
            .map(Component::new)
            .collect::<VCardResult<Vec<_>>>()?;

        if components.iter().all(Value::is_empty) {
            return Ok(Self::default());
        }
        Ok(Self(components))
    }

    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.0.iter().map(Component::as_str).collect()
    }
}

impl Value for ListComponent {
    fn render(&self) -> String {
        self.0
            .iter()
            .map(Component::render)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn element_count(&self) -> usize {
        self.0.iter().filter(|c| !c.is_empty()).count()
    }
}

/// An absolute URI. Only the scheme is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    /// ## Errors
    /// Returns [`VCardError::MissingScheme`] if there is no RFC 3986 scheme
    /// and [`VCardError::InvalidUri`] for whitespace or control characters.
    pub fn new(value: impl Into<String>) -> VCardResult<Self> {
        let value = value.into();

        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(VCardError::InvalidUri(value));
        }

        let Some((scheme, _)) = value.split_once(':') else {
            return Err(VCardError::MissingScheme(value));
        };
        let mut chars = scheme.chars();
        let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(VCardError::MissingScheme(value));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.split_once(':').map_or("", |(scheme, _)| scheme)
    }
}

impl Value for Uri {
    fn render(&self) -> String {
        self.0.clone()
    }

    fn element_count(&self) -> usize {
        1
    }
}

/// A free-form parameter value (ALTID, LABEL).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamText {
    raw: String,
    escaped: String,
    quote: bool,
}

impl ParamText {
    /// ## Errors
    /// Returns [`VCardError::IllegalCharacters`] if the value contains a
    /// double quote or control characters.
    pub fn new(value: impl AsRef<str>) -> VCardResult<Self> {
        let raw = normalize_line_breaks(value.as_ref());
        let escaped = escape_param(&raw);
        let subset = classify_param(&escaped);
        if !subset.is_legal() {
            return Err(VCardError::IllegalCharacters {
                context: "parameter value",
                value: raw,
            });
        }
        Ok(Self {
            raw,
            escaped,
            quote: subset.needs_quotes(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Renders in double quotes regardless of content.
    #[must_use]
    pub fn render_quoted(&self) -> String {
        format!("\"{}\"", self.escaped)
    }
}

impl Value for ParamText {
    fn render(&self) -> String {
        if self.quote {
            self.render_quoted()
        } else {
            self.escaped.clone()
        }
    }

    fn element_count(&self) -> usize {
        usize::from(!self.raw.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_escapes_on_construction() {
        let text = PlainText::new("Line 1\r\nLine 2, and\\more").unwrap();
        assert_eq!(text.as_str(), "Line 1\nLine 2, and\\more");
        assert_eq!(text.render(), "Line 1\\nLine 2, and\\\\more");
        assert_eq!(text.element_count(), 1);
    }

    #[test]
    fn plain_text_rejects_controls() {
        let err = PlainText::new("bell\u{7}").unwrap_err();
        assert!(matches!(err, VCardError::IllegalCharacters { context: "text", .. }));
    }

    #[test]
    fn empty_text_has_no_elements() {
        let text = PlainText::new("").unwrap();
        assert!(text.is_empty());
        assert_eq!(text.render(), "");
    }

    #[test]
    fn component_escapes_separators() {
        let c = Component::new("Doe, Jr;").unwrap();
        assert_eq!(c.render(), "Doe\\, Jr\\;");
        assert_eq!(c.as_str(), "Doe, Jr;");
    }

    #[test]
    fn list_component_counts_non_empty() {
        let list = ListComponent::new(["Jr.", "", "M.D."]).unwrap();
        assert_eq!(list.render(), "Jr.,,M.D.");
        assert_eq!(list.element_count(), 2);
        assert_eq!(list.values(), vec!["Jr.", "", "M.D."]);
    }

    #[test]
    fn all_empty_list_is_empty() {
        let list = ListComponent::new(["", ""]).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.render(), "");
        assert_eq!(list, ListComponent::default());
    }

    #[test]
    fn uri_requires_scheme() {
        assert!(Uri::new("http://example.com").is_ok());
        assert!(Uri::new("tel:+1-555-555-5555").is_ok());
        assert_eq!(Uri::new("urn:uuid:abc").unwrap().scheme(), "urn");

        assert!(matches!(Uri::new("example.com"), Err(VCardError::MissingScheme(_))));
        assert!(matches!(Uri::new(":nothing"), Err(VCardError::MissingScheme(_))));
        assert!(matches!(Uri::new("1http://x"), Err(VCardError::MissingScheme(_))));
        assert!(matches!(Uri::new("http://a b"), Err(VCardError::InvalidUri(_))));
    }

    #[test]
    fn param_text_quoting() {
        assert_eq!(ParamText::new("1").unwrap().render(), "1");
        assert_eq!(ParamText::new("geo:1,2").unwrap().render(), "\"geo:1,2\"");
        assert_eq!(ParamText::new("plain").unwrap().render_quoted(), "\"plain\"");
        assert_eq!(
            ParamText::new("123 Main St\nAny Town").unwrap().render(),
            "123 Main St\\nAny Town"
        );
    }

    #[test]
    fn param_text_rejects_double_quote() {
        assert!(ParamText::new("say \"hi\"").is_err());
        assert!(ParamText::new("nul\u{0}").is_err());
    }
}
