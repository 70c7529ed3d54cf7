use serde::Deserialize;

/// How a multi-valued TYPE parameter is written on the wire.
///
/// `Values` emits a single `;TYPE=FAX,VOICE` segment, `Parameters` repeats the
/// parameter as `;TYPE=FAX;TYPE=VOICE`. Both are valid RFC 6350.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeListStyle {
    #[default]
    Values,
    Parameters,
}

impl TypeListStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::Parameters => "parameters",
        }
    }
}

impl std::fmt::Display for TypeListStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
