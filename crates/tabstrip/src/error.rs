//! Error types for the tab bar engine.

/// Result type alias for tab bar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the tab bar engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Interpolation was requested for a tab bar without items.
    #[error("tab bar has no items")]
    NoItems,

    /// Style input could not be parsed.
    #[error(transparent)]
    Style(#[from] tabstrip_style::Error),

    /// Options file is not valid TOML or has mistyped fields.
    #[error("failed to read tab bar options: {0}")]
    Config(#[from] toml::de::Error),

    /// A color option could not be parsed.
    #[error("invalid color for '{field}': {value}")]
    InvalidColor { field: String, value: String },
}

impl Error {
    /// Create a color error.
    pub fn invalid_color(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field: field.into(),
            value: value.into(),
        }
    }
}
