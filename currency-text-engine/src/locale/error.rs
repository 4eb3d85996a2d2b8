//! Error types for locale table construction

/// Errors that can occur while building a number locale.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("expected 10 digit glyphs, got {0}")]
    DigitCount(usize),

    #[error("empty glyph for digit '{0}'")]
    EmptyGlyph(char),

    #[error("'{0}' is not an ASCII digit")]
    NotAsciiDigit(char),

    #[error("decimal separator for locale '{0}' is empty")]
    EmptyDecimalSeparator(String),

    #[error("decimal separator {separator:?} for locale '{id}' is not a single character")]
    MultiCharacterDecimalSeparator { id: String, separator: String },

    #[error("locale table parse failed")]
    Parse(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LocaleError>;
