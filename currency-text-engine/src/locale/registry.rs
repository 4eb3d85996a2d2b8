//! Built-in locale table
//!
//! All bundled number locales are defined in `locales.toml` at the crate root.
//! This module deserializes that file and provides a global registry for lookup.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::error::{LocaleError, Result};
use super::{DigitGlyphTable, NumberLocale};

/// Top-level config parsed from `locales.toml`
#[derive(Debug, Deserialize)]
pub struct LocaleRegistry {
    /// Locale id used when none is configured (e.g. "en-US")
    pub default_locale: String,
    pub locales: Vec<LocaleConfig>,
}

/// A single locale entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale id (e.g. "ar-EG")
    pub id: String,
    /// Human-readable name
    pub display_name: String,
    /// Decimal separator glyph
    pub decimal_separator: String,
    /// Digit glyphs for 0..9; ASCII digits when absent
    #[serde(default)]
    pub digits: Option<Vec<String>>,
}

impl LocaleConfig {
    /// Build the [`NumberLocale`] described by this entry.
    pub fn to_locale(&self) -> Result<NumberLocale> {
        let digits = match &self.digits {
            Some(glyphs) => DigitGlyphTable::from_glyphs(glyphs)?,
            None => DigitGlyphTable::ascii(),
        };
        NumberLocale::new(self.id.clone(), self.decimal_separator.clone(), digits)
    }
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

/// Return the global locale registry, parsed once from the embedded `locales.toml`.
pub fn registry() -> &'static LocaleRegistry {
    REGISTRY.get_or_init(|| {
        let toml_str = include_str!("../../locales.toml");
        LocaleRegistry::from_toml_str(toml_str).expect("Failed to parse locales.toml")
    })
}

impl LocaleRegistry {
    /// Parse a registry from TOML text in the `locales.toml` layout.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(LocaleError::Parse)
    }

    /// Look up a locale entry by id.
    pub fn find(&self, id: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.id == id)
    }

    /// Build the locale with the given id.
    pub fn locale(&self, id: &str) -> Result<NumberLocale> {
        self.find(id)
            .ok_or_else(|| LocaleError::UnknownLocale(id.to_string()))?
            .to_locale()
    }

    /// Build the default locale.
    pub fn default_locale(&self) -> Result<NumberLocale> {
        self.locale(&self.default_locale)
    }

    /// All locale ids, in file order.
    pub fn ids(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.id.as_str()).collect()
    }
}
