//! Settings configuration
//!
//! Manages user-configurable settings for the currency field.
//! Default values are defined in `config/default.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use currency_text_engine::{DigitGlyphTable, NumberLocale, registry};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

/// Configuration settings for the currency field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Number locale settings
    pub locale: LocaleSettings,
    /// Field behaviour settings
    pub field: FieldSettings,
}

/// Which number locale to use, with optional overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleSettings {
    /// Bundled locale id (e.g. "de-DE")
    pub id: String,
    /// Replaces the bundled decimal separator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<String>,
    /// Replaces the bundled digit glyphs; exactly ten, for 0..9
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits: Option<Vec<String>>,
}

/// Field behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSettings {
    /// Currency symbol as rendered by the formatter
    pub currency_symbol: String,
    /// Fraction digits of the currency
    pub decimal_digits: usize,
    /// Detect right-to-left layouts from the right-to-left mark
    pub check_language_alignment: bool,
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("embedded default.toml must be valid")
    }
}

impl Default for FieldSettings {
    fn default() -> Self {
        Settings::default().field
    }
}

/// Recursively merge `overlay` TOML values on top of `base`.
fn merge_toml(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, _) => {
            *base = overlay.clone();
        }
    }
}

/// Parse user TOML content merged on top of default.toml.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let mut base: toml::Value = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: toml::Value = toml::from_str(user_content)?;
    merge_toml(&mut base, &user);
    let settings: Settings = base.try_into()?;
    Ok(settings)
}

/// Get the project directories for currency-text.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "currency-text", "currency-text")
}

impl Settings {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from {:?}", config_file);
        let content = fs::read_to_string(&config_file)?;
        parse_with_defaults(&content)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        parse_with_defaults(&content)
    }

    /// Save settings to the default configuration file
    pub fn save(&self) -> Result<()> {
        let Some(config_file) = Self::config_file() else {
            anyhow::bail!("Could not determine config directory");
        };

        debug!("Saving config to {:?}", config_file);
        self.save_to(&config_file)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the number locale: the bundled entry for `locale.id` with any
    /// configured overrides applied.
    pub fn number_locale(&self) -> Result<NumberLocale> {
        let mut locale = registry().locale(&self.locale.id)?;
        if let Some(glyphs) = &self.locale.digits {
            locale = locale.with_digits(DigitGlyphTable::from_glyphs(glyphs)?);
        }
        if let Some(separator) = &self.locale.decimal_separator {
            locale = locale.with_decimal_separator(separator.clone())?;
        }
        Ok(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.locale.id, "en-US");
        assert_eq!(settings.field.currency_symbol, "$");
        assert_eq!(settings.field.decimal_digits, 2);
        assert!(settings.field.check_language_alignment);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = Settings::default();
        let toml_str = toml::to_string(&settings).unwrap();
        let loaded: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.locale.id, settings.locale.id);
        assert_eq!(
            loaded.field.decimal_digits,
            settings.field.decimal_digits
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[locale]
id = "de-DE"

[field]
currency_symbol = "€"
check_language_alignment = false
"#
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.locale.id, "de-DE");
        assert_eq!(settings.field.currency_symbol, "€");
        assert!(!settings.field.check_language_alignment);
        // unspecified keys keep the defaults
        assert_eq!(settings.field.decimal_digits, 2);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.field.decimal_digits = 3;
        settings.locale.decimal_separator = Some(",".to_string());
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.field.decimal_digits, 3);
        assert_eq!(loaded.locale.decimal_separator.as_deref(), Some(","));
    }

    #[test]
    fn test_config_file_name() {
        if let Some(file) = Settings::config_file() {
            assert!(file.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_number_locale_from_bundle() {
        let mut settings = Settings::default();
        settings.locale.id = "ar-EG".to_string();
        let locale = settings.number_locale().unwrap();
        assert_eq!(locale.decimal_separator(), "\u{66b}");
        assert_eq!(locale.digits().digit_for("\u{661}"), Some('1'));
    }

    #[test]
    fn test_number_locale_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[locale]
id = "en-US"
decimal_separator = ","
digits = ["o", "i", "z", "e", "h", "s", "g", "t", "b", "q"]
"#
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        let locale = settings.number_locale().unwrap();
        assert_eq!(locale.decimal_separator(), ",");
        assert_eq!(locale.digits().digit_for("z"), Some('2'));
    }

    #[test]
    fn test_number_locale_errors() {
        let mut settings = Settings::default();
        settings.locale.id = "xx-XX".to_string();
        assert!(settings.number_locale().is_err());

        let mut settings = Settings::default();
        settings.locale.digits = Some(vec!["0".to_string()]);
        assert!(settings.number_locale().is_err());

        let mut settings = Settings::default();
        settings.locale.decimal_separator = Some(String::new());
        assert!(settings.number_locale().is_err());

        let mut settings = Settings::default();
        settings.locale.decimal_separator = Some("dot".to_string());
        assert!(settings.number_locale().is_err());
    }
}
