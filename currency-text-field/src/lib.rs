//! currency-text-field: caret handling for currency text fields
//!
//! This crate connects a host text widget to currency-text-engine.
//! It loads field settings from `config.toml` and keeps the caret next to
//! the amount whenever the formatter rewrites the field text.

pub mod config;
pub mod field;

pub use config::{FieldSettings, LocaleSettings, Settings};
pub use field::{CurrencyTextField, FieldBuffer, TextField};
