//! Configuration for the currency field

pub mod settings;

pub use settings::{FieldSettings, LocaleSettings, Settings};
