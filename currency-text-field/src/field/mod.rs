//! Host text-field adapter
//!
//! [`CurrencyTextField`] sits between a text widget and the formatter: after
//! each edit it puts the caret back next to the amount, using the cursor
//! repositioning from `currency-text-engine`.

mod buffer;


pub use buffer::FieldBuffer;

use anyhow::Result;
use currency_text_engine::text::strip_all;
use currency_text_engine::{
    CursorOffset, CursorRepositioner, Direction, NumberLocale, NumeralAnalyzer, absolute_position,
    is_negative, offset_from_position, offset_without_symbol,
};
use tracing::{debug, trace};

use crate::config::{FieldSettings, Settings};

/// Minimal view of a platform text widget.
///
/// Caret positions are grapheme indices from the start of the text.
pub trait TextField {
    fn text(&self) -> &str;

    fn set_text(&mut self, text: String);

    fn caret(&self) -> usize;

    fn set_caret(&mut self, caret: usize);
}

/// A text field that keeps its caret beside the currency amount
#[derive(Debug)]
pub struct CurrencyTextField<F: TextField> {
    field: F,
    locale: NumberLocale,
    settings: FieldSettings,
}

impl<F: TextField> CurrencyTextField<F> {
    pub fn new(field: F, locale: NumberLocale, settings: FieldSettings) -> Self {
        Self {
            field,
            locale,
            settings,
        }
    }

    /// Build from loaded settings, resolving the configured locale.
    pub fn from_settings(field: F, settings: &Settings) -> Result<Self> {
        let locale = settings.number_locale()?;
        debug!(
            "Currency field: locale={} symbol={:?}",
            locale.id(),
            settings.field.currency_symbol
        );
        Ok(Self::new(field, locale, settings.field.clone()))
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    pub fn into_inner(self) -> F {
        self.field
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// Switch locale, e.g. after an app-wide language change.
    pub fn set_locale(&mut self, locale: NumberLocale) {
        debug!("Currency field locale changed to {}", locale.id());
        self.locale = locale;
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Layout direction of the current text.
    pub fn direction(&self) -> Direction {
        Direction::resolve(self.field.text(), self.settings.check_language_alignment)
    }

    /// Caret offset from the end of the document (`<= 0`).
    pub fn selected_text_range_offset_from_end(&self) -> CursorOffset {
        offset_from_position(
            self.field.text(),
            self.field.caret(),
            Direction::LeftToRight,
        )
    }

    /// Caret offset from the anchor edge of the current direction.
    pub fn selected_text_range_offset(&self) -> CursorOffset {
        offset_from_position(self.field.text(), self.field.caret(), self.direction())
    }

    /// Place the caret for a field that has just gained focus.
    pub fn set_initial_selected_text_range(&mut self) {
        self.adjust_selected_text_range(0);
    }

    /// Reposition the caret given its offset before the last edit.
    ///
    /// `last_offset` is measured from the anchor edge of the amount without a
    /// boundary currency symbol; see
    /// [`currency_text_engine::offset_without_symbol`].
    pub fn update_selected_text_range(&mut self, last_offset: CursorOffset) {
        self.adjust_selected_text_range(last_offset);
    }

    /// Replace the field text with `formatted` and keep the caret where the
    /// user was typing.
    pub fn apply_formatted_text(&mut self, formatted: impl Into<String>) {
        let last_offset = offset_without_symbol(
            self.field.text(),
            self.selected_text_range_offset(),
            &self.settings.currency_symbol,
            self.direction(),
        );
        self.field.set_text(formatted.into());
        self.update_selected_text_range(last_offset);
    }

    fn adjust_selected_text_range(&mut self, last_offset: CursorOffset) {
        let text = self.field.text();
        let symbol = self.settings.currency_symbol.as_str();

        // Nothing but the symbol: leave the selection alone
        if strip_all(text, symbol).is_empty() {
            trace!("adjust_selected_text_range: no amount text, skipping");
            return;
        }

        let direction = self.direction();
        let offset = CursorRepositioner::new(&self.locale).reposition(
            text,
            last_offset,
            symbol,
            direction,
        );
        let caret = absolute_position(text, offset, direction);
        trace!(
            "adjust_selected_text_range: offset {} -> caret {}",
            offset, caret
        );
        self.field.set_caret(caret);
    }

    // --- Amount queries ---

    fn analyzer(&self) -> NumeralAnalyzer<'_> {
        NumeralAnalyzer::new(&self.locale)
    }

    /// The digits of the current amount, ASCII only.
    pub fn amount_digits(&self) -> String {
        self.analyzer().numeral_format(self.field.text())
    }

    pub fn has_numbers(&self) -> bool {
        self.analyzer().has_numbers(self.field.text())
    }

    pub fn represents_zero(&self) -> bool {
        self.analyzer().represents_zero(self.field.text())
    }

    pub fn is_negative(&self) -> bool {
        is_negative(self.field.text())
    }

    /// The amount digits with a `.` inserted for the configured number of
    /// fraction digits, ready for numeric parsing.
    pub fn decimal_amount(&self) -> String {
        let analyzer = self.analyzer();
        let digits = analyzer.numeral_format(self.field.text());
        analyzer.insert_decimal_separator(&digits, self.settings.decimal_digits)
    }
}
