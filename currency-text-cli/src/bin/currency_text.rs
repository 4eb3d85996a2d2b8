use anyhow::Result;
use clap::{Parser, Subcommand};
use currency_text_engine::{
    CursorOffset, CursorRepositioner, Direction, NumberLocale, NumeralAnalyzer, absolute_position,
    is_negative, registry,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// currency-text: inspect decorated currency amounts and cursor placement.
#[derive(Parser, Debug)]
#[command(name = "currency-text")]
#[command(about = "Inspect currency amount text and compute cursor offsets", long_about = None)]
struct Cli {
    /// Number locale id (see `locales`); the bundled default when omitted
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify the numerals in a decorated amount.
    Analyze {
        /// Displayed field text, e.g. "$1,234.50"
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Compute the corrected cursor offset after an edit.
    ///
    /// Offsets are grapheme distances from the end of the text (left-to-right)
    /// or from its start (right-to-left); negative values move toward the start.
    Reposition {
        /// Displayed field text after the edit
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Cursor offset before the edit
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: CursorOffset,

        /// Currency symbol as rendered in the text
        #[arg(short, long, default_value = "")]
        symbol: String,

        /// Force right-to-left layout
        #[arg(long, conflicts_with = "no_alignment_check")]
        rtl: bool,

        /// Always use left-to-right, ignoring right-to-left marks
        #[arg(long)]
        no_alignment_check: bool,
    },

    /// Insert the decimal separator into a digit string.
    Decimal {
        /// Digits without a separator, e.g. "12345"
        text: String,

        /// Number of fraction digits
        #[arg(short, long, default_value_t = 2)]
        digits: usize,

        /// Use the locale's separator instead of the canonical "."
        #[arg(long)]
        display: bool,
    },

    /// List the bundled number locales.
    Locales,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport {
    locale: String,
    text: String,
    numeral_format: String,
    has_numbers: bool,
    represents_zero: bool,
    is_negative: bool,
    direction: Direction,
    last_relevant_offset_from_end: Option<usize>,
    first_relevant_offset_from_start: Option<usize>,
    last_number_offset_from_end: Option<usize>,
    last_decimal_separator_offset_from_end: Option<usize>,
}

#[derive(Debug, Serialize)]
struct RepositionReport {
    locale: String,
    text: String,
    direction: Direction,
    previous_offset: CursorOffset,
    offset: CursorOffset,
    position: usize,
}

#[derive(Debug, Serialize)]
struct DecimalReport {
    locale: String,
    text: String,
    decimal_digits: usize,
    result: String,
}

#[derive(Debug, Serialize)]
struct LocaleEntry<'a> {
    id: &'a str,
    display_name: &'a str,
    decimal_separator: &'a str,
    is_default: bool,
}

fn resolve_locale(id: Option<&str>) -> Result<NumberLocale> {
    let locale = match id {
        Some(id) => registry().locale(id)?,
        None => registry().default_locale()?,
    };
    tracing::debug!("Using locale {}", locale.id());
    Ok(locale)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fmt_offset(offset: Option<usize>) -> String {
    offset.map_or_else(|| "-".to_string(), |n| n.to_string())
}

fn run_analyze(locale: &NumberLocale, text: String, json: bool) -> Result<()> {
    let analyzer = NumeralAnalyzer::new(locale);
    let report = AnalyzeReport {
        locale: locale.id().to_string(),
        numeral_format: analyzer.numeral_format(&text),
        has_numbers: analyzer.has_numbers(&text),
        represents_zero: analyzer.represents_zero(&text),
        is_negative: is_negative(&text),
        direction: Direction::detect(&text),
        last_relevant_offset_from_end: analyzer.last_relevant_offset_from_end(&text),
        first_relevant_offset_from_start: analyzer.first_relevant_offset_from_start(&text),
        last_number_offset_from_end: analyzer.last_number_offset_from_end(&text),
        last_decimal_separator_offset_from_end: analyzer
            .last_decimal_separator_offset_from_end(&text),
        text,
    };

    if json {
        return print_json(&report);
    }

    println!("text:            {:?} ({})", report.text, report.locale);
    println!("digits:          {:?}", report.numeral_format);
    println!("has numbers:     {}", report.has_numbers);
    println!("zero:            {}", report.represents_zero);
    println!("negative:        {}", report.is_negative);
    println!("direction:       {:?}", report.direction);
    println!(
        "last relevant:   {} from end",
        fmt_offset(report.last_relevant_offset_from_end)
    );
    println!(
        "first relevant:  {} from start",
        fmt_offset(report.first_relevant_offset_from_start)
    );
    println!(
        "last digit:      {} from end",
        fmt_offset(report.last_number_offset_from_end)
    );
    println!(
        "last separator:  {} from end",
        fmt_offset(report.last_decimal_separator_offset_from_end)
    );
    Ok(())
}

fn run_reposition(
    locale: &NumberLocale,
    text: String,
    previous_offset: CursorOffset,
    symbol: &str,
    direction: Direction,
    json: bool,
) -> Result<()> {
    let offset =
        CursorRepositioner::new(locale).reposition(&text, previous_offset, symbol, direction);
    let position = absolute_position(&text, offset, direction);
    let report = RepositionReport {
        locale: locale.id().to_string(),
        text,
        direction,
        previous_offset,
        offset,
        position,
    };

    if json {
        return print_json(&report);
    }

    println!(
        "{} (caret at grapheme {}, {:?})",
        report.offset, report.position, report.direction
    );
    Ok(())
}

fn run_decimal(
    locale: &NumberLocale,
    text: String,
    decimal_digits: usize,
    display: bool,
    json: bool,
) -> Result<()> {
    let analyzer = NumeralAnalyzer::new(locale);
    let result = if display {
        analyzer.insert_locale_decimal_separator(&text, decimal_digits)
    } else {
        analyzer.insert_decimal_separator(&text, decimal_digits)
    };
    if json {
        return print_json(&DecimalReport {
            locale: locale.id().to_string(),
            text,
            decimal_digits,
            result,
        });
    }
    println!("{}", result);
    Ok(())
}

fn run_locales(json: bool) -> Result<()> {
    let reg = registry();
    let entries: Vec<LocaleEntry<'_>> = reg
        .locales
        .iter()
        .map(|l| LocaleEntry {
            id: &l.id,
            display_name: &l.display_name,
            decimal_separator: &l.decimal_separator,
            is_default: l.id == reg.default_locale,
        })
        .collect();

    if json {
        return print_json(&entries);
    }

    for entry in &entries {
        let marker = if entry.is_default { "*" } else { " " };
        println!(
            "{} {:<8} {:<24} {:?}",
            marker, entry.id, entry.display_name, entry.decimal_separator
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default: warn level, with --verbose: debug level
    let default_filter = if cli.verbose {
        "currency_text=debug,currency_text_engine=trace"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Locales => run_locales(cli.json),
        Commands::Analyze { text } => {
            let locale = resolve_locale(cli.locale.as_deref())?;
            run_analyze(&locale, text, cli.json)
        }
        Commands::Reposition {
            text,
            offset,
            symbol,
            rtl,
            no_alignment_check,
        } => {
            let locale = resolve_locale(cli.locale.as_deref())?;
            let direction = if rtl {
                Direction::RightToLeft
            } else {
                Direction::resolve(&text, !no_alignment_check)
            };
            run_reposition(&locale, text, offset, &symbol, direction, cli.json)
        }
        Commands::Decimal {
            text,
            digits,
            display,
        } => {
            let locale = resolve_locale(cli.locale.as_deref())?;
            run_decimal(&locale, text, digits, display, cli.json)
        }
    }
}
