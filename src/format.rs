//! Display formatting for table cells: currency and date rendering driven
//! by an explicitly injected [`FormatSettings`] value.
//!
//! There is no hidden mutable locale state; callers that have no settings
//! context fall back to the process-wide default via [`default_settings`].

use crate::core::Value;
use lazy_static::lazy_static;

/// Locale-ish display settings injected into cell rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatSettings {
    pub currency_symbol: String,
    pub currency_decimals: usize,
    /// chrono format string for date cells.
    pub date_format: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

lazy_static! {
    static ref DEFAULT_SETTINGS: FormatSettings = FormatSettings::default();
}

/// Process-wide fallback settings, used only when no injected value is
/// available.
pub fn default_settings() -> &'static FormatSettings {
    &DEFAULT_SETTINGS
}

/// Round half-up at two decimals, matching the calculator's output step.
fn round_to(amount: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (amount * factor).round() / factor
}

/// `1234.5` → `"$1234.50"` with the default settings.
pub fn format_money(amount: f64, settings: &FormatSettings) -> String {
    format!(
        "{}{:.prec$}",
        settings.currency_symbol,
        round_to(amount, settings.currency_decimals),
        prec = settings.currency_decimals
    )
}

/// Render a date-like value with the configured format, falling back to
/// the raw display form when it does not parse.
pub fn format_date(value: &Value, settings: &FormatSettings) -> String {
    match value.as_datetime() {
        Some(dt) => dt.format(&settings.date_format).to_string(),
        None => value.to_string(),
    }
}
