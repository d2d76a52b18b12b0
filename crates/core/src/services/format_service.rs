use serde::{Deserialize, Serialize};

use crate::models::settings::NumberFormat;

/// Currency suffix used when the caller does not pick one.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// CSS class of a profit/loss cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitLossClass {
    Positive,
    Negative,
    Neutral,
}

impl ProfitLossClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProfitLossClass::Positive => "positive",
            ProfitLossClass::Negative => "negative",
            ProfitLossClass::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for ProfitLossClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a profit/loss percentage by its sign. Zero and NaN are neutral.
#[must_use]
pub fn profit_loss_class(percentage: f64) -> ProfitLossClass {
    if percentage > 0.0 {
        ProfitLossClass::Positive
    } else if percentage < 0.0 {
        ProfitLossClass::Negative
    } else {
        ProfitLossClass::Neutral
    }
}

/// Same as [`profit_loss_class`], with a missing value treated as neutral.
#[must_use]
pub fn profit_loss_class_opt(percentage: Option<f64>) -> ProfitLossClass {
    percentage.map_or(ProfitLossClass::Neutral, profit_loss_class)
}

/// Two-decimal number with locale separators, no currency.
///
/// Non-finite input renders as zero.
#[must_use]
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // -0.004 rounds to 0.00 and must not keep its sign
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0');
    let negative = value < 0.0 && !is_zero;

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let digits = int_part.len();
    let group = format.min_grouping_digits > 0 && digits >= format.min_grouping_digits;
    for (i, ch) in int_part.chars().enumerate() {
        if group && i > 0 && (digits - i) % 3 == 0 {
            out.push(format.group_separator);
        }
        out.push(ch);
    }
    out.push(format.decimal_separator);
    out.push_str(frac_part);
    out
}

/// Money amount in es-ES format followed by `symbol`, e.g. `1234,50€`.
#[must_use]
pub fn format_currency(value: f64, symbol: &str) -> String {
    format_currency_with(value, symbol, &NumberFormat::default())
}

/// Money amount in the given number format followed by `symbol`.
#[must_use]
pub fn format_currency_with(value: f64, symbol: &str, format: &NumberFormat) -> String {
    let mut out = format_number(value, format);
    out.push_str(symbol);
    out
}

/// Percentage with two decimals and a `.` separator, without the `%` sign.
/// A missing or non-finite value renders as `0.00`.
///
/// Small losses keep their sign (`-0.00`) so the text agrees with
/// [`profit_loss_class`]. Only an exact zero is unsigned.
#[must_use]
pub fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(v) if v == 0.0 => "0.00".to_string(),
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "0.00".to_string(),
    }
}
