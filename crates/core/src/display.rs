//! Number and money formatting for the dashboard views.
//!
//! Absent values always render as [`NOT_AVAILABLE`] — a missing price is
//! never shown as 0 or left blank, so "unknown" stays distinguishable
//! from "worthless".

use crate::models::portfolio::PortfolioItem;

/// Marker rendered for any value the backend could not price.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a number with thousands separators and a fixed number of
/// decimal places, e.g. `thousands(65000.0, 2)` → `"65,000.00"`.
#[must_use]
pub fn thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Money string in a quote currency, e.g. `"65,000.00 USD"`, or
/// [`NOT_AVAILABLE`] when the value is absent.
#[must_use]
pub fn money(value: Option<f64>, quote: &str) -> String {
    match value {
        Some(v) => format!("{} {}", thousands(v, 2), quote.to_uppercase()),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Percent string, e.g. `"2.50%"`, or [`NOT_AVAILABLE`] when absent.
#[must_use]
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Signed profit/loss with percentage, e.g. `"+2,500.00 (4.17%)"`.
#[must_use]
pub fn signed_money_with_percent(amount: f64, pct: f64) -> String {
    let sign = if amount >= 0.0 { "+" } else { "" };
    format!("{sign}{} ({pct:.2}%)", thousands(amount, 2))
}

/// The four rendered market cells of a portfolio row:
/// current price, current value, profit/loss, profit/loss percent.
///
/// Routed through [`PortfolioItem::pricing`], so an unpriced item renders
/// the whole group as [`NOT_AVAILABLE`] at once — never a partial mix.
#[must_use]
pub fn item_pricing_cells(item: &PortfolioItem, quote: &str) -> [String; 4] {
    match item.pricing() {
        Some(p) => [
            money(Some(p.current_price), quote),
            money(Some(p.current_value), quote),
            signed_money_with_percent(p.profit_loss, p.profit_loss_percent),
            percent(Some(p.profit_loss_percent)),
        ],
        None => [
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
            NOT_AVAILABLE.to_string(),
        ],
    }
}
