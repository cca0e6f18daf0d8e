//! Rounding and display helpers shared by the calculators.
//!
//! Every intermediate currency value is rounded to whole units at the point
//! it is computed, midpoint away from zero. Totals are sums of rounded parts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to whole units, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use rd_credit_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(24995, 1)), Decimal::from(2500));
/// assert_eq!(round_currency(Decimal::new(24994, 1)), Decimal::from(2499));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value to one decimal place, midpoint away from zero.
pub fn round_to_tenths(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a currency amount as `$1,234` or `$1,234.50`.
///
/// Cents are rounded midpoint away from zero, never truncated.
pub fn format_currency(amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", amount.abs());
    let (whole, cents) = match text.split_once('.') {
        Some((whole, cents)) => (whole, cents),
        None => (text.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    if cents == "00" {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, cents)
    }
}

/// Formats a fractional rate such as `0.65` as `65%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
