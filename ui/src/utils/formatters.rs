//! Input formatters applied before a field change reaches the draft

use crate::features::plans::{AmountCents, CurrencyCode};

const MAX_MAJOR_DIGITS: usize = 15;

/// Keep only what can form a non-negative decimal number.
///
/// Commas are read as decimal separators, a second separator is dropped and
/// the fractional part is cut to `max_decimals` digits.
pub fn positive_number(raw: &str, max_decimals: u32) -> String {
    let mut output = String::with_capacity(raw.len());
    let mut seen_separator = false;
    let mut decimals = 0;

    for c in raw.trim().chars() {
        match c {
            '0'..='9' if seen_separator => {
                if decimals < max_decimals {
                    output.push(c);
                    decimals += 1;
                }
            }
            '0'..='9' => output.push(c),
            '.' | ',' if !seen_separator && max_decimals > 0 => {
                seen_separator = true;
                output.push('.');
            }
            _ => {}
        }
    }
    output
}

/// Keep the integer part of a number, digits only
pub fn integer_only(raw: &str) -> String {
    raw.trim()
        .split(['.', ','])
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect()
}

/// Convert the amount text field into the draft value
pub fn parse_amount_input(raw: &str, currency: CurrencyCode) -> AmountCents {
    let sanitized = positive_number(raw, currency.minor_units());
    let (major, minor) = sanitized.split_once('.').unwrap_or((sanitized.as_str(), ""));
    if major.is_empty() && minor.is_empty() {
        return AmountCents::Empty;
    }
    if major.len() > MAX_MAJOR_DIGITS {
        return AmountCents::Empty;
    }

    let scale = 10u64.pow(currency.minor_units());
    let major_value = if major.is_empty() { 0 } else { major.parse::<u64>().unwrap_or(0) };
    let minor_value = if minor.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", minor, width = currency.minor_units() as usize);
        padded.parse::<u64>().unwrap_or(0)
    };

    major_value
        .checked_mul(scale)
        .and_then(|cents| cents.checked_add(minor_value))
        .map(AmountCents::Cents)
        .unwrap_or(AmountCents::Empty)
}

/// Render a draft amount as the amount text field shows it
pub fn format_amount_input(amount: AmountCents, currency: CurrencyCode) -> String {
    match amount {
        AmountCents::Unset | AmountCents::Empty => String::new(),
        AmountCents::Cents(cents) => {
            let minor_units = currency.minor_units();
            if minor_units == 0 {
                return cents.to_string();
            }
            let scale = 10u64.pow(minor_units);
            format!(
                "{}.{:0width$}",
                cents / scale,
                cents % scale,
                width = minor_units as usize
            )
        }
    }
}

/// Text the amount field shows.
///
/// The typed text is kept while it still parses to the draft amount, so partial
/// input like `12.` survives; otherwise the draft amount is rendered.
pub fn amount_field_text(typed: &str, amount: AmountCents, currency: CurrencyCode) -> String {
    if parse_amount_input(typed, currency) == amount {
        typed.to_string()
    } else {
        format_amount_input(amount, currency)
    }
}

/// Convert the trial period text field into a number of days
pub fn parse_trial_period_input(raw: &str) -> Option<u32> {
    let digits = integer_only(&positive_number(raw, 2));
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

/// Tax rate percentage without trailing zeros, `5.5` renders as `5.5%`
pub fn format_rate(rate: f64) -> String {
    let rounded = (rate * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        let text = format!("{:.2}", rounded);
        format!("{}%", text.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_number() {
        assert_eq!(positive_number("-12.345", 2), "12.34");
        assert_eq!(positive_number("1,5", 2), "1.5");
        assert_eq!(positive_number("1.2.3", 2), "1.2");
        assert_eq!(positive_number("abc", 2), "");
        assert_eq!(positive_number("12.9", 0), "129");
    }

    #[test]
    fn test_integer_only() {
        assert_eq!(integer_only("14.7"), "14");
        assert_eq!(integer_only(" 30 "), "30");
        assert_eq!(integer_only(""), "");
    }

    #[test]
    fn test_parse_amount_input() {
        assert_eq!(parse_amount_input("", CurrencyCode::Usd), AmountCents::Empty);
        assert_eq!(parse_amount_input("abc", CurrencyCode::Usd), AmountCents::Empty);
        assert_eq!(parse_amount_input("12", CurrencyCode::Usd), AmountCents::Cents(1200));
        assert_eq!(parse_amount_input("12.", CurrencyCode::Usd), AmountCents::Cents(1200));
        assert_eq!(parse_amount_input("12.5", CurrencyCode::Eur), AmountCents::Cents(1250));
        assert_eq!(parse_amount_input(".05", CurrencyCode::Usd), AmountCents::Cents(5));
        assert_eq!(parse_amount_input("1500", CurrencyCode::Jpy), AmountCents::Cents(1500));
        assert_eq!(parse_amount_input("0", CurrencyCode::Usd), AmountCents::Cents(0));
    }

    #[test]
    fn test_format_amount_input() {
        assert_eq!(format_amount_input(AmountCents::Unset, CurrencyCode::Usd), "");
        assert_eq!(format_amount_input(AmountCents::Empty, CurrencyCode::Usd), "");
        assert_eq!(format_amount_input(AmountCents::Cents(1205), CurrencyCode::Usd), "12.05");
        assert_eq!(format_amount_input(AmountCents::Cents(1500), CurrencyCode::Jpy), "1500");
    }

    #[test]
    fn test_amount_field_text_follows_draft() {
        assert_eq!(amount_field_text("12.", AmountCents::Cents(1200), CurrencyCode::Usd), "12.");
        assert_eq!(amount_field_text("", AmountCents::Empty, CurrencyCode::Usd), "");
        assert_eq!(amount_field_text("", AmountCents::Cents(1250), CurrencyCode::Usd), "12.50");
        assert_eq!(amount_field_text("9", AmountCents::Cents(1250), CurrencyCode::Usd), "12.50");
        assert_eq!(amount_field_text("9", AmountCents::Unset, CurrencyCode::Usd), "");
    }

    #[test]
    fn test_parse_trial_period_input() {
        assert_eq!(parse_trial_period_input(""), None);
        assert_eq!(parse_trial_period_input("14"), Some(14));
        assert_eq!(parse_trial_period_input("-7"), Some(7));
        assert_eq!(parse_trial_period_input("3.5"), Some(3));
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(20.0), "20%");
        assert_eq!(format_rate(5.5), "5.5%");
        assert_eq!(format_rate(8.125), "8.13%");
    }
}
