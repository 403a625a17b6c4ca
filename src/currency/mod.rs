use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of decimal places carried by this currency.
    pub fn minor_units(&self) -> u8 {
        minor_units_for(self.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "INR" => "₹".into(),
        "CAD" => "CAD".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Converts a decimal amount into integer minor units (e.g. cents),
/// rounding to the nearest unit. Exact-sum arithmetic in the allocation
/// engine runs entirely on these integers.
pub fn to_minor_units(amount: f64, minor: u8) -> i64 {
    let scale = 10f64.powi(minor as i32);
    (amount * scale).round() as i64
}

/// Converts integer minor units back into a decimal amount.
pub fn from_minor_units(units: i64, minor: u8) -> f64 {
    let scale = 10f64.powi(minor as i32);
    units as f64 / scale
}

/// Formats an amount with its currency symbol and thousands grouping.
pub fn format_amount(amount: f64, code: &CurrencyCode) -> String {
    let precision = code.minor_units() as usize;
    let body = format!("{:.*}", precision, amount.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let mut grouped = group_digits(int_part, ',');
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    let symbol = symbol_for(code.as_str());
    if amount < 0.0 {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_unit_round_trip() {
        let cents = to_minor_units(1234.56, 2);
        assert_eq!(cents, 123456);
        assert!((from_minor_units(cents, 2) - 1234.56).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_decimal_currency_rounds_to_whole_units() {
        assert_eq!(to_minor_units(1234.6, 0), 1235);
    }

    #[test]
    fn formats_with_grouping_and_symbol() {
        let code = CurrencyCode::new("USD");
        assert_eq!(format_amount(1234567.5, &code), "$1,234,567.50");
        assert_eq!(format_amount(-42.0, &code), "-$42.00");
    }

    #[test]
    fn formats_yen_without_decimals() {
        let code = CurrencyCode::new("JPY");
        assert_eq!(format_amount(5000.0, &code), "¥5,000");
    }
}
