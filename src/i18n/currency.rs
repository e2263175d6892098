use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Default number of fraction digits for money
pub const DEFAULT_DECIMALS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// How a locale writes money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConfig {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    pub decimal_separator: &'static str,
    pub thousands_separator: &'static str,
}

pub const USD: CurrencyConfig = CurrencyConfig {
    symbol: "$",
    position: SymbolPosition::Prefix,
    decimal_separator: ".",
    thousands_separator: ",",
};

pub const EUR: CurrencyConfig = CurrencyConfig {
    symbol: "€",
    position: SymbolPosition::Suffix,
    decimal_separator: ",",
    thousands_separator: ".",
};

impl CurrencyConfig {
    /// Formats `value` without the currency symbol.
    pub fn format_number(&self, value: Decimal, decimals: u32) -> String {
        let mut rounded =
            value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(decimals);

        let text = rounded.to_string();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };

        let mut formatted = String::with_capacity(text.len() + integer.len() / 3 + 1);
        // "-0.00" after rounding is printed without a sign
        if negative && !rounded.is_zero() {
            formatted.push('-');
        }
        formatted.push_str(&group_thousands(integer, self.thousands_separator));
        if let Some(fraction) = fraction {
            formatted.push_str(self.decimal_separator);
            formatted.push_str(fraction);
        }
        formatted
    }

    /// Formats `value` as money: `$1,234.50` or `1.234,50 €`.
    pub fn format(&self, value: Decimal, decimals: u32) -> String {
        let number = self.format_number(value, decimals);
        match self.position {
            SymbolPosition::Prefix => format!("{}{}", self.symbol, number),
            SymbolPosition::Suffix => format!("{} {}", number, self.symbol),
        }
    }
}

/// Inserts `separator` every three digits counting from the right.
fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1234.5), "$1,234.50")]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(999.999), "$1,000.00")]
    #[case(dec!(1234567.891), "$1,234,567.89")]
    #[case(dec!(0.005), "$0.01")]
    #[case(dec!(-1234.5), "$-1,234.50")]
    fn formats_dollars(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(USD.format(value, DEFAULT_DECIMALS), expected);
    }

    #[rstest]
    #[case(dec!(1234.5), "1.234,50 €")]
    #[case(dec!(99.99), "99,99 €")]
    #[case(dec!(1000000), "1.000.000,00 €")]
    fn formats_euros(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(EUR.format(value, DEFAULT_DECIMALS), expected);
    }

    #[test]
    fn zero_decimals_drops_the_separator() {
        assert_eq!(USD.format(dec!(1234.5), 0), "$1,235");
        assert_eq!(EUR.format_number(dec!(12345), 0), "12.345");
    }

    #[test]
    fn rounding_to_zero_drops_the_sign() {
        assert_eq!(USD.format_number(dec!(-0.001), 2), "0.00");
    }

    #[test]
    fn grouping_only_touches_the_integer_part() {
        assert_eq!(USD.format_number(dec!(123.4567), 4), "123.4567");
        assert_eq!(group_thousands("1234567", "."), "1.234.567");
        assert_eq!(group_thousands("123", ","), "123");
    }
}
