//! Locale-aware translation and number formatting.
//!
//! Locale and theme live in an explicit [`Preferences`] value that callers
//! pass to whatever renders text; nothing here reads global state.

pub mod currency;
pub mod relative_time;
pub mod translations;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use currency::{CurrencyConfig, SymbolPosition, DEFAULT_DECIMALS};
pub use relative_time::format_relative;
pub use translations::translate;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// Parses a language tag such as `de`, `de-DE` or `en_US`.
    ///
    /// Unknown languages fall back to English with a warning.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        language.parse().unwrap_or_else(|_| {
            warn!(tag, "Unsupported locale, falling back to en");
            Locale::En
        })
    }

    pub fn currency(self) -> &'static CurrencyConfig {
        match self {
            Locale::En => &currency::USD,
            Locale::De => &currency::EUR,
        }
    }

    /// Translation key of the language's own name in the switcher
    pub fn name_key(self) -> &'static str {
        match self {
            Locale::En => "english",
            Locale::De => "german",
        }
    }
}

/// Formats money for `locale` with the default two decimals.
pub fn format_currency(value: Decimal, locale: Locale) -> String {
    locale.currency().format(value, DEFAULT_DECIMALS)
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// User-selected display settings, passed down to every formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub locale: Locale,
    pub theme: Theme,
    /// Fraction digits used for money
    #[serde(default = "default_decimals")]
    pub currency_decimals: u32,
}

fn default_decimals() -> u32 {
    DEFAULT_DECIMALS
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            theme: Theme::default(),
            currency_decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Preferences {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            info!(from = %self.locale, to = %locale, "Locale changed");
        }
        self.locale = locale;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn t(&self, key: &str) -> String {
        translate(key, self.locale)
    }

    pub fn currency(&self, value: Decimal) -> String {
        self.locale
            .currency()
            .format(value, self.currency_decimals)
    }

    pub fn relative(&self, then: DateTime<Utc>, now: DateTime<Utc>) -> String {
        format_relative(then, now, self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_currency_per_locale() {
        assert_eq!(format_currency(dec!(1234.5), Locale::En), "$1,234.50");
        assert_eq!(format_currency(dec!(1234.5), Locale::De), "1.234,50 €");
    }

    #[test]
    fn parses_tags_with_regions() {
        assert_eq!(Locale::from_tag("de-DE"), Locale::De);
        assert_eq!(Locale::from_tag("EN_us"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn preferences_are_an_explicit_context() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.t("settings"), "Settings");

        prefs.set_locale(Locale::De);
        assert_eq!(prefs.t("settings"), "Einstellungen");
        assert_eq!(prefs.currency(dec!(49.99)), "49,99 €");

        // another context is unaffected
        assert_eq!(Preferences::default().t("settings"), "Settings");
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert_eq!(prefs.toggle_theme(), Theme::Light);
    }

    #[test]
    fn currency_decimals_are_configurable() {
        let prefs = Preferences {
            currency_decimals: 0,
            ..Preferences::default()
        };
        assert_eq!(prefs.currency(dec!(1234.5)), "$1,235");
    }
}
