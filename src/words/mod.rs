//! Amounts in Russian words for printed documents.
//!
//! The integer part is spelled out with the currency word agreeing with it;
//! the minor part stays as two digits, as accounting documents print it:
//! `двадцать один сом 00`.

mod currency;
mod spell;

pub use currency::{CurrencyWords, Gender, WordForms};
pub use spell::{MAX_SPELLED, spell_integer};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::core::round_half_up;

/// Write `amount` in words followed by the currency.
///
/// The amount is rounded half-up to two places first. Negative amounts
/// start with `минус`; a zero integer part reads `ноль`. Integer parts above
/// [`MAX_SPELLED`] are printed as digits.
///
/// ```
/// use raschet::words::amount_to_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_to_words(dec!(21), "сом"), "двадцать один сом 00");
/// assert_eq!(amount_to_words(dec!(1000.5), "сом"), "одна тысяча сом 50");
/// ```
pub fn amount_to_words(amount: Decimal, currency: impl Into<CurrencyWords>) -> String {
    let currency = currency.into();
    let rounded = round_half_up(amount, 2);
    let magnitude = rounded.abs();
    let integer = magnitude.trunc();
    let minor = ((magnitude - integer) * dec!(100)).to_u64().unwrap_or(0);

    let mut parts: Vec<String> = Vec::with_capacity(5);
    if rounded < Decimal::ZERO {
        parts.push("минус".to_string());
    }

    let spelled = integer
        .to_u64()
        .and_then(|n| spell_integer(n, currency.gender).map(|words| (n, words)));
    match spelled {
        Some((n, words)) => {
            parts.push(words);
            parts.push(currency.major.for_count(n).to_string());
        }
        None => {
            tracing::debug!(%integer, "amount too large to spell, printing digits");
            // Agreement only depends on the last two digits.
            let tail = (integer % dec!(100)).to_u64().unwrap_or(0);
            parts.push(integer.normalize().to_string());
            parts.push(currency.major.for_count(tail).to_string());
        }
    }

    parts.push(format!("{minor:02}"));
    if let Some(minor_word) = &currency.minor {
        parts.push(minor_word.for_count(minor).to_string());
    }

    parts.join(" ")
}

/// Upper-case the first character, for text that starts a sentence.
///
/// ```
/// use raschet::words::capitalize_first;
///
/// assert_eq!(capitalize_first("сто сом 00"), "Сто сом 00");
/// ```
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts() {
        assert_eq!(amount_to_words(dec!(1), "сом"), "один сом 00");
        assert_eq!(amount_to_words(dec!(2), "сом"), "два сома 00");
        assert_eq!(amount_to_words(dec!(21), "сом"), "двадцать один сом 00");
        assert_eq!(amount_to_words(dec!(111), "сом"), "сто одиннадцать сом 00");
    }

    #[test]
    fn minor_part_is_digits() {
        assert_eq!(amount_to_words(dec!(5.07), "сом"), "пять сом 07");
        assert_eq!(amount_to_words(dec!(0.5), "сом"), "ноль сом 50");
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(amount_to_words(dec!(1.005), "сом"), "один сом 01");
        assert_eq!(amount_to_words(dec!(9.995), "сом"), "десять сом 00");
    }

    #[test]
    fn negative_amount() {
        assert_eq!(amount_to_words(dec!(-3), "сом"), "минус три сома 00");
        assert_eq!(amount_to_words(dec!(-0.001), "сом"), "ноль сом 00");
    }

    #[test]
    fn zero() {
        assert_eq!(amount_to_words(Decimal::ZERO, "сом"), "ноль сом 00");
    }

    #[test]
    fn minor_word() {
        let kgs = CurrencyWords::for_code("KGS").unwrap();
        assert_eq!(amount_to_words(dec!(300.25), &kgs), "триста сом 25 тыйын");
        let rub = CurrencyWords::for_code("RUB").unwrap();
        assert_eq!(amount_to_words(dec!(1.01), rub), "один рубль 01 копейка");
    }

    #[test]
    fn unknown_currency_word_is_unchanged() {
        assert_eq!(amount_to_words(dec!(3), "EUR"), "три EUR 00");
    }

    #[test]
    fn huge_amount_as_digits() {
        assert_eq!(
            amount_to_words(dec!(1000000000001), "сом"),
            "1000000000001 сом 00"
        );
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("ноль"), "Ноль");
        assert_eq!(capitalize_first("1 сом"), "1 сом");
    }
}
