//! Tolerant parsing of numeric-like input into [`Decimal`].
//!
//! Upstream rows carry amounts as JSON numbers, numeric strings, strings with
//! units or thousands noise (`"1200.50 units"`), empty strings or `null`.
//! Everything is funnelled through [`normalize_amount`], which never fails:
//! anything that is not a single well-formed number becomes zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal_macros::dec;
use serde_json::Value;

/// Upper bound for every discount percent.
pub const MAX_PERCENT: Decimal = dec!(100);

/// A value that can be read as a monetary amount or a percent.
pub trait ToAmount {
    /// Canonical decimal value; zero when the input is not numeric.
    fn to_amount(&self) -> Decimal;

    /// Value read as a percent and clamped to `[0, 100]`.
    fn to_percent(&self) -> Decimal {
        clamp_percent(self.to_amount())
    }
}

/// Normalize loosely-typed numeric input into a decimal.
///
/// Strips everything except ASCII digits, `.` and `-`, then parses what is
/// left. Empty, `null` and non-numeric input yield zero.
///
/// ```
/// use raschet::core::normalize_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(normalize_amount("1200.50 units"), dec!(1200.50));
/// assert_eq!(normalize_amount("abc"), dec!(0));
/// ```
pub fn normalize_amount<T: ToAmount + ?Sized>(raw: &T) -> Decimal {
    raw.to_amount()
}

/// Normalize a percent: a decimal comma is accepted, the result is clamped
/// to `[0, 100]`.
pub fn normalize_percent<T: ToAmount + ?Sized>(raw: &T) -> Decimal {
    raw.to_percent()
}

/// Clamp a percent to `[0, 100]`.
pub fn clamp_percent(percent: Decimal) -> Decimal {
    if percent < Decimal::ZERO || percent > MAX_PERCENT {
        tracing::debug!(%percent, "percent out of range, clamping");
    }
    percent.clamp(Decimal::ZERO, MAX_PERCENT)
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
///
/// The result always carries exactly `dp` places, so `100` prints as `100.00`.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Strict variant of the string normalization: `None` when nothing
/// numeric survives the stripping, instead of zero.
///
/// ```
/// use raschet::core::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("15 %"), Some(dec!(15)));
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    parse_cleaned(&cleaned)
}

fn parse_loose(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or_else(|| {
        if !raw.trim().is_empty() {
            tracing::trace!(raw, "malformed amount, using zero");
        }
        Decimal::ZERO
    })
}

/// Parse a string made only of digits, `.` and `-`.
///
/// Accepts an optional leading minus, at most one decimal point and at
/// least one digit (`"5."`, `".5"` and `"-.5"` are numbers).
fn parse_cleaned(cleaned: &str) -> Option<Decimal> {
    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned),
    };
    if body.contains('-') {
        return None;
    }

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (body, ""),
    };
    if frac_part.contains('.') || (int_part.is_empty() && frac_part.is_empty()) {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let canonical = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };

    let value = Decimal::from_str(&canonical).ok()?;
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    Some(if negative { -value } else { value })
}

fn number_to_decimal(n: &serde_json::Number) -> Decimal {
    if let Some(i) = n.as_i64() {
        return Decimal::from(i);
    }
    if let Some(u) = n.as_u64() {
        return Decimal::from(u);
    }
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or(Decimal::ZERO)
}

fn comma_as_point(raw: &str) -> Decimal {
    clamp_percent(parse_loose(&raw.replacen(',', ".", 1)))
}

impl ToAmount for str {
    fn to_amount(&self) -> Decimal {
        parse_loose(self)
    }

    fn to_percent(&self) -> Decimal {
        comma_as_point(self)
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> Decimal {
        parse_loose(self)
    }

    fn to_percent(&self) -> Decimal {
        comma_as_point(self)
    }
}

impl ToAmount for Value {
    fn to_amount(&self) -> Decimal {
        match self {
            Value::Number(n) => number_to_decimal(n),
            Value::String(s) => parse_loose(s),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Decimal::ZERO,
        }
    }

    fn to_percent(&self) -> Decimal {
        match self {
            Value::String(s) => comma_as_point(s),
            other => clamp_percent(other.to_amount()),
        }
    }
}

impl ToAmount for Decimal {
    fn to_amount(&self) -> Decimal {
        // Decimal's own text form is always a single well-formed number.
        if self.is_zero() { Decimal::ZERO } else { *self }
    }
}

impl ToAmount for f64 {
    fn to_amount(&self) -> Decimal {
        if !self.is_finite() {
            return Decimal::ZERO;
        }
        Decimal::from_f64(*self).unwrap_or(Decimal::ZERO)
    }
}

macro_rules! int_to_amount {
    ($($t:ty),*) => {
        $(
            impl ToAmount for $t {
                fn to_amount(&self) -> Decimal {
                    Decimal::from(*self)
                }
            }
        )*
    };
}

int_to_amount!(i32, i64, u32, u64);

impl<T: ToAmount + ?Sized> ToAmount for &T {
    fn to_amount(&self) -> Decimal {
        (**self).to_amount()
    }

    fn to_percent(&self) -> Decimal {
        (**self).to_percent()
    }
}

impl<T: ToAmount> ToAmount for Option<T> {
    fn to_amount(&self) -> Decimal {
        self.as_ref().map_or(Decimal::ZERO, ToAmount::to_amount)
    }

    fn to_percent(&self) -> Decimal {
        self.as_ref().map_or(Decimal::ZERO, ToAmount::to_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_garbage_are_zero() {
        assert_eq!(normalize_amount(""), Decimal::ZERO);
        assert_eq!(normalize_amount("abc"), Decimal::ZERO);
        assert_eq!(normalize_amount("   "), Decimal::ZERO);
        assert_eq!(normalize_amount(&Value::Null), Decimal::ZERO);
        assert_eq!(normalize_amount(&None::<String>), Decimal::ZERO);
    }

    #[test]
    fn strips_units_and_noise() {
        assert_eq!(normalize_amount("1200.50 units"), dec!(1200.50));
        assert_eq!(normalize_amount("сом 99"), dec!(99));
        assert_eq!(normalize_amount("-15.5"), dec!(-15.5));
    }

    #[test]
    fn malformed_numbers_are_zero() {
        assert_eq!(normalize_amount("1.2.3"), Decimal::ZERO);
        assert_eq!(normalize_amount("-"), Decimal::ZERO);
        assert_eq!(normalize_amount("5-3"), Decimal::ZERO);
        assert_eq!(normalize_amount("."), Decimal::ZERO);
    }

    #[test]
    fn bare_points_are_accepted() {
        assert_eq!(normalize_amount(".5"), dec!(0.5));
        assert_eq!(normalize_amount("5."), dec!(5));
        assert_eq!(normalize_amount("-.25"), dec!(-0.25));
    }

    #[test]
    fn json_values() {
        assert_eq!(normalize_amount(&json!(42)), dec!(42));
        assert_eq!(normalize_amount(&json!(19.99)), dec!(19.99));
        assert_eq!(normalize_amount(&json!("19.99")), dec!(19.99));
        assert_eq!(normalize_amount(&json!(true)), Decimal::ZERO);
        assert_eq!(normalize_amount(&json!([1, 2])), Decimal::ZERO);
        assert_eq!(normalize_amount(&json!({"amount": 5})), Decimal::ZERO);
    }

    #[test]
    fn floats() {
        assert_eq!(normalize_amount(&2.5f64), dec!(2.5));
        assert_eq!(normalize_amount(&f64::NAN), Decimal::ZERO);
        assert_eq!(normalize_amount(&f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn negative_zero_is_zero() {
        let z = normalize_amount("-0");
        assert_eq!(z, Decimal::ZERO);
        assert!(!z.is_sign_negative());
    }

    #[test]
    fn idempotent_on_samples() {
        for raw in ["", "abc", "1200.50 units", "-3", "0.10", ".5", "1 000"] {
            let once = normalize_amount(raw);
            assert_eq!(normalize_amount(&once.to_string()), once, "input {raw:?}");
            assert_eq!(normalize_amount(&once), once);
        }
    }

    #[test]
    fn percent_accepts_decimal_comma_and_clamps() {
        assert_eq!(normalize_percent("12,5"), dec!(12.5));
        assert_eq!(normalize_percent("150"), dec!(100));
        assert_eq!(normalize_percent("-5"), dec!(0));
        assert_eq!(normalize_percent(&json!("7,5 %")), dec!(7.5));
        assert_eq!(normalize_percent(&json!(250)), dec!(100));
    }

    #[test]
    fn strict_parse() {
        assert_eq!(parse_amount("1200.50 units"), Some(dec!(1200.50)));
        assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }

    #[test]
    fn half_up_rounding() {
        assert_eq!(round_half_up(dec!(1.005), 2), dec!(1.01));
        assert_eq!(round_half_up(dec!(1.004), 2), dec!(1.00));
        assert_eq!(round_half_up(dec!(-1.005), 2), dec!(-1.01));
    }
}
