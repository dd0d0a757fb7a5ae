//! Display formatting for printed documents (Russian conventions).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::amount::round_half_up;

/// Thousands separator used on printed documents (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Format an amount with two decimals, grouped thousands and a decimal comma.
///
/// ```
/// use raschet::core::format_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_money(dec!(1234567.891)), "1\u{a0}234\u{a0}567,89");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_half_up(amount, 2);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{frac_part}")
}

/// Format a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_basic() {
        assert_eq!(format_money(dec!(0)), "0,00");
        assert_eq!(format_money(dec!(24.95)), "24,95");
        assert_eq!(format_money(dec!(1000)), "1\u{a0}000,00");
    }

    #[test]
    fn money_rounds_half_up() {
        assert_eq!(format_money(dec!(123.455)), "123,46");
        assert_eq!(format_money(dec!(0.004)), "0,00");
    }

    #[test]
    fn money_negative() {
        assert_eq!(format_money(dec!(-1500.5)), "-1\u{a0}500,50");
        assert_eq!(format_money(dec!(-0.001)), "0,00");
    }

    #[test]
    fn date_format() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(d), "05.03.2024");
    }
}
