//! Cardinal numbers in Russian words.

use super::currency::{BILLION, Gender, MILLION, THOUSAND, WordForms};

/// Largest integer spelled out; anything above is printed as digits.
pub const MAX_SPELLED: u64 = 999_999_999_999;

const ONES: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];

const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

fn unit_word(digit: usize, gender: Gender) -> &'static str {
    match (digit, gender) {
        (1, Gender::Feminine) => "одна",
        (2, Gender::Feminine) => "две",
        _ => ONES[digit],
    }
}

/// Push the words of `n` (below 1000) onto `out`. Zero pushes nothing.
fn push_triple(n: u64, gender: Gender, out: &mut Vec<&'static str>) {
    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;
    if hundreds > 0 {
        out.push(HUNDREDS[hundreds]);
    }
    match rest {
        0 => {}
        10..=19 => out.push(TEENS[rest - 10]),
        _ => {
            if rest >= 20 {
                out.push(TENS[rest / 10]);
            }
            if rest % 10 > 0 {
                out.push(unit_word(rest % 10, gender));
            }
        }
    }
}

/// Spell a non-negative integer in words, counting a noun of `gender`.
///
/// Returns `None` above [`MAX_SPELLED`].
///
/// ```
/// use raschet::words::{Gender, spell_integer};
///
/// assert_eq!(spell_integer(0, Gender::Masculine).as_deref(), Some("ноль"));
/// assert_eq!(
///     spell_integer(2_021, Gender::Masculine).as_deref(),
///     Some("две тысячи двадцать один")
/// );
/// ```
pub fn spell_integer(n: u64, gender: Gender) -> Option<String> {
    if n > MAX_SPELLED {
        return None;
    }
    if n == 0 {
        return Some("ноль".to_string());
    }

    // Scales above the units, largest first, with the gender their counts
    // agree with.
    let scales: [(u64, &WordForms, Gender); 3] = [
        (1_000_000_000, &BILLION, Gender::Masculine),
        (1_000_000, &MILLION, Gender::Masculine),
        (1_000, &THOUSAND, Gender::Feminine),
    ];

    let mut words = Vec::new();
    let mut rest = n;
    for (scale, forms, scale_gender) in scales {
        let count = rest / scale;
        rest %= scale;
        if count > 0 {
            push_triple(count, scale_gender, &mut words);
            words.push(forms.for_count(count));
        }
    }
    push_triple(rest, gender, &mut words);

    Some(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masc(n: u64) -> String {
        spell_integer(n, Gender::Masculine).unwrap()
    }

    #[test]
    fn small_numbers() {
        assert_eq!(masc(1), "один");
        assert_eq!(masc(10), "десять");
        assert_eq!(masc(15), "пятнадцать");
        assert_eq!(masc(20), "двадцать");
        assert_eq!(masc(99), "девяносто девять");
        assert_eq!(masc(100), "сто");
        assert_eq!(masc(512), "пятьсот двенадцать");
        assert_eq!(masc(999), "девятьсот девяносто девять");
    }

    #[test]
    fn feminine_units() {
        assert_eq!(spell_integer(2, Gender::Feminine).unwrap(), "две");
        assert_eq!(spell_integer(41, Gender::Feminine).unwrap(), "сорок одна");
        assert_eq!(spell_integer(11, Gender::Feminine).unwrap(), "одиннадцать");
    }

    #[test]
    fn thousands() {
        assert_eq!(masc(1000), "одна тысяча");
        assert_eq!(masc(2000), "две тысячи");
        assert_eq!(masc(5000), "пять тысяч");
        assert_eq!(masc(11_000), "одиннадцать тысяч");
        assert_eq!(masc(21_001), "двадцать одна тысяча один");
        assert_eq!(masc(104_000), "сто четыре тысячи");
        assert_eq!(masc(999_999), "девятьсот девяносто девять тысяч девятьсот девяносто девять");
    }

    #[test]
    fn millions_and_billions() {
        assert_eq!(masc(1_000_000), "один миллион");
        assert_eq!(masc(2_500_000), "два миллиона пятьсот тысяч");
        assert_eq!(masc(12_000_003), "двенадцать миллионов три");
        assert_eq!(masc(3_000_000_000), "три миллиарда");
        assert_eq!(masc(1_001_001_001), "один миллиард один миллион одна тысяча один");
    }

    #[test]
    fn limit() {
        assert!(spell_integer(MAX_SPELLED, Gender::Masculine).is_some());
        assert_eq!(spell_integer(MAX_SPELLED + 1, Gender::Masculine), None);
    }
}
