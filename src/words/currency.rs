use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Grammatical gender of a counted noun; decides `один`/`одна` and
/// `два`/`две`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

/// The three Russian plural forms of a noun.
///
/// `one` follows counts ending in 1 (`один рубль`), `few` counts ending in
/// 2–4 (`два рубля`), `many` everything else and the whole 11–19 range
/// (`пять рублей`, `двенадцать рублей`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordForms {
    pub one: Cow<'static, str>,
    pub few: Cow<'static, str>,
    pub many: Cow<'static, str>,
}

impl WordForms {
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self {
            one: Cow::Borrowed(one),
            few: Cow::Borrowed(few),
            many: Cow::Borrowed(many),
        }
    }

    /// A word that does not change with the count (a currency code, `тыйын`).
    pub fn invariant(word: impl Into<Cow<'static, str>>) -> Self {
        let word = word.into();
        Self {
            one: word.clone(),
            few: word.clone(),
            many: word,
        }
    }

    /// Form agreeing with `count`.
    pub fn for_count(&self, count: u64) -> &str {
        match (count % 100, count % 10) {
            (11..=19, _) => self.many.as_ref(),
            (_, 1) => self.one.as_ref(),
            (_, 2..=4) => self.few.as_ref(),
            _ => self.many.as_ref(),
        }
    }
}

pub(crate) static THOUSAND: WordForms = WordForms::new("тысяча", "тысячи", "тысяч");
pub(crate) static MILLION: WordForms = WordForms::new("миллион", "миллиона", "миллионов");
pub(crate) static BILLION: WordForms = WordForms::new("миллиард", "миллиарда", "миллиардов");

/// How a currency is named after an amount.
///
/// Only the major unit is spelled out. The minor unit is always printed as
/// two digits, optionally followed by `minor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyWords {
    pub major: WordForms,
    pub gender: Gender,
    /// Word printed after the two minor digits; none by default.
    pub minor: Option<WordForms>,
}

impl CurrencyWords {
    pub fn new(major: WordForms, gender: Gender) -> Self {
        Self {
            major,
            gender,
            minor: None,
        }
    }

    /// Kyrgyz som. Printed documents use `сом` for every count except 2–4.
    pub fn som() -> Self {
        Self::new(WordForms::new("сом", "сома", "сом"), Gender::Masculine)
    }

    pub fn rub() -> Self {
        Self::new(WordForms::new("рубль", "рубля", "рублей"), Gender::Masculine)
    }

    pub fn usd() -> Self {
        Self::new(WordForms::new("доллар", "доллара", "долларов"), Gender::Masculine)
    }

    /// Words for an ISO currency code, with the minor unit named.
    pub fn for_code(code: &str) -> Option<Self> {
        let words = match code.trim().to_uppercase().as_str() {
            "KGS" => Self::som().with_minor(WordForms::invariant("тыйын")),
            "RUB" => Self::rub().with_minor(WordForms::new("копейка", "копейки", "копеек")),
            "USD" => Self::usd().with_minor(WordForms::new("цент", "цента", "центов")),
            _ => return None,
        };
        Some(words)
    }

    pub fn with_minor(mut self, minor: WordForms) -> Self {
        self.minor = Some(minor);
        self
    }
}

/// A bare word: one of the known major-unit names gets its full set of
/// forms, anything else is printed unchanged.
impl From<&str> for CurrencyWords {
    fn from(word: &str) -> Self {
        match word.trim().to_lowercase().as_str() {
            "сом" => Self::som(),
            "рубль" | "руб" | "руб." => Self::rub(),
            "доллар" => Self::usd(),
            _ => Self::new(WordForms::invariant(word.trim().to_string()), Gender::Masculine),
        }
    }
}

impl From<&String> for CurrencyWords {
    fn from(word: &String) -> Self {
        Self::from(word.as_str())
    }
}

impl From<&CurrencyWords> for CurrencyWords {
    fn from(words: &CurrencyWords) -> Self {
        words.clone()
    }
}
