#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: (i64, u32)| {
    let (mantissa, scale) = data;
    if let Ok(amount) = Decimal::try_from_i128_with_scale(i128::from(mantissa), scale % 29) {
        assert!(!raschet::words::amount_to_words(amount, "сом").is_empty());
    }
});
