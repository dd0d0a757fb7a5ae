#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // A normalized amount normalizes to itself.
        let once = raschet::core::normalize_amount(s);
        assert_eq!(raschet::core::normalize_amount(once.to_string().as_str()), once);

        let pct = raschet::core::normalize_percent(s);
        assert!(pct >= Decimal::ZERO && pct <= Decimal::ONE_HUNDRED);
    }
});
