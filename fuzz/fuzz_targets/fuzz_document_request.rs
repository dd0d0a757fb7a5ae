#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(req) = raschet::pricing::DocumentRequest::from_json(s) {
            let doc = req.price();
            assert!(doc.totals.total <= doc.totals.subtotal);
        }
    }
});
