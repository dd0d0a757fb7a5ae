#![no_main]

use libfuzzer_sys::fuzz_target;
use raschet::ledger::{LedgerEntryNormalizer, ReconciliationRequest};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(req) = ReconciliationRequest::from_json(s) {
            let ledger = req.build_ledger(&LedgerEntryNormalizer::default());
            let _ = req.debt_statement(&ledger);
        }
    }
});
