use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};

use raschet::core::normalize_amount;
use raschet::ledger::{LedgerEntryNormalizer, ReconciliationRequest};
use raschet::pricing::{DocumentDiscount, DocumentRequest, LineItem, aggregate, price_document};
use raschet::words::amount_to_words;

fn build_lines(n: u32) -> Vec<LineItem> {
    (1..=n)
        .map(|i| {
            LineItem::new(format!("Товар {i}"), Decimal::from(i % 7 + 1), dec!(149.90))
                .discount(Decimal::from(i % 15))
        })
        .collect()
}

fn document_payload(n: u32) -> String {
    let items: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "name": format!("Товар {i}"),
                "qty": (i % 7 + 1).to_string(),
                "unit_price": "149.90",
                "discount_percent": i % 15
            })
        })
        .collect();
    json!({"doc_type": "SALE", "document": {"discount_percent": "5"}, "items": items}).to_string()
}

fn ledger_payload(n: u32) -> String {
    let rows: Vec<Value> = (1..=n)
        .map(|i| {
            if i % 2 == 0 {
                json!({
                    "date": format!("2024-03-{:02}", i % 28 + 1),
                    "ref_type": "sale",
                    "doc_number": format!("РН-{i}"),
                    "a_debit": "1250.00",
                    "b_credit": "1250.00"
                })
            } else {
                json!({
                    "datetime": format!("2024-03-{:02}T12:00:00Z", i % 28 + 1),
                    "doc_type": "payment",
                    "document": "3f2b8c1e-9a4d-4e2f-8b6a-1c2d3e4f5a6b",
                    "a_credit": 900,
                    "b_debit": 900
                })
            }
        })
        .collect();
    json!({
        "company": {"name": "ОсОО Нур"},
        "client": {"name": "ИП Асанов"},
        "period": {"start": "2024-03-01", "end": "2024-03-31"},
        "opening_balance": "0",
        "rows": rows
    })
    .to_string()
}

// ── Pricing ────────────────────────────────────────────────────────

fn bench_normalize_amount(c: &mut Criterion) {
    c.bench_function("normalize_amount_noisy", |b| {
        b.iter(|| black_box(normalize_amount(black_box("1 200.50 units"))));
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let lines = build_lines(1000);
    c.bench_function("aggregate_1000_lines", |b| {
        b.iter(|| black_box(aggregate(black_box(&lines), dec!(5))));
    });
}

fn bench_price_document(c: &mut Criterion) {
    let lines = build_lines(100);
    c.bench_function("price_document_100_lines", |b| {
        b.iter(|| black_box(price_document(black_box(&lines), DocumentDiscount::from(dec!(5)))));
    });
}

fn bench_document_request(c: &mut Criterion) {
    let json = document_payload(100);
    c.bench_function("document_request_parse_and_price", |b| {
        b.iter(|| {
            let req = DocumentRequest::from_json(black_box(&json)).unwrap();
            black_box(req.price())
        });
    });
}

// ── Ledger ─────────────────────────────────────────────────────────

fn bench_reconciliation(c: &mut Criterion) {
    let json = ledger_payload(500);
    let normalizer = LedgerEntryNormalizer::default();
    c.bench_function("reconciliation_500_rows", |b| {
        b.iter(|| {
            let req = ReconciliationRequest::from_json(black_box(&json)).unwrap();
            black_box(req.build_ledger(&normalizer))
        });
    });
}

// ── Words ──────────────────────────────────────────────────────────

fn bench_amount_to_words(c: &mut Criterion) {
    c.bench_function("amount_to_words", |b| {
        b.iter(|| black_box(amount_to_words(black_box(dec!(1_234_567.89)), "сом")));
    });
}

criterion_group!(
    benches,
    bench_normalize_amount,
    bench_aggregate,
    bench_price_document,
    bench_document_request,
    bench_reconciliation,
    bench_amount_to_words,
);
criterion_main!(benches);
