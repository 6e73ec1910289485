//! Supplier payload parsing.
//!
//! The panel wraps its stock report in JSON shaped
//! `{"status": true, "message": "SKU|count\n..."}` — the actual data is
//! a pipe-delimited text blob inside `message`. Parsing is total: any
//! shape the feed throws at us (non-JSON, wrong types, `status: false`,
//! blank message) maps to an empty record list, never to an error.

use serde_json::Value;

use crate::models::stock::StockRecord;

/// Extract stock records from the raw upstream body.
///
/// Returns the records in feed order. Duplicate SKUs are kept as
/// separate records; nothing is merged or deduplicated.
pub fn extract_from_message(raw: &str) -> Vec<StockRecord> {
    let Ok(envelope) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };

    // `status` must be the boolean `true`, not merely truthy, and
    // `message` must be a string with visible content.
    if envelope.get("status") != Some(&Value::Bool(true)) {
        return Vec::new();
    }
    let Some(message) = envelope.get("message").and_then(Value::as_str) else {
        return Vec::new();
    };
    if message.trim().is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    for line in message.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Lines look like "SKU123 | 4 unit"; anything after the second
        // segment is ignored, lines without a pipe are dropped.
        let mut segments = line.split('|');
        let (Some(sku_segment), Some(count_segment)) = (segments.next(), segments.next()) else {
            continue;
        };

        let sku = sku_segment.trim().to_uppercase();
        if sku.is_empty() {
            continue;
        }

        records.push(StockRecord {
            name: sku.clone(),
            sku,
            stock: to_number(count_segment),
        });
    }
    records
}

/// Loose integer coercion for supplier count fields.
///
/// Keeps only ASCII digits and minus signs, then parses the leading
/// digit run (honoring one leading minus). Anything that yields no
/// digits parses as 0, so `" 0 unit "` → 0, `"12 pcs"` → 12, `"-"` → 0.
pub fn to_number(raw: &str) -> i64 {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    let negative = filtered.starts_with('-');
    let digits: String = filtered
        .chars()
        .skip(usize::from(negative))
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return 0;
    }
    let magnitude: i64 = digits.parse().unwrap_or(0);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
