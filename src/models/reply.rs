use serde::{Deserialize, Serialize};

use super::stock::StockRecord;

/// JSON envelope returned to clients for stock queries.
///
/// Empty results are still `ok: true` — "no stock right now" is an
/// expected state of the supplier, not a failure. The upstream echo
/// fields are only attached to empty results so callers can tell a
/// genuinely empty feed from an upstream that answered garbage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReply {
    pub ok: bool,
    /// Number of records in `list`.
    pub count: usize,
    pub list: Vec<StockRecord>,
    /// Human-readable rendering of `list`, one line per record, or a
    /// fixed informational message when `list` is empty.
    pub text: String,
    /// Whether the upstream answered with a 2xx status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_ok: Option<bool>,
    /// Raw upstream HTTP status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}
