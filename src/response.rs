//! Client-facing response shaping.
//!
//! Every response this service emits — stock list, graceful empty,
//! fetch failure, preflight, wrong method — goes through here so that
//! CORS headers and content types stay consistent.

use http::response::Builder;
use serde_json::json;
use vercel_runtime::{Body, Error, Response, StatusCode};

use crate::config::Config;
use crate::fetch::{FetchError, FetchOutcome};
use crate::models::reply::StockReply;
use crate::models::stock::StockRecord;

/// Shown to clients when the feed has nothing sellable right now.
pub const EMPTY_STOCK_TEXT: &str =
    "(Info) Saat ini stok kosong / belum tersedia.\nSilakan cek lagi nanti.";

/// Empty results are likely transient, so the edge may only cache them
/// briefly; non-empty results get a longer window.
const CACHE_EMPTY: &str = "s-maxage=15, stale-while-revalidate=60";
const CACHE_LISTED: &str = "s-maxage=30, stale-while-revalidate=300";

/// Start a response with the permissive CORS header set applied.
fn with_cors(origin: &str) -> Builder {
    Response::builder()
        .header("Access-Control-Allow-Origin", origin)
        .header("Vary", "Origin")
        .header("Access-Control-Allow-Methods", "GET,OPTIONS")
        .header(
            "Access-Control-Allow-Headers",
            "Content-Type, Authorization, x-api-key",
        )
}

/// Render the record list as a text block, one `(SKU) NAME : STOCK`
/// line per record in list order.
pub fn render_text_block(list: &[StockRecord]) -> String {
    list.iter()
        .map(|record| format!("({}) {} : {}", record.sku, record.name, record.stock))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shape the 200 response for a completed fetch, empty or not.
pub fn stock_reply(
    config: &Config,
    list: Vec<StockRecord>,
    outcome: &FetchOutcome,
) -> Result<Response<Body>, Error> {
    if list.is_empty() {
        let reply = StockReply {
            ok: true,
            count: 0,
            list: Vec::new(),
            text: EMPTY_STOCK_TEXT.to_string(),
            upstream_ok: Some(outcome.upstream_ok),
            upstream_status: Some(outcome.upstream_status),
        };
        return Ok(with_cors(&config.cors_origin)
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .header("Cache-Control", CACHE_EMPTY)
            .body(Body::Text(serde_json::to_string(&reply)?))?);
    }

    let reply = StockReply {
        ok: true,
        count: list.len(),
        text: render_text_block(&list),
        list,
        upstream_ok: None,
        upstream_status: None,
    };
    Ok(with_cors(&config.cors_origin)
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .header("Cache-Control", CACHE_LISTED)
        .body(Body::Text(serde_json::to_string(&reply)?))?)
}

/// Shape the error response for a failed fetch (504 timeout, 502 rest).
pub fn fetch_failure(config: &Config, err: &FetchError) -> Result<Response<Body>, Error> {
    let payload = json!({
        "ok": false,
        "error": err.to_string(),
    });
    Ok(with_cors(&config.cors_origin)
        .status(err.status())
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

/// Answer a CORS preflight: 204, headers only.
pub fn preflight(config: &Config) -> Result<Response<Body>, Error> {
    Ok(with_cors(&config.cors_origin)
        .status(StatusCode::NO_CONTENT)
        .body(Body::Empty)?)
}

/// Reject anything that is not GET or OPTIONS.
pub fn method_not_allowed(config: &Config) -> Result<Response<Body>, Error> {
    let payload = json!({
        "ok": false,
        "error": "Method not allowed",
    });
    Ok(with_cors(&config.cors_origin)
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sku: &str, stock: i64) -> StockRecord {
        StockRecord {
            sku: sku.to_string(),
            name: sku.to_string(),
            stock,
        }
    }

    #[test]
    fn test_text_block_renders_one_line_per_record() {
        let list = vec![record("SKU1", 10), record("SKU2", 0)];
        assert_eq!(render_text_block(&list), "(SKU1) SKU1 : 10\n(SKU2) SKU2 : 0");
    }

    #[test]
    fn test_text_block_for_empty_list_is_empty() {
        assert_eq!(render_text_block(&[]), "");
    }

    #[test]
    fn test_empty_reply_echoes_upstream_and_caches_briefly() {
        let config = Config::default();
        let outcome = FetchOutcome {
            body: String::new(),
            upstream_ok: false,
            upstream_status: 500,
        };
        let response = stock_reply(&config, Vec::new(), &outcome).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("Cache-Control").unwrap(),
            CACHE_EMPTY
        );
        let Body::Text(body) = response.body() else {
            panic!("expected text body");
        };
        let reply: StockReply = serde_json::from_str(body).unwrap();
        assert!(reply.ok);
        assert_eq!(reply.count, 0);
        assert_eq!(reply.text, EMPTY_STOCK_TEXT);
        assert_eq!(reply.upstream_ok, Some(false));
        assert_eq!(reply.upstream_status, Some(500));
    }

    #[test]
    fn test_listed_reply_omits_upstream_echo() {
        let config = Config::default();
        let outcome = FetchOutcome {
            body: String::new(),
            upstream_ok: true,
            upstream_status: 200,
        };
        let response = stock_reply(&config, vec![record("A", 1)], &outcome).unwrap();

        assert_eq!(
            response.headers().get("Cache-Control").unwrap(),
            CACHE_LISTED
        );
        let Body::Text(body) = response.body() else {
            panic!("expected text body");
        };
        assert!(!body.contains("upstream_status"));
    }

    #[test]
    fn test_every_shape_carries_cors_headers() {
        let config = Config::default();
        let responses = vec![
            preflight(&config).unwrap(),
            method_not_allowed(&config).unwrap(),
            fetch_failure(&config, &FetchError::Timeout).unwrap(),
        ];
        for response in responses {
            assert_eq!(
                response
                    .headers()
                    .get("Access-Control-Allow-Origin")
                    .unwrap(),
                "*"
            );
            assert_eq!(response.headers().get("Vary").unwrap(), "Origin");
        }
    }
}
