//! Request dispatch for the stock endpoint.
//!
//! GET runs the fetch → parse → shape pipeline; OPTIONS answers the
//! CORS preflight; everything else is rejected. The handler takes its
//! configuration by reference so tests can point it at a mock supplier.

use http::Method;
use vercel_runtime::{Body, Error, Request, Response};

use crate::config::Config;
use crate::fetch::fetch_upstream;
use crate::parser::extract_from_message;
use crate::response;

/// Handle one request against the stock endpoint.
pub async fn handle(config: &Config, req: Request) -> Result<Response<Body>, Error> {
    if *req.method() == Method::OPTIONS {
        return response::preflight(config);
    }
    if *req.method() != Method::GET {
        return response::method_not_allowed(config);
    }
    fetch_and_reply(config).await
}

async fn fetch_and_reply(config: &Config) -> Result<Response<Body>, Error> {
    match fetch_upstream(&config.upstream_url, config.fetch_timeout).await {
        Ok(outcome) => {
            let list = extract_from_message(&outcome.body);
            tracing::info!(
                count = list.len(),
                upstream_status = outcome.upstream_status,
                "supplier stock fetched"
            );
            response::stock_reply(config, list, &outcome)
        }
        Err(err) => {
            tracing::warn!(error = %err, "supplier fetch failed");
            response::fetch_failure(config, &err)
        }
    }
}
