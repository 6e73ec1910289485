//! Upstream fetcher.
//!
//! One GET against the supplier panel, raced against a timeout. The
//! loser of the race is dropped: an elapsed timer aborts the in-flight
//! request, and a completed request disarms the timer. There is no
//! retry — a slow supplier is reported, not hammered.

use std::time::Duration;

use http::StatusCode;
use reqwest::header::ACCEPT;
use thiserror::Error;

/// The panel sometimes answers HTML error pages, so accept broadly and
/// let the parser decide what the body actually is.
const ACCEPT_VALUE: &str = "application/json, text/html;q=0.9, */*;q=0.8";

/// What came back from the supplier, before any interpretation.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Raw response body. Not assumed to be JSON.
    pub body: String,
    /// Whether the upstream answered with a 2xx status.
    pub upstream_ok: bool,
    /// Raw upstream HTTP status code.
    pub upstream_status: u16,
}

/// Ways the fetch stage can fail. Payload problems are not among them;
/// those degrade to an empty parse result downstream.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The supplier did not answer within the configured window.
    #[error("Timeout ke server supplier")]
    Timeout,
    /// Any other transport-level failure (DNS, TLS, connection reset).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// HTTP status this failure maps to on the client-facing response.
    pub fn status(&self) -> StatusCode {
        match self {
            FetchError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            FetchError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Perform one bounded GET against `url`.
///
/// The body is returned as text together with the upstream status,
/// whether or not it is valid JSON.
pub async fn fetch_upstream(url: &str, timeout: Duration) -> Result<FetchOutcome, FetchError> {
    let client = reqwest::Client::builder().build()?;

    let request = async {
        let response = client.get(url).header(ACCEPT, ACCEPT_VALUE).send().await?;
        let upstream_ok = response.status().is_success();
        let upstream_status = response.status().as_u16();
        let body = response.text().await?;
        Ok::<_, reqwest::Error>(FetchOutcome {
            body,
            upstream_ok,
            upstream_status,
        })
    };

    match tokio::time::timeout(timeout, request).await {
        Ok(outcome) => Ok(outcome?),
        Err(_) => Err(FetchError::Timeout),
    }
}
