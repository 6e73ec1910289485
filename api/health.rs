use akrab_stock_proxy::version;
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(handler).await
}

/// GET /api/health — deployment probe, no upstream call involved.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let payload = json!({
        "ok": true,
        "service": "akrab-stock-proxy",
        "version": version(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
