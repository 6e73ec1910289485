use akrab_stock_proxy::config::Config;
use akrab_stock_proxy::handler::handle;
use akrab_stock_proxy::logging;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    run(handler).await
}

/// GET /api/stock — fetch the supplier feed and normalize it to JSON.
///
/// An empty or unreadable feed is a 200 with `count: 0`, not an error;
/// only transport failures surface as 502/504.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let config = Config::from_env();
    handle(&config, req).await
}
