/// Akrab Stock Proxy — Shared Library
///
/// This crate contains the upstream fetcher, stock parser, response
/// shaping, and configuration shared by the serverless functions.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod config;
pub mod fetch;
pub mod handler;
pub mod logging;
pub mod models;
pub mod parser;
pub mod response;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
