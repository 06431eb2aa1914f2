//! Transport abstraction for network communication.
//!
//! Decouples the API client and chain reader from any specific HTTP stack.
//! Native builds use `reqwest`, the browser build uses `gloo-net` for REST
//! and the injected wallet provider for JSON-RPC.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during transport operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-success HTTP status.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The JSON-RPC endpoint (or wallet) returned an error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// No wallet provider is injected into the page.
    #[error("no wallet provider available")]
    NoProvider,

    /// An I/O or protocol-level error.
    #[error("{0}")]
    Io(String),
}

/// Plain HTTP reads (the explore API).
pub trait HttpTransport {
    /// `GET` the URL and return the response body.
    fn get(&self, url: &str) -> impl Future<Output = Result<String, TransportError>>;
}

/// Ethereum JSON-RPC requests.
pub trait RpcTransport {
    /// Send one request and return its `result` member.
    fn request(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = Result<Value, TransportError>>;
}
