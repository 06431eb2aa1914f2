//! JSON-RPC 2.0 envelope used by HTTP-backed RPC transports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transport::TransportError;

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Unwrap the envelope. A missing `result` with no error reads as `null`.
    pub fn into_result(self) -> Result<Value, TransportError> {
        match (self.error, self.result) {
            (Some(err), _) => Err(TransportError::Rpc {
                code: err.code,
                message: err.message,
            }),
            (None, Some(result)) => Ok(result),
            (None, None) => Ok(Value::Null),
        }
    }
}
