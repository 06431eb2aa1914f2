//! Bridge to the injected EIP-1193 provider (`window.ethereum`).
//!
//! Every chain read and transaction of the details page goes through the
//! wallet, so the page always talks to the network the user selected.

use js_sys::{Function, JSON, Object, Promise, Reflect};
use serde_json::Value;
use tictactoe_client::transport::{RpcTransport, TransportError};
use tictactoe_core::Address;
use tictactoe_core::address::parse_address;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Convert a rejected promise or thrown value into a transport error.
///
/// Provider errors are objects with a numeric `code` and a `message`.
fn js_error(value: JsValue) -> TransportError {
    let code = Reflect::get(&value, &"code".into())
        .ok()
        .and_then(|c| c.as_f64());
    let message = Reflect::get(&value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));
    match code {
        Some(code) => TransportError::Rpc {
            code: code as i64,
            message,
        },
        None => TransportError::Io(message),
    }
}

fn to_js(value: &Value) -> Result<JsValue, TransportError> {
    JSON::parse(&value.to_string()).map_err(js_error)
}

fn from_js(value: &JsValue) -> Result<Value, TransportError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let text: String = JSON::stringify(value).map_err(js_error)?.into();
    serde_json::from_str(&text).map_err(|e| TransportError::Io(e.to_string()))
}

/// Parse an `eth_accounts` style array, skipping entries that are not addresses.
pub fn parse_accounts(value: &Value) -> Vec<Address> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|s| parse_address(s).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Parse an `eth_chainId` quantity (`"0x1"`).
pub fn parse_chain_id(value: &Value) -> Option<u64> {
    let hex = value.as_str()?;
    u64::from_str_radix(hex.trim_start_matches("0x"), 16).ok()
}

/// JSON-RPC through the wallet's `request` method.
#[derive(Clone)]
pub struct Eip1193Rpc {
    provider: JsValue,
}

impl Eip1193Rpc {
    /// The injected provider, if the page has one.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let provider = Reflect::get(&window, &"ethereum".into()).ok()?;
        if provider.is_undefined() || provider.is_null() {
            return None;
        }
        Some(Self { provider })
    }

    /// Accounts already authorized for this origin.
    pub async fn accounts(&self) -> Result<Vec<Address>, TransportError> {
        let value = self.request("eth_accounts", Value::Array(vec![])).await?;
        Ok(parse_accounts(&value))
    }

    /// Ask the user to connect (opens the wallet popup).
    pub async fn request_accounts(&self) -> Result<Vec<Address>, TransportError> {
        let value = self
            .request("eth_requestAccounts", Value::Array(vec![]))
            .await?;
        Ok(parse_accounts(&value))
    }

    pub async fn chain_id(&self) -> Result<Option<u64>, TransportError> {
        let value = self.request("eth_chainId", Value::Array(vec![])).await?;
        Ok(parse_chain_id(&value))
    }

    /// Register `handler` for a provider event (`accountsChanged`,
    /// `chainChanged`). The listener lives as long as the page.
    pub fn on(
        &self,
        event: &str,
        mut handler: impl FnMut(Value) + 'static,
    ) -> Result<(), TransportError> {
        let on = Reflect::get(&self.provider, &"on".into())
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(js_error)?;
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            match from_js(&payload) {
                Ok(value) => handler(value),
                Err(e) => tracing::warn!("unreadable wallet event payload: {e}"),
            }
        });
        on.call2(&self.provider, &event.into(), callback.as_ref())
            .map_err(js_error)?;
        callback.forget();
        Ok(())
    }
}

impl RpcTransport for Eip1193Rpc {
    async fn request(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        let args = Object::new();
        Reflect::set(&args, &"method".into(), &method.into()).map_err(js_error)?;
        Reflect::set(&args, &"params".into(), &to_js(&params)?).map_err(js_error)?;

        let request = Reflect::get(&self.provider, &"request".into())
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| TransportError::NoProvider)?;
        let promise = request
            .call1(&self.provider, &args)
            .map_err(js_error)?
            .dyn_into::<Promise>()
            .map_err(js_error)?;

        tracing::trace!(method, "wallet request");
        let result = JsFuture::from(promise).await.map_err(js_error)?;
        from_js(&result)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accounts_skip_garbage() {
        let accounts = parse_accounts(&json!([
            "0x4444444444444444444444444444444444444444",
            "not an address",
            7
        ]));
        assert_eq!(accounts.len(), 1);
        assert!(parse_accounts(&json!(null)).is_empty());
    }

    #[test]
    fn chain_id_is_hex_quantity() {
        assert_eq!(parse_chain_id(&json!("0xaa36a7")), Some(11_155_111));
        assert_eq!(parse_chain_id(&json!("0x1")), Some(1));
        assert_eq!(parse_chain_id(&json!(1)), None);
    }
}
