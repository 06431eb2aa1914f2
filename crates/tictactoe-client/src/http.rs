//! Concrete transports: `reqwest` on native targets, `gloo-net` in the browser.

#[cfg(feature = "native")]
pub use native::{HttpRpc, ReqwestHttp};

#[cfg(feature = "web")]
pub use web::GlooHttp;

#[cfg(feature = "native")]
mod native {
    use std::sync::atomic::{AtomicU64, Ordering};

    use serde_json::Value;

    use crate::rpc::{RpcRequest, RpcResponse};
    use crate::transport::{HttpTransport, RpcTransport, TransportError};

    fn io(e: reqwest::Error) -> TransportError {
        TransportError::Io(e.to_string())
    }

    /// REST reads over a shared `reqwest` client.
    #[derive(Clone, Default)]
    pub struct ReqwestHttp {
        client: reqwest::Client,
    }

    impl ReqwestHttp {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl HttpTransport for ReqwestHttp {
        async fn get(&self, url: &str) -> Result<String, TransportError> {
            let resp = self.client.get(url).send().await.map_err(io)?;
            let status = resp.status();
            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                });
            }
            resp.text().await.map_err(io)
        }
    }

    /// JSON-RPC over HTTP POST to a node endpoint.
    pub struct HttpRpc {
        client: reqwest::Client,
        url: String,
        next_id: AtomicU64,
    }

    impl HttpRpc {
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                url: url.into(),
                next_id: AtomicU64::new(1),
            }
        }
    }

    impl RpcTransport for HttpRpc {
        async fn request(&self, method: &str, params: Value) -> Result<Value, TransportError> {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let body = RpcRequest::new(id, method, params);
            let resp = self
                .client
                .post(&self.url)
                .json(&body)
                .send()
                .await
                .map_err(io)?;
            let status = resp.status();
            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                });
            }
            let envelope: RpcResponse = resp.json().await.map_err(io)?;
            envelope.into_result()
        }
    }
}

#[cfg(feature = "web")]
mod web {
    use gloo_net::http::Request;

    use crate::transport::{HttpTransport, TransportError};

    /// REST reads through the browser `fetch` API.
    #[derive(Clone, Copy, Default)]
    pub struct GlooHttp;

    impl HttpTransport for GlooHttp {
        async fn get(&self, url: &str) -> Result<String, TransportError> {
            let resp = Request::get(url)
                .send()
                .await
                .map_err(|e| TransportError::Io(e.to_string()))?;
            if !resp.ok() {
                return Err(TransportError::Status {
                    status: resp.status(),
                });
            }
            resp.text().await.map_err(|e| TransportError::Io(e.to_string()))
        }
    }
}
