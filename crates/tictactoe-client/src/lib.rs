pub mod api;
pub mod chain;
pub mod config;
pub mod error;
pub mod http;
pub mod logs;
pub mod rpc;
pub mod session;
pub mod transport;

#[cfg(test)]
mod testing;
