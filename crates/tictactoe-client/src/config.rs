//! Runtime configuration shared by the web and terminal frontends.

/// Environment keys understood by [`AppConfig::from_lookup`].
pub const ENV_API_BASE: &str = "TICTACTOE_API_BASE";
pub const ENV_RPC_URL: &str = "TICTACTOE_RPC_URL";
pub const ENV_POLL_MS: &str = "TICTACTOE_POLL_MS";
pub const ENV_TOAST_MS: &str = "TICTACTOE_TOAST_MS";
pub const ENV_FROM_BLOCK: &str = "TICTACTOE_FROM_BLOCK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for explore API paths. Empty means same origin.
    pub api_base: String,
    /// JSON-RPC endpoint for native builds (the browser uses the wallet).
    pub rpc_url: String,
    /// Delay between step-log polls.
    pub poll_interval_ms: u64,
    /// How long a toast stays on screen.
    pub toast_duration_ms: u64,
    /// First block scanned for `GameStep` logs.
    pub logs_from_block: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            rpc_url: "http://127.0.0.1:8545".to_string(),
            poll_interval_ms: 4_000,
            toast_duration_ms: 5_000,
            logs_from_block: 0,
        }
    }
}

impl AppConfig {
    /// Build a config from a key lookup (process env, build-time env, ...),
    /// falling back to defaults for missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, fallback: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(fallback)
        };

        Self {
            api_base: lookup(ENV_API_BASE)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            rpc_url: lookup(ENV_RPC_URL).unwrap_or(defaults.rpc_url),
            poll_interval_ms: number(ENV_POLL_MS, defaults.poll_interval_ms).max(250),
            toast_duration_ms: number(ENV_TOAST_MS, defaults.toast_duration_ms),
            logs_from_block: number(ENV_FROM_BLOCK, defaults.logs_from_block),
        }
    }
}
