// Configuration type definitions

use serde::Deserialize;

/// Default idle delay before auto-requesting a continuation
pub const DEFAULT_DEBOUNCE_MS: u64 = 3000;

/// Default cap on a single completion request's lifetime
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Completion endpoint configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// URL of the completion endpoint. None means completions are unconfigured
    /// and the editor runs without them.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Optional bearer token sent as `Authorization: Bearer <key>`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Idle delay in milliseconds before auto-requesting a continuation
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Request lifetime cap in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        CompletionConfig {
            endpoint: None,
            api_key: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub completion: CompletionConfig,
}
