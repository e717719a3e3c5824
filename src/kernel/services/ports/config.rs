use serde::{Deserialize, Serialize};

/// Host process settings, read once at startup from `host.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Tee log lines to stderr in addition to the rolling file.
    pub log_to_stderr: bool,
    /// Name prefix of the rpc reader/writer threads.
    pub rpc_thread_prefix: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_filter: "zhost=info".to_string(),
            log_to_stderr: false,
            rpc_thread_prefix: "zhost-rpc".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
