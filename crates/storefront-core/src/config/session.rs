//! Session registry configuration.

use serde::{Deserialize, Serialize};

/// Session registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle timeout in minutes before a session is eligible for expiry.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Whether the background idle-session sweeper runs.
    #[serde(default = "default_true")]
    pub sweeper_enabled: bool,
    /// Interval between sweeper passes in minutes.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: default_idle_timeout(),
            sweeper_enabled: true,
            sweep_interval_minutes: default_sweep_interval(),
        }
    }
}

fn default_idle_timeout() -> u64 {
    20
}

fn default_sweep_interval() -> u64 {
    5
}

fn default_true() -> bool {
    true
}
