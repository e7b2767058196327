//! Outbound mail configuration.

use serde::{Deserialize, Serialize};

/// Outbound mail (SMTP) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Whether outbound mail is enabled. When disabled the gateway logs
    /// instead of sending.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// Sender address for all outbound mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Fixed operator address copied on every order and pickup.
    #[serde(default = "default_operator_address")]
    pub operator_address: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            operator_address: default_operator_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "orders@fernwood.example".to_string()
}

fn default_operator_address() -> String {
    "desk@fernwood.example".to_string()
}
