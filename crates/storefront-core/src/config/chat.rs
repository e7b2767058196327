//! Support chat configuration.

use serde::{Deserialize, Serialize};

/// Support chat (realtime channel) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Outbound frame buffer size per connection.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
    /// Maximum length of a relayed message in characters.
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
            max_message_chars: default_max_message_chars(),
        }
    }
}

fn default_channel_buffer() -> usize {
    64
}

fn default_max_message_chars() -> usize {
    2000
}
