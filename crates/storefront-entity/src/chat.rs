//! Chat queue models shared between the engine and the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A waiting visitor as shown to operators in queue updates.
///
/// The waiting list is ordered by enqueue time, earliest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaiterInfo {
    /// Normalized email of the waiting visitor.
    pub email: String,
    /// Display name.
    pub name: String,
    /// When the visitor joined the queue.
    pub since: DateTime<Utc>,
}
