//! Admin-declared shutdown window.

use std::sync::Arc;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use storefront_core::error::AppError;
use storefront_core::result::AppResult;

/// A time-bounded window during which the gated storefront endpoints are
/// rejected with ServiceUnavailable.
///
/// Deactivation is belt and braces: a timer task clears the window when it
/// elapses, and `is_active` also clears lazily in case the process was too
/// busy for the timer to have fired yet.
#[derive(Debug, Default)]
pub struct ShutdownWindow {
    ends_at: RwLock<Option<DateTime<Utc>>>,
}

impl ShutdownWindow {
    /// Create an inactive window.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Activate the window for the given number of seconds.
    ///
    /// Fails with a validation error when the duration is not positive.
    /// Re-activating while a window is open replaces the deadline.
    pub fn activate(self: &Arc<Self>, seconds: i64) -> AppResult<DateTime<Utc>> {
        if seconds <= 0 {
            return Err(AppError::validation(
                "Shutdown duration must be a positive number of seconds",
            ));
        }

        let deadline = Utc::now() + Duration::seconds(seconds);
        *self.ends_at.write().expect("shutdown lock poisoned") = Some(deadline);
        info!(seconds, %deadline, "Shutdown window activated");

        let window = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(seconds as u64)).await;
            window.deactivate_if(deadline);
        });

        Ok(deadline)
    }

    /// Whether the window is currently open.
    pub fn is_active(&self) -> bool {
        let ends_at = *self.ends_at.read().expect("shutdown lock poisoned");
        match ends_at {
            None => false,
            Some(deadline) if Utc::now() < deadline => true,
            Some(deadline) => {
                // The timer has not fired yet; clear the stale window now.
                self.deactivate_if(deadline);
                false
            }
        }
    }

    /// The current deadline, when a window is open.
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        let ends_at = *self.ends_at.read().expect("shutdown lock poisoned");
        ends_at.filter(|deadline| Utc::now() < *deadline)
    }

    /// Clear the window, but only if the deadline is still the one this
    /// caller armed (a newer activation must not be cancelled).
    fn deactivate_if(&self, expected: DateTime<Utc>) {
        let mut ends_at = self.ends_at.write().expect("shutdown lock poisoned");
        if *ends_at == Some(expected) {
            *ends_at = None;
            info!("Shutdown window cleared");
        }
    }
}
