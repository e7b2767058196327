//! Role resolution configuration.

use serde::{Deserialize, Serialize};

/// Role resolution configuration.
///
/// There are no passwords or tokens: a login is an email check, and the
/// operator role is granted to the configured addresses. The comparison
/// happens exactly once, at login, and the resolved role travels with the
/// session from then on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Addresses that resolve to the operator role at login.
    #[serde(default)]
    pub operator_emails: Vec<String>,
}

impl AuthConfig {
    /// Check whether an address (already normalized) is an operator address.
    pub fn is_operator(&self, email: &str) -> bool {
        self.operator_emails
            .iter()
            .any(|op| op.eq_ignore_ascii_case(email))
    }
}
