//! PAT-based Basic authentication for the Azure DevOps REST API.
//!
//! Azure DevOps accepts a personal access token as the password half of
//! HTTP Basic authentication with an empty username. This module builds
//! that header value and keeps the token wrapped in a [`SecretString`]
//! everywhere else.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use secrecy::{ExposeSecret, SecretString};

/// Build the `Authorization` header value for a personal access token.
///
/// The value is `Basic base64(":" + token)`: empty username, token as
/// password. Deterministic, never fails.
///
/// # Example
///
/// ```
/// use docpost::api::build_auth_header;
///
/// assert_eq!(build_auth_header("test_token"), "Basic OnRlc3RfdG9rZW4=");
/// ```
#[must_use]
pub fn build_auth_header(token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!(":{token}")))
}

/// PAT credential for Azure DevOps authentication.
///
/// Wraps the token in a `SecretString` so it never shows up in `Debug`
/// output or logs; the header value is materialized only at request time.
#[derive(Clone)]
pub struct PatCredential {
    pat: SecretString,
}

impl PatCredential {
    /// Creates a credential from a SecretString.
    pub fn new(pat: SecretString) -> Self {
        Self { pat }
    }

    /// Creates a credential from a plain string.
    ///
    /// The string is wrapped in a SecretString for secure handling.
    pub fn from_string(pat: String) -> Self {
        Self {
            pat: SecretString::from(pat),
        }
    }

    /// The `Authorization` header value for this credential.
    pub fn header_value(&self) -> String {
        build_auth_header(self.pat.expose_secret())
    }
}

impl std::fmt::Debug for PatCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatCredential")
            .field("pat", &"[REDACTED]")
            .finish()
    }
}
