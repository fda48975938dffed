//! Client-layer error taxonomy
//!
//! Variant names mirror the DOMException names a relying party expects
//! from a WebAuthn client. Reason strings are diagnostics for the host
//! application; they never contain vault contents or user identity.

use thiserror::Error;

/// Errors raised by `create_credential` and `assert_credential`
#[derive(Debug, Error)]
pub enum Fido2ClientError {
    /// The origin's host is on the user's autofill blocklist
    #[error("origin is blocked by the user: {0}")]
    UriBlocked(String),

    /// No user is authenticated, or the authenticator reported an invalid
    /// state
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Policy denial: cross-origin creation, vault self-save, or a denial
    /// raised by one of the client guards
    #[error("operation not allowed: {0}")]
    NotAllowed(&'static str),

    /// Non-HTTPS origin, or RP ID not a registrable suffix of the origin
    #[error("security error: {0}")]
    Security(&'static str),

    /// Malformed caller input, e.g. a user handle outside 1..=64 bytes
    #[error("type error: {0}")]
    TypeError(&'static str),

    /// No acceptable algorithm in the requested credential parameters
    #[error("not supported: {0}")]
    NotSupported(&'static str),

    /// Unexpected failure in a downstream layer
    #[error("unknown error: {0}")]
    Unknown(String),
}

/// Result type alias for client operations
pub type Result<T> = core::result::Result<T, Fido2ClientError>;
