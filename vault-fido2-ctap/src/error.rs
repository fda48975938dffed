//! Error types for authenticator operations
//!
//! [`Fido2AuthenticatorError`] is the taxonomy the client layer consumes;
//! its variant names mirror the DOMException set relying parties expect.
//! Policy denials carry `&'static str` reasons so that no vault contents
//! or user identity can leak through an error message.

use thiserror::Error;

use crate::cbor::CborError;

use vault_fido2_crypto::CryptoError;

/// Errors surfaced by the vault and sync collaborators
///
/// These are opaque to callers of the authenticator: every variant is
/// remapped to [`Fido2AuthenticatorError::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VaultError {
    /// No cipher with the requested id exists
    #[error("cipher not found")]
    NotFound,

    /// The vault is locked and cannot decrypt
    #[error("vault is locked")]
    Locked,

    /// Encryption or decryption of a cipher failed
    #[error("cipher crypto operation failed")]
    CryptoFailed,

    /// Persistence or sync failed
    #[error("vault storage failure: {0}")]
    Storage(String),
}

/// Errors raised by authenticator operations
#[derive(Debug, Error)]
pub enum Fido2AuthenticatorError {
    /// Policy denial: excluded credential, missing user consent, failed
    /// user presence/verification, or no matching credential
    #[error("operation not allowed: {0}")]
    NotAllowed(&'static str),

    /// None of the requested credential parameters is supported
    #[error("not supported: {0}")]
    NotSupported(&'static str),

    /// The authenticator is not in a state where the operation can run
    #[error("invalid authenticator state: {0}")]
    InvalidState(&'static str),

    /// Unexpected failure in a downstream layer
    #[error("unexpected authenticator failure: {0}")]
    Unknown(String),
}

impl From<VaultError> for Fido2AuthenticatorError {
    fn from(err: VaultError) -> Self {
        Self::Unknown(err.to_string())
    }
}

impl From<CryptoError> for Fido2AuthenticatorError {
    fn from(err: CryptoError) -> Self {
        Self::Unknown(err.to_string())
    }
}

impl From<CborError> for Fido2AuthenticatorError {
    fn from(err: CborError) -> Self {
        Self::Unknown(err.to_string())
    }
}

/// Result type alias for authenticator operations
pub type Result<T> = core::result::Result<T, Fido2AuthenticatorError>;
