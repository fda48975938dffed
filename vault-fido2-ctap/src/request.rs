//! Request types for authenticator operations

use crate::error::{Fido2AuthenticatorError, Result};
use crate::types::{PublicKeyCredentialDescriptor, PublicKeyCredentialParameters, RelyingParty, User};

/// A validated client data hash (must be exactly 32 bytes)
///
/// This newtype ensures that client data hashes are always the correct
/// length, preventing runtime validation errors deeper in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientDataHash([u8; 32]);

impl ClientDataHash {
    /// Create a new ClientDataHash from a 32-byte array
    pub fn new(hash: [u8; 32]) -> Self {
        Self(hash)
    }

    /// Create a ClientDataHash from a slice
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the slice is not exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != 32 {
            return Err(Fido2AuthenticatorError::Unknown(
                "client data hash must be 32 bytes".to_string(),
            ));
        }
        let mut hash = [0u8; 32];
        hash.copy_from_slice(slice);
        Ok(Self(hash))
    }

    /// Get the hash as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for ClientDataHash {
    fn from(hash: [u8; 32]) -> Self {
        Self::new(hash)
    }
}

impl AsRef<[u8]> for ClientDataHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Inputs to `make_credential`
#[derive(Debug, Clone)]
pub struct MakeCredentialRequest {
    /// SHA-256 of the client data JSON
    pub client_data_hash: ClientDataHash,

    /// Relying party entity
    pub rp: RelyingParty,

    /// User entity
    pub user: User,

    /// Acceptable credential type/algorithm pairs, in preference order
    pub cred_types_and_pub_key_algs: Vec<PublicKeyCredentialParameters>,

    /// Whether the credential must be discoverable
    pub require_resident_key: bool,

    /// Whether the ceremony requires user verification
    pub require_user_verification: bool,

    /// Credentials the RP already knows; a match aborts the ceremony
    pub exclude_credential_descriptor_list: Vec<PublicKeyCredentialDescriptor>,
}

/// Inputs to `get_assertion`
#[derive(Debug, Clone)]
pub struct GetAssertionRequest {
    /// RP ID the assertion is scoped to
    pub rp_id: String,

    /// SHA-256 of the client data JSON
    pub client_data_hash: ClientDataHash,

    /// Acceptable credentials; empty means any discoverable credential for
    /// the RP
    pub allow_credential_descriptor_list: Vec<PublicKeyCredentialDescriptor>,

    /// Whether the user must demonstrate presence. False permits the
    /// silent single-allow-list selection path.
    pub require_user_presence: bool,

    /// Whether the ceremony requires user verification
    pub require_user_verification: bool,
}
