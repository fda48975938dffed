//! Vault entry model
//!
//! The password manager stores credentials inside encrypted vault entries
//! ("ciphers"). Encryption, decryption and persistence belong to the vault
//! collaborator; this module only models the decrypted shape the
//! authenticator reads and mutates, and the FIDO2 credential record carried
//! by a login entry.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::CREDENTIAL_TYPE_PUBLIC_KEY;

/// An encrypted vault entry
///
/// Opaque to the authenticator apart from its id; only the vault
/// collaborator can read or produce the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cipher {
    /// Entry id
    pub id: String,

    /// Encrypted record, as produced by the vault collaborator
    pub payload: Vec<u8>,
}

/// Kind of vault entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherType {
    Login,
    SecureNote,
    Card,
    Identity,
}

/// Whether opening the entry requires re-entering the master password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherRepromptType {
    None,
    Password,
}

/// A decrypted vault entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherView {
    /// Entry id
    pub id: String,

    /// Entry display name
    pub name: String,

    /// Kind of entry; only `Login` entries can carry FIDO2 credentials
    #[serde(rename = "type")]
    pub cipher_type: CipherType,

    /// Owning organization, if the entry is shared
    pub organization_id: Option<String>,

    /// Soft-deletion timestamp (epoch seconds); `Some` means trashed
    pub deleted_date: Option<i64>,

    /// Master-password reprompt policy for this entry
    pub reprompt: CipherRepromptType,

    /// Login data, present for `Login` entries
    pub login: Option<LoginView>,
}

impl CipherView {
    /// The FIDO2 credential carried by this entry, if any
    ///
    /// An entry holds at most one credential; extra elements are never
    /// written by this crate and are ignored when read.
    pub fn fido2_credential(&self) -> Option<&Fido2Credential> {
        self.login.as_ref()?.fido2_credentials.first()
    }

    /// Whether this is a live login entry carrying a FIDO2 credential
    pub fn is_active_fido2_login(&self) -> bool {
        self.deleted_date.is_none()
            && self.cipher_type == CipherType::Login
            && self.fido2_credential().is_some()
    }
}

/// Decrypted login data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginView {
    /// Stored username
    pub username: Option<String>,

    /// FIDO2 credentials; at most one element
    pub fido2_credentials: Vec<Fido2Credential>,
}

/// A FIDO2 credential persisted inside a login entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fido2Credential {
    /// Credential id as a canonical UUID string; its raw wire form is the
    /// 16-byte big-endian encoding
    pub credential_id: String,

    /// Always "public-key"
    pub key_type: String,

    /// Always "ECDSA"
    pub key_algorithm: String,

    /// Always "P-256"
    pub key_curve: String,

    /// base64url (unpadded) PKCS#8 private key
    pub key_value: String,

    /// RP ID the credential is scoped to
    pub rp_id: String,

    /// RP display name at creation time
    pub rp_name: Option<String>,

    /// base64url (unpadded) user handle
    pub user_handle: Option<String>,

    /// User account name at creation time
    pub user_name: Option<String>,

    /// User display name at creation time
    pub user_display_name: Option<String>,

    /// Signature counter. Zero is a sentinel meaning the counter is
    /// disabled and must never be incremented.
    pub counter: u32,

    /// Whether the credential may be returned without an allow list
    pub discoverable: bool,

    /// Creation time, epoch seconds, informational
    pub creation_date: i64,
}

impl Fido2Credential {
    /// Raw 16-byte form of the credential id
    ///
    /// Returns `None` when the stored string is not a valid UUID.
    pub fn credential_id_bytes(&self) -> Option<[u8; 16]> {
        Uuid::parse_str(&self.credential_id)
            .ok()
            .map(|uuid| *uuid.as_bytes())
    }

    /// Decoded user handle bytes
    pub fn user_handle_bytes(&self) -> Option<Vec<u8>> {
        let encoded = self.user_handle.as_deref()?;
        URL_SAFE_NO_PAD.decode(encoded).ok()
    }

    /// Decoded PKCS#8 private key bytes
    pub fn private_key_bytes(&self) -> Option<Vec<u8>> {
        URL_SAFE_NO_PAD.decode(&self.key_value).ok()
    }

    /// Whether the credential uses the only key shape this authenticator
    /// produces
    pub fn is_es256(&self) -> bool {
        self.key_type == CREDENTIAL_TYPE_PUBLIC_KEY
            && self.key_algorithm == "ECDSA"
            && self.key_curve == "P-256"
    }
}
