//! WebAuthn/CTAP entity types
//!
//! The relying-party-facing structures exchanged between the client layer
//! and the authenticator. All types support serde serialization so host
//! applications can move them across process or FFI boundaries.

use serde::{Deserialize, Serialize};

/// The only credential type defined by WebAuthn Level 2
pub const CREDENTIAL_TYPE_PUBLIC_KEY: &str = "public-key";

/// COSE algorithm identifier for ES256 (ECDSA, P-256, SHA-256)
pub const COSE_ALG_ES256: i32 = -7;

/// COSE algorithm identifier for RS256, accepted in defaults but never
/// negotiated by this authenticator
pub const COSE_ALG_RS256: i32 = -257;

/// Relying Party entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelyingParty {
    /// Relying party identifier, a registrable domain suffix of the caller
    /// origin (e.g. "example.com")
    pub id: String,

    /// Human-readable name shown when confirming a new credential
    pub name: String,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User handle, an opaque byte sequence of 1 to 64 bytes
    pub id: Vec<u8>,

    /// Human-readable account identifier (e.g. an email address)
    pub name: String,

    /// Human-readable display name
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// An acceptable credential type and algorithm pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyCredentialParameters {
    /// Credential type, always "public-key"
    #[serde(rename = "type")]
    pub cred_type: String,

    /// COSE algorithm identifier
    pub alg: i32,
}

impl PublicKeyCredentialParameters {
    /// ES256 parameters, the only pair this authenticator can satisfy
    pub fn es256() -> Self {
        Self {
            cred_type: CREDENTIAL_TYPE_PUBLIC_KEY.to_string(),
            alg: COSE_ALG_ES256,
        }
    }

    /// RS256 parameters, part of the WebAuthn default set
    pub fn rs256() -> Self {
        Self {
            cred_type: CREDENTIAL_TYPE_PUBLIC_KEY.to_string(),
            alg: COSE_ALG_RS256,
        }
    }

    /// Whether this pair can be satisfied by the authenticator
    pub fn is_supported(&self) -> bool {
        self.cred_type == CREDENTIAL_TYPE_PUBLIC_KEY && self.alg == COSE_ALG_ES256
    }
}

/// A reference to a specific credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyCredentialDescriptor {
    /// Credential type, always "public-key"
    #[serde(rename = "type")]
    pub cred_type: String,

    /// Raw credential id; for vault credentials this is the 16-byte
    /// big-endian form of the credential UUID
    pub id: Vec<u8>,

    /// Hints about how the credential can be reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}

impl PublicKeyCredentialDescriptor {
    /// Create a descriptor for a raw credential id
    pub fn new(id: Vec<u8>) -> Self {
        Self {
            cred_type: CREDENTIAL_TYPE_PUBLIC_KEY.to_string(),
            id,
            transports: None,
        }
    }
}
