//! Response types for authenticator operations

use serde::{Deserialize, Serialize};

use crate::types::COSE_ALG_ES256;

/// Result of a successful `make_credential`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeCredentialResponse {
    /// Raw credential id (16 UUID bytes)
    pub credential_id: Vec<u8>,

    /// CTAP2-canonical CBOR attestation object (`fmt = "none"`)
    pub attestation_object: Vec<u8>,

    /// The authenticator data embedded in the attestation object
    pub auth_data: Vec<u8>,

    /// SubjectPublicKeyInfo DER encoding of the new public key
    pub public_key: Vec<u8>,

    /// COSE algorithm of the new key pair, always -7
    pub public_key_algorithm: i32,
}

impl MakeCredentialResponse {
    /// Whether the response carries the only algorithm this authenticator
    /// produces
    pub fn is_es256(&self) -> bool {
        self.public_key_algorithm == COSE_ALG_ES256
    }
}

/// The credential a successful assertion was produced with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCredential {
    /// Raw credential id (16 UUID bytes)
    pub id: Vec<u8>,

    /// User handle stored at registration, when present
    pub user_handle: Option<Vec<u8>>,
}

/// Result of a successful `get_assertion`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAssertionResponse {
    /// The credential used to sign
    pub selected_credential: SelectedCredential,

    /// Authenticator data covered by the signature
    pub authenticator_data: Vec<u8>,

    /// DER-encoded ES256 signature over
    /// `authenticator_data || client_data_hash`
    pub signature: Vec<u8>,
}

/// Credential metadata surfaced by silent discovery
///
/// Enough for an autofill surface to render a suggestion and, through
/// `cipher_id`, open the hosting vault entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fido2CredentialAutofillView {
    /// Hosting vault entry
    pub cipher_id: String,

    /// Credential type, always "public-key"
    #[serde(rename = "type")]
    pub cred_type: String,

    /// Raw credential id (16 UUID bytes)
    pub id: Vec<u8>,

    /// RP ID the credential is scoped to
    pub rp_id: String,

    /// User handle stored at registration, when present
    pub user_handle: Option<Vec<u8>>,

    /// User account name stored at registration, when present
    pub user_name: Option<String>,
}
