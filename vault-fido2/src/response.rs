//! Response types for client operations

/// Result of a successful `create_credential`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCredentialResult {
    /// Raw credential id (16 UUID bytes)
    pub credential_id: Vec<u8>,

    /// CTAP2-canonical CBOR attestation object (`fmt = "none"`)
    pub attestation_object: Vec<u8>,

    /// The authenticator data embedded in the attestation object
    pub auth_data: Vec<u8>,

    /// UTF-8 client data JSON the attestation is bound to
    pub client_data_json: Vec<u8>,

    /// SubjectPublicKeyInfo DER encoding of the new public key
    pub public_key: Vec<u8>,

    /// COSE algorithm of the new key pair, always -7
    pub public_key_algorithm: i32,

    /// Transport hints reported to the RP
    pub transports: Vec<String>,
}

/// Result of a successful `assert_credential`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertCredentialResult {
    /// Authenticator data covered by the signature
    pub authenticator_data: Vec<u8>,

    /// UTF-8 client data JSON the assertion is bound to
    pub client_data_json: Vec<u8>,

    /// base64url (unpadded) encoding of `raw_id`
    pub id: String,

    /// Raw credential id (16 UUID bytes)
    pub raw_id: Vec<u8>,

    /// DER-encoded ES256 signature over
    /// `authenticator_data || SHA256(client_data_json)`
    pub signature: Vec<u8>,

    /// User handle stored at registration, when present
    pub user_handle: Option<Vec<u8>>,
}
