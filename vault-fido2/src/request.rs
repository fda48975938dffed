//! Request types for client operations

use vault_fido2_ctap::types::{
    PublicKeyCredentialDescriptor, PublicKeyCredentialParameters, RelyingParty, User,
};

/// Inputs to `create_credential`
#[derive(Debug, Clone)]
pub struct CreateCredentialParams {
    /// Caller origin, e.g. "https://login.example.com"
    pub origin: String,

    /// Whether the caller and all its ancestor frames share the origin.
    /// Credential creation is refused from cross-origin frames.
    pub same_origin_with_ancestors: bool,

    /// RP-supplied challenge, opaque to this client
    pub challenge: Vec<u8>,

    /// Relying party entity; `rp.id` must be a registrable suffix of the
    /// origin host
    pub rp: RelyingParty,

    /// User entity; `user.id` must be 1 to 64 bytes
    pub user: User,

    /// Acceptable credential parameters. Empty means the WebAuthn default
    /// set (ES256 then RS256).
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,

    /// Credentials the RP already holds for this user
    pub exclude_credentials: Vec<PublicKeyCredentialDescriptor>,

    /// Authenticator-selection residentKey value ("required", "preferred"
    /// or "discouraged"), when the RP supplied one
    pub resident_key: Option<String>,

    /// Legacy requireResidentKey flag, consulted only when `resident_key`
    /// is unset
    pub require_resident_key: bool,

    /// Authenticator-selection userVerification value ("required",
    /// "preferred" or "discouraged"), when the RP supplied one
    pub user_verification: Option<String>,
}

/// Inputs to `assert_credential`
#[derive(Debug, Clone)]
pub struct AssertCredentialParams {
    /// Caller origin
    pub origin: String,

    /// Whether the caller and all its ancestor frames share the origin
    pub same_origin_with_ancestors: bool,

    /// RP-supplied challenge, opaque to this client
    pub challenge: Vec<u8>,

    /// RP ID the assertion is scoped to
    pub rp_id: String,

    /// Acceptable credentials; empty means any discoverable credential
    pub allow_credentials: Vec<PublicKeyCredentialDescriptor>,

    /// userVerification value ("required", "preferred" or "discouraged"),
    /// when the RP supplied one
    pub user_verification: Option<String>,

    /// Set by silent/inline flows that already established the user's
    /// intent; suppresses the user-presence requirement and, with a
    /// single-entry allow list, the credential picker
    pub assume_user_presence: bool,
}
