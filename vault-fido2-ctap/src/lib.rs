#![warn(unused_extern_crates)]

//! Virtual CTAP2 authenticator backed by an encrypted password-manager vault
//!
//! This crate implements the authenticator half of a WebAuthn credential
//! provider: key generation, attestation-object and authenticator-data
//! assembly, assertion signing, and credential storage through a vault
//! abstraction. It is invoked through direct calls from the client layer;
//! no CTAP transport framing is involved.
//!
//! ## Architecture
//!
//! - **Authenticator**: [`Fido2Authenticator`] dispatches the three
//!   operations (`make_credential`, `get_assertion`, `silent_discovery`)
//!   to the modules under `commands`
//! - **Collaborators**: user interaction, vault access and sync are
//!   injected through the traits in [`callbacks`]; all credential state
//!   lives in the vault
//! - **Wire encoding**: [`cbor`], [`cose`], [`attestation`] and
//!   [`authenticator_data`] produce the byte-exact structures browsers
//!   verify

pub mod attestation;
pub mod authenticator;
pub mod authenticator_data;
pub mod callbacks;
pub mod cbor;
pub mod commands;
pub mod cose;
pub mod error;
pub mod request;
pub mod response;
pub mod store;
pub mod types;
pub mod vault;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use authenticator::{CredentialAuthenticator, Fido2Authenticator, Fido2AuthenticatorBuilder};
pub use callbacks::{
    NewCredentialParams, NewCredentialResult, PickCredentialParams, PickCredentialResult,
    SyncService, UserInterface, VaultStore,
};
pub use error::{Fido2AuthenticatorError, Result, VaultError};
pub use request::{ClientDataHash, GetAssertionRequest, MakeCredentialRequest};
pub use response::{
    Fido2CredentialAutofillView, GetAssertionResponse, MakeCredentialResponse, SelectedCredential,
};
pub use types::{
    PublicKeyCredentialDescriptor, PublicKeyCredentialParameters, RelyingParty, User,
    COSE_ALG_ES256, CREDENTIAL_TYPE_PUBLIC_KEY,
};
pub use vault::{Cipher, CipherRepromptType, CipherType, CipherView, Fido2Credential, LoginView};
