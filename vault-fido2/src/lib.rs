#![warn(unused_extern_crates)]

//! WebAuthn client layer for the vault-backed FIDO2 credential provider
//!
//! Implements the client-side WebAuthn Level 2 algorithms over the virtual
//! authenticator in `vault-fido2-ctap`: origin and RP ID validation,
//! client-data assembly, algorithm negotiation, and mapping of
//! authenticator results and errors into relying-party-facing shapes.
//!
//! ## Example
//!
//! ```no_run
//! # use vault_fido2::{CreateCredentialParams, Fido2Client};
//! # use vault_fido2::services::{EnvironmentService, StateService};
//! # fn demo<S, E, A>(client: Fido2Client<S, E, A>, params: CreateCredentialParams)
//! # where
//! #     S: StateService,
//! #     E: EnvironmentService,
//! #     A: vault_fido2::ctap::CredentialAuthenticator,
//! # {
//! match client.create_credential(params) {
//!     Ok(result) => println!("registered, alg {}", result.public_key_algorithm),
//!     Err(err) => eprintln!("registration failed: {err}"),
//! }
//! # }
//! ```

pub mod client;
pub mod client_data;
pub mod error;
pub mod request;
pub mod response;
pub mod rp_id;
pub mod services;

/// The authenticator layer, re-exported for host applications
pub use vault_fido2_ctap as ctap;

// Re-export main types at root level for convenience
pub use client::Fido2Client;
pub use client_data::{build_client_data_json, ClientDataType};
pub use error::{Fido2ClientError, Result};
pub use request::{AssertCredentialParams, CreateCredentialParams};
pub use response::{AssertCredentialResult, CreateCredentialResult};
pub use rp_id::is_valid_rp_id;
pub use services::{EnvironmentService, StateService};
