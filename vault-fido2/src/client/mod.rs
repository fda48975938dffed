//! The WebAuthn client
//!
//! [`Fido2Client`] validates relying-party input, assembles client data,
//! dispatches to the authenticator and maps results and errors back into
//! the shapes a WebAuthn caller expects.
//!
//! Guards run in a fixed order and the first failure wins: blocklist,
//! authentication state, vault self-save, creation-only checks
//! (same-origin, user handle length), HTTPS, RP ID validation.

use log::{debug, warn};
use url::Url;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use vault_fido2_crypto::sha256;
use vault_fido2_ctap::authenticator::CredentialAuthenticator;
use vault_fido2_ctap::error::Fido2AuthenticatorError;
use vault_fido2_ctap::request::{ClientDataHash, GetAssertionRequest, MakeCredentialRequest};
use vault_fido2_ctap::types::PublicKeyCredentialParameters;

use crate::client_data::{build_client_data_json, ClientDataType};
use crate::error::{Fido2ClientError, Result};
use crate::request::{AssertCredentialParams, CreateCredentialParams};
use crate::response::{AssertCredentialResult, CreateCredentialResult};
use crate::rp_id;
use crate::services::{EnvironmentService, StateService};

/// WebAuthn client over an authenticator and the host application's state
pub struct Fido2Client<S, E, A> {
    state: S,
    environment: E,
    authenticator: A,
}

impl<S: StateService, E: EnvironmentService, A: CredentialAuthenticator> Fido2Client<S, E, A> {
    /// Create a client over the given collaborators
    pub fn new(state: S, environment: E, authenticator: A) -> Self {
        Self {
            state,
            environment,
            authenticator,
        }
    }

    /// The underlying authenticator, e.g. for silent discovery
    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Register a new credential for a relying party
    pub fn create_credential(
        &self,
        params: CreateCredentialParams,
    ) -> Result<CreateCredentialResult> {
        debug!("createCredential requested by {}", params.origin);
        self.apply_common_guards(&params.origin)?;

        if !params.same_origin_with_ancestors {
            return Err(Fido2ClientError::NotAllowed(
                "credential creation from a cross-origin frame is not permitted",
            ));
        }
        if params.user.id.is_empty() || params.user.id.len() > 64 {
            return Err(Fido2ClientError::TypeError(
                "user.id must be between 1 and 64 bytes",
            ));
        }

        require_https(&params.origin)?;
        if !rp_id::is_valid_rp_id(&params.rp.id, &params.origin) {
            return Err(Fido2ClientError::Security(
                "rp.id is not a registrable suffix of the origin",
            ));
        }

        let cred_params = filter_credential_parameters(&params.pub_key_cred_params)?;
        let require_resident_key = derive_resident_key_requirement(
            params.resident_key.as_deref(),
            params.require_resident_key,
        );
        let require_user_verification =
            derive_user_verification(params.user_verification.as_deref());

        let client_data_json = build_client_data_json(
            ClientDataType::Create,
            &params.challenge,
            &params.origin,
            !params.same_origin_with_ancestors,
        )
        .map_err(|err| Fido2ClientError::Unknown(err.to_string()))?;
        let client_data_hash = ClientDataHash::new(sha256(&client_data_json));

        let rp_id = params.rp.id.clone();
        let request = MakeCredentialRequest {
            client_data_hash,
            rp: params.rp,
            user: params.user,
            cred_types_and_pub_key_algs: cred_params,
            require_resident_key,
            require_user_verification,
            exclude_credential_descriptor_list: params.exclude_credentials,
        };

        let response = self
            .authenticator
            .make_credential(request)
            .map_err(map_authenticator_error)?;

        Ok(CreateCredentialResult {
            credential_id: response.credential_id,
            attestation_object: response.attestation_object,
            auth_data: response.auth_data,
            client_data_json,
            public_key: response.public_key,
            public_key_algorithm: response.public_key_algorithm,
            transports: transports_for(&rp_id),
        })
    }

    /// Produce an assertion with a stored credential
    pub fn assert_credential(
        &self,
        params: AssertCredentialParams,
    ) -> Result<AssertCredentialResult> {
        debug!("assertCredential requested by {}", params.origin);
        self.apply_common_guards(&params.origin)?;

        require_https(&params.origin)?;
        if !rp_id::is_valid_rp_id(&params.rp_id, &params.origin) {
            return Err(Fido2ClientError::Security(
                "rpId is not a registrable suffix of the origin",
            ));
        }

        let require_user_verification =
            derive_user_verification(params.user_verification.as_deref());

        let client_data_json = build_client_data_json(
            ClientDataType::Get,
            &params.challenge,
            &params.origin,
            !params.same_origin_with_ancestors,
        )
        .map_err(|err| Fido2ClientError::Unknown(err.to_string()))?;
        let client_data_hash = ClientDataHash::new(sha256(&client_data_json));

        let request = GetAssertionRequest {
            rp_id: params.rp_id,
            client_data_hash,
            allow_credential_descriptor_list: params.allow_credentials,
            require_user_presence: !params.assume_user_presence,
            require_user_verification,
        };

        let response = self
            .authenticator
            .get_assertion(request)
            .map_err(map_authenticator_error)?;

        Ok(AssertCredentialResult {
            authenticator_data: response.authenticator_data,
            client_data_json,
            id: URL_SAFE_NO_PAD.encode(&response.selected_credential.id),
            raw_id: response.selected_credential.id,
            signature: response.signature,
            user_handle: response.selected_credential.user_handle,
        })
    }

    /// Guards shared by both operations, in order; the first failure wins
    fn apply_common_guards(&self, origin: &str) -> Result<()> {
        if let Some(host) = origin_host(origin) {
            if self.state.autofill_blocklisted_hosts().contains(&host) {
                warn!("origin host {host} is on the autofill blocklist");
                return Err(Fido2ClientError::UriBlocked(host));
            }
        }
        if !self.state.is_authenticated() {
            return Err(Fido2ClientError::InvalidState("no user is authenticated"));
        }
        if origin == self.environment.web_vault_url() {
            return Err(Fido2ClientError::NotAllowed(
                "passkeys for the vault itself cannot be stored in the vault",
            ));
        }
        Ok(())
    }
}

/// Re-raise authenticator `InvalidState` verbatim; everything else is an
/// unexpected downstream failure
fn map_authenticator_error(err: Fido2AuthenticatorError) -> Fido2ClientError {
    match err {
        Fido2AuthenticatorError::InvalidState(reason) => Fido2ClientError::InvalidState(reason),
        other => Fido2ClientError::Unknown(other.to_string()),
    }
}

fn origin_host(origin: &str) -> Option<String> {
    let url = Url::parse(origin).ok()?;
    url.host_str().map(str::to_string)
}

fn require_https(origin: &str) -> Result<()> {
    if origin.starts_with("https://") {
        Ok(())
    } else {
        Err(Fido2ClientError::Security("origin scheme must be https"))
    }
}

/// Restrict the requested parameters to what the authenticator supports
///
/// An empty request means the WebAuthn default set. Anything that survives
/// filtering is ES256; an empty result is a `NotSupported` failure.
fn filter_credential_parameters(
    requested: &[PublicKeyCredentialParameters],
) -> Result<Vec<PublicKeyCredentialParameters>> {
    let defaults = [
        PublicKeyCredentialParameters::es256(),
        PublicKeyCredentialParameters::rs256(),
    ];
    let source: &[PublicKeyCredentialParameters] = if requested.is_empty() {
        &defaults
    } else {
        requested
    };

    let filtered: Vec<PublicKeyCredentialParameters> = source
        .iter()
        .filter(|params| params.is_supported())
        .cloned()
        .collect();

    if filtered.is_empty() {
        return Err(Fido2ClientError::NotSupported(
            "no supported algorithm in pubKeyCredParams",
        ));
    }
    Ok(filtered)
}

/// Residency is required when the RP asked for it, or preferred it, or
/// set the legacy flag without a residentKey value
fn derive_resident_key_requirement(resident_key: Option<&str>, require_resident_key: bool) -> bool {
    match resident_key {
        Some("required") | Some("preferred") => true,
        Some(_) => false,
        None => require_resident_key,
    }
}

/// User verification is required when the RP asked for it, preferred it,
/// or said nothing at all
fn derive_user_verification(user_verification: Option<&str>) -> bool {
    matches!(
        user_verification,
        Some("required") | Some("preferred") | None
    )
}

/// Transport hints for the RP
///
/// google.com refuses credentials that do not also advertise a "usb"
/// transport, so it gets one alongside "internal".
fn transports_for(rp_id: &str) -> Vec<String> {
    if rp_id == "google.com" {
        vec!["internal".to_string(), "usb".to_string()]
    } else {
        vec!["internal".to_string()]
    }
}
