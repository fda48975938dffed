//! The make-credential operation
//!
//! Creates a new ES256 credential inside an existing vault entry chosen by
//! the user, and returns a "none"-format attestation object for it.
//!
//! Persistence happens only after the user has confirmed the prompt, so a
//! cancelled ceremony leaves no partial credential behind.

use log::debug;
use uuid::Uuid;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use vault_fido2_crypto::ecdsa;

use crate::attestation;
use crate::authenticator::Fido2Authenticator;
use crate::authenticator_data::{self, AttestedCredential};
use crate::callbacks::{NewCredentialParams, SyncService, UserInterface, VaultStore};
use crate::cose;
use crate::error::{Fido2AuthenticatorError, Result};
use crate::request::MakeCredentialRequest;
use crate::response::MakeCredentialResponse;
use crate::store;
use crate::types::{COSE_ALG_ES256, CREDENTIAL_TYPE_PUBLIC_KEY};
use crate::vault::{CipherRepromptType, CipherView, Fido2Credential};

/// Handle the make-credential operation
pub(crate) fn handle<U: UserInterface, V: VaultStore, Y: SyncService>(
    auth: &Fido2Authenticator<U, V, Y>,
    request: MakeCredentialRequest,
) -> Result<MakeCredentialResponse> {
    debug!("makeCredential requested for rp {}", request.rp.id);

    // Only ES256 can be produced; bail before touching the vault.
    if !request
        .cred_types_and_pub_key_algs
        .iter()
        .any(|params| params.is_supported())
    {
        return Err(Fido2AuthenticatorError::NotSupported(
            "none of the requested algorithms is ES256",
        ));
    }

    auth.ui().ensure_unlocked_vault();
    auth.sync().full_sync(false)?;

    check_excluded_credentials(auth, &request)?;

    let confirmation = auth.ui().confirm_new_credential(NewCredentialParams {
        credential_name: request.rp.name.clone(),
        user_name: request.user.name.clone(),
        user_verification: request.require_user_verification,
        rp_id: request.rp.id.clone(),
    });
    let Some(cipher_id) = confirmation.cipher_id else {
        return Err(Fido2AuthenticatorError::NotAllowed(
            "user declined the new credential",
        ));
    };

    let key_pair = ecdsa::generate_key_pair()?;
    let credential_id = Uuid::new_v4();
    let credential = Fido2Credential {
        credential_id: credential_id.to_string(),
        key_type: CREDENTIAL_TYPE_PUBLIC_KEY.to_string(),
        key_algorithm: "ECDSA".to_string(),
        key_curve: "P-256".to_string(),
        key_value: URL_SAFE_NO_PAD.encode(key_pair.private_key_pkcs8()),
        rp_id: request.rp.id.clone(),
        rp_name: Some(request.rp.name.clone()),
        user_handle: Some(URL_SAFE_NO_PAD.encode(&request.user.id)),
        user_name: Some(request.user.name.clone()),
        user_display_name: Some(request.user.display_name.clone()),
        counter: 0,
        discoverable: request.require_resident_key,
        creation_date: current_timestamp(),
    };

    let encrypted = auth.vault().get_encrypted(&cipher_id)?;
    let mut view = auth.vault().decrypt(&encrypted)?;

    if !confirmation.user_verified
        && (request.require_user_verification || view.reprompt != CipherRepromptType::None)
    {
        return Err(Fido2AuthenticatorError::NotAllowed(
            "user verification was required but not performed",
        ));
    }

    persist_credential(auth, &mut view, credential)?;

    let cose_key =
        cose::encode_es256_public_key(key_pair.public_key().x(), key_pair.public_key().y())?;
    let auth_data = authenticator_data::build(
        &request.rp.id,
        true,
        confirmation.user_verified,
        0,
        Some(AttestedCredential {
            credential_id: credential_id.as_bytes(),
            cose_public_key: &cose_key,
        }),
    );
    let attestation_object = attestation::encode_none_attestation_object(&auth_data)?;

    Ok(MakeCredentialResponse {
        credential_id: credential_id.as_bytes().to_vec(),
        attestation_object,
        auth_data,
        public_key: key_pair.public_key().spki_der().to_vec(),
        public_key_algorithm: COSE_ALG_ES256,
    })
}

/// Abort when the RP already holds one of the excluded credentials
fn check_excluded_credentials<U: UserInterface, V: VaultStore, Y: SyncService>(
    auth: &Fido2Authenticator<U, V, Y>,
    request: &MakeCredentialRequest,
) -> Result<()> {
    let excluded_ids = store::resolve_descriptor_ids(&request.exclude_credential_descriptor_list);
    if excluded_ids.is_empty() {
        return Ok(());
    }

    let excluded = store::find_excluded_credentials(auth.vault(), &excluded_ids)?;
    if excluded.is_empty() {
        return Ok(());
    }

    let cipher_ids: Vec<String> = excluded.into_iter().map(|view| view.id).collect();
    auth.ui().inform_excluded_credential(&cipher_ids);
    Err(Fido2AuthenticatorError::NotAllowed(
        "a credential from the exclude list already exists",
    ))
}

/// Replace the entry's credential list with the new credential and save
fn persist_credential<U: UserInterface, V: VaultStore, Y: SyncService>(
    auth: &Fido2Authenticator<U, V, Y>,
    view: &mut CipherView,
    credential: Fido2Credential,
) -> Result<()> {
    let Some(login) = view.login.as_mut() else {
        return Err(Fido2AuthenticatorError::Unknown(
            "chosen cipher is not a login entry".to_string(),
        ));
    };
    login.fido2_credentials = vec![credential];

    let reencrypted = auth.vault().encrypt(view)?;
    auth.vault().save_with_server(&reencrypted)?;
    Ok(())
}

/// Current wall-clock time in epoch seconds
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
