//! The get-assertion operation
//!
//! Selects a stored credential, bumps its signature counter, persists the
//! entry, and only then signs `authenticatorData || clientDataHash`. A
//! signature must never reflect a counter value that was not committed.

use log::{debug, warn};
use zeroize::Zeroizing;

use vault_fido2_crypto::ecdsa;

use crate::authenticator::Fido2Authenticator;
use crate::authenticator_data;
use crate::callbacks::{PickCredentialParams, SyncService, UserInterface, VaultStore};
use crate::error::{Fido2AuthenticatorError, Result};
use crate::request::GetAssertionRequest;
use crate::response::{GetAssertionResponse, SelectedCredential};
use crate::store;
use crate::vault::{CipherRepromptType, CipherView, Fido2Credential};

/// A chosen candidate together with how the user participated
struct Selection {
    view: CipherView,
    user_presence: bool,
    user_verified: bool,
}

/// Handle the get-assertion operation
pub(crate) fn handle<U: UserInterface, V: VaultStore, Y: SyncService>(
    auth: &Fido2Authenticator<U, V, Y>,
    request: GetAssertionRequest,
) -> Result<GetAssertionResponse> {
    debug!("getAssertion requested for rp {}", request.rp_id);

    auth.ui().ensure_unlocked_vault();
    auth.sync().full_sync(false)?;

    let allow_list = &request.allow_credential_descriptor_list;
    let candidates = if !allow_list.is_empty() {
        let credential_ids = store::resolve_descriptor_ids(allow_list);
        store::find_credentials_by_id(auth.vault(), &credential_ids, &request.rp_id)?
    } else {
        store::find_discoverable_credentials_by_rp(auth.vault(), &request.rp_id)?
    };

    if candidates.is_empty() {
        warn!("no matching credentials for rp {}", request.rp_id);
        return Err(Fido2AuthenticatorError::NotAllowed(
            "no matching credentials",
        ));
    }

    let selection = select_credential(auth, &request, candidates)?;

    if !selection.user_presence && request.require_user_presence {
        return Err(Fido2AuthenticatorError::NotAllowed(
            "user presence was required but not collected",
        ));
    }
    if !selection.user_verified
        && (request.require_user_verification
            || selection.view.reprompt != CipherRepromptType::None)
    {
        return Err(Fido2AuthenticatorError::NotAllowed(
            "user verification was required but not performed",
        ));
    }

    let mut view = selection.view;
    let (sign_count, credential) = bump_counter(&mut view)?;

    // Commit before signing: the signature must reflect the stored counter.
    auth.vault().update_last_used_date(&view.id)?;
    let reencrypted = auth.vault().encrypt(&view)?;
    auth.vault().save_with_server(&reencrypted)?;

    let auth_data = authenticator_data::build(
        &request.rp_id,
        selection.user_presence,
        selection.user_verified,
        sign_count,
        None,
    );

    if !credential.is_es256() {
        return Err(Fido2AuthenticatorError::Unknown(
            "stored credential uses an unsupported key shape".to_string(),
        ));
    }
    let private_key = Zeroizing::new(credential.private_key_bytes().ok_or_else(|| {
        Fido2AuthenticatorError::Unknown("stored private key is not valid base64url".to_string())
    })?);
    let mut message = auth_data.clone();
    message.extend_from_slice(request.client_data_hash.as_slice());
    let signature = ecdsa::sign(&private_key, &message)?;

    let raw_id = credential.credential_id_bytes().ok_or_else(|| {
        Fido2AuthenticatorError::Unknown("stored credential id is not a UUID".to_string())
    })?;

    Ok(GetAssertionResponse {
        selected_credential: SelectedCredential {
            id: raw_id.to_vec(),
            user_handle: credential.user_handle_bytes(),
        },
        authenticator_data: auth_data,
        signature,
    })
}

/// Apply the selection policy
///
/// A single-entry allow list with no presence requirement is served
/// silently; everything else goes through the credential picker.
fn select_credential<U: UserInterface, V: VaultStore, Y: SyncService>(
    auth: &Fido2Authenticator<U, V, Y>,
    request: &GetAssertionRequest,
    candidates: Vec<CipherView>,
) -> Result<Selection> {
    if request.allow_credential_descriptor_list.len() == 1 && !request.require_user_presence {
        let Some(view) = candidates.into_iter().next() else {
            return Err(Fido2AuthenticatorError::NotAllowed(
                "no matching credentials",
            ));
        };
        return Ok(Selection {
            view,
            user_presence: false,
            user_verified: false,
        });
    }

    let cipher_ids: Vec<String> = candidates.iter().map(|view| view.id.clone()).collect();
    let picked = auth.ui().pick_credential(PickCredentialParams {
        cipher_ids,
        user_verification: request.require_user_verification,
    });

    let selected = picked
        .cipher_id
        .and_then(|cipher_id| candidates.into_iter().find(|view| view.id == cipher_id));
    let Some(view) = selected else {
        return Err(Fido2AuthenticatorError::NotAllowed(
            "no credential was selected",
        ));
    };

    Ok(Selection {
        view,
        user_presence: true,
        user_verified: picked.user_verified,
    })
}

/// Increment the signature counter unless it is the disabled sentinel
///
/// Returns the committed counter value and a snapshot of the credential.
fn bump_counter(view: &mut CipherView) -> Result<(u32, Fido2Credential)> {
    let Some(credential) = view
        .login
        .as_mut()
        .and_then(|login| login.fido2_credentials.first_mut())
    else {
        return Err(Fido2AuthenticatorError::Unknown(
            "candidate cipher lost its credential".to_string(),
        ));
    };

    if credential.counter != 0 {
        credential.counter += 1;
    }
    Ok((credential.counter, credential.clone()))
}
