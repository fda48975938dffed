//! The silent-discovery operation
//!
//! Lists discoverable credentials for an RP so autofill surfaces can offer
//! them. Never prompts, never mutates; repeated calls over an unchanged
//! vault return identical lists.

use log::debug;

use crate::authenticator::Fido2Authenticator;
use crate::callbacks::{SyncService, UserInterface, VaultStore};
use crate::error::Result;
use crate::response::Fido2CredentialAutofillView;
use crate::store;
use crate::types::CREDENTIAL_TYPE_PUBLIC_KEY;

/// Handle the silent-discovery operation
pub(crate) fn handle<U: UserInterface, V: VaultStore, Y: SyncService>(
    auth: &Fido2Authenticator<U, V, Y>,
    rp_id: &str,
) -> Result<Vec<Fido2CredentialAutofillView>> {
    debug!("silent discovery for rp {rp_id}");

    let views = store::find_discoverable_credentials_by_rp(auth.vault(), rp_id)?;

    Ok(views
        .into_iter()
        .filter_map(|view| {
            let credential = view.fido2_credential()?;
            // A credential id that is not a UUID cannot be referenced on
            // the wire; skip the entry rather than failing discovery.
            let raw_id = credential.credential_id_bytes()?;
            Some(Fido2CredentialAutofillView {
                cipher_id: view.id.clone(),
                cred_type: CREDENTIAL_TYPE_PUBLIC_KEY.to_string(),
                id: raw_id.to_vec(),
                rp_id: credential.rp_id.clone(),
                user_handle: credential.user_handle_bytes(),
                user_name: credential.user_name.clone(),
            })
        })
        .collect())
}
