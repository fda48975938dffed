//! Credential-store queries over the vault collaborator
//!
//! The vault holds heterogeneous entries; these helpers narrow the full
//! decrypted list down to the login entries relevant to a ceremony. Every
//! query works on a fresh `get_all_decrypted` snapshot so prompts always
//! reflect current data.

use crate::callbacks::VaultStore;
use crate::error::VaultError;
use crate::types::PublicKeyCredentialDescriptor;
use crate::vault::CipherView;

use uuid::Uuid;

/// Resolve descriptor ids (16 raw UUID bytes) to canonical UUID strings
///
/// Descriptors whose id is not a 16-byte UUID cannot reference a vault
/// credential and are skipped.
pub fn resolve_descriptor_ids(descriptors: &[PublicKeyCredentialDescriptor]) -> Vec<String> {
    descriptors
        .iter()
        .filter_map(|descriptor| Uuid::from_slice(&descriptor.id).ok())
        .map(|uuid| uuid.to_string())
        .collect()
}

/// Entries matching an exclude list: live, unshared login entries whose
/// credential id is in `credential_ids`
pub fn find_excluded_credentials<V: VaultStore>(
    vault: &V,
    credential_ids: &[String],
) -> Result<Vec<CipherView>, VaultError> {
    Ok(vault
        .get_all_decrypted()?
        .into_iter()
        .filter(|view| view.organization_id.is_none())
        .filter(|view| matches_credential_ids(view, credential_ids))
        .collect())
}

/// Entries matching an allow list for `rp_id`
pub fn find_credentials_by_id<V: VaultStore>(
    vault: &V,
    credential_ids: &[String],
    rp_id: &str,
) -> Result<Vec<CipherView>, VaultError> {
    Ok(vault
        .get_all_decrypted()?
        .into_iter()
        .filter(|view| matches_rp(view, rp_id))
        .filter(|view| matches_credential_ids(view, credential_ids))
        .collect())
}

/// Discoverable credentials scoped to `rp_id`
pub fn find_discoverable_credentials_by_rp<V: VaultStore>(
    vault: &V,
    rp_id: &str,
) -> Result<Vec<CipherView>, VaultError> {
    Ok(vault
        .get_all_decrypted()?
        .into_iter()
        .filter(|view| matches_rp(view, rp_id))
        .filter(|view| {
            view.fido2_credential()
                .map(|credential| credential.discoverable)
                .unwrap_or(false)
        })
        .collect())
}

fn matches_rp(view: &CipherView, rp_id: &str) -> bool {
    view.is_active_fido2_login()
        && view
            .fido2_credential()
            .map(|credential| credential.rp_id == rp_id)
            .unwrap_or(false)
}

fn matches_credential_ids(view: &CipherView, credential_ids: &[String]) -> bool {
    view.is_active_fido2_login()
        && view
            .fido2_credential()
            .map(|credential| credential_ids.contains(&credential.credential_id))
            .unwrap_or(false)
}
