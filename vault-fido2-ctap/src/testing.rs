//! Mock collaborators shared by the command tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use uuid::Uuid;

use vault_fido2_crypto::ecdsa::{self, PublicKey};

use crate::callbacks::{
    NewCredentialParams, NewCredentialResult, PickCredentialParams, PickCredentialResult,
    SyncService, UserInterface, VaultStore,
};
use crate::cbor;
use crate::error::VaultError;
use crate::types::CREDENTIAL_TYPE_PUBLIC_KEY;
use crate::vault::{Cipher, CipherRepromptType, CipherType, CipherView, Fido2Credential, LoginView};

/// In-memory vault with identity "encryption" (views travel as CBOR in the
/// cipher payload)
pub(crate) struct MockVault {
    views: Mutex<BTreeMap<String, CipherView>>,
    last_used: Mutex<Vec<String>>,
}

impl MockVault {
    pub(crate) fn new() -> Self {
        Self {
            views: Mutex::new(BTreeMap::new()),
            last_used: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn insert(&self, view: CipherView) {
        self.views.lock().unwrap().insert(view.id.clone(), view);
    }

    pub(crate) fn view(&self, cipher_id: &str) -> CipherView {
        self.views
            .lock()
            .unwrap()
            .get(cipher_id)
            .expect("cipher missing from mock vault")
            .clone()
    }

    pub(crate) fn last_used_updates(&self) -> Vec<String> {
        self.last_used.lock().unwrap().clone()
    }
}

impl VaultStore for MockVault {
    fn get_encrypted(&self, cipher_id: &str) -> Result<Cipher, VaultError> {
        let views = self.views.lock().unwrap();
        let view = views.get(cipher_id).ok_or(VaultError::NotFound)?;
        Ok(Cipher {
            id: view.id.clone(),
            payload: Vec::new(),
        })
    }

    fn decrypt(&self, cipher: &Cipher) -> Result<CipherView, VaultError> {
        if cipher.payload.is_empty() {
            let views = self.views.lock().unwrap();
            return views.get(&cipher.id).cloned().ok_or(VaultError::NotFound);
        }
        cbor::decode(&cipher.payload).map_err(|_| VaultError::CryptoFailed)
    }

    fn encrypt(&self, view: &CipherView) -> Result<Cipher, VaultError> {
        let payload = cbor::encode(view).map_err(|_| VaultError::CryptoFailed)?;
        Ok(Cipher {
            id: view.id.clone(),
            payload,
        })
    }

    fn save_with_server(&self, cipher: &Cipher) -> Result<(), VaultError> {
        let view: CipherView =
            cbor::decode(&cipher.payload).map_err(|_| VaultError::CryptoFailed)?;
        self.views.lock().unwrap().insert(view.id.clone(), view);
        Ok(())
    }

    fn get_all_decrypted(&self) -> Result<Vec<CipherView>, VaultError> {
        Ok(self.views.lock().unwrap().values().cloned().collect())
    }

    fn update_last_used_date(&self, cipher_id: &str) -> Result<(), VaultError> {
        self.last_used.lock().unwrap().push(cipher_id.to_string());
        Ok(())
    }
}

/// Scripted UI collaborator
///
/// Constructors configure the response to each prompt; a prompt with no
/// configured response panics, which lets tests prove a prompt was never
/// reached.
pub(crate) struct MockUi {
    confirm: Option<(Option<String>, bool)>,
    pick: Option<(Option<String>, bool)>,
    informed: Mutex<Vec<Vec<String>>>,
    unlocks: Mutex<u32>,
    picks: Mutex<u32>,
}

impl MockUi {
    fn with_responses(
        confirm: Option<(Option<String>, bool)>,
        pick: Option<(Option<String>, bool)>,
    ) -> Self {
        Self {
            confirm,
            pick,
            informed: Mutex::new(Vec::new()),
            unlocks: Mutex::new(0),
            picks: Mutex::new(0),
        }
    }

    /// Confirm new credentials into `cipher_id`
    pub(crate) fn confirming(cipher_id: &str, user_verified: bool) -> Self {
        Self::with_responses(Some((Some(cipher_id.to_string()), user_verified)), None)
    }

    /// Pick `cipher_id` from the credential picker
    pub(crate) fn picking(cipher_id: &str, user_verified: bool) -> Self {
        Self::with_responses(None, Some((Some(cipher_id.to_string()), user_verified)))
    }

    /// Cancel every prompt
    pub(crate) fn cancelling() -> Self {
        Self::with_responses(Some((None, false)), Some((None, false)))
    }

    /// Panic on any prompt
    pub(crate) fn refusing_prompts() -> Self {
        Self::with_responses(None, None)
    }

    pub(crate) fn informed_excluded(&self) -> Vec<Vec<String>> {
        self.informed.lock().unwrap().clone()
    }

    pub(crate) fn unlock_count(&self) -> u32 {
        *self.unlocks.lock().unwrap()
    }

    pub(crate) fn pick_count(&self) -> u32 {
        *self.picks.lock().unwrap()
    }
}

impl UserInterface for MockUi {
    fn ensure_unlocked_vault(&self) {
        *self.unlocks.lock().unwrap() += 1;
    }

    fn inform_excluded_credential(&self, cipher_ids: &[String]) {
        self.informed.lock().unwrap().push(cipher_ids.to_vec());
    }

    fn confirm_new_credential(&self, _params: NewCredentialParams) -> NewCredentialResult {
        let (cipher_id, user_verified) = self
            .confirm
            .clone()
            .expect("unexpected confirm_new_credential prompt");
        NewCredentialResult {
            cipher_id,
            user_verified,
        }
    }

    fn pick_credential(&self, _params: PickCredentialParams) -> PickCredentialResult {
        *self.picks.lock().unwrap() += 1;
        let (cipher_id, user_verified) = self
            .pick
            .clone()
            .expect("unexpected pick_credential prompt");
        PickCredentialResult {
            cipher_id,
            user_verified,
        }
    }
}

/// Counting sync collaborator
pub(crate) struct MockSync {
    syncs: Mutex<u32>,
}

impl MockSync {
    pub(crate) fn new() -> Self {
        Self {
            syncs: Mutex::new(0),
        }
    }

    pub(crate) fn sync_count(&self) -> u32 {
        *self.syncs.lock().unwrap()
    }
}

impl SyncService for MockSync {
    fn full_sync(&self, _force: bool) -> Result<(), VaultError> {
        *self.syncs.lock().unwrap() += 1;
        Ok(())
    }
}

/// A login entry hosting the given credentials
pub(crate) fn login_cipher(
    cipher_id: &str,
    name: &str,
    credentials: Vec<Fido2Credential>,
) -> CipherView {
    CipherView {
        id: cipher_id.to_string(),
        name: name.to_string(),
        cipher_type: CipherType::Login,
        organization_id: None,
        deleted_date: None,
        reprompt: CipherRepromptType::None,
        login: Some(LoginView {
            username: Some("user@example.com".to_string()),
            fido2_credentials: credentials,
        }),
    }
}

/// A stored credential with a real key pair, plus its public key for
/// signature verification
pub(crate) fn stored_credential(
    rp_id: &str,
    counter: u32,
    discoverable: bool,
) -> (Fido2Credential, PublicKey) {
    let key_pair = ecdsa::generate_key_pair().expect("key generation");
    let credential = Fido2Credential {
        credential_id: Uuid::new_v4().to_string(),
        key_type: CREDENTIAL_TYPE_PUBLIC_KEY.to_string(),
        key_algorithm: "ECDSA".to_string(),
        key_curve: "P-256".to_string(),
        key_value: URL_SAFE_NO_PAD.encode(key_pair.private_key_pkcs8()),
        rp_id: rp_id.to_string(),
        rp_name: Some("Example".to_string()),
        user_handle: Some(URL_SAFE_NO_PAD.encode([0xAA, 0xBB])),
        user_name: Some("user@example.com".to_string()),
        user_display_name: Some("User".to_string()),
        counter,
        discoverable,
        creation_date: 1_700_000_000,
    };
    (credential, key_pair.public_key().clone())
}
