//! Shared mock collaborators for the end-to-end tests

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use uuid::Uuid;

use vault_fido2::ctap::callbacks::{
    NewCredentialParams, NewCredentialResult, PickCredentialParams, PickCredentialResult,
    SyncService, UserInterface, VaultStore,
};
use vault_fido2::ctap::cbor;
use vault_fido2::ctap::error::VaultError;
use vault_fido2::ctap::vault::{
    Cipher, CipherRepromptType, CipherType, CipherView, Fido2Credential, LoginView,
};
use vault_fido2::ctap::CREDENTIAL_TYPE_PUBLIC_KEY;
use vault_fido2::services::{EnvironmentService, StateService};

use vault_fido2_crypto::ecdsa::{self, PublicKey};

pub const WEB_VAULT_URL: &str = "https://vault.example.net";

/// Session state double
pub struct MockState {
    pub blocklist: HashSet<String>,
    pub authenticated: bool,
}

impl MockState {
    pub fn authenticated() -> Self {
        Self {
            blocklist: HashSet::new(),
            authenticated: true,
        }
    }

    pub fn with_blocklist(hosts: &[&str]) -> Self {
        Self {
            blocklist: hosts.iter().map(|host| host.to_string()).collect(),
            authenticated: true,
        }
    }
}

impl StateService for MockState {
    fn autofill_blocklisted_hosts(&self) -> HashSet<String> {
        self.blocklist.clone()
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Environment double pointing at [`WEB_VAULT_URL`]
pub struct MockEnvironment;

impl EnvironmentService for MockEnvironment {
    fn web_vault_url(&self) -> String {
        WEB_VAULT_URL.to_string()
    }
}

/// In-memory vault with identity "encryption"; views travel as CBOR in
/// the cipher payload
///
/// Clones share the same storage, so a test can keep a handle after
/// moving a clone into the authenticator.
#[derive(Clone)]
pub struct MockVault {
    inner: Arc<MockVaultInner>,
}

struct MockVaultInner {
    views: Mutex<BTreeMap<String, CipherView>>,
    last_used: Mutex<Vec<String>>,
}

impl MockVault {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MockVaultInner {
                views: Mutex::new(BTreeMap::new()),
                last_used: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn insert(&self, view: CipherView) {
        self.inner
            .views
            .lock()
            .unwrap()
            .insert(view.id.clone(), view);
    }

    pub fn view(&self, cipher_id: &str) -> CipherView {
        self.inner
            .views
            .lock()
            .unwrap()
            .get(cipher_id)
            .expect("cipher missing from mock vault")
            .clone()
    }

    pub fn last_used_updates(&self) -> Vec<String> {
        self.inner.last_used.lock().unwrap().clone()
    }
}

impl VaultStore for MockVault {
    fn get_encrypted(&self, cipher_id: &str) -> Result<Cipher, VaultError> {
        let views = self.inner.views.lock().unwrap();
        let view = views.get(cipher_id).ok_or(VaultError::NotFound)?;
        Ok(Cipher {
            id: view.id.clone(),
            payload: Vec::new(),
        })
    }

    fn decrypt(&self, cipher: &Cipher) -> Result<CipherView, VaultError> {
        if cipher.payload.is_empty() {
            let views = self.inner.views.lock().unwrap();
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
        self.inner
            .views
            .lock()
            .unwrap()
            .insert(view.id.clone(), view);
        Ok(())
    }

    fn get_all_decrypted(&self) -> Result<Vec<CipherView>, VaultError> {
        Ok(self.inner.views.lock().unwrap().values().cloned().collect())
    }

    fn update_last_used_date(&self, cipher_id: &str) -> Result<(), VaultError> {
        self.inner
            .last_used
            .lock()
            .unwrap()
            .push(cipher_id.to_string());
        Ok(())
    }
}

/// Scripted UI double; unconfigured prompts panic
///
/// Clones share the recorded prompt history.
#[derive(Clone)]
pub struct MockUi {
    inner: Arc<MockUiInner>,
}

struct MockUiInner {
    confirm: Option<(Option<String>, bool)>,
    pick: Option<(Option<String>, bool)>,
    informed: Mutex<Vec<Vec<String>>>,
}

impl MockUi {
    fn with_responses(
        confirm: Option<(Option<String>, bool)>,
        pick: Option<(Option<String>, bool)>,
    ) -> Self {
        Self {
            inner: Arc::new(MockUiInner {
                confirm,
                pick,
                informed: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn confirming(cipher_id: &str, user_verified: bool) -> Self {
        Self::with_responses(Some((Some(cipher_id.to_string()), user_verified)), None)
    }

    pub fn picking(cipher_id: &str, user_verified: bool) -> Self {
        Self::with_responses(None, Some((Some(cipher_id.to_string()), user_verified)))
    }

    pub fn cancelling() -> Self {
        Self::with_responses(Some((None, false)), Some((None, false)))
    }

    pub fn refusing_prompts() -> Self {
        Self::with_responses(None, None)
    }

    pub fn informed_excluded(&self) -> Vec<Vec<String>> {
        self.inner.informed.lock().unwrap().clone()
    }
}

impl UserInterface for MockUi {
    fn ensure_unlocked_vault(&self) {}

    fn inform_excluded_credential(&self, cipher_ids: &[String]) {
        self.inner.informed.lock().unwrap().push(cipher_ids.to_vec());
    }

    fn confirm_new_credential(&self, _params: NewCredentialParams) -> NewCredentialResult {
        let (cipher_id, user_verified) = self
            .inner
            .confirm
            .clone()
            .expect("unexpected confirm_new_credential prompt");
        NewCredentialResult {
            cipher_id,
            user_verified,
        }
    }

    fn pick_credential(&self, _params: PickCredentialParams) -> PickCredentialResult {
        let (cipher_id, user_verified) = self
            .inner
            .pick
            .clone()
            .expect("unexpected pick_credential prompt");
        PickCredentialResult {
            cipher_id,
            user_verified,
        }
    }
}

/// Sync double
pub struct MockSync;

impl SyncService for MockSync {
    fn full_sync(&self, _force: bool) -> Result<(), VaultError> {
        Ok(())
    }
}

/// A login entry hosting the given credentials
pub fn login_cipher(cipher_id: &str, name: &str, credentials: Vec<Fido2Credential>) -> CipherView {
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
pub fn stored_credential(
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
