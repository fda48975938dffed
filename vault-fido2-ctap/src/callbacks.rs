//! Collaborator traits for user interaction, vault access and sync
//!
//! These traits are the seams between the authenticator and the host
//! application. The UI collaborator drives consent prompts; the vault
//! collaborator owns encryption and persistence; the sync collaborator
//! refreshes local data before any prompt is shown.

use crate::error::VaultError;
use crate::vault::{Cipher, CipherView};

/// Parameters shown when asking the user to confirm a new credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCredentialParams {
    /// RP display name
    pub credential_name: String,

    /// Account name the credential is for
    pub user_name: String,

    /// Whether the ceremony requires user verification
    pub user_verification: bool,

    /// RP ID the credential will be scoped to
    pub rp_id: String,
}

/// Outcome of the new-credential confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCredentialResult {
    /// The vault entry the user chose to store the credential in, or
    /// `None` when the user cancelled
    pub cipher_id: Option<String>,

    /// Whether the user completed verification during the prompt
    pub user_verified: bool,
}

/// Parameters for the credential picker prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickCredentialParams {
    /// Candidate vault entry ids
    pub cipher_ids: Vec<String>,

    /// Whether the ceremony requires user verification
    pub user_verification: bool,
}

/// Outcome of the credential picker prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickCredentialResult {
    /// The entry the user picked, or `None` when the user cancelled
    pub cipher_id: Option<String>,

    /// Whether the user completed verification during the prompt
    pub user_verified: bool,
}

/// User-interface collaborator
///
/// Prompts block until the user responds; cancellation is reported through
/// a `None` cipher id, never through an error.
pub trait UserInterface {
    /// Block until the vault is unlocked, prompting if necessary
    fn ensure_unlocked_vault(&self);

    /// Tell the user a credential from the exclude list already exists,
    /// identified by the hosting vault entry ids
    fn inform_excluded_credential(&self, cipher_ids: &[String]);

    /// Ask the user to confirm creation and pick a target vault entry
    fn confirm_new_credential(&self, params: NewCredentialParams) -> NewCredentialResult;

    /// Ask the user to pick one of several matching credentials
    fn pick_credential(&self, params: PickCredentialParams) -> PickCredentialResult;
}

/// Vault collaborator
///
/// Owns entry encryption and persistence. The authenticator never sees key
/// material for the vault itself, only decrypted views handed back by this
/// trait. Implementations must serialize concurrent writes to the same
/// entry (last-writer-wins is acceptable).
pub trait VaultStore {
    /// Fetch an encrypted entry by id
    fn get_encrypted(&self, cipher_id: &str) -> Result<Cipher, VaultError>;

    /// Decrypt an entry under the current user's keys
    fn decrypt(&self, cipher: &Cipher) -> Result<CipherView, VaultError>;

    /// Encrypt a decrypted view back into an entry
    fn encrypt(&self, view: &CipherView) -> Result<Cipher, VaultError>;

    /// Persist an entry locally and to the server
    fn save_with_server(&self, cipher: &Cipher) -> Result<(), VaultError>;

    /// Decrypt every entry in the user's vault
    fn get_all_decrypted(&self) -> Result<Vec<CipherView>, VaultError>;

    /// Record that the entry was just used
    fn update_last_used_date(&self, cipher_id: &str) -> Result<(), VaultError>;
}

/// Sync collaborator
pub trait SyncService {
    /// Refresh local vault data from the server
    fn full_sync(&self, force: bool) -> Result<(), VaultError>;
}
