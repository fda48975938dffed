//! The virtual authenticator
//!
//! [`Fido2Authenticator`] holds the three collaborators an operation needs
//! and dispatches to the command modules. It carries no mutable state of
//! its own: every credential lives in the vault, so operations take
//! `&self` and concurrent ceremonies over different entries are safe.
//!
//! The UI collaborator becomes available later than the vault and sync
//! collaborators in the host application's lifecycle, so construction is
//! split: [`Fido2AuthenticatorBuilder::new`] takes the early collaborators
//! and [`Fido2AuthenticatorBuilder::with_ui`] turns the builder into a
//! ready authenticator once a UI exists.

use crate::callbacks::{SyncService, UserInterface, VaultStore};
use crate::commands;
use crate::error::Result;
use crate::request::{GetAssertionRequest, MakeCredentialRequest};
use crate::response::{Fido2CredentialAutofillView, GetAssertionResponse, MakeCredentialResponse};

/// The authenticator operations the client layer consumes
///
/// Abstracted as a trait so the client layer can be exercised against test
/// doubles without a vault.
pub trait CredentialAuthenticator {
    /// Create a new credential inside a user-chosen vault entry
    fn make_credential(&self, request: MakeCredentialRequest) -> Result<MakeCredentialResponse>;

    /// Produce an assertion signature with a stored credential
    fn get_assertion(&self, request: GetAssertionRequest) -> Result<GetAssertionResponse>;

    /// List discoverable credentials for an RP without prompting or
    /// mutating anything
    fn silent_discovery(&self, rp_id: &str) -> Result<Vec<Fido2CredentialAutofillView>>;
}

/// Builder holding the collaborators available before the UI exists
pub struct Fido2AuthenticatorBuilder<V, Y> {
    vault: V,
    sync: Y,
}

impl<V: VaultStore, Y: SyncService> Fido2AuthenticatorBuilder<V, Y> {
    /// Start building an authenticator over vault and sync collaborators
    pub fn new(vault: V, sync: Y) -> Self {
        Self { vault, sync }
    }

    /// Attach the UI collaborator, producing a ready authenticator
    pub fn with_ui<U: UserInterface>(self, ui: U) -> Fido2Authenticator<U, V, Y> {
        Fido2Authenticator {
            ui,
            vault: self.vault,
            sync: self.sync,
        }
    }
}

/// A virtual CTAP2 authenticator storing credentials in the user's vault
pub struct Fido2Authenticator<U, V, Y> {
    ui: U,
    vault: V,
    sync: Y,
}

impl<U: UserInterface, V: VaultStore, Y: SyncService> Fido2Authenticator<U, V, Y> {
    pub(crate) fn ui(&self) -> &U {
        &self.ui
    }

    pub(crate) fn vault(&self) -> &V {
        &self.vault
    }

    pub(crate) fn sync(&self) -> &Y {
        &self.sync
    }
}

impl<U: UserInterface, V: VaultStore, Y: SyncService> CredentialAuthenticator
    for Fido2Authenticator<U, V, Y>
{
    fn make_credential(&self, request: MakeCredentialRequest) -> Result<MakeCredentialResponse> {
        commands::make_credential::handle(self, request)
    }

    fn get_assertion(&self, request: GetAssertionRequest) -> Result<GetAssertionResponse> {
        commands::get_assertion::handle(self, request)
    }

    fn silent_discovery(&self, rp_id: &str) -> Result<Vec<Fido2CredentialAutofillView>> {
        commands::silent_discovery::handle(self, rp_id)
    }
}
