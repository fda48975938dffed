//! Client-layer collaborator traits
//!
//! The client consults the host application for session state and
//! environment configuration before any ceremony reaches the
//! authenticator.

use std::collections::HashSet;

/// Session and settings state owned by the host application
pub trait StateService {
    /// Hosts for which the user disabled autofill and passkey operations
    fn autofill_blocklisted_hosts(&self) -> HashSet<String>;

    /// Whether a user is currently authenticated
    fn is_authenticated(&self) -> bool;
}

/// Deployment environment configuration
pub trait EnvironmentService {
    /// The web vault URL of the backing server
    fn web_vault_url(&self) -> String;
}
