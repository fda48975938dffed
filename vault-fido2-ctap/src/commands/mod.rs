//! Authenticator operations
//!
//! One module per operation, each exposing a `handle` function the
//! authenticator dispatches to.

pub(crate) mod get_assertion;
pub(crate) mod make_credential;
pub(crate) mod silent_discovery;
