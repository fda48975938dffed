//! Client data JSON assembly
//!
//! The client data binds a ceremony to its type, challenge and origin.
//! Field order is fixed (`type`, `challenge`, `origin`, `crossOrigin`)
//! because the serialized bytes are hashed into the signature input and
//! some relying parties compare them structurally.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;

/// Ceremony kind recorded in the client data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientDataType {
    /// Registration (`webauthn.create`)
    Create,
    /// Authentication (`webauthn.get`)
    Get,
}

impl ClientDataType {
    /// The `type` member value
    pub fn as_str(self) -> &'static str {
        match self {
            ClientDataType::Create => "webauthn.create",
            ClientDataType::Get => "webauthn.get",
        }
    }
}

#[derive(Serialize)]
struct CollectedClientData<'a> {
    #[serde(rename = "type")]
    ceremony: &'static str,
    challenge: String,
    origin: &'a str,
    #[serde(rename = "crossOrigin")]
    cross_origin: bool,
}

/// Serialize the client data for a ceremony
pub fn build_client_data_json(
    ceremony: ClientDataType,
    challenge: &[u8],
    origin: &str,
    cross_origin: bool,
) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&CollectedClientData {
        ceremony: ceremony.as_str(),
        challenge: URL_SAFE_NO_PAD.encode(challenge),
        origin,
        cross_origin,
    })
}
