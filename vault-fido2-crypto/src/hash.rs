//! SHA-256 digests
//!
//! WebAuthn hashes the RP ID and the client data JSON with SHA-256 before
//! they enter any signed structure.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `data`
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
