//! COSE_Key encoding for ES256 public keys
//!
//! Spec: <https://www.rfc-editor.org/rfc/rfc8152.html#section-7>
//!
//! Only the EC2 / P-256 / ES256 shape is produced:
//! `{ 1: 2, 3: -7, -1: 1, -2: x, -3: y }`

use crate::cbor::{CborError, MapBuilder, MapKey};
use crate::types::COSE_ALG_ES256;

/// kty: EC2 key type
const KTY_EC2: i64 = 2;
/// crv: P-256 curve
const CRV_P256: i64 = 1;

/// Encode a P-256 public key as a canonical COSE_Key map
///
/// Both coordinates must be exactly 32 bytes, left-padded with zeros when
/// numerically shorter; the caller obtains them in that form from
/// [`vault_fido2_crypto::PublicKey`].
pub fn encode_es256_public_key(x: &[u8; 32], y: &[u8; 32]) -> Result<Vec<u8>, CborError> {
    MapBuilder::new()
        .insert(MapKey::Int(1), &KTY_EC2)?
        .insert(MapKey::Int(3), &(COSE_ALG_ES256 as i64))?
        .insert(MapKey::Int(-1), &CRV_P256)?
        .insert_bytes(MapKey::Int(-2), x)?
        .insert_bytes(MapKey::Int(-3), y)?
        .build()
}
