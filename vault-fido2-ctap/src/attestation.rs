//! Attestation object assembly
//!
//! Only "none" attestation is produced: the authenticator proves nothing
//! about its own provenance, and `attStmt` is the empty map.
//! `{ "fmt": "none", "attStmt": {}, "authData": <bytes> }`

use crate::cbor::{CborError, MapBuilder, MapKey};

/// Attestation statement format identifier
pub const FORMAT_NONE: &str = "none";

/// Encode a canonical CBOR attestation object around `auth_data`
pub fn encode_none_attestation_object(auth_data: &[u8]) -> Result<Vec<u8>, CborError> {
    let empty_statement = MapBuilder::new().build()?;

    MapBuilder::new()
        .insert(MapKey::Text("fmt"), &FORMAT_NONE)?
        .insert_raw(MapKey::Text("attStmt"), empty_statement)
        .insert_bytes(MapKey::Text("authData"), auth_data)?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cbor::{decode, Value};

    #[test]
    fn test_attestation_object_shape() {
        let auth_data = vec![0xABu8; 37];
        let object = encode_none_attestation_object(&auth_data).unwrap();

        let value: Value = decode(&object).unwrap();
        let Value::Map(entries) = value else {
            panic!("attestation object must be a map");
        };
        assert_eq!(entries.len(), 3);

        let Value::Text(fmt_key) = &entries[0].0 else {
            panic!("fmt key must be text");
        };
        assert_eq!(fmt_key, "fmt");
        assert!(matches!(&entries[0].1, Value::Text(s) if s == "none"));

        assert!(matches!(&entries[1].0, Value::Text(s) if s == "attStmt"));
        assert!(matches!(&entries[1].1, Value::Map(m) if m.is_empty()));

        assert!(matches!(&entries[2].0, Value::Text(s) if s == "authData"));
        assert!(matches!(&entries[2].1, Value::Bytes(b) if *b == auth_data));
    }

    #[test]
    fn test_attestation_object_canonical_bytes() {
        let object = encode_none_attestation_object(&[0x01, 0x02]).unwrap();

        let mut expected = vec![0xa3];
        expected.extend_from_slice(&[0x63, b'f', b'm', b't']);
        expected.extend_from_slice(&[0x64, b'n', b'o', b'n', b'e']);
        expected.extend_from_slice(&[0x67]);
        expected.extend_from_slice(b"attStmt");
        expected.push(0xa0);
        expected.extend_from_slice(&[0x68]);
        expected.extend_from_slice(b"authData");
        expected.extend_from_slice(&[0x42, 0x01, 0x02]);

        assert_eq!(object, expected);
    }
}
