//! P-256 ECDSA (ES256) key pairs and signatures
//!
//! COSE algorithm identifier: -7 (ES256)
//! Spec: <https://www.rfc-editor.org/rfc/rfc8152.html#section-8.1>
//!
//! ES256 uses:
//! - Curve: P-256 (secp256r1 / prime256v1)
//! - Hash: SHA-256
//! - Signature format: ASN.1 DER `SEQUENCE { r INTEGER, s INTEGER }`
//!
//! Private keys travel as PKCS#8 DER because that is the form persisted
//! (base64url-encoded) inside vault entries; public keys expose their raw
//! affine coordinates for COSE_Key encoding and an SPKI DER export for
//! relying-party consumption.

use crate::error::{CryptoError, Result};

use p256::ecdsa::{signature::Signer, signature::Verifier, Signature, SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

/// A P-256 public key with the encodings the authenticator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    x: [u8; 32],
    y: [u8; 32],
    spki_der: Vec<u8>,
}

impl PublicKey {
    fn from_verifying_key(key: &VerifyingKey) -> Result<Self> {
        let point = key.to_encoded_point(false);
        let (Some(x_bytes), Some(y_bytes)) = (point.x(), point.y()) else {
            return Err(CryptoError::InvalidPublicKey);
        };

        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(x_bytes);
        y.copy_from_slice(y_bytes);

        let spki_der = key
            .to_public_key_der()
            .map_err(|_| CryptoError::KeyEncodingFailed)?
            .as_bytes()
            .to_vec();

        Ok(Self { x, y, spki_der })
    }

    /// Affine x coordinate, 32 bytes, leading zeros preserved
    pub fn x(&self) -> &[u8; 32] {
        &self.x
    }

    /// Affine y coordinate, 32 bytes, leading zeros preserved
    pub fn y(&self) -> &[u8; 32] {
        &self.y
    }

    /// SubjectPublicKeyInfo DER encoding
    pub fn spki_der(&self) -> &[u8] {
        &self.spki_der
    }
}

/// A freshly generated ES256 key pair
///
/// The PKCS#8 private key is zeroized when the pair is dropped.
pub struct KeyPair {
    private_key_pkcs8: Zeroizing<Vec<u8>>,
    public_key: PublicKey,
}

impl KeyPair {
    /// PKCS#8 DER encoding of the private key
    pub fn private_key_pkcs8(&self) -> &[u8] {
        &self.private_key_pkcs8
    }

    /// The corresponding public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// Generate a new random ES256 key pair
///
/// # Examples
///
/// ```
/// use vault_fido2_crypto::ecdsa;
///
/// let pair = ecdsa::generate_key_pair().unwrap();
/// assert_eq!(pair.public_key().x().len(), 32);
/// assert_eq!(pair.public_key().y().len(), 32);
/// assert!(!pair.private_key_pkcs8().is_empty());
/// ```
pub fn generate_key_pair() -> Result<KeyPair> {
    let signing_key = SigningKey::random(&mut OsRng);

    let private_key_pkcs8 = Zeroizing::new(
        signing_key
            .to_pkcs8_der()
            .map_err(|_| CryptoError::KeyEncodingFailed)?
            .as_bytes()
            .to_vec(),
    );
    let public_key = PublicKey::from_verifying_key(signing_key.verifying_key())?;

    Ok(KeyPair {
        private_key_pkcs8,
        public_key,
    })
}

/// Sign `message` with ES256
///
/// The message is hashed with SHA-256 as part of the signing operation.
/// Returns the DER-encoded signature (70-72 bytes), never raw `r || s`.
///
/// # Examples
///
/// ```
/// use vault_fido2_crypto::ecdsa;
///
/// let pair = ecdsa::generate_key_pair().unwrap();
/// let signature = ecdsa::sign(pair.private_key_pkcs8(), b"hello").unwrap();
/// assert_eq!(signature[0], 0x30); // DER SEQUENCE
/// ```
pub fn sign(private_key_pkcs8: &[u8], message: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::from_pkcs8_der(private_key_pkcs8)
        .map_err(|_| CryptoError::InvalidPrivateKey)?;

    let signature: Signature = signing_key.sign(message);

    Ok(signature.to_der().to_bytes().to_vec())
}

/// Verify a DER-encoded ES256 signature against an uncompressed SEC1 public key
pub fn verify(public_key_sec1: &[u8], message: &[u8], signature_der: &[u8]) -> Result<()> {
    let verifying_key = VerifyingKey::from_sec1_bytes(public_key_sec1)
        .map_err(|_| CryptoError::InvalidPublicKey)?;

    let signature =
        Signature::from_der(signature_der).map_err(|_| CryptoError::InvalidSignature)?;

    verifying_key
        .verify(message, &signature)
        .map_err(|_| CryptoError::InvalidSignature)
}

/// Verify a DER-encoded ES256 signature against an SPKI DER public key
pub fn verify_spki(spki_der: &[u8], message: &[u8], signature_der: &[u8]) -> Result<()> {
    let verifying_key =
        VerifyingKey::from_public_key_der(spki_der).map_err(|_| CryptoError::InvalidPublicKey)?;

    let signature =
        Signature::from_der(signature_der).map_err(|_| CryptoError::InvalidSignature)?;

    verifying_key
        .verify(message, &signature)
        .map_err(|_| CryptoError::InvalidSignature)
}
