#![warn(unused_extern_crates)]

//! Cryptographic primitives for the vault FIDO2 credential provider
//!
//! This crate provides the operations the authenticator layer needs:
//!
//! - **SHA-256**: RP ID and client data hashing
//! - **ECDSA**: ES256 (P-256 + SHA-256) key generation and signatures,
//!   with PKCS#8 private-key and SPKI public-key encodings
//!
//! Only ES256 (COSE algorithm -7) is implemented; the authenticator does
//! not negotiate any other algorithm.

pub mod ecdsa;
pub mod error;
pub mod hash;

// Re-export commonly used types
pub use ecdsa::{KeyPair, PublicKey};
pub use error::{CryptoError, Result};
pub use hash::sha256;
