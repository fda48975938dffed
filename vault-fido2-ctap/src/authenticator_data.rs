//! Authenticator data assembly
//!
//! Layout: `rpIdHash (32) || flags (1) || signCount (4, big-endian) ||
//! [attestedCredentialData]`. Attested credential data is appended only
//! during registration:
//! `AAGUID (16) || credIdLen (2, big-endian) || credId || COSE_Key`.
//!
//! No extension output is ever emitted, so the ED flag stays clear.

use vault_fido2_crypto::sha256;

/// UP: user present
pub const FLAG_USER_PRESENT: u8 = 0x01;
/// UV: user verified
pub const FLAG_USER_VERIFIED: u8 = 0x04;
/// BE: backup eligible
pub const FLAG_BACKUP_ELIGIBILITY: u8 = 0x08;
/// BS: backed up
pub const FLAG_BACKUP_STATE: u8 = 0x10;
/// AT: attested credential data included
pub const FLAG_ATTESTED_DATA: u8 = 0x40;
/// ED: extension data included
///
/// Bit 7 per WebAuthn; must not collide with AT.
pub const FLAG_EXTENSION_DATA: u8 = 0x80;

/// AAGUID identifying this authenticator model
/// (`d548826e-79b4-db40-a3d8-11116f7e8349`)
pub const AAGUID: [u8; 16] = [
    0xd5, 0x48, 0x82, 0x6e, 0x79, 0xb4, 0xdb, 0x40, 0xa3, 0xd8, 0x11, 0x11, 0x6f, 0x7e, 0x83,
    0x49,
];

/// Credential material appended during registration
pub struct AttestedCredential<'a> {
    /// Raw credential id (the 16 UUID bytes)
    pub credential_id: &'a [u8],
    /// Canonical COSE_Key encoding of the new public key
    pub cose_public_key: &'a [u8],
}

/// Assemble an authenticator data blob
///
/// Credentials live in the user's encrypted, synchronized vault, so the
/// backup-eligibility and backup-state flags are always set.
pub fn build(
    rp_id: &str,
    user_present: bool,
    user_verified: bool,
    sign_count: u32,
    attested: Option<AttestedCredential<'_>>,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(37);

    data.extend_from_slice(&sha256(rp_id.as_bytes()));

    let mut flags = FLAG_BACKUP_ELIGIBILITY | FLAG_BACKUP_STATE;
    if user_present {
        flags |= FLAG_USER_PRESENT;
    }
    if user_verified {
        flags |= FLAG_USER_VERIFIED;
    }
    if attested.is_some() {
        flags |= FLAG_ATTESTED_DATA;
    }
    data.push(flags);

    data.extend_from_slice(&sign_count.to_be_bytes());

    if let Some(cred) = attested {
        data.extend_from_slice(&AAGUID);
        data.extend_from_slice(&(cred.credential_id.len() as u16).to_be_bytes());
        data.extend_from_slice(cred.credential_id);
        data.extend_from_slice(cred.cose_public_key);
    }

    data
}
