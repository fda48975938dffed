//! Canonical CTAP2 CBOR encoding
//!
//! Browsers verify attestation objects against the CTAP2 canonical form:
//! definite lengths only, shortest-form integer encodings, and map keys in
//! canonical order (integer keys before text keys, shorter encodings before
//! longer, lexicographic within equal length). [`MapBuilder`] produces maps
//! in that form; leaf values go through `cbor4ii`'s serde encoder, which
//! already emits definite-length, shortest-form items.

use core::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

pub type Value = cbor4ii::core::Value;

/// CBOR serialization failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("CBOR encoding failed")]
pub struct CborError;

/// Encode a value to CBOR bytes
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CborError> {
    cbor4ii::serde::to_vec(Vec::new(), value).map_err(|_| CborError)
}

/// Decode CBOR bytes to a value
pub fn decode<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, CborError> {
    cbor4ii::serde::from_slice(data).map_err(|_| CborError)
}

/// A CBOR map key, integer or text
///
/// COSE keys use integer labels; attestation objects use text labels. The
/// canonical order across both is: all integer keys first, then all text
/// keys, each group sorted shortest-encoding-first and lexicographically
/// within equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKey {
    Int(i64),
    Text(&'static str),
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Int(i) => write!(f, "{i}"),
            MapKey::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl MapKey {
    fn is_text(&self) -> bool {
        matches!(self, MapKey::Text(_))
    }

    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            MapKey::Int(i) if *i >= 0 => write_type_and_arg(&mut out, MAJOR_UINT, *i as u64),
            MapKey::Int(i) => write_type_and_arg(&mut out, MAJOR_NINT, (-1 - *i) as u64),
            MapKey::Text(s) => {
                write_type_and_arg(&mut out, MAJOR_TEXT, s.len() as u64);
                out.extend_from_slice(s.as_bytes());
            }
        }
        out
    }
}

const MAJOR_UINT: u8 = 0;
const MAJOR_NINT: u8 = 1;
const MAJOR_TEXT: u8 = 3;
const MAJOR_MAP: u8 = 5;

/// Write a major type with its argument in shortest form
fn write_type_and_arg(out: &mut Vec<u8>, major: u8, arg: u64) {
    let mt = major << 5;
    if arg < 24 {
        out.push(mt | arg as u8);
    } else if arg <= 0xff {
        out.push(mt | 24);
        out.push(arg as u8);
    } else if arg <= 0xffff {
        out.push(mt | 25);
        out.extend_from_slice(&(arg as u16).to_be_bytes());
    } else if arg <= 0xffff_ffff {
        out.push(mt | 26);
        out.extend_from_slice(&(arg as u32).to_be_bytes());
    } else {
        out.push(mt | 27);
        out.extend_from_slice(&arg.to_be_bytes());
    }
}

/// Build a CBOR map with canonically ordered keys
///
/// Insertion order does not matter; [`MapBuilder::build`] sorts the entries
/// into canonical order before emitting them.
pub struct MapBuilder {
    entries: SmallVec<[(MapKey, Vec<u8>); 8]>,
}

impl MapBuilder {
    /// Create a new map builder
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Insert a serializable value
    pub fn insert<T: Serialize>(mut self, key: MapKey, value: &T) -> Result<Self, CborError> {
        let encoded = encode(value)?;
        self.entries.push((key, encoded));
        Ok(self)
    }

    /// Insert raw bytes, encoded as a CBOR byte string
    pub fn insert_bytes(mut self, key: MapKey, bytes: &[u8]) -> Result<Self, CborError> {
        let encoded = encode(&serde_bytes::Bytes::new(bytes))?;
        self.entries.push((key, encoded));
        Ok(self)
    }

    /// Insert an already-encoded CBOR item verbatim
    pub fn insert_raw(mut self, key: MapKey, raw: Vec<u8>) -> Self {
        self.entries.push((key, raw));
        self
    }

    /// Sort entries canonically and emit the map
    pub fn build(self) -> Result<Vec<u8>, CborError> {
        let mut entries: Vec<(bool, Vec<u8>, Vec<u8>)> = self
            .entries
            .into_iter()
            .map(|(key, value)| (key.is_text(), key.encode(), value))
            .collect();

        entries.sort_by(|a, b| {
            (a.0, a.1.len(), &a.1).cmp(&(b.0, b.1.len(), &b.1))
        });

        let mut out = Vec::new();
        write_type_and_arg(&mut out, MAJOR_MAP, entries.len() as u64);
        for (_, key, value) in entries {
            out.extend_from_slice(&key);
            out.extend_from_slice(&value);
        }
        Ok(out)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
