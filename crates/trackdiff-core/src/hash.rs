//! Content hashing for track element identifiers.
//!
//! A track element's id is the CRC-64 of a normalized textual description of
//! the step it records. The id is rendered as exactly 16 lowercase hex digits
//! in track files.
//!
//! The CRC lookup table is owned by a [`Crc64`] value. Build it once at
//! startup and pass it by reference to whatever derives ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reflected ECMA-182 polynomial (CRC-64/XZ).
const POLY: u64 = 0xC96C_5795_D787_0F42;

/// Width of a [`ContentId`] in hex digits.
pub const CONTENT_ID_HEX_LEN: usize = 16;

/// Table-driven CRC-64/XZ hasher.
#[derive(Clone)]
pub struct Crc64 {
    table: [u64; 256],
}

impl Crc64 {
    /// Build the 256-entry lookup table.
    pub fn new() -> Self {
        let mut table = [0u64; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let mut crc = i as u64;
            for _ in 0..8 {
                crc = if crc & 1 == 1 { (crc >> 1) ^ POLY } else { crc >> 1 };
            }
            *slot = crc;
        }
        Self { table }
    }

    /// CRC-64/XZ of `bytes`.
    pub fn checksum(&self, bytes: &[u8]) -> u64 {
        let crc = bytes.iter().fold(!0u64, |crc, &b| {
            self.table[((crc ^ u64::from(b)) & 0xff) as usize] ^ (crc >> 8)
        });
        !crc
    }
}

impl Default for Crc64 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Crc64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crc64").finish_non_exhaustive()
    }
}

/// Trim a step description and collapse whitespace runs into single spaces.
///
/// Two descriptions that differ only in layout hash to the same id.
pub fn normalize_description(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 64-bit content hash identifying a track element across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ContentId(u64);

impl ContentId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Hash the normalized form of a step description.
    pub fn from_description(hasher: &Crc64, description: &str) -> Self {
        Self(hasher.checksum(normalize_description(description).as_bytes()))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Fixed-width lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.to_be_bytes())
    }

    /// Inverse of [`ContentId::to_hex`].
    ///
    /// Returns `None` unless `text` is exactly 16 lowercase hex digits.
    pub fn from_hex(text: &str) -> Option<Self> {
        if text.len() != CONTENT_ID_HEX_LEN
            || !text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return None;
        }
        let mut bytes = [0u8; 8];
        hex::decode_to_slice(text, &mut bytes).ok()?;
        Some(Self(u64::from_be_bytes(bytes)))
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<ContentId> for String {
    fn from(id: ContentId) -> Self {
        id.to_hex()
    }
}

impl TryFrom<String> for ContentId {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        ContentId::from_hex(&text).ok_or_else(|| format!("invalid content id `{}`", text))
    }
}
