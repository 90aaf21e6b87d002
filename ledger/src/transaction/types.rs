//! Core value types for ledger transactions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::HASH_OUTPUT_LENGTH;
use crate::crypto::keys::{PublicKey, Signature};

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

/// A monetary value in the smallest indivisible unit.
///
/// Signed, so a negative output is representable and gets rejected.
pub type Amount = i64;

// ---------------------------------------------------------------------------
// TxHash
// ---------------------------------------------------------------------------

/// Content-addressed transaction identifier: double-SHA-256 of the raw
/// transaction bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxHash([u8; HASH_OUTPUT_LENGTH]);

impl TxHash {
    /// The all-zero hash. Handy for genesis-style pool seeding in tests.
    pub const ZERO: TxHash = TxHash([0u8; HASH_OUTPUT_LENGTH]);

    /// Wrap raw hash bytes.
    pub fn from_bytes(bytes: [u8; HASH_OUTPUT_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_OUTPUT_LENGTH] {
        &self.0
    }

    /// Hex-encoded representation. 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex-encoded hash.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; HASH_OUTPUT_LENGTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A claim on a previously created output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// Hash of the transaction that created the output being spent.
    pub prev_tx_hash: TxHash,
    /// Position of that output within its transaction.
    pub output_index: u32,
    /// Signature over the spending transaction's signing payload for this
    /// input. `None` until signed.
    pub signature: Option<Signature>,
}

impl Input {
    /// Creates an unsigned input.
    pub fn new(prev_tx_hash: TxHash, output_index: u32) -> Self {
        Self {
            prev_tx_hash,
            output_index,
            signature: None,
        }
    }

    /// Returns `true` if a signature is attached.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A value locked to a public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Output {
    /// Value in the smallest unit.
    pub value: Amount,
    /// The key whose signature is required to spend this output.
    pub address: PublicKey,
}

impl Output {
    /// Creates a new output.
    pub fn new(value: Amount, address: PublicKey) -> Self {
        Self { value, address }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.value, self.address)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
