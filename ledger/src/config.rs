//! # Ledger Configuration & Constants
//!
//! Every magic number in the ledger core lives here, together with the
//! [`HandlerConfig`] tunables a [`crate::handler::TxHandler`] is built with.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length. Always 64 bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Transaction hash length. Double-SHA-256 produces 32 bytes.
pub const HASH_OUTPUT_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Transaction Limits
// ---------------------------------------------------------------------------

/// Suggested input cap for [`HandlerConfig::bounded`].
pub const MAX_TX_INPUTS: usize = 256;

/// Suggested output cap for [`HandlerConfig::bounded`].
pub const MAX_TX_OUTPUTS: usize = 256;

// ---------------------------------------------------------------------------
// HandlerConfig
// ---------------------------------------------------------------------------

/// Tunable parameters for transaction handling.
///
/// The limits are optional structural pre-checks applied before the five
/// validation rules. The default sets none, so validity is decided by the
/// rules alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Transactions with more inputs than this are rejected outright.
    pub max_inputs: Option<usize>,

    /// Transactions with more outputs than this are rejected outright.
    pub max_outputs: Option<usize>,
}

impl HandlerConfig {
    /// A config capped at [`MAX_TX_INPUTS`] / [`MAX_TX_OUTPUTS`].
    pub fn bounded() -> Self {
        Self {
            max_inputs: Some(MAX_TX_INPUTS),
            max_outputs: Some(MAX_TX_OUTPUTS),
        }
    }
}
