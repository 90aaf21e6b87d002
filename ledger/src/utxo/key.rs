//! The [`Utxo`] key: which output of which transaction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::transaction::types::{Input, TxHash};

/// Identifies one output by `(producing transaction hash, output index)`.
///
/// Ordering is by hash, then index, so pools can be walked deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Utxo {
    tx_hash: TxHash,
    index: u32,
}

impl Utxo {
    pub fn new(tx_hash: TxHash, index: u32) -> Self {
        Self { tx_hash, index }
    }

    /// The output an input claims.
    pub fn from_input(input: &Input) -> Self {
        Self::new(input.prev_tx_hash, input.output_index)
    }

    pub fn tx_hash(&self) -> &TxHash {
        &self.tx_hash
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for Utxo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tx_hash, self.index)
    }
}
