//! Transaction validation against a UTXO pool.
//!
//! [`validate`] is a pure function of `(transaction, pool, config)`: it reads
//! the pool and never writes it. The checks run in a fixed order and stop at
//! the first failure:
//!
//! 0. **Structure** — input/output counts within [`HandlerConfig`] limits.
//! 1. **Existence** — every input's claimed UTXO is in the pool.
//! 2. **Authorization** — every input's signature verifies under the claimed
//!    output's address, over the signing payload for that input's index.
//! 3. **No double-claim** — no UTXO is claimed by two inputs.
//! 4. **Non-negative outputs** — every output value is `>= 0`.
//! 5. **Conservation** — input sum `>=` output sum.
//!
//! Rules 1–3 share one pass over the inputs, since each needs the same
//! claimed output. That pass returns the input sum to rule 5 as a value.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::HandlerConfig;
use crate::crypto::signatures::verify;
use crate::transaction::builder::Transaction;
use crate::transaction::types::Amount;
use crate::utxo::{Utxo, UtxoPool};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Why a transaction was rejected.
///
/// Rejection is a routine outcome: malformed and fraudulent transactions are
/// expected input. Each variant names the first rule the transaction broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("too many inputs: {count} (max {max})")]
    TooManyInputs { count: usize, max: usize },

    #[error("too many outputs: {count} (max {max})")]
    TooManyOutputs { count: usize, max: usize },

    /// Rule 1: the claimed output is not in the pool.
    #[error("input {input} claims {utxo}, which is not in the pool")]
    MissingUtxo { input: usize, utxo: Utxo },

    /// Rule 2: the input carries no signature at all.
    #[error("input {input} is unsigned")]
    MissingSignature { input: usize },

    /// Rule 2: the signature does not verify under the claimed output's key.
    #[error("input {input} has an invalid signature")]
    InvalidSignature { input: usize },

    /// Rule 3: a second input claims the same UTXO.
    #[error("input {input} claims {utxo} a second time")]
    DuplicateUtxo { input: usize, utxo: Utxo },

    /// Rule 4.
    #[error("output {index} has negative value {value}")]
    NegativeOutput { index: usize, value: Amount },

    /// Rule 5.
    #[error("outputs ({outputs}) exceed inputs ({inputs})")]
    InsufficientInputs { inputs: Amount, outputs: Amount },

    /// A value sum does not fit in an [`Amount`].
    #[error("value sum overflows")]
    ValueOverflow,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validates `tx` against `pool`.
///
/// Returns the total value of the claimed outputs on success. The pool is only
/// read, so the same transaction validated twice against an unchanged pool
/// gets the same answer.
///
/// A transaction with no inputs and no outputs passes: every per-input and
/// per-output check is vacuous and `0 >= 0`.
///
/// # Errors
///
/// The first failing check, as a [`ValidationError`].
pub fn validate(
    tx: &Transaction,
    pool: &UtxoPool,
    config: &HandlerConfig,
) -> Result<Amount, ValidationError> {
    check_structure(tx, config)?;

    let inputs = check_inputs(tx, pool)?;
    let outputs = check_outputs(tx)?;

    if inputs < outputs {
        return Err(ValidationError::InsufficientInputs { inputs, outputs });
    }

    Ok(inputs)
}

fn check_structure(tx: &Transaction, config: &HandlerConfig) -> Result<(), ValidationError> {
    if let Some(max) = config.max_inputs {
        if tx.num_inputs() > max {
            return Err(ValidationError::TooManyInputs {
                count: tx.num_inputs(),
                max,
            });
        }
    }
    if let Some(max) = config.max_outputs {
        if tx.num_outputs() > max {
            return Err(ValidationError::TooManyOutputs {
                count: tx.num_outputs(),
                max,
            });
        }
    }
    Ok(())
}

/// Rules 1–3. Returns the total value of the claimed outputs.
fn check_inputs(tx: &Transaction, pool: &UtxoPool) -> Result<Amount, ValidationError> {
    let mut seen: HashSet<Utxo> = HashSet::with_capacity(tx.num_inputs());
    let mut total: Amount = 0;

    for (index, input) in tx.inputs().iter().enumerate() {
        let utxo = Utxo::from_input(input);

        // 1. The claimed output must be unspent.
        let claimed = pool
            .get(&utxo)
            .ok_or(ValidationError::MissingUtxo { input: index, utxo })?;

        // 2. Signed by the owner of the claimed output, over this input's payload.
        let signature = input
            .signature
            .as_ref()
            .ok_or(ValidationError::MissingSignature { input: index })?;
        let authorized = tx
            .signing_payload(index)
            .is_some_and(|payload| verify(&claimed.address, &payload, signature));
        if !authorized {
            return Err(ValidationError::InvalidSignature { input: index });
        }

        // 3. Claimed at most once.
        if !seen.insert(utxo) {
            return Err(ValidationError::DuplicateUtxo { input: index, utxo });
        }

        total = total
            .checked_add(claimed.value)
            .ok_or(ValidationError::ValueOverflow)?;
    }

    Ok(total)
}

/// Rule 4. Returns the total value of the outputs.
fn check_outputs(tx: &Transaction) -> Result<Amount, ValidationError> {
    let mut total: Amount = 0;

    for (index, output) in tx.outputs().iter().enumerate() {
        if output.value < 0 {
            return Err(ValidationError::NegativeOutput {
                index,
                value: output.value,
            });
        }
        total = total
            .checked_add(output.value)
            .ok_or(ValidationError::ValueOverflow)?;
    }

    Ok(total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
