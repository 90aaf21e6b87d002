//! Epoch processing: greedy, in-order acceptance of candidate transactions.
//!
//! [`TxHandler`] owns a private [`UtxoPool`]. For each candidate, in the order
//! supplied, it validates against the *current* pool and, on acceptance,
//! immediately removes the consumed UTXOs and inserts the new outputs before
//! looking at the next candidate.
//!
//! Consequences:
//!
//! - A later transaction can spend an output created earlier in the same
//!   epoch.
//! - Of two transactions spending the same UTXO, only the first is accepted;
//!   the second finds the UTXO gone.
//!
//! The accepted set depends on input order and is not the largest possible
//! mutually-valid subset.

use tracing::{debug, info, trace, warn};

use super::validation::{validate, ValidationError};
use crate::config::HandlerConfig;
use crate::transaction::builder::Transaction;
use crate::transaction::types::{Amount, TxHash};
use crate::utxo::{Utxo, UtxoPool};

// ---------------------------------------------------------------------------
// EpochReport
// ---------------------------------------------------------------------------

/// Outcome of one epoch.
#[derive(Debug, Clone)]
pub struct EpochReport {
    /// Accepted transactions, in acceptance order.
    pub accepted: Vec<Transaction>,

    /// Rejected transactions with the reason, in evaluation order.
    pub rejected: Vec<(Transaction, ValidationError)>,

    /// Total value of the UTXOs consumed by accepted transactions, or `None`
    /// if that total does not fit in an [`Amount`].
    pub consumed: Option<Amount>,
}

impl Default for EpochReport {
    fn default() -> Self {
        Self {
            accepted: Vec::new(),
            rejected: Vec::new(),
            consumed: Some(0),
        }
    }
}

// ---------------------------------------------------------------------------
// TxHandler
// ---------------------------------------------------------------------------

/// Validates transactions and applies epochs to a private UTXO pool.
///
/// Validation takes `&self`, application takes `&mut self`, so the borrow
/// checker rules out validating against a half-applied pool. For shared use
/// across threads see [`super::SharedTxHandler`].
#[derive(Debug, Clone)]
pub struct TxHandler {
    pool: UtxoPool,
    config: HandlerConfig,
}

impl TxHandler {
    /// Creates a handler over `pool` with default limits.
    ///
    /// The handler takes the pool by value. Callers that want to keep their
    /// own copy pass `pool.clone()`; later edits to that copy are invisible
    /// here.
    pub fn new(pool: UtxoPool) -> Self {
        Self::with_config(pool, HandlerConfig::default())
    }

    /// Creates a handler with explicit limits.
    pub fn with_config(pool: UtxoPool, config: HandlerConfig) -> Self {
        Self { pool, config }
    }

    /// Read-only view of the current pool.
    pub fn pool(&self) -> &UtxoPool {
        &self.pool
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Consumes the handler and returns its pool.
    pub fn into_pool(self) -> UtxoPool {
        self.pool
    }

    /// Validates `tx` against the current pool, returning the value it consumes.
    pub fn check_tx(&self, tx: &Transaction) -> Result<Amount, ValidationError> {
        validate(tx, &self.pool, &self.config)
    }

    /// `true` if `tx` passes every validation rule against the current pool.
    pub fn is_valid_tx(&self, tx: &Transaction) -> bool {
        self.check_tx(tx).is_ok()
    }

    /// Validates `tx` and, if valid, applies it to the pool. Returns the
    /// value it consumed.
    ///
    /// A rejected transaction leaves the pool untouched.
    pub fn apply_tx(&mut self, tx: &Transaction) -> Result<Amount, ValidationError> {
        let consumed = self.check_tx(tx)?;
        self.apply(tx);
        Ok(consumed)
    }

    /// Processes one epoch and returns the accepted transactions in
    /// acceptance order.
    pub fn handle_txs<I>(&mut self, candidates: I) -> Vec<Transaction>
    where
        I: IntoIterator<Item = Transaction>,
    {
        self.handle_txs_with_report(candidates).accepted
    }

    /// Processes one epoch and reports what happened to every candidate.
    pub fn handle_txs_with_report<I>(&mut self, candidates: I) -> EpochReport
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut candidates = candidates.into_iter().peekable();
        if candidates.peek().is_none() {
            return EpochReport::default();
        }

        let mut report = EpochReport::default();

        for tx in candidates {
            match self.apply_tx(&tx) {
                Ok(consumed) => {
                    report.consumed = report.consumed.and_then(|total| {
                        let sum = total.checked_add(consumed);
                        if sum.is_none() {
                            warn!(tx = %tx.hash(), "epoch consumed total overflows");
                        }
                        sum
                    });
                    report.accepted.push(tx);
                }
                Err(err) => {
                    debug!(tx = %tx.hash(), error = %err, "rejected transaction");
                    report.rejected.push((tx, err));
                }
            }
        }

        info!(
            accepted = report.accepted.len(),
            rejected = report.rejected.len(),
            consumed = ?report.consumed,
            pool_size = self.pool.len(),
            "epoch applied"
        );

        report
    }

    /// Removes the UTXOs `tx` consumes and inserts one per output.
    fn apply(&mut self, tx: &Transaction) {
        for input in tx.inputs() {
            let utxo = Utxo::from_input(input);
            self.pool.remove(&utxo);
            trace!(%utxo, "spent");
        }

        let hash: TxHash = tx.hash();
        for (index, output) in tx.outputs().iter().enumerate() {
            let utxo = Utxo::new(hash, index as u32);
            self.pool.insert(utxo, *output);
            trace!(%utxo, value = output.value, "created");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
