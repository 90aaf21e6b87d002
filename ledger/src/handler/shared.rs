//! Thread-safe façade over [`TxHandler`].
//!
//! One `parking_lot::Mutex` guards the whole handler. Every operation holds
//! it across validate-and-apply, so no caller ever validates against a pool
//! that another caller is halfway through editing.

use std::sync::Arc;

use parking_lot::Mutex;

use super::epoch::{EpochReport, TxHandler};
use super::validation::ValidationError;
use crate::transaction::builder::Transaction;
use crate::transaction::types::TxHash;
use crate::utxo::UtxoPool;

/// A cloneable handle to one shared [`TxHandler`].
#[derive(Debug, Clone)]
pub struct SharedTxHandler {
    inner: Arc<Mutex<TxHandler>>,
}

impl SharedTxHandler {
    pub fn new(handler: TxHandler) -> Self {
        Self {
            inner: Arc::new(Mutex::new(handler)),
        }
    }

    /// Validates against the pool as of the moment the lock is taken.
    pub fn is_valid_tx(&self, tx: &Transaction) -> bool {
        self.inner.lock().is_valid_tx(tx)
    }

    /// Validates and applies a single transaction atomically. Returns the
    /// transaction's hash, which keys its new outputs.
    pub fn submit(&self, tx: &Transaction) -> Result<TxHash, ValidationError> {
        let mut handler = self.inner.lock();
        handler.apply_tx(tx)?;
        Ok(tx.hash())
    }

    /// Processes a whole epoch under one lock acquisition.
    pub fn handle_txs<I>(&self, candidates: I) -> Vec<Transaction>
    where
        I: IntoIterator<Item = Transaction>,
    {
        self.inner.lock().handle_txs(candidates)
    }

    /// Like [`SharedTxHandler::handle_txs`], with per-candidate outcomes.
    pub fn handle_txs_with_report<I>(&self, candidates: I) -> EpochReport
    where
        I: IntoIterator<Item = Transaction>,
    {
        self.inner.lock().handle_txs_with_report(candidates)
    }

    /// An independent copy of the current pool.
    pub fn snapshot(&self) -> UtxoPool {
        self.inner.lock().pool().clone()
    }
}

impl From<TxHandler> for SharedTxHandler {
    fn from(handler: TxHandler) -> Self {
        Self::new(handler)
    }
}
