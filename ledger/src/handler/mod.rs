//! # Transaction Handler
//!
//! The integrity core: deciding whether a transaction may be applied to the
//! UTXO pool, and applying a batch of them.
//!
//! ```text
//! validation.rs — the five ordered rules, pure over (tx, pool)
//! epoch.rs      — TxHandler: greedy in-order epoch application
//! shared.rs     — SharedTxHandler: single-lock façade for concurrent callers
//! ```

pub mod epoch;
pub mod shared;
pub mod validation;

pub use epoch::{EpochReport, TxHandler};
pub use shared::SharedTxHandler;
pub use validation::{validate, ValidationError};
