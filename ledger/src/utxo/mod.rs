//! # UTXO Module
//!
//! [`Utxo`] keys and the [`UtxoPool`] they index.

pub mod key;
pub mod pool;

pub use key::Utxo;
pub use pool::UtxoPool;
