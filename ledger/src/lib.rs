// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # UTXO Ledger — Core Library
//!
//! Validates proposed transactions against a pool of unspent transaction
//! outputs and applies epochs of candidate transactions to that pool. This
//! is where double spends, forged spends, and value created from nothing
//! get caught. Everything around it (networking, storage, block assembly)
//! lives elsewhere.
//!
//! ## Architecture
//!
//! - **crypto** — SHA-256/BLAKE3 hashing, Ed25519 keys and verification.
//! - **transaction** — The transaction data model, builder, and signing.
//! - **utxo** — UTXO keys and the pool.
//! - **handler** — Validation rules and epoch processing.
//! - **config** — Constants and handler tunables.
//! - **logging** — `tracing` subscriber setup for embedders.
//!
//! ## Example
//!
//! ```
//! use utxo_ledger::crypto::Keypair;
//! use utxo_ledger::handler::TxHandler;
//! use utxo_ledger::transaction::{sign_all_inputs, Output, TransactionBuilder, TxHash};
//! use utxo_ledger::utxo::{Utxo, UtxoPool};
//!
//! let alice = Keypair::generate();
//! let bob = Keypair::generate();
//!
//! let mut pool = UtxoPool::new();
//! pool.insert(Utxo::new(TxHash::ZERO, 0), Output::new(10, alice.public_key()));
//!
//! let mut tx = TransactionBuilder::new()
//!     .input(TxHash::ZERO, 0)
//!     .output(10, bob.public_key())
//!     .build();
//! sign_all_inputs(&mut tx, &alice);
//!
//! let mut handler = TxHandler::new(pool);
//! let accepted = handler.handle_txs(vec![tx.clone()]);
//! assert_eq!(accepted.len(), 1);
//! assert!(handler.pool().contains(&Utxo::new(tx.hash(), 0)));
//! ```

pub mod config;
pub mod crypto;
pub mod handler;
pub mod logging;
pub mod transaction;
pub mod utxo;
