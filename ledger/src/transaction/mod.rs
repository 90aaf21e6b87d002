//! # Transaction Module
//!
//! The data model the ledger validates: [`Transaction`] with its
//! [`Input`]s and [`Output`]s, the [`TxHash`] identifier, plus a builder and
//! signing helpers for producing valid spends.
//!
//! ```text
//! types.rs   — TxHash, Amount, Input, Output
//! builder.rs — Transaction aggregate, canonical bytes, TransactionBuilder
//! signing.rs — per-input Ed25519 signing
//! ```
//!
//! ## Design Decisions
//!
//! - The hash is `double_sha256` of the raw bytes, signatures included, and
//!   is computed on demand rather than cached.
//! - Each input signs its own payload: the input index plus all outpoints and
//!   all outputs. A signature lifted from one input never verifies on another.
//! - Amounts are `i64` in the smallest unit. No floating point near money.

pub mod builder;
pub mod signing;
pub mod types;

pub use builder::{Transaction, TransactionBuilder};
pub use signing::{sign_all_inputs, sign_input};
pub use types::{Amount, Input, Output, TxHash};
