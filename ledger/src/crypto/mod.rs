//! # Cryptographic Primitives
//!
//! Hashing, Ed25519 keys, and signature verification. Everything here is a
//! thin, type-safe wrapper around audited implementations:
//!
//! - **Ed25519** (`ed25519-dalek`) for output ownership and spend authorization.
//! - **SHA-256** (`sha2`) for transaction hashes.
//! - **BLAKE3** (`blake3`) for pool commitments.
//!
//! We don't roll our own. If you're tempted to optimize these functions,
//! reconsider.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{blake3_hash, double_sha256, merkle_root, sha256};
pub use keys::{KeyError, Keypair, PublicKey, Signature};
pub use signatures::{sign, verify};
