//! # Digital Signatures
//!
//! The signature collaborator the validator depends on:
//! `verify(public_key, message, signature) -> bool`. Deterministic and free of
//! side effects.
//!
//! Verification goes through `ed25519-dalek`. We don't distinguish "bad
//! signature" from "bad key" from "wrong length": all of them are `false`.

use super::keys::{Keypair, PublicKey, Signature};

/// Sign a message with a keypair.
///
/// # Example
///
/// ```
/// use utxo_ledger::crypto::{sign, verify, Keypair};
///
/// let keypair = Keypair::generate();
/// let signature = sign(&keypair, b"spend 10 units");
/// assert!(verify(&keypair.public_key(), b"spend 10 units", &signature));
/// ```
pub fn sign(keypair: &Keypair, message: &[u8]) -> Signature {
    keypair.sign(message)
}

/// Verify an Ed25519 signature against a public key and message.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    public_key.verify(message, signature)
}
