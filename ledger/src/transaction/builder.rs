//! The [`Transaction`] aggregate and its fluent [`TransactionBuilder`].
//!
//! A transaction is an ordered list of inputs (claims on existing outputs)
//! and an ordered list of new outputs. The builder assembles an unsigned
//! transaction; signing happens in [`super::signing`].

use serde::{Deserialize, Serialize};

use super::types::{Amount, Input, Output, TxHash};
use crate::crypto::hash::double_sha256;
use crate::crypto::keys::{PublicKey, Signature};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A ledger transaction.
///
/// # Canonical Byte Formats
///
/// [`Transaction::signing_payload`] serializes, for input `i`: `i` as a
/// little-endian u32, the input count, every input's outpoint
/// (`prev_tx_hash || output_index`), the output count, and every output
/// (`value as i64 LE || address`). Signatures are excluded so a signature can
/// never have to cover itself.
///
/// [`Transaction::raw_bytes`] is the same content plus every input's
/// length-prefixed signature. [`Transaction::hash`] is the double-SHA-256 of
/// the raw bytes, so the hash commits to the signatures as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    inputs: Vec<Input>,
    outputs: Vec<Output>,
}

impl Transaction {
    /// Creates an empty transaction: no inputs, no outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of inputs.
    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of outputs.
    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// The input at `index`, if any.
    pub fn input(&self, index: usize) -> Option<&Input> {
        self.inputs.get(index)
    }

    /// The output at `index`, if any.
    pub fn output(&self, index: usize) -> Option<&Output> {
        self.outputs.get(index)
    }

    /// All inputs, in order.
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// All outputs, in order.
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Appends an unsigned input spending `(prev_tx_hash, output_index)`.
    pub fn add_input(&mut self, prev_tx_hash: TxHash, output_index: u32) {
        self.inputs.push(Input::new(prev_tx_hash, output_index));
    }

    /// Appends an output paying `value` to `address`.
    pub fn add_output(&mut self, value: Amount, address: PublicKey) {
        self.outputs.push(Output::new(value, address));
    }

    /// Removes and returns the input at `index`.
    ///
    /// Every remaining input's signing payload changes, so existing
    /// signatures stop verifying. Re-sign after editing.
    pub fn remove_input(&mut self, index: usize) -> Option<Input> {
        if index < self.inputs.len() {
            Some(self.inputs.remove(index))
        } else {
            None
        }
    }

    /// Attaches `signature` to the input at `index`. Returns `false` if
    /// there is no such input.
    pub fn set_signature(&mut self, index: usize, signature: Signature) -> bool {
        match self.inputs.get_mut(index) {
            Some(input) => {
                input.signature = Some(signature);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if every input carries a signature.
    pub fn is_fully_signed(&self) -> bool {
        self.inputs.iter().all(Input::is_signed)
    }

    /// The exact bytes the signature on input `index` must cover, or `None`
    /// if `index` is out of range.
    pub fn signing_payload(&self, index: usize) -> Option<Vec<u8>> {
        if index >= self.inputs.len() {
            return None;
        }

        let mut buf = Vec::with_capacity(self.unsigned_len() + 4);
        buf.extend_from_slice(&(index as u32).to_le_bytes());
        self.write_unsigned(&mut buf, false);
        Some(buf)
    }

    /// The full serialized transaction, signatures included.
    pub fn raw_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.unsigned_len() + 72 * self.inputs.len());
        self.write_unsigned(&mut buf, true);
        buf
    }

    /// Content-addressed identifier: `double_sha256(raw_bytes)`.
    ///
    /// Computed on demand, so it can never drift out of sync with the
    /// content. Any edit, including attaching a signature, changes it.
    pub fn hash(&self) -> TxHash {
        TxHash::from_bytes(double_sha256(&self.raw_bytes()))
    }

    fn unsigned_len(&self) -> usize {
        8 + 36 * self.inputs.len() + 40 * self.outputs.len()
    }

    fn write_unsigned(&self, buf: &mut Vec<u8>, with_signatures: bool) {
        buf.extend_from_slice(&(self.inputs.len() as u32).to_le_bytes());
        for input in &self.inputs {
            buf.extend_from_slice(input.prev_tx_hash.as_bytes());
            buf.extend_from_slice(&input.output_index.to_le_bytes());
            if with_signatures {
                match &input.signature {
                    Some(sig) => {
                        buf.push(0x01);
                        buf.extend_from_slice(&(sig.as_bytes().len() as u32).to_le_bytes());
                        buf.extend_from_slice(sig.as_bytes());
                    }
                    None => buf.push(0x00),
                }
            }
        }

        buf.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            buf.extend_from_slice(&output.value.to_le_bytes());
            buf.extend_from_slice(output.address.as_bytes());
        }
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`Transaction`] instances.
///
/// ```
/// use utxo_ledger::crypto::Keypair;
/// use utxo_ledger::transaction::{TransactionBuilder, TxHash};
///
/// let alice = Keypair::generate();
/// let tx = TransactionBuilder::new()
///     .input(TxHash::ZERO, 0)
///     .output(10, alice.public_key())
///     .build();
/// assert_eq!(tx.num_inputs(), 1);
/// assert!(!tx.is_fully_signed());
/// ```
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    /// Starts an empty transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input spending `(prev_tx_hash, output_index)`.
    pub fn input(mut self, prev_tx_hash: TxHash, output_index: u32) -> Self {
        self.tx.add_input(prev_tx_hash, output_index);
        self
    }

    /// Adds an output paying `value` to `address`.
    pub fn output(mut self, value: Amount, address: PublicKey) -> Self {
        self.tx.add_output(value, address);
        self
    }

    /// Finishes construction.
    pub fn build(self) -> Transaction {
        self.tx
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::Keypair;

    fn sample() -> Transaction {
        let pk = Keypair::from_seed(&[9u8; 32]).public_key();
        TransactionBuilder::new()
            .input(TxHash::from_bytes([1u8; 32]), 0)
            .input(TxHash::from_bytes([2u8; 32]), 5)
            .output(7, pk)
            .output(3, pk)
            .build()
    }

    #[test]
    fn builder_preserves_order() {
        let tx = sample();
        assert_eq!(tx.num_inputs(), 2);
        assert_eq!(tx.num_outputs(), 2);
        assert_eq!(tx.input(1).unwrap().output_index, 5);
        assert_eq!(tx.output(0).unwrap().value, 7);
        assert!(tx.input(2).is_none());
        assert!(tx.output(2).is_none());
    }

    #[test]
    fn hash_is_stable_for_unchanged_content() {
        let tx = sample();
        assert_eq!(tx.hash(), tx.clone().hash());
    }

    #[test]
    fn hash_commits_to_signatures() {
        let mut tx = sample();
        let before = tx.hash();
        assert!(tx.set_signature(0, Signature::from_slice(&[0xAA; 64])));
        assert_ne!(tx.hash(), before);
    }

    #[test]
    fn signing_payload_excludes_signatures() {
        let mut tx = sample();
        let before = tx.signing_payload(0).unwrap();
        tx.set_signature(0, Signature::from_slice(&[0xAA; 64]));
        tx.set_signature(1, Signature::from_slice(&[0xBB; 64]));
        assert_eq!(tx.signing_payload(0).unwrap(), before);
    }

    #[test]
    fn signing_payload_is_bound_to_input_index() {
        let tx = sample();
        assert_ne!(tx.signing_payload(0), tx.signing_payload(1));
    }

    #[test]
    fn signing_payload_out_of_range_is_none() {
        let tx = sample();
        assert!(tx.signing_payload(2).is_none());
        assert!(Transaction::new().signing_payload(0).is_none());
    }

    #[test]
    fn signing_payload_covers_outputs() {
        let mut tx = sample();
        let before = tx.signing_payload(0).unwrap();
        tx.add_output(1, Keypair::from_seed(&[3u8; 32]).public_key());
        assert_ne!(tx.signing_payload(0).unwrap(), before);
    }

    #[test]
    fn set_signature_out_of_range() {
        let mut tx = sample();
        assert!(!tx.set_signature(9, Signature::from_slice(&[0u8; 64])));
        assert!(!tx.is_fully_signed());
    }

    #[test]
    fn remove_input_shifts_remaining() {
        let mut tx = sample();
        let removed = tx.remove_input(0).unwrap();
        assert_eq!(removed.prev_tx_hash, TxHash::from_bytes([1u8; 32]));
        assert_eq!(tx.num_inputs(), 1);
        assert_eq!(tx.input(0).unwrap().output_index, 5);
        assert!(tx.remove_input(4).is_none());
    }

    #[test]
    fn transaction_serde_roundtrip() {
        let mut tx = sample();
        tx.set_signature(0, Signature::from_slice(&[0xCC; 64]));
        let json = serde_json::to_string(&tx).unwrap();
        let recovered: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.hash(), tx.hash());
    }
}
