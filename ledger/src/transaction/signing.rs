//! Input signing with Ed25519 keypairs.
//!
//! Each input is signed separately over [`Transaction::signing_payload`] for
//! its own index, under the key that owns the output it spends.

use super::builder::Transaction;
use crate::crypto::keys::Keypair;
use crate::crypto::signatures::sign;

/// Signs input `index` in place. Returns `false` if there is no such input.
///
/// The caller is responsible for passing the keypair that owns the output
/// this input spends; the ledger will reject anything else.
pub fn sign_input(tx: &mut Transaction, index: usize, keypair: &Keypair) -> bool {
    let Some(payload) = tx.signing_payload(index) else {
        return false;
    };
    tx.set_signature(index, sign(keypair, &payload))
}

/// Signs every input with the same keypair. Convenient when one owner spends
/// several of their own outputs.
pub fn sign_all_inputs(tx: &mut Transaction, keypair: &Keypair) {
    for index in 0..tx.num_inputs() {
        sign_input(tx, index, keypair);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::signatures::verify;
    use crate::transaction::builder::TransactionBuilder;
    use crate::transaction::types::TxHash;

    fn unsigned(owner: &Keypair) -> Transaction {
        TransactionBuilder::new()
            .input(TxHash::from_bytes([4u8; 32]), 0)
            .input(TxHash::from_bytes([4u8; 32]), 1)
            .output(10, owner.public_key())
            .build()
    }

    #[test]
    fn sign_input_sets_verifiable_signature() {
        let kp = Keypair::generate();
        let mut tx = unsigned(&kp);
        assert!(sign_input(&mut tx, 0, &kp));

        let sig = tx.input(0).unwrap().signature.clone().unwrap();
        let payload = tx.signing_payload(0).unwrap();
        assert!(verify(&kp.public_key(), &payload, &sig));
        assert!(!tx.input(1).unwrap().is_signed());
    }

    #[test]
    fn sign_input_out_of_range() {
        let kp = Keypair::generate();
        let mut tx = unsigned(&kp);
        assert!(!sign_input(&mut tx, 2, &kp));
    }

    #[test]
    fn sign_all_inputs_signs_each_index() {
        let kp = Keypair::generate();
        let mut tx = unsigned(&kp);
        sign_all_inputs(&mut tx, &kp);
        assert!(tx.is_fully_signed());

        // Signatures are per-index, so they differ even for the same key.
        assert_ne!(
            tx.input(0).unwrap().signature,
            tx.input(1).unwrap().signature
        );
    }

    #[test]
    fn signing_is_deterministic() {
        let kp = Keypair::from_seed(&[5u8; 32]);
        let mut tx1 = unsigned(&kp);
        let mut tx2 = unsigned(&kp);
        sign_all_inputs(&mut tx1, &kp);
        sign_all_inputs(&mut tx2, &kp);
        assert_eq!(tx1.hash(), tx2.hash());
    }

    #[test]
    fn signature_for_one_input_does_not_verify_another() {
        let kp = Keypair::generate();
        let mut tx = unsigned(&kp);
        sign_input(&mut tx, 0, &kp);
        let sig = tx.input(0).unwrap().signature.clone().unwrap();
        assert!(!verify(&kp.public_key(), &tx.signing_payload(1).unwrap(), &sig));
    }
}
