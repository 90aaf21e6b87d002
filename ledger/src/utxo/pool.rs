//! # UTXO Pool
//!
//! The authoritative set of spendable outputs: a map from [`Utxo`] to the
//! [`Output`] it names. A key is present iff the output has been created and
//! not yet consumed by an accepted transaction.
//!
//! ## Snapshots
//!
//! `UtxoPool` is a plain owned value. `clone()` is the copy constructor and
//! yields a fully independent snapshot: outputs are `Copy`, so there is no
//! shared interior to alias.
//!
//! ## Commitment
//!
//! [`UtxoPool::root_hash`] commits to the whole pool:
//!
//! ```text
//! leaves = [ BLAKE3(tx_hash || index || value || address) for (utxo, out) in sorted(pool) ]
//! root   = merkle_root(leaves)
//! ```
//!
//! Entries are walked in key order, so two pools with the same contents have
//! the same root regardless of insertion history.

use std::collections::{BTreeMap, HashMap};

use super::key::Utxo;
use crate::crypto::hash::{blake3_hash_multi, merkle_root};
use crate::transaction::types::{Amount, Output};

/// In-memory pool of unspent outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtxoPool {
    utxos: HashMap<Utxo, Output>,
}

impl UtxoPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `utxo` is currently spendable.
    pub fn contains(&self, utxo: &Utxo) -> bool {
        self.utxos.contains_key(utxo)
    }

    /// The output `utxo` names, if it is in the pool.
    pub fn get(&self, utxo: &Utxo) -> Option<&Output> {
        self.utxos.get(utxo)
    }

    /// Adds (or replaces) an entry.
    pub fn insert(&mut self, utxo: Utxo, output: Output) {
        self.utxos.insert(utxo, output);
    }

    /// Removes an entry, returning the output it named.
    pub fn remove(&mut self, utxo: &Utxo) -> Option<Output> {
        self.utxos.remove(utxo)
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    /// Every key in the pool, sorted.
    pub fn utxos(&self) -> Vec<Utxo> {
        let mut keys: Vec<Utxo> = self.utxos.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Iterates over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Utxo, &Output)> {
        self.utxos.iter()
    }

    /// Sum of every output's value, or `None` on overflow.
    pub fn total_value(&self) -> Option<Amount> {
        self.utxos
            .values()
            .try_fold(0 as Amount, |acc, out| acc.checked_add(out.value))
    }

    /// Merkle commitment over the sorted pool contents. An empty pool
    /// returns `[0u8; 32]`.
    pub fn root_hash(&self) -> [u8; 32] {
        let sorted: BTreeMap<&Utxo, &Output> = self.utxos.iter().collect();

        let leaves: Vec<[u8; 32]> = sorted
            .iter()
            .map(|(utxo, out)| {
                blake3_hash_multi(&[
                    utxo.tx_hash().as_bytes().as_slice(),
                    utxo.index().to_le_bytes().as_slice(),
                    out.value.to_le_bytes().as_slice(),
                    out.address.as_bytes().as_slice(),
                ])
            })
            .collect();

        merkle_root(&leaves)
    }
}

impl FromIterator<(Utxo, Output)> for UtxoPool {
    fn from_iter<I: IntoIterator<Item = (Utxo, Output)>>(iter: I) -> Self {
        Self {
            utxos: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Utxo, Output)> for UtxoPool {
    fn extend<I: IntoIterator<Item = (Utxo, Output)>>(&mut self, iter: I) {
        self.utxos.extend(iter);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::Keypair;
    use crate::transaction::types::TxHash;

    fn utxo(n: u8, index: u32) -> Utxo {
        Utxo::new(TxHash::from_bytes([n; 32]), index)
    }

    fn output(value: Amount) -> Output {
        Output::new(value, Keypair::from_seed(&[1u8; 32]).public_key())
    }

    #[test]
    fn insert_get_remove() {
        let mut pool = UtxoPool::new();
        assert!(pool.is_empty());

        pool.insert(utxo(1, 0), output(10));
        assert!(pool.contains(&utxo(1, 0)));
        assert_eq!(pool.get(&utxo(1, 0)).unwrap().value, 10);
        assert!(pool.get(&utxo(1, 1)).is_none());
        assert_eq!(pool.len(), 1);

        assert_eq!(pool.remove(&utxo(1, 0)).unwrap().value, 10);
        assert!(!pool.contains(&utxo(1, 0)));
        assert!(pool.remove(&utxo(1, 0)).is_none());
    }

    #[test]
    fn clone_is_independent_snapshot() {
        let mut source = UtxoPool::new();
        source.insert(utxo(1, 0), output(10));

        let snapshot = source.clone();
        source.remove(&utxo(1, 0));
        source.insert(utxo(2, 0), output(20));

        assert!(snapshot.contains(&utxo(1, 0)));
        assert!(!snapshot.contains(&utxo(2, 0)));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn utxos_are_sorted() {
        let pool: UtxoPool = [
            (utxo(3, 0), output(1)),
            (utxo(1, 2), output(1)),
            (utxo(1, 0), output(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(pool.utxos(), vec![utxo(1, 0), utxo(1, 2), utxo(3, 0)]);
    }

    #[test]
    fn total_value_sums_and_detects_overflow() {
        let mut pool: UtxoPool = [(utxo(1, 0), output(10)), (utxo(1, 1), output(32))]
            .into_iter()
            .collect();
        assert_eq!(pool.total_value(), Some(42));

        pool.extend([(utxo(2, 0), output(Amount::MAX))]);
        assert_eq!(pool.total_value(), None);
    }

    #[test]
    fn root_hash_empty_pool_is_zero() {
        assert_eq!(UtxoPool::new().root_hash(), [0u8; 32]);
    }

    #[test]
    fn root_hash_ignores_insertion_order() {
        let mut a = UtxoPool::new();
        a.insert(utxo(1, 0), output(5));
        a.insert(utxo(2, 0), output(6));

        let mut b = UtxoPool::new();
        b.insert(utxo(2, 0), output(6));
        b.insert(utxo(1, 0), output(5));

        assert_eq!(a.root_hash(), b.root_hash());
    }

    #[test]
    fn root_hash_tracks_values() {
        let mut a = UtxoPool::new();
        a.insert(utxo(1, 0), output(5));
        let before = a.root_hash();
        a.insert(utxo(1, 0), output(6));
        assert_ne!(a.root_hash(), before);
    }
}
