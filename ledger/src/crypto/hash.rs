//! # Hashing Utilities
//!
//! - **SHA-256** (doubled) — transaction hashes, as in Bitcoin's txid.
//! - **BLAKE3** — leaves and nodes of the pool commitment.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data as a fixed-size array.
///
/// # Example
///
/// ```
/// use utxo_ledger::crypto::sha256;
///
/// let hash = sha256(b"ledger");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// Transaction hashes are built with this. See [`crate::transaction::TxHash`].
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute the BLAKE3 hash of the input data.
pub fn blake3_hash(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// Hash multiple byte slices together without concatenation overhead.
///
/// Feeding the parts sequentially into one hasher gives the same digest as
/// hashing their concatenation, minus the temporary buffer.
pub fn blake3_hash_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    *hasher.finalize().as_bytes()
}

/// Compute a binary Merkle root over leaf hashes using BLAKE3.
///
/// Odd levels duplicate their last element. A single leaf is paired with
/// itself so the root is always the output of a hash, never a raw leaf.
/// An empty input returns all zeros.
pub fn merkle_root(leaves: &[[u8; 32]]) -> [u8; 32] {
    if leaves.is_empty() {
        return [0u8; 32];
    }

    let mut current_level: Vec<[u8; 32]> = leaves.to_vec();

    if current_level.len() == 1 {
        return blake3_hash_multi(&[current_level[0].as_slice(), current_level[0].as_slice()]);
    }

    while current_level.len() > 1 {
        let mut next_level = Vec::with_capacity((current_level.len() + 1) / 2);

        for chunk in current_level.chunks(2) {
            let left = &chunk[0];
            let right = if chunk.len() == 2 { &chunk[1] } else { &chunk[0] };
            next_level.push(blake3_hash_multi(&[left.as_slice(), right.as_slice()]));
        }

        current_level = next_level;
    }

    current_level[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256 of the empty string.
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn double_sha256_is_sha256_of_sha256() {
        let single = sha256(b"utxo");
        let double = double_sha256(b"utxo");
        assert_ne!(single, double);
        assert_eq!(double, sha256(&single));
    }

    #[test]
    fn blake3_deterministic() {
        assert_eq!(blake3_hash(b"pool"), blake3_hash(b"pool"));
        assert_ne!(blake3_hash(b"pool"), blake3_hash(b"Pool"));
    }

    #[test]
    fn test_blake3_hash_multi_matches_concatenation() {
        let multi = blake3_hash_multi(&[b"hello", b" world"]);
        assert_eq!(multi, blake3_hash(b"hello world"));
    }

    #[test]
    fn test_merkle_root_empty() {
        assert_eq!(merkle_root(&[]), [0u8; 32]);
    }

    #[test]
    fn test_merkle_root_single_leaf() {
        let leaf = blake3_hash(b"only child");
        let expected = blake3_hash_multi(&[leaf.as_slice(), leaf.as_slice()]);
        assert_eq!(merkle_root(&[leaf]), expected);
    }

    #[test]
    fn test_merkle_root_odd_leaves_duplicate_last() {
        let a = blake3_hash(b"a");
        let b = blake3_hash(b"b");
        let c = blake3_hash(b"c");
        let ab = blake3_hash_multi(&[a.as_slice(), b.as_slice()]);
        let cc = blake3_hash_multi(&[c.as_slice(), c.as_slice()]);
        let expected = blake3_hash_multi(&[ab.as_slice(), cc.as_slice()]);
        assert_eq!(merkle_root(&[a, b, c]), expected);
    }

    #[test]
    fn test_merkle_root_order_matters() {
        let first = blake3_hash(b"first");
        let second = blake3_hash(b"second");
        assert_ne!(merkle_root(&[first, second]), merkle_root(&[second, first]));
    }
}
