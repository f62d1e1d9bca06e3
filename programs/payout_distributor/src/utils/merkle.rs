use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use crate::constants::LEAF_ENCODED_LEN;

/// One entitlement committed to by the merkle root: `beneficiary` may claim
/// exactly `amount` once for `batch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimLeaf {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub batch: u64,
}

impl ClaimLeaf {
    pub fn new(beneficiary: Pubkey, amount: u64, batch: u64) -> Self {
        Self {
            beneficiary,
            amount,
            batch,
        }
    }

    /// Fixed-width canonical encoding: beneficiary || amount (LE) || batch (LE)
    pub fn encode(&self) -> [u8; LEAF_ENCODED_LEN] {
        let mut bytes = [0u8; LEAF_ENCODED_LEN];
        bytes[..32].copy_from_slice(&self.beneficiary.to_bytes());
        bytes[32..40].copy_from_slice(&self.amount.to_le_bytes());
        bytes[40..].copy_from_slice(&self.batch.to_le_bytes());
        bytes
    }

    /// sha256 of the canonical encoding; this is the value proven against the root
    /// and the key of the claimed set.
    pub fn fingerprint(&self) -> [u8; 32] {
        hashv(&[&self.encode()]).to_bytes()
    }
}

/// Hashes two sibling nodes with the lexicographically smaller one first, so
/// proofs do not need to carry left/right positions.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` into `leaf`, producing the root the proof commits to.
pub fn compute_root(proof: &[[u8; 32]], leaf: [u8; 32]) -> [u8; 32] {
    proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling))
}

/// Verifies a merkle proof for `leaf` against `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    compute_root(proof, leaf) == root
}
