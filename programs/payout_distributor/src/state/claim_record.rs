use anchor_lang::prelude::*;
use crate::utils::ClaimLeaf;

/**
 * Claim record account
 *
 * Marks one leaf fingerprint as redeemed. The set of these accounts is the
 * distribution's claimed set.
 *
 * Derivation: ["claim", distribution_key, leaf_fingerprint]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt that reaches the program (init_if_needed)
 * 2. Marked claimed when the payout transfer succeeds
 * 3. Never closed, so a fingerprint can never be redeemed twice
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Fingerprint of the redeemed leaf
    pub fingerprint: [u8; 32],
    /// Account that received the payout
    pub beneficiary: Pubkey,
    /// Amount paid out
    pub amount: u64,
    /// Batch of the redeemed leaf
    pub batch: u64,
    pub claimed: bool,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}

/// Append-only set of redeemed leaf fingerprints.
pub trait ClaimedSet {
    fn is_claimed(&self, fingerprint: &[u8; 32]) -> bool;

    /// Commits `leaf` as redeemed. There is no way to take this back.
    fn mark_claimed(&mut self, leaf: &ClaimLeaf, fingerprint: [u8; 32]);
}

impl ClaimedSet for ClaimRecord {
    fn is_claimed(&self, fingerprint: &[u8; 32]) -> bool {
        self.claimed && self.fingerprint == *fingerprint
    }

    fn mark_claimed(&mut self, leaf: &ClaimLeaf, fingerprint: [u8; 32]) {
        self.fingerprint = fingerprint;
        self.beneficiary = leaf.beneficiary;
        self.amount = leaf.amount;
        self.batch = leaf.batch;
        self.claimed = true;
    }
}
