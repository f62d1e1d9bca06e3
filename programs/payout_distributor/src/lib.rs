use anchor_lang::prelude::*;

declare_id!("3uDkyD6FsMVNiVwsiMvhGULBkPVUZBeESr4osRhuR6dS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Payout Distributor Program
 *
 * Pays out token entitlements committed to by a merkle root. Each leaf
 * (beneficiary, amount, batch) can be redeemed exactly once.
 *
 * Key Features:
 * - Merkle proof verification with sorted-pair hashing
 * - One active root at a time; replacing it invalidates older proofs
 * - Claims keyed by leaf fingerprint, never redeemable twice
 * - Lock switch to pause and resume claims
 * - Payouts pulled from a funding wallet that approved the distribution as delegate
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Distribution PDA: the single registry (root, lock, funding address, administrator)
 * - Claim Record PDAs: one per redeemed leaf fingerprint
 *
 * Workflow:
 * 1. Administrator initializes the distribution for a mint
 * 2. Funding wallet approves the distribution PDA as delegate of its token account
 * 3. Administrator publishes the root and unlocks claims
 * 4. Beneficiaries (or anyone on their behalf) claim with merkle proofs
 */
#[program]
pub mod payout_distributor {
    use super::*;

    /**
     * Creates the distribution
     *
     * @param ctx - Account context containing the distribution, mint and administrator
     * @param locked - Initial lock flag, unlocked by default
     *
     * Access Control: First caller; becomes administrator and funding address
     */
    pub fn initialize(ctx: Context<Initialize>, locked: Option<bool>) -> Result<()> {
        handle_initialize(ctx, locked)
    }

    /**
     * Publishes a new merkle root
     *
     * Access Control: Administrator only
     */
    pub fn set_root(ctx: Context<SetRoot>, root: [u8; 32]) -> Result<()> {
        handle_set_root(ctx, root)
    }

    /**
     * Locks or unlocks claims
     *
     * Access Control: Administrator only
     */
    pub fn set_locked(ctx: Context<SetLocked>, locked: bool) -> Result<()> {
        handle_set_locked(ctx, locked)
    }

    /**
     * Changes the wallet whose token account funds claims
     *
     * Access Control: Administrator only
     */
    pub fn set_funding_address(ctx: Context<SetFundingAddress>, funding_address: Pubkey) -> Result<()> {
        handle_set_funding_address(ctx, funding_address)
    }

    /**
     * Hands the administrator role to another identity
     *
     * Access Control: Administrator only
     */
    pub fn transfer_administration(
        ctx: Context<TransferAdministration>,
        new_administrator: Pubkey,
    ) -> Result<()> {
        handle_transfer_administration(ctx, new_administrator)
    }

    /// Returns whether the leaf with `fingerprint` has been redeemed
    pub fn is_claimed(ctx: Context<IsClaimed>, fingerprint: [u8; 32]) -> Result<bool> {
        handle_is_claimed(ctx, fingerprint)
    }

    /**
     * Claims a payout with merkle proof verification
     *
     * @param ctx - Account context containing distribution, claim record and token accounts
     * @param beneficiary - Account the leaf pays out to
     * @param amount - Amount committed to by the leaf
     * @param batch - Batch discriminator committed to by the leaf
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Anyone with a valid merkle proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        beneficiary: Pubkey,
        amount: u64,
        batch: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, beneficiary, amount, batch, proof)
    }
}
