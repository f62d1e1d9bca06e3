use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds, the canonical leaf layout and the initial lock configuration
 * shared by the registry, the claim verifier and off-chain tooling.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for the distribution PDA derivation
/// - Used in: ["distribution"]
/// - There is exactly one distribution per program deployment
pub const DISTRIBUTION_SEED: &str = "distribution";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", distribution_key, leaf_fingerprint]
/// - One record per leaf fingerprint, so a leaf can only ever be redeemed once
/// - Records are never closed: the claimed set only grows
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// ===== MERKLE CONSTANTS =====

/// Root value before the administrator publishes one
/// - No proof folds to this value in practice, so claims fail with InvalidProof
#[constant]
pub const EMPTY_ROOT: [u8; 32] = [0; 32];

/// Length of the canonical leaf encoding
/// - beneficiary (32) + amount as u64 LE (8) + batch as u64 LE (8)
/// - Interior nodes hash 64 bytes, so leaves and nodes never share a preimage length
pub const LEAF_ENCODED_LEN: usize = 32 + 8 + 8;

/// ===== CONFIGURATION =====

/// Lock flag used by `initialize` when the caller does not pass one
/// - Unlocked unless the program is built with the `start-locked` feature
pub const DEFAULT_LOCKED: bool = cfg!(feature = "start-locked");
