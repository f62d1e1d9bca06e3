use anchor_lang::prelude::*;

/// Event emitted when the distribution singleton is created
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct DistributionInitialized {
    /// The distribution account public key
    pub distribution: Pubkey,
    /// Initial administrator (also the initial funding address)
    pub administrator: Pubkey,
    /// Token mint being distributed
    pub token_mint: Pubkey,
    /// Initial lock flag
    pub locked: bool,
}

/// Event emitted when the administrator publishes a new merkle root
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct RootUpdated {
    /// The new merkle root hash
    pub root: [u8; 32],
}

/// Event emitted when claims are locked or unlocked
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct LockChanged {
    pub is_locked: bool,
}

/// Event emitted when the account funding claims is replaced
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct FundingAddressChanged {
    /// Administrator who made the change
    pub administrator: Pubkey,
    pub previous_funding_address: Pubkey,
    pub new_funding_address: Pubkey,
}

/// Event emitted when the administrator role is handed over
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct AdministrationTransferred {
    pub previous_administrator: Pubkey,
    pub new_administrator: Pubkey,
}

/// Event emitted when a leaf is redeemed
#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct PayoutClaimed {
    /// Account credited with the payout
    pub beneficiary: Pubkey,
    /// Amount of tokens paid out
    pub amount: u64,
    /// Batch discriminator of the redeemed leaf
    pub batch: u64,
}
