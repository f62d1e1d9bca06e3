use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;

/**
 * Distribution registry account
 *
 * The single process-wide distribution configuration: which root claims are
 * proven against, whether claims are open, who funds them and who administers
 * the whole thing.
 *
 * Derivation: ["distribution"]
 *
 * Lifecycle:
 * 1. Created once by the initialize instruction
 * 2. Root, lock flag, funding address and administrator updated by the administrator
 * 3. Bookkeeping counters updated by every successful claim
 * 4. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct DistributionState {
    /// Bump seed for PDA derivation
    /// - Needed to sign token transfers as the funding account's delegate
    pub bump: u8,

    /// The single privileged identity
    /// - Can replace the root, toggle the lock, change the funding address
    ///   and hand the role over
    pub administrator: Pubkey,

    /// Wallet whose token account funds every claim
    /// - Its token account must approve this PDA as delegate for the claimable total
    pub funding_address: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Active merkle root
    /// - EMPTY_ROOT until the administrator publishes one
    /// - Only the latest root is honored; older proofs stop verifying
    pub root: [u8; 32],

    /// Claims are rejected while set
    pub locked: bool,

    /// Total amount of tokens paid out
    pub total_claimed: u64,

    /// Number of leaves redeemed
    pub claim_count: u64,
}

impl DistributionState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<DistributionState>();

    /// Resets the registry to its initial configuration with `administrator`
    /// as both administrator and funding address.
    pub fn initialize(&mut self, bump: u8, administrator: Pubkey, token_mint: Pubkey, locked: bool) {
        *self = Self {
            bump,
            administrator,
            funding_address: administrator,
            token_mint,
            root: EMPTY_ROOT,
            locked,
            total_claimed: 0,
            claim_count: 0,
        };
    }

    pub fn require_administrator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.administrator, PayoutDistributorError::Unauthorized);
        Ok(())
    }

    /// Replaces the active root. No shape validation: an all-zero root simply
    /// makes every claim fail proof verification.
    pub fn set_root(&mut self, caller: &Pubkey, root: [u8; 32]) -> Result<RootUpdated> {
        self.require_administrator(caller)?;
        self.root = root;
        Ok(RootUpdated { root })
    }

    pub fn set_locked(&mut self, caller: &Pubkey, locked: bool) -> Result<LockChanged> {
        self.require_administrator(caller)?;
        self.locked = locked;
        Ok(LockChanged { is_locked: locked })
    }

    pub fn set_funding_address(
        &mut self,
        caller: &Pubkey,
        funding_address: Pubkey,
    ) -> Result<FundingAddressChanged> {
        self.require_administrator(caller)?;
        let previous_funding_address = self.funding_address;
        self.funding_address = funding_address;
        Ok(FundingAddressChanged {
            administrator: *caller,
            previous_funding_address,
            new_funding_address: funding_address,
        })
    }

    pub fn transfer_administration(
        &mut self,
        caller: &Pubkey,
        new_administrator: Pubkey,
    ) -> Result<AdministrationTransferred> {
        self.require_administrator(caller)?;
        require!(
            new_administrator != Pubkey::default(),
            PayoutDistributorError::InvalidAdministrator
        );
        let previous_administrator = self.administrator;
        self.administrator = new_administrator;
        Ok(AdministrationTransferred {
            previous_administrator,
            new_administrator,
        })
    }
}
