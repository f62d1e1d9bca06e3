use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for reading the claimed set
 *
 * Read-only; the result is returned through the instruction's return data.
 */
#[derive(Accounts)]
#[instruction(fingerprint: [u8; 32])]
pub struct IsClaimed<'info> {
    #[account(
        seeds = [DISTRIBUTION_SEED.as_bytes()],
        bump = distribution.bump
    )]
    pub distribution: Account<'info, DistributionState>,

    /// Claim record for `fingerprint`
    /// CHECK: May not exist yet. The address is pinned by the seeds and the
    /// owner is checked before the data is read.
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), distribution.key().as_ref(), fingerprint.as_ref()],
        bump
    )]
    pub claim_record: UncheckedAccount<'info>,
}

/**
 * Reads the claimed flag for `fingerprint` from a claim record account
 *
 * An account that was never created, or that this program does not own,
 * reads as unclaimed.
 */
pub fn read_claim_record(claim_record: &AccountInfo, fingerprint: &[u8; 32]) -> Result<bool> {
    if claim_record.data_is_empty() || claim_record.owner != &crate::ID {
        return Ok(false);
    }

    let data = claim_record.try_borrow_data()?;
    let record = ClaimRecord::try_deserialize(&mut data.as_ref())?;

    Ok(record.is_claimed(fingerprint))
}

pub fn handle_is_claimed(ctx: Context<IsClaimed>, fingerprint: [u8; 32]) -> Result<bool> {
    read_claim_record(&ctx.accounts.claim_record, &fingerprint)
}
