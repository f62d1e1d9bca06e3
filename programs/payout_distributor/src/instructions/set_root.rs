use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for publishing a merkle root
 *
 * Access Control: Only the administrator can set the root
 *
 * Business Logic:
 * - Each leaf commits to (beneficiary, amount, batch)
 * - Intermediate nodes: hash(min(left, right) + max(left, right))
 * - Replacing the root invalidates every proof built against the old one;
 *   leaves already redeemed stay redeemed
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetRoot<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED.as_bytes()],
        bump = distribution.bump
    )]
    pub distribution: Account<'info, DistributionState>,

    /// Must match the administrator stored in the distribution
    pub administrator: Signer<'info>,
}

/**
 * Replaces the active merkle root
 *
 * @param ctx - The account context
 * @param root - 32-byte root of the off-chain payout tree
 */
pub fn handle_set_root(ctx: Context<SetRoot>, root: [u8; 32]) -> Result<()> {
    let administrator = ctx.accounts.administrator.key();
    let event = ctx.accounts.distribution.set_root(&administrator, root)?;

    emit_cpi!(event);

    Ok(())
}
