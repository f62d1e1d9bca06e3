use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for changing which wallet funds claims
 *
 * Access Control: Only the administrator can change the funding address
 *
 * The new wallet must approve the distribution PDA as delegate of its token
 * account before claims can be paid from it.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetFundingAddress<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED.as_bytes()],
        bump = distribution.bump
    )]
    pub distribution: Account<'info, DistributionState>,

    pub administrator: Signer<'info>,
}

pub fn handle_set_funding_address(
    ctx: Context<SetFundingAddress>,
    funding_address: Pubkey,
) -> Result<()> {
    let administrator = ctx.accounts.administrator.key();
    let event = ctx
        .accounts
        .distribution
        .set_funding_address(&administrator, funding_address)?;

    emit_cpi!(event);

    Ok(())
}
