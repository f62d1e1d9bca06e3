use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for opening or closing claims
 *
 * Access Control: Only the administrator can toggle the lock
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetLocked<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED.as_bytes()],
        bump = distribution.bump
    )]
    pub distribution: Account<'info, DistributionState>,

    pub administrator: Signer<'info>,
}

pub fn handle_set_locked(ctx: Context<SetLocked>, locked: bool) -> Result<()> {
    let administrator = ctx.accounts.administrator.key();
    let event = ctx.accounts.distribution.set_locked(&administrator, locked)?;

    msg!("Distribution locked: {}", locked);
    emit_cpi!(event);

    Ok(())
}
