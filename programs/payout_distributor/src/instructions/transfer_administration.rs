use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/**
 * Account context for handing the administrator role to another identity
 *
 * Access Control: Only the current administrator
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferAdministration<'info> {
    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED.as_bytes()],
        bump = distribution.bump
    )]
    pub distribution: Account<'info, DistributionState>,

    pub administrator: Signer<'info>,
}

pub fn handle_transfer_administration(
    ctx: Context<TransferAdministration>,
    new_administrator: Pubkey,
) -> Result<()> {
    let administrator = ctx.accounts.administrator.key();
    let event = ctx
        .accounts
        .distribution
        .transfer_administration(&administrator, new_administrator)?;

    msg!("Administration transferred to {}", new_administrator);
    emit_cpi!(event);

    Ok(())
}
