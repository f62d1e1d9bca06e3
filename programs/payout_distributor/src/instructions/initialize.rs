use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::*;

/**
 * Account context for creating the distribution
 *
 * Creates the singleton distribution PDA. The signer becomes the
 * administrator and the initial funding address.
 *
 * Access Control: Anyone, once; the PDA can only be created a single time
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The distribution account (PDA)
    /// - Derived from: ["distribution"]
    #[account(
        init,
        payer = administrator,
        space = DistributionState::LEN,
        seeds = [DISTRIBUTION_SEED.as_bytes()],
        bump
    )]
    pub distribution: Account<'info, DistributionState>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022 programs
    /// - Token 2022 mints with a transfer fee are rejected
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Initial administrator and funding address, pays for the account
    #[account(mut)]
    pub administrator: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates the distribution
 *
 * @param ctx - The account context
 * @param locked - Initial lock flag, DEFAULT_LOCKED when omitted
 */
pub fn handle_initialize(ctx: Context<Initialize>, locked: Option<bool>) -> Result<()> {
    require_exact_transfer_mint(&ctx.accounts.token_mint.to_account_info())?;

    let locked = locked.unwrap_or(DEFAULT_LOCKED);
    let administrator = ctx.accounts.administrator.key();
    let token_mint = ctx.accounts.token_mint.key();
    let distribution_key = ctx.accounts.distribution.key();

    ctx.accounts
        .distribution
        .initialize(ctx.bumps.distribution, administrator, token_mint, locked);

    msg!("Distribution initialized: mint={}, locked={}", token_mint, locked);

    emit_cpi!(DistributionInitialized {
        distribution: distribution_key,
        administrator,
        token_mint,
        locked,
    });

    Ok(())
}
