use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::*;

/**
 * Account context for claiming a payout
 *
 * Anyone may submit the claim for a beneficiary; tokens always go to the
 * beneficiary's token account and come from the funding address's token
 * account, moved by the distribution PDA as approved delegate.
 *
 * Access Control: Any payer holding a valid merkle proof for the leaf
 *
 * Account constraints are evaluated before the handler runs. A mismatched
 * mint, funding account or beneficiary account therefore fails with
 * TokenMintMismatch, FundingAccountMismatch or BeneficiaryMismatch even
 * when the distribution is locked or the leaf is already claimed.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(beneficiary: Pubkey, amount: u64, batch: u64)]
pub struct Claim<'info> {
    /// The distribution account
    /// - Will be modified to update the payout counters
    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED.as_bytes()],
        bump = distribution.bump
    )]
    pub distribution: Account<'info, DistributionState>,

    /// Claim record for this leaf
    /// - Derived from: ["claim", distribution_key, leaf_fingerprint]
    /// - A record that is already claimed rejects the request with AlreadyClaimed
    #[account(
        init_if_needed,
        payer = payer,
        space = ClaimRecord::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            distribution.key().as_ref(),
            ClaimLeaf::new(beneficiary, amount, batch).fingerprint().as_ref()
        ],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token account of the funding address
    /// - Must have approved the distribution PDA as delegate
    #[account(
        mut,
        token::mint = distribution.token_mint,
        token::token_program = token_program,
        constraint = funding_token_account.owner == distribution.funding_address @ PayoutDistributorError::FundingAccountMismatch
    )]
    pub funding_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token account receiving the payout
    #[account(
        mut,
        token::mint = distribution.token_mint,
        token::token_program = token_program,
        constraint = beneficiary_token_account.owner == beneficiary @ PayoutDistributorError::BeneficiaryMismatch
    )]
    pub beneficiary_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for transfer_checked
    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == distribution.token_mint @ PayoutDistributorError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Pays for the claim record
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Redeems one leaf of the payout tree
 *
 * Checks, in order:
 * 1. Distribution is unlocked
 * 2. Amount is non-zero
 * 3. Leaf fingerprint has not been claimed
 * 4. Proof folds the fingerprint into the active root
 *
 * Then asks the ledger for the transfer and, only once it has succeeded,
 * commits the fingerprint and the payout counters. Nothing is written when
 * any step fails.
 */
pub fn process_claim<S, L>(
    distribution: &mut DistributionState,
    claimed: &mut S,
    ledger: &mut L,
    leaf: &ClaimLeaf,
    proof: &[[u8; 32]],
) -> Result<PayoutClaimed>
where
    S: ClaimedSet,
    L: PayoutLedger,
{
    // ===== VALIDATION PHASE =====

    require!(!distribution.locked, PayoutDistributorError::DistributionLocked);
    require!(leaf.amount > 0, PayoutDistributorError::InvalidAmount);

    let fingerprint = leaf.fingerprint();
    require!(
        !claimed.is_claimed(&fingerprint),
        PayoutDistributorError::AlreadyClaimed
    );

    require!(
        verify(proof, distribution.root, fingerprint),
        PayoutDistributorError::InvalidProof
    );

    // Counters are checked up front so nothing can fail after the transfer
    let total_claimed = distribution
        .total_claimed
        .checked_add(leaf.amount)
        .ok_or(PayoutDistributorError::ArithmeticOverflow)?;
    let claim_count = distribution
        .claim_count
        .checked_add(1)
        .ok_or(PayoutDistributorError::ArithmeticOverflow)?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let funding_address = distribution.funding_address;
    match ledger.transfer_from(&funding_address, &leaf.beneficiary, leaf.amount)? {
        TransferOutcome::Completed => {}
        rejected => {
            msg!(
                "Payout of {} from {} rejected: {:?}",
                leaf.amount,
                funding_address,
                rejected
            );
            return err!(PayoutDistributorError::TransferFailed);
        }
    }

    // ===== EFFECTS PHASE (Commit) =====

    claimed.mark_claimed(leaf, fingerprint);
    distribution.total_claimed = total_claimed;
    distribution.claim_count = claim_count;

    Ok(PayoutClaimed {
        beneficiary: leaf.beneficiary,
        amount: leaf.amount,
        batch: leaf.batch,
    })
}

/**
 * Processes a claim against the on-chain registry and SPL token ledger
 *
 * @param ctx - The account context
 * @param beneficiary - Account the leaf pays out to
 * @param amount - Exact amount committed to by the leaf
 * @param batch - Batch discriminator committed to by the leaf
 * @param proof - Sibling hashes from the leaf up to the root
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    beneficiary: Pubkey,
    amount: u64,
    batch: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let leaf = ClaimLeaf::new(beneficiary, amount, batch);

    // Prepare PDA signing seeds for the delegated transfer
    let bump = ctx.accounts.distribution.bump;
    let seeds = &[DISTRIBUTION_SEED.as_bytes(), &[bump]];
    let signer = &[&seeds[..]];

    let accounts = &mut *ctx.accounts;
    let mut ledger = TokenLedger {
        delegate: accounts.distribution.to_account_info(),
        source: &accounts.funding_token_account,
        destination: &accounts.beneficiary_token_account,
        mint: &accounts.token_mint,
        token_program: &accounts.token_program,
        signer_seeds: signer,
    };

    let event = process_claim(
        &mut accounts.distribution,
        &mut *accounts.claim_record,
        &mut ledger,
        &leaf,
        &proof,
    )?;

    msg!(
        "Payout claimed: beneficiary={}, amount={}, batch={}",
        beneficiary,
        amount,
        batch
    );
    emit_cpi!(event);

    Ok(())
}
