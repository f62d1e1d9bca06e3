use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::extension::transfer_fee::TransferFeeConfig;
use anchor_spl::token_interface::{
    get_mint_extension_data, transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use crate::error::*;

/// Result of asking the ledger to move a payout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed,
    InsufficientFunds,
    InsufficientAllowance,
}

/// The token movement capability the claim verifier depends on.
///
/// Rejections the holder could fix (balance, allowance) are reported through
/// [`TransferOutcome`]; `Err` is reserved for failures of the ledger itself.
pub trait PayoutLedger {
    fn transfer_from(
        &mut self,
        holder: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<TransferOutcome>;
}

/**
 * SPL Token / Token 2022 backed ledger
 *
 * The funding wallet grants its allowance by approving the distribution PDA as
 * delegate of its token account. Transfers are `transfer_checked` CPIs signed
 * by the distribution PDA.
 */
pub struct TokenLedger<'a, 'info> {
    /// Distribution PDA, the approved delegate of `source`
    pub delegate: AccountInfo<'info>,
    /// Funding token account
    pub source: &'a InterfaceAccount<'info, TokenAccount>,
    /// Beneficiary token account
    pub destination: &'a InterfaceAccount<'info, TokenAccount>,
    pub mint: &'a InterfaceAccount<'info, Mint>,
    pub token_program: &'a Interface<'info, TokenInterface>,
    /// Seeds of the distribution PDA
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> TokenLedger<'a, 'info> {
    /// Amount the distribution PDA may still move out of the funding account
    fn allowance(&self) -> u64 {
        let delegate: Option<Pubkey> = self.source.delegate.into();
        match delegate {
            Some(delegate) if delegate == self.delegate.key() => self.source.delegated_amount,
            _ => 0,
        }
    }
}

impl<'a, 'info> PayoutLedger for TokenLedger<'a, 'info> {
    fn transfer_from(
        &mut self,
        holder: &Pubkey,
        recipient: &Pubkey,
        amount: u64,
    ) -> Result<TransferOutcome> {
        require_keys_eq!(self.source.owner, *holder, PayoutDistributorError::FundingAccountMismatch);
        require_keys_eq!(self.destination.owner, *recipient, PayoutDistributorError::BeneficiaryMismatch);

        if self.source.amount < amount {
            return Ok(TransferOutcome::InsufficientFunds);
        }
        if self.allowance() < amount {
            return Ok(TransferOutcome::InsufficientAllowance);
        }

        let cpi_accounts = TransferChecked {
            from: self.source.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.destination.to_account_info(),
            authority: self.delegate.clone(),
        };
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                cpi_accounts,
                self.signer_seeds,
            ),
            amount,
            self.mint.decimals,
        )?;

        Ok(TransferOutcome::Completed)
    }
}

/// Rejects Token 2022 mints carrying a transfer fee, which would credit the
/// beneficiary less than the leaf amount.
pub fn require_exact_transfer_mint(mint: &AccountInfo) -> Result<()> {
    if *mint.owner == anchor_spl::token_2022::ID
        && get_mint_extension_data::<TransferFeeConfig>(mint).is_ok()
    {
        return err!(PayoutDistributorError::TransferFeeMint);
    }
    Ok(())
}
