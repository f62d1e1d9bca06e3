use anchor_lang::prelude::*;

#[error_code]
pub enum PayoutDistributorError {
    // Access control errors
    #[msg("Only the administrator can perform this action")]
    Unauthorized,
    #[msg("Invalid administrator account")]
    InvalidAdministrator,

    // Distribution state errors
    #[msg("Distribution is locked")]
    DistributionLocked,

    // Claim errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Payout has already been claimed")]
    AlreadyClaimed,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Token transfer from the funding account failed")]
    TransferFailed,

    // Account validation errors
    #[msg("Token mint does not match the distribution's token mint")]
    TokenMintMismatch,
    #[msg("Funding token account does not belong to the funding address")]
    FundingAccountMismatch,
    #[msg("Beneficiary token account does not belong to the beneficiary")]
    BeneficiaryMismatch,
    #[msg("Token mint charges a transfer fee")]
    TransferFeeMint,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
