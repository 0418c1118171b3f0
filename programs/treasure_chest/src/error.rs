use anchor_lang::prelude::*;

#[error_code]
pub enum TreasureChestError {
    // Access control errors
    #[msg("Only the chest authority can perform this action")]
    Unauthorized,

    // Account creation errors
    #[msg("Account is already initialized")]
    AlreadyInitialized,
    #[msg("Seed and bump do not derive the supplied address")]
    InvalidDerivation,
    #[msg("No bump yields a valid program address for this seed")]
    DerivationExhausted,

    // Claim state errors
    #[msg("You have already found this treasure!")]
    AlreadyClaimed,
    #[msg("Claimant record does not belong to this chest")]
    ClaimantChestMismatch,
    #[msg("Destination does not match the claimant wallet")]
    DestinationMismatch,

    // Amount validation errors
    #[msg("Invalid transfer amount.")]
    InvalidTransferAmount,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Insufficient chest balance for this claim")]
    InsufficientChestFunds,

    // Token errors
    #[msg("Token account not found")]
    TokenAccountNotFound,
    #[msg("Token account is not owned by the expected authority")]
    TokenAuthorityMismatch,
    #[msg("Token account mint does not match")]
    TokenMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
