use anchor_lang::prelude::*;

/// Event emitted when a new chest is created and funded
#[event]
pub struct ChestInitialized {
    /// The chest account public key
    pub chest: Pubkey,
    /// Authority administering the chest
    pub authority: Pubkey,
    /// Derivation seed of the chest
    pub seed: [u8; 8],
    /// Lamports deposited at creation, on top of rent
    pub initial_lamports: u64,
}

/// Event emitted when a claimant record is created
#[event]
pub struct ClaimantRecordInitialized {
    /// The claimant record public key
    pub claimant_record: Pubkey,
    /// Wallet the record belongs to
    pub wallet: Pubkey,
    /// Identifier of the chest the record belongs to
    pub chest_identifier: Pubkey,
    /// Account that paid for the record
    pub payer: Pubkey,
}

/// Event emitted when lamports are paid out of a chest
#[event]
pub struct TreasureClaimed {
    /// The chest account public key
    pub chest: Pubkey,
    /// The claimant record that was consumed
    pub claimant_record: Pubkey,
    /// Wallet credited with the lamports
    pub destination: Pubkey,
    /// Lamports paid out
    pub lamports: u64,
}

/// Event emitted when tokens are paid out of a chest
#[event]
pub struct TokenTreasureClaimed {
    /// The chest account public key
    pub chest: Pubkey,
    /// The claimant record that was consumed
    pub claimant_record: Pubkey,
    /// Mint of the transferred tokens
    pub mint: Pubkey,
    /// Token account credited with the tokens
    pub destination: Pubkey,
    /// Tokens paid out, in base units
    pub amount: u64,
}

/// Event emitted when the authority tops up a chest
#[event]
pub struct ChestFunded {
    pub chest: Pubkey,
    pub authority: Pubkey,
    pub lamports: u64,
}

/// Event emitted when the authority takes lamports back from a chest
#[event]
pub struct ChestReclaimed {
    pub chest: Pubkey,
    pub authority: Pubkey,
    pub lamports: u64,
}

/// Event emitted when the authority takes tokens back from a chest
#[event]
pub struct ChestTokensReclaimed {
    pub chest: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}
