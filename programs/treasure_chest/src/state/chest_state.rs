use anchor_lang::prelude::*;

use crate::constants::CHEST_SEED_LEN;
use crate::error::TreasureChestError;
use crate::state::ClaimantAccount;

/**
 * Chest state account
 *
 * The vault from which one payout per claimant wallet is made. The lamports
 * held by the account itself are the native pool; token pools live in token
 * accounts whose owner is the chest address.
 *
 * Derivation: [chest_identifier[..8]]
 *
 * Lifecycle:
 * 1. Created and funded during initialize_chest
 * 2. Lamports decrease on claims and reclaims, increase on top-ups
 * 3. Never closed; the account stays rent-exempt even when fully drained
 */
#[account]
#[derive(Default, Debug)]
pub struct ChestAccount {
    /// Bump seed for PDA derivation
    /// - Supplied at creation, verified, then stored for PDA signing
    pub bump: u8,

    /// First bytes of the chest identifier, the only PDA seed
    pub seed: [u8; CHEST_SEED_LEN],

    /// Administrator of the chest
    /// - Written once at creation
    /// - Must sign every claim, top-up and reclaim
    pub authority: Pubkey,

    /// Lamports deposited at creation, excluding rent
    pub initial_lamports: u64,

    /// Total lamports paid out to claimants
    pub total_claimed_lamports: u64,

    /// Total token base units paid out to claimants, across mints
    pub total_claimed_tokens: u64,

    /// Number of claimant records consumed against this chest
    pub claim_count: u64,
}

impl ChestAccount {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ChestAccount>();

    pub fn new(
        authority: Pubkey,
        seed: [u8; CHEST_SEED_LEN],
        bump: u8,
        initial_lamports: u64,
    ) -> Self {
        ChestAccount {
            bump,
            seed,
            authority,
            initial_lamports,
            total_claimed_lamports: 0,
            total_claimed_tokens: 0,
            claim_count: 0,
        }
    }

    /// Seeds the chest PDA signs with, bump included
    pub fn signer_seeds(&self) -> [&[u8]; 2] {
        [self.seed.as_ref(), std::slice::from_ref(&self.bump)]
    }

    /// A claimant record belongs to this chest when its chest identifier
    /// starts with the chest seed
    pub fn owns_claimant(&self, record: &ClaimantAccount) -> bool {
        record.chest_identifier_bytes()[..CHEST_SEED_LEN] == self.seed
    }

    pub fn rent_exempt_minimum(rent: &Rent) -> u64 {
        rent.minimum_balance(Self::LEN)
    }

    /// Lamports that can leave the chest without breaking rent exemption
    pub fn claimable_lamports(lamports: u64, rent: &Rent) -> u64 {
        lamports.saturating_sub(Self::rent_exempt_minimum(rent))
    }

    pub fn record_lamport_claim(&mut self, lamports: u64) -> Result<()> {
        self.total_claimed_lamports = self
            .total_claimed_lamports
            .checked_add(lamports)
            .ok_or(TreasureChestError::ArithmeticOverflow)?;
        self.increment_claim_count()
    }

    pub fn record_token_claim(&mut self, amount: u64) -> Result<()> {
        self.total_claimed_tokens = self
            .total_claimed_tokens
            .checked_add(amount)
            .ok_or(TreasureChestError::ArithmeticOverflow)?;
        self.increment_claim_count()
    }

    fn increment_claim_count(&mut self) -> Result<()> {
        self.claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(TreasureChestError::ArithmeticOverflow)?;
        Ok(())
    }
}
