use anchor_lang::prelude::*;

use crate::constants::CLAIMANT_SEED_PARTS;
use crate::error::TreasureChestError;

/**
 * Claimant record account
 *
 * Tracks whether one wallet has already been paid out of one chest.
 *
 * Derivation: [claimant_wallet, chest_identifier]
 *
 * Lifecycle:
 * 1. Created by initialize_user_account, has_claimed = false
 * 2. Flipped to has_claimed = true by the first successful claim
 * 3. Never reset and never closed
 *
 * Design Notes:
 * - One record per (chest, wallet) pair; the pair is the whole seed, so a
 *   second record for the same pair would collide with the first
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimantAccount {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Derivation seed: [claimant wallet bytes, chest identifier bytes]
    pub seed: [[u8; 32]; CLAIMANT_SEED_PARTS],

    /// Set by the one successful claim, terminal afterwards
    pub has_claimed: bool,

    /// Amount paid out by that claim, lamports or token base units
    pub claimed_amount: u64,
}

impl ClaimantAccount {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimantAccount>();

    pub fn new(seed: [[u8; 32]; CLAIMANT_SEED_PARTS], bump: u8) -> Self {
        ClaimantAccount {
            bump,
            seed,
            has_claimed: false,
            claimed_amount: 0,
        }
    }

    /// Wallet this record was derived for
    pub fn wallet(&self) -> Pubkey {
        Pubkey::new_from_array(self.seed[0])
    }

    /// Identifier of the chest this record was derived for
    pub fn chest_identifier(&self) -> Pubkey {
        Pubkey::new_from_array(self.seed[1])
    }

    pub fn chest_identifier_bytes(&self) -> &[u8; 32] {
        &self.seed[1]
    }

    /// Consumes the record. Fails if it was already consumed.
    pub fn mark_claimed(&mut self, amount: u64) -> Result<()> {
        require!(!self.has_claimed, TreasureChestError::AlreadyClaimed);
        self.has_claimed = true;
        self.claimed_amount = amount;
        Ok(())
    }
}
