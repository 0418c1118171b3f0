use anchor_lang::prelude::*;

use crate::constants::{CHEST_SEED_LEN, CLAIMANT_SEED_PARTS};
use crate::error::TreasureChestError;

/// Everything a client needs to submit initialize_chest for a new chest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChestDerivation {
    /// Freshly generated identifier the chest is named after
    pub identifier: Pubkey,
    pub seed: [u8; CHEST_SEED_LEN],
    pub address: Pubkey,
    pub bump: u8,
}

/// Chest seed: the leading bytes of the chest identifier
pub fn chest_seed_from_identifier(identifier: &Pubkey) -> [u8; CHEST_SEED_LEN] {
    let mut seed = [0u8; CHEST_SEED_LEN];
    seed.copy_from_slice(&identifier.as_ref()[..CHEST_SEED_LEN]);
    seed
}

/// Claimant record seed: [wallet, chest identifier]
pub fn claimant_seed(
    wallet: &Pubkey,
    chest_identifier: &Pubkey,
) -> [[u8; 32]; CLAIMANT_SEED_PARTS] {
    [wallet.to_bytes(), chest_identifier.to_bytes()]
}

pub fn find_chest_address(seed: &[u8; CHEST_SEED_LEN]) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[seed.as_ref()], &crate::ID)
        .ok_or_else(|| error!(TreasureChestError::DerivationExhausted))
}

/// The claimant path cannot retry: its seed is fixed by the wallet and the
/// chest, so exhaustion is final for that pair.
pub fn find_claimant_address(wallet: &Pubkey, chest_identifier: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[wallet.as_ref(), chest_identifier.as_ref()], &crate::ID)
        .ok_or_else(|| error!(TreasureChestError::DerivationExhausted))
}

/// Draws chest identifiers until one derives, giving up after `max_attempts`.
pub fn derive_new_chest<F>(generate_identifier: F, max_attempts: u8) -> Result<ChestDerivation>
where
    F: FnMut() -> Pubkey,
{
    derive_chest_with(generate_identifier, find_chest_address, max_attempts)
}

pub(crate) fn derive_chest_with<F, D>(
    mut generate_identifier: F,
    mut derive: D,
    max_attempts: u8,
) -> Result<ChestDerivation>
where
    F: FnMut() -> Pubkey,
    D: FnMut(&[u8; CHEST_SEED_LEN]) -> Result<(Pubkey, u8)>,
{
    for attempt in 0..max_attempts {
        let identifier = generate_identifier();
        let seed = chest_seed_from_identifier(&identifier);
        match derive(&seed) {
            Ok((address, bump)) => {
                return Ok(ChestDerivation {
                    identifier,
                    seed,
                    address,
                    bump,
                })
            }
            Err(_) => msg!("chest seed {:?} exhausted on attempt {}", seed, attempt),
        }
    }
    err!(TreasureChestError::DerivationExhausted)
}

pub fn verify_chest_address(address: &Pubkey, seed: &[u8; CHEST_SEED_LEN], bump: u8) -> Result<()> {
    verify_program_address(address, &[seed.as_ref(), &[bump]])
}

pub fn verify_claimant_address(
    address: &Pubkey,
    seed: &[[u8; 32]; CLAIMANT_SEED_PARTS],
    bump: u8,
) -> Result<()> {
    verify_program_address(address, &[seed[0].as_ref(), seed[1].as_ref(), &[bump]])
}

fn verify_program_address(address: &Pubkey, seeds: &[&[u8]]) -> Result<()> {
    // create_program_address also fails when the result lands on the curve
    let derived = Pubkey::create_program_address(seeds, &crate::ID)
        .map_err(|_| error!(TreasureChestError::InvalidDerivation))?;
    require_keys_eq!(derived, *address, TreasureChestError::InvalidDerivation);
    Ok(())
}
