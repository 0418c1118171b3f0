use anchor_lang::prelude::*;

use crate::error::TreasureChestError;
use crate::state::{ChestAccount, ClaimantAccount};

pub fn check_authority(chest: &ChestAccount, signer: &Pubkey) -> Result<()> {
    require_keys_eq!(chest.authority, *signer, TreasureChestError::Unauthorized);
    Ok(())
}

pub fn check_amount(amount: u64) -> Result<()> {
    require!(amount > 0, TreasureChestError::InvalidTransferAmount);
    Ok(())
}

/// Claim preconditions that do not depend on where the funds come from.
///
/// Order matters, the first failing check is the one reported:
/// authority, then claim flag, then amount, then chest linkage.
pub fn check_claim_eligibility(
    chest: &ChestAccount,
    record: &ClaimantAccount,
    signer: &Pubkey,
    amount: u64,
) -> Result<()> {
    check_authority(chest, signer)?;
    require!(!record.has_claimed, TreasureChestError::AlreadyClaimed);
    check_amount(amount)?;
    require!(chest.owns_claimant(record), TreasureChestError::ClaimantChestMismatch);
    Ok(())
}

pub fn check_available(available: u64, amount: u64) -> Result<()> {
    require!(available >= amount, TreasureChestError::InsufficientChestFunds);
    Ok(())
}

/// Balances of source and destination after moving `amount`
pub fn settle_lamports(from: u64, to: u64, amount: u64) -> Result<(u64, u64)> {
    let from = from
        .checked_sub(amount)
        .ok_or(TreasureChestError::InsufficientChestFunds)?;
    let to = to
        .checked_add(amount)
        .ok_or(TreasureChestError::ArithmeticOverflow)?;
    Ok((from, to))
}

/// Moves lamports out of a program-owned account by direct balance edit
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    require_keys_neq!(*from.key, *to.key, TreasureChestError::DestinationMismatch);
    let (from_after, to_after) = settle_lamports(from.lamports(), to.lamports(), amount)?;
    **from.try_borrow_mut_lamports()? = from_after;
    **to.try_borrow_mut_lamports()? = to_after;
    Ok(())
}
