use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{check_available, check_claim_eligibility, move_lamports};

/**
 * Account context for paying lamports out of a chest
 *
 * The chest authority dispatches the payout on behalf of the claimant. The
 * claimant record is writable, so the runtime serializes every transaction
 * that touches it and two claims can never both see it unclaimed.
 *
 * Access Control: Only the chest authority can dispatch a claim
 */
#[derive(Accounts)]
pub struct Transfer<'info> {
    /// The chest paying out
    /// - Derived from: [chest.seed]
    #[account(
        mut,
        seeds = [from.seed.as_ref()],
        bump = from.bump
    )]
    pub from: Account<'info, ChestAccount>,

    /// The claimant record consumed by this claim
    /// - Derived from: [claimant_wallet, chest_identifier]
    #[account(
        mut,
        seeds = [to.seed[0].as_ref(), to.seed[1].as_ref()],
        bump = to.bump
    )]
    pub to: Account<'info, ClaimantAccount>,

    /// Wallet credited with the lamports
    /// - Must be the wallet the claimant record was derived for
    /// CHECK: compared against the claimant record wallet in the handler
    #[account(mut)]
    pub to_deposit_address: UncheckedAccount<'info>,

    /// The chest authority
    pub authority: Signer<'info>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct TransferParams {
    pub lamports: u64,
}

/**
 * Pays lamports from a chest to a claimant, once
 *
 * @param ctx - The account context containing chest, record and destination
 * @param params - Lamports to pay out
 *
 * Validation Process:
 * 1. Signer is the chest authority
 * 2. The record has not claimed yet
 * 3. The amount is positive and the record belongs to this chest
 * 4. The destination is the record's wallet
 * 5. The chest holds enough lamports above rent exemption
 */
pub fn handle_transfer(ctx: Context<Transfer>, params: TransferParams) -> Result<()> {
    let lamports = params.lamports;

    // ===== VALIDATION PHASE =====

    check_claim_eligibility(
        &ctx.accounts.from,
        &ctx.accounts.to,
        ctx.accounts.authority.key,
        lamports,
    )?;

    require_keys_eq!(
        ctx.accounts.to_deposit_address.key(),
        ctx.accounts.to.wallet(),
        TreasureChestError::DestinationMismatch
    );

    let chest_info = ctx.accounts.from.to_account_info();
    let claimable = ChestAccount::claimable_lamports(chest_info.lamports(), &Rent::get()?);
    check_available(claimable, lamports)?;

    // ===== EFFECTS PHASE =====

    ctx.accounts.to.mark_claimed(lamports)?;
    ctx.accounts.from.record_lamport_claim(lamports)?;

    // ===== INTERACTIONS PHASE =====

    let destination_info = ctx.accounts.to_deposit_address.to_account_info();
    move_lamports(&chest_info, &destination_info, lamports)?;

    msg!("claimed {} lamports to {}", lamports, destination_info.key);

    emit!(TreasureClaimed {
        chest: chest_info.key(),
        claimant_record: ctx.accounts.to.key(),
        destination: destination_info.key(),
        lamports,
    });

    Ok(())
}
