use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{
    create_pda_account, ensure_can_fund, is_vacant, verify_claimant_address, write_account,
};

/**
 * Account context for creating a claimant record
 *
 * The record address is a PDA of [claimant wallet, chest identifier], so at
 * most one record can ever exist per wallet and chest.
 *
 * Access Control: Anyone can pay for a record; the recorded wallet comes from
 * the seed, not from the signer
 */
#[derive(Accounts)]
pub struct InitializeUserAccount<'info> {
    /// The claimant record (PDA) to create
    /// - Derived from: [claimant_wallet, chest_identifier]
    /// CHECK: address verified against params.seed and params.bump, and created in the handler
    #[account(mut)]
    pub user_account: UncheckedAccount<'info>,

    /// Payer of the record, the claimant or a sponsor
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct InitializeUserAccountParams {
    pub bump: u8,
    pub seed: [[u8; 32]; CLAIMANT_SEED_PARTS],
}

/**
 * Creates a claimant record with has_claimed = false
 *
 * @param ctx - The account context containing the record and payer accounts
 * @param params - Seed and bump of the record PDA
 */
pub fn handle_initialize_user_account(
    ctx: Context<InitializeUserAccount>,
    params: InitializeUserAccountParams,
) -> Result<()> {
    let InitializeUserAccountParams { bump, seed } = params;

    let record_info = ctx.accounts.user_account.to_account_info();
    let payer_info = ctx.accounts.authority.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();

    verify_claimant_address(record_info.key, &seed, bump)?;
    require!(is_vacant(&record_info), TreasureChestError::AlreadyInitialized);

    let rent_minimum = Rent::get()?.minimum_balance(ClaimantAccount::LEN);
    ensure_can_fund(payer_info.lamports(), rent_minimum, 0)?;

    let bump_bytes = [bump];
    let signer_seeds: &[&[u8]] = &[&seed[0], &seed[1], &bump_bytes];

    create_pda_account(
        &payer_info,
        &record_info,
        &system_info,
        ClaimantAccount::LEN,
        &[signer_seeds],
    )?;

    let record = ClaimantAccount::new(seed, bump);
    write_account(&record_info, &record)?;

    msg!("claimant record: {} wallet: {}", record_info.key, record.wallet());

    emit!(ClaimantRecordInitialized {
        claimant_record: record_info.key(),
        wallet: record.wallet(),
        chest_identifier: record.chest_identifier(),
        payer: payer_info.key(),
    });

    Ok(())
}
