use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{
    create_pda_account, deposit_lamports, ensure_can_fund, is_vacant, verify_chest_address,
    write_account,
};

/**
 * Account context for creating a new chest
 *
 * The chest address is a PDA of the first bytes of a freshly generated chest
 * identifier. The caller supplies seed and bump; both are verified against the
 * chest account address before anything is created.
 *
 * Access Control: Anyone can create a chest; the signer becomes its authority
 */
#[derive(Accounts)]
pub struct InitializeChest<'info> {
    /// The chest account (PDA) to create
    /// - Derived from: [seed]
    /// - Must not exist yet
    /// CHECK: address verified against params.seed and params.bump, and created in the handler
    #[account(mut)]
    pub chest_account: UncheckedAccount<'info>,

    /// The future chest authority
    /// - Pays for the account and for the initial deposit
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation and the deposit
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct InitializeChestParams {
    pub bump: u8,
    pub seed: [u8; CHEST_SEED_LEN],
    pub initial_lamports: u64,
}

/**
 * Creates and funds a chest
 *
 * @param ctx - The account context containing the chest and authority accounts
 * @param params - Seed and bump of the chest PDA, and the lamports to deposit
 *
 * Validation Process:
 * 1. Seed and bump must derive the chest account address
 * 2. The address must still be vacant
 * 3. The authority must cover rent plus the deposit
 */
pub fn handle_initialize_chest(
    ctx: Context<InitializeChest>,
    params: InitializeChestParams,
) -> Result<()> {
    let InitializeChestParams {
        bump,
        seed,
        initial_lamports,
    } = params;

    let chest_info = ctx.accounts.chest_account.to_account_info();
    let authority_info = ctx.accounts.authority.to_account_info();
    let system_info = ctx.accounts.system_program.to_account_info();

    // ===== VALIDATION PHASE =====

    verify_chest_address(chest_info.key, &seed, bump)?;
    require!(is_vacant(&chest_info), TreasureChestError::AlreadyInitialized);

    let rent_minimum = ChestAccount::rent_exempt_minimum(&Rent::get()?);
    ensure_can_fund(authority_info.lamports(), rent_minimum, initial_lamports)?;

    // ===== EFFECTS PHASE =====

    let chest = ChestAccount::new(ctx.accounts.authority.key(), seed, bump, initial_lamports);
    let signer_seeds = chest.signer_seeds();

    create_pda_account(
        &authority_info,
        &chest_info,
        &system_info,
        ChestAccount::LEN,
        &[&signer_seeds[..]],
    )?;

    if initial_lamports > 0 {
        deposit_lamports(&authority_info, &chest_info, &system_info, initial_lamports)?;
    }

    write_account(&chest_info, &chest)?;

    msg!(
        "chest: {} authority: {} initial_lamports: {}",
        chest_info.key,
        chest.authority,
        initial_lamports
    );

    emit!(ChestInitialized {
        chest: chest_info.key(),
        authority: chest.authority,
        seed,
        initial_lamports,
    });

    Ok(())
}
