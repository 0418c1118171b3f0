use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{check_amount, check_authority, check_available, move_lamports};

/**
 * Account context for taking lamports back out of a chest
 *
 * The chest itself is never closed: claimant records keep pointing at it, and
 * it must stay rent-exempt.
 *
 * Access Control: Only the chest authority can reclaim
 */
#[derive(Accounts)]
pub struct ReclaimChest<'info> {
    /// The chest giving the lamports back
    #[account(
        mut,
        seeds = [chest.seed.as_ref()],
        bump = chest.bump
    )]
    pub chest: Account<'info, ChestAccount>,

    /// The chest authority, receives the lamports
    #[account(mut)]
    pub authority: Signer<'info>,
}

/**
 * Moves lamports above rent exemption from the chest to its authority
 *
 * @param ctx - The account context containing chest and authority
 * @param lamports - Lamports to take back
 */
pub fn handle_reclaim_chest(ctx: Context<ReclaimChest>, lamports: u64) -> Result<()> {
    check_authority(&ctx.accounts.chest, ctx.accounts.authority.key)?;
    check_amount(lamports)?;

    let chest_info = ctx.accounts.chest.to_account_info();
    let claimable = ChestAccount::claimable_lamports(chest_info.lamports(), &Rent::get()?);
    check_available(claimable, lamports)?;

    let authority_info = ctx.accounts.authority.to_account_info();
    move_lamports(&chest_info, &authority_info, lamports)?;

    msg!("reclaimed {} lamports from chest {}", lamports, chest_info.key);

    emit!(ChestReclaimed {
        chest: chest_info.key(),
        authority: authority_info.key(),
        lamports,
    });

    Ok(())
}
