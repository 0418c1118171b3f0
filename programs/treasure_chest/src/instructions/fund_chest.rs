use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{check_amount, check_authority, deposit_lamports};

/**
 * Account context for topping up a chest
 *
 * Access Control: Only the chest authority can top up through this instruction
 */
#[derive(Accounts)]
pub struct FundChest<'info> {
    /// The chest receiving the lamports
    #[account(
        mut,
        seeds = [chest.seed.as_ref()],
        bump = chest.bump
    )]
    pub chest: Account<'info, ChestAccount>,

    /// The chest authority, source of the lamports
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_fund_chest(ctx: Context<FundChest>, lamports: u64) -> Result<()> {
    check_authority(&ctx.accounts.chest, ctx.accounts.authority.key)?;
    check_amount(lamports)?;
    require!(
        ctx.accounts.authority.lamports() >= lamports,
        TreasureChestError::InsufficientFunds
    );

    deposit_lamports(
        &ctx.accounts.authority.to_account_info(),
        &ctx.accounts.chest.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        lamports,
    )?;

    msg!("funded chest {} with {} lamports", ctx.accounts.chest.key(), lamports);

    emit!(ChestFunded {
        chest: ctx.accounts.chest.key(),
        authority: ctx.accounts.authority.key(),
        lamports,
    });

    Ok(())
}
