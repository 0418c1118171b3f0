use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::event::*;
use crate::state::*;
use crate::utils::{
    check_amount, check_authority, check_available, read_token_holding, transfer_chest_tokens,
};

/**
 * Account context for taking tokens back out of a chest
 *
 * Access Control: Only the chest authority can reclaim
 */
#[derive(Accounts)]
pub struct ReclaimChestToken<'info> {
    /// Mint of the reclaimed tokens
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The chest, authority over its token holding
    #[account(
        seeds = [chest.seed.as_ref()],
        bump = chest.bump
    )]
    pub chest: Account<'info, ChestAccount>,

    /// Token holding of the chest
    /// CHECK: deserialized and checked for mint and chest ownership in the handler
    #[account(mut)]
    pub chest_associated_account: UncheckedAccount<'info>,

    /// Token holding of the authority, receives the tokens
    /// CHECK: deserialized and checked for mint and authority ownership in the handler
    #[account(mut)]
    pub authority_associated_account: UncheckedAccount<'info>,

    /// The chest authority
    pub authority: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_reclaim_chest_token(ctx: Context<ReclaimChestToken>, amount: u64) -> Result<()> {
    let chest_key = ctx.accounts.chest.key();
    let mint_key = ctx.accounts.mint.key();
    let authority_key = ctx.accounts.authority.key();
    let token_program_key = ctx.accounts.token_program.key();

    check_authority(&ctx.accounts.chest, &authority_key)?;
    check_amount(amount)?;

    let chest_holding =
        read_token_holding(&ctx.accounts.chest_associated_account, &token_program_key)?;
    let authority_holding =
        read_token_holding(&ctx.accounts.authority_associated_account, &token_program_key)?;

    chest_holding.check(&mint_key, &chest_key)?;
    authority_holding.check(&mint_key, &authority_key)?;

    check_available(chest_holding.amount, amount)?;

    let chest = &ctx.accounts.chest;
    let signer_seeds = chest.signer_seeds();

    transfer_chest_tokens(
        chest.to_account_info(),
        ctx.accounts.chest_associated_account.to_account_info(),
        ctx.accounts.authority_associated_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
        &signer_seeds,
    )?;

    msg!("reclaimed {} tokens of {} from chest {}", amount, mint_key, chest_key);

    emit!(ChestTokensReclaimed {
        chest: chest_key,
        authority: authority_key,
        mint: mint_key,
        amount,
    });

    Ok(())
}
