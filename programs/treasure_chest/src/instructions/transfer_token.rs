use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::event::*;
use crate::state::*;
use crate::utils::{
    check_available, check_claim_eligibility, read_token_holding, transfer_chest_tokens,
};

/**
 * Account context for paying tokens out of a chest
 *
 * The chest's token holding is controlled by the chest PDA, which signs the
 * token transfer with its seeds. Same single-claim rules as the lamport path.
 *
 * Access Control: Only the chest authority can dispatch a claim
 */
#[derive(Accounts)]
pub struct TransferToken<'info> {
    /// Mint of the tokens paid out
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The chest paying out, authority over its token holding
    /// - Derived from: [chest.seed]
    #[account(
        mut,
        seeds = [chest.seed.as_ref()],
        bump = chest.bump
    )]
    pub chest: Account<'info, ChestAccount>,

    /// Token holding of the chest
    /// CHECK: deserialized and checked for mint and chest ownership in the handler
    #[account(mut)]
    pub chest_associated_account: UncheckedAccount<'info>,

    /// The claimant record consumed by this claim
    /// - Derived from: [claimant_wallet, chest_identifier]
    #[account(
        mut,
        seeds = [user.seed[0].as_ref(), user.seed[1].as_ref()],
        bump = user.bump
    )]
    pub user: Account<'info, ClaimantAccount>,

    /// Token holding of the claimant wallet
    /// CHECK: deserialized and checked for mint and claimant ownership in the handler
    #[account(mut)]
    pub user_associated_account: UncheckedAccount<'info>,

    /// The chest authority
    pub authority: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Pays tokens from a chest's holding to a claimant's holding, once
 *
 * @param ctx - The account context containing chest, record and token accounts
 * @param amount - Tokens to pay out, in base units
 *
 * Validation Process:
 * 1. Claim eligibility, as for lamport claims
 * 2. Both holdings exist under the token program and are of this mint
 * 3. The chest holding belongs to the chest, the claimant holding to the record's wallet
 * 4. The chest holding covers the amount
 */
pub fn handle_transfer_token(ctx: Context<TransferToken>, amount: u64) -> Result<()> {
    let chest_key = ctx.accounts.chest.key();
    let mint_key = ctx.accounts.mint.key();
    let token_program_key = ctx.accounts.token_program.key();

    // ===== VALIDATION PHASE =====

    check_claim_eligibility(
        &ctx.accounts.chest,
        &ctx.accounts.user,
        ctx.accounts.authority.key,
        amount,
    )?;

    let chest_holding =
        read_token_holding(&ctx.accounts.chest_associated_account, &token_program_key)?;
    let user_holding =
        read_token_holding(&ctx.accounts.user_associated_account, &token_program_key)?;

    chest_holding.check(&mint_key, &chest_key)?;
    user_holding.check(&mint_key, &ctx.accounts.user.wallet())?;

    check_available(chest_holding.amount, amount)?;

    // ===== EFFECTS PHASE =====

    ctx.accounts.user.mark_claimed(amount)?;
    ctx.accounts.chest.record_token_claim(amount)?;

    // ===== INTERACTIONS PHASE =====

    let chest = &ctx.accounts.chest;
    let signer_seeds = chest.signer_seeds();

    transfer_chest_tokens(
        chest.to_account_info(),
        ctx.accounts.chest_associated_account.to_account_info(),
        ctx.accounts.user_associated_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
        &signer_seeds,
    )?;

    msg!(
        "claimed {} tokens of {} to {}",
        amount,
        mint_key,
        ctx.accounts.user_associated_account.key
    );

    emit!(TokenTreasureClaimed {
        chest: chest_key,
        claimant_record: ctx.accounts.user.key(),
        mint: mint_key,
        destination: ctx.accounts.user_associated_account.key(),
        amount,
    });

    Ok(())
}
