use anchor_lang::prelude::*;

declare_id!("6uNxBGP4vdnzzv8YxeubEwFmjCun5qccA2kDyPJLGTuu");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Treasure Chest Program
 *
 * A Solana program that pays out of a shared vault at most once per claimant
 * wallet. The vault holds lamports directly and tokens through token accounts
 * owned by the vault address.
 *
 * Key Features:
 * - Deterministic chest and claimant record addresses, no registry
 * - One claimant record per (chest, wallet); its address is the uniqueness guarantee
 * - Claim flag flipped in the same instruction that moves the funds
 * - Authority-dispatched payouts in lamports or tokens
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Chest PDA: [chest_identifier[..8]], holds lamports and owns token holdings
 * - Claimant Record PDAs: [claimant_wallet, chest_identifier]
 *
 * Workflow:
 * 1. Authority creates and funds a chest
 * 2. A claimant record is created for each wallet that finds the chest
 * 3. Authority pays out once per record, in lamports or tokens
 * 4. Authority can top the chest up or take funds back; the chest is never closed
 */
#[program]
pub mod treasure_chest {
    use super::*;

    /**
     * Creates a chest at its derived address and funds it
     *
     * @param ctx - Account context containing chest, authority and system program
     * @param params - Chest seed, bump and initial lamports
     *
     * Access Control: Anyone; the signer becomes the chest authority
     */
    pub fn initialize_chest(
        ctx: Context<InitializeChest>,
        params: InitializeChestParams,
    ) -> Result<()> {
        handle_initialize_chest(ctx, params)
    }

    /**
     * Creates the claimant record of one wallet for one chest
     *
     * @param ctx - Account context containing the record, payer and system program
     * @param params - Record seed ([wallet, chest identifier]) and bump
     *
     * Access Control: Anyone can pay for the record
     */
    pub fn initialize_user_account(
        ctx: Context<InitializeUserAccount>,
        params: InitializeUserAccountParams,
    ) -> Result<()> {
        handle_initialize_user_account(ctx, params)
    }

    /**
     * Pays lamports from a chest to the wallet of a claimant record
     *
     * @param ctx - Account context containing chest, record, destination and authority
     * @param params - Lamports to pay out
     *
     * Access Control: Chest authority only
     */
    pub fn transfer(ctx: Context<Transfer>, params: TransferParams) -> Result<()> {
        handle_transfer(ctx, params)
    }

    /**
     * Pays tokens from the chest holding to the claimant holding
     *
     * @param ctx - Account context containing mint, chest, record and both holdings
     * @param amount - Tokens to pay out, in base units
     *
     * Access Control: Chest authority only
     */
    pub fn transfer_token(ctx: Context<TransferToken>, amount: u64) -> Result<()> {
        handle_transfer_token(ctx, amount)
    }

    /**
     * Tops up a chest with lamports
     *
     * Access Control: Chest authority only
     */
    pub fn fund_chest(ctx: Context<FundChest>, lamports: u64) -> Result<()> {
        handle_fund_chest(ctx, lamports)
    }

    /**
     * Takes lamports above rent exemption back from a chest
     *
     * Access Control: Chest authority only
     */
    pub fn reclaim_chest(ctx: Context<ReclaimChest>, lamports: u64) -> Result<()> {
        handle_reclaim_chest(ctx, lamports)
    }

    /**
     * Takes tokens back from the chest holding
     *
     * Access Control: Chest authority only
     */
    pub fn reclaim_chest_token(ctx: Context<ReclaimChestToken>, amount: u64) -> Result<()> {
        handle_reclaim_chest_token(ctx, amount)
    }
}
