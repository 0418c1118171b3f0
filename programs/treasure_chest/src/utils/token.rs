use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TokenAccount, TransferChecked};

use crate::error::TreasureChestError;

/// The parts of a token account the chest cares about
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TokenHolding {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

impl From<&TokenAccount> for TokenHolding {
    fn from(account: &TokenAccount) -> Self {
        TokenHolding {
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
        }
    }
}

impl TokenHolding {
    /// Checks the holding is of `mint` and controlled by `owner`
    pub fn check(&self, mint: &Pubkey, owner: &Pubkey) -> Result<()> {
        require_keys_eq!(self.mint, *mint, TreasureChestError::TokenMintMismatch);
        require_keys_eq!(self.owner, *owner, TreasureChestError::TokenAuthorityMismatch);
        Ok(())
    }
}

/// Reads a token account owned by `token_program`, SPL Token or Token 2022
pub fn read_token_holding(info: &AccountInfo, token_program: &Pubkey) -> Result<TokenHolding> {
    require!(
        !info.data_is_empty() && info.owner == token_program,
        TreasureChestError::TokenAccountNotFound
    );
    let data = info.try_borrow_data()?;
    let account = TokenAccount::try_deserialize(&mut data.as_ref())
        .map_err(|_| error!(TreasureChestError::TokenAccountNotFound))?;
    Ok(TokenHolding::from(&account))
}

/// Moves `amount` out of a chest holding. The chest PDA is the holding's
/// owner, so the transfer is signed with the chest seeds. `transfer_checked`
/// keeps SPL Token and Token-2022 mints on the same path.
pub fn transfer_chest_tokens<'a>(
    chest: AccountInfo<'a>,
    chest_holding: AccountInfo<'a>,
    destination: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    chest_seeds: &[&[u8]],
) -> Result<()> {
    transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            TransferChecked {
                from: chest_holding,
                mint,
                to: destination,
                authority: chest,
            },
            &[chest_seeds],
        ),
        amount,
        decimals,
    )
}
