use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::error::TreasureChestError;

/// An address can be claimed by a new program account only while the
/// system program still owns it and it holds no data
pub fn is_vacant_slot(owner: &Pubkey, data_len: usize) -> bool {
    *owner == anchor_lang::system_program::ID && data_len == 0
}

pub fn is_vacant(info: &AccountInfo) -> bool {
    is_vacant_slot(info.owner, info.data_len())
}

/// Checks the payer holds rent for the new account plus any deposit on top
pub fn ensure_can_fund(payer_lamports: u64, rent_minimum: u64, deposit: u64) -> Result<()> {
    let required = rent_minimum
        .checked_add(deposit)
        .ok_or(TreasureChestError::ArithmeticOverflow)?;
    require!(payer_lamports >= required, TreasureChestError::InsufficientFunds);
    Ok(())
}

/// Creates a program-owned PDA at `target`. The caller checks `is_vacant` first.
///
/// A PDA that was pre-funded by a third party cannot go through
/// `create_account`, so that case tops up, allocates and assigns instead.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            &crate::ID,
        )?;
        return Ok(());
    }

    let shortfall = required.saturating_sub(current);
    if shortfall > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            shortfall,
        )?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}

/// Writes discriminator and body of a freshly created account
pub fn write_account<T: AccountSerialize>(target: &AccountInfo, value: &T) -> Result<()> {
    let mut data = target.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)
}

/// System transfer from a signing wallet
pub fn deposit_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    transfer(
        CpiContext::new(
            system_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        lamports,
    )
}
