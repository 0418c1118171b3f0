use anchor_lang::prelude::*;

use crate::error::TreasureChestError;
use crate::state::{ChestAccount, ClaimantAccount};
use crate::test::expect_error;
use crate::utils::{chest_seed_from_identifier, claimant_seed};

/// A record for a fresh wallet and a fresh chest identifier
fn any_record(bump: u8) -> ClaimantAccount {
    ClaimantAccount::new(claimant_seed(&Pubkey::new_unique(), &Pubkey::new_unique()), bump)
}

fn chest_for(identifier: &Pubkey, authority: Pubkey) -> ChestAccount {
    ChestAccount::new(authority, chest_seed_from_identifier(identifier), 254, 1_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_sizes_fit_serialized_layout() {
        let chest = chest_for(&Pubkey::new_unique(), Pubkey::new_unique());
        let mut buffer = vec![0u8; ChestAccount::LEN];
        chest.try_serialize(&mut &mut buffer[..]).unwrap();

        let record = any_record(255);
        let mut buffer = vec![0u8; ClaimantAccount::LEN];
        record.try_serialize(&mut &mut buffer[..]).unwrap();
    }

    #[test]
    fn test_chest_account_roundtrips_through_account_data() {
        let authority = Pubkey::new_unique();
        let chest = chest_for(&Pubkey::new_unique(), authority);

        let mut buffer = vec![0u8; ChestAccount::LEN];
        chest.try_serialize(&mut &mut buffer[..]).unwrap();
        let decoded = ChestAccount::try_deserialize(&mut buffer.as_ref()).unwrap();

        assert_eq!(decoded.authority, authority);
        assert_eq!(decoded.seed, chest.seed);
        assert_eq!(decoded.bump, 254);
        assert_eq!(decoded.initial_lamports, 1_000);
        assert_eq!(decoded.claim_count, 0);
    }

    #[test]
    fn test_claimant_account_data_is_not_a_chest() {
        let record = any_record(255);
        let mut buffer = vec![0u8; ClaimantAccount::LEN];
        record.try_serialize(&mut &mut buffer[..]).unwrap();

        assert!(ChestAccount::try_deserialize(&mut buffer.as_ref()).is_err());
    }

    #[test]
    fn test_new_claimant_record_is_unclaimed() {
        let wallet = Pubkey::new_unique();
        let chest_identifier = Pubkey::new_unique();
        let record = ClaimantAccount::new(claimant_seed(&wallet, &chest_identifier), 253);

        assert!(!record.has_claimed);
        assert_eq!(record.claimed_amount, 0);
        assert_eq!(record.wallet(), wallet);
        assert_eq!(record.chest_identifier(), chest_identifier);
    }

    #[test]
    fn test_claim_flag_only_moves_forward() {
        let mut record = any_record(253);

        record.mark_claimed(1_000_000_000).unwrap();
        assert!(record.has_claimed);
        assert_eq!(record.claimed_amount, 1_000_000_000);

        expect_error(record.mark_claimed(1_000), TreasureChestError::AlreadyClaimed);
        assert!(record.has_claimed);
        assert_eq!(record.claimed_amount, 1_000_000_000);
    }

    #[test]
    fn test_chest_owns_only_its_claimant_records() {
        let chest_identifier = Pubkey::new_unique();
        let chest = chest_for(&chest_identifier, Pubkey::new_unique());

        let own_seed = claimant_seed(&Pubkey::new_unique(), &chest_identifier);
        let own = ClaimantAccount::new(own_seed, 255);
        let foreign = any_record(255);

        assert!(chest.owns_claimant(&own));
        assert!(!chest.owns_claimant(&foreign));
    }

    #[test]
    fn test_claimable_lamports_keep_rent() {
        let rent = Rent::default();
        let minimum = ChestAccount::rent_exempt_minimum(&rent);

        assert_eq!(ChestAccount::claimable_lamports(minimum + 42, &rent), 42);
        assert_eq!(ChestAccount::claimable_lamports(minimum, &rent), 0);
        assert_eq!(ChestAccount::claimable_lamports(minimum / 2, &rent), 0);
    }

    #[test]
    fn test_claim_totals() {
        let mut chest = chest_for(&Pubkey::new_unique(), Pubkey::new_unique());

        chest.record_lamport_claim(500).unwrap();
        chest.record_token_claim(7).unwrap();
        assert_eq!(chest.total_claimed_lamports, 500);
        assert_eq!(chest.total_claimed_tokens, 7);
        assert_eq!(chest.claim_count, 2);

        chest.total_claimed_lamports = u64::MAX;
        expect_error(chest.record_lamport_claim(1), TreasureChestError::ArithmeticOverflow);
    }

    #[test]
    fn test_signer_seeds_end_with_bump() {
        let chest = chest_for(&Pubkey::new_unique(), Pubkey::new_unique());
        let seeds = chest.signer_seeds();

        assert_eq!(seeds[0], &chest.seed[..]);
        assert_eq!(seeds[1], &[254u8][..]);
    }

    #[test]
    fn test_already_claimed_message_is_verbatim() {
        assert_eq!(
            TreasureChestError::AlreadyClaimed.to_string(),
            "You have already found this treasure!"
        );
    }
}
