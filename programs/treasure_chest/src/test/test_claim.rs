use anchor_lang::prelude::*;

use crate::error::TreasureChestError;
use crate::state::{ChestAccount, ClaimantAccount};
use crate::test::expect_error;
use crate::utils::*;

struct ClaimFixture {
    authority: Pubkey,
    wallet: Pubkey,
    chest: ChestAccount,
    record: ClaimantAccount,
}

impl ClaimFixture {
    fn new() -> Self {
        let authority = Pubkey::new_unique();
        let wallet = Pubkey::new_unique();
        let chest_identifier = Pubkey::new_unique();
        let chest_seed = chest_seed_from_identifier(&chest_identifier);
        let chest = ChestAccount::new(authority, chest_seed, 255, 0);
        let record = ClaimantAccount::new(claimant_seed(&wallet, &chest_identifier), 255);
        ClaimFixture {
            authority,
            wallet,
            chest,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligible_claim_passes() {
        let fixture = ClaimFixture::new();
        check_claim_eligibility(&fixture.chest, &fixture.record, &fixture.authority, 1).unwrap();
    }

    #[test]
    fn test_wrong_signer_is_unauthorized() {
        let fixture = ClaimFixture::new();
        expect_error(
            check_claim_eligibility(&fixture.chest, &fixture.record, &fixture.wallet, 1),
            TreasureChestError::Unauthorized,
        );
    }

    #[test]
    fn test_unauthorized_is_reported_before_already_claimed() {
        let mut fixture = ClaimFixture::new();
        fixture.record.mark_claimed(1).unwrap();

        expect_error(
            check_claim_eligibility(&fixture.chest, &fixture.record, &Pubkey::new_unique(), 1),
            TreasureChestError::Unauthorized,
        );
        expect_error(
            check_claim_eligibility(&fixture.chest, &fixture.record, &fixture.authority, 1),
            TreasureChestError::AlreadyClaimed,
        );
    }

    #[test]
    fn test_already_claimed_is_reported_before_amount_and_linkage() {
        let mut fixture = ClaimFixture::new();
        fixture.record.mark_claimed(1).unwrap();
        fixture.record.seed[1] = Pubkey::new_unique().to_bytes();

        expect_error(
            check_claim_eligibility(&fixture.chest, &fixture.record, &fixture.authority, 0),
            TreasureChestError::AlreadyClaimed,
        );
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let fixture = ClaimFixture::new();
        expect_error(
            check_claim_eligibility(&fixture.chest, &fixture.record, &fixture.authority, 0),
            TreasureChestError::InvalidTransferAmount,
        );
    }

    #[test]
    fn test_record_of_another_chest_is_rejected() {
        let mut fixture = ClaimFixture::new();
        let foreign_seed = claimant_seed(&fixture.wallet, &Pubkey::new_unique());
        fixture.record = ClaimantAccount::new(foreign_seed, 255);

        expect_error(
            check_claim_eligibility(&fixture.chest, &fixture.record, &fixture.authority, 1),
            TreasureChestError::ClaimantChestMismatch,
        );
    }

    #[test]
    fn test_available_balance() {
        check_available(10, 10).unwrap();
        check_available(11, 10).unwrap();
        expect_error(check_available(9, 10), TreasureChestError::InsufficientChestFunds);
    }

    #[test]
    fn test_settle_lamports_conserves_total() {
        let (from, to) = settle_lamports(5_000_000_000, 890_880, 1_000_000_000).unwrap();
        assert_eq!(from, 4_000_000_000);
        assert_eq!(to, 1_000_890_880);
        assert_eq!(from + to, 5_000_000_000 + 890_880);

        expect_error(settle_lamports(1, 0, 2), TreasureChestError::InsufficientChestFunds);
        expect_error(settle_lamports(2, u64::MAX, 1), TreasureChestError::ArithmeticOverflow);
    }

    #[test]
    fn test_funding_requirement() {
        ensure_can_fund(1_500, 500, 1_000).unwrap();
        expect_error(ensure_can_fund(1_499, 500, 1_000), TreasureChestError::InsufficientFunds);
        expect_error(
            ensure_can_fund(u64::MAX, 1, u64::MAX),
            TreasureChestError::ArithmeticOverflow,
        );
    }

    #[test]
    fn test_vacant_slot() {
        assert!(is_vacant_slot(&anchor_lang::system_program::ID, 0));
        assert!(!is_vacant_slot(&anchor_lang::system_program::ID, 8));
        assert!(!is_vacant_slot(&crate::ID, 0));
    }

    #[test]
    fn test_token_holding_checks() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let holding = TokenHolding {
            mint,
            owner,
            amount: 100_000_000,
        };

        holding.check(&mint, &owner).unwrap();
        expect_error(
            holding.check(&Pubkey::new_unique(), &owner),
            TreasureChestError::TokenMintMismatch,
        );
        expect_error(
            holding.check(&mint, &Pubkey::new_unique()),
            TreasureChestError::TokenAuthorityMismatch,
        );
    }
}
