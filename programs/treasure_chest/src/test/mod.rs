pub mod test_claim;
pub mod test_state;

use anchor_lang::prelude::*;

use crate::error::TreasureChestError;

/// Asserts `result` failed with exactly `expected`
pub fn expect_error<T: std::fmt::Debug>(result: Result<T>, expected: TreasureChestError) {
    let err = result.expect_err("expected the operation to fail");
    assert_eq!(
        ProgramError::from(err),
        ProgramError::from(anchor_lang::error::Error::from(expected)),
    );
}
