pub mod chest_state;
pub mod claimant_state;

pub use chest_state::*;
pub use claimant_state::*;
