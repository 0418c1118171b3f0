pub mod initialize_chest;
pub mod initialize_user_account;
pub mod transfer;
pub mod transfer_token;
pub mod fund_chest;
pub mod reclaim_chest;
pub mod reclaim_chest_token;

pub use initialize_chest::*;
pub use initialize_user_account::*;
pub use transfer::*;
pub use transfer_token::*;
pub use fund_chest::*;
pub use reclaim_chest::*;
pub use reclaim_chest_token::*;
