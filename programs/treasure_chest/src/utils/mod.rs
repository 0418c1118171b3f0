pub mod account;
pub mod claim;
pub mod pda;
pub mod token;

pub use account::*;
pub use claim::*;
pub use pda::*;
pub use token::*;
