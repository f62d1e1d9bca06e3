pub mod initialize;
pub mod set_root;
pub mod set_locked;
pub mod set_funding_address;
pub mod transfer_administration;
pub mod is_claimed;
pub mod claim;

pub use initialize::*;
pub use set_root::*;
pub use set_locked::*;
pub use set_funding_address::*;
pub use transfer_administration::*;
pub use is_claimed::*;
pub use claim::*;
