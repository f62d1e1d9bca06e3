pub mod distribution_state;
pub mod claim_record;

pub use distribution_state::*;
pub use claim_record::*;
