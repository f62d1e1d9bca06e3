pub mod ledger;
pub mod merkle;

pub use ledger::*;
pub use merkle::*;
