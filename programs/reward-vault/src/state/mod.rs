pub mod distributor;
pub mod stake_record;
pub mod vault;

pub use distributor::*;
pub use stake_record::*;
pub use vault::*;
