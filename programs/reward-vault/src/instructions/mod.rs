pub mod create_vault;
pub mod lock;
pub mod unlock;
pub mod rage_quit;
pub mod withdraw;
pub mod initialize_distributor;
pub mod fund;
pub mod stake;
pub mod unstake_and_claim;
pub mod reconcile_stake;
pub mod halt;
pub mod resume;
pub mod emit_reward_quote;

pub use create_vault::*;
pub use lock::*;
pub use unlock::*;
pub use rage_quit::*;
pub use withdraw::*;
pub use initialize_distributor::*;
pub use fund::*;
pub use stake::*;
pub use unstake_and_claim::*;
pub use reconcile_stake::*;
pub use halt::*;
pub use resume::*;
pub use emit_reward_quote::*;
