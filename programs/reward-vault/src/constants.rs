//! Program-wide constants.

/// PDA seed for a principal's vault: `[VAULT_SEED, owner]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// PDA seed for a distributor: `[DISTRIBUTOR_SEED, admin, staking_mint, reward_mint]`.
pub const DISTRIBUTOR_SEED: &[u8] = b"distributor";

/// PDA seed for a distributor's reward token account: `[REWARD_POOL_SEED, distributor]`.
pub const REWARD_POOL_SEED: &[u8] = b"reward_pool";

/// PDA seed for a vault's stake record: `[STAKE_SEED, distributor, vault]`.
pub const STAKE_SEED: &[u8] = b"stake";

/// Max simultaneous (delegate, mint) locks held by one vault.
pub const MAX_LOCKS: usize = 16;

/// Fixed-point scale of the reward-per-stake accumulator.
pub const REWARD_SCALE: u128 = 1_000_000_000_000_000_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Permission domain name.
pub const PERMISSION_DOMAIN_NAME: &[u8] = b"RewardVault";

/// Permission domain version.
pub const PERMISSION_DOMAIN_VERSION: &[u8] = b"1";

/// Cluster the permission signatures are bound to.
#[cfg(feature = "devnet")]
pub const PERMISSION_CLUSTER: &[u8] = b"devnet";
#[cfg(not(feature = "devnet"))]
pub const PERMISSION_CLUSTER: &[u8] = b"mainnet-beta";
