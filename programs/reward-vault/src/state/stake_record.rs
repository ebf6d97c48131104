use anchor_lang::prelude::*;

/// A vault's position in one distributor's stake registry.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StakeRecord {
    pub distributor: Pubkey,
    pub vault: Pubkey,
    /// Equals the vault's lock for (distributor, staking mint) unless the
    /// owner rage-quit; reconciled on the next touch.
    pub staked: u64,
    /// Accumulator value at the last settlement of this record.
    pub reward_checkpoint: u128,
    /// Reward earned up to `reward_checkpoint` and not yet paid.
    pub accrued: u64,
    pub bump: u8,
}

impl StakeRecord {
    pub const SIZE: usize =
        32 + // distributor
        32 + // vault
        8 +  // staked
        16 + // reward_checkpoint
        8 +  // accrued
        1;   // bump
}
