use anchor_lang::prelude::*;

use crate::constants::REWARD_SCALE;
use crate::error::RewardVaultError;
use crate::state::{StakeRecord, Vault};
use crate::utils::permission::Permission;
use crate::utils::time;

/// Reward released linearly over `[start, start + duration]`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FundingSchedule {
    pub amount: u64,
    pub duration: i64,
    pub start: i64,
}

impl FundingSchedule {
    pub const SIZE: usize = 8 + 8 + 8;

    pub fn end(&self) -> Result<i64> {
        Ok(time::window_end(self.start, self.duration)?)
    }

    pub fn released_at(&self, ts: i64) -> Result<u64> {
        let elapsed = time::elapsed_within(ts, self.start, self.duration);
        Ok(time::linear_release(self.amount, elapsed, self.duration)?)
    }

    pub fn remaining_at(&self, ts: i64) -> Result<u64> {
        Ok(self
            .amount
            .checked_sub(self.released_at(ts)?)
            .ok_or(RewardVaultError::MathOverflow)?)
    }
}

/// Lifecycle switch consulted by every mutating distributor instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistributorStatus {
    #[default]
    Active,
    Halted,
}

/// Construction parameters of a distributor.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributorParams {
    pub min_duration: i64,
    pub max_duration: i64,
    /// Used by `fund` when no duration is given.
    pub default_duration: i64,
    /// Stake ceiling = (funded - claimed) * numerator / denominator.
    pub stake_limit_numerator: u64,
    pub stake_limit_denominator: u64,
}

impl DistributorParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.min_duration > 0
                && self.min_duration <= self.default_duration
                && self.default_duration <= self.max_duration,
            RewardVaultError::InvalidScheduleDuration
        );
        require!(
            self.stake_limit_numerator > 0 && self.stake_limit_denominator > 0,
            RewardVaultError::InvalidConfig
        );
        Ok(())
    }
}

/// The vault side of a stake or unstake call.
pub struct StakeTarget<'a> {
    pub vault: &'a mut Vault,
    pub key: Pubkey,
}

#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Distributor {
    /// Funding principal; also flips the lifecycle switch.
    pub admin: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    /// Token account (PDA) holding undistributed and unclaimed reward.
    pub reward_pool: Pubkey,
    pub status: DistributorStatus,
    pub min_duration: i64,
    pub max_duration: i64,
    pub default_duration: i64,
    pub stake_limit_numerator: u64,
    pub stake_limit_denominator: u64,
    /// The single live schedule; earlier ones are folded into it on `fund`.
    pub schedule: FundingSchedule,
    pub total_staked: u64,
    /// Sum of all `fund` deposits.
    pub total_funded: u64,
    /// Sum of all rewards paid out.
    pub total_claimed: u64,
    /// Forfeited reward waiting to be folded into the next schedule.
    pub unallocated: u64,
    /// Cumulative reward per staked unit, scaled by `REWARD_SCALE`. Never decreases.
    pub reward_per_stake: u128,
    /// Schedule time up to which reward has been attributed to stakers.
    pub last_update_ts: i64,
    pub bump: u8,
    pub pool_bump: u8,
}

impl Distributor {
    pub const SIZE: usize =
        32 + // admin
        32 + // staking_mint
        32 + // reward_mint
        32 + // reward_pool
        1 +  // status
        8 +  // min_duration
        8 +  // max_duration
        8 +  // default_duration
        8 +  // stake_limit_numerator
        8 +  // stake_limit_denominator
        FundingSchedule::SIZE + // schedule
        8 +  // total_staked
        8 +  // total_funded
        8 +  // total_claimed
        8 +  // unallocated
        16 + // reward_per_stake
        8 +  // last_update_ts
        1 +  // bump
        1;   // pool_bump

    pub fn new(
        admin: Pubkey,
        staking_mint: Pubkey,
        reward_mint: Pubkey,
        reward_pool: Pubkey,
        params: &DistributorParams,
        bump: u8,
        pool_bump: u8,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            admin,
            staking_mint,
            reward_mint,
            reward_pool,
            status: DistributorStatus::Active,
            min_duration: params.min_duration,
            max_duration: params.max_duration,
            default_duration: params.default_duration,
            stake_limit_numerator: params.stake_limit_numerator,
            stake_limit_denominator: params.stake_limit_denominator,
            schedule: FundingSchedule::default(),
            total_staked: 0,
            total_funded: 0,
            total_claimed: 0,
            unallocated: 0,
            reward_per_stake: 0,
            last_update_ts: 0,
            bump,
            pool_bump,
        })
    }

    pub fn require_active(&self) -> Result<()> {
        require!(
            self.status == DistributorStatus::Active,
            RewardVaultError::Halted
        );
        Ok(())
    }

    /// Attribute reward released since the last update to current stakers.
    ///
    /// With nothing staked the update time is left where it is, so the
    /// reward released in the gap goes to whoever is staked at the next
    /// settlement (or back into the schedule on the next `fund`).
    pub fn settle(&mut self, now: i64) -> Result<()> {
        if self.total_staked == 0 {
            return Ok(());
        }
        let t = now.min(self.schedule.end()?);
        if t <= self.last_update_ts {
            return Ok(());
        }

        let released = self
            .schedule
            .released_at(t)?
            .checked_sub(self.schedule.released_at(self.last_update_ts)?)
            .ok_or(RewardVaultError::MathOverflow)?;
        let increment = (released as u128)
            .checked_mul(REWARD_SCALE)
            .ok_or(RewardVaultError::MathOverflow)?
            / (self.total_staked as u128);
        self.reward_per_stake = self
            .reward_per_stake
            .checked_add(increment)
            .ok_or(RewardVaultError::MathOverflow)?;
        self.last_update_ts = t;
        Ok(())
    }

    /// Reward owed to `record` as of the last settlement.
    pub fn earned(&self, record: &StakeRecord) -> Result<u64> {
        let delta = self
            .reward_per_stake
            .checked_sub(record.reward_checkpoint)
            .ok_or(RewardVaultError::MathOverflow)?;
        let pending = (record.staked as u128)
            .checked_mul(delta)
            .ok_or(RewardVaultError::MathOverflow)?
            / REWARD_SCALE;
        let total = pending
            .checked_add(record.accrued as u128)
            .ok_or(RewardVaultError::MathOverflow)?;
        Ok(u64::try_from(total).map_err(|_| RewardVaultError::MathOverflow)?)
    }

    pub fn checkpoint(&self, record: &mut StakeRecord) -> Result<()> {
        record.accrued = self.earned(record)?;
        record.reward_checkpoint = self.reward_per_stake;
        Ok(())
    }

    /// Claimable reward for `record` at `now`, without mutating anything.
    pub fn quote(&self, record: &StakeRecord, now: i64) -> Result<u64> {
        let mut preview = self.clone();
        preview.settle(now)?;
        preview.earned(record)
    }

    /// Max total stake admitted against the funded-and-unclaimed reward pool.
    pub fn stake_ceiling(&self) -> Result<u64> {
        let pool = self
            .total_funded
            .checked_sub(self.total_claimed)
            .ok_or(RewardVaultError::MathOverflow)?;
        let ceiling = (pool as u128)
            .checked_mul(self.stake_limit_numerator as u128)
            .ok_or(RewardVaultError::MathOverflow)?
            / (self.stake_limit_denominator as u128);
        Ok(u64::try_from(ceiling).unwrap_or(u64::MAX))
    }

    /// Deposit `amount` of reward, folding the unreleased part of the live
    /// schedule into a fresh one starting at `now`.
    pub fn fund(&mut self, amount: u64, duration: Option<i64>, now: i64) -> Result<FundingSchedule> {
        self.require_active()?;
        require!(amount > 0, RewardVaultError::ZeroAmount);
        let duration = duration.unwrap_or(self.default_duration);
        require!(
            duration >= self.min_duration && duration <= self.max_duration,
            RewardVaultError::InvalidScheduleDuration
        );
        let total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(RewardVaultError::MathOverflow)?;

        self.settle(now)?;
        // Everything not yet attributed: unreleased remainder, plus any gap
        // released while nothing was staked, plus forfeited reward.
        let carried = self
            .schedule
            .remaining_at(self.last_update_ts)?
            .checked_add(self.unallocated)
            .ok_or(RewardVaultError::MathOverflow)?;
        let schedule = FundingSchedule {
            amount: amount
                .checked_add(carried)
                .ok_or(RewardVaultError::MathOverflow)?,
            duration,
            start: now,
        };

        self.schedule = schedule;
        self.last_update_ts = now;
        self.unallocated = 0;
        self.total_funded = total_funded;
        Ok(schedule)
    }

    /// Bring `record` in line with the vault's actual lock. A shortfall means
    /// the owner rage-quit: the stake leaves the registry and its earned
    /// reward is forfeited into `unallocated`. Returns the forfeited amount.
    pub fn reconcile(&mut self, record: &mut StakeRecord, locked: u64) -> Result<u64> {
        if locked >= record.staked {
            return Ok(0);
        }
        let forfeited = self.earned(record)?;
        let stale = record.staked - locked;

        self.total_staked = self
            .total_staked
            .checked_sub(stale)
            .ok_or(RewardVaultError::MathOverflow)?;
        self.unallocated = self
            .unallocated
            .checked_add(forfeited)
            .ok_or(RewardVaultError::MathOverflow)?;
        record.staked = locked;
        record.accrued = 0;
        record.reward_checkpoint = self.reward_per_stake;
        Ok(forfeited)
    }

    /// `held` is the vault's token balance of the staking mint.
    #[allow(clippy::too_many_arguments)]
    pub fn stake(
        &mut self,
        distributor_key: Pubkey,
        record: &mut StakeRecord,
        target: StakeTarget<'_>,
        held: u64,
        amount: u64,
        permission: &Permission,
        now: i64,
    ) -> Result<()> {
        self.require_active()?;
        require!(amount > 0, RewardVaultError::ZeroAmount);
        require!(
            permission.amount == amount,
            RewardVaultError::PermissionAmountMismatch
        );

        let locked = target
            .vault
            .locked_amount(&distributor_key, &self.staking_mint);
        let stale = record.staked.saturating_sub(locked);
        let resulting = self
            .total_staked
            .checked_sub(stale)
            .and_then(|v| v.checked_add(amount))
            .ok_or(RewardVaultError::MathOverflow)?;
        require!(
            resulting <= self.stake_ceiling()?,
            RewardVaultError::StakeLimitExceeded
        );

        target.vault.lock(
            target.key,
            distributor_key,
            self.staking_mint,
            held,
            permission,
        )?;

        self.settle(now)?;
        self.reconcile(record, locked)?;
        self.checkpoint(record)?;
        record.staked = record
            .staked
            .checked_add(amount)
            .ok_or(RewardVaultError::MathOverflow)?;
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(RewardVaultError::MathOverflow)?;
        Ok(())
    }

    /// Unlock `amount` and pay out everything the vault has earned, however
    /// small the unstaked part. Returns the reward to transfer.
    pub fn unstake_and_claim(
        &mut self,
        distributor_key: Pubkey,
        record: &mut StakeRecord,
        target: StakeTarget<'_>,
        amount: u64,
        permission: &Permission,
        now: i64,
    ) -> Result<u64> {
        self.require_active()?;
        require!(amount > 0, RewardVaultError::ZeroAmount);
        require!(
            permission.amount == amount,
            RewardVaultError::PermissionAmountMismatch
        );

        let locked = target
            .vault
            .locked_amount(&distributor_key, &self.staking_mint);
        require!(
            record.staked.min(locked) >= amount,
            RewardVaultError::InsufficientLockedBalance
        );

        target
            .vault
            .unlock(target.key, distributor_key, self.staking_mint, permission)?;

        self.settle(now)?;
        self.reconcile(record, locked)?;
        let reward = self.earned(record)?;
        record.staked -= amount;
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(RewardVaultError::MathOverflow)?;
        record.accrued = 0;
        record.reward_checkpoint = self.reward_per_stake;
        self.total_claimed = self
            .total_claimed
            .checked_add(reward)
            .ok_or(RewardVaultError::MathOverflow)?;
        Ok(reward)
    }
}
