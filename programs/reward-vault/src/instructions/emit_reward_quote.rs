use anchor_lang::prelude::*;

use crate::constants::{DISTRIBUTOR_SEED, STAKE_SEED};
use crate::state::{Distributor, StakeRecord};

pub fn emit_reward_quote(ctx: Context<EmitRewardQuote>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let d = &ctx.accounts.distributor;
    let record = &ctx.accounts.stake_record;

    let claimable = d.quote(record, now)?;

    emit!(RewardQuote {
        distributor: d.key(),
        vault: record.vault,
        staked: record.staked,
        total_staked: d.total_staked,
        claimable,
        reward_per_stake: d.reward_per_stake,
        last_update_ts: d.last_update_ts,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitRewardQuote<'info> {
    #[account(
        seeds = [
            DISTRIBUTOR_SEED,
            distributor.admin.as_ref(),
            distributor.staking_mint.as_ref(),
            distributor.reward_mint.as_ref(),
        ],
        bump = distributor.bump
    )]
    pub distributor: Account<'info, Distributor>,

    #[account(
        seeds = [STAKE_SEED, distributor.key().as_ref(), stake_record.vault.as_ref()],
        bump = stake_record.bump
    )]
    pub stake_record: Account<'info, StakeRecord>,
}

#[event]
pub struct RewardQuote {
    pub distributor: Pubkey,
    pub vault: Pubkey,
    pub staked: u64,
    pub total_staked: u64,
    pub claimable: u64,
    /// Accumulator as of the last on-chain settlement.
    pub reward_per_stake: u128,
    pub last_update_ts: i64,
    pub timestamp: i64,
}
