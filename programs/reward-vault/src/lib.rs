//! Token vaults with signed, delegate-held locks, and a staking reward
//! distributor built on top of them.
//!
//! Principals keep tokens in a per-owner vault PDA. Delegates redeem
//! off-line secp256k1 permissions to lock part of a vault's balance; a
//! distributor is one such delegate and streams a funded reward linearly
//! to vaults in proportion to the stake they have locked with it.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::DistributorParams;
use utils::permission::Permission;

declare_id!("GGEkd43NYLmm4JxtuqYN1k9kmYZJAgb6AYFEfAU5jaex");

#[program]
pub mod reward_vault {
    use super::*;

    pub fn create_vault(ctx: Context<CreateVault>, signer: [u8; 20]) -> Result<()> {
        instructions::create_vault::create_vault(ctx, signer)
    }

    pub fn lock(ctx: Context<LockVault>, permission: Permission) -> Result<()> {
        instructions::lock::lock(ctx, permission)
    }

    pub fn unlock(ctx: Context<UnlockVault>, permission: Permission) -> Result<()> {
        instructions::unlock::unlock(ctx, permission)
    }

    pub fn rage_quit(ctx: Context<RageQuit>, delegate: Pubkey, mint: Pubkey) -> Result<()> {
        instructions::rage_quit::rage_quit(ctx, delegate, mint)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    pub fn initialize_distributor(
        ctx: Context<InitializeDistributor>,
        params: DistributorParams,
    ) -> Result<()> {
        instructions::initialize_distributor::initialize_distributor(ctx, params)
    }

    pub fn fund(ctx: Context<Fund>, amount: u64, duration: Option<i64>) -> Result<()> {
        instructions::fund::fund(ctx, amount, duration)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64, permission: Permission) -> Result<()> {
        instructions::stake::stake(ctx, amount, permission)
    }

    pub fn unstake_and_claim(
        ctx: Context<UnstakeAndClaim>,
        amount: u64,
        permission: Permission,
    ) -> Result<()> {
        instructions::unstake_and_claim::unstake_and_claim(ctx, amount, permission)
    }

    pub fn reconcile_stake(ctx: Context<ReconcileStake>) -> Result<()> {
        instructions::reconcile_stake::reconcile_stake(ctx)
    }

    pub fn halt(ctx: Context<SetStatus>) -> Result<()> {
        instructions::halt::halt(ctx)
    }

    pub fn resume(ctx: Context<SetStatus>) -> Result<()> {
        instructions::resume::resume(ctx)
    }

    pub fn emit_reward_quote(ctx: Context<EmitRewardQuote>) -> Result<()> {
        instructions::emit_reward_quote::emit_reward_quote(ctx)
    }
}
