use anchor_lang::prelude::*;

use crate::constants::{DISTRIBUTOR_SEED, STAKE_SEED, VAULT_SEED};
use crate::state::{Distributor, StakeRecord, Vault};

/// Drop stake whose backing lock was rage-quit. Anyone may call this; a
/// record that still matches its lock is left alone.
pub fn reconcile_stake(ctx: Context<ReconcileStake>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let distributor_key = ctx.accounts.distributor.key();

    let d = &mut ctx.accounts.distributor;
    d.require_active()?;
    let locked = ctx
        .accounts
        .vault
        .locked_amount(&distributor_key, &d.staking_mint);

    let record = &mut ctx.accounts.stake_record;
    let before = record.staked;
    d.settle(now)?;
    let forfeited = d.reconcile(record, locked)?;

    if record.staked == before {
        msg!("Stake for vault {} is in line with its lock", record.vault);
        return Ok(());
    }

    emit!(StakeReconciled {
        distributor: distributor_key,
        vault: record.vault,
        removed: before - record.staked,
        forfeited,
        total_staked: d.total_staked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReconcileStake<'info> {
    #[account(
        mut,
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
        mut,
        seeds = [STAKE_SEED, distributor.key().as_ref(), vault.key().as_ref()],
        bump = stake_record.bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    #[account(
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Box<Account<'info, Vault>>,
}

#[event]
pub struct StakeReconciled {
    pub distributor: Pubkey,
    pub vault: Pubkey,
    pub removed: u64,
    pub forfeited: u64,
    pub total_staked: u64,
}
