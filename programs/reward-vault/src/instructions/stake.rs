use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{DISTRIBUTOR_SEED, STAKE_SEED, VAULT_SEED};
use crate::error::RewardVaultError;
use crate::state::{Distributor, StakeRecord, StakeTarget, Vault};
use crate::utils::permission::Permission;

/// Lock `amount` of the staking mint in the vault for this distributor and
/// add it to the stake registry. Anyone may submit a signed permission.
pub fn stake(ctx: Context<Stake>, amount: u64, permission: Permission) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let distributor_key = ctx.accounts.distributor.key();
    let vault_key = ctx.accounts.vault.key();
    let held = ctx.accounts.vault_token_account.amount;

    let record = &mut ctx.accounts.stake_record;
    if record.vault == Pubkey::default() {
        record.distributor = distributor_key;
        record.vault = vault_key;
        record.bump = ctx.bumps.stake_record;
    }

    let d = &mut ctx.accounts.distributor;
    d.stake(
        distributor_key,
        record,
        StakeTarget {
            vault: &mut ctx.accounts.vault,
            key: vault_key,
        },
        held,
        amount,
        &permission,
        now,
    )?;

    emit!(Staked {
        distributor: distributor_key,
        vault: vault_key,
        amount,
        vault_staked: record.staked,
        total_staked: d.total_staked,
        nonce: ctx.accounts.vault.nonce,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Stake<'info> {
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
        init_if_needed,
        payer = payer,
        space = 8 + StakeRecord::SIZE,
        seeds = [STAKE_SEED, distributor.key().as_ref(), vault.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        constraint = vault_token_account.owner == vault.key() @ RewardVaultError::InvalidTokenAccount,
        constraint = vault_token_account.mint == distributor.staking_mint @ RewardVaultError::InvalidTokenMint,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Staked {
    pub distributor: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub vault_staked: u64,
    pub total_staked: u64,
    pub nonce: u64,
}
