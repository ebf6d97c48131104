use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISTRIBUTOR_SEED, REWARD_POOL_SEED, STAKE_SEED, VAULT_SEED};
use crate::error::RewardVaultError;
use crate::state::{Distributor, StakeRecord, StakeTarget, Vault};
use crate::utils::permission::Permission;

/// Unlock `amount` of stake and pay the vault owner its whole earned reward
/// from the pool.
pub fn unstake_and_claim(
    ctx: Context<UnstakeAndClaim>,
    amount: u64,
    permission: Permission,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let distributor_key = ctx.accounts.distributor.key();
    let vault_key = ctx.accounts.vault.key();

    let d = &mut ctx.accounts.distributor;
    let record = &mut ctx.accounts.stake_record;
    let reward = d.unstake_and_claim(
        distributor_key,
        record,
        StakeTarget {
            vault: &mut ctx.accounts.vault,
            key: vault_key,
        },
        amount,
        &permission,
        now,
    )?;

    let remaining = record.staked;
    let total_staked = d.total_staked;

    if reward > 0 {
        let d = &ctx.accounts.distributor;
        let signer_seeds: &[&[&[u8]]] = &[&[
            DISTRIBUTOR_SEED,
            d.admin.as_ref(),
            d.staking_mint.as_ref(),
            d.reward_mint.as_ref(),
            &[d.bump],
        ]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.reward_pool.to_account_info(),
                    to: ctx.accounts.recipient_token_account.to_account_info(),
                    authority: d.to_account_info(),
                },
                signer_seeds,
            ),
            reward,
        )?;
    }

    emit!(UnstakedAndClaimed {
        distributor: distributor_key,
        vault: vault_key,
        amount,
        reward,
        vault_staked: remaining,
        total_staked,
        nonce: ctx.accounts.vault.nonce,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UnstakeAndClaim<'info> {
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
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, distributor.key().as_ref()],
        bump = distributor.pool_bump
    )]
    pub reward_pool: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == distributor.reward_mint @ RewardVaultError::InvalidTokenMint,
        constraint = recipient_token_account.owner == vault.owner @ RewardVaultError::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct UnstakedAndClaimed {
    pub distributor: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub reward: u64,
    pub vault_staked: u64,
    pub total_staked: u64,
    pub nonce: u64,
}
