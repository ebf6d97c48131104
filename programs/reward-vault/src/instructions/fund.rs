use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISTRIBUTOR_SEED, REWARD_POOL_SEED};
use crate::error::RewardVaultError;
use crate::state::Distributor;

/// Deposit reward and restart the live schedule at `now`. Falls back to the
/// configured default duration when `duration` is `None`.
pub fn fund(ctx: Context<Fund>, amount: u64, duration: Option<i64>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let d = &mut ctx.accounts.distributor;
    require_keys_eq!(ctx.accounts.admin.key(), d.admin, RewardVaultError::Unauthorized);
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        d.reward_mint,
        RewardVaultError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        RewardVaultError::InvalidTokenAccount
    );

    let schedule = d.fund(amount, duration, now)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.reward_pool.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(RewardFunded {
        distributor: d.key(),
        amount,
        schedule_amount: schedule.amount,
        duration: schedule.duration,
        start: schedule.start,
        total_funded: d.total_funded,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Fund<'info> {
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
        seeds = [REWARD_POOL_SEED, distributor.key().as_ref()],
        bump = distributor.pool_bump
    )]
    pub reward_pool: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardFunded {
    pub distributor: Pubkey,
    pub amount: u64,
    /// Deposit plus the carried-over unreleased reward.
    pub schedule_amount: u64,
    pub duration: i64,
    pub start: i64,
    pub total_funded: u64,
}
