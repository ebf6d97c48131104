use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{DISTRIBUTOR_SEED, REWARD_POOL_SEED};
use crate::state::{Distributor, DistributorParams};

pub fn initialize_distributor(
    ctx: Context<InitializeDistributor>,
    params: DistributorParams,
) -> Result<()> {
    let distributor = Distributor::new(
        ctx.accounts.admin.key(),
        ctx.accounts.staking_mint.key(),
        ctx.accounts.reward_mint.key(),
        ctx.accounts.reward_pool.key(),
        &params,
        ctx.bumps.distributor,
        ctx.bumps.reward_pool,
    )?;
    ctx.accounts.distributor.set_inner(distributor);

    let d = &ctx.accounts.distributor;
    emit!(DistributorInitialized {
        distributor: d.key(),
        admin: d.admin,
        staking_mint: d.staking_mint,
        reward_mint: d.reward_mint,
        reward_pool: d.reward_pool,
        min_duration: d.min_duration,
        max_duration: d.max_duration,
        default_duration: d.default_duration,
        stake_limit_numerator: d.stake_limit_numerator,
        stake_limit_denominator: d.stake_limit_denominator,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeDistributor<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Distributor::SIZE,
        seeds = [
            DISTRIBUTOR_SEED,
            admin.key().as_ref(),
            staking_mint.key().as_ref(),
            reward_mint.key().as_ref(),
        ],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    #[account(
        init,
        payer = admin,
        token::mint = reward_mint,
        token::authority = distributor,
        seeds = [REWARD_POOL_SEED, distributor.key().as_ref()],
        bump
    )]
    pub reward_pool: Account<'info, TokenAccount>,

    pub staking_mint: Account<'info, Mint>,

    pub reward_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct DistributorInitialized {
    pub distributor: Pubkey,
    pub admin: Pubkey,
    pub staking_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_pool: Pubkey,
    pub min_duration: i64,
    pub max_duration: i64,
    pub default_duration: i64,
    pub stake_limit_numerator: u64,
    pub stake_limit_denominator: u64,
}
