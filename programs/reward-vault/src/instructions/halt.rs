use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::error::RewardVaultError;
use crate::state::{Distributor, DistributorStatus};

pub fn halt(ctx: Context<SetStatus>) -> Result<()> {
    let d = &mut ctx.accounts.distributor;
    require_keys_eq!(ctx.accounts.admin.key(), d.admin, RewardVaultError::Unauthorized);
    require!(d.status == DistributorStatus::Active, RewardVaultError::Halted);
    d.status = DistributorStatus::Halted;
    emit!(DistributorHalted {
        distributor: d.key(),
        admin: d.admin,
    });
    Ok(())
}

/// Shared by `halt` and `resume`.
#[derive(Accounts)]
pub struct SetStatus<'info> {
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
    pub admin: Signer<'info>,
}

#[event]
pub struct DistributorHalted {
    pub distributor: Pubkey,
    pub admin: Pubkey,
}
