use anchor_lang::prelude::*;

use crate::error::RewardVaultError;
use crate::instructions::halt::SetStatus;
use crate::state::DistributorStatus;

pub fn resume(ctx: Context<SetStatus>) -> Result<()> {
    let d = &mut ctx.accounts.distributor;
    require_keys_eq!(ctx.accounts.admin.key(), d.admin, RewardVaultError::Unauthorized);
    require!(d.status == DistributorStatus::Halted, RewardVaultError::NotHalted);
    d.status = DistributorStatus::Active;
    emit!(DistributorResumed {
        distributor: d.key(),
        admin: d.admin,
    });
    Ok(())
}

#[event]
pub struct DistributorResumed {
    pub distributor: Pubkey,
    pub admin: Pubkey,
}
