use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::RewardVaultError;
use crate::state::Vault;

/// Owner-only escape hatch: drop a delegate's lock without its consent.
/// The delegate's own bookkeeping is not touched here; distributors
/// reconcile against the vault on their next call.
pub fn rage_quit(ctx: Context<RageQuit>, delegate: Pubkey, mint: Pubkey) -> Result<()> {
    let vault_key = ctx.accounts.vault.key();
    let vault = &mut ctx.accounts.vault;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        vault.owner,
        RewardVaultError::Unauthorized
    );

    let released = vault.rage_quit(&delegate, &mint)?;

    emit!(LockRageQuit {
        vault: vault_key,
        delegate,
        mint,
        released,
        lock_count: vault.lock_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RageQuit<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct LockRageQuit {
    pub vault: Pubkey,
    pub delegate: Pubkey,
    pub mint: Pubkey,
    pub released: u64,
    pub lock_count: u8,
}
