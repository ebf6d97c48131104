use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::VAULT_SEED;
use crate::error::RewardVaultError;
use crate::state::Vault;
use crate::utils::permission::Permission;

/// Redeem a signed Lock permission. The delegate named in the permission
/// must sign the transaction.
pub fn lock(ctx: Context<LockVault>, permission: Permission) -> Result<()> {
    let vault_key = ctx.accounts.vault.key();
    let delegate = ctx.accounts.delegate.key();
    let mint = ctx.accounts.vault_token_account.mint;
    let held = ctx.accounts.vault_token_account.amount;

    let vault = &mut ctx.accounts.vault;
    vault.lock(vault_key, delegate, mint, held, &permission)?;

    emit!(Locked {
        vault: vault_key,
        delegate,
        mint,
        amount: permission.amount,
        locked: vault.locked_amount(&delegate, &mint),
        nonce: vault.nonce,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct LockVault<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        constraint = vault_token_account.owner == vault.key() @ RewardVaultError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub delegate: Signer<'info>,
}

#[event]
pub struct Locked {
    pub vault: Pubkey,
    pub delegate: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub locked: u64,
    pub nonce: u64,
}
