use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::VAULT_SEED;
use crate::state::Vault;
use crate::utils::permission::Permission;

/// Redeem a signed Unlock permission. The delegate named in the permission
/// must sign the transaction.
pub fn unlock(ctx: Context<UnlockVault>, permission: Permission) -> Result<()> {
    let vault_key = ctx.accounts.vault.key();
    let delegate = ctx.accounts.delegate.key();
    let mint = ctx.accounts.mint.key();

    let vault = &mut ctx.accounts.vault;
    vault.unlock(vault_key, delegate, mint, &permission)?;

    emit!(Unlocked {
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
pub struct UnlockVault<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    pub mint: Account<'info, Mint>,

    pub delegate: Signer<'info>,
}

#[event]
pub struct Unlocked {
    pub vault: Pubkey,
    pub delegate: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub locked: u64,
    pub nonce: u64,
}
