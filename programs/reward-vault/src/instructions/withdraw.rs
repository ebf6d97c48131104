use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::RewardVaultError;
use crate::state::Vault;

/// Move unlocked tokens out of the vault.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, RewardVaultError::ZeroAmount);

    let vault = &ctx.accounts.vault;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        vault.owner,
        RewardVaultError::Unauthorized
    );

    let source = &ctx.accounts.vault_token_account;
    require_keys_eq!(
        ctx.accounts.destination.mint,
        source.mint,
        RewardVaultError::InvalidTokenMint
    );
    require!(
        vault.free_balance(&source.mint, source.amount) >= amount,
        RewardVaultError::InsufficientFreeBalance
    );

    let owner = vault.owner;
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, owner.as_ref(), &[vault.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: source.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: vault.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.vault_token_account.reload()?;
    let remaining = ctx.accounts.vault_token_account.amount;

    emit!(VaultWithdrawn {
        vault: ctx.accounts.vault.key(),
        mint: ctx.accounts.vault_token_account.mint,
        amount,
        remaining,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        mut,
        constraint = vault_token_account.owner == vault.key() @ RewardVaultError::InvalidTokenAccount,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VaultWithdrawn {
    pub vault: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}
