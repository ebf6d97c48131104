use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::RewardVaultError;
use crate::state::Vault;

pub fn create_vault(ctx: Context<CreateVault>, signer: [u8; 20]) -> Result<()> {
    require!(signer != [0u8; 20], RewardVaultError::InvalidSigner);

    let vault_key = ctx.accounts.vault.key();
    let vault = &mut ctx.accounts.vault;

    // One vault per principal; repeated calls leave it untouched.
    if vault.owner != Pubkey::default() {
        msg!("Vault {} already exists", vault_key);
        return Ok(());
    }

    vault.set_inner(Vault::new(
        ctx.accounts.owner.key(),
        signer,
        ctx.bumps.vault,
    ));

    emit!(VaultCreated {
        vault: vault_key,
        owner: vault.owner,
        signer,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateVault<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Vault::SIZE,
        seeds = [VAULT_SEED, owner.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VaultCreated {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub signer: [u8; 20],
}
