use anchor_lang::prelude::*;

use crate::constants::MAX_LOCKS;
use crate::error::RewardVaultError;
use crate::utils::permission::{EthAddress, LockAction, Permission, PermissionScope};

/// A delegate's claim against part of the vault's balance of one mint.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockEntry {
    pub delegate: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

impl LockEntry {
    pub const SIZE: usize = 32 + 32 + 8;
}

/// Per-principal custody account. Tokens sit in SPL token accounts whose
/// authority is this PDA; locks only restrict what the owner may move out.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Vault {
    /// Solana authority: creates the vault, withdraws free tokens, rage-quits.
    pub owner: Pubkey,
    /// secp256k1 address that signs lock/unlock permissions off-line.
    pub signer: EthAddress,
    /// Next permission nonce. Bumped by exactly one per redeemed permission.
    pub nonce: u64,
    /// Number of live entries at the front of `locks`.
    pub lock_count: u8,
    /// Active-lock set; every entry below `lock_count` has amount > 0.
    pub locks: [LockEntry; MAX_LOCKS],
    pub bump: u8,
}

impl Vault {
    pub const SIZE: usize =
        32 + // owner
        20 + // signer
        8 +  // nonce
        1 +  // lock_count
        LockEntry::SIZE * MAX_LOCKS + // locks
        1;   // bump

    pub fn new(owner: Pubkey, signer: EthAddress, bump: u8) -> Self {
        Self {
            owner,
            signer,
            nonce: 0,
            lock_count: 0,
            locks: [LockEntry::default(); MAX_LOCKS],
            bump,
        }
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn lock_count(&self) -> u8 {
        self.lock_count
    }

    pub fn active_locks(&self) -> &[LockEntry] {
        &self.locks[..self.lock_count as usize]
    }

    pub fn locked_amount(&self, delegate: &Pubkey, mint: &Pubkey) -> u64 {
        self.position(delegate, mint)
            .map(|i| self.locks[i].amount)
            .unwrap_or(0)
    }

    /// Sum of every delegate's lock on `mint`. Locks are exclusive claims,
    /// so this is the part of the balance the owner cannot withdraw.
    pub fn balance_locked(&self, mint: &Pubkey) -> u64 {
        self.active_locks()
            .iter()
            .filter(|l| l.mint == *mint)
            .fold(0u64, |acc, l| acc.saturating_add(l.amount))
    }

    pub fn free_balance(&self, mint: &Pubkey, held: u64) -> u64 {
        held.saturating_sub(self.balance_locked(mint))
    }

    /// Redeem a Lock permission for `delegate`. `held` is the vault's token balance of `mint`.
    pub fn lock(
        &mut self,
        vault_key: Pubkey,
        delegate: Pubkey,
        mint: Pubkey,
        held: u64,
        permission: &Permission,
    ) -> Result<()> {
        self.verify(vault_key, LockAction::Lock, delegate, mint, permission)?;

        require!(
            self.free_balance(&mint, held) >= permission.amount,
            RewardVaultError::InsufficientFreeBalance
        );
        let current = self.locked_amount(&delegate, &mint);
        let slot = match self.position(&delegate, &mint) {
            Some(i) => i,
            None => {
                require!(
                    (self.lock_count as usize) < MAX_LOCKS,
                    RewardVaultError::LockSetFull
                );
                self.lock_count as usize
            }
        };
        let amount = current
            .checked_add(permission.amount)
            .ok_or(RewardVaultError::MathOverflow)?;
        let next_nonce = self
            .nonce
            .checked_add(1)
            .ok_or(RewardVaultError::MathOverflow)?;

        self.nonce = next_nonce;
        if slot == self.lock_count as usize {
            self.locks[slot] = LockEntry {
                delegate,
                mint,
                amount,
            };
            self.lock_count += 1;
        } else {
            self.locks[slot].amount = amount;
        }
        Ok(())
    }

    /// Redeem an Unlock permission for `delegate`.
    pub fn unlock(
        &mut self,
        vault_key: Pubkey,
        delegate: Pubkey,
        mint: Pubkey,
        permission: &Permission,
    ) -> Result<()> {
        self.verify(vault_key, LockAction::Unlock, delegate, mint, permission)?;

        let idx = self
            .position(&delegate, &mint)
            .ok_or(RewardVaultError::InsufficientLockedBalance)?;
        let current = self.locks[idx].amount;
        require!(
            current >= permission.amount,
            RewardVaultError::InsufficientLockedBalance
        );
        let next_nonce = self
            .nonce
            .checked_add(1)
            .ok_or(RewardVaultError::MathOverflow)?;

        self.nonce = next_nonce;
        let remaining = current - permission.amount;
        if remaining == 0 {
            self.remove(idx);
        } else {
            self.locks[idx].amount = remaining;
        }
        Ok(())
    }

    /// Drop the (delegate, mint) lock without the delegate's consent.
    /// Returns the amount that was locked.
    pub fn rage_quit(&mut self, delegate: &Pubkey, mint: &Pubkey) -> Result<u64> {
        let idx = self
            .position(delegate, mint)
            .ok_or(RewardVaultError::LockNotFound)?;
        let amount = self.locks[idx].amount;
        self.remove(idx);
        Ok(amount)
    }

    fn verify(
        &self,
        vault_key: Pubkey,
        action: LockAction,
        delegate: Pubkey,
        mint: Pubkey,
        permission: &Permission,
    ) -> Result<()> {
        let scope = PermissionScope {
            action,
            vault: vault_key,
            delegate,
            mint,
        };
        permission.verify(&scope, &self.signer, self.nonce, &crate::ID)
    }

    fn position(&self, delegate: &Pubkey, mint: &Pubkey) -> Option<usize> {
        self.active_locks()
            .iter()
            .position(|l| l.delegate == *delegate && l.mint == *mint)
    }

    fn remove(&mut self, idx: usize) {
        let last = self.lock_count as usize - 1;
        self.locks[idx] = self.locks[last];
        self.locks[last] = LockEntry::default();
        self.lock_count -= 1;
    }
}
