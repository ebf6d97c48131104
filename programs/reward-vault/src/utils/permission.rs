//! Off-line signed permissions authorizing one vault lock or unlock.
//!
//! A permission is an EIP-712 shaped message signed with a recoverable
//! secp256k1 key. The domain binds the signature to this program, the
//! cluster and the vault account, so a permission can only be redeemed once,
//! by one delegate, against one vault.

use anchor_lang::prelude::*;
use solana_keccak_hasher as keccak;
use solana_secp256k1_recover::secp256k1_recover;

use crate::constants::{PERMISSION_CLUSTER, PERMISSION_DOMAIN_NAME, PERMISSION_DOMAIN_VERSION};
use crate::error::RewardVaultError;

/// 20-byte secp256k1 signer address (last 20 bytes of keccak256(pubkey)).
pub type EthAddress = [u8; 20];

const DOMAIN_TYPE: &[u8] =
    b"PermissionDomain(string name,string version,string cluster,bytes32 program,bytes32 vault)";
const LOCK_TYPE: &[u8] =
    b"Lock(bytes32 vault,bytes32 delegate,bytes32 mint,uint256 amount,uint256 nonce)";
const UNLOCK_TYPE: &[u8] =
    b"Unlock(bytes32 vault,bytes32 delegate,bytes32 mint,uint256 amount,uint256 nonce)";

/// secp256k1 group order / 2. Signatures with a higher `s` are rejected.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockAction {
    Lock,
    Unlock,
}

impl LockAction {
    fn type_hash(self) -> [u8; 32] {
        match self {
            LockAction::Lock => keccak::hash(LOCK_TYPE).to_bytes(),
            LockAction::Unlock => keccak::hash(UNLOCK_TYPE).to_bytes(),
        }
    }
}

/// Signed authorization for `delegate` to lock or unlock `amount` of `mint` in `vault`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Permission {
    pub action: LockAction,
    pub vault: Pubkey,
    pub delegate: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub nonce: u64,
    /// r (32) || s (32) || v (1), v in {0, 1, 27, 28}.
    pub signature: [u8; 65],
}

/// What the redeeming call expects the permission to cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermissionScope {
    pub action: LockAction,
    pub vault: Pubkey,
    pub delegate: Pubkey,
    pub mint: Pubkey,
}

impl Permission {
    pub fn struct_hash(&self) -> [u8; 32] {
        keccak::hashv(&[
            &self.action.type_hash(),
            self.vault.as_ref(),
            self.delegate.as_ref(),
            self.mint.as_ref(),
            &u256_be(self.amount),
            &u256_be(self.nonce),
        ])
        .to_bytes()
    }

    /// Message hash the vault signer signs.
    pub fn digest(&self, program_id: &Pubkey) -> [u8; 32] {
        keccak::hashv(&[
            &[0x19u8, 0x01][..],
            &domain_separator(program_id, &self.vault),
            &self.struct_hash(),
        ])
        .to_bytes()
    }

    pub fn recover_signer(&self, program_id: &Pubkey) -> Result<EthAddress> {
        let recovery_id = match self.signature[64] {
            v @ (0 | 1) => v,
            v @ (27 | 28) => v - 27,
            _ => return err!(RewardVaultError::BadSignature),
        };
        require!(
            &self.signature[32..64] <= &SECP256K1_HALF_ORDER[..],
            RewardVaultError::BadSignature
        );

        let pubkey = secp256k1_recover(
            &self.digest(program_id),
            recovery_id,
            &self.signature[..64],
        )
        .map_err(|_| error!(RewardVaultError::BadSignature))?;
        Ok(eth_address(&pubkey.to_bytes()))
    }

    /// Checks scope, amount, nonce and signer. Stateless; the caller consumes the nonce.
    pub fn verify(
        &self,
        scope: &PermissionScope,
        signer: &EthAddress,
        nonce: u64,
        program_id: &Pubkey,
    ) -> Result<()> {
        require!(self.action == scope.action, RewardVaultError::WrongAction);
        require_keys_eq!(self.vault, scope.vault, RewardVaultError::WrongVault);
        require_keys_eq!(self.delegate, scope.delegate, RewardVaultError::WrongDelegate);
        require_keys_eq!(self.mint, scope.mint, RewardVaultError::WrongAsset);
        require!(self.amount > 0, RewardVaultError::ZeroAmount);
        // Strict equality: no gaps, no reuse.
        require!(self.nonce == nonce, RewardVaultError::NonceMismatch);

        let recovered = self.recover_signer(program_id)?;
        require!(recovered == *signer, RewardVaultError::BadSignature);
        Ok(())
    }
}

pub fn domain_separator(program_id: &Pubkey, vault: &Pubkey) -> [u8; 32] {
    keccak::hashv(&[
        &keccak::hash(DOMAIN_TYPE).to_bytes(),
        &keccak::hash(PERMISSION_DOMAIN_NAME).to_bytes(),
        &keccak::hash(PERMISSION_DOMAIN_VERSION).to_bytes(),
        &keccak::hash(PERMISSION_CLUSTER).to_bytes(),
        program_id.as_ref(),
        vault.as_ref(),
    ])
    .to_bytes()
}

/// Address of an uncompressed public key (x || y, without the 0x04 prefix).
pub fn eth_address(pubkey: &[u8; 64]) -> EthAddress {
    let hash = keccak::hash(pubkey).to_bytes();
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

fn u256_be(v: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&v.to_be_bytes());
    out
}
