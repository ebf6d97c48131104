use anchor_lang::prelude::*;

/// Custom error codes for the reward vault program.
#[error_code]
pub enum RewardVaultError {
    #[msg("Unauthorized: signer is not allowed to perform this action")]
    Unauthorized,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid permission signer address")]
    InvalidSigner,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Permission signature does not recover to the vault signer")]
    BadSignature,

    #[msg("Permission nonce does not match the vault nonce")]
    NonceMismatch,

    #[msg("Permission action does not match the instruction")]
    WrongAction,

    #[msg("Permission was signed for a different vault")]
    WrongVault,

    #[msg("Permission was signed for a different delegate")]
    WrongDelegate,

    #[msg("Permission was signed for a different asset")]
    WrongAsset,

    #[msg("Permission amount does not match the requested amount")]
    PermissionAmountMismatch,

    #[msg("Insufficient free balance in vault")]
    InsufficientFreeBalance,

    #[msg("Insufficient locked balance")]
    InsufficientLockedBalance,

    #[msg("Vault lock set is full")]
    LockSetFull,

    #[msg("Lock not found")]
    LockNotFound,

    #[msg("Stake limit exceeded")]
    StakeLimitExceeded,

    #[msg("Funding duration outside configured bounds")]
    InvalidScheduleDuration,

    #[msg("Distributor is halted")]
    Halted,

    #[msg("Distributor is not halted")]
    NotHalted,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
