//! Host-side signing helpers, compiled into the unit tests and included by
//! the integration tests under `tests/common`. The parent module provides
//! `utils` and `ID` in both cases.

use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;
use libsecp256k1::{Message, PublicKey, SecretKey};

use super::utils::permission::{eth_address, EthAddress, LockAction, Permission};

/// secp256k1 key standing in for a principal's off-line wallet.
pub struct TestSigner {
    secret: SecretKey,
    pub address: EthAddress,
}

impl TestSigner {
    pub fn new(seed: u8) -> Self {
        let mut bytes = [0x11u8; 32];
        bytes[31] = seed;
        let secret = SecretKey::parse(&bytes).expect("valid secret key");
        let serialized = PublicKey::from_secret_key(&secret).serialize();
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&serialized[1..]);
        Self {
            secret,
            address: eth_address(&raw),
        }
    }

    pub fn sign(
        &self,
        action: LockAction,
        vault: Pubkey,
        delegate: Pubkey,
        mint: Pubkey,
        amount: u64,
        nonce: u64,
    ) -> Permission {
        let mut permission = Permission {
            action,
            vault,
            delegate,
            mint,
            amount,
            nonce,
            signature: [0u8; 65],
        };
        let digest = permission.digest(&super::ID);
        let (sig, recovery_id) = libsecp256k1::sign(&Message::parse(&digest), &self.secret);
        permission.signature[..64].copy_from_slice(&sig.serialize());
        permission.signature[64] = recovery_id.serialize() + 27;
        permission
    }
}

pub fn error_code(err: &Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        other => panic!("expected an anchor error, got {other:?}"),
    }
}
