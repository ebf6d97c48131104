//! Shared fixtures for the host-side scenario tests.
#![allow(dead_code)]

use anchor_lang::prelude::{Pubkey, Result};

use reward_vault::state::{Distributor, DistributorParams, StakeRecord, StakeTarget, Vault};
use reward_vault::utils::permission::{LockAction, Permission};
use reward_vault::utils::time::days;
use reward_vault::{utils, ID};

#[path = "../../src/test_utils.rs"]
mod test_utils;

pub use test_utils::{error_code, TestSigner};

pub const T0: i64 = 1_767_225_600;
pub const DAY: i64 = 86_400;

pub fn params(numerator: u64, denominator: u64) -> DistributorParams {
    DistributorParams {
        min_duration: 1,
        max_duration: days(1_000),
        default_duration: days(28),
        stake_limit_numerator: numerator,
        stake_limit_denominator: denominator,
    }
}

/// A distributor together with the PDA key it signs permissions for.
pub struct Pool {
    pub key: Pubkey,
    pub state: Distributor,
}

impl Pool {
    pub fn new(params: DistributorParams) -> Self {
        let state = Distributor::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            &params,
            255,
            254,
        )
        .expect("valid params");
        Self {
            key: Pubkey::new_unique(),
            state,
        }
    }

    pub fn staking_mint(&self) -> Pubkey {
        self.state.staking_mint
    }
}

/// One principal: a vault holding `held` staking tokens and its stake record.
pub struct Staker {
    pub signer: TestSigner,
    pub key: Pubkey,
    pub vault: Vault,
    pub record: StakeRecord,
    pub held: u64,
}

impl Staker {
    pub fn new(seed: u8, held: u64) -> Self {
        let signer = TestSigner::new(seed);
        let vault = Vault::new(Pubkey::new_unique(), signer.address, 250);
        Self {
            signer,
            key: Pubkey::new_unique(),
            vault,
            record: StakeRecord::default(),
            held,
        }
    }

    fn permission(&self, pool: &Pool, action: LockAction, amount: u64) -> Permission {
        self.signer.sign(
            action,
            self.key,
            pool.key,
            pool.staking_mint(),
            amount,
            self.vault.nonce(),
        )
    }

    pub fn stake(&mut self, pool: &mut Pool, amount: u64, now: i64) -> Result<()> {
        let p = self.permission(pool, LockAction::Lock, amount);
        let target = StakeTarget {
            vault: &mut self.vault,
            key: self.key,
        };
        pool.state
            .stake(pool.key, &mut self.record, target, self.held, amount, &p, now)
    }

    pub fn unstake(&mut self, pool: &mut Pool, amount: u64, now: i64) -> Result<u64> {
        let p = self.permission(pool, LockAction::Unlock, amount);
        let target = StakeTarget {
            vault: &mut self.vault,
            key: self.key,
        };
        pool.state
            .unstake_and_claim(pool.key, &mut self.record, target, amount, &p, now)
    }

    pub fn locked(&self, pool: &Pool) -> u64 {
        self.vault.balance_locked(&pool.staking_mint())
    }
}
