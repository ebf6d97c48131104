//! Property tests over the reward accumulator and the vault lock set.
//!
//! Run with: cargo test -p reward-vault --test properties

mod common;

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use common::{params, Pool, Staker, TestSigner, T0};
use proptest::prelude::*;
use reward_vault::state::Vault;
use reward_vault::utils::permission::LockAction;

fn stakes() -> impl Strategy<Value = Vec<(u64, i64)>> {
    prop::collection::vec((1u64..10_000, 0i64..2_000), 1..5)
}

/// Stake amounts plus a random order to exit in.
fn stakes_with_exit_order() -> impl Strategy<Value = (Vec<u64>, Vec<usize>)> {
    prop::collection::vec(1u64..10_000, 2..6).prop_flat_map(|amounts| {
        let order = Just((0..amounts.len()).collect::<Vec<usize>>()).prop_shuffle();
        (Just(amounts), order)
    })
}

/// Stakes every amount at `T0`, then unstakes in `order` at `exit`.
/// Rewards come back indexed by principal.
fn rewards_for_exit_order(
    funded: u64,
    duration: i64,
    amounts: &[u64],
    order: &[usize],
    exit: i64,
) -> Vec<u64> {
    let mut pool = Pool::new(params(1_000_000_000, 1));
    pool.state.fund(funded, Some(duration), T0).unwrap();
    let mut stakers: Vec<Staker> = amounts
        .iter()
        .enumerate()
        .map(|(i, _)| Staker::new(i as u8 + 1, u64::MAX))
        .collect();
    for (s, amount) in stakers.iter_mut().zip(amounts) {
        s.stake(&mut pool, *amount, T0).unwrap();
    }
    let mut rewards = vec![0u64; amounts.len()];
    for &i in order {
        rewards[i] = stakers[i].unstake(&mut pool, amounts[i], exit).unwrap();
    }
    rewards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Claims never exceed what was funded, and a schedule that runs out
    /// with someone still staked is paid out to within rounding.
    #[test]
    fn claims_are_bounded_by_funding(
        funded in 1u64..1_000_000_000_000,
        duration in 1i64..1_000,
        mut entries in stakes(),
    ) {
        let mut pool = Pool::new(params(1_000_000_000, 1));
        pool.state.fund(funded, Some(duration), T0).unwrap();

        let mut stakers: Vec<Staker> = entries
            .iter()
            .enumerate()
            .map(|(i, _)| Staker::new(i as u8 + 1, u64::MAX))
            .collect();
        for (s, (amount, _)) in stakers.iter_mut().zip(&entries) {
            s.stake(&mut pool, *amount, T0).unwrap();
        }

        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by_key(|&i| entries[i].1);
        let mut claimed = 0u64;
        for i in order {
            let (amount, offset) = entries[i];
            claimed += stakers[i].unstake(&mut pool, amount, T0 + offset).unwrap();
        }

        prop_assert!(claimed <= funded);
        prop_assert_eq!(claimed, pool.state.total_claimed);
        prop_assert_eq!(pool.state.total_staked, 0);

        entries.sort_by_key(|e| e.1);
        let last = entries.last().map(|e| e.1).unwrap_or(0);
        if last >= duration {
            prop_assert!(claimed + entries.len() as u64 >= funded,
                "claimed {} of {} with {} stakers", claimed, funded, entries.len());
        }
    }

    /// Stakers entering at the same instant earn the same regardless of the
    /// order their transactions land in.
    #[test]
    fn same_instant_stake_order_does_not_matter(
        funded in 1u64..1_000_000_000,
        duration in 1i64..1_000,
        amounts in prop::collection::vec(1u64..10_000, 2..5),
        exit in 0i64..2_000,
    ) {
        let run = |reversed: bool| -> Vec<u64> {
            let mut pool = Pool::new(params(1_000_000_000, 1));
            pool.state.fund(funded, Some(duration), T0).unwrap();
            let mut stakers: Vec<Staker> = amounts
                .iter()
                .enumerate()
                .map(|(i, _)| Staker::new(i as u8 + 1, u64::MAX))
                .collect();
            let mut idx: Vec<usize> = (0..amounts.len()).collect();
            if reversed {
                idx.reverse();
            }
            for &i in &idx {
                stakers[i].stake(&mut pool, amounts[i], T0).unwrap();
            }
            (0..amounts.len())
                .map(|i| stakers[i].unstake(&mut pool, amounts[i], T0 + exit).unwrap())
                .collect()
        };
        prop_assert_eq!(run(false), run(true));
    }

    /// Once the schedule has run out, the order principals exit in does not
    /// change what any of them receives, and each share is the pro-rata
    /// floor to within one unit.
    #[test]
    fn exit_order_after_schedule_end_does_not_matter(
        funded in 1u64..1_000_000_000,
        duration in 1i64..1_000,
        after in 0i64..1_000,
        (amounts, order) in stakes_with_exit_order(),
    ) {
        let exit = T0 + duration + after;
        let identity: Vec<usize> = (0..amounts.len()).collect();
        let in_order = rewards_for_exit_order(funded, duration, &amounts, &identity, exit);
        let shuffled = rewards_for_exit_order(funded, duration, &amounts, &order, exit);
        prop_assert_eq!(&in_order, &shuffled);

        let total: u64 = amounts.iter().sum();
        for (reward, amount) in in_order.iter().zip(&amounts) {
            let share = (funded as u128 * *amount as u128 / total as u128) as u64;
            prop_assert!(*reward <= share && *reward + 1 >= share,
                "reward {} vs pro-rata {}", reward, share);
        }
    }

    /// Random lock/unlock traffic from several delegates never locks more
    /// than the vault holds, and the nonce counts accepted permissions.
    #[test]
    fn lock_set_tracks_a_simple_model(
        held in 1u64..1_000,
        ops in prop::collection::vec((0usize..3, any::<bool>(), 1u64..400), 1..24),
    ) {
        let signer = TestSigner::new(42);
        let vault_key = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let delegates = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
        let mut vault = Vault::new(Pubkey::new_unique(), signer.address, 250);
        let mut model: HashMap<usize, u64> = HashMap::new();

        for (d, is_lock, amount) in ops {
            let current = model.get(&d).copied().unwrap_or(0);
            let locked: u64 = model.values().sum();
            let action = if is_lock { LockAction::Lock } else { LockAction::Unlock };
            let p = signer.sign(action, vault_key, delegates[d], mint, amount, vault.nonce());
            let nonce = vault.nonce();

            let result = if is_lock {
                vault.lock(vault_key, delegates[d], mint, held, &p)
            } else {
                vault.unlock(vault_key, delegates[d], mint, &p)
            };
            let expected_ok = if is_lock {
                held - locked >= amount
            } else {
                current >= amount
            };
            prop_assert_eq!(result.is_ok(), expected_ok);

            if expected_ok {
                let next = if is_lock { current + amount } else { current - amount };
                if next == 0 {
                    model.remove(&d);
                } else {
                    model.insert(d, next);
                }
                prop_assert_eq!(vault.nonce(), nonce + 1);
            } else {
                prop_assert_eq!(vault.nonce(), nonce);
            }

            let total: u64 = model.values().sum();
            prop_assert!(total <= held);
            prop_assert_eq!(vault.balance_locked(&mint), total);
            prop_assert_eq!(vault.free_balance(&mint, held), held - total);
            prop_assert_eq!(vault.lock_count() as usize, model.len());
            for (i, delegate) in delegates.iter().enumerate() {
                prop_assert_eq!(
                    vault.locked_amount(delegate, &mint),
                    model.get(&i).copied().unwrap_or(0)
                );
            }
        }
    }
}
