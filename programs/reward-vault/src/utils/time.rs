//! Linear release arithmetic over unix-second timestamps.
//! - elapsed is clamped to [0, duration]
//! - released(t) = amount * elapsed(t) / duration, rounded down
//! - released is monotonic in t and saturates at amount once t >= start + duration

use crate::error::RewardVaultError;

/// Seconds of `[start, start + duration)` that have passed at `now`.
pub fn elapsed_within(now_ts: i64, start_ts: i64, duration: i64) -> i64 {
    if duration <= 0 || now_ts <= start_ts {
        return 0;
    }
    now_ts.saturating_sub(start_ts).min(duration)
}

/// End timestamp of a window, inclusive at the boundary.
pub fn window_end(start_ts: i64, duration: i64) -> Result<i64, RewardVaultError> {
    start_ts
        .checked_add(duration.max(0))
        .ok_or(RewardVaultError::MathOverflow)
}

/// Portion of `amount` released after `elapsed` seconds of `duration`.
pub fn linear_release(amount: u64, elapsed: i64, duration: i64) -> Result<u64, RewardVaultError> {
    if duration <= 0 {
        return Ok(0);
    }
    let elapsed = elapsed.clamp(0, duration);
    if elapsed == duration {
        return Ok(amount);
    }
    let v = (amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(RewardVaultError::MathOverflow)?
        / (duration as u128);
    u64::try_from(v).map_err(|_| RewardVaultError::MathOverflow)
}

/// Whole days, used by clients and tests to express durations.
pub const fn days(n: i64) -> i64 {
    n * crate::constants::SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_767_225_600; // 2026-01-01 00:00:00 UTC

    #[test]
    fn elapsed_is_zero_before_and_at_start() {
        assert_eq!(elapsed_within(START - 1, START, days(40)), 0);
        assert_eq!(elapsed_within(START, START, days(40)), 0);
        assert_eq!(elapsed_within(START + 1, START, days(40)), 1);
    }

    #[test]
    fn elapsed_saturates_at_duration() {
        assert_eq!(elapsed_within(START + days(41), START, days(40)), days(40));
        assert_eq!(window_end(START, days(40)).unwrap(), START + days(40));
        // zero-length windows never release
        assert_eq!(elapsed_within(START + 10, START, 0), 0);
    }

    #[test]
    fn release_is_linear_and_saturates() {
        let amount = 1_000_000;
        assert_eq!(linear_release(amount, 0, days(40)).unwrap(), 0);
        assert_eq!(linear_release(amount, days(30), days(40)).unwrap(), 750_000);
        assert_eq!(linear_release(amount, days(40), days(40)).unwrap(), amount);
        assert_eq!(linear_release(amount, days(80), days(40)).unwrap(), amount);
        // rounds down
        assert_eq!(linear_release(10, 1, 3).unwrap(), 3);
    }

    #[test]
    fn release_does_not_overflow_on_large_amounts() {
        let v = linear_release(u64::MAX, days(20), days(40)).unwrap();
        assert_eq!(v, u64::MAX / 2);
    }
}
