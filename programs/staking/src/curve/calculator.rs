//! Reward accrual calculations
//!
//! All reward math is integer fixed point: rates are scaled by
//! [`crate::PRECISION`] and results are truncated (floor) at the smallest
//! token unit, so settled outcomes are reproducible bit for bit.

use uint::construct_uint;

use crate::curve::CurveEpoch;
use crate::PRECISION;

construct_uint! {
    pub struct U256(4);
}

/// Accrual denominator: rewards are quoted per 365-day year.
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// Fines are quoted in basis points against this denominator.
pub const FINE_RATE_DENOMINATOR: u64 = 10_000;

/// Concrete struct wrapping the pure reward computations.
///
/// Functions return `Option`; callers map `None` to an [`crate::error::ErrorCode`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RewardCalculator {}

impl RewardCalculator {
    /// Reward earned by `principal` at `rate` over `elapsed` seconds:
    /// `principal * rate * elapsed / (PRECISION * SECONDS_PER_YEAR)`.
    ///
    /// The numerator is computed in 256-bit precision, so the product of
    /// three `u64` inputs can never overflow; `None` only means the floored
    /// result does not fit a `u64`.
    pub fn accrue(principal: u64, rate: u64, elapsed: u64) -> Option<u64> {
        let numerator = U256::from(principal)
            .checked_mul(U256::from(rate))?
            .checked_mul(U256::from(elapsed))?;
        let denominator = U256::from(PRECISION).checked_mul(U256::from(SECONDS_PER_YEAR))?;
        let reward = numerator.checked_div(denominator)?;
        if reward > U256::from(u64::MAX) {
            return None;
        }
        Some(reward.as_u64())
    }

    /// Total reward for `principal` over `(last_settled_at, now]`, split at
    /// every curve revision so each sub-interval accrues under the curve
    /// active during it. No interval is counted twice and none is skipped.
    ///
    /// `epochs` must be ordered by `effective_from`; the oldest retained
    /// revision extends backwards in time.
    pub fn settle(
        principal: u64,
        last_settled_at: i64,
        now: i64,
        epochs: &[CurveEpoch],
    ) -> Option<u64> {
        if principal == 0 || now <= last_settled_at {
            return Some(0);
        }
        let mut total: u64 = 0;
        for (i, epoch) in epochs.iter().enumerate() {
            let start = if i == 0 {
                last_settled_at
            } else {
                last_settled_at.max(epoch.effective_from)
            };
            let end = match epochs.get(i + 1) {
                Some(next) => now.min(next.effective_from),
                None => now,
            };
            if end <= start {
                continue;
            }
            let rate = epoch.curve.rate_for(principal);
            let delta = Self::accrue(principal, rate, (end - start) as u64)?;
            total = total.checked_add(delta)?;
        }
        Some(total)
    }

    /// Fine withheld when principal is withdrawn before the lock elapses:
    /// `amount * fine_bps / 10_000`, floored.
    pub fn early_unstake_fine(amount: u64, fine_bps: u64) -> Option<u64> {
        let fine = (amount as u128)
            .checked_mul(fine_bps as u128)?
            .checked_div(FINE_RATE_DENOMINATOR as u128)?;
        u64::try_from(fine).ok()
    }
}
