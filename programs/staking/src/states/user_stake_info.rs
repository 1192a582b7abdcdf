use anchor_lang::prelude::*;

use crate::curve::{CurveEpoch, RewardCalculator};
use crate::error::ErrorCode;

pub const USER_STAKE_INFO_SEED: &str = "user_stake_info";

/// Per-staker bookkeeping record, one PDA per owner.
///
/// `last_settled_at` is the watermark up to which rewards have been folded
/// into `accrued_unclaimed`; it only ever moves forward, so no interval is
/// accrued twice.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct UserStakeInfo {
    pub bump: u8,
    pub owner: Pubkey,
    /// Currently staked amount, excluding unclaimed rewards.
    pub principal: u64,
    /// Timestamp of the first stake of the current lifecycle.
    pub staked_at: i64,
    /// Rewards are settled through this timestamp.
    pub last_settled_at: i64,
    /// Rewards settled but not yet paid out.
    pub accrued_unclaimed: u64,
    /// When the pending unstake was requested; 0 while none is pending.
    pub unstake_requested_at: i64,
    /// Lifetime rewards paid to this staker.
    pub total_claimed: u64,
}

impl UserStakeInfo {
    /// Folds rewards earned since `last_settled_at` into the record and
    /// advances the watermark to `now`. Returns the newly settled amount.
    pub fn settle(&mut self, epochs: &[CurveEpoch], now: i64) -> Result<u64> {
        let delta = RewardCalculator::settle(self.principal, self.last_settled_at, now, epochs)
            .ok_or(ErrorCode::MathOverflow)?;
        if now > self.last_settled_at {
            self.last_settled_at = now;
        }
        self.accrued_unclaimed = self
            .accrued_unclaimed
            .checked_add(delta)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(delta)
    }

    /// The unclaimed rewards this record would hold if settled at `now`,
    /// without mutating anything. Backs the read-only details view.
    pub fn settled_preview(&self, epochs: &[CurveEpoch], now: i64) -> Result<u64> {
        let delta = RewardCalculator::settle(self.principal, self.last_settled_at, now, epochs)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(self
            .accrued_unclaimed
            .checked_add(delta)
            .ok_or(ErrorCode::MathOverflow)?)
    }

    /// Claiming is gated against the first-stake timestamp only; once the
    /// unlock period has elapsed, later claims pass this check trivially.
    pub fn is_claim_locked(&self, now: i64, claim_unlock_period: i64) -> bool {
        now < self.staked_at.saturating_add(claim_unlock_period)
    }

    pub fn is_lock_elapsed(&self, now: i64, stake_lock_period: i64) -> bool {
        now >= self.staked_at.saturating_add(stake_lock_period)
    }

    pub fn has_pending_request(&self) -> bool {
        self.unstake_requested_at != 0
    }

    pub fn is_request_expired(&self, now: i64, unstake_extend_period: i64) -> bool {
        now > self
            .unstake_requested_at
            .saturating_add(unstake_extend_period)
    }

    /// Ends the lifecycle once nothing is staked or owed, so a later stake
    /// starts fresh with a new first-stake timestamp.
    pub fn clear_if_empty(&mut self) {
        if self.principal == 0 && self.accrued_unclaimed == 0 {
            self.staked_at = 0;
            self.last_settled_at = 0;
            self.unstake_requested_at = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::RateCurve;
    use crate::curve::SECONDS_PER_YEAR;

    const UNIT: u64 = 1_000_000_000;

    fn epochs() -> Vec<CurveEpoch> {
        vec![CurveEpoch {
            effective_from: 0,
            curve: RateCurve {
                min_apy: (crate::PRECISION as u64 / 100),
                min_amount: 1_000 * UNIT,
                max_apy: 9 * (crate::PRECISION as u64 / 100),
                max_amount: 100_000 * UNIT,
            },
        }]
    }

    fn staked_record() -> UserStakeInfo {
        UserStakeInfo {
            principal: 1_000 * UNIT,
            staked_at: 100,
            last_settled_at: 100,
            ..Default::default()
        }
    }

    #[test]
    fn settle_advances_watermark_and_accumulates() {
        let mut record = staked_record();
        let now = 100 + SECONDS_PER_YEAR as i64;
        let delta = record.settle(&epochs(), now).unwrap();
        assert_eq!(delta, 10 * UNIT);
        assert_eq!(record.accrued_unclaimed, 10 * UNIT);
        assert_eq!(record.last_settled_at, now);

        // settling again at the same instant adds nothing
        assert_eq!(record.settle(&epochs(), now).unwrap(), 0);
        assert_eq!(record.accrued_unclaimed, 10 * UNIT);
    }

    #[test]
    fn settle_never_moves_watermark_backwards() {
        let mut record = staked_record();
        record.last_settled_at = 1_000;
        assert_eq!(record.settle(&epochs(), 500).unwrap(), 0);
        assert_eq!(record.last_settled_at, 1_000);
    }

    #[test]
    fn preview_matches_settle_without_mutating() {
        let record = staked_record();
        let now = 100 + SECONDS_PER_YEAR as i64;
        let preview = record.settled_preview(&epochs(), now).unwrap();

        let mut settled = staked_record();
        settled.settle(&epochs(), now).unwrap();
        assert_eq!(preview, settled.accrued_unclaimed);
        // the original record is untouched
        assert_eq!(record.accrued_unclaimed, 0);
        assert_eq!(record.last_settled_at, 100);
    }

    #[test]
    fn claim_gate_keys_off_first_stake_timestamp() {
        let record = staked_record();
        let unlock = 14 * 86_400;
        assert!(record.is_claim_locked(100, unlock));
        assert!(record.is_claim_locked(100 + unlock - 1, unlock));
        assert!(!record.is_claim_locked(100 + unlock, unlock));
        // once past the unlock, every later instant passes as well
        assert!(!record.is_claim_locked(100 + 10 * unlock, unlock));
    }

    #[test]
    fn unstake_request_window() {
        let mut record = staked_record();
        assert!(!record.has_pending_request());
        record.unstake_requested_at = 1_000;
        let window = 14 * 86_400;
        assert!(record.has_pending_request());
        assert!(!record.is_request_expired(1_000 + window, window));
        assert!(record.is_request_expired(1_000 + window + 1, window));
    }

    #[test]
    fn clear_if_empty_resets_only_drained_records() {
        let mut record = staked_record();
        record.unstake_requested_at = 500;
        record.clear_if_empty();
        // still holds principal: nothing is reset
        assert_eq!(record.staked_at, 100);
        assert_eq!(record.unstake_requested_at, 500);

        record.principal = 0;
        record.accrued_unclaimed = 5;
        record.clear_if_empty();
        assert_eq!(record.staked_at, 100);

        record.accrued_unclaimed = 0;
        record.clear_if_empty();
        assert_eq!(record.staked_at, 0);
        assert_eq!(record.last_settled_at, 0);
        assert_eq!(record.unstake_requested_at, 0);
    }
}
