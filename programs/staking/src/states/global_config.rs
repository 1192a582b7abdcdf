use anchor_lang::prelude::*;

use crate::curve::{CurveEpoch, RateCurve};

pub const GLOBAL_CONFIG_SEED: &str = "global_config";

/// Number of curve revisions retained for lazy settlement. When the history
/// is full the oldest entry is evicted and the next-oldest curve extends
/// backwards in time.
pub const MAX_CURVE_EPOCHS: usize = 16;

#[account]
#[derive(InitSpace, Debug)]
pub struct GlobalConfig {
    pub bump: u8,
    /// Operator allowed to update the rate parameters.
    pub admin: Pubkey,
    /// Mint of the staked (and reward) token.
    pub stake_mint: Pubkey,
    /// Treasury token account credited with early-unstake fines.
    pub treasury: Pubkey,
    /// Program-owned vault holding staked principal.
    pub stake_vault: Pubkey,
    /// Program-owned vault rewards are paid from.
    pub reward_vault: Pubkey,
    /// Smallest reward amount a single claim may pay out.
    pub min_claim_amount: u64,
    /// Seconds after the first stake during which unstaking is fined.
    pub stake_lock_period: i64,
    /// Seconds after the first stake before rewards may be claimed.
    pub claim_unlock_period: i64,
    /// Seconds an unstake request stays valid once submitted.
    pub unstake_extend_period: i64,
    /// Early-unstake fine in basis points (3000 = 30%).
    pub early_unstake_fine_bps: u64,
    pub total_staked: u64,
    pub total_rewards_paid: u64,
    pub total_fines_collected: u64,
    /// Rate-curve revisions ordered oldest first; the last entry is active.
    #[max_len(MAX_CURVE_EPOCHS)]
    pub curve_history: Vec<CurveEpoch>,
}

impl GlobalConfig {
    /// The curve in effect now. The history is seeded at initialisation and
    /// never emptied afterwards.
    pub fn current_curve(&self) -> RateCurve {
        self.curve_history
            .last()
            .map(|epoch| epoch.curve)
            .unwrap_or_default()
    }

    /// Records a curve revision effective at `now`. No staker account is
    /// touched here: settlement stays lazy and every account folds the
    /// change in, segment by segment, at its next interaction.
    pub fn push_curve(&mut self, curve: RateCurve, now: i64) {
        if self.curve_history.len() >= MAX_CURVE_EPOCHS {
            self.curve_history.remove(0);
        }
        self.curve_history.push(CurveEpoch {
            effective_from: now,
            curve,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_history(revisions: i64) -> GlobalConfig {
        let mut config = GlobalConfig {
            bump: 0,
            admin: Pubkey::default(),
            stake_mint: Pubkey::default(),
            treasury: Pubkey::default(),
            stake_vault: Pubkey::default(),
            reward_vault: Pubkey::default(),
            min_claim_amount: 0,
            stake_lock_period: 0,
            claim_unlock_period: 0,
            unstake_extend_period: 0,
            early_unstake_fine_bps: 0,
            total_staked: 0,
            total_rewards_paid: 0,
            total_fines_collected: 0,
            curve_history: Vec::new(),
        };
        for i in 0..revisions {
            let curve = RateCurve {
                min_apy: i as u64,
                min_amount: 0,
                max_apy: i as u64,
                max_amount: 1,
            };
            config.push_curve(curve, i);
        }
        config
    }

    #[test]
    fn current_curve_is_last_revision() {
        let config = config_with_history(3);
        assert_eq!(config.current_curve().min_apy, 2);
    }

    #[test]
    fn history_is_bounded_and_evicts_oldest() {
        let config = config_with_history(MAX_CURVE_EPOCHS as i64 + 5);
        assert_eq!(config.curve_history.len(), MAX_CURVE_EPOCHS);
        // the five oldest revisions were evicted, ordering is preserved
        assert_eq!(config.curve_history[0].effective_from, 5);
        assert_eq!(
            config.curve_history.last().unwrap().effective_from,
            MAX_CURVE_EPOCHS as i64 + 4
        );
    }
}
