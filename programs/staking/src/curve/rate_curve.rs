//! Amount-tiered APY schedule

use anchor_lang::prelude::*;

/// Piecewise-linear APY-over-amount schedule.
///
/// APY values are fixed point scaled by [`crate::PRECISION`], amounts are in
/// base token units. At or below `min_amount` the rate clamps to `min_apy`,
/// at or above `max_amount` to `max_apy`; strictly between the two points the
/// rate is the exact linear interpolation, truncated at the smallest unit.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub struct RateCurve {
    pub min_apy: u64,
    pub min_amount: u64,
    pub max_apy: u64,
    pub max_amount: u64,
}

impl RateCurve {
    pub fn validate(&self) -> bool {
        self.min_amount < self.max_amount && self.min_apy <= self.max_apy
    }

    /// Annual rate earned by `amount`, scaled by [`crate::PRECISION`].
    pub fn rate_for(&self, amount: u64) -> u64 {
        if amount <= self.min_amount {
            return self.min_apy;
        }
        if amount >= self.max_amount {
            return self.max_apy;
        }
        let rise = (self.max_apy - self.min_apy) as u128;
        let offset = (amount - self.min_amount) as u128;
        let span = (self.max_amount - self.min_amount) as u128;
        // offset < span, so the interpolated term never exceeds rise and the
        // sum stays within [min_apy, max_apy]
        self.min_apy + (rise * offset / span) as u64
    }
}

/// One revision of the rate curve, kept in the global config history.
///
/// The curve governs accrual from `effective_from` until the next revision's
/// `effective_from`; the newest revision is open ended.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
pub struct CurveEpoch {
    pub effective_from: i64,
    pub curve: RateCurve,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const UNIT: u64 = 1_000_000_000;

    fn pct(p: u64) -> u64 {
        (crate::PRECISION as u64 / 100) * p
    }

    fn fixture_curve() -> RateCurve {
        RateCurve {
            min_apy: pct(1),
            min_amount: 1_000 * UNIT,
            max_apy: pct(9),
            max_amount: 100_000 * UNIT,
        }
    }

    #[test]
    fn clamps_below_min_amount() {
        let curve = fixture_curve();
        assert_eq!(curve.rate_for(0), pct(1));
        assert_eq!(curve.rate_for(500 * UNIT), pct(1));
        assert_eq!(curve.rate_for(1_000 * UNIT), pct(1));
    }

    #[test]
    fn clamps_above_max_amount() {
        let curve = fixture_curve();
        assert_eq!(curve.rate_for(100_000 * UNIT), pct(9));
        // never extrapolates past the ceiling rate
        assert_eq!(curve.rate_for(200_000 * UNIT), pct(9));
        assert_eq!(curve.rate_for(u64::MAX), pct(9));
    }

    #[test]
    fn interpolates_linearly_between_points() {
        let curve = fixture_curve();
        // midpoint of [1_000, 100_000] is 50_500: exactly half the rise
        assert_eq!(curve.rate_for(50_500 * UNIT), pct(5));
        // one unit above the floor moves the rate by rise / span, floored
        let just_above = curve.rate_for(1_000 * UNIT + 1);
        assert!(just_above >= curve.min_apy);
        assert!(just_above < curve.rate_for(2_000 * UNIT));
    }

    #[test]
    fn validates_curve_shape() {
        assert!(fixture_curve().validate());
        let mut flat = fixture_curve();
        flat.max_apy = flat.min_apy;
        assert!(flat.validate());
        let mut inverted = fixture_curve();
        inverted.max_apy = inverted.min_apy - 1;
        assert!(!inverted.validate());
        let mut empty_span = fixture_curve();
        empty_span.max_amount = empty_span.min_amount;
        assert!(!empty_span.validate());
    }

    prop_compose! {
        fn arb_curve()(
            min_amount in 0u64..1_000_000_000_000,
            span in 1u64..1_000_000_000_000,
            min_apy in 0u64..=1_000_000_000,
            rise in 0u64..=1_000_000_000,
        ) -> RateCurve {
            RateCurve {
                min_apy,
                min_amount,
                max_apy: min_apy + rise,
                max_amount: min_amount + span,
            }
        }
    }

    proptest! {
        #[test]
        fn rate_is_monotonic_in_amount(curve in arb_curve(), a: u64, b: u64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(curve.rate_for(lo) <= curve.rate_for(hi));
        }

        #[test]
        fn rate_is_bounded_by_endpoints(curve in arb_curve(), amount: u64) {
            let rate = curve.rate_for(amount);
            prop_assert!(rate >= curve.min_apy);
            prop_assert!(rate <= curve.max_apy);
        }
    }
}
