//! Property-based tests for the review solver and revenue model
//!
//! These tests verify invariants that should hold for all valid inputs:
//! - The solver returns the smallest review count that meets the target
//! - Targets at or below the current rating need no reviews
//! - Raising the target never lowers the answer
//! - Revenue is linear in reviews and lifetime value

use proptest::prelude::*;
use review_lift::domain::{estimate, projected_average, solve, CalcError, FunnelParams, TargetIssue};

fn rating() -> impl Strategy<Value = f64> {
    (10u32..=50).prop_map(|tenths| f64::from(tenths) / 10.0)
}

fn funnel() -> impl Strategy<Value = FunnelParams> {
    prop_oneof![
        Just(FunnelParams::STANDARD),
        Just(FunnelParams::CONSERVATIVE),
        (1u32..500, 1u32..100).prop_map(|(views, pct)| FunnelParams::new(
            f64::from(views),
            f64::from(pct) / 100.0
        )),
    ]
}

proptest! {
    /// Property: the answer meets the target and one fewer review does not
    #[test]
    fn prop_solver_is_minimal(
        current in 1.0f64..5.0,
        total in 1u32..20_000,
        target in 1.0f64..4.99,
    ) {
        let needed = solve(current, total, target).unwrap();
        prop_assert!(projected_average(current, total, needed) >= target);
        if needed > 0 {
            prop_assert!(projected_average(current, total, needed - 1) < target);
        }
    }

    /// Property: already at target means zero additional reviews
    #[test]
    fn prop_at_target_needs_nothing(current in rating(), total in 1u32..100_000) {
        prop_assert_eq!(solve(current, total, current), Ok(0));
    }

    /// Property: any target at or below the current rating needs nothing
    #[test]
    fn prop_lower_target_needs_nothing(
        current in 1.0f64..=5.0,
        drop in 0.0f64..4.0,
        total in 1u32..100_000,
    ) {
        let target = (current - drop).max(0.1);
        prop_assert_eq!(solve(current, total, target), Ok(0));
    }

    /// Property: solve is non-decreasing as the target rises
    #[test]
    fn prop_solver_is_monotonic_in_target(
        current in 1.0f64..5.0,
        total in 1u32..5_000,
        a in 1.0f64..4.99,
        b in 1.0f64..4.99,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_needed = solve(current, total, low).unwrap();
        let high_needed = solve(current, total, high).unwrap();
        prop_assert!(low_needed <= high_needed);
    }

    /// Property: a perfect target is only reachable from a perfect rating
    #[test]
    fn prop_perfect_target_rejected(current in 1.0f64..4.99, total in 1u32..1_000) {
        prop_assert_eq!(
            solve(current, total, 5.0),
            Err(CalcError::InvalidTarget { target: 5.0, reason: TargetIssue::Unreachable })
        );
    }

    /// Property: doubling the review count doubles the revenue
    #[test]
    fn prop_estimate_linear_in_reviews(
        reviews in 0u64..1_000_000,
        value in 0.0f64..100_000.0,
        funnel in funnel(),
    ) {
        let single = estimate(reviews, value, &funnel).unwrap();
        let double = estimate(reviews * 2, value, &funnel).unwrap();
        prop_assert_eq!(double, single * 2.0);
    }

    /// Property: doubling the lifetime value doubles the revenue
    #[test]
    fn prop_estimate_linear_in_value(
        reviews in 0u64..1_000_000,
        value in 0.0f64..100_000.0,
        funnel in funnel(),
    ) {
        let single = estimate(reviews, value, &funnel).unwrap();
        let double = estimate(reviews, value * 2.0, &funnel).unwrap();
        prop_assert_eq!(double, single * 2.0);
    }

    /// Property: no reviews, no revenue
    #[test]
    fn prop_zero_reviews_zero_revenue(value in 0.0f64..1e9, funnel in funnel()) {
        prop_assert_eq!(estimate(0, value, &funnel).unwrap(), 0.0);
    }
}
