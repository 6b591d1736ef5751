use serde::{Deserialize, Serialize};

use super::error::{CalcError, TargetIssue};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Largest review count f64 still represents exactly (2^53).
const MAX_EXACT_REVIEWS: f64 = 9_007_199_254_740_992.0;

/// Upper bound on how far the exact check may walk past the closed-form seed.
const MAX_SEED_CORRECTION: u64 = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingQuery {
    pub current_rating: f64,
    pub total_reviews: u32,
    pub target_rating: f64,
}

impl RatingQuery {
    pub fn new(current_rating: f64, total_reviews: u32, target_rating: f64) -> Self {
        Self {
            current_rating,
            total_reviews,
            target_rating,
        }
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        validate_query(self.current_rating, self.total_reviews, self.target_rating)
    }

    pub fn solve(&self) -> Result<u64, CalcError> {
        solve(self.current_rating, self.total_reviews, self.target_rating)
    }

    /// Average rating once `additional` 5-star reviews have landed.
    pub fn average_after(&self, additional: u64) -> f64 {
        projected_average(self.current_rating, self.total_reviews, additional)
    }
}

/// Minimum number of extra 5-star reviews that lifts the average to at least
/// `target_rating`.
///
/// Returns `0` when the business already sits at or above the target. A target
/// of exactly 5.0 is only reachable when every existing review is already a
/// 5, so any other combination is rejected instead of searched forever.
pub fn solve(current_rating: f64, total_reviews: u32, target_rating: f64) -> Result<u64, CalcError> {
    validate_query(current_rating, total_reviews, target_rating)?;

    if target_rating <= current_rating {
        return Ok(0);
    }

    if target_rating >= MAX_RATING {
        return Err(CalcError::target(target_rating, TargetIssue::Unreachable));
    }

    let reviews = f64::from(total_reviews);
    let current_total = current_rating * reviews;

    // (S + 5n) / (t + n) >= T  <=>  n >= (T*t - S) / (5 - T)
    let seed = ((target_rating * reviews - current_total) / (MAX_RATING - target_rating)).ceil();
    if !seed.is_finite() || seed > MAX_EXACT_REVIEWS {
        return Err(CalcError::target(target_rating, TargetIssue::BeyondPrecision));
    }

    refine(current_total, reviews, target_rating, seed.max(0.0) as u64)
}

/// Walks from `seed` to the smallest count that passes the exact comparison.
/// The closed form can land one off either side of it.
fn refine(current_total: f64, reviews: f64, target_rating: f64, seed: u64) -> Result<u64, CalcError> {
    let mut needed = seed;
    while needed > 0 && meets_target(current_total, reviews, target_rating, needed - 1) {
        needed -= 1;
    }

    let ceiling = needed.saturating_add(MAX_SEED_CORRECTION);
    while !meets_target(current_total, reviews, target_rating, needed) {
        if needed >= ceiling {
            return Err(CalcError::target(target_rating, TargetIssue::BeyondPrecision));
        }
        needed += 1;
    }

    Ok(needed)
}

pub fn projected_average(current_rating: f64, total_reviews: u32, additional: u64) -> f64 {
    let reviews = f64::from(total_reviews);
    average_with(current_rating * reviews, reviews, additional)
}

fn average_with(current_total: f64, reviews: f64, additional: u64) -> f64 {
    let added = additional as f64;
    (current_total + MAX_RATING * added) / (reviews + added)
}

fn meets_target(current_total: f64, reviews: f64, target_rating: f64, additional: u64) -> bool {
    !(average_with(current_total, reviews, additional) < target_rating)
}

fn validate_query(current_rating: f64, total_reviews: u32, target_rating: f64) -> Result<(), CalcError> {
    if !target_rating.is_finite() || target_rating <= 0.0 || target_rating > MAX_RATING {
        return Err(CalcError::target(target_rating, TargetIssue::OutOfRange));
    }

    if total_reviews == 0 {
        return Err(CalcError::invalid_input(
            "total reviews",
            "must be at least 1",
        ));
    }

    if !current_rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&current_rating) {
        return Err(CalcError::invalid_input(
            "current rating",
            format!("must be between {MIN_RATING:.1} and {MAX_RATING:.1}"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn four_point_oh_to_four_point_six() {
        assert_eq!(solve(4.0, 50, 4.6), Ok(75));
        assert!(projected_average(4.0, 50, 74) < 4.6);
        assert!(projected_average(4.0, 50, 75) >= 4.6);
    }

    #[test]
    fn already_above_target_needs_nothing() {
        assert_eq!(solve(4.6, 100, 4.2), Ok(0));
        assert_eq!(solve(4.2, 100, 4.2), Ok(0));
    }

    #[test]
    fn default_form_values_need_a_hundred() {
        // 4.2 over 100 reviews, aiming for 4.6: (420 + 5n) / (100 + n) >= 4.6
        let needed = solve(4.2, 100, 4.6).unwrap();
        assert_eq!(needed, 100);
        assert!(projected_average(4.2, 100, needed - 1) < 4.6);
    }

    #[test]
    fn perfect_target_is_rejected_unless_already_perfect() {
        assert_eq!(
            solve(4.9, 10, 5.0),
            Err(CalcError::target(5.0, TargetIssue::Unreachable))
        );
        assert_eq!(solve(5.0, 10, 5.0), Ok(0));
    }

    #[test]
    fn out_of_range_targets() {
        for target in [0.0, -1.0, 5.01, f64::NAN, f64::INFINITY] {
            let err = solve(4.0, 10, target).unwrap_err();
            assert!(err.is_invalid_target(), "{target} should be rejected");
        }
    }

    #[test]
    fn bad_query_inputs() {
        assert!(matches!(
            solve(4.0, 0, 4.5),
            Err(CalcError::InvalidInput { field: "total reviews", .. })
        ));
        assert!(matches!(
            solve(0.5, 10, 4.5),
            Err(CalcError::InvalidInput { field: "current rating", .. })
        ));
        assert!(matches!(
            solve(f64::NAN, 10, 4.5),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn large_review_counts_stay_fast() {
        let needed = solve(1.0, 1_000_000, 4.99).unwrap();
        assert!(projected_average(1.0, 1_000_000, needed) >= 4.99);
        assert!(projected_average(1.0, 1_000_000, needed - 1) < 4.99);
    }

    #[test]
    fn counts_past_exact_floats_are_beyond_precision() {
        assert_eq!(
            solve(1.0, u32::MAX, 4.9999999),
            Err(CalcError::target(4.9999999, TargetIssue::BeyondPrecision))
        );
    }

    #[test]
    fn huge_but_exact_counts_are_still_solved() {
        let needed = solve(4.0, 4_000_000_000, 4.999999).unwrap();
        assert_eq!(needed, 3_999_995_999_440_883);
        assert!(projected_average(4.0, 4_000_000_000, needed) >= 4.999999);
        assert!(projected_average(4.0, 4_000_000_000, needed - 1) < 4.999999);
    }

    #[test]
    fn runaway_correction_is_beyond_precision() {
        // 1.0 over a million reviews to 4.99 needs ~4e8 more, far past the walk limit from 0.
        let reviews = 1_000_000.0;
        assert_eq!(
            refine(reviews, reviews, 4.99, 0),
            Err(CalcError::target(4.99, TargetIssue::BeyondPrecision))
        );
        let exact = solve(1.0, 1_000_000, 4.99).unwrap();
        assert_eq!(refine(reviews, reviews, 4.99, exact + 10), Ok(exact));
    }

    #[test]
    fn query_helpers_delegate() {
        let query = RatingQuery::new(4.0, 50, 4.6);
        assert_eq!(query.solve(), Ok(75));
        assert_eq!(query.average_after(75), 4.6);
        assert!(query.validate().is_ok());
    }
}
