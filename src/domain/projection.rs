use serde::Serialize;

use super::{
    error::CalcError,
    rating::RatingQuery,
    revenue::{estimate, validate_lifetime_value, FunnelParams},
};

/// Review count at which the progress bar reads full.
pub const PROGRESS_FULL_AT: u64 = 100;

/// Everything the results view shows for one submitted form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Projection {
    pub query: RatingQuery,
    pub lifetime_value: f64,
    pub funnel: FunnelParams,
    pub additional_reviews: u64,
    pub projected_monthly_revenue: f64,
}

impl Projection {
    /// Fill ratio for the progress bar, capped at 1.0.
    pub fn progress(&self) -> f64 {
        (self.additional_reviews as f64 / PROGRESS_FULL_AT as f64).min(1.0)
    }

    pub fn new_average(&self) -> f64 {
        self.query.average_after(self.additional_reviews)
    }

    pub fn monthly_new_customers(&self) -> f64 {
        self.additional_reviews as f64 * self.funnel.views_per_review * self.funnel.conversion_rate
    }
}

/// Runs the solver and the revenue model for one set of inputs.
///
/// All inputs are checked up front, so a bad lifetime value is reported even
/// when the rating half of the query would have succeeded.
pub fn project(
    query: &RatingQuery,
    lifetime_value: f64,
    funnel: &FunnelParams,
) -> Result<Projection, CalcError> {
    query.validate()?;
    validate_lifetime_value(lifetime_value)?;
    funnel.validate()?;

    let additional_reviews = query.solve()?;
    let projected_monthly_revenue = estimate(additional_reviews, lifetime_value, funnel)?;

    log::debug!(
        "projected {additional_reviews} reviews / {projected_monthly_revenue:.2} revenue for {query:?}"
    );

    Ok(Projection {
        query: *query,
        lifetime_value,
        funnel: *funnel,
        additional_reviews,
        projected_monthly_revenue,
    })
}

/// Plain-language walkthrough of the funnel behind the revenue figure.
///
/// The lifetime value line is left out when no usable value was entered.
pub fn funnel_explanation(funnel: &FunnelParams, lifetime_value: Option<f64>) -> Vec<String> {
    let percent = funnel.conversion_percent();
    let mut lines = vec![
        format!(
            "Each new review brings in ~{:.0} more views per month.",
            funnel.views_per_review
        ),
        format!(
            "{} of those views ({} out of every 100 people) take action: call, visit, book, or buy.",
            trim_percent(percent),
            trim_number(percent)
        ),
    ];
    if let Some(lifetime_value) = lifetime_value {
        lines.push(format!(
            "With an average customer lifetime value of {}, every new review brings measurable revenue growth.",
            crate::util::format::format_currency(lifetime_value)
        ));
    }
    lines
}

fn trim_percent(percent: f64) -> String {
    format!("{}%", trim_number(percent))
}

fn trim_number(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::TargetIssue;
    use pretty_assertions::assert_eq;

    #[test]
    fn projects_reviews_and_revenue_together() {
        let query = RatingQuery::new(4.0, 50, 4.6);
        let projection = project(&query, 100.0, &FunnelParams::CONSERVATIVE).unwrap();

        assert_eq!(projection.additional_reviews, 75);
        assert!((projection.projected_monthly_revenue - 7_500.0).abs() < 1e-9);
        assert_eq!(projection.progress(), 0.75);
        assert_eq!(projection.new_average(), 4.6);
    }

    #[test]
    fn progress_caps_at_full() {
        let query = RatingQuery::new(3.0, 200, 4.5);
        let projection = project(&query, 50.0, &FunnelParams::STANDARD).unwrap();
        assert!(projection.additional_reviews > PROGRESS_FULL_AT);
        assert_eq!(projection.progress(), 1.0);
    }

    #[test]
    fn rejects_bad_lifetime_value_before_solving() {
        // Unreachable target, but the lifetime value is checked first.
        let query = RatingQuery::new(4.0, 50, 5.0);
        let err = project(&query, -10.0, &FunnelParams::STANDARD).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "lifetime value", .. }));

        let err = project(&query, 10.0, &FunnelParams::STANDARD).unwrap_err();
        assert_eq!(err, CalcError::target(5.0, TargetIssue::Unreachable));
    }

    #[test]
    fn explanation_reflects_funnel() {
        let lines = funnel_explanation(&FunnelParams::CONSERVATIVE, Some(1_000.0));
        assert_eq!(lines[0], "Each new review brings in ~50 more views per month.");
        assert!(lines[1].starts_with("2% of those views (2 out of every 100 people)"));
        assert!(lines[2].contains("$1,000.00"));
    }

    #[test]
    fn fractional_conversion_is_trimmed() {
        let lines = funnel_explanation(&FunnelParams::new(80.0, 0.025), Some(10.0));
        assert!(lines[1].starts_with("2.5% of those views"));
    }

    #[test]
    fn missing_lifetime_value_drops_the_revenue_line() {
        let lines = funnel_explanation(&FunnelParams::STANDARD, None);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| !line.contains('$')));
    }
}
