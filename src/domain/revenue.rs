use serde::{Deserialize, Serialize};

use super::error::CalcError;

/// Traffic funnel used to turn extra reviews into revenue.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunnelParams {
    /// Extra profile views each new review brings in per month.
    pub views_per_review: f64,
    /// Share of those views that become paying customers (0.0 - 1.0).
    pub conversion_rate: f64,
}

impl FunnelParams {
    pub const STANDARD: FunnelParams = FunnelParams {
        views_per_review: 100.0,
        conversion_rate: 0.02,
    };

    pub const CONSERVATIVE: FunnelParams = FunnelParams {
        views_per_review: 50.0,
        conversion_rate: 0.02,
    };

    pub fn new(views_per_review: f64, conversion_rate: f64) -> Self {
        Self {
            views_per_review,
            conversion_rate,
        }
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        if !self.views_per_review.is_finite() || self.views_per_review < 0.0 {
            return Err(CalcError::invalid_input(
                "views per review",
                "must be a non-negative number",
            ));
        }
        if !self.conversion_rate.is_finite() || !(0.0..=1.0).contains(&self.conversion_rate) {
            return Err(CalcError::invalid_input(
                "conversion rate",
                "must be between 0 and 1",
            ));
        }
        Ok(())
    }

    pub fn conversion_percent(&self) -> f64 {
        self.conversion_rate * 100.0
    }
}

impl Default for FunnelParams {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelPreset {
    #[default]
    Standard,
    Conservative,
    Custom,
}

impl FunnelPreset {
    pub const ALL: [FunnelPreset; 3] = [
        FunnelPreset::Standard,
        FunnelPreset::Conservative,
        FunnelPreset::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FunnelPreset::Standard => "Standard",
            FunnelPreset::Conservative => "Conservative",
            FunnelPreset::Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FunnelPreset::Standard => "~100 views per review, 2% conversion",
            FunnelPreset::Conservative => "~50 views per review, 2% conversion",
            FunnelPreset::Custom => "Your own views and conversion rate",
        }
    }

    /// Fixed parameters for the named presets; `Custom` has none.
    pub fn params(&self) -> Option<FunnelParams> {
        match self {
            FunnelPreset::Standard => Some(FunnelParams::STANDARD),
            FunnelPreset::Conservative => Some(FunnelParams::CONSERVATIVE),
            FunnelPreset::Custom => None,
        }
    }
}

/// Projected additional monthly revenue from `additional_reviews` new reviews.
pub fn estimate(
    additional_reviews: u64,
    lifetime_value: f64,
    funnel: &FunnelParams,
) -> Result<f64, CalcError> {
    validate_lifetime_value(lifetime_value)?;
    funnel.validate()?;

    Ok(additional_reviews as f64 * funnel.views_per_review * funnel.conversion_rate * lifetime_value)
}

pub fn validate_lifetime_value(lifetime_value: f64) -> Result<(), CalcError> {
    if !lifetime_value.is_finite() || lifetime_value < 0.0 {
        return Err(CalcError::invalid_input(
            "lifetime value",
            "must be a non-negative amount",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seventy_five_reviews_at_conservative_funnel() {
        let revenue = estimate(75, 100.0, &FunnelParams::CONSERVATIVE).unwrap();
        assert!((revenue - 7_500.0).abs() < 1e-9, "got {revenue}");
    }

    #[test]
    fn standard_preset_doubles_conservative() {
        let standard = estimate(40, 250.0, &FunnelParams::STANDARD).unwrap();
        let conservative = estimate(40, 250.0, &FunnelParams::CONSERVATIVE).unwrap();
        assert_eq!(standard, conservative * 2.0);
    }

    #[test]
    fn zero_reviews_earn_nothing() {
        assert_eq!(estimate(0, 1_000.0, &FunnelParams::default()), Ok(0.0));
    }

    #[test]
    fn negative_lifetime_value_is_rejected() {
        assert!(matches!(
            estimate(10, -1.0, &FunnelParams::default()),
            Err(CalcError::InvalidInput { field: "lifetime value", .. })
        ));
        assert!(estimate(10, f64::NAN, &FunnelParams::default()).is_err());
    }

    #[test]
    fn bad_funnel_is_rejected() {
        let funnel = FunnelParams::new(100.0, 1.5);
        assert!(matches!(
            estimate(10, 100.0, &funnel),
            Err(CalcError::InvalidInput { field: "conversion rate", .. })
        ));
        let funnel = FunnelParams::new(-5.0, 0.02);
        assert!(matches!(
            funnel.validate(),
            Err(CalcError::InvalidInput { field: "views per review", .. })
        ));
    }

    #[test]
    fn presets_expose_params() {
        assert_eq!(FunnelPreset::Standard.params(), Some(FunnelParams::STANDARD));
        assert_eq!(
            FunnelPreset::Conservative.params(),
            Some(FunnelParams::CONSERVATIVE)
        );
        assert_eq!(FunnelPreset::Custom.params(), None);
        assert_eq!(FunnelPreset::default(), FunnelPreset::Standard);
    }
}
