use super::{error::CalcError, rating::RatingQuery};

/// Smallest lifetime value the calculator form accepts.
pub const MIN_FORM_LIFETIME_VALUE: f64 = 10.0;

/// Raw text entered into the calculator inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorForm {
    pub current_rating: String,
    pub total_reviews: String,
    pub target_rating: String,
    pub lifetime_value: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            current_rating: "4.2".to_string(),
            total_reviews: "100".to_string(),
            target_rating: "4.6".to_string(),
            lifetime_value: "1000".to_string(),
        }
    }
}

/// Parsed form values, ready to hand to the solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedForm {
    pub query: RatingQuery,
    pub lifetime_value: f64,
}

impl CalculatorForm {
    pub fn parse(&self) -> Result<ParsedForm, CalcError> {
        let current_rating = parse_number("current rating", &self.current_rating)?;
        let total_reviews = self
            .total_reviews
            .trim()
            .parse::<u32>()
            .map_err(|_| CalcError::invalid_input("total reviews", "must be a whole number"))?;
        let target_rating = parse_number("target rating", &self.target_rating)?;
        let lifetime_value = self.lifetime_value()?;

        Ok(ParsedForm {
            query: RatingQuery::new(current_rating, total_reviews, target_rating),
            lifetime_value,
        })
    }

    /// The lifetime value field on its own, so it can be shown while other
    /// fields are still being edited.
    pub fn lifetime_value(&self) -> Result<f64, CalcError> {
        let lifetime_value = parse_number("lifetime value", &self.lifetime_value)?;
        if lifetime_value < MIN_FORM_LIFETIME_VALUE {
            return Err(CalcError::invalid_input(
                "lifetime value",
                format!("must be at least ${MIN_FORM_LIFETIME_VALUE:.0}"),
            ));
        }
        Ok(lifetime_value)
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, CalcError> {
    let value = raw
        .trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_input(field, "must be a number"))?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, "must be a number"));
    }
    Ok(value)
}
