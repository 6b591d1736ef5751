//! Review math and calculator state live here.

pub mod app_state;
pub mod error;
pub mod form;
pub mod projection;
pub mod rating;
pub mod revenue;

pub use app_state::{AppState, CalculatorView, FunnelSettings, PersistedState};
pub use error::{CalcError, TargetIssue};
pub use form::{CalculatorForm, ParsedForm, MIN_FORM_LIFETIME_VALUE};
pub use projection::{funnel_explanation, project, Projection, PROGRESS_FULL_AT};
pub use rating::{projected_average, solve, RatingQuery, MAX_RATING, MIN_RATING};
pub use revenue::{estimate, FunnelParams, FunnelPreset};
