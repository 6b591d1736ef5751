use serde::{Deserialize, Serialize};

use super::{
    error::CalcError,
    form::CalculatorForm,
    projection::{project, Projection},
    revenue::{FunnelParams, FunnelPreset},
};

/// Which half of the calculator is on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CalculatorView {
    #[default]
    AwaitingInput,
    ShowingResults(Projection),
}

impl CalculatorView {
    pub fn projection(&self) -> Option<&Projection> {
        match self {
            CalculatorView::AwaitingInput => None,
            CalculatorView::ShowingResults(projection) => Some(projection),
        }
    }
}

/// Funnel preset choice plus the values used when the preset is `Custom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FunnelSettings {
    #[serde(default)]
    pub preset: FunnelPreset,
    #[serde(default)]
    pub custom: FunnelParams,
}

impl FunnelSettings {
    pub fn active(&self) -> FunnelParams {
        self.preset.params().unwrap_or(self.custom)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub form: CalculatorForm,
    pub view: CalculatorView,
    pub funnel: FunnelSettings,
}

impl AppState {
    /// Parses the form and moves to the results view.
    ///
    /// On failure the view is left untouched so the inputs stay editable.
    pub fn submit(&mut self) -> Result<Projection, CalcError> {
        let parsed = self.form.parse()?;
        let projection = project(&parsed.query, parsed.lifetime_value, &self.funnel.active())?;
        self.view = CalculatorView::ShowingResults(projection.clone());
        Ok(projection)
    }

    /// Returns to input collection, keeping what was typed.
    pub fn recalculate(&mut self) {
        self.view = CalculatorView::AwaitingInput;
    }

    pub fn is_showing_results(&self) -> bool {
        matches!(self.view, CalculatorView::ShowingResults(_))
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.funnel = persisted.funnel;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            funnel: self.funnel,
        }
    }
}

/// User settings that survive restarts. Calculator inputs are never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub funnel: FunnelSettings,
}
