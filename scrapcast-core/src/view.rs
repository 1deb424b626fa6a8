//! Read-only projection of the simulator for renderers and reports.

use crate::importance::ImportanceBar;
use crate::registry::{Feature, ReferenceMetrics, StageId};
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// Stage selector entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageTab {
    pub id: StageId,
    pub name: String,
    pub weight_percent: f64,
    pub color: String,
    pub active: bool,
}

/// A feature of the active stage together with its current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureControl {
    pub feature: Feature,
    pub value: f64,
}

/// Everything the dashboard shows, re-derived from state on each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub active_stage: StageId,
    pub active_name: String,
    pub active_color: String,
    pub stage_prediction: f64,
    pub ensemble_prediction: f64,
    pub reference: ReferenceMetrics,
    pub tabs: Vec<StageTab>,
    pub controls: Vec<FeatureControl>,
    pub importance: Vec<ImportanceBar>,
    pub scenarios: Vec<Scenario>,
}

impl DashboardView {
    #[must_use]
    pub fn has_scenarios(&self) -> bool {
        !self.scenarios.is_empty()
    }
}
