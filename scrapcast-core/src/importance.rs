use crate::constants::IMPORTANCE_PERCENT_SCALE;
use crate::registry::Stage;
use serde::{Deserialize, Serialize};

/// One horizontal bar of the importance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportanceBar {
    pub label: String,
    pub feature_id: String,
    /// Importance in percent, `0..=100`.
    pub value: f64,
    pub color: String,
}

/// Chart rows for a stage, most important first.
///
/// Ties keep the feature declaration order.
#[must_use]
pub fn importance_bars(stage: &Stage) -> Vec<ImportanceBar> {
    let mut bars: Vec<ImportanceBar> = stage
        .features
        .iter()
        .map(|feature| ImportanceBar {
            label: feature.name.clone(),
            feature_id: feature.id.clone(),
            value: stage.importance(&feature.id) * IMPORTANCE_PERCENT_SCALE,
            color: stage.color.clone(),
        })
        .collect();
    bars.sort_by(|a, b| b.value.total_cmp(&a.value));
    bars
}
