//! One-at-a-time sensitivity sweep over every feature.

use scrapcast_core::{ModelRegistry, predict};
use serde::{Deserialize, Serialize};

/// Sweeps never use fewer points than the two range ends.
pub const MIN_SWEEP_STEPS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    pub stage: String,
    pub feature_id: String,
    pub feature_name: String,
    pub importance: f64,
    pub min_prediction: f64,
    pub max_prediction: f64,
}

impl SweepRecord {
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.max_prediction - self.min_prediction
    }
}

/// Walk each feature from its minimum to its maximum in `steps` evenly spaced
/// points while every other feature of the stage stays at its mean.
#[must_use]
pub fn run_sweep(registry: &ModelRegistry, steps: usize) -> Vec<SweepRecord> {
    let steps = steps.max(MIN_SWEEP_STEPS);
    let last = u32::try_from(steps - 1).unwrap_or(u32::MAX);
    let mut records = Vec::new();

    for stage in &registry.stages {
        let means = stage.mean_values();
        for feature in &stage.features {
            let mut values = means.clone();
            let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
            for i in 0..=last {
                let value = feature.min + feature.span() * f64::from(i) / f64::from(last);
                values.insert(feature.id.clone(), value);
                let prediction = predict(stage, &values);
                low = low.min(prediction);
                high = high.max(prediction);
            }
            log::debug!(
                "sweep {}.{}: [{low:.3}, {high:.3}]",
                stage.id,
                feature.id
            );
            records.push(SweepRecord {
                stage: stage.name.clone(),
                feature_id: feature.id.clone(),
                feature_name: feature.name.clone(),
                importance: stage.importance(&feature.id),
                min_prediction: low,
                max_prediction: high,
            });
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_feature() {
        let registry = ModelRegistry::builtin();
        let records = run_sweep(&registry, 5);
        let total: usize = registry.stages.iter().map(|s| s.features.len()).sum();
        assert_eq!(records.len(), total);
    }

    #[test]
    fn spread_follows_importance() {
        let registry = ModelRegistry::builtin();
        let records = run_sweep(&registry, 11);
        let current = records
            .iter()
            .find(|r| r.stage == "Banbury 2" && r.feature_id == "by_corrente")
            .unwrap();
        // Low currents hit the zero floor; the top of the range reaches 17.41.
        assert!(current.min_prediction.abs() < 1e-12);
        assert!((current.max_prediction - 17.409_090_909).abs() < 1e-6);
        let b3_current = records
            .iter()
            .find(|r| r.stage == "Banbury 3" && r.feature_id == "by_corrente")
            .unwrap();
        assert!(b3_current.spread() < current.spread());
        assert!(records.iter().all(|r| r.min_prediction <= 5.0 + 1e-9));
    }

    #[test]
    fn zero_importance_features_stay_flat() {
        let mut registry = ModelRegistry::builtin();
        registry.stages[0].importances.clear();
        let records = run_sweep(&registry, 3);
        let stage_name = registry.stages[0].name.clone();
        assert!(
            records
                .iter()
                .filter(|r| r.stage == stage_name)
                .all(|r| r.spread().abs() < 1e-12)
        );
    }

    #[test]
    fn degenerate_step_count_is_raised() {
        let registry = ModelRegistry::builtin();
        assert_eq!(run_sweep(&registry, 0), run_sweep(&registry, MIN_SWEEP_STEPS));
    }
}
