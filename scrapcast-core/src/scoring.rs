//! Stage scoring and ensemble aggregation.

use crate::constants::{BASELINE_SCORE, DEVIATION_SCALE, SCORE_MAX, SCORE_MIN};
use crate::input::InputState;
use crate::registry::{ModelRegistry, Stage};
use std::collections::BTreeMap;

/// Predict the scrap percentage of one stage from its feature values.
///
/// Each feature contributes its range-normalised deviation from the mean,
/// weighted by importance and scaled by [`DEVIATION_SCALE`], on top of
/// [`BASELINE_SCORE`]. The sum is clamped to `[0, 100]`. Features absent from
/// `values` sit at their mean.
#[must_use]
pub fn predict(stage: &Stage, values: &BTreeMap<String, f64>) -> f64 {
    let mut score = BASELINE_SCORE;
    for feature in &stage.features {
        let value = values.get(&feature.id).copied().unwrap_or(feature.mean);
        let deviation = (value - feature.mean) / feature.span();
        let contribution = deviation * stage.importance(&feature.id) * DEVIATION_SCALE;
        if contribution.is_nan() {
            continue;
        }
        score += contribution;
    }
    if score.is_nan() {
        // Opposite infinite contributions cancel into NaN.
        return BASELINE_SCORE;
    }
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Weighted mean of `(prediction, weight)` pairs, normalised by the weight sum.
///
/// Returns `0.0` when the weights sum to zero or less.
#[must_use]
pub fn weighted_mean(parts: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (total, weight_sum) = parts
        .into_iter()
        .fold((0.0, 0.0), |(total, weights), (prediction, weight)| {
            (total + prediction * weight, weights + weight)
        });
    if weight_sum <= 0.0 {
        return 0.0;
    }
    total / weight_sum
}

/// Predict every stage of the registry from the full input state.
#[must_use]
pub fn stage_predictions<'a>(
    registry: &'a ModelRegistry,
    inputs: &InputState,
) -> Vec<(&'a Stage, f64)> {
    registry
        .stages
        .iter()
        .map(|stage| {
            let prediction = inputs
                .stage_values(stage.id)
                .map_or(BASELINE_SCORE, |values| predict(stage, values));
            (stage, prediction)
        })
        .collect()
}

/// Combine all stage predictions using the stage ensemble weights.
///
/// Depends on the current values of every stage, not only the one on screen.
#[must_use]
pub fn ensemble(registry: &ModelRegistry, inputs: &InputState) -> f64 {
    weighted_mean(
        stage_predictions(registry, inputs)
            .into_iter()
            .map(|(stage, prediction)| (prediction, stage.weight)),
    )
}
