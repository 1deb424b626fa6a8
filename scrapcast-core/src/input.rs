//! Current feature values of every stage, plus boundary parsing.

use crate::error::InputError;
use crate::registry::{Feature, ModelRegistry, Stage, StageId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values keyed by stage, then by feature id.
///
/// Every stage keeps its own values regardless of which one is on screen, so
/// the ensemble always sees the full picture.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputState {
    values: BTreeMap<StageId, BTreeMap<String, f64>>,
}

impl InputState {
    /// Initialise every feature of every stage to its mean.
    #[must_use]
    pub fn from_means(registry: &ModelRegistry) -> Self {
        Self {
            values: registry
                .stages
                .iter()
                .map(|stage| (stage.id, stage.mean_values()))
                .collect(),
        }
    }

    #[must_use]
    pub fn stage_values(&self, stage: StageId) -> Option<&BTreeMap<String, f64>> {
        self.values.get(&stage)
    }

    #[must_use]
    pub fn value(&self, stage: StageId, feature_id: &str) -> Option<f64> {
        self.values.get(&stage)?.get(feature_id).copied()
    }

    /// Store a value clamped into the feature range and return what was stored.
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite values; the previous value is kept.
    pub fn set(&mut self, stage: StageId, feature: &Feature, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NonFinite {
                feature: feature.id.clone(),
            });
        }
        let clamped = feature.clamp(value);
        self.values
            .entry(stage)
            .or_default()
            .insert(feature.id.clone(), clamped);
        Ok(clamped)
    }

    /// Put every feature of one stage back to its mean, leaving other stages alone.
    pub fn reset_stage(&mut self, stage: &Stage) {
        self.values.insert(stage.id, stage.mean_values());
    }
}

/// Parse operator input into a number.
///
/// Accepts surrounding whitespace and either `.` or `,` as decimal separator.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] for unparseable text and
/// [`InputError::NonFinite`] for `inf`/`NaN` spellings.
pub fn parse_value(feature: &Feature, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::NotANumber(raw.to_string()));
    }
    let normalised = trimmed.replace(',', ".");
    let value = normalised
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NonFinite {
            feature: feature.id.clone(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (ModelRegistry, InputState) {
        let registry = ModelRegistry::builtin();
        let inputs = InputState::from_means(&registry);
        (registry, inputs)
    }

    #[test]
    fn starts_at_means_for_all_stages() {
        let (registry, inputs) = fixture();
        for stage in &registry.stages {
            for feature in &stage.features {
                assert_eq!(inputs.value(stage.id, &feature.id), Some(feature.mean));
            }
        }
    }

    #[test]
    fn set_clamps_and_rejects_non_finite() {
        let (registry, mut inputs) = fixture();
        let stage = registry.stage(StageId::B3).unwrap();
        let rpm = stage.feature("by_rpm").unwrap();
        assert!((inputs.set(stage.id, rpm, 99.0).unwrap() - 32.0).abs() < f64::EPSILON);
        assert!(inputs.set(stage.id, rpm, f64::NAN).is_err());
        assert_eq!(inputs.value(StageId::B3, "by_rpm"), Some(32.0));
    }

    #[test]
    fn reset_touches_one_stage() {
        let (registry, mut inputs) = fixture();
        let b2 = registry.stage(StageId::B2).unwrap();
        let p = registry.stage(StageId::P).unwrap();
        inputs.set(b2.id, b2.feature("by_temp").unwrap(), 80.0).unwrap();
        inputs.set(p.id, p.feature("ps_pressao_vulc").unwrap(), 190.0).unwrap();

        inputs.reset_stage(b2);

        assert_eq!(inputs.value(StageId::B2, "by_temp"), Some(76.5));
        assert_eq!(inputs.value(StageId::P, "ps_pressao_vulc"), Some(190.0));
    }

    #[test]
    fn parse_accepts_comma_decimals() {
        let (registry, _) = fixture();
        let feature = registry.stage(StageId::B2).unwrap().feature("by_temp").unwrap();
        assert!((parse_value(feature, " 77,5 ").unwrap() - 77.5).abs() < f64::EPSILON);
        assert!((parse_value(feature, "1e2").unwrap() - 100.0).abs() < f64::EPSILON);
        assert!(matches!(parse_value(feature, "abc"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_value(feature, ""), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_value(feature, "inf"), Err(InputError::NonFinite { .. })));
    }
}
