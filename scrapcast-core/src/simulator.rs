//! Owner of the dashboard state and its transitions.

use crate::error::{InputError, RegistryError};
use crate::importance::importance_bars;
use crate::input::{InputState, parse_value};
use crate::registry::{ModelRegistry, RegistrySource, Stage, StageId};
use crate::scenario::{ScenarioId, ScenarioStore};
use crate::scoring::{ensemble, predict};
use crate::view::{DashboardView, FeatureControl, StageTab};
use std::sync::Arc;

/// Interactive what-if simulator.
///
/// Holds the shared registry, the per-stage input values, the stage on
/// screen and the saved scenarios. Every transition completes before the next
/// one starts; derived numbers are recomputed on demand and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulator {
    registry: Arc<ModelRegistry>,
    inputs: InputState,
    active: usize,
    scenarios: ScenarioStore,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::from_valid(ModelRegistry::shared())
    }
}

impl Simulator {
    /// Build a simulator on top of a registry, validating it first.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry violates one of its invariants.
    pub fn new(registry: Arc<ModelRegistry>) -> Result<Self, RegistryError> {
        registry.validate()?;
        Ok(Self::from_valid(registry))
    }

    /// Load a registry from `source` and build a simulator on it.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the registry is invalid.
    pub fn from_source<S>(source: &S) -> Result<Self, RegistryError>
    where
        S: RegistrySource,
        RegistryError: From<S::Error>,
    {
        let registry = source.load_registry()?;
        Self::new(Arc::new(registry))
    }

    fn from_valid(registry: Arc<ModelRegistry>) -> Self {
        let inputs = InputState::from_means(&registry);
        Self {
            registry,
            inputs,
            active: 0,
            scenarios: ScenarioStore::new(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    #[must_use]
    pub fn inputs(&self) -> &InputState {
        &self.inputs
    }

    #[must_use]
    pub fn scenarios(&self) -> &ScenarioStore {
        &self.scenarios
    }

    #[must_use]
    pub fn active_stage(&self) -> &Stage {
        &self.registry.stages[self.active]
    }

    #[must_use]
    pub fn active_stage_id(&self) -> StageId {
        self.active_stage().id
    }

    fn stage(&self, id: StageId) -> Result<&Stage, InputError> {
        self.registry
            .stage(id)
            .ok_or_else(|| InputError::UnknownStage(id.to_string()))
    }

    /// Switch the stage on screen. Input values of every stage are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry has no such stage.
    pub fn select_stage(&mut self, id: StageId) -> Result<(), InputError> {
        let index = self
            .registry
            .stages
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| InputError::UnknownStage(id.to_string()))?;
        if index != self.active {
            log::debug!("active stage {} -> {}", self.active_stage_id(), id);
            self.active = index;
        }
        Ok(())
    }

    /// Set a feature value, clamped into its range. Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown stage or feature, or a non-finite
    /// value. The previous value is kept in every error case.
    pub fn set_value(&mut self, stage: StageId, feature_id: &str, value: f64) -> Result<f64, InputError> {
        let registry = Arc::clone(&self.registry);
        let feature = registry
            .stage(stage)
            .ok_or_else(|| InputError::UnknownStage(stage.to_string()))?
            .feature(feature_id)
            .ok_or_else(|| InputError::UnknownFeature {
                stage,
                feature: feature_id.to_string(),
            })?;
        self.inputs.set(stage, feature, value)
    }

    /// Parse raw operator text and store it like [`Simulator::set_value`].
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a finite number or the target does
    /// not exist.
    pub fn set_value_from_str(
        &mut self,
        stage: StageId,
        feature_id: &str,
        raw: &str,
    ) -> Result<f64, InputError> {
        let feature = self
            .stage(stage)?
            .feature(feature_id)
            .ok_or_else(|| InputError::UnknownFeature {
                stage,
                feature: feature_id.to_string(),
            })?;
        let value = parse_value(feature, raw)?;
        self.set_value(stage, feature_id, value)
    }

    /// Put the active stage back to its means. Other stages and saved
    /// scenarios are untouched.
    pub fn reset_active_stage(&mut self) {
        let registry = Arc::clone(&self.registry);
        let stage = &registry.stages[self.active];
        log::debug!("reset stage {}", stage.id);
        self.inputs.reset_stage(stage);
    }

    /// Snapshot the active stage and both predictions.
    pub fn save_scenario(&mut self, now_ms: u64) -> ScenarioId {
        let stage = self.active_stage_id();
        let values = self.inputs.stage_values(stage).cloned().unwrap_or_default();
        let stage_prediction = self.stage_prediction();
        let ensemble_prediction = self.ensemble_prediction();
        let saved = self
            .scenarios
            .save(stage, values, stage_prediction, ensemble_prediction, now_ms);
        log::debug!("saved {} ({}) for stage {}", saved.label, saved.id, stage);
        saved.id
    }

    /// Delete a saved scenario. Unknown ids are ignored.
    pub fn remove_scenario(&mut self, id: ScenarioId) -> bool {
        let removed = self.scenarios.remove(id);
        if removed {
            log::debug!("removed scenario {id}");
        }
        removed
    }

    /// Prediction of the stage on screen.
    #[must_use]
    pub fn stage_prediction(&self) -> f64 {
        self.prediction_for(self.active_stage())
    }

    fn prediction_for(&self, stage: &Stage) -> f64 {
        self.inputs
            .stage_values(stage.id)
            .map_or_else(|| predict(stage, &stage.mean_values()), |v| predict(stage, v))
    }

    /// Ensemble over every stage's current values.
    #[must_use]
    pub fn ensemble_prediction(&self) -> f64 {
        ensemble(&self.registry, &self.inputs)
    }

    /// Derive the complete dashboard from the current state.
    #[must_use]
    pub fn recompute(&self) -> DashboardView {
        let active = self.active_stage();
        let tabs = self
            .registry
            .stages
            .iter()
            .map(|stage| StageTab {
                id: stage.id,
                name: stage.name.clone(),
                weight_percent: stage.weight_percent(),
                color: stage.color.clone(),
                active: stage.id == active.id,
            })
            .collect();
        let controls = active
            .features
            .iter()
            .map(|feature| FeatureControl {
                value: self.inputs.value(active.id, &feature.id).unwrap_or(feature.mean),
                feature: feature.clone(),
            })
            .collect();

        DashboardView {
            active_stage: active.id,
            active_name: active.name.clone(),
            active_color: active.color.clone(),
            stage_prediction: self.prediction_for(active),
            ensemble_prediction: self.ensemble_prediction(),
            reference: self.registry.reference.clone(),
            tabs,
            controls,
            importance: importance_bars(active),
            scenarios: self.scenarios.as_slice().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BuiltinRegistry, JsonRegistry};

    #[test]
    fn starts_on_first_stage_at_baseline() {
        let sim = Simulator::default();
        assert_eq!(sim.active_stage_id(), StageId::B2);
        assert!((sim.stage_prediction() - 5.0).abs() < f64::EPSILON);
        assert!((sim.ensemble_prediction() - 5.0).abs() < 1e-12);
        assert!(sim.scenarios().is_empty());
    }

    #[test]
    fn switching_stage_keeps_values() {
        let mut sim = Simulator::default();
        sim.set_value(StageId::B2, "by_corrente", 320.0).unwrap();
        sim.select_stage(StageId::P).unwrap();
        assert!((sim.stage_prediction() - 5.0).abs() < f64::EPSILON);
        sim.select_stage(StageId::B2).unwrap();
        assert!((sim.stage_prediction() - 17.409_090_909_090_9).abs() < 1e-9);
    }

    #[test]
    fn ensemble_sees_hidden_stages() {
        let mut sim = Simulator::default();
        sim.set_value(StageId::P, "ps_pressao_vulc", 200.0).unwrap();
        sim.select_stage(StageId::B2).unwrap();
        assert!(sim.ensemble_prediction() > 5.0);
    }

    #[test]
    fn set_value_rejects_unknown_targets_and_keeps_state() {
        let mut sim = Simulator::default();
        let before = sim.clone();
        assert!(matches!(
            sim.set_value(StageId::B2, "ps_pressao_vulc", 1.0),
            Err(InputError::UnknownFeature { stage: StageId::B2, .. })
        ));
        assert!(matches!(
            sim.set_value(StageId::B2, "by_rpm", f64::INFINITY),
            Err(InputError::NonFinite { .. })
        ));
        assert!(sim.set_value_from_str(StageId::B2, "by_rpm", "fast").is_err());
        assert_eq!(sim, before);
    }

    #[test]
    fn string_input_is_parsed_and_clamped() {
        let mut sim = Simulator::default();
        let stored = sim.set_value_from_str(StageId::B3, "by_temp", "120,5").unwrap();
        assert!((stored - 110.0).abs() < f64::EPSILON);
        assert_eq!(sim.inputs().value(StageId::B3, "by_temp"), Some(110.0));
    }

    #[test]
    fn reset_only_touches_active_stage() {
        let mut sim = Simulator::default();
        sim.set_value(StageId::B2, "by_temp", 80.0).unwrap();
        sim.set_value(StageId::B3, "by_temp", 100.0).unwrap();
        sim.save_scenario(1);
        sim.reset_active_stage();
        assert_eq!(sim.inputs().value(StageId::B2, "by_temp"), Some(76.5));
        assert_eq!(sim.inputs().value(StageId::B3, "by_temp"), Some(100.0));
        assert_eq!(sim.scenarios().len(), 1);
    }

    #[test]
    fn saved_scenarios_are_snapshots() {
        let mut sim = Simulator::default();
        sim.set_value(StageId::B2, "by_corrente", 300.0).unwrap();
        let id = sim.save_scenario(1_000);
        sim.set_value(StageId::B2, "by_corrente", 100.0).unwrap();

        let saved = sim.scenarios().get(id).unwrap();
        assert_eq!(saved.label, "Cenário 1");
        assert_eq!(saved.stage, StageId::B2);
        assert_eq!(saved.values.get("by_corrente"), Some(&300.0));
        assert!(saved.stage_prediction > sim.stage_prediction());
    }

    #[test]
    fn view_reflects_active_stage() {
        let mut sim = Simulator::default();
        sim.select_stage(StageId::B3).unwrap();
        let view = sim.recompute();
        assert_eq!(view.active_stage, StageId::B3);
        assert_eq!(view.active_name, "Banbury 3");
        assert_eq!(view.controls.len(), 6);
        assert_eq!(view.importance[0].feature_id, "by_temp");
        assert!(!view.has_scenarios());
        let active: Vec<_> = view.tabs.iter().filter(|t| t.active).map(|t| t.id).collect();
        assert_eq!(active, [StageId::B3]);
        assert!((view.tabs[2].weight_percent - 80.53).abs() < 1e-9);
        assert!((view.reference.validation_mae - 12.495).abs() < f64::EPSILON);
    }

    #[test]
    fn builds_from_sources() {
        let builtin = Simulator::from_source(&BuiltinRegistry).unwrap();
        let json = builtin.registry().to_json().unwrap();
        let loaded = Simulator::from_source(&JsonRegistry::new(json)).unwrap();
        assert_eq!(builtin, loaded);

        let mut broken = ModelRegistry::builtin();
        broken.stages.clear();
        assert!(matches!(
            Simulator::new(Arc::new(broken)),
            Err(RegistryError::Empty)
        ));
    }

    #[test]
    fn custom_registry_without_a_stage() {
        let mut registry = ModelRegistry::builtin();
        registry.stages.retain(|s| s.id != StageId::B3);
        let mut sim = Simulator::new(Arc::new(registry)).unwrap();
        assert!(matches!(
            sim.select_stage(StageId::B3),
            Err(InputError::UnknownStage(_))
        ));
        assert_eq!(sim.active_stage_id(), StageId::B2);
    }
}
