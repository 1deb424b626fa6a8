//! Saved scenario snapshots.

use crate::constants::SCENARIO_LABEL_PREFIX;
use crate::registry::StageId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Strictly increasing scenario identifier, derived from creation time in ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub u64);

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of one stage's inputs and the predictions they produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub label: String,
    pub stage: StageId,
    pub values: BTreeMap<String, f64>,
    pub stage_prediction: f64,
    pub ensemble_prediction: f64,
}

/// Append-only list of scenarios with removal by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioStore {
    scenarios: Vec<Scenario>,
    #[serde(default)]
    last_id: Option<u64>,
}

impl ScenarioStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier: the clock reading, bumped past the previous id if needed.
    fn next_id(&mut self, now_ms: u64) -> ScenarioId {
        let id = match self.last_id {
            Some(last) if now_ms <= last => last.saturating_add(1),
            _ => now_ms,
        };
        self.last_id = Some(id);
        ScenarioId(id)
    }

    /// Append a snapshot labelled after the current count.
    ///
    /// Labels are a count-based convenience and may repeat after removals.
    pub fn save(
        &mut self,
        stage: StageId,
        values: BTreeMap<String, f64>,
        stage_prediction: f64,
        ensemble_prediction: f64,
        now_ms: u64,
    ) -> &Scenario {
        let id = self.next_id(now_ms);
        let label = format!("{SCENARIO_LABEL_PREFIX} {}", self.scenarios.len() + 1);
        self.scenarios.push(Scenario {
            id,
            label,
            stage,
            values,
            stage_prediction,
            ensemble_prediction,
        });
        &self.scenarios[self.scenarios.len() - 1]
    }

    /// Remove the scenario with `id`. Returns `false` when nothing matched.
    pub fn remove(&mut self, id: ScenarioId) -> bool {
        let before = self.scenarios.len();
        self.scenarios.retain(|s| s.id != id);
        self.scenarios.len() != before
    }

    #[must_use]
    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Scenario] {
        &self.scenarios
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Pretty JSON array of the saved scenarios, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(v: f64) -> BTreeMap<String, f64> {
        BTreeMap::from([("by_temp".to_string(), v)])
    }

    #[test]
    fn labels_follow_count_and_repeat_after_removal() {
        let mut store = ScenarioStore::new();
        let first = store.save(StageId::B2, values(70.0), 5.0, 5.0, 10).id;
        store.save(StageId::B2, values(71.0), 6.0, 5.1, 20);
        assert!(store.remove(first));
        let third = store.save(StageId::B3, values(72.0), 7.0, 5.2, 30);
        assert_eq!(third.label, "Cenário 2");
        let labels: Vec<_> = store.as_slice().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Cenário 2", "Cenário 2"]);
    }

    #[test]
    fn ids_strictly_increase_under_a_stalled_clock() {
        let mut store = ScenarioStore::new();
        let a = store.save(StageId::P, values(1.0), 5.0, 5.0, 1_000).id;
        let b = store.save(StageId::P, values(1.0), 5.0, 5.0, 1_000).id;
        let c = store.save(StageId::P, values(1.0), 5.0, 5.0, 900).id;
        let d = store.save(StageId::P, values(1.0), 5.0, 5.0, 5_000).id;
        assert_eq!([a, b, c, d].map(|id| id.0), [1_000, 1_001, 1_002, 5_000]);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut store = ScenarioStore::new();
        store.save(StageId::B2, values(70.0), 5.0, 5.0, 1);
        let before = store.clone();
        assert!(!store.remove(ScenarioId(42)));
        assert_eq!(store, before);
    }

    #[test]
    fn export_lists_scenarios_in_order() {
        let mut store = ScenarioStore::new();
        store.save(StageId::B2, values(70.0), 5.0, 5.0, 1);
        store.save(StageId::P, values(71.0), 9.5, 8.0, 2);
        let exported: Vec<Scenario> = serde_json::from_str(&store.export_json().unwrap()).unwrap();
        assert_eq!(exported, store.as_slice());
    }
}
