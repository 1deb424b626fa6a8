//! Model registry: the stages, their features and the fixed weights that
//! stand in for the trained ensemble.

mod builtin;
mod validate;

use crate::constants::{
    REFERENCE_MODEL_NAME, REFERENCE_TEST_MAE, REFERENCE_VALIDATION_MAE,
};
use crate::error::{InputError, RegistryError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Identifier of one of the three manufacturing stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StageId {
    /// Banbury mixer 2
    B2,
    /// Banbury mixer 3
    B3,
    /// Vulcanisation press
    P,
}

impl StageId {
    pub const ALL: [Self; 3] = [Self::B2, Self::B3, Self::P];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::B2 => "B2",
            Self::B3 => "B3",
            Self::P => "P",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InputError::UnknownStage(trimmed.to_string()))
    }
}

/// A single adjustable sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub step: f64,
    pub unit: String,
}

impl Feature {
    /// Width of the admissible range, the normaliser of every deviation.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamp a value into `[min, max]` without panicking on inverted bounds.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    /// Contribution of this stage to the ensemble prediction.
    pub weight: f64,
    /// Display colour used for charts and badges.
    pub color: String,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub importances: BTreeMap<String, f64>,
}

impl Stage {
    #[must_use]
    pub fn feature(&self, feature_id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == feature_id)
    }

    /// Importance of a feature; features without an entry weigh nothing.
    #[must_use]
    pub fn importance(&self, feature_id: &str) -> f64 {
        self.importances.get(feature_id).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn weight_percent(&self) -> f64 {
        self.weight * 100.0
    }

    /// Every feature paired with its mean.
    #[must_use]
    pub fn mean_values(&self) -> BTreeMap<String, f64> {
        self.features
            .iter()
            .map(|f| (f.id.clone(), f.mean))
            .collect()
    }
}

/// Error metrics of the external model, displayed for reference only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMetrics {
    pub model_name: String,
    pub test_mae: f64,
    pub validation_mae: f64,
}

impl Default for ReferenceMetrics {
    fn default() -> Self {
        Self {
            model_name: REFERENCE_MODEL_NAME.to_string(),
            test_mae: REFERENCE_TEST_MAE,
            validation_mae: REFERENCE_VALIDATION_MAE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRegistry {
    #[serde(default)]
    pub reference: ReferenceMetrics,
    pub stages: Vec<Stage>,
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModelRegistry {
    /// The constant tables shipped with the dashboard.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            reference: ReferenceMetrics::default(),
            stages: builtin::stages(),
        }
    }

    /// Process-wide shared handle to the built-in registry.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<ModelRegistry>> = OnceLock::new();
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(Self::builtin())))
    }

    /// Parse and validate a registry from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the registry breaks one of
    /// the feature, importance or weight invariants.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let registry: Self = serde_json::from_str(json)?;
        if let Err(err) = registry.validate() {
            log::warn!("rejected model registry: {err}");
            return Err(err);
        }
        Ok(registry)
    }

    /// Serialize the registry in the same shape `from_json` accepts.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check every structural invariant of the registry.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), RegistryError> {
        validate::registry(self)
    }

    #[must_use]
    pub fn stage(&self, id: StageId) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    pub fn stage_ids(&self) -> impl Iterator<Item = StageId> + '_ {
        self.stages.iter().map(|s| s.id)
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.stages.iter().map(|s| s.weight).sum()
    }
}

/// Source of a model registry. Front-ends supply their own loaders.
pub trait RegistrySource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the registry the simulator should run against.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be produced.
    fn load_registry(&self) -> Result<ModelRegistry, Self::Error>;
}

/// Loader for the compiled-in constant tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegistry;

impl RegistrySource for BuiltinRegistry {
    type Error = Infallible;

    fn load_registry(&self) -> Result<ModelRegistry, Self::Error> {
        Ok(ModelRegistry::builtin())
    }
}

/// Loader for a registry held as a JSON document.
#[derive(Debug, Clone)]
pub struct JsonRegistry {
    json: String,
}

impl JsonRegistry {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl RegistrySource for JsonRegistry {
    type Error = RegistryError;

    fn load_registry(&self) -> Result<ModelRegistry, Self::Error> {
        ModelRegistry::from_json(&self.json)
    }
}
