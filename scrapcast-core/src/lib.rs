//! Scrapcast Engine
//!
//! Platform-agnostic core of the Scrapcast scrap-rate simulator. It holds the
//! constant model registry of the three production stages (Banbury 2,
//! Banbury 3 and the vulcanisation press), the surrogate scoring formula, the
//! weighted ensemble and the saved-scenario store. Front-ends drive a
//! [`Simulator`] and render the [`DashboardView`] it derives.

pub mod constants;
pub mod error;
pub mod importance;
pub mod input;
pub mod registry;
pub mod scenario;
pub mod scoring;
pub mod simulator;
pub mod view;

// Re-export commonly used types
pub use error::{InputError, RegistryError};
pub use importance::{ImportanceBar, importance_bars};
pub use input::{InputState, parse_value};
pub use registry::{
    BuiltinRegistry, Feature, JsonRegistry, ModelRegistry, ReferenceMetrics, RegistrySource,
    Stage, StageId,
};
pub use scenario::{Scenario, ScenarioId, ScenarioStore};
pub use scoring::{ensemble, predict, stage_predictions, weighted_mean};
pub use simulator::Simulator;
pub use view::{DashboardView, FeatureControl, StageTab};
