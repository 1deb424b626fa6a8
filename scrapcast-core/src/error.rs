use crate::registry::StageId;
use std::convert::Infallible;
use thiserror::Error;

/// Rejections raised at the input boundary before a value reaches the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown stage: {0}")]
    UnknownStage(String),
    #[error("stage {stage} has no feature named {feature}")]
    UnknownFeature { stage: StageId, feature: String },
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("non-finite value for {feature}")]
    NonFinite { feature: String },
}

/// Problems found while loading or validating a model registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("registry declares no stages")]
    Empty,
    #[error("stage {0} is declared more than once")]
    DuplicateStage(StageId),
    #[error("stage {0} declares no features")]
    NoFeatures(StageId),
    #[error("stage {stage} declares feature {feature} more than once")]
    DuplicateFeature { stage: StageId, feature: String },
    #[error("feature {feature} of stage {stage} has a non-finite bound")]
    NonFinite { stage: StageId, feature: String },
    #[error("feature {feature} of stage {stage} needs min < max (min={min}, max={max})")]
    EmptyRange {
        stage: StageId,
        feature: String,
        min: f64,
        max: f64,
    },
    #[error("feature {feature} of stage {stage} has mean {mean} outside [{min}, {max}]")]
    MeanOutOfRange {
        stage: StageId,
        feature: String,
        mean: f64,
        min: f64,
        max: f64,
    },
    #[error("feature {feature} of stage {stage} needs a positive step (step={step})")]
    NonPositiveStep {
        stage: StageId,
        feature: String,
        step: f64,
    },
    #[error("stage {stage} assigns importance to unknown feature {feature}")]
    UnknownImportance { stage: StageId, feature: String },
    #[error("importance {value} of {feature} in stage {stage} is outside [0, 1]")]
    ImportanceOutOfRange {
        stage: StageId,
        feature: String,
        value: f64,
    },
    #[error("stage {stage} has invalid ensemble weight {weight}")]
    InvalidWeight { stage: StageId, weight: f64 },
    #[error("stage ensemble weights must have a positive sum")]
    ZeroWeightSum,
}

impl From<Infallible> for RegistryError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
