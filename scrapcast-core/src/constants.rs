//! Fixed tuning constants for the scrap-rate surrogate.
//!
//! The scoring formula stands in for an already-trained ensemble model, so
//! these numbers are part of its contract. Changing any of them changes every
//! prediction the dashboard shows.

/// Score of a stage whose features all sit exactly at their means.
pub const BASELINE_SCORE: f64 = 5.0;

/// Multiplier applied to each weighted, range-normalised deviation.
pub const DEVIATION_SCALE: f64 = 50.0;

/// Lower clamp bound of a stage prediction, in percent.
pub const SCORE_MIN: f64 = 0.0;

/// Upper clamp bound of a stage prediction, in percent.
pub const SCORE_MAX: f64 = 100.0;

/// Importance weights are shown as percentages on the chart.
pub const IMPORTANCE_PERCENT_SCALE: f64 = 100.0;

/// Prefix of the auto-generated scenario label (`"Cenário 3"`).
pub const SCENARIO_LABEL_PREFIX: &str = "Cenário";

// Reference metrics ---------------------------------------------------------
pub const REFERENCE_TEST_MAE: f64 = 1.997;
pub const REFERENCE_VALIDATION_MAE: f64 = 12.495;
pub const REFERENCE_MODEL_NAME: &str = "RandomForest Ensemble";
