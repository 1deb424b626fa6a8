use anyhow::{Context, Result, anyhow, ensure};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use scrapcast_core::constants::{BASELINE_SCORE, SCORE_MAX, SCORE_MIN};
use scrapcast_core::{Simulator, StageId, weighted_mean};
use std::sync::Arc;

const TOLERANCE: f64 = 1e-9;

/// State handed to a scenario check for one iteration.
pub struct ScenarioCtx {
    pub simulator: Simulator,
    pub rng: ChaCha8Rng,
    /// Fake clock for scenario ids.
    pub clock_ms: u64,
}

impl ScenarioCtx {
    fn tick(&mut self) -> u64 {
        self.clock_ms += 1;
        self.clock_ms
    }
}

pub type ScenarioCheck = fn(&mut ScenarioCtx) -> Result<()>;

#[derive(Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub check: ScenarioCheck,
}

impl std::fmt::Debug for TestScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestScenario")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

const CATALOG: &[TestScenario] = &[
    TestScenario {
        key: "baseline",
        name: "Baseline At Means",
        check: baseline,
    },
    TestScenario {
        key: "clamp",
        name: "Input Clamping",
        check: clamp,
    },
    TestScenario {
        key: "normalization",
        name: "Ensemble Weight Normalization",
        check: normalization,
    },
    TestScenario {
        key: "reset",
        name: "Reset Active Stage",
        check: reset,
    },
    TestScenario {
        key: "snapshot",
        name: "Scenario Snapshot Isolation",
        check: snapshot,
    },
    TestScenario {
        key: "remove",
        name: "Scenario Removal",
        check: remove,
    },
    TestScenario {
        key: "banbury-current",
        name: "Banbury 2 Current Sensitivity",
        check: banbury_current,
    },
    TestScenario {
        key: "fuzz",
        name: "Out-of-range Fuzzing",
        check: fuzz,
    },
];

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = name.trim().to_lowercase();
    CATALOG.iter().copied().find(|s| s.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.name)).collect()
}

pub fn all_scenario_keys() -> Vec<String> {
    CATALOG.iter().map(|s| s.key.to_string()).collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Random in-range value for every feature of every stage.
fn randomize(ctx: &mut ScenarioCtx) -> Result<()> {
    let targets: Vec<(StageId, String, f64, f64)> = ctx
        .simulator
        .registry()
        .stages
        .iter()
        .flat_map(|stage| {
            stage
                .features
                .iter()
                .map(move |f| (stage.id, f.id.clone(), f.min, f.max))
        })
        .collect();
    for (stage, feature_id, min, max) in targets {
        let value = ctx.rng.gen_range(min..=max);
        ctx.simulator.set_value(stage, &feature_id, value)?;
    }
    Ok(())
}

fn baseline(ctx: &mut ScenarioCtx) -> Result<()> {
    let stage_ids: Vec<StageId> = ctx.simulator.registry().stage_ids().collect();
    for id in stage_ids {
        ctx.simulator.select_stage(id)?;
        let prediction = ctx.simulator.stage_prediction();
        ensure!(
            approx(prediction, BASELINE_SCORE),
            "stage {id} predicts {prediction} at its means"
        );
    }
    let ensemble = ctx.simulator.ensemble_prediction();
    ensure!(
        approx(ensemble, BASELINE_SCORE),
        "ensemble predicts {ensemble} at the means"
    );
    Ok(())
}

fn clamp(ctx: &mut ScenarioCtx) -> Result<()> {
    let feature = ctx
        .simulator
        .registry()
        .stage(StageId::B2)
        .and_then(|s| s.features.first())
        .cloned()
        .ok_or_else(|| anyhow!("Banbury 2 has no features"))?;

    let far = feature.span() * 1e6;
    let high = ctx.simulator.set_value(StageId::B2, &feature.id, feature.max + far)?;
    ensure!(approx(high, feature.max), "{} stored {high}, expected max", feature.id);
    let low = ctx.simulator.set_value(StageId::B2, &feature.id, feature.min - far)?;
    ensure!(approx(low, feature.min), "{} stored {low}, expected min", feature.id);
    ensure!(
        ctx.simulator.set_value(StageId::B2, &feature.id, f64::NAN).is_err(),
        "NaN should be rejected"
    );
    ensure!(
        ctx.simulator
            .set_value_from_str(StageId::B2, &feature.id, "not a number")
            .is_err(),
        "unparseable text should be rejected"
    );
    let kept = ctx.simulator.inputs().value(StageId::B2, &feature.id);
    ensure!(kept == Some(feature.min), "rejected edits changed the value to {kept:?}");
    Ok(())
}

fn normalization(ctx: &mut ScenarioCtx) -> Result<()> {
    randomize(ctx)?;
    let factor = ctx.rng.gen_range(0.1..10.0);
    let mut scaled = ctx.simulator.registry().clone();
    for stage in &mut scaled.stages {
        stage.weight *= factor;
    }
    let mut rescaled = Simulator::new(Arc::new(scaled)).context("scaled registry")?;
    for stage in &ctx.simulator.registry().stages {
        for feature in &stage.features {
            if let Some(value) = ctx.simulator.inputs().value(stage.id, &feature.id) {
                rescaled.set_value(stage.id, &feature.id, value)?;
            }
        }
    }

    let original = ctx.simulator.ensemble_prediction();
    let scaled_result = rescaled.ensemble_prediction();
    ensure!(
        (original - scaled_result).abs() < 1e-6,
        "ensemble moved from {original} to {scaled_result} after scaling weights by {factor}"
    );

    let manual = weighted_mean(ctx.simulator.registry().stages.iter().map(|stage| {
        let values = ctx
            .simulator
            .inputs()
            .stage_values(stage.id)
            .cloned()
            .unwrap_or_default();
        (scrapcast_core::predict(stage, &values), stage.weight)
    }));
    ensure!(
        (original - manual).abs() < 1e-9,
        "ensemble {original} differs from the weighted mean {manual}"
    );
    Ok(())
}

fn reset(ctx: &mut ScenarioCtx) -> Result<()> {
    randomize(ctx)?;
    let before = ctx.simulator.inputs().clone();
    let ids: Vec<StageId> = ctx.simulator.registry().stage_ids().collect();
    let target = ids[ctx.rng.gen_range(0..ids.len())];
    ctx.simulator.select_stage(target)?;
    ctx.simulator.reset_active_stage();

    for stage in &ctx.simulator.registry().stages {
        for feature in &stage.features {
            let now = ctx.simulator.inputs().value(stage.id, &feature.id);
            let expected = if stage.id == target {
                Some(feature.mean)
            } else {
                before.value(stage.id, &feature.id)
            };
            ensure!(
                now == expected,
                "after resetting {target}, {}.{} is {now:?} instead of {expected:?}",
                stage.id,
                feature.id
            );
        }
    }
    ensure!(
        approx(ctx.simulator.stage_prediction(), BASELINE_SCORE),
        "reset stage no longer predicts the baseline"
    );
    Ok(())
}

fn snapshot(ctx: &mut ScenarioCtx) -> Result<()> {
    randomize(ctx)?;
    let stage = ctx.simulator.active_stage_id();
    let values = ctx
        .simulator
        .inputs()
        .stage_values(stage)
        .cloned()
        .unwrap_or_default();
    let stage_prediction = ctx.simulator.stage_prediction();
    let ensemble_prediction = ctx.simulator.ensemble_prediction();
    let now = ctx.tick();
    let id = ctx.simulator.save_scenario(now);

    randomize(ctx)?;
    let saved = ctx
        .simulator
        .scenarios()
        .get(id)
        .ok_or_else(|| anyhow!("scenario {id} missing right after save"))?;
    ensure!(saved.stage == stage, "scenario recorded stage {}", saved.stage);
    ensure!(saved.values == values, "scenario values followed later edits");
    ensure!(
        saved.stage_prediction == stage_prediction
            && saved.ensemble_prediction == ensemble_prediction,
        "scenario predictions changed after save"
    );
    Ok(())
}

fn remove(ctx: &mut ScenarioCtx) -> Result<()> {
    let first_clock = ctx.tick();
    let first = ctx.simulator.save_scenario(first_clock);
    randomize(ctx)?;
    let second_clock = ctx.tick();
    let second = ctx.simulator.save_scenario(second_clock);

    ensure!(
        !ctx.simulator.remove_scenario(scrapcast_core::ScenarioId(u64::MAX)),
        "removing an unknown id reported success"
    );
    ensure!(ctx.simulator.scenarios().len() == 2, "unknown id removed something");
    ensure!(ctx.simulator.remove_scenario(first), "first scenario not removed");
    let remaining: Vec<_> = ctx.simulator.scenarios().as_slice().iter().map(|s| s.id).collect();
    ensure!(remaining == vec![second], "remaining ids are {remaining:?}");
    Ok(())
}

fn banbury_current(ctx: &mut ScenarioCtx) -> Result<()> {
    let feature = ctx
        .simulator
        .registry()
        .stage(StageId::B2)
        .and_then(|s| s.feature("by_corrente"))
        .cloned()
        .context("by_corrente is not part of the registry")?;
    ctx.simulator.select_stage(StageId::B2)?;

    let mut previous = SCORE_MIN - 1.0;
    let steps = 10_u32;
    for i in 0..=steps {
        let value = feature.min + feature.span() * f64::from(i) / f64::from(steps);
        ctx.simulator.set_value(StageId::B2, &feature.id, value)?;
        let prediction = ctx.simulator.stage_prediction();
        ensure!(
            prediction >= previous,
            "prediction fell from {previous} to {prediction} at current {value}"
        );
        previous = prediction;
    }
    ensure!(
        previous > BASELINE_SCORE,
        "maximum current should raise the prediction, got {previous}"
    );
    Ok(())
}

fn fuzz(ctx: &mut ScenarioCtx) -> Result<()> {
    let targets: Vec<(StageId, String, f64, f64)> = ctx
        .simulator
        .registry()
        .stages
        .iter()
        .flat_map(|stage| {
            stage
                .features
                .iter()
                .map(move |f| (stage.id, f.id.clone(), f.min, f.max))
        })
        .collect();

    for _ in 0..32 {
        let (stage, feature_id, min, max) = &targets[ctx.rng.gen_range(0..targets.len())];
        let span = max - min;
        let raw = ctx.rng.gen_range((min - 10.0 * span)..(max + 10.0 * span));
        let stored = ctx.simulator.set_value(*stage, feature_id, raw)?;
        ensure!(
            (*min..=*max).contains(&stored),
            "{stage}.{feature_id} stored {stored} for input {raw}"
        );
        let ensemble = ctx.simulator.ensemble_prediction();
        ensure!(
            (SCORE_MIN..=SCORE_MAX).contains(&ensemble),
            "ensemble {ensemble} left the score bounds"
        );
    }
    let view = ctx.simulator.recompute();
    ensure!(
        (SCORE_MIN..=SCORE_MAX).contains(&view.stage_prediction),
        "stage prediction {} left the score bounds",
        view.stage_prediction
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ctx(seed: u64) -> ScenarioCtx {
        ScenarioCtx {
            simulator: Simulator::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            clock_ms: 0,
        }
    }

    #[test]
    fn every_catalog_scenario_passes_on_builtin_registry() {
        for scenario in CATALOG {
            for seed in [1, 42, 1337] {
                let mut c = ctx(seed);
                (scenario.check)(&mut c)
                    .unwrap_or_else(|e| panic!("{} failed for seed {seed}: {e:#}", scenario.key));
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(get_scenario(" Clamp ").map(|s| s.key), Some("clamp"));
        assert!(get_scenario("unknown").is_none());
    }

    #[test]
    fn listing_matches_catalog() {
        let keys: Vec<_> = list_scenarios().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), 8);
        assert_eq!(all_scenario_keys(), keys);
        assert!(keys.contains(&"fuzz"));
    }
}
