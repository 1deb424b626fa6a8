use super::{Feature, ModelRegistry, Stage};
use crate::error::RegistryError;
use std::collections::BTreeSet;

pub(super) fn registry(registry: &ModelRegistry) -> Result<(), RegistryError> {
    if registry.stages.is_empty() {
        return Err(RegistryError::Empty);
    }

    let mut seen = BTreeSet::new();
    for stage in &registry.stages {
        if !seen.insert(stage.id) {
            return Err(RegistryError::DuplicateStage(stage.id));
        }
        check_stage(stage)?;
    }

    if registry.total_weight() <= 0.0 {
        return Err(RegistryError::ZeroWeightSum);
    }
    Ok(())
}

fn check_stage(stage: &Stage) -> Result<(), RegistryError> {
    if !stage.weight.is_finite() || stage.weight < 0.0 {
        return Err(RegistryError::InvalidWeight {
            stage: stage.id,
            weight: stage.weight,
        });
    }
    if stage.features.is_empty() {
        return Err(RegistryError::NoFeatures(stage.id));
    }

    let mut seen = BTreeSet::new();
    for feature in &stage.features {
        if !seen.insert(feature.id.as_str()) {
            return Err(RegistryError::DuplicateFeature {
                stage: stage.id,
                feature: feature.id.clone(),
            });
        }
        check_feature(stage, feature)?;
    }

    for (feature, &value) in &stage.importances {
        if !seen.contains(feature.as_str()) {
            return Err(RegistryError::UnknownImportance {
                stage: stage.id,
                feature: feature.clone(),
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(RegistryError::ImportanceOutOfRange {
                stage: stage.id,
                feature: feature.clone(),
                value,
            });
        }
    }
    Ok(())
}

fn check_feature(stage: &Stage, feature: &Feature) -> Result<(), RegistryError> {
    let finite = [feature.min, feature.max, feature.mean, feature.step]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(RegistryError::NonFinite {
            stage: stage.id,
            feature: feature.id.clone(),
        });
    }
    // The span divides every deviation.
    if feature.min >= feature.max {
        return Err(RegistryError::EmptyRange {
            stage: stage.id,
            feature: feature.id.clone(),
            min: feature.min,
            max: feature.max,
        });
    }
    if feature.mean < feature.min || feature.mean > feature.max {
        return Err(RegistryError::MeanOutOfRange {
            stage: stage.id,
            feature: feature.id.clone(),
            mean: feature.mean,
            min: feature.min,
            max: feature.max,
        });
    }
    if feature.step <= 0.0 {
        return Err(RegistryError::NonPositiveStep {
            stage: stage.id,
            feature: feature.id.clone(),
            step: feature.step,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StageId;

    fn mutate(f: impl FnOnce(&mut ModelRegistry)) -> Result<(), RegistryError> {
        let mut registry = ModelRegistry::builtin();
        f(&mut registry);
        registry.validate()
    }

    #[test]
    fn rejects_empty_registry() {
        assert!(matches!(
            mutate(|r| r.stages.clear()),
            Err(RegistryError::Empty)
        ));
    }

    #[test]
    fn rejects_duplicate_stage() {
        let result = mutate(|r| {
            let copy = r.stages[0].clone();
            r.stages.push(copy);
        });
        assert!(matches!(result, Err(RegistryError::DuplicateStage(StageId::B2))));
    }

    #[test]
    fn rejects_degenerate_range() {
        let result = mutate(|r| {
            let f = &mut r.stages[1].features[2];
            f.min = 30.0;
            f.max = 30.0;
            f.mean = 30.0;
        });
        assert!(matches!(result, Err(RegistryError::EmptyRange { stage: StageId::B3, .. })));
    }

    #[test]
    fn rejects_mean_outside_range() {
        let result = mutate(|r| r.stages[0].features[4].mean = 400.0);
        assert!(matches!(result, Err(RegistryError::MeanOutOfRange { .. })));
    }

    #[test]
    fn rejects_non_positive_step_and_non_finite_bounds() {
        assert!(matches!(
            mutate(|r| r.stages[2].features[0].step = 0.0),
            Err(RegistryError::NonPositiveStep { .. })
        ));
        assert!(matches!(
            mutate(|r| r.stages[2].features[0].max = f64::INFINITY),
            Err(RegistryError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_orphan_and_out_of_range_importance() {
        assert!(matches!(
            mutate(|r| {
                r.stages[0].importances.insert("ghost".to_string(), 0.1);
            }),
            Err(RegistryError::UnknownImportance { .. })
        ));
        assert!(matches!(
            mutate(|r| {
                r.stages[0].importances.insert("by_rpm".to_string(), 1.5);
            }),
            Err(RegistryError::ImportanceOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_bad_weights() {
        assert!(matches!(
            mutate(|r| r.stages[1].weight = -0.1),
            Err(RegistryError::InvalidWeight { .. })
        ));
        assert!(matches!(
            mutate(|r| r.stages.iter_mut().for_each(|s| s.weight = 0.0)),
            Err(RegistryError::ZeroWeightSum)
        ));
    }

    #[test]
    fn accepts_missing_importances() {
        mutate(|r| r.stages[0].importances.clear()).unwrap();
    }
}
