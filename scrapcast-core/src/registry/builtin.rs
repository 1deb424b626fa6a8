//! Constant tables of the three production stages.
//!
//! Ranges, means, steps, importances and ensemble weights reproduce the
//! exported model summary value for value.

use super::{Feature, Stage, StageId};
use std::collections::BTreeMap;

fn feature(id: &str, name: &str, min: f64, max: f64, mean: f64, step: f64, unit: &str) -> Feature {
    Feature {
        id: id.to_string(),
        name: name.to_string(),
        min,
        max,
        mean,
        step,
        unit: unit.to_string(),
    }
}

fn importances(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(id, weight)| ((*id).to_string(), *weight))
        .collect()
}

fn banbury_2() -> Stage {
    Stage {
        id: StageId::B2,
        name: "Banbury 2".to_string(),
        weight: 0.1453,
        color: "#3498db".to_string(),
        features: vec![
            feature("by_tempo_mistura", "Tempo de Mistura", 0.0, 20.0, 11.4, 0.1, "min"),
            feature("by_temp", "Temperatura", 70.0, 85.0, 76.5, 0.1, "°C"),
            feature("by_rpm", "Rotação", 5.0, 25.0, 17.8, 0.1, "RPM"),
            feature("by_pressao_mistura", "Pressão de Mistura", 0.0, 5.0, 2.4, 0.1, "bar"),
            feature("by_corrente", "Corrente Elétrica", 100.0, 320.0, 242.0, 1.0, "A"),
            feature("by_cronomet_mistura", "Cronômetro Mistura", 20.0, 270.0, 165.0, 1.0, "s"),
        ],
        importances: importances(&[
            ("by_corrente", 0.70),
            ("by_rpm", 0.14),
            ("by_cronomet_mistura", 0.07),
            ("by_tempo_mistura", 0.04),
            ("by_temp", 0.03),
            ("by_pressao_mistura", 0.02),
        ]),
    }
}

fn banbury_3() -> Stage {
    Stage {
        id: StageId::B3,
        name: "Banbury 3".to_string(),
        weight: 0.0493,
        color: "#e74c3c".to_string(),
        features: vec![
            feature("by_tempo_mistura", "Tempo de Mistura", 35.0, 50.0, 41.0, 0.1, "min"),
            feature("by_temp", "Temperatura", 95.0, 110.0, 104.0, 0.1, "°C"),
            feature("by_rpm", "Rotação", 28.0, 32.0, 30.0, 0.1, "RPM"),
            feature("by_pressao_mistura", "Pressão de Mistura", 3.0, 4.0, 3.3, 0.01, "bar"),
            feature("by_corrente", "Corrente Elétrica", 420.0, 485.0, 455.0, 1.0, "A"),
            feature("by_cronomet_mistura", "Cronômetro Mistura", 165.0, 185.0, 175.0, 1.0, "s"),
        ],
        importances: importances(&[
            ("by_temp", 0.36),
            ("by_rpm", 0.21),
            ("by_cronomet_mistura", 0.20),
            ("by_tempo_mistura", 0.17),
            ("by_pressao_mistura", 0.03),
            ("by_corrente", 0.02),
        ]),
    }
}

fn prensa() -> Stage {
    let plato = |n: u8| {
        feature(
            &format!("ps_temp_plato_{n:02}"),
            &format!("Temp. Plato {n:02}"),
            140.0,
            180.0,
            160.0,
            1.0,
            "°C",
        )
    };
    let mut features: Vec<Feature> = (1..=6).map(plato).collect();
    features.push(feature("ps_pressao_vulc", "Pressão Vulcanização", 100.0, 200.0, 150.0, 1.0, "bar"));
    features.push(feature("ps_periodo_vulc", "Período Vulcanização", 300.0, 600.0, 450.0, 10.0, "s"));

    Stage {
        id: StageId::P,
        name: "Prensa".to_string(),
        weight: 0.8053,
        color: "#27ae60".to_string(),
        features,
        importances: importances(&[
            ("ps_temp_plato_04", 0.18),
            ("ps_pressao_vulc", 0.17),
            ("ps_temp_plato_01", 0.15),
            ("ps_temp_plato_02", 0.12),
            ("ps_temp_plato_03", 0.10),
            ("ps_temp_plato_05", 0.10),
            ("ps_temp_plato_06", 0.09),
            ("ps_periodo_vulc", 0.09),
        ]),
    }
}

pub(super) fn stages() -> Vec<Stage> {
    vec![banbury_2(), banbury_3(), prensa()]
}
