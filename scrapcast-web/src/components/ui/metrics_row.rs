use crate::components::daisy_ui::{Stat, StatItem};
use crate::i18n::{fmt_fixed, fmt_pct, t, tr};
use scrapcast_core::ReferenceMetrics;
use std::collections::BTreeMap;
use yew::prelude::*;

const ENSEMBLE_ACCENT: &str = "#a855f7";
const TEST_MAE_ACCENT: &str = "#22c55e";
const VALIDATION_MAE_ACCENT: &str = "#eab308";

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub ensemble_prediction: f64,
    pub stage_prediction: f64,
    pub stage_name: AttrValue,
    pub stage_color: AttrValue,
    pub reference: ReferenceMetrics,
}

/// The four headline cards: both predictions and the reference errors.
#[function_component(MetricsRow)]
pub fn metrics_row(p: &Props) -> Html {
    let stage_title = {
        let mut m = BTreeMap::new();
        m.insert("stage", p.stage_name.as_str());
        tr("metrics.stage", Some(&m))
    };
    let items = vec![
        StatItem {
            title: t("metrics.ensemble").into(),
            value: fmt_pct(p.ensemble_prediction, 2).into(),
            description: None,
            accent: Some(ENSEMBLE_ACCENT.into()),
        },
        StatItem {
            title: stage_title.into(),
            value: fmt_pct(p.stage_prediction, 2).into(),
            description: None,
            accent: Some(p.stage_color.clone()),
        },
        StatItem {
            title: t("metrics.test_mae").into(),
            value: fmt_fixed(p.reference.test_mae, 3).into(),
            description: None,
            accent: Some(TEST_MAE_ACCENT.into()),
        },
        StatItem {
            title: t("metrics.validation_mae").into(),
            value: fmt_fixed(p.reference.validation_mae, 3).into(),
            description: None,
            accent: Some(VALIDATION_MAE_ACCENT.into()),
        },
    ];
    html! {
        <section class="mb-6" aria-live="polite">
            <Stat items={items} aria_label={AttrValue::from(t("metrics.label"))} />
        </section>
    }
}
