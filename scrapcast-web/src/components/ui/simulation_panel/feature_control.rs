use super::{EditValue, FeatureEdit};
use crate::components::daisy_ui::{NumberInput, Range};
use crate::i18n::tr;
use scrapcast_core::{FeatureControl, StageId};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub stage: StageId,
    pub control: FeatureControl,
    pub on_edit: Callback<FeatureEdit>,
}

/// Number field, slider and min/mean/max legend of a single feature.
#[function_component(FeatureControlRow)]
pub fn feature_control_row(p: &Props) -> Html {
    let feature = &p.control.feature;
    let input_id = format!("feature-{}-{}", p.stage, feature.id);

    let on_typed = {
        let cb = p.on_edit.clone();
        let stage = p.stage;
        let feature_id = feature.id.clone();
        Callback::from(move |raw: String| {
            cb.emit(FeatureEdit {
                stage,
                feature_id: feature_id.clone(),
                value: EditValue::Typed(raw),
            });
        })
    };
    let on_slider = {
        let cb = p.on_edit.clone();
        let stage = p.stage;
        let feature_id = feature.id.clone();
        Callback::from(move |value: f64| {
            cb.emit(FeatureEdit {
                stage,
                feature_id: feature_id.clone(),
                value: EditValue::Slider(value),
            });
        })
    };

    let mean_label = {
        let mean = feature.mean.to_string();
        let mut m = BTreeMap::new();
        m.insert("value", mean.as_str());
        tr("simulation.mean", Some(&m))
    };

    html! {
        <div class="rounded-lg bg-base-300 p-2.5 md:p-3">
            <div class="flex justify-between items-center mb-2">
                <label for={input_id.clone()} class="text-xs md:text-sm font-medium">{ feature.name.clone() }</label>
                <div class="flex items-center gap-1 md:gap-2">
                    <NumberInput
                        id={AttrValue::from(input_id)}
                        class={classes!("w-20", "md:w-24", "text-right")}
                        value={p.control.value}
                        min={feature.min}
                        max={feature.max}
                        step={feature.step}
                        on_commit={on_typed}
                    />
                    <span class="text-xs opacity-60 w-6 md:w-8">{ feature.unit.clone() }</span>
                </div>
            </div>
            <Range
                class={classes!("w-full")}
                value={p.control.value}
                min={feature.min}
                max={feature.max}
                step={feature.step}
                aria_label={AttrValue::from(feature.name.clone())}
                on_change={on_slider}
            />
            <div class="flex justify-between text-xs opacity-60 mt-1">
                <span>{ feature.min.to_string() }</span>
                <span class="text-secondary">{ mean_label }</span>
                <span>{ feature.max.to_string() }</span>
            </div>
        </div>
    }
}
