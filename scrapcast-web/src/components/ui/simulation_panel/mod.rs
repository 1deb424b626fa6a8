mod feature_control;

pub use feature_control::FeatureControlRow;

use crate::components::daisy_ui::{Button, DaisyColor, DaisySize};
use crate::i18n::t;
use scrapcast_core::{FeatureControl, StageId};
use yew::prelude::*;

/// How the operator changed a value.
#[derive(Clone, Debug, PartialEq)]
pub enum EditValue {
    /// Slider position, already numeric.
    Slider(f64),
    /// Raw text from the number field, parsed by the simulator.
    Typed(String),
}

/// A requested change to one feature of one stage.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureEdit {
    pub stage: StageId,
    pub feature_id: String,
    pub value: EditValue,
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub stage: StageId,
    pub controls: Vec<FeatureControl>,
    pub on_edit: Callback<FeatureEdit>,
    pub on_reset: Callback<()>,
    pub on_save: Callback<()>,
}

#[function_component(SimulationPanel)]
pub fn simulation_panel(p: &Props) -> Html {
    let reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let save = {
        let cb = p.on_save.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="card bg-base-200 p-4 md:p-6" aria-labelledby="simulation-title">
            <div class="flex justify-between items-center mb-4">
                <h2 id="simulation-title" class="text-lg md:text-xl font-bold">{ t("simulation.title") }</h2>
                <div class="flex gap-2">
                    <Button id={AttrValue::from("reset-btn")} size={DaisySize::Sm} variant={DaisyColor::Neutral} onclick={reset}>
                        { t("simulation.reset") }
                    </Button>
                    <Button id={AttrValue::from("save-btn")} size={DaisySize::Sm} variant={DaisyColor::Secondary} onclick={save}>
                        { t("simulation.save") }
                    </Button>
                </div>
            </div>
            <div class="space-y-3 md:space-y-4 max-h-96 overflow-y-auto pr-2">
                { for p.controls.iter().map(|control| html! {
                    <FeatureControlRow
                        key={control.feature.id.clone()}
                        stage={p.stage}
                        control={control.clone()}
                        on_edit={p.on_edit.clone()}
                    />
                }) }
            </div>
        </section>
    }
}
