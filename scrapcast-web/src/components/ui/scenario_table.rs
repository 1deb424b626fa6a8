use crate::components::daisy_ui::{Badge, Button, DaisyColor, DaisySize};
use crate::i18n::{fmt_pct, t, tr};
use scrapcast_core::{Scenario, ScenarioId, StageTab};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub scenarios: Vec<Scenario>,
    /// Stage names and colours for the badge column.
    pub tabs: Vec<StageTab>,
    pub on_remove: Callback<ScenarioId>,
    #[prop_or_default]
    pub on_export: Callback<()>,
}

/// Saved-scenario comparison. Renders nothing while the list is empty.
#[function_component(ScenarioTable)]
pub fn scenario_table(p: &Props) -> Html {
    if p.scenarios.is_empty() {
        return Html::default();
    }
    let count_text = {
        let count = p.scenarios.len().to_string();
        let mut m = BTreeMap::new();
        m.insert("count", count.as_str());
        tr("scenarios.count", Some(&m))
    };
    let export = {
        let cb = p.on_export.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="card bg-base-200 mt-6 p-4 md:p-6" aria-labelledby="scenarios-title">
            <div class="flex justify-between items-center mb-4">
                <h2 id="scenarios-title" class="text-lg md:text-xl font-bold">{ t("scenarios.title") }</h2>
                <div class="flex items-center gap-2">
                    <span class="text-xs opacity-60">{ count_text }</span>
                    <Button id={AttrValue::from("export-btn")} size={DaisySize::Xs} ghost={true} onclick={export}>
                        { t("scenarios.export") }
                    </Button>
                </div>
            </div>
            <div class="overflow-x-auto">
                <table class="table table-zebra w-full text-xs md:text-sm" role="table">
                    <thead>
                        <tr>
                            <th scope="col" class="text-left">{ t("scenarios.col_label") }</th>
                            <th scope="col" class="text-left">{ t("scenarios.col_stage") }</th>
                            <th scope="col" class="text-right">{ t("scenarios.col_stage_prediction") }</th>
                            <th scope="col" class="text-right">{ t("scenarios.col_ensemble_prediction") }</th>
                            <th scope="col" class="text-center">{ t("scenarios.col_actions") }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for p.scenarios.iter().map(|scenario| row(scenario, &p.tabs, &p.on_remove)) }
                    </tbody>
                </table>
            </div>
        </section>
    }
}

fn row(scenario: &Scenario, tabs: &[StageTab], on_remove: &Callback<ScenarioId>) -> Html {
    let tab = tabs.iter().find(|tab| tab.id == scenario.stage);
    let stage_name = tab.map_or_else(|| scenario.stage.to_string(), |tab| tab.name.clone());
    let stage_color = tab.map(|tab| AttrValue::from(tab.color.clone()));
    let remove = {
        let cb = on_remove.clone();
        let id = scenario.id;
        Callback::from(move |_| cb.emit(id))
    };
    html! {
        <tr key={scenario.id.0.to_string()}>
            <td class="font-medium">{ scenario.label.clone() }</td>
            <td>
                <Badge size={DaisySize::Sm} color={stage_color} label={AttrValue::from(stage_name)} />
            </td>
            <td class="text-right font-mono">{ fmt_pct(scenario.stage_prediction, 2) }</td>
            <td class="text-right font-mono text-secondary">{ fmt_pct(scenario.ensemble_prediction, 2) }</td>
            <td class="text-center">
                <Button size={DaisySize::Xs} variant={DaisyColor::Error} ghost={true} onclick={remove}>
                    { t("scenarios.remove") }
                </Button>
            </td>
        </tr>
    }
}
