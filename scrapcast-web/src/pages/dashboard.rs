use crate::components::ui::importance_chart::ImportanceChart;
use crate::components::ui::metrics_row::MetricsRow;
use crate::components::ui::scenario_table::ScenarioTable;
use crate::components::ui::simulation_panel::{FeatureEdit, SimulationPanel};
use crate::components::ui::stage_tabs::StageTabs;
use scrapcast_core::{DashboardView, ScenarioId, StageId};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub view: DashboardView,
    pub on_select_stage: Callback<StageId>,
    pub on_edit: Callback<FeatureEdit>,
    pub on_reset: Callback<()>,
    pub on_save: Callback<()>,
    pub on_remove: Callback<ScenarioId>,
    #[prop_or_default]
    pub on_export: Callback<()>,
}

/// The simulator screen, a pure function of the derived view.
#[function_component(DashboardPage)]
pub fn dashboard_page(p: &DashboardPageProps) -> Html {
    let view = &p.view;
    html! {
        <>
            <MetricsRow
                ensemble_prediction={view.ensemble_prediction}
                stage_prediction={view.stage_prediction}
                stage_name={AttrValue::from(view.active_name.clone())}
                stage_color={AttrValue::from(view.active_color.clone())}
                reference={view.reference.clone()}
            />
            <StageTabs tabs={view.tabs.clone()} on_select={p.on_select_stage.clone()} />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <ImportanceChart bars={view.importance.clone()} />
                <SimulationPanel
                    stage={view.active_stage}
                    controls={view.controls.clone()}
                    on_edit={p.on_edit.clone()}
                    on_reset={p.on_reset.clone()}
                    on_save={p.on_save.clone()}
                />
            </div>
            <ScenarioTable
                scenarios={view.scenarios.clone()}
                tabs={view.tabs.clone()}
                on_remove={p.on_remove.clone()}
                on_export={p.on_export.clone()}
            />
        </>
    }
}
