//! Callbacks that drive simulator transitions.
//!
//! Each transition clones the current simulator, applies one mutation and
//! stores the result, so the dashboard re-derives from fresh state.

use crate::app::state::AppState;
use crate::components::ui::simulation_panel::{EditValue, FeatureEdit};
use crate::router::Route;
use scrapcast_core::{InputError, ScenarioId, Simulator, StageId};
use std::collections::BTreeMap;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Apply an operator edit. Rejected input leaves the simulator untouched.
///
/// # Errors
///
/// Returns the boundary error when the edit is rejected.
pub fn apply_edit(sim: &mut Simulator, edit: &FeatureEdit) -> Result<f64, InputError> {
    match &edit.value {
        EditValue::Slider(value) => sim.set_value(edit.stage, &edit.feature_id, *value),
        EditValue::Typed(raw) => sim.set_value_from_str(edit.stage, &edit.feature_id, raw),
    }
}

/// Status line announced when a typed value is rejected.
#[must_use]
pub fn invalid_edit_message(sim: &Simulator, edit: &FeatureEdit) -> String {
    let name = sim
        .registry()
        .stage(edit.stage)
        .and_then(|stage| stage.feature(&edit.feature_id))
        .map_or(edit.feature_id.as_str(), |feature| feature.name.as_str());
    let mut m = BTreeMap::new();
    m.insert("feature", name);
    crate::i18n::tr("simulation.invalid", Some(&m))
}

fn transition(state: &AppState, f: impl FnOnce(&mut Simulator)) {
    let mut next = (*state.simulator).clone();
    f(&mut next);
    state.simulator.set(next);
}

#[derive(Clone)]
pub struct AppHandlers {
    pub select_stage: Callback<StageId>,
    pub edit: Callback<FeatureEdit>,
    pub reset: Callback<()>,
    pub save: Callback<()>,
    pub remove: Callback<ScenarioId>,
    pub export: Callback<()>,
    pub lang_change: Callback<String>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        Self {
            select_stage: build_select_stage(state),
            edit: build_edit(state),
            reset: build_reset(state),
            save: build_save(state),
            remove: build_remove(state),
            export: build_export(state),
            lang_change: build_lang_change(state),
            go_home: build_go_home(navigator),
        }
    }
}

fn build_select_stage(state: &AppState) -> Callback<StageId> {
    let state = state.clone();
    Callback::from(move |id: StageId| {
        transition(&state, |sim| {
            if let Err(err) = sim.select_stage(id) {
                log::warn!("{err}");
            }
        });
    })
}

fn build_edit(state: &AppState) -> Callback<FeatureEdit> {
    let state = state.clone();
    Callback::from(move |edit: FeatureEdit| {
        let mut next = (*state.simulator).clone();
        match apply_edit(&mut next, &edit) {
            Ok(_) => state.simulator.set(next),
            Err(err) => {
                log::warn!("ignored edit of {}: {err}", edit.feature_id);
                crate::a11y::set_status(&invalid_edit_message(&state.simulator, &edit));
            }
        }
    })
}

fn build_reset(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| transition(&state, Simulator::reset_active_stage))
}

fn build_save(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        transition(&state, |sim| {
            let id = sim.save_scenario(crate::dom::now_ms());
            if let Some(saved) = sim.scenarios().get(id) {
                let mut m = BTreeMap::new();
                m.insert("label", saved.label.as_str());
                crate::a11y::set_status(&crate::i18n::tr("scenarios.saved", Some(&m)));
            }
        });
    })
}

fn build_remove(state: &AppState) -> Callback<ScenarioId> {
    let state = state.clone();
    Callback::from(move |id: ScenarioId| {
        transition(&state, |sim| {
            if sim.remove_scenario(id) {
                crate::a11y::set_status(&crate::i18n::t("scenarios.removed"));
            }
        });
    })
}

fn build_export(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let json = match state.simulator.scenarios().export_json() {
            Ok(json) => json,
            Err(err) => {
                crate::dom::console_error(&format!("scenario export failed: {err}"));
                return;
            }
        };
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = crate::dom::copy_text(&json).await {
                crate::dom::console_error(&err.to_string());
            }
        });
        #[cfg(not(target_arch = "wasm32"))]
        log::info!("{json}");
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}

fn build_go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Dashboard);
        }
    })
}
