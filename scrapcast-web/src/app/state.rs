use scrapcast_core::Simulator;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub simulator: UseStateHandle<Simulator>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        simulator: use_state(crate::registry::initial_simulator),
        current_language: use_state(crate::i18n::current_lang),
    }
}
