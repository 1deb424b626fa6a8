use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::pages::dashboard::DashboardPage;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let view = state.simulator.recompute();

    let main_view = match route {
        Some(Route::NotFound) => html! { <NotFound on_go_home={handlers.go_home.clone()} /> },
        Some(Route::Dashboard) | None => html! {
            <DashboardPage
                view={view.clone()}
                on_select_stage={handlers.select_stage.clone()}
                on_edit={handlers.edit.clone()}
                on_reset={handlers.reset.clone()}
                on_save={handlers.save.clone()}
                on_remove={handlers.remove.clone()}
                on_export={handlers.export.clone()}
            />
        },
    };

    html! {
        <div class="min-h-screen p-4 md:p-6">
            <div class="max-w-7xl mx-auto">
                <crate::components::header::Header
                    on_lang_change={handlers.lang_change.clone()}
                    current_lang={(*state.current_language).clone()}
                />
                <main id="main" role="main">
                    <style>{ crate::a11y::visible_focus_css() }</style>
                    <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
                    { main_view }
                </main>
                <crate::components::footer::Footer reference={view.reference} />
            </div>
        </div>
    }
}
