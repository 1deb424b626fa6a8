use yew::prelude::*;

/// Shown for any path the router does not know.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="card bg-base-200 p-6 text-center not-found" aria-live="assertive">
            <h1 class="text-xl font-bold">{ crate::i18n::t("not_found.title") }</h1>
            <p class="my-4">{ crate::i18n::t("not_found.message") }</p>
            <button type="button" class="btn btn-secondary" onclick={go_home}>
                { crate::i18n::t("not_found.back") }
            </button>
        </section>
    }
}
