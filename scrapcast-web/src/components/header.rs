use crate::i18n::{locales, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header role="banner" class="text-center mb-8">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <nav aria-label={t("nav.language")} class="flex justify-end">
                <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                <select id="lang-select" class="select select-bordered select-xs" onchange={on_change}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                    }) }
                </select>
            </nav>
            <h1 class="text-2xl md:text-3xl font-bold mb-2">{ t("app.title") }</h1>
            <p class="text-sm md:text-base opacity-70">{ t("app.subtitle") }</p>
        </header>
    }
}
