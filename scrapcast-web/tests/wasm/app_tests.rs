#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::Renderer;

use scrapcast_web::app::App;
use scrapcast_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    scrapcast_web::i18n::set_lang("pt");
    Renderer::<App>::with_root(ensure_app_root()).render();
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;
}

async fn settle() {
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;
}

fn click(selector: &str) {
    let doc = dom::document().expect("document");
    let el: HtmlElement = doc
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into()
        .expect("cast to element");
    el.click();
}

fn bubbling(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(kind, &init).expect("event")
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    render_app().await;
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
}

#[wasm_bindgen_test]
async fn language_toggle_updates_html_lang() {
    render_app().await;
    let doc = dom::document().expect("document");
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("lang select")
        .dyn_into()
        .expect("cast to select");
    select.set_value("en");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang"), Some("en".into()));

    select.set_value("pt");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    assert_eq!(html.get_attribute("lang"), Some("pt-BR".into()));
}

#[wasm_bindgen_test]
async fn save_and_remove_scenario_round_trip() {
    render_app().await;
    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("scenarios-title").is_none());

    click("#save-btn");
    settle().await;
    assert!(doc.get_element_by_id("scenarios-title").is_some());

    click("tbody button");
    settle().await;
    assert!(doc.get_element_by_id("scenarios-title").is_none());
}

#[wasm_bindgen_test]
async fn stage_button_switches_controls() {
    render_app().await;
    click("#stage-P");
    settle().await;
    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("feature-P-ps_pressao_vulc").is_some());
    assert!(doc.get_element_by_id("feature-B2-by_corrente").is_none());
}

#[wasm_bindgen_test]
async fn typed_value_is_kept_until_committed() {
    render_app().await;
    click("#stage-B3");
    settle().await;
    let doc = dom::document().expect("document");
    let field: HtmlInputElement = doc
        .get_element_by_id("feature-B3-by_corrente")
        .expect("current field")
        .dyn_into()
        .expect("cast to input");

    for partial in ["4", "45", "450"] {
        field.set_value(partial);
        field
            .dispatch_event(&bubbling("input"))
            .expect("dispatch input");
        settle().await;
        assert_eq!(field.value(), partial);
    }

    field
        .dispatch_event(&bubbling("change"))
        .expect("dispatch change");
    settle().await;
    assert_eq!(field.value(), "450");
}
