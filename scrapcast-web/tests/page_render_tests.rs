use futures::executor::block_on;
use scrapcast_core::{ModelRegistry, Simulator, StageId};
use scrapcast_web::components::footer::{Footer, Props as FooterProps};
use scrapcast_web::components::header::{Header, Props as HeaderProps};
use scrapcast_web::pages::dashboard::{DashboardPage, DashboardPageProps};
use scrapcast_web::pages::not_found::{NotFound, Props as NotFoundProps};
use yew::{Callback, LocalServerRenderer};

fn dashboard_props(sim: &Simulator) -> DashboardPageProps {
    DashboardPageProps {
        view: sim.recompute(),
        on_select_stage: Callback::noop(),
        on_edit: Callback::noop(),
        on_reset: Callback::noop(),
        on_save: Callback::noop(),
        on_remove: Callback::noop(),
        on_export: Callback::noop(),
    }
}

fn render_dashboard(sim: &Simulator) -> String {
    block_on(LocalServerRenderer::<DashboardPage>::with_props(dashboard_props(sim)).render())
}

#[test]
fn dashboard_renders_baseline_metrics_in_portuguese() {
    scrapcast_web::i18n::set_lang("pt");
    let html = render_dashboard(&Simulator::default());
    assert!(html.contains("Predição Ensemble"), "{html}");
    assert!(html.contains("Predição Banbury 2"));
    assert!(html.contains("5.00%"), "baseline predictions render with two decimals");
    assert!(html.contains("1.997"));
    assert!(html.contains("12.495"));
    assert!(html.contains("Importância das Variáveis"));
}

#[test]
fn stage_buttons_show_weights() {
    scrapcast_web::i18n::set_lang("pt");
    let html = render_dashboard(&Simulator::default());
    assert!(html.contains("(14.5%)"), "{html}");
    assert!(html.contains("(4.9%)"));
    assert!(html.contains("(80.5%)"));
    assert!(html.contains("aria-pressed=\"true\""));
}

#[test]
fn dashboard_follows_active_stage_and_edits() {
    scrapcast_web::i18n::set_lang("pt");
    let mut sim = Simulator::default();
    sim.set_value(StageId::B2, "by_corrente", 320.0).unwrap();
    let html = render_dashboard(&sim);
    assert!(html.contains("17.41%"), "{html}");
    assert!(html.contains("Corrente Elétrica"));
    assert!(html.contains("70.0%"), "top importance bar should render");

    sim.select_stage(StageId::P).unwrap();
    let html = render_dashboard(&sim);
    assert!(html.contains("Predição Prensa"));
    assert!(html.contains("Pressão Vulcanização"));
    assert!(!html.contains("Corrente Elétrica"));
}

#[test]
fn scenario_table_appears_after_save() {
    scrapcast_web::i18n::set_lang("pt");
    let mut sim = Simulator::default();
    assert!(!render_dashboard(&sim).contains("Comparação de Cenários"));
    sim.save_scenario(1);
    let html = render_dashboard(&sim);
    assert!(html.contains("Comparação de Cenários"));
    assert!(html.contains("Cenário 1"));
}

#[test]
fn dashboard_switches_to_english() {
    scrapcast_web::i18n::set_lang("en");
    let html = render_dashboard(&Simulator::default());
    assert!(html.contains("Ensemble Prediction"), "{html}");
    assert!(html.contains("Feature Importance"));
    scrapcast_web::i18n::set_lang("pt");
}

#[test]
fn footer_and_header_render_reference_text() {
    scrapcast_web::i18n::set_lang("pt");
    let footer = block_on(
        LocalServerRenderer::<Footer>::with_props(FooterProps {
            reference: ModelRegistry::builtin().reference,
        })
        .render(),
    );
    assert!(footer.contains("Modelo: RandomForest Ensemble | MAE Validação: 12.495"), "{footer}");
    assert!(footer.contains("Simulação aproximada para visualização"));

    let header = block_on(
        LocalServerRenderer::<Header>::with_props(HeaderProps {
            on_lang_change: Callback::noop(),
            current_lang: "pt".to_string(),
        })
        .render(),
    );
    assert!(header.contains("Simulador de Predição de Inutilizados"));
    assert!(header.contains("Modelo Ensemble: Banbury 2 + Banbury 3 + Prensa"));
    assert!(header.contains("English"));
}

#[test]
fn not_found_offers_way_back() {
    scrapcast_web::i18n::set_lang("pt");
    let html = block_on(
        LocalServerRenderer::<NotFound>::with_props(NotFoundProps {
            on_go_home: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Página não encontrada"));
    assert!(html.contains("Voltar ao simulador"));
}
