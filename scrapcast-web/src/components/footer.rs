use crate::i18n::{fmt_fixed, t, tr};
use scrapcast_core::ReferenceMetrics;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub reference: ReferenceMetrics,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let mae = fmt_fixed(p.reference.validation_mae, 3);
    let model_line = {
        let mut m = BTreeMap::new();
        m.insert("model", p.reference.model_name.as_str());
        m.insert("mae", mae.as_str());
        tr("footer.model", Some(&m))
    };
    html! {
        <footer class="mt-8 text-center text-xs md:text-sm opacity-60">
            <p>{ model_line }</p>
            <p class="mt-1">{ t("footer.disclaimer") }</p>
        </footer>
    }
}
