use crate::i18n::{fmt_fixed, fmt_pct, t, tr};
use scrapcast_core::ImportanceBar;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub bars: Vec<ImportanceBar>,
}

/// Upper end of the importance axis, in percent.
const DOMAIN_MAX: f64 = 100.0;

fn bar_width(value: f64) -> f64 {
    (value / DOMAIN_MAX * 100.0).clamp(0.0, 100.0)
}

/// Horizontal bar chart of feature importances on a fixed 0-100% axis.
#[function_component(ImportanceChart)]
pub fn importance_chart(p: &Props) -> Html {
    html! {
        <section class="card bg-base-200 p-4 md:p-6" aria-labelledby="importance-title">
            <h2 id="importance-title" class="text-lg md:text-xl font-bold mb-4">{ t("importance.title") }</h2>
            <ul class="importance-chart space-y-2" role="list">
                { for p.bars.iter().map(|bar| {
                    let pct = fmt_fixed(bar.value, 1);
                    let tooltip = {
                        let mut m = BTreeMap::new();
                        m.insert("pct", pct.as_str());
                        tr("importance.tooltip", Some(&m))
                    };
                    let style = format!(
                        "width: {:.2}%; background-color: {}; opacity: 0.8",
                        bar_width(bar.value),
                        bar.color
                    );
                    html! {
                        <li class="grid grid-cols-[8rem_1fr_3.5rem] items-center gap-2 text-xs" title={tooltip}>
                            <span class="truncate">{ bar.label.clone() }</span>
                            <span class="h-4 rounded-r bg-base-300">
                                <span class="block h-4 rounded-r" style={style} data-feature={bar.feature_id.clone()}></span>
                            </span>
                            <span class="text-right font-mono">{ fmt_pct(bar.value, 1) }</span>
                        </li>
                    }
                }) }
            </ul>
            <div class="grid grid-cols-[8rem_1fr_3.5rem] text-xs opacity-60 mt-1" aria-hidden="true">
                <span></span>
                <span class="flex justify-between"><span>{ "0%" }</span><span>{ "50%" }</span><span>{ "100%" }</span></span>
                <span></span>
            </div>
        </section>
    }
}
