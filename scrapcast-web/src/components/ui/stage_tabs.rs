use crate::components::daisy_ui::Button;
use crate::i18n::{fmt_fixed, t, tr};
use scrapcast_core::{StageId, StageTab};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub tabs: Vec<StageTab>,
    pub on_select: Callback<StageId>,
}

/// One button per stage, carrying its ensemble weight.
#[function_component(StageTabs)]
pub fn stage_tabs(p: &Props) -> Html {
    html! {
        <nav class="flex flex-wrap gap-2 mb-6" aria-label={t("stages.label")}>
            { for p.tabs.iter().map(|tab| {
                let onclick = {
                    let cb = p.on_select.clone();
                    let id = tab.id;
                    Callback::from(move |_| cb.emit(id))
                };
                let weight = {
                    let pct = fmt_fixed(tab.weight_percent, 1);
                    let mut m = BTreeMap::new();
                    m.insert("pct", pct.as_str());
                    tr("stages.weight", Some(&m))
                };
                let style = tab
                    .active
                    .then(|| AttrValue::from(format!("background-color: {}; border-color: {}; color: #fff", tab.color, tab.color)));
                html! {
                    <Button
                        id={AttrValue::from(format!("stage-{}", tab.id))}
                        outline={!tab.active}
                        pressed={Some(tab.active)}
                        style={style}
                        onclick={onclick}
                    >
                        { tab.name.clone() }
                        <span class="ml-2 text-xs opacity-75">{ weight }</span>
                    </Button>
                }
            }) }
        </nav>
    }
}
