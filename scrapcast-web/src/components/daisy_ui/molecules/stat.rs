use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq)]
pub struct StatItem {
    pub title: f::AttrValue,
    pub value: f::AttrValue,
    pub description: Option<f::AttrValue>,
    /// Accent colour of the value and the left border.
    pub accent: Option<f::AttrValue>,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct StatProps {
    pub items: Vec<StatItem>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Stat)]
pub fn stat(props: &StatProps) -> f::Html {
    let class = f::class_list(&["stats", "stats-vertical", "md:stats-horizontal", "shadow", "w-full"], &props.class);
    f::html! {
        <div class={class} role="group" aria-label={f::attr_value(&props.aria_label)}>
            { for props.items.iter().map(|item| {
                let border = item.accent.as_ref().map(|c| f::AttrValue::from(format!("border-left: 4px solid {c}")));
                let value_style = item.accent.as_ref().map(|c| f::accent_style("color", c));
                f::html!{
                    <div class="stat" style={border}>
                        <div class="stat-title">{ item.title.clone() }</div>
                        <div class="stat-value" style={value_style}>{ item.value.clone() }</div>
                        { item.description.as_ref().map(|d| f::html!{ <div class="stat-desc">{ d.clone() }</div> }).unwrap_or_default() }
                    </div>
                }
            }) }
        </div>
    }
}
