use crate::components::daisy_ui::foundation as f;
use f::TargetCast;
use yew::use_state;

/// Text typed into a number field, held back until the entry is committed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftText(Option<String>);

impl DraftText {
    pub fn edit(&mut self, raw: String) {
        self.0 = Some(raw);
    }

    /// Finish the entry and hand back what was typed, if anything.
    pub fn commit(&mut self) -> Option<String> {
        self.0.take()
    }

    /// Text the field should display: the pending draft, else the stored value.
    #[must_use]
    pub fn shown(&self, value: f64) -> String {
        self.0.clone().unwrap_or_else(|| value.to_string())
    }
}

/// Numeric text field. Keystrokes stay local; the raw text goes to the owner
/// on `change` (blur or Enter) for parsing.
#[derive(f::Properties, PartialEq, Clone)]
pub struct NumberInputProps {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_commit: f::Callback<String>,
}

#[f::function_component(NumberInput)]
pub fn number_input(props: &NumberInputProps) -> f::Html {
    let draft = use_state(DraftText::default);

    let on_input = {
        let draft = draft.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.edit(input.value());
                draft.set(next);
            }
        })
    };
    let on_change = {
        let draft = draft.clone();
        let cb = props.on_commit.clone();
        f::Callback::from(move |e: f::Event| {
            let mut next = (*draft).clone();
            let typed = next
                .commit()
                .or_else(|| e.target_dyn_into::<f::HtmlInputElement>().map(|i| i.value()));
            draft.set(next);
            if let Some(raw) = typed {
                cb.emit(raw);
            }
        })
    };

    let class = f::class_list(&["input", "input-bordered", "input-xs"], &props.class);
    f::html! {
        <input
            id={f::attr_value(&props.id)}
            class={class}
            type="number"
            inputmode="decimal"
            min={props.min.to_string()}
            max={props.max.to_string()}
            step={props.step.to_string()}
            value={draft.shown(props.value)}
            oninput={on_input}
            onchange={on_change}
        />
    }
}
