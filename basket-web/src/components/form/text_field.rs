use super::foundation as f;
use f::TargetCast;

/// Labelled single-line input.
#[derive(f::Properties, PartialEq, Clone)]
pub struct TextFieldProps {
    pub label: f::AttrValue,
    pub name: f::AttrValue,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub input_type: Option<f::AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> f::Html {
    let oninput = {
        let cb = props.oninput.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let class = f::class_list(&["form__input"], &props.class);
    let input_type = props.input_type.clone().unwrap_or_else(|| "text".into());
    f::html! {
        <label class="form__label">
            <span>{ props.label.clone() }</span>
            <input
                class={class}
                type={input_type}
                name={props.name.clone()}
                value={props.value.clone()}
                autocomplete={f::attr_value(&props.autocomplete)}
                oninput={oninput}
            />
        </label>
    }
}
