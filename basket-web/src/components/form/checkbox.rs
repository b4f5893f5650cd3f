use super::foundation as f;
use f::TargetCast;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CheckboxProps {
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub name: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_toggle: f::Callback<bool>,
}

#[f::function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> f::Html {
    let on_change = {
        let on_toggle = props.on_toggle.clone();
        f::Callback::from(move |e: f::Event| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                on_toggle.emit(input.checked());
            }
        })
    };
    let class = f::class_list(&["form__checkbox"], &props.class);
    f::html! {
        <label class="form__label form__label--inline">
            <input
                class={class}
                type="checkbox"
                name={f::attr_value(&props.name)}
                value={f::attr_value(&props.value)}
                checked={props.checked}
                disabled={props.disabled}
                onchange={on_change}
            />
            { props.label.as_ref().map(|l| f::html! { <span>{ l.clone() }</span> }).unwrap_or_default() }
        </label>
    }
}
