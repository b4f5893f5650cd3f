pub use web_sys::{Event, HtmlInputElement, InputEvent};
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Classes, Html, Properties, html};

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

#[cfg(test)]
mod tests {
    use super::{attr_value, class_list};
    use yew::Classes;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("is-wide");
        let rendered = class_list(&["form__input"], &extra).to_string();
        assert!(rendered.contains("form__input"));
        assert!(rendered.contains("is-wide"));
    }

    #[test]
    fn attr_value_clones_optional_attr() {
        let value = Some(yew::AttrValue::from("postcode"));
        assert_eq!(attr_value(&value).as_deref(), Some("postcode"));
    }
}
