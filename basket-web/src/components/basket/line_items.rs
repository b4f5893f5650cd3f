use super::handlers::BasketActions;
use crate::components::form::Checkbox;
use crate::i18n;
use basket_core::{Checkout, LineItem};
use web_sys::MouseEvent;
use yew::prelude::*;

/// Row label, falling back to "Membership #7" style names.
pub fn item_label<T: LineItem>(item: &T) -> String {
    item.label().map_or_else(
        || {
            i18n::tr1(
                &format!("basket.{}s.fallback_name", T::KIND),
                "id",
                &item.id().to_string(),
            )
        },
        str::to_string,
    )
}

pub fn render_line_items(checkout: &Checkout, actions: &BasketActions) -> Html {
    if checkout.item_count() == 0 {
        return html! { <p class="basket__empty">{ i18n::t("basket.empty") }</p> };
    }
    html! {
        <>
            { render_group(checkout, actions, checkout.basket().memberships()) }
            { render_group(checkout, actions, checkout.basket().donations()) }
        </>
    }
}

fn render_group<T: LineItem>(checkout: &Checkout, actions: &BasketActions, items: &[T]) -> Html {
    if items.is_empty() {
        return Html::default();
    }
    html! {
        <div class={classes!("basket__group", format!("basket__group--{}", T::KIND))}>
            <h3 class="basket__heading">{ i18n::t(&format!("basket.{}s.heading", T::KIND)) }</h3>
            <ul class="basket__items">
                { for items.iter().map(|item| render_row(checkout, actions, item)) }
            </ul>
        </div>
    }
}

fn render_row<T: LineItem>(checkout: &Checkout, actions: &BasketActions, item: &T) -> Html {
    let kind = T::KIND;
    let id = item.id();
    let on_toggle = actions
        .toggle_item
        .reform(move |checked: bool| (kind, id, checked));
    let on_delete = actions.delete_item.reform(move |_: MouseEvent| (kind, id));
    html! {
        <li class="basket__item" data-kind={kind.as_str()} data-id={id.to_string()}>
            <Checkbox
                name={format!("{kind}s[]")}
                value={id.to_string()}
                label={item_label(item)}
                checked={checkout.basket().is_checked(kind, id)}
                on_toggle={on_toggle}
            />
            <span class="basket__price">{ checkout.format_amount(item.price()) }</span>
            <button type="button" class="basket__delete" onclick={on_delete}>
                { i18n::t("basket.delete") }
            </button>
        </li>
    }
}
