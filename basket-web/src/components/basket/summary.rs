use super::handlers::BasketActions;
use crate::i18n;
use basket_core::{Checkout, SelectionState};
use web_sys::MouseEvent;
use yew::prelude::*;

pub fn render_summary(checkout: &Checkout, actions: &BasketActions) -> Html {
    let count = checkout.item_count().to_string();
    let (label, onclick) = match checkout.selection_state() {
        SelectionState::Selected => (
            i18n::t("basket.deselect_all"),
            actions.deselect_all.reform(|_: MouseEvent| ()),
        ),
        SelectionState::Deselected => (
            i18n::t("basket.select_all"),
            actions.select_all.reform(|_: MouseEvent| ()),
        ),
    };
    html! {
        <header class="basket__header">
            <h2 class="basket__title">{ i18n::t("basket.title") }</h2>
            <p class="basket__count">{ i18n::tr1("basket.item_count", "count", &count) }</p>
            if checkout.item_count() > 0 {
                <button type="button" class="basket__selection" onclick={onclick}>{ label }</button>
            }
        </header>
    }
}
