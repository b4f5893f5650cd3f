use super::handlers::BasketActions;
use crate::i18n;
use basket_core::Checkout;
use web_sys::MouseEvent;
use yew::prelude::*;

pub fn render_pay_button(checkout: &Checkout, actions: &BasketActions) -> Html {
    let button = checkout.button();
    let onclick = actions.pay.reform(|e: MouseEvent| e.prevent_default());
    html! {
        <div class="basket__checkout">
            <p class="basket__total">
                { i18n::tr1("basket.total", "price", &checkout.formatted_price()) }
            </p>
            <button
                type="submit"
                class={checkout.button_classes()}
                disabled={button.is_disabled()}
                aria-busy={button.is_processing().to_string()}
                onclick={onclick}
            >
                { button.text().to_string() }
            </button>
        </div>
    }
}
