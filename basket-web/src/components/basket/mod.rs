//! The basket widget: line items, payment form and pay button over one
//! shared [`Checkout`].
//!
//! The model lives in a `use_mut_ref` cell so the pay guard is checked and
//! set inside the click handler; redraws go through `use_force_update`.

mod handlers;
mod line_items;
mod pay_button;
mod payment_form;
mod state;
mod summary;

pub use state::BasketProps;

use self::handlers::BasketActions;
use self::line_items::render_line_items;
use self::pay_button::render_pay_button;
use self::payment_form::render_payment_form;
use self::summary::render_summary;
use basket_core::Checkout;
use yew::prelude::*;

#[function_component(Basket)]
pub fn basket(props: &BasketProps) -> Html {
    let model = {
        let props = props.clone();
        use_mut_ref(move || Checkout::new(props.seed, props.config))
    };
    let force_update = use_force_update();
    let redraw = Callback::from(move |()| force_update.force_update());
    let actions = BasketActions::new(&model, &redraw);

    let checkout = model.borrow();
    html! {
        <form class="basket" novalidate={true} onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            { render_summary(&checkout, &actions) }
            { render_line_items(&checkout, &actions) }
            { render_payment_form(&checkout, &actions) }
            { render_pay_button(&checkout, &actions) }
        </form>
    }
}
