//! Callbacks wiring user input into the shared checkout model.
use crate::host::BrowserHost;
use crate::http::FetchOrderApi;
use crate::stripe::StripeTokenizer;
use basket_core::flow;
use basket_core::{AddressField, CardField, Checkout, ChosenCard, ItemId, ItemKind, PayStep};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct BasketActions {
    pub select_all: Callback<()>,
    pub deselect_all: Callback<()>,
    pub toggle_item: Callback<(ItemKind, ItemId, bool)>,
    pub delete_item: Callback<(ItemKind, ItemId)>,
    pub pay: Callback<()>,
    pub card_field: Callback<(CardField, String)>,
    pub address_field: Callback<(AddressField, String)>,
    pub choose_card: Callback<AttrValue>,
    pub billing_address: Callback<bool>,
}

/// Synchronous model edit followed by a redraw.
fn action<T: 'static>(
    model: &Rc<RefCell<Checkout>>,
    redraw: &Callback<()>,
    apply: impl Fn(&mut Checkout, T) + 'static,
) -> Callback<T> {
    let model = Rc::clone(model);
    let redraw = redraw.clone();
    Callback::from(move |value: T| {
        apply(&mut model.borrow_mut(), value);
        redraw.emit(());
    })
}

impl BasketActions {
    pub fn new(model: &Rc<RefCell<Checkout>>, redraw: &Callback<()>) -> Self {
        let host = Rc::new(BrowserHost::new(redraw.clone()));
        let api = Rc::new(FetchOrderApi::new(&model.borrow().config().csrf_header));

        let delete_item = {
            let model = Rc::clone(model);
            let host = Rc::clone(&host);
            let api = Rc::clone(&api);
            Callback::from(move |(kind, id): (ItemKind, ItemId)| {
                let model = Rc::clone(&model);
                let host = Rc::clone(&host);
                let api = Rc::clone(&api);
                spawn_local(async move {
                    flow::delete_line_item(&model, api.as_ref(), host.as_ref(), id, kind).await;
                });
            })
        };

        let pay = {
            let model = Rc::clone(model);
            Callback::from(move |()| {
                let step = flow::start_payment(&model, host.as_ref());
                if matches!(step, PayStep::Ignored) {
                    log::debug!("Payment already in progress");
                    return;
                }
                let model = Rc::clone(&model);
                let host = Rc::clone(&host);
                let api = Rc::clone(&api);
                spawn_local(async move {
                    flow::complete_payment(
                        &model,
                        &StripeTokenizer,
                        api.as_ref(),
                        host.as_ref(),
                        step,
                    )
                    .await;
                });
            })
        };

        Self {
            select_all: action(model, redraw, |checkout, ()| checkout.select_all()),
            deselect_all: action(model, redraw, |checkout, ()| checkout.deselect_all()),
            toggle_item: action(
                model,
                redraw,
                |checkout, (kind, id, checked): (ItemKind, ItemId, bool)| {
                    checkout.update_checked_items(checked, id, kind);
                },
            ),
            delete_item,
            pay,
            card_field: action(
                model,
                redraw,
                |checkout, (field, value): (CardField, String)| {
                    checkout.form_mut().set_card_field(field, value);
                },
            ),
            address_field: action(
                model,
                redraw,
                |checkout, (field, value): (AddressField, String)| {
                    checkout.form_mut().set_address_field(field, value);
                },
            ),
            choose_card: action(model, redraw, |checkout, value: AttrValue| {
                checkout
                    .form_mut()
                    .choose_card(ChosenCard::parse(Some(value.as_str())));
            }),
            billing_address: action(model, redraw, |checkout, use_stored: bool| {
                checkout.form_mut().set_billing_address(use_stored);
            }),
        }
    }
}
