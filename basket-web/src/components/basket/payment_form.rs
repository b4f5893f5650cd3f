use super::handlers::BasketActions;
use crate::components::form::{Checkbox, Radio, TextField};
use crate::i18n;
use basket_core::constants::NEW_CARD_SENTINEL;
use basket_core::{AddressField, CardField, Checkout, PaymentForm};
use yew::prelude::*;

const CARD_FIELDS: [(CardField, &str, &str); 4] = [
    (CardField::Number, "number", "cc-number"),
    (CardField::ExpiryMonth, "expiry_month", "cc-exp-month"),
    (CardField::ExpiryYear, "expiry_year", "cc-exp-year"),
    (CardField::Cvc, "cvc", "cc-csc"),
];

const ADDRESS_FIELDS: [(AddressField, &str, &str); 8] = [
    (AddressField::Name, "name", "cc-name"),
    (AddressField::Address1, "address1", "address-line1"),
    (AddressField::Address2, "address2", "address-line2"),
    (AddressField::Address3, "address3", "address-line3"),
    (AddressField::City, "city", "address-level2"),
    (AddressField::County, "county", "address-level1"),
    (AddressField::Postcode, "postcode", "postal-code"),
    (AddressField::Country, "country", "country"),
];

pub fn render_payment_form(checkout: &Checkout, actions: &BasketActions) -> Html {
    let form = checkout.form();
    html! {
        <div class="basket__payment">
            <h3 class="basket__heading">{ i18n::t("basket.payment.heading") }</h3>
            { render_card_choice(checkout, actions) }
            if form.additional_card() {
                { render_card_fields(form, actions) }
            }
            { render_billing(form, actions) }
        </div>
    }
}

fn render_card_choice(checkout: &Checkout, actions: &BasketActions) -> Html {
    let form = checkout.form();
    let Some(stored) = form.stored_card().filter(|_| checkout.has_stored_customer()) else {
        return Html::default();
    };
    let new_card = form.chosen_card().is_new();
    html! {
        <div class="basket__cards" role="radiogroup">
            <Radio
                name="card"
                value={stored.to_string()}
                checked={!new_card}
                label={i18n::t("basket.payment.stored_card")}
                on_select={actions.choose_card.clone()}
            />
            <Radio
                name="card"
                value={NEW_CARD_SENTINEL}
                checked={new_card}
                label={i18n::t("basket.payment.new_card")}
                on_select={actions.choose_card.clone()}
            />
        </div>
    }
}

fn render_card_fields(form: &PaymentForm, actions: &BasketActions) -> Html {
    html! {
        <fieldset class="basket__card">
            { for CARD_FIELDS.iter().map(|&(field, key, autocomplete)| html! {
                <TextField
                    label={i18n::t(&format!("basket.payment.{key}"))}
                    name={key}
                    value={form.card.field(field).to_string()}
                    input_type={if field == CardField::Number { "tel" } else { "text" }}
                    autocomplete={autocomplete}
                    oninput={actions.card_field.reform(move |value: String| (field, value))}
                />
            }) }
        </fieldset>
    }
}

fn render_billing(form: &PaymentForm, actions: &BasketActions) -> Html {
    html! {
        <fieldset class="basket__billing">
            <legend>{ i18n::t("basket.billing.heading") }</legend>
            <Checkbox
                label={i18n::t("basket.billing.use_saved")}
                checked={form.billing_address()}
                on_toggle={actions.billing_address.clone()}
            />
            { for ADDRESS_FIELDS.iter().map(|&(field, key, autocomplete)| html! {
                <TextField
                    label={i18n::t(&format!("basket.billing.{key}"))}
                    name={key}
                    value={form.address.field(field).to_string()}
                    autocomplete={autocomplete}
                    oninput={actions.address_field.reform(move |value: String| (field, value))}
                />
            }) }
        </fieldset>
    }
}
