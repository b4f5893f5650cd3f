//! Card tokenization through the page's Stripe.js (`Stripe.card.createToken`).
use crate::dom;
use crate::error::WebError;
use async_trait::async_trait;
use basket_core::{CardDetails, PaymentProcessor, TokenResponse};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// [`PaymentProcessor`] backed by the global `Stripe` object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripeTokenizer;

fn property(target: &JsValue, name: &'static str) -> Result<JsValue, WebError> {
    let value = Reflect::get(target, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        Err(WebError::Missing(name))
    } else {
        Ok(value)
    }
}

/// `Stripe.card` and its `createToken` method.
fn create_token_fn() -> Result<(JsValue, Function), WebError> {
    let window = dom::window()?;
    let stripe = property(&window, "Stripe")?;
    let card = property(&stripe, "card")?;
    let create_token = property(&card, "createToken")?
        .dyn_into::<Function>()
        .map_err(|_| WebError::Missing("createToken"))?;
    Ok((card, create_token))
}

/// Settle the token promise with the processor's reply.
///
/// # Errors
/// Returns an error if calling `resolve` throws.
pub fn forward_reply(resolve: &Function, response: &JsValue) -> Result<(), WebError> {
    resolve.call1(&JsValue::UNDEFINED, response)?;
    Ok(())
}

#[allow(clippy::future_not_send)]
async fn request_token(details: &CardDetails) -> Result<TokenResponse, WebError> {
    let (card, create_token) = create_token_fn()?;
    let payload = serde_wasm_bindgen::to_value(details)?;

    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve =
        resolve_slot.ok_or_else(|| WebError::Js("resolve function should be set".into()))?;
    let callback = Closure::once(move |_status: JsValue, response: JsValue| {
        if let Err(err) = forward_reply(&resolve, &response) {
            log::error!("Could not deliver the tokenization reply: {err}");
        }
    });

    create_token.call2(&card, &payload, callback.as_ref())?;
    let response = JsFuture::from(promise).await?;
    drop(callback);

    Ok(serde_wasm_bindgen::from_value(response)?)
}

#[async_trait(?Send)]
impl PaymentProcessor for StripeTokenizer {
    async fn create_token(&self, details: &CardDetails) -> TokenResponse {
        match request_token(details).await {
            Ok(response) => response,
            Err(err) => {
                log::error!("Card tokenization unavailable: {err}");
                TokenResponse::failure(&err.to_string())
            }
        }
    }
}
