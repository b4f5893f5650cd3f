use crate::error::WebError;
use js_sys::{Function, Object, Promise, Reflect};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Window};

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns an error outside of a browser context.
pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::Missing("window"))
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when no document is attached to the window.
pub fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::Missing("document"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Every element matching `selector`, in document order.
///
/// # Errors
/// Returns an error if the selector is invalid or no document is available.
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>, WebError> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Snapshot of an element's `data-*` attributes, keyed by their camelCase name.
#[must_use]
pub fn dataset(element: &HtmlElement) -> BTreeMap<String, String> {
    let map = element.dataset();
    Object::keys(&map)
        .iter()
        .filter_map(|key| {
            let name = key.as_string()?;
            let value = Reflect::get(&map, &key).ok()?.as_string()?;
            Some((name, value))
        })
        .collect()
}

/// Ask the user a yes/no question with the native dialog.
#[must_use]
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| Ok(win.confirm_with_message(message)?))
        .unwrap_or(false)
}

/// Show a blocking native alert.
pub fn alert(message: &str) {
    if let Err(err) = window().and_then(|win| Ok(win.alert_with_message(message)?)) {
        log::error!("Could not show alert: {err}");
    }
}

/// Point the browser at `url`.
///
/// # Errors
/// Returns an error if the location cannot be changed.
pub fn navigate(url: &str) -> Result<(), WebError> {
    window()?.location().set_href(url)?;
    Ok(())
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}
