//! Requests to the order and line-item endpoints.
//!
//! Every outbound request is built by [`build_request`], which attaches the
//! page's anti-forgery token.
use crate::dom;
use crate::error::WebError;
use async_trait::async_trait;
use basket_core::{OrderApi, OrderRequest, OrderResponse, TransportError};
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

/// Anti-forgery token and the header it travels in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub header: String,
    pub token: Option<String>,
}

impl CsrfToken {
    /// Read the token the server rendered into the page.
    ///
    /// Looks at `window.Laravel.csrfToken` first, then `<meta name="csrf-token">`.
    #[must_use]
    pub fn from_page(header: &str) -> Self {
        let token = global_csrf_token().or_else(meta_csrf_token);
        if token.is_none() {
            log::warn!("No CSRF token found on the page");
        }
        Self {
            header: header.to_string(),
            token,
        }
    }
}

fn global_csrf_token() -> Option<String> {
    let window = dom::window().ok()?;
    let context = Reflect::get(&window, &JsValue::from_str("Laravel")).ok()?;
    if context.is_undefined() || context.is_null() {
        return None;
    }
    Reflect::get(&context, &JsValue::from_str("csrfToken"))
        .ok()?
        .as_string()
        .filter(|token| !token.is_empty())
}

fn meta_csrf_token() -> Option<String> {
    dom::document()
        .ok()?
        .query_selector("meta[name='csrf-token']")
        .ok()
        .flatten()?
        .get_attribute("content")
        .filter(|token| !token.is_empty())
}

/// Headers shared by every request the basket sends.
#[must_use]
pub fn outbound_headers(csrf: &CsrfToken, has_body: bool) -> Vec<(String, String)> {
    let mut headers = vec![
        (String::from("Accept"), String::from("application/json")),
        (
            String::from("X-Requested-With"),
            String::from("XMLHttpRequest"),
        ),
    ];
    if has_body {
        headers.push((
            String::from("Content-Type"),
            String::from("application/json"),
        ));
    }
    if let Some(token) = &csrf.token {
        headers.push((csrf.header.clone(), token.clone()));
    }
    headers
}

/// Build a same-origin request carrying the CSRF header.
///
/// # Errors
/// Returns an error if the browser rejects the headers or URL.
pub fn build_request(
    method: &str,
    url: &str,
    body: Option<&str>,
    csrf: &CsrfToken,
) -> Result<Request, WebError> {
    let headers = Headers::new()?;
    for (name, value) in outbound_headers(csrf, body.is_some()) {
        headers.set(&name, &value)?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    init.set_credentials(RequestCredentials::SameOrigin);
    init.set_headers(&headers);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }
    Ok(Request::new_with_str_and_init(url, &init)?)
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(request: &Request) -> Result<Response, WebError> {
    let resp_value = JsFuture::from(dom::window()?.fetch_with_request(request)).await?;
    Ok(resp_value.dyn_into::<Response>()?)
}

#[allow(clippy::future_not_send)]
async fn response_text(response: &Response) -> Result<String, WebError> {
    let text = JsFuture::from(response.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

/// Interpret the order endpoint's reply.
///
/// A readable `{ statusCode, ... }` body wins even on an HTTP error status,
/// since it carries the message meant for the customer.
///
/// # Errors
/// Returns [`TransportError::Status`] for unreadable error replies and
/// [`TransportError::Decode`] for unreadable success replies.
pub fn decode_order_reply(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<OrderResponse, TransportError> {
    match serde_json::from_str::<OrderResponse>(body) {
        Ok(reply) => Ok(reply),
        Err(_) if !(200..300).contains(&status) => Err(TransportError::Status {
            status,
            status_text: status_text.to_string(),
        }),
        Err(err) => Err(TransportError::Decode(err.to_string())),
    }
}

/// [`OrderApi`] over `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOrderApi {
    csrf_header: String,
}

impl FetchOrderApi {
    #[must_use]
    pub fn new(csrf_header: &str) -> Self {
        Self {
            csrf_header: csrf_header.to_string(),
        }
    }

    fn csrf(&self) -> CsrfToken {
        CsrfToken::from_page(&self.csrf_header)
    }
}

fn network(err: WebError) -> TransportError {
    TransportError::Network(err.to_string())
}

#[async_trait(?Send)]
impl OrderApi for FetchOrderApi {
    async fn submit_order(
        &self,
        endpoint: &str,
        order: &OrderRequest,
    ) -> Result<OrderResponse, TransportError> {
        let body = serde_json::to_string(order)
            .map_err(|err| TransportError::Decode(err.to_string()))?;
        let request =
            build_request("POST", endpoint, Some(&body), &self.csrf()).map_err(network)?;
        let response = fetch_response(&request).await.map_err(network)?;
        let text = response_text(&response).await.map_err(network)?;
        decode_order_reply(response.status(), &response.status_text(), &text)
    }

    async fn delete_line_item(&self, url: &str) -> Result<(), TransportError> {
        let request = build_request("DELETE", url, None, &self.csrf()).map_err(network)?;
        let response = fetch_response(&request).await.map_err(network)?;
        if response.ok() {
            Ok(())
        } else {
            Err(TransportError::Status {
                status: response.status(),
                status_text: response.status_text(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: Option<&str>) -> CsrfToken {
        CsrfToken {
            header: String::from("X-CSRF-TOKEN"),
            token: value.map(str::to_string),
        }
    }

    #[test]
    fn every_request_carries_the_csrf_header() {
        let headers = outbound_headers(&token(Some("abc123")), false);
        assert!(headers.contains(&("X-CSRF-TOKEN".into(), "abc123".into())));
        assert!(!headers.iter().any(|(name, _)| name == "Content-Type"));
    }

    #[test]
    fn json_bodies_declare_content_type() {
        let headers = outbound_headers(&token(None), true);
        assert!(headers.contains(&("Content-Type".into(), "application/json".into())));
        assert!(!headers.iter().any(|(name, _)| name == "X-CSRF-TOKEN"));
    }

    #[test]
    fn structured_error_body_beats_http_status() {
        let reply = decode_order_reply(
            422,
            "Unprocessable",
            r#"{"statusCode":422,"message":"Card declined"}"#,
        )
        .unwrap();
        assert_eq!(reply.message.as_deref(), Some("Card declined"));
    }

    #[test]
    fn unreadable_error_body_becomes_status_error() {
        let err = decode_order_reply(500, "Internal Server Error", "<html>").unwrap_err();
        assert_eq!(
            err,
            TransportError::Status {
                status: 500,
                status_text: "Internal Server Error".into()
            }
        );
    }

    #[test]
    fn unreadable_success_body_is_decode_error() {
        let err = decode_order_reply(200, "OK", "").unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}
