#![cfg(target_arch = "wasm32")]

use basket_core::ItemKind;
use basket_web::{dom, mount, nav_badge, stripe};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset_body(markup: &str) -> web_sys::HtmlElement {
    let body = dom::document()
        .expect("document")
        .body()
        .expect("document body");
    body.set_inner_html(markup);
    body
}

fn element(selector: &str) -> HtmlElement {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .expect("element exists")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

#[wasm_bindgen_test]
fn dataset_reads_camel_case_keys() {
    reset_body(r#"<div id="seed" data-email="a@b.c" data-other-count="3"></div>"#);
    let data = dom::dataset(&element("#seed"));
    assert_eq!(data.get("email").map(String::as_str), Some("a@b.c"));
    assert_eq!(data.get("otherCount").map(String::as_str), Some("3"));
}

#[wasm_bindgen_test]
fn badge_shows_remaining_plus_other_count() {
    reset_body(
        r#"<nav><span><span class="js-site-nav__alert" data-key="horses" data-other-count="2">3</span></span></nav>
           <span class="js-site-nav__alert" data-key="donations">1</span>"#,
    );
    nav_badge::update_site_nav_alert(ItemKind::Membership, 1).expect("badge update");
    let badge = element("[data-key='horses']");
    assert_eq!(badge.inner_text(), "3");
    assert_eq!(badge.dataset().get("currentCount").as_deref(), Some("3"));
    assert_eq!(element("[data-key='donations']").inner_text(), "1");
}

#[wasm_bindgen_test]
fn badge_hides_container_at_zero() {
    reset_body(
        r#"<nav id="nav"><span><span class="js-site-nav__alert" data-key="donations">1</span></span></nav>"#,
    );
    nav_badge::update_site_nav_alert(ItemKind::Donation, 0).expect("badge update");
    let nav = element("#nav");
    assert_eq!(
        nav.style().get_property_value("display").expect("style"),
        "none"
    );
}

#[wasm_bindgen_test]
fn mounts_one_widget_per_host() {
    reset_body(
        r#"<div data-module="basket" data-memberships='[{"id":1,"level":{"price":1000}}]'></div>
           <div data-module="basket" data-donations='[{"id":2,"amount":500}]'></div>"#,
    );
    assert_eq!(mount::mount_all().expect("mount"), 2);
}

#[wasm_bindgen_test]
fn tokenization_reply_reports_a_throwing_resolver() {
    let resolve = js_sys::Function::new_with_args("reply", "return reply;");
    assert!(stripe::forward_reply(&resolve, &"tok_1".into()).is_ok());

    let broken = js_sys::Function::new_with_args("reply", "throw new Error('closed');");
    let err = stripe::forward_reply(&broken, &"tok_1".into()).unwrap_err();
    assert!(err.to_string().contains("closed"));
}
