use basket_core::{ButtonLabels, ChosenCard, ItemKind};
use basket_web::host::confirm_delete_message;
use basket_web::http::{CsrfToken, decode_order_reply, outbound_headers};
use basket_web::i18n;
use basket_web::mount::props_from_dataset;
use std::collections::BTreeMap;

fn dataset(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn dataset_seeds_props() {
    let props = props_from_dataset(&dataset(&[
        ("email", "rider@example.org"),
        ("memberships", r#"[{"id":1,"level":{"price":1000}}]"#),
        ("donations", r#"[{"id":2,"amount":500}]"#),
        ("card", "card_new"),
    ]));
    assert_eq!(props.seed.email, "rider@example.org");
    assert_eq!(props.seed.memberships.len(), 1);
    assert_eq!(props.seed.donations.len(), 1);
    assert_eq!(props.seed.card, ChosenCard::NewCard);
    assert_eq!(props.config.currency_symbol, "£");
}

#[test]
fn malformed_lists_and_config_fall_back_to_defaults() {
    let props = props_from_dataset(&dataset(&[
        ("memberships", "[{oops"),
        ("donations", r#"[{"id":2,"amount":500}]"#),
        ("config", "not json"),
    ]));
    assert!(props.seed.memberships.is_empty());
    assert_eq!(props.seed.donations.len(), 1);
    assert_eq!(props.config.order_endpoint, "/orders");
}

#[test]
fn config_attribute_overrides_defaults() {
    let props = props_from_dataset(&dataset(&[(
        "config",
        r#"{"currency_symbol":"€","labels":{"confirm_with_total":"Pay {price}"}}"#,
    )]));
    assert_eq!(props.config.currency_symbol, "€");
    assert_eq!(props.config.labels.with_total("€1.00"), "Pay €1.00");
    assert_eq!(props.config.labels.processing, ButtonLabels::default().processing);
}

#[test]
fn transport_alert_wraps_reason() {
    assert_eq!(
        i18n::tr1("basket.errors.transport", "reason", "Network error: offline"),
        "Sorry, we could not reach the server. Network error: offline"
    );
}

#[test]
fn delete_prompts_come_from_bundle() {
    assert!(confirm_delete_message(ItemKind::Donation).ends_with("this donation?"));
}

#[test]
fn csrf_header_uses_configured_name() {
    let csrf = CsrfToken {
        header: "X-XSRF".into(),
        token: Some("t0k".into()),
    };
    let headers = outbound_headers(&csrf, true);
    assert!(headers.contains(&("X-XSRF".to_string(), "t0k".to_string())));
}

#[test]
fn accepted_order_reply_decodes() {
    let reply = decode_order_reply(200, "OK", r#"{"statusCode":200,"order_id":99}"#).unwrap();
    assert!(reply.is_accepted());
    assert_eq!(reply.order_id.map(|id| id.to_string()).as_deref(), Some("99"));
}
