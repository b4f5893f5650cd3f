//! Interface copy, resolved by dotted key from an embedded JSON bundle.
use basket_core::ButtonLabels;
use serde_json::Value;
use std::collections::BTreeMap;

thread_local! {
    static BUNDLE: Value = serde_json::from_str(include_str!("../i18n/en.json"))
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok());
            count
                .and_then(|count| map.get(plural_category(count)))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Translate a key
///
/// Unknown keys render as the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{name}` placeholders filled from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    BUNDLE
        .with(|bundle| get_nested_value(bundle, key).and_then(|v| render_value(v, args)))
        .unwrap_or_else(|| key.to_string())
}

/// Single-placeholder shorthand for [`tr`].
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert(name, value);
    tr(key, Some(&vars))
}

/// Pay button labels in the page language.
#[must_use]
pub fn button_labels() -> ButtonLabels {
    ButtonLabels {
        confirm: t("basket.button.confirm"),
        confirm_with_total: t("basket.button.confirm_with_total"),
        processing: t("basket.button.processing"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_selection_defaults() {
        assert_eq!(tr1("basket.item_count", "count", "1"), "1 item");
        assert_eq!(tr1("basket.item_count", "count", "3"), "3 items");
        assert_eq!(t("basket.item_count"), "{count} items");
    }

    #[test]
    fn interpolation_fills_placeholders() {
        assert_eq!(tr1("basket.total", "price", "£3.50"), "Total: £3.50");
    }

    #[test]
    fn missing_keys_fall_back_to_key() {
        assert_eq!(t("basket.nope"), "basket.nope");
        assert_eq!(t("basket.button"), "basket.button");
    }

    #[test]
    fn localized_labels_match_core_defaults() {
        assert_eq!(button_labels(), ButtonLabels::default());
    }
}
