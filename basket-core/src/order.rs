//! Order endpoint payloads.
use crate::constants::ORDER_ACCEPTED_STATUS;
use crate::items::ItemId;
use crate::payment::ChosenCard;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Body posted to the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_exists: bool,
    /// Processor token, sent as `false` when paying with a stored card.
    #[serde(serialize_with = "token_or_false")]
    pub stripe_token: Option<String>,
    pub stripe_email: String,
    pub card: ChosenCard,
    pub memberships: Vec<ItemId>,
    pub donations: Vec<ItemId>,
    /// Echoed back for the server's postcode check.
    pub entered_postcode: String,
}

fn token_or_false<S: Serializer>(token: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match token {
        Some(token) if !token.is_empty() => serializer.serialize_str(token),
        _ => serializer.serialize_bool(false),
    }
}

/// Order identifier; the endpoint may send it as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(u64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Reply from the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub order_id: Option<OrderId>,
    #[serde(default)]
    pub message: Option<String>,
}

impl OrderResponse {
    #[must_use]
    pub fn accepted(order_id: u64) -> Self {
        Self {
            status_code: ORDER_ACCEPTED_STATUS,
            order_id: Some(OrderId::Number(order_id)),
            message: None,
        }
    }

    #[must_use]
    pub fn rejected(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            order_id: None,
            message: Some(message.to_string()),
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.status_code == ORDER_ACCEPTED_STATUS
    }
}

/// What the widget does with an order reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Leave the page for the order confirmation.
    Redirect(String),
    /// Show the message on the pay button.
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(token: Option<&str>) -> OrderRequest {
        OrderRequest {
            customer_exists: token.is_none(),
            stripe_token: token.map(str::to_string),
            stripe_email: "ada@example.org".into(),
            card: ChosenCard::NewCard,
            memberships: vec![1, 3],
            donations: vec![2],
            entered_postcode: "LS1 1AA".into(),
        }
    }

    #[test]
    fn request_uses_endpoint_field_names() {
        let value = serde_json::to_value(request(Some("tok_9"))).unwrap();
        assert_eq!(
            value,
            json!({
                "customerExists": false,
                "stripeToken": "tok_9",
                "stripeEmail": "ada@example.org",
                "card": "card_new",
                "memberships": [1, 3],
                "donations": [2],
                "enteredPostcode": "LS1 1AA"
            })
        );
    }

    #[test]
    fn missing_token_is_sent_as_false() {
        let value = serde_json::to_value(request(None)).unwrap();
        assert_eq!(value["stripeToken"], json!(false));
        assert_eq!(value["customerExists"], json!(true));
    }

    #[test]
    fn response_accepts_numeric_and_string_ids() {
        let numeric: OrderResponse =
            serde_json::from_str(r#"{"statusCode":200,"order_id":17}"#).unwrap();
        assert!(numeric.is_accepted());
        assert_eq!(numeric.order_id.unwrap().to_string(), "17");

        let text: OrderResponse =
            serde_json::from_str(r#"{"statusCode":200,"order_id":"A-17"}"#).unwrap();
        assert_eq!(text.order_id.unwrap().to_string(), "A-17");

        let rejected: OrderResponse =
            serde_json::from_str(r#"{"statusCode":422,"message":"Postcode mismatch"}"#).unwrap();
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.message.as_deref(), Some("Postcode mismatch"));
    }
}
