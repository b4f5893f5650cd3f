//! Per-widget configuration.
use crate::constants::{
    CSRF_HEADER, DEFAULT_CURRENCY_SYMBOL, DONATION_RESOURCE, ERROR_DISPLAY_MS,
    MEMBERSHIP_RESOURCE, ORDER_CONFIRMATION_BASE, ORDER_ENDPOINT,
};
use crate::items::{ItemId, ItemKind};
use serde::{Deserialize, Serialize};

/// Texts shown on the pay button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    #[serde(default = "ButtonLabels::default_confirm")]
    pub confirm: String,
    /// Template for the label once a total is known; `{price}` is replaced.
    #[serde(default = "ButtonLabels::default_confirm_with_total")]
    pub confirm_with_total: String,
    #[serde(default = "ButtonLabels::default_processing")]
    pub processing: String,
}

impl ButtonLabels {
    fn default_confirm() -> String {
        String::from("Confirm & Pay")
    }

    fn default_confirm_with_total() -> String {
        String::from("Confirm & Pay ({price})")
    }

    fn default_processing() -> String {
        String::from("Processing...")
    }

    /// Default label for a basket whose total formats as `formatted_price`.
    #[must_use]
    pub fn with_total(&self, formatted_price: &str) -> String {
        self.confirm_with_total.replace("{price}", formatted_price)
    }
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            confirm: Self::default_confirm(),
            confirm_with_total: Self::default_confirm_with_total(),
            processing: Self::default_processing(),
        }
    }
}

/// Endpoints, presentation and timing for one basket widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketConfig {
    #[serde(default = "BasketConfig::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "BasketConfig::default_error_display_ms")]
    pub error_display_ms: u32,
    #[serde(default = "BasketConfig::default_order_endpoint")]
    pub order_endpoint: String,
    #[serde(default = "BasketConfig::default_confirmation_base")]
    pub confirmation_base: String,
    #[serde(default = "BasketConfig::default_membership_resource")]
    pub membership_resource: String,
    #[serde(default = "BasketConfig::default_donation_resource")]
    pub donation_resource: String,
    #[serde(default = "BasketConfig::default_csrf_header")]
    pub csrf_header: String,
    #[serde(default)]
    pub labels: ButtonLabels,
}

impl BasketConfig {
    fn default_currency_symbol() -> String {
        DEFAULT_CURRENCY_SYMBOL.to_string()
    }

    const fn default_error_display_ms() -> u32 {
        ERROR_DISPLAY_MS
    }

    fn default_order_endpoint() -> String {
        ORDER_ENDPOINT.to_string()
    }

    fn default_confirmation_base() -> String {
        ORDER_CONFIRMATION_BASE.to_string()
    }

    fn default_membership_resource() -> String {
        MEMBERSHIP_RESOURCE.to_string()
    }

    fn default_donation_resource() -> String {
        DONATION_RESOURCE.to_string()
    }

    fn default_csrf_header() -> String {
        CSRF_HEADER.to_string()
    }

    /// Parse a JSON override; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resource path for deleting one line item.
    #[must_use]
    pub fn delete_url(&self, kind: ItemKind, id: ItemId) -> String {
        let base = match kind {
            ItemKind::Membership => &self.membership_resource,
            ItemKind::Donation => &self.donation_resource,
        };
        format!("{}/{id}", base.trim_end_matches('/'))
    }

    /// Page the customer lands on after an accepted order.
    #[must_use]
    pub fn confirmation_url(&self, order_id: &str) -> String {
        format!("{}/{order_id}", self.confirmation_base.trim_end_matches('/'))
    }
}

impl Default for BasketConfig {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            error_display_ms: Self::default_error_display_ms(),
            order_endpoint: Self::default_order_endpoint(),
            confirmation_base: Self::default_confirmation_base(),
            membership_resource: Self::default_membership_resource(),
            donation_resource: Self::default_donation_resource(),
            csrf_header: Self::default_csrf_header(),
            labels: ButtonLabels::default(),
        }
    }
}
