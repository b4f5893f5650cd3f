//! Fixed values shared across the basket model and its front ends.

/// Currency symbol prepended to formatted totals.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// How long a styled error stays on the pay button before it resets.
pub const ERROR_DISPLAY_MS: u32 = 2_500;

/// Value of the card chooser that asks for a fresh card instead of a stored one.
pub const NEW_CARD_SENTINEL: &str = "card_new";

/// Status code the order endpoint reports for an accepted order.
pub const ORDER_ACCEPTED_STATUS: u16 = 200;

pub const ORDER_ENDPOINT: &str = "/orders";
pub const ORDER_CONFIRMATION_BASE: &str = "/orders";
pub const MEMBERSHIP_RESOURCE: &str = "/horse-membership";
pub const DONATION_RESOURCE: &str = "/donations";

/// Header carrying the page's anti-forgery token on every request.
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Nav badge key for memberships.
pub const MEMBERSHIP_NAV_KEY: &str = "horses";
/// Nav badge key for donations.
pub const DONATION_NAV_KEY: &str = "donations";

pub const BUTTON_CLASS: &str = "button";
pub const BUTTON_DISABLED_CLASS: &str = "button--disabled";
pub const BUTTON_ERROR_CLASS: &str = "button--color-red";
