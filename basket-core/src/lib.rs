//! Checkout basket core
//!
//! Platform-agnostic model of the membership and donation basket: selection,
//! pricing, the pay button, payment form state and the checkout flow.
//! This crate has no DOM or browser dependencies; front ends plug in through
//! the traits below.

pub mod basket;
pub mod button;
pub mod checkout;
pub mod config;
pub mod constants;
pub mod error;
pub mod flow;
pub mod items;
pub mod money;
pub mod nav_badge;
pub mod order;
pub mod payment;
pub mod seed;
pub mod selection;

// Re-export commonly used types
pub use basket::Basket;
pub use button::{ButtonMode, ButtonToken, PayButton};
pub use checkout::{Checkout, CheckoutPhase, PayStep};
pub use config::{BasketConfig, ButtonLabels};
pub use error::TransportError;
pub use items::{Donation, ItemId, ItemKind, LineItem, Membership, MembershipLevel};
pub use money::format_minor_units;
pub use nav_badge::{BadgeUpdate, badge_update};
pub use order::{OrderId, OrderOutcome, OrderRequest, OrderResponse};
pub use payment::{
    AddressField, BillingAddress, CardDetails, CardField, CardFields, ChosenCard, PaymentForm,
    TokenError, TokenResponse,
};
pub use seed::{BasketSeed, SeedError};
pub use selection::{CheckedIds, SelectionState};

use async_trait::async_trait;

/// Card tokenization service.
/// Platform-specific implementations should provide this
#[async_trait(?Send)]
pub trait PaymentProcessor {
    /// Exchange card details for a single-use token.
    ///
    /// Failures, including an unavailable processor, are reported through
    /// [`TokenResponse::error`].
    async fn create_token(&self, details: &CardDetails) -> TokenResponse;
}

/// Server endpoints used by the basket.
#[async_trait(?Send)]
pub trait OrderApi {
    /// Post an order and return the endpoint's structured reply.
    ///
    /// # Errors
    ///
    /// Returns an error if no structured reply could be obtained.
    async fn submit_order(
        &self,
        endpoint: &str,
        order: &OrderRequest,
    ) -> Result<OrderResponse, TransportError>;

    /// Delete one line item on the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is refused.
    async fn delete_line_item(&self, url: &str) -> Result<(), TransportError>;
}

/// Page-level effects the checkout needs from its host.
pub trait BasketHost {
    /// The model changed; redraw.
    fn refresh(&self);

    /// Ask the user to confirm deleting an item of `kind`.
    fn confirm_delete(&self, kind: ItemKind) -> bool;

    /// Blocking notice used when the order endpoint is unreachable.
    fn alert(&self, message: &str);

    /// Leave the page.
    fn navigate(&self, url: &str);

    /// Run `reset` once after `delay_ms`, then redraw. Not cancellable.
    fn schedule_error_reset(&self, delay_ms: u32, reset: Box<dyn FnOnce()>);

    /// Sync the site navigation badge for `kind`.
    fn update_site_nav_alert(&self, kind: ItemKind, remaining: usize);
}
