//! The basket view-model: items, payment form, pay button and the payment
//! state machine.
//!
//! Every mutating action recomputes the derived total and, when it moved,
//! pushes it into the pay button. The async side of checkout lives in
//! [`crate::flow`]; this type only decides what happens next.
use crate::basket::Basket;
use crate::button::PayButton;
use crate::config::BasketConfig;
use crate::items::{ItemId, ItemKind};
use crate::money::format_minor_units;
use crate::order::{OrderOutcome, OrderRequest, OrderResponse};
use crate::payment::{CardDetails, PaymentForm, TokenResponse};
use crate::seed::BasketSeed;
use crate::selection::SelectionState;

/// Where a payment attempt currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Tokenizing,
    Submitting,
    Redirected(String),
    ErrorDisplayed(String),
}

/// Next action the driver must perform after a payment transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayStep {
    /// The button was locked; nothing to do.
    Ignored,
    /// Exchange the card details for a token.
    Tokenize(CardDetails),
    /// Post the order.
    Submit(OrderRequest),
    /// Tokenization failed and the error is on the button.
    Failed(String),
}

/// State of one mounted basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    config: BasketConfig,
    email: String,
    customer: Option<String>,
    basket: Basket,
    form: PaymentForm,
    button: PayButton,
    token: Option<String>,
    phase: CheckoutPhase,
    last_total: Option<i64>,
}

impl Checkout {
    /// Mount a basket: every loaded item starts checked and the button is
    /// derived from that total straight away.
    #[must_use]
    pub fn new(seed: BasketSeed, config: BasketConfig) -> Self {
        let mut form = PaymentForm::new(seed.address, seed.card);
        if seed.customer.is_some() {
            form.set_additional_card(false);
        }

        let mut basket = Basket::new(seed.memberships, seed.donations);
        basket.select_all();

        let mut checkout = Self {
            button: PayButton::new(config.labels.clone()),
            config,
            email: seed.email,
            customer: seed.customer,
            basket,
            form,
            token: None,
            phase: CheckoutPhase::Idle,
            last_total: None,
        };
        checkout.sync_totals();
        checkout
    }

    #[must_use]
    pub const fn config(&self) -> &BasketConfig {
        &self.config
    }

    #[must_use]
    pub const fn basket(&self) -> &Basket {
        &self.basket
    }

    #[must_use]
    pub const fn form(&self) -> &PaymentForm {
        &self.form
    }

    /// Form inputs; edits here never affect pricing.
    pub fn form_mut(&mut self) -> &mut PaymentForm {
        &mut self.form
    }

    #[must_use]
    pub const fn button(&self) -> &PayButton {
        &self.button
    }

    #[must_use]
    pub const fn phase(&self) -> &CheckoutPhase {
        &self.phase
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    #[must_use]
    pub const fn has_stored_customer(&self) -> bool {
        self.customer.is_some()
    }

    #[must_use]
    pub const fn selection_state(&self) -> SelectionState {
        self.basket.selection_state()
    }

    #[must_use]
    pub fn total_price(&self) -> i64 {
        self.basket.total_price()
    }

    #[must_use]
    pub fn formatted_price(&self) -> String {
        format_minor_units(&self.config.currency_symbol, self.total_price())
    }

    #[must_use]
    pub fn card_details(&self) -> CardDetails {
        self.form.card_details(self.customer.as_deref())
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.basket.item_count()
    }

    #[must_use]
    pub fn button_classes(&self) -> String {
        self.button.classes()
    }

    /// Price of one line item, 0 when it is not in the basket.
    #[must_use]
    pub fn get_price(&self, id: ItemId, kind: ItemKind) -> i64 {
        self.basket.get_price(id, kind)
    }

    /// Format an arbitrary amount with this basket's currency.
    #[must_use]
    pub fn format_amount(&self, minor_units: i64) -> String {
        format_minor_units(&self.config.currency_symbol, minor_units)
    }

    fn sync_totals(&mut self) {
        let total = self.basket.total_price();
        if self.last_total == Some(total) {
            return;
        }
        self.last_total = Some(total);
        let formatted = self.formatted_price();
        self.button.apply_total(total, &formatted);
    }

    pub fn select_all(&mut self) {
        self.basket.select_all();
        self.sync_totals();
    }

    pub fn deselect_all(&mut self) {
        self.basket.deselect_all();
        self.sync_totals();
    }

    pub fn update_checked_items(&mut self, is_checked: bool, id: ItemId, kind: ItemKind) {
        self.basket.update_checked_items(is_checked, id, kind);
        self.sync_totals();
    }

    /// Remove a line item locally. Returns how many items of `kind` remain.
    pub fn delete_line_item(&mut self, id: ItemId, kind: ItemKind) -> usize {
        self.basket.remove_item(kind, id);
        self.sync_totals();
        self.basket.count(kind)
    }

    fn order_request(&self) -> OrderRequest {
        OrderRequest {
            customer_exists: self.customer.is_some(),
            stripe_token: self.token.clone(),
            stripe_email: self.email.clone(),
            card: self.form.chosen_card().clone(),
            memberships: self.basket.checked_memberships().to_vec(),
            donations: self.basket.checked_donations().to_vec(),
            entered_postcode: self.form.address.postcode.clone(),
        }
    }

    /// Start a payment attempt.
    ///
    /// Returning customers paying with a stored card skip tokenization.
    pub fn begin_payment(&mut self) -> PayStep {
        if !self.button.begin_processing() {
            return PayStep::Ignored;
        }

        if self.customer.is_some() && !self.form.chosen_card().is_new() {
            self.token = None;
            self.phase = CheckoutPhase::Submitting;
            return PayStep::Submit(self.order_request());
        }

        self.phase = CheckoutPhase::Tokenizing;
        PayStep::Tokenize(self.card_details())
    }

    /// Handle the tokenization reply.
    pub fn token_received(&mut self, response: TokenResponse) -> PayStep {
        match response.into_result() {
            Ok(token) => {
                self.token = Some(token);
                self.phase = CheckoutPhase::Submitting;
                PayStep::Submit(self.order_request())
            }
            Err(message) => {
                self.button.fail_and_show(&message);
                self.phase = CheckoutPhase::ErrorDisplayed(message.clone());
                PayStep::Failed(message)
            }
        }
    }

    /// Handle a structured reply from the order endpoint.
    pub fn order_response(&mut self, response: OrderResponse) -> OrderOutcome {
        if response.is_accepted() {
            if let Some(order_id) = response.order_id {
                let url = self.config.confirmation_url(&order_id.to_string());
                self.phase = CheckoutPhase::Redirected(url.clone());
                return OrderOutcome::Redirect(url);
            }
        }

        let message = response
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("Order failed (status {})", response.status_code));
        self.button.show_error(&message);
        self.phase = CheckoutPhase::ErrorDisplayed(message.clone());
        OrderOutcome::Rejected(message)
    }

    /// The order request never produced a structured reply.
    pub fn transport_failed(&mut self) {
        self.button.restore();
        self.phase = CheckoutPhase::Idle;
    }

    /// Fired by the error timer.
    pub fn clear_error(&mut self) {
        self.button.reset_after_error();
        if matches!(self.phase, CheckoutPhase::ErrorDisplayed(_)) {
            self.phase = CheckoutPhase::Idle;
        }
    }
}
