//! Pay button display state.
use crate::config::ButtonLabels;
use crate::constants::{BUTTON_CLASS, BUTTON_DISABLED_CLASS, BUTTON_ERROR_CLASS};
use serde::{Deserialize, Serialize};

/// CSS modifier carried by the pay button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonToken {
    Base,
    Disabled,
    Error,
}

impl ButtonToken {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Base => BUTTON_CLASS,
            Self::Disabled => BUTTON_DISABLED_CLASS,
            Self::Error => BUTTON_ERROR_CLASS,
        }
    }
}

/// Coarse state of the button, derived from its flags and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMode {
    Enabled,
    Disabled,
    Processing,
    Error,
}

/// Text, CSS tokens and the disabled flag of the pay button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayButton {
    labels: ButtonLabels,
    tokens: Vec<ButtonToken>,
    text: String,
    default_text: String,
    disabled: bool,
}

impl PayButton {
    #[must_use]
    pub fn new(labels: ButtonLabels) -> Self {
        let text = labels.confirm.clone();
        Self {
            default_text: text.clone(),
            text,
            labels,
            tokens: vec![ButtonToken::Base],
            disabled: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.text == self.labels.processing
    }

    #[must_use]
    pub fn has_token(&self, token: ButtonToken) -> bool {
        self.tokens.contains(&token)
    }

    #[must_use]
    pub fn tokens(&self) -> &[ButtonToken] {
        &self.tokens
    }

    /// Space-joined class attribute.
    #[must_use]
    pub fn classes(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.class())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn mode(&self) -> ButtonMode {
        if self.has_token(ButtonToken::Error) {
            ButtonMode::Error
        } else if self.is_processing() {
            ButtonMode::Processing
        } else if self.disabled {
            ButtonMode::Disabled
        } else {
            ButtonMode::Enabled
        }
    }

    fn add_token(&mut self, token: ButtonToken) {
        if !self.has_token(token) {
            self.tokens.push(token);
        }
    }

    fn remove_token(&mut self, token: ButtonToken) {
        self.tokens.retain(|&t| t != token);
    }

    /// React to a new basket total.
    ///
    /// The default text always follows the total; the visible text only does
    /// so while no submission is in flight.
    pub fn apply_total(&mut self, total: i64, formatted_price: &str) {
        self.default_text = self.labels.with_total(formatted_price);
        if !self.is_processing() {
            self.text = self.default_text.clone();
        }

        if total == 0 {
            self.add_token(ButtonToken::Disabled);
            self.disabled = true;
        } else {
            self.remove_token(ButtonToken::Disabled);
            self.disabled = false;
        }
    }

    /// Lock the button for a submission. Returns `false` if it was already locked.
    pub fn begin_processing(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.disabled = true;
        self.text = self.labels.processing.clone();
        true
    }

    /// Show `message` in the error style until [`PayButton::reset_after_error`].
    pub fn show_error(&mut self, message: &str) {
        self.add_token(ButtonToken::Error);
        self.text = message.to_string();
    }

    /// Unlock immediately, then show `message` as an error.
    pub fn fail_and_show(&mut self, message: &str) {
        self.disabled = false;
        self.text = self.default_text.clone();
        self.show_error(message);
    }

    /// End state of the error timer.
    pub fn reset_after_error(&mut self) {
        self.disabled = false;
        self.remove_token(ButtonToken::Disabled);
        self.remove_token(ButtonToken::Error);
        self.text = self.default_text.clone();
    }

    /// Restore the default label and unlock without the error style.
    pub fn restore(&mut self) {
        self.disabled = false;
        self.text = self.default_text.clone();
    }
}

impl Default for PayButton {
    fn default() -> Self {
        Self::new(ButtonLabels::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_disables_and_nonzero_reenables() {
        let mut button = PayButton::default();
        button.apply_total(0, "£0.00");
        assert!(button.is_disabled());
        assert_eq!(button.classes(), "button button--disabled");
        assert_eq!(button.mode(), ButtonMode::Disabled);

        button.apply_total(2000, "£20.00");
        assert!(!button.is_disabled());
        assert_eq!(button.classes(), "button");
        assert_eq!(button.text(), "Confirm & Pay (£20.00)");
    }

    #[test]
    fn repeated_zero_totals_do_not_duplicate_tokens() {
        let mut button = PayButton::default();
        button.apply_total(0, "£0.00");
        button.apply_total(0, "£0.00");
        assert_eq!(button.tokens(), &[ButtonToken::Base, ButtonToken::Disabled]);
    }

    #[test]
    fn processing_label_survives_total_changes() {
        let mut button = PayButton::default();
        button.apply_total(1000, "£10.00");
        assert!(button.begin_processing());
        button.apply_total(1500, "£15.00");
        assert_eq!(button.text(), "Processing...");
        assert_eq!(button.default_text(), "Confirm & Pay (£15.00)");
    }

    #[test]
    fn begin_processing_refuses_when_locked() {
        let mut button = PayButton::default();
        button.apply_total(1000, "£10.00");
        assert!(button.begin_processing());
        assert!(!button.begin_processing());
        assert_eq!(button.mode(), ButtonMode::Processing);
    }

    #[test]
    fn error_then_reset_restores_default() {
        let mut button = PayButton::default();
        button.apply_total(1000, "£10.00");
        button.begin_processing();
        button.show_error("Card declined");
        assert_eq!(button.text(), "Card declined");
        assert_eq!(button.classes(), "button button--color-red");
        assert_eq!(button.mode(), ButtonMode::Error);
        assert!(button.is_disabled());

        button.reset_after_error();
        button.reset_after_error();
        assert!(!button.is_disabled());
        assert_eq!(button.classes(), "button");
        assert_eq!(button.text(), "Confirm & Pay (£10.00)");
    }

    #[test]
    fn fail_and_show_unlocks_immediately() {
        let mut button = PayButton::default();
        button.apply_total(1000, "£10.00");
        button.begin_processing();
        button.fail_and_show("Your card number is incorrect.");
        assert!(!button.is_disabled());
        assert!(button.has_token(ButtonToken::Error));
        assert_eq!(button.text(), "Your card number is incorrect.");
    }
}
