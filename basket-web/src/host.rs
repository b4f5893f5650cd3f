//! Browser side effects for a mounted basket.
use crate::{dom, i18n, nav_badge};
use basket_core::{BasketHost, ItemKind};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// [`BasketHost`] that talks to the page and redraws through `redraw`.
#[derive(Clone, PartialEq)]
pub struct BrowserHost {
    redraw: Callback<()>,
}

impl BrowserHost {
    #[must_use]
    pub const fn new(redraw: Callback<()>) -> Self {
        Self { redraw }
    }
}

/// Confirmation prompt shown before deleting an item of `kind`.
#[must_use]
pub fn confirm_delete_message(kind: ItemKind) -> String {
    match kind {
        ItemKind::Membership => i18n::t("basket.memberships.confirm_delete"),
        ItemKind::Donation => i18n::t("basket.donations.confirm_delete"),
    }
}

impl BasketHost for BrowserHost {
    fn refresh(&self) {
        self.redraw.emit(());
    }

    fn confirm_delete(&self, kind: ItemKind) -> bool {
        dom::confirm(&confirm_delete_message(kind))
    }

    fn alert(&self, message: &str) {
        dom::alert(&i18n::tr1("basket.errors.transport", "reason", message));
    }

    fn navigate(&self, url: &str) {
        if let Err(err) = dom::navigate(url) {
            log::error!("Failed to navigate to {url}: {err}");
        }
    }

    fn schedule_error_reset(&self, delay_ms: u32, reset: Box<dyn FnOnce()>) {
        let redraw = self.redraw.clone();
        spawn_local(async move {
            if let Err(err) = dom::sleep_ms(delay_ms).await {
                log::warn!(
                    "Error timer failed, resetting now: {}",
                    dom::js_error_message(&err)
                );
            }
            reset();
            redraw.emit(());
        });
    }

    fn update_site_nav_alert(&self, kind: ItemKind, remaining: usize) {
        if let Err(err) = nav_badge::update_site_nav_alert(kind, remaining) {
            log::error!("Failed to update {kind} badge: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_prompts_name_the_kind() {
        assert_eq!(
            confirm_delete_message(ItemKind::Membership),
            "Are you sure you want to delete this membership?"
        );
        assert_eq!(
            confirm_delete_message(ItemKind::Donation),
            "Are you sure you want to delete this donation?"
        );
    }
}
