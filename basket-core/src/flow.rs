//! Async checkout and deletion flows.
//!
//! The flows own no state: they drive a shared [`Checkout`] through the
//! platform traits and never hold a borrow across an `.await`.
use crate::checkout::{Checkout, PayStep};
use crate::items::{ItemId, ItemKind};
use crate::order::{OrderOutcome, OrderRequest};
use crate::{BasketHost, OrderApi, PaymentProcessor};
use std::cell::RefCell;
use std::rc::Rc;

fn schedule_error_reset<H>(model: &Rc<RefCell<Checkout>>, host: &H)
where
    H: BasketHost + ?Sized,
{
    let delay_ms = model.borrow().config().error_display_ms;
    let model = Rc::clone(model);
    host.schedule_error_reset(delay_ms, Box::new(move || model.borrow_mut().clear_error()));
}

/// Lock the pay button for one press and report what to do next.
///
/// Runs synchronously so a second press in the same turn sees the lock.
pub fn start_payment<H>(model: &Rc<RefCell<Checkout>>, host: &H) -> PayStep
where
    H: BasketHost + ?Sized,
{
    let step = model.borrow_mut().begin_payment();
    if matches!(step, PayStep::Submit(_) | PayStep::Tokenize(_)) {
        host.refresh();
    }
    step
}

/// Carry a step returned by [`start_payment`] through tokenization and
/// order submission.
#[allow(clippy::future_not_send)] // Browser futures are single-threaded.
pub async fn complete_payment<P, A, H>(
    model: &Rc<RefCell<Checkout>>,
    processor: &P,
    api: &A,
    host: &H,
    step: PayStep,
) where
    P: PaymentProcessor + ?Sized,
    A: OrderApi + ?Sized,
    H: BasketHost + ?Sized,
{
    let order = match step {
        PayStep::Ignored | PayStep::Failed(_) => return,
        PayStep::Submit(order) => order,
        PayStep::Tokenize(details) => {
            let response = processor.create_token(&details).await;
            let next = model.borrow_mut().token_received(response);
            host.refresh();
            match next {
                PayStep::Submit(order) => order,
                PayStep::Failed(message) => {
                    log::warn!("Card tokenization failed: {message}");
                    schedule_error_reset(model, host);
                    return;
                }
                PayStep::Ignored | PayStep::Tokenize(_) => return,
            }
        }
    };
    submit_order(model, api, host, order).await;
}

/// Run one press of the pay button to completion.
///
/// A press while the button is locked does nothing, so at most one
/// tokenization or submission is in flight per basket.
#[allow(clippy::future_not_send)]
pub async fn pay<P, A, H>(model: &Rc<RefCell<Checkout>>, processor: &P, api: &A, host: &H)
where
    P: PaymentProcessor + ?Sized,
    A: OrderApi + ?Sized,
    H: BasketHost + ?Sized,
{
    let step = start_payment(model, host);
    complete_payment(model, processor, api, host, step).await;
}

#[allow(clippy::future_not_send)]
async fn submit_order<A, H>(model: &Rc<RefCell<Checkout>>, api: &A, host: &H, order: OrderRequest)
where
    A: OrderApi + ?Sized,
    H: BasketHost + ?Sized,
{
    let endpoint = model.borrow().config().order_endpoint.clone();
    match api.submit_order(&endpoint, &order).await {
        Ok(response) => {
            let outcome = model.borrow_mut().order_response(response);
            host.refresh();
            match outcome {
                OrderOutcome::Redirect(url) => {
                    log::info!("Order accepted, redirecting to {url}");
                    host.navigate(&url);
                }
                OrderOutcome::Rejected(message) => {
                    log::warn!("Order rejected: {message}");
                    schedule_error_reset(model, host);
                }
            }
        }
        Err(err) => {
            log::error!("Order submission failed: {err}");
            host.alert(&err.to_string());
            model.borrow_mut().transport_failed();
            host.refresh();
        }
    }
}

/// Confirm, remove locally, update the nav badge, then delete on the server.
///
/// Server failures are logged only; the local removal stands.
#[allow(clippy::future_not_send)]
pub async fn delete_line_item<A, H>(
    model: &Rc<RefCell<Checkout>>,
    api: &A,
    host: &H,
    id: ItemId,
    kind: ItemKind,
) where
    A: OrderApi + ?Sized,
    H: BasketHost + ?Sized,
{
    if !host.confirm_delete(kind) {
        return;
    }

    let (remaining, url) = {
        let mut checkout = model.borrow_mut();
        let remaining = checkout.delete_line_item(id, kind);
        (remaining, checkout.config().delete_url(kind, id))
    };
    host.refresh();
    host.update_site_nav_alert(kind, remaining);

    match api.delete_line_item(&url).await {
        Ok(()) => log::info!("Deleted {kind} {id}"),
        Err(err) => log::error!("Failed to delete {kind} {id}: {err}"),
    }
}
