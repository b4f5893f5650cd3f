use basket_core::{BasketConfig, BasketSeed, ChosenCard, Donation, Membership, MembershipLevel};
use basket_web::components::{Basket, BasketProps};
use futures::executor::block_on;
use yew::LocalServerRenderer;

fn membership(id: u64, price: i64) -> Membership {
    Membership {
        id,
        level: MembershipLevel { price, name: None },
        name: None,
    }
}

fn donation(id: u64, amount: i64) -> Donation {
    Donation {
        id,
        amount,
        name: Some("Winter feed".into()),
        description: None,
    }
}

fn render(seed: BasketSeed) -> String {
    let props = BasketProps {
        seed,
        config: BasketConfig::default(),
    };
    block_on(LocalServerRenderer::<Basket>::with_props(props).render())
}

#[test]
fn basket_renders_items_total_and_enabled_button() {
    let html = render(BasketSeed {
        memberships: vec![membership(1, 1000)],
        donations: vec![donation(2, 500)],
        ..BasketSeed::default()
    });
    assert!(html.contains("Membership #1"));
    assert!(html.contains("Winter feed"));
    assert!(html.contains("Total: £15.00"));
    assert!(html.contains("Pay (£15.00)"));
    assert!(html.contains("2 items"));
    assert!(!html.contains("button--disabled"));
    assert!(html.contains("Deselect all"));
}

#[test]
fn empty_basket_mounts_with_disabled_button() {
    let html = render(BasketSeed::default());
    assert!(html.contains("Your basket is empty."));
    assert!(html.contains("button--disabled"));
    assert!(html.contains("Pay (£0.00)"));
    assert!(!html.contains("Deselect all"));
}

#[test]
fn new_customer_sees_card_fields() {
    let html = render(BasketSeed {
        memberships: vec![membership(1, 2000)],
        ..BasketSeed::default()
    });
    assert!(html.contains("name=\"number\""));
    assert!(html.contains("name=\"cvc\""));
    assert!(!html.contains("Use my saved card"));
}

#[test]
fn card_and_billing_fields_show_translated_labels() {
    let html = render(BasketSeed {
        memberships: vec![membership(1, 2000)],
        ..BasketSeed::default()
    });
    assert!(html.contains("Card number"));
    assert!(html.contains("Expiry month (MM)"));
    assert!(html.contains("Security code (CVC)"));
    assert!(html.contains("Name on card"));
    assert!(!html.contains("basket.payment."));
    assert!(!html.contains("basket.billing."));
}

#[test]
fn returning_customer_gets_card_choice_without_card_fields() {
    let html = render(BasketSeed {
        customer: Some("cus_42".into()),
        card: ChosenCard::Stored("card_visa".into()),
        memberships: vec![membership(1, 2000)],
        ..BasketSeed::default()
    });
    assert!(html.contains("Use my saved card"));
    assert!(html.contains("card_visa"));
    assert!(!html.contains("name=\"number\""));
}

#[test]
fn billing_address_is_prefilled() {
    let mut seed = BasketSeed {
        donations: vec![donation(5, 250)],
        ..BasketSeed::default()
    };
    seed.address.postcode = "LS1 1AA".into();
    let html = render(seed);
    assert!(html.contains("LS1 1AA"));
    assert!(html.contains("£2.50"));
}
