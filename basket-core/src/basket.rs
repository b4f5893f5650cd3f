//! Line items and their checked state.
use crate::items::{Donation, ItemId, ItemKind, LineItem, Membership, find_by_id};
use crate::selection::{CheckedIds, SelectionState};
use serde::{Deserialize, Serialize};

/// Memberships and donations in the basket together with the ids the user
/// has ticked for payment.
///
/// Every checked id refers to an item currently in the matching sequence;
/// [`Basket::remove_item`] drops an id from both places at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    memberships: Vec<Membership>,
    donations: Vec<Donation>,
    checked_memberships: CheckedIds,
    checked_donations: CheckedIds,
    selection_state: SelectionState,
}

impl Basket {
    /// Build a basket with nothing checked.
    #[must_use]
    pub fn new(memberships: Vec<Membership>, donations: Vec<Donation>) -> Self {
        Self {
            memberships,
            donations,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    #[must_use]
    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    #[must_use]
    pub const fn checked_memberships(&self) -> &CheckedIds {
        &self.checked_memberships
    }

    #[must_use]
    pub const fn checked_donations(&self) -> &CheckedIds {
        &self.checked_donations
    }

    #[must_use]
    pub const fn checked(&self, kind: ItemKind) -> &CheckedIds {
        match kind {
            ItemKind::Membership => &self.checked_memberships,
            ItemKind::Donation => &self.checked_donations,
        }
    }

    fn checked_mut(&mut self, kind: ItemKind) -> &mut CheckedIds {
        match kind {
            ItemKind::Membership => &mut self.checked_memberships,
            ItemKind::Donation => &mut self.checked_donations,
        }
    }

    #[must_use]
    pub const fn selection_state(&self) -> SelectionState {
        self.selection_state
    }

    #[must_use]
    pub fn is_checked(&self, kind: ItemKind, id: ItemId) -> bool {
        self.checked(kind).contains(id)
    }

    /// Number of items of `kind` still in the basket.
    #[must_use]
    pub fn count(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Membership => self.memberships.len(),
            ItemKind::Donation => self.donations.len(),
        }
    }

    /// Combined number of memberships and donations.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.memberships.len() + self.donations.len()
    }

    /// Reset both checked sets to every item, in sequence order.
    pub fn select_all(&mut self) {
        self.deselect_all();
        self.checked_memberships
            .extend(self.memberships.iter().map(LineItem::id));
        self.checked_donations
            .extend(self.donations.iter().map(LineItem::id));
        self.selection_state = SelectionState::Selected;
    }

    pub fn deselect_all(&mut self) {
        self.checked_memberships.clear();
        self.checked_donations.clear();
        self.selection_state = SelectionState::Deselected;
    }

    /// Apply a checkbox change for one line item.
    pub fn update_checked_items(&mut self, is_checked: bool, id: ItemId, kind: ItemKind) {
        let checked = self.checked_mut(kind);
        if is_checked {
            checked.insert(id);
        } else {
            checked.remove(id);
        }
    }

    /// Price of the first item of `kind` with `id`, or 0 when there is none.
    #[must_use]
    pub fn get_price(&self, id: ItemId, kind: ItemKind) -> i64 {
        match kind {
            ItemKind::Membership => find_by_id(&self.memberships, id).map_or(0, LineItem::price),
            ItemKind::Donation => find_by_id(&self.donations, id).map_or(0, LineItem::price),
        }
    }

    /// Sum of prices over every checked id.
    #[must_use]
    pub fn total_price(&self) -> i64 {
        let memberships = self
            .checked_memberships
            .iter()
            .map(|id| self.get_price(id, ItemKind::Membership))
            .fold(0_i64, i64::saturating_add);
        let donations = self
            .checked_donations
            .iter()
            .map(|id| self.get_price(id, ItemKind::Donation))
            .fold(0_i64, i64::saturating_add);
        memberships.saturating_add(donations)
    }

    /// Drop `id` from the checked set and the first matching item of `kind`.
    ///
    /// Returns `true` when an item was removed from the sequence.
    pub fn remove_item(&mut self, kind: ItemKind, id: ItemId) -> bool {
        self.checked_mut(kind).remove(id);
        match kind {
            ItemKind::Membership => remove_first(&mut self.memberships, id),
            ItemKind::Donation => remove_first(&mut self.donations, id),
        }
    }
}

fn remove_first<T: LineItem>(items: &mut Vec<T>, id: ItemId) -> bool {
    match items.iter().position(|item| item.id() == id) {
        Some(idx) => {
            items.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::MembershipLevel;

    fn membership(id: ItemId, price: i64) -> Membership {
        Membership {
            id,
            level: MembershipLevel { price, name: None },
            name: None,
        }
    }

    fn donation(id: ItemId, amount: i64) -> Donation {
        Donation {
            id,
            amount,
            name: None,
            description: None,
        }
    }

    fn sample() -> Basket {
        Basket::new(
            vec![membership(1, 1000), membership(3, 2500)],
            vec![donation(2, 500)],
        )
    }

    #[test]
    fn new_basket_starts_unchecked() {
        let basket = sample();
        assert!(basket.checked_memberships().is_empty());
        assert!(basket.checked_donations().is_empty());
        assert_eq!(basket.total_price(), 0);
        assert_eq!(basket.item_count(), 3);
    }

    #[test]
    fn select_all_checks_in_sequence_order() {
        let mut basket = sample();
        basket.update_checked_items(true, 3, ItemKind::Membership);
        basket.select_all();
        assert_eq!(basket.checked_memberships().as_slice(), &[1, 3]);
        assert_eq!(basket.checked_donations().as_slice(), &[2]);
        assert_eq!(basket.selection_state(), SelectionState::Selected);
    }

    #[test]
    fn deselect_all_after_select_all_empties_both_sets() {
        let mut basket = sample();
        basket.select_all();
        basket.deselect_all();
        assert!(basket.checked_memberships().is_empty());
        assert!(basket.checked_donations().is_empty());
        assert_eq!(basket.selection_state(), SelectionState::Deselected);
    }

    #[test]
    fn checkbox_changes_track_exactly_the_checked_ids() {
        let mut basket = sample();
        basket.update_checked_items(true, 3, ItemKind::Membership);
        basket.update_checked_items(true, 3, ItemKind::Membership);
        basket.update_checked_items(true, 1, ItemKind::Membership);
        basket.update_checked_items(false, 3, ItemKind::Membership);
        basket.update_checked_items(false, 2, ItemKind::Donation);
        assert_eq!(basket.checked_memberships().as_slice(), &[1]);
        assert!(basket.checked_donations().is_empty());
    }

    #[test]
    fn get_price_reads_kind_specific_field() {
        let basket = sample();
        assert_eq!(basket.get_price(3, ItemKind::Membership), 2500);
        assert_eq!(basket.get_price(2, ItemKind::Donation), 500);
        assert_eq!(basket.get_price(2, ItemKind::Membership), 0);
        assert_eq!(basket.get_price(99, ItemKind::Donation), 0);
    }

    #[test]
    fn total_sums_checked_items_only() {
        let mut basket = sample();
        basket.update_checked_items(true, 1, ItemKind::Membership);
        basket.update_checked_items(true, 2, ItemKind::Donation);
        assert_eq!(basket.total_price(), 1500);
    }

    #[test]
    fn oversized_prices_saturate_instead_of_overflowing() {
        let mut basket = Basket::new(
            vec![membership(1, i64::MAX)],
            vec![donation(2, i64::MAX), donation(4, 1)],
        );
        basket.select_all();
        assert_eq!(basket.total_price(), i64::MAX);

        basket.update_checked_items(false, 1, ItemKind::Membership);
        assert_eq!(basket.total_price(), i64::MAX);
    }

    #[test]
    fn removing_checked_item_drops_it_everywhere() {
        let mut basket = sample();
        basket.select_all();
        assert!(basket.remove_item(ItemKind::Membership, 1));
        assert_eq!(basket.memberships().len(), 1);
        assert!(!basket.is_checked(ItemKind::Membership, 1));
        assert_eq!(basket.total_price(), 3000);
        assert!(!basket.remove_item(ItemKind::Membership, 1));
    }
}
