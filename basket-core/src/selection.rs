//! Checked-item bookkeeping.
use crate::items::ItemId;
use serde::{Deserialize, Serialize};

/// Ordered set of checked line-item ids.
///
/// Ids keep the order they were checked in, which is also the order they are
/// sent to the order endpoint. An id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedIds(Vec<ItemId>);

impl CheckedIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` unless it is already checked. Returns whether it was added.
    pub fn insert(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove the first occurrence of `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.0.iter().position(|&checked| checked == id) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.0.contains(&id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ItemId] {
        &self.0
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<ItemId> {
        self.0.clone()
    }
}

impl Extend<ItemId> for CheckedIds {
    fn extend<I: IntoIterator<Item = ItemId>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl FromIterator<ItemId> for CheckedIds {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        let mut ids = Self::new();
        ids.extend(iter);
        ids
    }
}

/// Label state of the select-all / deselect-all toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    #[default]
    Selected,
    Deselected,
}

impl SelectionState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Deselected => "deselected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_skips_duplicates_and_keeps_order() {
        let mut ids = CheckedIds::new();
        assert!(ids.insert(4));
        assert!(ids.insert(2));
        assert!(!ids.insert(4));
        assert_eq!(ids.as_slice(), &[4, 2]);
    }

    #[test]
    fn removing_absent_id_leaves_set_untouched() {
        let mut ids: CheckedIds = [1, 2, 3].into_iter().collect();
        assert!(!ids.remove(9));
        assert_eq!(ids.as_slice(), &[1, 2, 3]);
        assert!(ids.remove(2));
        assert_eq!(ids.as_slice(), &[1, 3]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let ids: CheckedIds = [7, 8].into_iter().collect();
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[7,8]");
    }
}
