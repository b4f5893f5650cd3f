//! Line items shown in the basket.
use crate::constants::{DONATION_NAV_KEY, MEMBERSHIP_NAV_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a membership or donation, as issued by the server.
pub type ItemId = u64;

/// Which collection a line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Membership,
    Donation,
}

impl ItemKind {
    /// Key matched against `data-key` on the site navigation badges.
    #[must_use]
    pub const fn nav_key(self) -> &'static str {
        match self {
            Self::Membership => MEMBERSHIP_NAV_KEY,
            Self::Donation => DONATION_NAV_KEY,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Membership => "membership",
            Self::Donation => "donation",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing tier attached to a membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipLevel {
    /// Price in minor currency units (pence)
    pub price: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// A membership awaiting payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: ItemId,
    pub level: MembershipLevel,
    #[serde(default)]
    pub name: Option<String>,
}

/// A donation awaiting payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub id: ItemId,
    /// Amount in minor currency units (pence)
    pub amount: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Common view over memberships and donations.
pub trait LineItem {
    const KIND: ItemKind;

    fn id(&self) -> ItemId;

    /// Price in minor currency units.
    fn price(&self) -> i64;

    /// Human label for the basket row, when the server supplied one.
    fn label(&self) -> Option<&str>;
}

impl LineItem for Membership {
    const KIND: ItemKind = ItemKind::Membership;

    fn id(&self) -> ItemId {
        self.id
    }

    fn price(&self) -> i64 {
        self.level.price
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref().or(self.level.name.as_deref())
    }
}

impl LineItem for Donation {
    const KIND: ItemKind = ItemKind::Donation;

    fn id(&self) -> ItemId {
        self.id
    }

    fn price(&self) -> i64 {
        self.amount
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref().or(self.description.as_deref())
    }
}

/// First item in `items` with the given id.
#[must_use]
pub fn find_by_id<T: LineItem>(items: &[T], id: ItemId) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}
