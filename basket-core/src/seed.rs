//! Initial basket data read from the host element's `data-*` attributes.
use crate::items::{Donation, Membership};
use crate::payment::{BillingAddress, ChosenCard};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use thiserror::Error;

/// Problem with one of the JSON-valued attributes.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("data-{attribute} is not valid JSON: {source}")]
    Json {
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the basket needs at mount time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasketSeed {
    pub email: String,
    /// Processor customer reference for returning customers.
    pub customer: Option<String>,
    pub memberships: Vec<Membership>,
    pub donations: Vec<Donation>,
    pub card: ChosenCard,
    pub address: BillingAddress,
    /// Raw `data-config` override, parsed by the caller.
    pub config: Option<String>,
}

fn text(dataset: &BTreeMap<String, String>, key: &str) -> String {
    dataset.get(key).cloned().unwrap_or_default()
}

fn non_empty(dataset: &BTreeMap<String, String>, key: &str) -> Option<String> {
    dataset
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn json_list<T: DeserializeOwned>(
    dataset: &BTreeMap<String, String>,
    attribute: &'static str,
) -> Result<Vec<T>, SeedError> {
    match non_empty(dataset, attribute) {
        None => Ok(Vec::new()),
        Some(raw) => {
            serde_json::from_str(&raw).map_err(|source| SeedError::Json { attribute, source })
        }
    }
}

impl BasketSeed {
    /// Read the seed, collecting JSON problems instead of failing.
    ///
    /// A malformed membership or donation list is treated as empty.
    #[must_use]
    pub fn from_dataset(dataset: &BTreeMap<String, String>) -> (Self, Vec<SeedError>) {
        let mut errors = Vec::new();
        let memberships = json_list(dataset, "memberships").unwrap_or_else(|err| {
            errors.push(err);
            Vec::new()
        });
        let donations = json_list(dataset, "donations").unwrap_or_else(|err| {
            errors.push(err);
            Vec::new()
        });

        let seed = Self {
            email: text(dataset, "email"),
            customer: non_empty(dataset, "customer"),
            memberships,
            donations,
            card: ChosenCard::parse(dataset.get("card").map(String::as_str)),
            address: BillingAddress {
                name: text(dataset, "name"),
                address1: text(dataset, "address1"),
                address2: text(dataset, "address2"),
                address3: text(dataset, "address3"),
                city: text(dataset, "city"),
                county: text(dataset, "county"),
                postcode: text(dataset, "postcode"),
                country: text(dataset, "country"),
            },
            config: non_empty(dataset, "config"),
        };
        (seed, errors)
    }

    /// Strict variant of [`BasketSeed::from_dataset`].
    ///
    /// # Errors
    ///
    /// Returns the first JSON problem found in the dataset.
    pub fn try_from_dataset(dataset: &BTreeMap<String, String>) -> Result<Self, SeedError> {
        let (seed, errors) = Self::from_dataset(dataset);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(seed),
        }
    }
}
