//! Finds basket host elements and mounts one widget on each.
use crate::components::{Basket, BasketProps};
use crate::error::WebError;
use crate::{dom, i18n};
use basket_core::{BasketConfig, BasketSeed, ButtonLabels};
use std::collections::BTreeMap;

pub const BASKET_SELECTOR: &str = "[data-module=\"basket\"]";

/// Component props for one host element's `data-*` attributes.
///
/// Malformed JSON attributes are logged and replaced with defaults.
#[must_use]
pub fn props_from_dataset(dataset: &BTreeMap<String, String>) -> BasketProps {
    let (seed, errors) = BasketSeed::from_dataset(dataset);
    for err in &errors {
        log::warn!("{err}");
    }
    let config = seed
        .config
        .as_deref()
        .map_or_else(BasketConfig::default, |raw| {
            BasketConfig::from_json(raw).unwrap_or_else(|err| {
                log::warn!("data-config is not valid JSON: {err}");
                BasketConfig::default()
            })
        });
    BasketProps {
        seed,
        config: localize(config),
    }
}

/// Swap untouched default labels for the bundled translations.
fn localize(mut config: BasketConfig) -> BasketConfig {
    if config.labels == ButtonLabels::default() {
        config.labels = i18n::button_labels();
    }
    config
}

/// Mount a basket on every matching element. Returns how many were mounted.
///
/// # Errors
/// Returns an error if the document cannot be queried.
pub fn mount_all() -> Result<usize, WebError> {
    let hosts = dom::query_all(BASKET_SELECTOR)?;
    for host in &hosts {
        let props = props_from_dataset(&dom::dataset(host));
        yew::Renderer::<Basket>::with_root_and_props(host.clone().into(), props).render();
    }
    log::info!("Mounted {} basket widget(s)", hosts.len());
    Ok(hosts.len())
}
