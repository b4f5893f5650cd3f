use basket_core::{BasketConfig, BasketSeed};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BasketProps {
    /// Page data the widget was mounted with.
    pub seed: BasketSeed,
    #[prop_or_default]
    pub config: BasketConfig,
}
