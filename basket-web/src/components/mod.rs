pub mod basket;
pub mod form;

pub use basket::{Basket, BasketProps};
