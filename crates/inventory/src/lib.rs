//! Inventory aging for the Gilded Rose shop.
//!
//! Deterministic domain logic only: every call to [`Shop::update_quality`]
//! advances each item by one day according to its category.

mod engine;
pub mod item;
pub mod rules;
pub mod shop;

pub use item::{Category, Item};
pub use rules::AgingRules;
pub use shop::Shop;
