//! UIコンポーネント

pub mod header;
pub mod meal_card;
pub mod selectors;
pub mod status;
