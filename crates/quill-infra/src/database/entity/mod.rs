//! SeaORM entity models and their domain conversions.

pub mod author;
pub mod post;
