//! Apotheca
//!
//! Apotheca is a pharmacy-network ordering engine: it resolves delivery dates to weekdays,
//! filters partner pharmacies by their opening days, and aggregates picked medicines into a
//! grouped order cart with receipt rendering.

pub mod cart;
pub mod catalog;
pub mod delivery;
pub mod directory;
pub mod fixtures;
pub mod prelude;
pub mod receipt;
pub mod utils;
pub mod weekday;
