//! Systems - per-day passes over the inventory

pub mod aging;
pub mod classify;

pub use aging::{advance_one_day, advance_one_day_par};
pub use classify::classify;
