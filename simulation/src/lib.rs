//! Inventory Aging Simulation
//!
//! Advances a shop's inventory by one day: each item is classified from its
//! name and aged by that category's rule. Pure, in-memory, one pass per call.

pub mod components;
pub mod systems;
pub mod world;
pub mod names;

pub use components::*;
pub use systems::{advance_one_day, advance_one_day_par, classify};
pub use world::{DaySummary, Shop};
