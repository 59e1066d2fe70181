//! Classification System
//!
//! Maps an item name onto its aging category. Case-sensitive, prefix-based.

use crate::components::{Category, CONJURED_PREFIX};

const LEGENDARY_PREFIX: &str = "Sulfuras";
const EVENT_PASS_PREFIX: &str = "Backstage passes";
const AGED_BRIE: &str = "Aged Brie";

/// Derive the category of an item from its name.
///
/// A leading "Conjured " is ignored, so "Conjured Aged Brie" ages exactly like
/// "Aged Brie". Anything unrecognised is `Common`.
pub fn classify(name: &str) -> Category {
    let name = name.strip_prefix(CONJURED_PREFIX).unwrap_or(name);

    if name.starts_with(LEGENDARY_PREFIX) {
        Category::Legendary
    } else if name.starts_with(EVENT_PASS_PREFIX) {
        Category::EventPass
    } else if name == AGED_BRIE {
        Category::AgedBrie
    } else {
        Category::Common
    }
}
