//! Item names for seeded inventories
//!
//! Covers every category, plus conjured variants.

use rand::Rng;

/// The shop's standing catalogue
pub const ITEM_NAMES: &[&str] = &[
    "+5 Dexterity Vest",
    "Aged Brie",
    "Elixir of the Mongoose",
    "Sulfuras, Hand of Ragnaros",
    "Backstage passes to a TAFKAL80ETC concert",
    "Backstage passes to a Big Band reunion",
    "Conjured Mana Cake",
    "Conjured Aged Brie",
    "Rusty Iron Dagger",
    "Potion of Minor Healing",
];

/// Pick a catalogue name at random
pub fn random_item_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ITEM_NAMES[rng.gen_range(0..ITEM_NAMES.len())]
}
