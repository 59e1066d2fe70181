//! Inventory components
//!
//! Items carry no category field; the category is derived from the name on
//! every pass (see `systems::classify`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest quality a non-legendary item can hold after a day passes.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can hold after a day passes.
pub const MAX_QUALITY: i32 = 50;

/// Prefix ignored when deciding an item's category.
pub const CONJURED_PREFIX: &str = "Conjured ";

// ============================================================================
// Item
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left to sell. Keeps counting down past zero.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

// ============================================================================
// Category
// ============================================================================

/// Aging behaviour, derived from an item's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Never sold, never ages.
    Legendary,
    /// Gains value towards the event, worthless afterwards.
    EventPass,
    /// Improves with age, twice as fast once past the sell date.
    AgedBrie,
    /// Degrades daily, twice as fast once past the sell date.
    Common,
}

impl Category {
    pub fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }
}

/// Clamp a quality score into `MIN_QUALITY..=MAX_QUALITY`.
pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
