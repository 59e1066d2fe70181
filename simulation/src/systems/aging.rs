//! Aging System - advance every item by one day

use rayon::prelude::*;

use crate::components::{clamp_quality, Category, Item};
use crate::systems::classify::classify;

/// Advance every item by one day, in order.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        age_item(item);
    }
}

/// Same as [`advance_one_day`], spread over the rayon pool.
///
/// Items never depend on each other, so the result is identical to the
/// sequential pass.
pub fn advance_one_day_par(items: &mut [Item]) {
    items.par_iter_mut().for_each(age_item);
}

fn age_item(item: &mut Item) {
    classify(&item.name).age(item);
}

impl Category {
    /// Apply this category's daily rule to `item`.
    ///
    /// Legendary items are left untouched, clamp included.
    pub fn age(self, item: &mut Item) {
        match self {
            Category::Legendary => return,
            Category::Common => {
                item.sell_in = item.sell_in.saturating_sub(1);
                item.quality = item.quality.saturating_sub(1);
                if item.is_expired() {
                    item.quality = item.quality.saturating_sub(1);
                }
            }
            Category::AgedBrie => {
                item.sell_in = item.sell_in.saturating_sub(1);
                item.quality = item.quality.saturating_add(1);
                if item.is_expired() {
                    item.quality = item.quality.saturating_add(1);
                }
            }
            Category::EventPass => {
                // Bands are judged on the count before today's decrement.
                item.quality = match item.sell_in {
                    s if s > 10 => item.quality.saturating_add(1),
                    s if s > 5 => item.quality.saturating_add(2),
                    s if s > 0 => item.quality.saturating_add(3),
                    _ => 0,
                };
                item.sell_in = item.sell_in.saturating_sub(1);
            }
        }

        item.quality = clamp_quality(item.quality);
    }
}
