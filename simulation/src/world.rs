//! Shop - owns an inventory and advances it one day at a time

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::*;
use crate::names::random_item_name;
use crate::systems;

/// Quality every legendary item is stocked at.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Tally of the inventory after one day has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub legendary: usize,
    pub event_passes: usize,
    pub aged_brie: usize,
    pub common: usize,
    /// Non-legendary items past their sell date.
    pub expired: usize,
}

impl DaySummary {
    pub fn tally(items: &[Item]) -> Self {
        let mut summary = Self::default();
        for item in items {
            let category = systems::classify(&item.name);
            match category {
                Category::Legendary => summary.legendary += 1,
                Category::EventPass => summary.event_passes += 1,
                Category::AgedBrie => summary.aged_brie += 1,
                Category::Common => summary.common += 1,
            }
            if !category.is_legendary() && item.is_expired() {
                summary.expired += 1;
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.legendary + self.event_passes + self.aged_brie + self.common
    }
}

#[derive(Debug, Clone, Default)]
pub struct Shop {
    items: Vec<Item>,
}

impl Shop {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Stock `count` random items
    pub fn seed_inventory(&mut self, count: usize) {
        self.seed_inventory_with(&mut rand::thread_rng(), count);
    }

    /// Stock `count` random items drawn from `rng`
    pub fn seed_inventory_with<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        self.items.reserve(count);
        for _ in 0..count {
            let name = random_item_name(rng);
            let sell_in = rng.gen_range(-5..=20);
            let quality = if systems::classify(name).is_legendary() {
                LEGENDARY_QUALITY
            } else {
                rng.gen_range(MIN_QUALITY..=MAX_QUALITY)
            };
            self.items.push(Item::new(name, sell_in, quality));
        }
    }

    /// Advance the whole inventory by one day
    pub fn update_quality(&mut self) -> DaySummary {
        systems::advance_one_day(&mut self.items);
        self.summarize()
    }

    /// Advance the whole inventory by one day across the rayon pool
    pub fn update_quality_par(&mut self) -> DaySummary {
        systems::advance_one_day_par(&mut self.items);
        self.summarize()
    }

    fn summarize(&self) -> DaySummary {
        let summary = DaySummary::tally(&self.items);
        debug!(
            items = summary.total(),
            expired = summary.expired,
            legendary = summary.legendary,
            "day advanced"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_update_quality_mutates_owned_items() {
        let mut shop = Shop::new(vec![
            Item::new("+5 Dexterity Vest", 10, 20),
            Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        ]);

        let summary = shop.update_quality();

        assert_eq!(shop.items()[0], Item::new("+5 Dexterity Vest", 9, 19));
        assert_eq!(shop.items()[1], Item::new("Sulfuras, Hand of Ragnaros", 0, 80));
        assert_eq!(summary.common, 1);
        assert_eq!(summary.legendary, 1);
        assert_eq!(summary.expired, 0);
    }

    #[test]
    fn test_summary_counts_expired() {
        let mut shop = Shop::new(vec![
            Item::new("Aged Brie", 0, 10),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 0, 10),
            Item::new("Elixir of the Mongoose", 1, 10),
            Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        ]);

        let summary = shop.update_quality();

        assert_eq!(summary.expired, 2);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_seed_inventory() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut shop = Shop::default();
        shop.seed_inventory_with(&mut rng, 500);

        assert_eq!(shop.items().len(), 500);
        for item in shop.items() {
            if systems::classify(&item.name).is_legendary() {
                assert_eq!(item.quality, LEGENDARY_QUALITY);
            } else {
                assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality));
            }
            assert!((-5..=20).contains(&item.sell_in));
        }
    }

    #[test]
    fn test_parallel_update_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seq = Shop::default();
        seq.seed_inventory_with(&mut rng, 2_000);
        let mut par = seq.clone();

        let seq_summary = seq.update_quality();
        let par_summary = par.update_quality_par();

        assert_eq!(seq.items(), par.items());
        assert_eq!(seq_summary, par_summary);
    }
}
