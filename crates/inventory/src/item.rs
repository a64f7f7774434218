use serde::{Deserialize, Serialize};

/// Name of the single legendary item.
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the aged good.
pub const AGED_GOOD_NAME: &str = "Aged Brie";

/// Prefix shared by every event pass.
pub const EVENT_PASS_PREFIX: &str = "Backstage passes";

/// Marker contained in the name of conjured goods.
pub const CONJURED_MARKER: &str = "Conjured";

/// Aging category of an item, derived once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Never sold, never degrades.
    Legendary,
    /// Gains quality as it gets older.
    AgedGood,
    /// Gains quality as the event approaches, worthless afterwards.
    EventPass,
    /// Degrades twice as fast as a regular item (when enabled in the rules).
    Conjured,
    /// Everything else.
    Regular,
}

impl Category {
    /// Classify an item name.
    ///
    /// Priority: legendary, aged good, event pass, conjured, regular.
    pub fn classify(name: &str) -> Self {
        if name == LEGENDARY_NAME {
            Category::Legendary
        } else if name == AGED_GOOD_NAME {
            Category::AgedGood
        } else if name.starts_with(EVENT_PASS_PREFIX) {
            Category::EventPass
        } else if name.contains(CONJURED_MARKER) {
            Category::Conjured
        } else {
            Category::Regular
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::AgedGood => "aged_good",
            Category::EventPass => "event_pass",
            Category::Conjured => "conjured",
            Category::Regular => "regular",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single shop item.
///
/// Values are taken as given at construction. Out-of-range quality is only
/// pulled back into bounds by the next update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    category: Category,
    pub(crate) sell_in: i64,
    pub(crate) quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = Category::classify(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Days left before the sell-by date (negative once expired).
    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item. The category is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    name: String,
    sell_in: i64,
    quality: i64,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_keeps_values_as_given() {
        for (name, sell_in, quality) in [("foo", 0, 0), ("bar", 5, 5)] {
            let item = Item::new(name, sell_in, quality);
            assert_eq!(item.name(), name);
            assert_eq!(item.sell_in(), sell_in);
            assert_eq!(item.quality(), quality);
        }
    }

    #[test]
    fn construction_does_not_clamp_quality() {
        let item = Item::new("foo", 3, 75);
        assert_eq!(item.quality(), 75);

        let item = Item::new("foo", 3, -4);
        assert_eq!(item.quality(), -4);
    }

    #[test]
    fn classify_uses_exact_prefix_and_substring_matches() {
        assert_eq!(
            Category::classify("Sulfuras, Hand of Ragnaros"),
            Category::Legendary
        );
        assert_eq!(Category::classify("Aged Brie"), Category::AgedGood);
        assert_eq!(
            Category::classify("Backstage passes to a TAFKAL80ETC concert"),
            Category::EventPass
        );
        assert_eq!(
            Category::classify("Conjured Mana Cake"),
            Category::Conjured
        );
        assert_eq!(Category::classify("+5 Dexterity Vest"), Category::Regular);

        // Near misses fall through to the regular rule.
        assert_eq!(Category::classify("Sulfuras"), Category::Regular);
        assert_eq!(Category::classify("aged brie"), Category::Regular);
        assert_eq!(Category::classify("Aged Brie "), Category::Regular);
        assert_eq!(Category::classify("VIP Backstage passes"), Category::Regular);
    }

    #[test]
    fn classify_prefers_event_pass_over_conjured() {
        assert_eq!(
            Category::classify("Backstage passes to a Conjured show"),
            Category::EventPass
        );
    }

    #[test]
    fn display_uses_inventory_line_format() {
        let item = Item::new("Aged Brie", -1, 12);
        assert_eq!(item.to_string(), "Aged Brie, -1, 12");
    }

    #[test]
    fn serde_rederives_category_from_name() {
        let item: Item =
            serde_json::from_str(r#"{"name":"Aged Brie","sellIn":2,"quality":0}"#).unwrap();
        assert_eq!(item.category(), Category::AgedGood);
        assert_eq!(item.sell_in(), 2);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Aged Brie", "sellIn": 2, "quality": 0 })
        );
    }
}
