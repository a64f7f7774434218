use gildedrose_core::DomainResult;

use crate::engine;
use crate::item::Item;
use crate::rules::AgingRules;

/// The shop: an ordered inventory aged one day per `update_quality` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    items: Vec<Item>,
    rules: AgingRules,
}

impl Shop {
    /// Create a shop using the default aging rules.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            rules: AgingRules::default(),
        }
    }

    /// Create a shop with explicit aging rules.
    pub fn with_rules(items: Vec<Item>, rules: AgingRules) -> DomainResult<Self> {
        rules.validate()?;
        Ok(Self { items, rules })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn rules(&self) -> &AgingRules {
        &self.rules
    }

    /// Advance every item by one day, in order, and return the updated items.
    pub fn update_quality(&mut self) -> &[Item] {
        let span = tracing::debug_span!("update_quality", items = self.items.len());
        let _enter = span.enter();

        for item in &mut self.items {
            let (sell_in, quality) = (item.sell_in(), item.quality());
            engine::age(item, &self.rules);
            tracing::trace!(
                name = item.name(),
                category = %engine::effective_category(item, &self.rules),
                sell_in_before = sell_in,
                sell_in_after = item.sell_in(),
                quality_before = quality,
                quality_after = item.quality(),
                "item aged"
            );
        }

        &self.items
    }
}
