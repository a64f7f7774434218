//! Update engine: one simulated day for one item.
//!
//! Each non-legendary item goes through two phases per day:
//!
//! 1. **base**: quality moves according to the sell-in value *before* the day
//!    passes;
//! 2. **expiry**: once sell-in has been decremented, items that are now past
//!    their date receive their category's correction.

use crate::item::{Category, Item};
use crate::rules::AgingRules;

/// Quality gained by an event pass for a given sell-in, before the event.
fn event_pass_gain(sell_in: i64) -> i64 {
    if sell_in <= 5 {
        3
    } else if sell_in <= 10 {
        2
    } else {
        1
    }
}

/// Category the rules actually apply to this item.
///
/// Conjured goods age like regular ones unless the rules switch them on.
pub(crate) fn effective_category(item: &Item, rules: &AgingRules) -> Category {
    match item.category() {
        Category::Conjured if !rules.conjured_enabled => Category::Regular,
        other => other,
    }
}

fn adjust(item: &mut Item, delta: i64, rules: &AgingRules) {
    item.quality = rules.clamp(item.quality.saturating_add(delta));
}

/// Pre-decrement adjustment.
pub(crate) fn apply_base(item: &mut Item, category: Category, rules: &AgingRules) {
    match category {
        Category::Legendary => {}
        // Aged goods double their gain once the previous day left them expired.
        Category::AgedGood => {
            let gain = if item.is_expired() { 2 } else { 1 };
            adjust(item, gain, rules);
        }
        Category::EventPass => {
            if item.is_expired() {
                item.quality = rules.min_quality;
            } else {
                adjust(item, event_pass_gain(item.sell_in), rules);
            }
        }
        Category::Conjured => adjust(item, -2, rules),
        Category::Regular => adjust(item, -1, rules),
    }
}

/// Post-decrement adjustment, only called for items that are now expired.
pub(crate) fn apply_expiry(item: &mut Item, category: Category, rules: &AgingRules) {
    match category {
        // Aged goods pick up their expiry bonus in the base phase of later days.
        Category::Legendary | Category::AgedGood => {}
        Category::EventPass => item.quality = rules.min_quality,
        Category::Conjured => adjust(item, -2, rules),
        Category::Regular => adjust(item, -1, rules),
    }
}

/// Age a single item by one day.
pub(crate) fn age(item: &mut Item, rules: &AgingRules) {
    let category = effective_category(item, rules);
    if category == Category::Legendary {
        return;
    }

    apply_base(item, category, rules);
    item.sell_in = item.sell_in.saturating_sub(1);
    if item.is_expired() {
        apply_expiry(item, category, rules);
    }
}
