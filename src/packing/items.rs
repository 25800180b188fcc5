//! Item vocabulary, priority tiers and aggregated counts

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Every item a packing list can contain
///
/// Declaration order is the output order of a formatted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Item {
    // essentials
    Toothbrush,
    Toothpaste,
    Deodorant,
    PhoneCharger,
    Wallet,
    Passport,
    Medications,
    PowerAdapter,
    // toiletries
    Shampoo,
    Conditioner,
    FaceWash,
    FaceMoisturizer,
    BrushComb,
    // base clothing
    Underwear,
    Socks,
    TShirt,
    Pants,
    Shorts,
    // hot weather
    Bikini,
    SummerDress,
    SwimmingTrunks,
    SwimmingSuit,
    TankTop,
    // cold weather
    Sweater,
    ThermalUnderwear,
    WinterCoat,
    Gloves,
    WoolScarf,
    Beanie,
    WoolSocks,
    // temperate
    Jeans,
    LightJacket,
    Sneakers,
    // destination climate
    Sunscreen,
    InsectRepellent,
    HeadCovering,
    // business
    DressShirt,
    DressPants,
    Dress,
    Blazer,
    Tie,
    Belt,
    DressShoes,
}

/// Capacity reduction order: non-essential items go first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    Essential,
    NonEssential,
}

impl Item {
    pub const ALL: [Item; 43] = [
        Item::Toothbrush,
        Item::Toothpaste,
        Item::Deodorant,
        Item::PhoneCharger,
        Item::Wallet,
        Item::Passport,
        Item::Medications,
        Item::PowerAdapter,
        Item::Shampoo,
        Item::Conditioner,
        Item::FaceWash,
        Item::FaceMoisturizer,
        Item::BrushComb,
        Item::Underwear,
        Item::Socks,
        Item::TShirt,
        Item::Pants,
        Item::Shorts,
        Item::Bikini,
        Item::SummerDress,
        Item::SwimmingTrunks,
        Item::SwimmingSuit,
        Item::TankTop,
        Item::Sweater,
        Item::ThermalUnderwear,
        Item::WinterCoat,
        Item::Gloves,
        Item::WoolScarf,
        Item::Beanie,
        Item::WoolSocks,
        Item::Jeans,
        Item::LightJacket,
        Item::Sneakers,
        Item::Sunscreen,
        Item::InsectRepellent,
        Item::HeadCovering,
        Item::DressShirt,
        Item::DressPants,
        Item::Dress,
        Item::Blazer,
        Item::Tie,
        Item::Belt,
        Item::DressShoes,
    ];

    /// Display name as written to the dataset
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Item::Toothbrush => "toothbrush",
            Item::Toothpaste => "toothpaste",
            Item::Deodorant => "deodorant",
            Item::PhoneCharger => "phone charger",
            Item::Wallet => "wallet",
            Item::Passport => "passport",
            Item::Medications => "medications",
            Item::PowerAdapter => "power adapter",
            Item::Shampoo => "shampoo",
            Item::Conditioner => "conditioner",
            Item::FaceWash => "face wash",
            Item::FaceMoisturizer => "face moisturizer",
            Item::BrushComb => "brush/comb",
            Item::Underwear => "underwear",
            Item::Socks => "socks",
            Item::TShirt => "t-shirt",
            Item::Pants => "pants",
            Item::Shorts => "shorts",
            Item::Bikini => "bikini",
            Item::SummerDress => "summer dress",
            Item::SwimmingTrunks => "swimming trunks",
            Item::SwimmingSuit => "swimming suit",
            Item::TankTop => "tank top",
            Item::Sweater => "sweater",
            Item::ThermalUnderwear => "thermal underwear",
            Item::WinterCoat => "winter coat",
            Item::Gloves => "gloves",
            Item::WoolScarf => "wool scarf",
            Item::Beanie => "beanie",
            Item::WoolSocks => "wool socks",
            Item::Jeans => "jeans",
            Item::LightJacket => "light jacket",
            Item::Sneakers => "sneakers",
            Item::Sunscreen => "sunscreen",
            Item::InsectRepellent => "insect repellent",
            Item::HeadCovering => "head covering",
            Item::DressShirt => "dress shirt",
            Item::DressPants => "dress pants",
            Item::Dress => "dress",
            Item::Blazer => "blazer",
            Item::Tie => "tie",
            Item::Belt => "belt",
            Item::DressShoes => "dress shoes",
        }
    }

    /// Essential items are only dropped once nothing else is left to drop
    #[must_use]
    pub fn tier(&self) -> PriorityTier {
        match self {
            Item::Underwear
            | Item::ThermalUnderwear
            | Item::Socks
            | Item::WoolSocks
            | Item::Medications
            | Item::Passport
            | Item::PhoneCharger => PriorityTier::Essential,
            _ => PriorityTier::NonEssential,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregated item counts; every stored count is at least 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCounts {
    counts: BTreeMap<Item, u32>,
}

impl ItemCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an item, summing with any earlier contribution.
    /// A zero quantity is skipped.
    pub fn add(&mut self, item: Item, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.counts.entry(item).or_insert(0) += quantity;
    }

    /// Remove one unit of an item, dropping the entry when it reaches zero.
    /// Returns false when the item is absent.
    pub fn decrement(&mut self, item: Item) -> bool {
        match self.counts.get_mut(&item) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(&item);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, item: Item) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, item: Item) -> bool {
        self.counts.contains_key(&item)
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Sum of counts for items in one tier
    #[must_use]
    pub fn tier_total(&self, tier: PriorityTier) -> u32 {
        self.iter()
            .filter(|(item, _)| item.tier() == tier)
            .map(|(_, count)| count)
            .sum()
    }

    /// Items currently present in the given tier
    #[must_use]
    pub fn items_in_tier(&self, tier: PriorityTier) -> Vec<Item> {
        self.counts
            .keys()
            .copied()
            .filter(|item| item.tier() == tier)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.counts.iter().map(|(item, count)| (*item, *count))
    }
}

impl fmt::Display for ItemCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (item, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{count} {item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ESSENTIAL_KEYWORDS: [&str; 5] = ["underwear", "socks", "medications", "passport", "charger"];

    #[test]
    fn test_tier_matches_keyword_rule() {
        for item in Item::ALL {
            let name = item.name().to_lowercase();
            let keyword_match = ESSENTIAL_KEYWORDS.iter().any(|k| name.contains(k));
            assert_eq!(
                item.tier() == PriorityTier::Essential,
                keyword_match,
                "tier mismatch for {name}"
            );
        }
    }

    #[test]
    fn test_all_lists_every_item_once() {
        let mut names: Vec<&str> = Item::ALL.iter().map(Item::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Item::ALL.len());
        assert!(Item::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_add_sums_and_skips_zero() {
        let mut counts = ItemCounts::new();
        counts.add(Item::DressShirt, 2);
        counts.add(Item::DressShirt, 3);
        counts.add(Item::Tie, 0);

        assert_eq!(counts.get(Item::DressShirt), 5);
        assert!(!counts.contains(Item::Tie));
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_decrement_removes_at_zero() {
        let mut counts = ItemCounts::new();
        counts.add(Item::Beanie, 2);

        assert!(counts.decrement(Item::Beanie));
        assert_eq!(counts.get(Item::Beanie), 1);
        assert!(counts.decrement(Item::Beanie));
        assert!(!counts.contains(Item::Beanie));
        assert!(!counts.decrement(Item::Beanie));
    }

    #[test]
    fn test_format() {
        let mut counts = ItemCounts::new();
        counts.add(Item::Sunscreen, 2);
        counts.add(Item::Passport, 1);
        counts.add(Item::BrushComb, 1);

        assert_eq!(counts.to_string(), "1 passport, 1 brush/comb, 2 sunscreen");
        assert_eq!(ItemCounts::new().to_string(), "");
    }

    #[test]
    fn test_tier_totals() {
        let mut counts = ItemCounts::new();
        counts.add(Item::Underwear, 4);
        counts.add(Item::WoolSocks, 2);
        counts.add(Item::Gloves, 1);

        assert_eq!(counts.tier_total(PriorityTier::Essential), 6);
        assert_eq!(counts.tier_total(PriorityTier::NonEssential), 1);
        assert_eq!(
            counts.items_in_tier(PriorityTier::Essential),
            vec![Item::Underwear, Item::WoolSocks]
        );
    }
}
