//! Base clothing quantities from trip length
//!
//! Pure functions of `(duration_days, is_business)`; no randomness.

use super::items::{Item, ItemCounts};

/// Business attire counts shared by the quantity calculator and the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessAttire {
    pub dress_shirt: u32,
    pub dress_pants: u32,
    pub blazer: u32,
    /// Tie count before the gender rule is applied
    pub tie: u32,
    pub belt: u32,
    pub dress_shoes: u32,
}

impl BusinessAttire {
    #[must_use]
    pub fn for_duration(duration_days: u32) -> Self {
        let short_trip = duration_days <= 3;
        Self {
            dress_shirt: duration_days.saturating_sub(1).min(6),
            dress_pants: (duration_days / 2).min(3),
            blazer: if short_trip { 1 } else { 2 },
            tie: duration_days.saturating_sub(1).min(5),
            belt: 1,
            dress_shoes: if short_trip { 1 } else { 2 },
        }
    }
}

/// Dress count reported by the quantity calculator
#[must_use]
pub fn advisory_dress_count(duration_days: u32) -> u32 {
    if duration_days > 3 {
        (duration_days / 2).min(4)
    } else {
        2
    }
}

/// Dress count actually packed for a business trip
#[must_use]
pub fn packed_dress_count(duration_days: u32) -> u32 {
    (duration_days / 2).min(4)
}

/// Base clothing counts for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseQuantities {
    pub underwear: u32,
    pub socks: u32,
    pub t_shirt: u32,
    pub pants: u32,
    pub shorts: u32,
    pub business: Option<BusinessAttire>,
    pub dress: Option<u32>,
}

/// Compute base clothing quantities, assuming laundry roughly once a week
#[must_use]
pub fn compute_base_quantities(duration_days: u32, is_business: bool) -> BaseQuantities {
    let t_shirt = if is_business {
        (duration_days / 2).min(4)
    } else {
        duration_days.min(7)
    };
    let bottoms = (duration_days / 2 + 1).min(4);

    BaseQuantities {
        underwear: duration_days.saturating_add(1),
        socks: duration_days.saturating_add(1),
        t_shirt,
        pants: bottoms,
        shorts: bottoms,
        business: is_business.then(|| BusinessAttire::for_duration(duration_days)),
        dress: is_business.then(|| advisory_dress_count(duration_days)),
    }
}

impl BaseQuantities {
    /// Mapping view with zero counts dropped
    #[must_use]
    pub fn to_item_counts(&self) -> ItemCounts {
        let mut counts = ItemCounts::new();
        counts.add(Item::Underwear, self.underwear);
        counts.add(Item::Socks, self.socks);
        counts.add(Item::TShirt, self.t_shirt);
        counts.add(Item::Pants, self.pants);
        counts.add(Item::Shorts, self.shorts);

        if let Some(attire) = self.business {
            counts.add(Item::DressShirt, attire.dress_shirt);
            counts.add(Item::DressPants, attire.dress_pants);
            counts.add(Item::Blazer, attire.blazer);
            counts.add(Item::Tie, attire.tie);
            counts.add(Item::Belt, attire.belt);
            counts.add(Item::DressShoes, attire.dress_shoes);
        }
        if let Some(dress) = self.dress {
            counts.add(Item::Dress, dress);
        }
        counts
    }
}
