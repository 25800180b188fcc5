//! Luggage capacity enforcement
//!
//! Drops random units from the non-essential tier until the list fits, and
//! only touches essentials once every non-essential item is gone.

use rand::{Rng, RngExt};
use tracing::{debug, warn};

use super::items::{ItemCounts, PriorityTier};

/// How a list was brought within its luggage cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityOutcome {
    /// Already within the cap
    Fits,
    /// Only non-essential units were removed
    Reduced { removed: u32 },
    /// Non-essentials ran out and essential units were removed too
    EssentialsReduced { removed: u32 },
}

impl CapacityOutcome {
    #[must_use]
    pub fn removed(&self) -> u32 {
        match self {
            CapacityOutcome::Fits => 0,
            CapacityOutcome::Reduced { removed }
            | CapacityOutcome::EssentialsReduced { removed } => *removed,
        }
    }
}

/// Reduce `counts` until its total is at most `cap`.
///
/// Each step picks an item kind uniformly among those still present in the
/// current tier and removes one unit. The loop runs at most `total - cap`
/// times.
pub fn enforce_cap<R: Rng + ?Sized>(
    counts: &mut ItemCounts,
    cap: u32,
    rng: &mut R,
) -> CapacityOutcome {
    let total = counts.total();
    if total <= cap {
        return CapacityOutcome::Fits;
    }

    let excess = total - cap;
    let mut remaining = excess;
    let mut touched_essentials = false;

    for tier in [PriorityTier::NonEssential, PriorityTier::Essential] {
        let mut candidates = counts.items_in_tier(tier);
        while remaining > 0 && !candidates.is_empty() {
            let idx = rng.random_range(0..candidates.len());
            let item = candidates[idx];
            counts.decrement(item);
            if !counts.contains(item) {
                candidates.swap_remove(idx);
            }
            remaining -= 1;
            if tier == PriorityTier::Essential {
                touched_essentials = true;
            }
        }
    }

    let removed = excess - remaining;
    debug!(total, cap, removed, "reduced packing list to luggage cap");

    if touched_essentials {
        warn!(
            cap,
            removed, "non-essential items exhausted, essentials were reduced"
        );
        CapacityOutcome::EssentialsReduced { removed }
    } else {
        CapacityOutcome::Reduced { removed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::items::Item;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_counts() -> ItemCounts {
        let mut counts = ItemCounts::new();
        counts.add(Item::Passport, 1);
        counts.add(Item::Medications, 1);
        counts.add(Item::Underwear, 6);
        counts.add(Item::Socks, 6);
        counts.add(Item::TShirt, 5);
        counts.add(Item::Jeans, 3);
        counts.add(Item::Sneakers, 1);
        counts
    }

    #[test]
    fn test_within_cap_is_untouched() {
        let mut counts = sample_counts();
        let before = counts.clone();
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = enforce_cap(&mut counts, 40, &mut rng);

        assert_eq!(outcome, CapacityOutcome::Fits);
        assert_eq!(counts, before);
    }

    #[test]
    fn test_non_essentials_go_first() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut counts = sample_counts();
            // 23 total, 14 essential: dropping 5 touches only non-essentials
            let outcome = enforce_cap(&mut counts, 18, &mut rng);

            assert_eq!(outcome, CapacityOutcome::Reduced { removed: 5 });
            assert_eq!(counts.total(), 18);
            assert_eq!(counts.tier_total(PriorityTier::Essential), 14);
        }
    }

    #[test]
    fn test_essentials_cut_only_after_non_essentials_exhausted() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut counts = sample_counts();

        let outcome = enforce_cap(&mut counts, 10, &mut rng);

        assert_eq!(outcome, CapacityOutcome::EssentialsReduced { removed: 13 });
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.tier_total(PriorityTier::NonEssential), 0);
        assert!(counts.iter().all(|(_, count)| count >= 1));
    }

    #[test]
    fn test_zero_cap_empties_list() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut counts = sample_counts();

        let outcome = enforce_cap(&mut counts, 0, &mut rng);

        assert_eq!(outcome.removed(), 23);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut a = sample_counts();
        let mut b = sample_counts();

        enforce_cap(&mut a, 12, &mut StdRng::seed_from_u64(99));
        enforce_cap(&mut b, 12, &mut StdRng::seed_from_u64(99));

        assert_eq!(a, b);
    }
}
