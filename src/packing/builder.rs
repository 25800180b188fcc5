//! Packing list derivation
//!
//! Turns a trip context and destination into a bounded list of items:
//! essentials, toiletries, temperature-appropriate clothing, climate extras
//! and business attire, reduced to the luggage cap.

use rand::Rng;
use std::fmt;
use tracing::debug;

use super::capacity::{CapacityOutcome, enforce_cap};
use super::items::{Item, ItemCounts};
use super::quantities::{BaseQuantities, compute_base_quantities, packed_dress_count};
use crate::models::{ClimateClass, Destination, Gender, LuggageType, TripContext};

/// Above this average temperature the hot-weather wardrobe is packed
pub const HOT_THRESHOLD_C: f64 = 25.0;
/// Below this average temperature the cold-weather wardrobe is packed
pub const COLD_THRESHOLD_C: f64 = 10.0;
/// Above this, a full set of bikinis instead of a single one
pub const BEACH_THRESHOLD_C: f64 = 28.0;

const ESSENTIALS: [Item; 8] = [
    Item::Toothbrush,
    Item::Toothpaste,
    Item::Deodorant,
    Item::PhoneCharger,
    Item::Wallet,
    Item::Passport,
    Item::Medications,
    Item::PowerAdapter,
];

const TOILETRIES: [Item; 5] = [
    Item::Shampoo,
    Item::Conditioner,
    Item::FaceWash,
    Item::FaceMoisturizer,
    Item::BrushComb,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Hot,
    Cold,
    Temperate,
}

impl TemperatureBand {
    #[must_use]
    pub fn from_celsius(avg_temp: f64) -> Self {
        if avg_temp > HOT_THRESHOLD_C {
            TemperatureBand::Hot
        } else if avg_temp < COLD_THRESHOLD_C {
            TemperatureBand::Cold
        } else {
            TemperatureBand::Temperate
        }
    }
}

/// Final list for one trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingList {
    pub items: ItemCounts,
    /// Luggage cap the list was reduced to
    pub cap: u32,
    pub outcome: CapacityOutcome,
}

impl PackingList {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.items.total()
    }
}

impl fmt::Display for PackingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, f)
    }
}

pub struct PackingListBuilder;

impl PackingListBuilder {
    /// Build the packing list for a trip.
    ///
    /// Randomness is only consumed when the list has to be cut down to the
    /// luggage cap.
    #[tracing::instrument(
        name = "build_packing_list",
        level = "debug",
        skip(destination, rng),
        fields(destination = %destination.name, climate = %destination.climate)
    )]
    pub fn build<R: Rng + ?Sized>(
        trip: &TripContext,
        destination: &Destination,
        rng: &mut R,
    ) -> PackingList {
        let quantities = compute_base_quantities(trip.duration_days, trip.is_business);
        debug!(base = %quantities.to_item_counts(), "base quantities");
        let mut items = Self::collect_items(trip, destination.climate, &quantities);

        let cap = trip.luggage.capacity();
        let outcome = enforce_cap(&mut items, cap, rng);
        debug!(total = items.total(), cap, ?outcome, "packing list built");

        PackingList {
            items,
            cap,
            outcome,
        }
    }

    /// Everything the trip calls for, before the luggage cap is applied
    #[must_use]
    pub fn collect_items(
        trip: &TripContext,
        climate: ClimateClass,
        quantities: &BaseQuantities,
    ) -> ItemCounts {
        let mut items = ItemCounts::new();

        for item in ESSENTIALS {
            items.add(item, 1);
        }

        if trip.duration_days > 3 || trip.luggage == LuggageType::Checked {
            for item in TOILETRIES {
                items.add(item, 1);
            }
        }

        Self::add_weather_clothing(&mut items, trip, quantities);
        Self::add_climate_extras(&mut items, climate, trip.duration_days);

        if trip.is_business {
            Self::add_business_attire(&mut items, trip.gender, trip.duration_days, quantities);
        }

        items
    }

    fn add_weather_clothing(items: &mut ItemCounts, trip: &TripContext, q: &BaseQuantities) {
        let days = trip.duration_days;

        match TemperatureBand::from_celsius(trip.avg_temp) {
            TemperatureBand::Hot => {
                match trip.gender {
                    Gender::Female => {
                        let bikinis = if trip.avg_temp > BEACH_THRESHOLD_C {
                            (days / 2).min(3)
                        } else {
                            1
                        };
                        items.add(Item::Bikini, bikinis);
                        items.add(Item::SummerDress, (days / 2).min(4));
                    }
                    Gender::Male => items.add(Item::SwimmingTrunks, (days / 3).min(2)),
                    Gender::NonBinary => items.add(Item::SwimmingSuit, (days / 3).min(2)),
                }
                items.add(Item::Shorts, q.shorts);
                items.add(Item::TankTop, q.t_shirt);
            }
            TemperatureBand::Cold => {
                items.add(Item::Sweater, (days / 2).min(4));
                items.add(Item::ThermalUnderwear, if days > 3 { 2 } else { 1 });
                items.add(Item::WinterCoat, 1);
                items.add(Item::Gloves, 1);
                items.add(Item::WoolScarf, 1);
                items.add(Item::Beanie, 1);
                items.add(Item::WoolSocks, (days / 2).min(4));
            }
            TemperatureBand::Temperate => {
                items.add(Item::TShirt, q.t_shirt);
                items.add(Item::Jeans, q.pants);
                items.add(Item::LightJacket, 1);
                items.add(Item::Sneakers, 1);
            }
        }
    }

    fn add_climate_extras(items: &mut ItemCounts, climate: ClimateClass, days: u32) {
        match climate {
            ClimateClass::Tropical => {
                items.add(Item::Sunscreen, 1 + days / 7);
                items.add(Item::InsectRepellent, 1 + days / 7);
            }
            ClimateClass::Desert => {
                items.add(Item::Sunscreen, 2 + days / 5);
                items.add(Item::HeadCovering, 1);
            }
            ClimateClass::Temperate
            | ClimateClass::Mediterranean
            | ClimateClass::Continental
            | ClimateClass::Polar
            | ClimateClass::Other => {}
        }
    }

    fn add_business_attire(items: &mut ItemCounts, gender: Gender, days: u32, q: &BaseQuantities) {
        let Some(attire) = q.business else {
            return;
        };

        items.add(Item::DressShirt, attire.dress_shirt);
        items.add(Item::DressPants, attire.dress_pants);
        items.add(Item::Blazer, attire.blazer);
        if gender == Gender::Male {
            items.add(Item::Tie, attire.tie);
        }
        items.add(Item::DressShoes, attire.dress_shoes);
        items.add(Item::Belt, attire.belt);
        if gender == Gender::Female {
            items.add(Item::Dress, packed_dress_count(days));
        }
    }
}
