//! Packing module
//!
//! This module derives packing lists from trip parameters:
//! - Item vocabulary and priority tiers
//! - Base clothing quantities from trip length
//! - Climate and temperature driven clothing selection
//! - Luggage capacity enforcement

pub mod builder;
pub mod capacity;
pub mod items;
pub mod quantities;

pub use builder::{PackingList, PackingListBuilder, TemperatureBand};
pub use capacity::{CapacityOutcome, enforce_cap};
pub use items::{Item, ItemCounts, PriorityTier};
pub use quantities::{BaseQuantities, BusinessAttire, compute_base_quantities};
