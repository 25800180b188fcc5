//! Data models for packgen
//!
//! This module contains the core domain models organized by concern:
//! - Destination: catalog entries with climate and monthly temperatures
//! - Trip: traveler and luggage parameters for one packing list
//! - Record: the row written to the dataset

pub mod destination;
pub mod record;
pub mod trip;

// Re-export all public types for convenient access
pub use destination::{ClimateClass, Destination, TempRange};
pub use record::PackingRecord;
pub use trip::{Gender, LuggageType, MAX_TRIP_DAYS, TripContext, TripPurpose};
