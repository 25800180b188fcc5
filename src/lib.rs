//! `packgen` - Synthetic travel packing dataset generator
//!
//! This library provides the packing list derivation for a traveler and
//! destination, plus the plumbing to sample trips from a destination catalog
//! and write the results as CSV.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod packing;
pub mod sink;

// Re-export core types for public API
pub use catalog::DestinationCatalog;
pub use config::PackGenConfig;
pub use error::PackGenError;
pub use generator::DatasetGenerator;
pub use models::{ClimateClass, Destination, PackingRecord, TempRange, TripContext};
pub use packing::{PackingList, PackingListBuilder, compute_base_quantities};
pub use sink::{CsvSink, RecordSink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PackGenError>;
