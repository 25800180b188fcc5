//! Dataset generation
//!
//! Samples a traveler, destination, trip window and luggage type for each
//! record, looks up the destination's temperature for the start month and
//! derives the packing list.

use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::{debug, info};

use crate::catalog::DestinationCatalog;
use crate::config::GenerationConfig;
use crate::models::record::round_one_decimal;
use crate::models::{Destination, Gender, LuggageType, PackingRecord, TripContext};
use crate::packing::PackingListBuilder;
use crate::{PackGenError, Result};

const SHORT_TRIP_LUGGAGE: [LuggageType; 2] = [LuggageType::Hand, LuggageType::CarryOn];
const LONG_TRIP_LUGGAGE: [LuggageType; 2] = [LuggageType::CarryOn, LuggageType::Checked];

/// Produces packing records from a shared, read-only catalog
pub struct DatasetGenerator<'a> {
    catalog: &'a DestinationCatalog,
    settings: GenerationConfig,
    today: NaiveDate,
    rng: StdRng,
}

impl<'a> DatasetGenerator<'a> {
    /// Create a generator seeded from `settings.seed`, or from the thread
    /// RNG when no seed is configured
    #[must_use]
    pub fn new(
        catalog: &'a DestinationCatalog,
        settings: GenerationConfig,
        today: NaiveDate,
    ) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        info!(seed, "Seeding record generator");
        Self::with_rng(catalog, settings, today, StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng(
        catalog: &'a DestinationCatalog,
        settings: GenerationConfig,
        today: NaiveDate,
        rng: StdRng,
    ) -> Self {
        Self {
            catalog,
            settings,
            today,
            rng,
        }
    }

    /// Generate exactly `count` records
    pub fn generate(&mut self, count: usize) -> Result<Vec<PackingRecord>> {
        info!(
            "Generating {} records across {} destinations",
            count,
            self.catalog.len()
        );

        let mut records = Vec::with_capacity(count);
        for index in 0..count {
            records.push(self.generate_record(index)?);
        }
        Ok(records)
    }

    /// Generate the record at position `index` (used for the user id)
    pub fn generate_record(&mut self, index: usize) -> Result<PackingRecord> {
        let gender = Gender::ALL[self.rng.random_range(0..Gender::ALL.len())];
        let age = self
            .rng
            .random_range(self.settings.min_age..=self.settings.max_age);

        let catalog = self.catalog;
        let destinations = catalog.destinations();
        let destination = &destinations[self.rng.random_range(0..destinations.len())];

        let (start_date, end_date, duration_days) = self.sample_dates()?;
        let temps = *destination.temp_range(start_date.month())?;
        let avg_temp = temps.average();

        let luggage = self.sample_luggage(duration_days);
        let is_business = self.sample_business(age);

        let trip = TripContext::new(gender, age, duration_days, avg_temp, luggage, is_business)?;
        let packing_list = PackingListBuilder::build(&trip, destination, &mut self.rng);

        let record = Self::assemble(
            index,
            &trip,
            destination,
            start_date,
            end_date,
            temps.min,
            temps.max,
            packing_list.to_string(),
        );
        debug!(
            user_id = %record.user_id,
            destination = %record.destination,
            items = packing_list.total(),
            cap = packing_list.cap,
            removed = packing_list.outcome.removed(),
            "record generated"
        );
        Ok(record)
    }

    /// Start date, end date and trip length in days
    fn sample_dates(&mut self) -> Result<(NaiveDate, NaiveDate, u32)> {
        let lead = self
            .rng
            .random_range(self.settings.min_lead_days..=self.settings.max_lead_days);
        let duration = self
            .rng
            .random_range(self.settings.min_duration_days..=self.settings.max_duration_days);

        let start = add_days(self.today, lead)?;
        let end = add_days(start, duration)?;
        Ok((start, end, duration))
    }

    fn sample_luggage(&mut self, duration_days: u32) -> LuggageType {
        let options = if duration_days <= self.settings.short_trip_days {
            SHORT_TRIP_LUGGAGE
        } else {
            LONG_TRIP_LUGGAGE
        };
        options[self.rng.random_range(0..options.len())]
    }

    fn sample_business(&mut self, age: u32) -> bool {
        let in_business_age =
            (self.settings.business_min_age..=self.settings.business_max_age).contains(&age);
        in_business_age && self.rng.random::<f64>() < self.settings.business_probability
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        index: usize,
        trip: &TripContext,
        destination: &Destination,
        start_date: NaiveDate,
        end_date: NaiveDate,
        min_temp: f64,
        max_temp: f64,
        packed_items: String,
    ) -> PackingRecord {
        PackingRecord {
            user_id: PackingRecord::user_id_for(index),
            age: trip.age,
            gender: trip.gender,
            destination: destination.name.clone(),
            country: destination.country.clone(),
            start_date,
            end_date,
            min_temp_celsius: min_temp,
            max_temp_celsius: max_temp,
            avg_temp_celsius: round_one_decimal(trip.avg_temp),
            luggage_type: trip.luggage,
            trip_purpose: trip.purpose(),
            packed_items,
        }
    }
}

fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| PackGenError::validation(format!("{date} + {days} days is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClimateClass, TempRange, TripPurpose};
    use std::collections::BTreeMap;

    fn full_year(min: f64, max: f64) -> BTreeMap<u32, TempRange> {
        (1..=12).map(|m| (m, TempRange::new(min, max))).collect()
    }

    fn catalog() -> DestinationCatalog {
        DestinationCatalog::from_destinations(vec![
            Destination {
                name: "Bangkok".to_string(),
                country: "Thailand".to_string(),
                climate: ClimateClass::Tropical,
                temps: full_year(25.0, 34.0),
            },
            Destination {
                name: "Reykjavik".to_string(),
                country: "Iceland".to_string(),
                climate: ClimateClass::Polar,
                temps: full_year(-3.0, 4.5),
            },
        ])
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn seeded<'a>(catalog: &'a DestinationCatalog, settings: GenerationConfig) -> DatasetGenerator<'a> {
        DatasetGenerator::with_rng(catalog, settings, today(), StdRng::seed_from_u64(17))
    }

    #[test]
    fn test_generates_requested_count() {
        let catalog = catalog();
        let records = seeded(&catalog, GenerationConfig::default())
            .generate(37)
            .unwrap();

        assert_eq!(records.len(), 37);
        assert_eq!(records[0].user_id, "U0001");
        assert_eq!(records[36].user_id, "U0037");
    }

    #[test]
    fn test_records_respect_sampling_ranges() {
        let catalog = catalog();
        let records = seeded(&catalog, GenerationConfig::default())
            .generate(300)
            .unwrap();

        for record in &records {
            assert!((18..=75).contains(&record.age));

            let lead = (record.start_date - today()).num_days();
            assert!((1..=365).contains(&lead));

            let duration = (record.end_date - record.start_date).num_days();
            assert!((3..=14).contains(&duration));

            if duration <= 3 {
                assert_ne!(record.luggage_type, LuggageType::Checked);
            } else {
                assert_ne!(record.luggage_type, LuggageType::Hand);
            }

            if record.trip_purpose == TripPurpose::Business {
                assert!((25..=65).contains(&record.age));
            }

            let dest = catalog.get(&record.destination).unwrap();
            assert_eq!(record.country, dest.country);
            let temps = dest.temp_range(record.start_date.month()).unwrap();
            assert_eq!(record.min_temp_celsius, temps.min);
            assert_eq!(record.max_temp_celsius, temps.max);
            assert!(!record.packed_items.is_empty());
        }
    }

    #[test]
    fn test_avg_temp_is_rounded() {
        let catalog = catalog();
        let records = seeded(&catalog, GenerationConfig::default())
            .generate(50)
            .unwrap();

        let reykjavik: Vec<_> = records
            .iter()
            .filter(|r| r.destination == "Reykjavik")
            .collect();
        assert!(!reykjavik.is_empty());
        // (-3.0 + 4.5) / 2 = 0.75
        assert!(reykjavik.iter().all(|r| r.avg_temp_celsius == 0.8));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let catalog = catalog();
        let a = seeded(&catalog, GenerationConfig::default())
            .generate(40)
            .unwrap();
        let b = seeded(&catalog, GenerationConfig::default())
            .generate(40)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_configured_seed_is_reproducible() {
        let catalog = catalog();
        let settings = GenerationConfig {
            seed: Some(99),
            ..GenerationConfig::default()
        };

        let a = DatasetGenerator::new(&catalog, settings.clone(), today())
            .generate(10)
            .unwrap();
        let b = DatasetGenerator::new(&catalog, settings, today())
            .generate(10)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_business_trips_outside_age_range() {
        let catalog = catalog();
        let settings = GenerationConfig {
            min_age: 70,
            max_age: 75,
            business_probability: 1.0,
            ..GenerationConfig::default()
        };
        let records = seeded(&catalog, settings).generate(40).unwrap();
        assert!(records.iter().all(|r| r.trip_purpose == TripPurpose::Leisure));
    }

    #[test]
    fn test_certain_business_trips() {
        let catalog = catalog();
        let settings = GenerationConfig {
            min_age: 30,
            max_age: 40,
            business_probability: 1.0,
            ..GenerationConfig::default()
        };
        let records = seeded(&catalog, settings).generate(20).unwrap();
        assert!(records.iter().all(|r| r.trip_purpose == TripPurpose::Business));
    }

    #[test]
    fn test_missing_month_aborts_generation() {
        let mut temps = BTreeMap::new();
        temps.insert(6, TempRange::new(10.0, 20.0));
        let catalog = DestinationCatalog::from_destinations(vec![Destination {
            name: "Partial".to_string(),
            country: "Nowhere".to_string(),
            climate: ClimateClass::Other,
            temps,
        }])
        .unwrap();

        let err = seeded(&catalog, GenerationConfig::default())
            .generate(50)
            .unwrap_err();
        assert!(matches!(err, PackGenError::Catalog { .. }));
    }

    #[test]
    fn test_packed_items_fit_luggage() {
        let catalog = catalog();
        let records = seeded(&catalog, GenerationConfig::default())
            .generate(200)
            .unwrap();

        for record in &records {
            let total: u32 = record
                .packed_items
                .split(", ")
                .map(|entry| {
                    let (count, _) = entry.split_once(' ').unwrap();
                    count.parse::<u32>().unwrap()
                })
                .sum();
            assert!(total <= record.luggage_type.capacity());
        }
    }
}
