//! Output row of the dataset

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::trip::{Gender, LuggageType, TripPurpose};

/// One synthesized trip with its packed items
///
/// Field order is the column order of the written file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingRecord {
    pub user_id: String,
    pub age: u32,
    pub gender: Gender,
    pub destination: String,
    pub country: String,
    /// Serialized as `YYYY-MM-DD`
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub min_temp_celsius: f64,
    pub max_temp_celsius: f64,
    /// Rounded to one decimal place
    pub avg_temp_celsius: f64,
    pub luggage_type: LuggageType,
    pub trip_purpose: TripPurpose,
    /// `"<count> <item>, <count> <item>, ..."`
    pub packed_items: String,
}

impl PackingRecord {
    pub const HEADERS: [&'static str; 13] = [
        "user_id",
        "age",
        "gender",
        "destination",
        "country",
        "start_date",
        "end_date",
        "min_temp_celsius",
        "max_temp_celsius",
        "avg_temp_celsius",
        "luggage_type",
        "trip_purpose",
        "packed_items",
    ];

    /// Sequential user id, `U0001` for index 0
    #[must_use]
    pub fn user_id_for(index: usize) -> String {
        format!("U{:04}", index + 1)
    }
}

/// Round a temperature to one decimal place, halves to even
///
/// Catalog averages are multiples of 0.25, so `value * 10.0` is exact and a
/// tie such as 23.25 lands on 23.2.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_padding() {
        assert_eq!(PackingRecord::user_id_for(0), "U0001");
        assert_eq!(PackingRecord::user_id_for(41), "U0042");
        assert_eq!(PackingRecord::user_id_for(9999), "U10000");
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(-1.54), -1.5);
        assert_eq!(round_one_decimal(17.0), 17.0);
        assert_eq!(round_one_decimal(4.16), 4.2);
    }

    #[test]
    fn test_round_one_decimal_ties_go_to_even() {
        assert_eq!(round_one_decimal(23.25), 23.2);
        assert_eq!(round_one_decimal(23.75), 23.8);
        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(-6.25), -6.2);
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2026-03-07\"");
    }
}
