//! Traveler and trip parameters driving one packing list

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{PackGenError, Result};

/// Longest trip a context accepts, in days
pub const MAX_TRIP_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "f")]
    Female,
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "nb")]
    NonBinary,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::NonBinary];

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Female => "f",
            Gender::Male => "m",
            Gender::NonBinary => "nb",
        }
    }
}

impl FromStr for Gender {
    type Err = PackGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "f" => Ok(Gender::Female),
            "m" => Ok(Gender::Male),
            "nb" => Ok(Gender::NonBinary),
            other => Err(PackGenError::validation(format!(
                "unknown gender '{other}', expected one of: f, m, nb"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Luggage constraint; each type has a maximum total item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuggageType {
    Hand,
    CarryOn,
    Checked,
}

impl LuggageType {
    /// Maximum number of packed items
    #[must_use]
    pub fn capacity(&self) -> u32 {
        match self {
            LuggageType::Hand => 15,
            LuggageType::CarryOn => 25,
            LuggageType::Checked => 40,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LuggageType::Hand => "hand",
            LuggageType::CarryOn => "carry_on",
            LuggageType::Checked => "checked",
        }
    }
}

impl FromStr for LuggageType {
    type Err = PackGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hand" => Ok(LuggageType::Hand),
            "carry_on" => Ok(LuggageType::CarryOn),
            "checked" => Ok(LuggageType::Checked),
            other => Err(PackGenError::validation(format!(
                "unknown luggage type '{other}', expected one of: hand, carry_on, checked"
            ))),
        }
    }
}

impl fmt::Display for LuggageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripPurpose {
    Business,
    Leisure,
}

impl TripPurpose {
    #[must_use]
    pub fn from_business_flag(is_business: bool) -> Self {
        if is_business {
            TripPurpose::Business
        } else {
            TripPurpose::Leisure
        }
    }
}

/// Sampled parameters for a single packing list
///
/// Created fresh per record and consumed by the builder.
#[derive(Debug, Clone, PartialEq)]
pub struct TripContext {
    pub gender: Gender,
    pub age: u32,
    /// Trip length in days, 1 to `MAX_TRIP_DAYS`
    pub duration_days: u32,
    /// Average temperature at the destination in Celsius
    pub avg_temp: f64,
    pub luggage: LuggageType,
    pub is_business: bool,
}

impl TripContext {
    /// Create a trip context, rejecting trip lengths outside
    /// `1..=MAX_TRIP_DAYS` and non-finite temperatures
    pub fn new(
        gender: Gender,
        age: u32,
        duration_days: u32,
        avg_temp: f64,
        luggage: LuggageType,
        is_business: bool,
    ) -> Result<Self> {
        if duration_days == 0 {
            return Err(PackGenError::validation(
                "trip duration must be at least 1 day",
            ));
        }
        if duration_days > MAX_TRIP_DAYS {
            return Err(PackGenError::validation(format!(
                "trip duration of {duration_days} days exceeds the {MAX_TRIP_DAYS} day maximum"
            )));
        }
        if !avg_temp.is_finite() {
            return Err(PackGenError::validation(format!(
                "average temperature must be a finite number, got {avg_temp}"
            )));
        }

        Ok(Self {
            gender,
            age,
            duration_days,
            avg_temp,
            luggage,
            is_business,
        })
    }

    #[must_use]
    pub fn purpose(&self) -> TripPurpose {
        TripPurpose::from_business_flag(self.is_business)
    }
}
