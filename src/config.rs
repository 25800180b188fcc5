//! Configuration management for `packgen`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::PackGenError;
use crate::models::MAX_TRIP_DAYS;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackGenConfig {
    /// Sampling ranges for synthesized trips
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Where the dataset is written
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Trip sampling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of records to generate
    #[serde(default = "default_records")]
    pub records: usize,
    /// Seed for reproducible runs; a fresh seed is drawn when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Path to the destination catalog JSON file
    #[serde(default = "default_destinations_file")]
    pub destinations_file: String,
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    #[serde(default = "default_max_age")]
    pub max_age: u32,
    /// Earliest trip start, in days from today
    #[serde(default = "default_min_lead_days")]
    pub min_lead_days: u32,
    /// Latest trip start, in days from today
    #[serde(default = "default_max_lead_days")]
    pub max_lead_days: u32,
    #[serde(default = "default_min_duration_days")]
    pub min_duration_days: u32,
    #[serde(default = "default_max_duration_days")]
    pub max_duration_days: u32,
    /// Trips up to this length travel with hand or carry-on luggage
    #[serde(default = "default_short_trip_days")]
    pub short_trip_days: u32,
    /// Chance of a business trip for travelers in the business age range
    #[serde(default = "default_business_probability")]
    pub business_probability: f64,
    #[serde(default = "default_business_min_age")]
    pub business_min_age: u32,
    #[serde(default = "default_business_max_age")]
    pub business_max_age: u32,
}

/// Output file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV file path
    #[serde(default = "default_output_path")]
    pub path: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_records() -> usize {
    1000
}

fn default_destinations_file() -> String {
    "destinations.json".to_string()
}

fn default_min_age() -> u32 {
    18
}

fn default_max_age() -> u32 {
    75
}

fn default_min_lead_days() -> u32 {
    1
}

fn default_max_lead_days() -> u32 {
    365
}

fn default_min_duration_days() -> u32 {
    3
}

fn default_max_duration_days() -> u32 {
    14
}

fn default_short_trip_days() -> u32 {
    3
}

fn default_business_probability() -> f64 {
    0.3
}

fn default_business_min_age() -> u32 {
    25
}

fn default_business_max_age() -> u32 {
    65
}

fn default_output_path() -> String {
    "travel_packing_data.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            records: default_records(),
            seed: None,
            destinations_file: default_destinations_file(),
            min_age: default_min_age(),
            max_age: default_max_age(),
            min_lead_days: default_min_lead_days(),
            max_lead_days: default_max_lead_days(),
            min_duration_days: default_min_duration_days(),
            max_duration_days: default_max_duration_days(),
            short_trip_days: default_short_trip_days(),
            business_probability: default_business_probability(),
            business_min_age: default_business_min_age(),
            business_max_age: default_business_max_age(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl PackGenConfig {
    /// Load configuration from the given file, or the default location when
    /// `None`, then apply environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. PACKGEN_GENERATION__RECORDS=50
        builder = builder.add_source(
            Environment::with_prefix("PACKGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PackGenConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("packgen").join("config.toml"))
    }

    /// Apply default values to empty string fields
    pub fn apply_defaults(&mut self) {
        if self.generation.destinations_file.is_empty() {
            self.generation.destinations_file = default_destinations_file();
        }
        if self.output.path.is_empty() {
            self.output.path = default_output_path();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate sampling ranges
    fn validate_ranges(&self) -> Result<()> {
        let g = &self.generation;

        let ranges = [
            ("age", g.min_age, g.max_age),
            ("lead days", g.min_lead_days, g.max_lead_days),
            ("duration days", g.min_duration_days, g.max_duration_days),
            ("business age", g.business_min_age, g.business_max_age),
        ];
        for (name, min, max) in ranges {
            if min > max {
                return Err(PackGenError::config(format!(
                    "Invalid {name} range: minimum {min} exceeds maximum {max}"
                ))
                .into());
            }
        }

        if g.min_duration_days == 0 {
            return Err(PackGenError::config("Trips must last at least 1 day").into());
        }
        if g.max_duration_days > MAX_TRIP_DAYS {
            return Err(PackGenError::config(format!(
                "Trips can last at most {MAX_TRIP_DAYS} days, got {}",
                g.max_duration_days
            ))
            .into());
        }

        if !(0.0..=1.0).contains(&g.business_probability) {
            return Err(PackGenError::config(format!(
                "Business probability must be between 0 and 1, got {}",
                g.business_probability
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PackGenError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PackGenError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
