//! Garden settings with documented defaults.
//!
//! The browser may carry a JSON override under the localStorage key
//! [`CONFIG_STORAGE_KEY`]. It is read once at startup and never written back.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_STORAGE_KEY: &str = "garden_config";

/// Upper bound for `rows` and `columns`.
pub const MAX_DIMENSION: u32 = 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed garden config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be at most {max}, got {value}", max = MAX_DIMENSION)]
    DimensionOutOfRange { field: &'static str, value: u32 },

    #[error("species symbol `{0}` is empty")]
    EmptySpecies(&'static str),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub rows: u32,
    pub columns: u32,
    /// Chance that a position exists in the generated garden.
    pub presence_probability: f64,
    /// Chance that an existing position starts with a plant.
    pub plant_probability: f64,
    /// Species of plants placed by the generator.
    pub seed_species: String,
    /// Species placed when bare soil is activated.
    pub planted_species: String,
    pub log_level: LevelFilter,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 8,
            presence_probability: 0.75,
            plant_probability: 0.1,
            seed_species: "🌿".to_string(),
            planted_species: "🌵".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl GardenConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: GardenConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("rows", self.rows), ("columns", self.columns)] {
            if value > MAX_DIMENSION {
                return Err(ConfigError::DimensionOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("presence_probability", self.presence_probability),
            ("plant_probability", self.plant_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { field, value });
            }
        }
        if self.seed_species.trim().is_empty() {
            return Err(ConfigError::EmptySpecies("seed_species"));
        }
        if self.planted_species.trim().is_empty() {
            return Err(ConfigError::EmptySpecies("planted_species"));
        }
        Ok(())
    }
}

/// Reads the stored override, falling back to defaults when storage is
/// unavailable, the key is missing, or the value does not validate.
pub fn load_config() -> GardenConfig {
    let raw = web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
    let Some(raw) = raw else {
        return GardenConfig::default();
    };
    match GardenConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("loaded garden config from `{}`", CONFIG_STORAGE_KEY);
            config
        }
        Err(err) => {
            log::warn!("ignoring stored garden config: {}", err);
            GardenConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GardenConfig::default();
        assert_eq!((config.rows, config.columns), (5, 8));
        assert_eq!(config.presence_probability, 0.75);
        assert_eq!(config.plant_probability, 0.1);
        assert_eq!(config.seed_species, "🌿");
        assert_eq!(config.planted_species, "🌵");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = GardenConfig::from_json(r#"{ "rows": 12, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.columns, 8);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GardenConfig::from_json("{ rows: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let err = GardenConfig::from_json(r#"{ "plant_probability": 1.5 }"#).unwrap_err();
        match err {
            ConfigError::ProbabilityOutOfRange { field, value } => {
                assert_eq!(field, "plant_probability");
                assert_eq!(value, 1.5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn oversized_dimension_is_rejected() {
        let config = GardenConfig {
            rows: 1,
            columns: u32::MAX,
            presence_probability: 1.0,
            ..Default::default()
        };
        match config.validate().unwrap_err() {
            ConfigError::DimensionOutOfRange { field, value } => {
                assert_eq!(field, "columns");
                assert_eq!(value, u32::MAX);
            }
            other => panic!("unexpected error: {other}"),
        }
        let err = GardenConfig::from_json(r#"{ "rows": 1025 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::DimensionOutOfRange { field: "rows", value: 1025 }));
    }

    #[test]
    fn dimension_bounds_are_inclusive() {
        assert!(GardenConfig::from_json(r#"{ "rows": 0 }"#).is_ok());
        assert!(GardenConfig::from_json(r#"{ "rows": 1024, "columns": 1024 }"#).is_ok());
    }

    #[test]
    fn empty_species_is_rejected() {
        let err = GardenConfig::from_json(r#"{ "planted_species": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySpecies("planted_species")));
    }
}
