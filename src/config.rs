//! Optional TOML configuration: the starting values of the form and the
//! document title.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::FormState;
use crate::form::FieldError;
use crate::model::Field;
use crate::report::DEFAULT_TITLE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid default for {field}: {source}")]
    InvalidDefault { field: Field, source: FieldError },
}

/// Starting form values. Anything left out keeps the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub duration: Option<u32>,
    pub km: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
    pub residual_value: Option<Decimal>,
    pub rental_fee: Option<Decimal>,
    pub fuel: Option<Decimal>,
    pub segment: Option<String>,
    pub is_business: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title: String,
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            defaults: Defaults::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the starting form. Defaults pass the same validation as user
    /// edits, so a bad value here stops startup.
    pub fn initial_state(&self) -> Result<FormState, ConfigError> {
        let d = &self.defaults;
        let overrides = [
            (Field::Duration, d.duration.map(|v| v.to_string())),
            (Field::Km, d.km.map(|v| v.to_string())),
            (Field::PurchasePrice, d.purchase_price.map(|v| v.to_string())),
            (Field::ResidualValue, d.residual_value.map(|v| v.to_string())),
            (Field::RentalFee, d.rental_fee.map(|v| v.to_string())),
            (Field::Fuel, d.fuel.map(|v| v.to_string())),
            (Field::Segment, d.segment.clone()),
            (Field::IsBusiness, d.is_business.map(|v| v.to_string())),
        ];

        let mut state = FormState::new();
        for (field, value) in overrides {
            if let Some(value) = value {
                state
                    .set(field, &value)
                    .map_err(|source| ConfigError::InvalidDefault { field, source })?;
            }
        }
        Ok(state)
    }
}
